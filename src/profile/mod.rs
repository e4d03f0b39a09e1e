//! Execution profile selection
//!
//! A profile is chosen from `-profile <NAME>` in the process arguments and
//! decides how the rest of tvb behaves (library only, development, tests,
//! deployment, console). Library mode is also forced whenever the framework
//! companion is not installed.
//!
//! ```
//! use tvb::profile::{ProfileContext, StaticProbe, TvbProfile};
//!
//! let mut argv: Vec<String> = ["simulate", "-profile", "LIBRARY_PROFILE"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//!
//! let context = ProfileContext::from_args(&mut argv, true, &StaticProbe(true));
//! assert_eq!(argv, vec!["simulate".to_string()]);
//! assert_eq!(context.selected_profile(), Some(TvbProfile::Library));
//! assert!(context.is_library_mode());
//! ```

mod context;
pub mod global;
mod selector;

pub use context::{
    FrameworkProbe, ProfileContext, SettingsFileProbe, StaticProbe, FRAMEWORK_SETTINGS_ENV,
};
pub use selector::{find_profile, TvbProfile, SUBPARAM_PROFILE};
pub(crate) use selector::take_profile;
