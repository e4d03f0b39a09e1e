//! # tvb - TheVirtualBrain bootstrap layer
//!
//! Selects the execution profile of TheVirtualBrain and describes the
//! scientific library package.
//!
//! ## Features
//!
//! - **Profile Selection**: `-profile <NAME>` anywhere in the process arguments
//! - **Library Mode**: forced when the framework companion is not installed
//! - **Explicit Context**: profile and framework availability decided once at startup
//! - **Package Metadata**: name, version, authors and requirements, with
//!   install-time generation and cleanup of the metadata directory
//!
//! ## Quick Start
//!
//! ```
//! use tvb::profile::{ProfileContext, StaticProbe};
//!
//! let mut argv = vec!["-profile".to_string(), "DEVELOPMENT_PROFILE".to_string()];
//! let context = ProfileContext::from_args(&mut argv, true, &StaticProbe(true));
//!
//! assert!(argv.is_empty());
//! assert_eq!(context.selected(), Some("DEVELOPMENT_PROFILE"));
//! assert!(!context.is_library_mode());
//! ```
//!
//! ## Package Metadata
//!
//! ```no_run
//! use tvb::package::PackageDescriptor;
//! use std::path::Path;
//!
//! let report = PackageDescriptor::tvb().install(Path::new("build")).unwrap();
//! assert!(!report.metadata_dir.exists());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod package;
pub mod profile;

// Re-export commonly used types
pub use error::{Result, TvbError};
pub use package::PackageDescriptor;
pub use profile::{ProfileContext, TvbProfile};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    //! Convenient re-exports for common usage
    //!
    //! ```
    //! use tvb::prelude::*;
    //! ```

    pub use crate::error::{Result, TvbError};
    pub use crate::package::{InstallReport, PackageDescriptor};
    pub use crate::profile::{
        find_profile, FrameworkProbe, ProfileContext, SettingsFileProbe, StaticProbe, TvbProfile,
    };
}
