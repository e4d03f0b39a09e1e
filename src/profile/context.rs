//! Explicit profile context and framework capability probes
//!
//! The composition layer decides once whether the framework is installed and
//! which profile was requested, then hands the resulting [`ProfileContext`]
//! to every component that needs to branch on execution mode.

use super::selector::{take_profile, TvbProfile};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming the framework settings file
pub const FRAMEWORK_SETTINGS_ENV: &str = "TVB_FRAMEWORK_SETTINGS";

/// Decides whether the framework companion is installed
pub trait FrameworkProbe {
    /// True when framework settings can be resolved
    fn framework_available(&self) -> bool;
}

/// Probe with a fixed answer, for callers that already know
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticProbe(pub bool);

impl FrameworkProbe for StaticProbe {
    fn framework_available(&self) -> bool {
        self.0
    }
}

/// Probe that looks for the framework settings file on disk
#[derive(Debug, Clone, Default)]
pub struct SettingsFileProbe {
    path: Option<PathBuf>,
}

impl SettingsFileProbe {
    /// Probe a specific settings file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Probe without a configured path; always reports the framework absent
    pub fn unconfigured() -> Self {
        Self { path: None }
    }

    /// Configured settings path
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl FrameworkProbe for SettingsFileProbe {
    fn framework_available(&self) -> bool {
        match &self.path {
            Some(path) => {
                let found = path.is_file();
                tracing::debug!("Framework settings {:?} present: {}", path, found);
                found
            }
            None => false,
        }
    }
}

/// Execution profile plus framework availability, decided at startup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileContext {
    selected: Option<String>,
    framework_available: bool,
}

impl ProfileContext {
    /// Context with no profile selected
    pub const fn new(framework_available: bool) -> Self {
        Self {
            selected: None,
            framework_available,
        }
    }

    /// Context with no profile selected, asking `probe` once
    pub fn with_probe(probe: &dyn FrameworkProbe) -> Self {
        Self::new(probe.framework_available())
    }

    /// Build a context from process-style arguments.
    ///
    /// Equivalent to [`with_probe`](Self::with_probe) followed by
    /// [`apply_profile`](Self::apply_profile).
    pub fn from_args(
        script_argv: &mut Vec<String>,
        remove_from_args: bool,
        probe: &dyn FrameworkProbe,
    ) -> Self {
        let mut context = Self::with_probe(probe);
        context.apply_profile(script_argv, remove_from_args);
        context
    }

    /// Select the profile named by `-profile` in `script_argv`.
    ///
    /// Without a marker (or without a value after it) nothing changes. When
    /// `remove_from_args` is set the marker and value are stripped from the
    /// caller's list. Returns the newly selected name.
    pub fn apply_profile(
        &mut self,
        script_argv: &mut Vec<String>,
        remove_from_args: bool,
    ) -> Option<&str> {
        let selected = take_profile(script_argv, remove_from_args)?;
        tracing::debug!("Selected profile {}", selected);
        self.selected = Some(selected);
        self.selected.as_deref()
    }

    /// Currently selected profile name
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Selected profile, if it is one of the known constants
    pub fn selected_profile(&self) -> Option<TvbProfile> {
        self.selected.as_deref().and_then(|s| s.parse().ok())
    }

    /// Whether the framework was found at startup
    pub fn framework_available(&self) -> bool {
        self.framework_available
    }

    pub(crate) fn set_framework_available(&mut self, available: bool) {
        self.framework_available = available;
    }

    /// Library mode is forced when the framework is absent; otherwise it
    /// requires `LIBRARY_PROFILE` to be selected.
    pub fn is_library_mode(&self) -> bool {
        !self.framework_available || self.selected.as_deref() == Some(TvbProfile::Library.as_str())
    }
}
