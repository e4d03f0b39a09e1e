//! Profile constants and `-profile` argument handling
//!
//! Profiles are identified by their string tag. The selector never validates
//! the value following the marker; unknown tags are carried verbatim and only
//! [`TvbProfile::from_str`](std::str::FromStr) is strict.

use crate::error::TvbError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Marker token preceding the profile name in an argument list
pub const SUBPARAM_PROFILE: &str = "-profile";

/// Known execution profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TvbProfile {
    /// Scientific library only, no framework
    #[serde(rename = "LIBRARY_PROFILE")]
    Library,
    /// Framework development
    #[serde(rename = "DEVELOPMENT_PROFILE")]
    Development,
    /// Test suite against PostgreSQL
    #[serde(rename = "TEST_POSTGRES_PROFILE")]
    TestPostgres,
    /// Test suite against SQLite
    #[serde(rename = "TEST_SQLITE_PROFILE")]
    TestSqlite,
    /// Packaged deployment
    #[serde(rename = "DEPLOYMENT_PROFILE")]
    Deployment,
    /// Interactive console
    #[serde(rename = "CONSOLE_PROFILE")]
    Console,
}

impl TvbProfile {
    /// All known profiles, in declaration order
    pub const ALL: [TvbProfile; 6] = [
        Self::Library,
        Self::Development,
        Self::TestPostgres,
        Self::TestSqlite,
        Self::Deployment,
        Self::Console,
    ];

    /// Tag used on the command line and stored as the selected profile
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Library => "LIBRARY_PROFILE",
            Self::Development => "DEVELOPMENT_PROFILE",
            Self::TestPostgres => "TEST_POSTGRES_PROFILE",
            Self::TestSqlite => "TEST_SQLITE_PROFILE",
            Self::Deployment => "DEPLOYMENT_PROFILE",
            Self::Console => "CONSOLE_PROFILE",
        }
    }

    /// Short human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::Library => "scientific library only",
            Self::Development => "framework development",
            Self::TestPostgres => "tests against PostgreSQL",
            Self::TestSqlite => "tests against SQLite",
            Self::Deployment => "packaged deployment",
            Self::Console => "interactive console",
        }
    }
}

impl fmt::Display for TvbProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TvbProfile {
    type Err = TvbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|profile| profile.as_str() == s)
            .ok_or_else(|| TvbError::UnknownProfile(s.to_string()))
    }
}

/// Return the profile named after the first `-profile` marker, if any.
///
/// A marker in last position has no value and yields `None`.
pub fn find_profile<S: AsRef<str>>(script_argv: &[S]) -> Option<&str> {
    let index = script_argv
        .iter()
        .position(|arg| arg.as_ref() == SUBPARAM_PROFILE)?;

    script_argv.get(index + 1).map(|arg| arg.as_ref())
}

/// Find the profile and optionally strip the marker and value from `script_argv`.
///
/// Removal is by value: the first token equal to the profile name goes first,
/// then the first marker. When the name also appears earlier in the list, that
/// earlier token is the one removed.
pub(crate) fn take_profile(
    script_argv: &mut Vec<String>,
    remove_from_args: bool,
) -> Option<String> {
    let selected = find_profile(script_argv.as_slice())?.to_string();

    if remove_from_args {
        remove_first(script_argv, &selected);
        remove_first(script_argv, SUBPARAM_PROFILE);
    }

    Some(selected)
}

fn remove_first(args: &mut Vec<String>, value: &str) {
    if let Some(index) = args.iter().position(|arg| arg == value) {
        args.remove(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn argv(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_find_profile_in_middle() {
        let args = ["a", "-profile", "DEVELOPMENT_PROFILE", "b"];
        assert_eq!(find_profile(&args), Some("DEVELOPMENT_PROFILE"));
    }

    #[test]
    fn test_find_profile_marker_last() {
        assert_eq!(find_profile(&["-profile"]), None);
        assert_eq!(find_profile(&["x", "-profile"]), None);
    }

    #[test]
    fn test_find_profile_absent() {
        let empty: [&str; 0] = [];
        assert_eq!(find_profile(&empty), None);
        assert_eq!(find_profile(&["--profile", "X", "profile"]), None);
    }

    #[test]
    fn test_find_profile_first_match() {
        let args = argv(&["-profile", "CONSOLE_PROFILE", "-profile", "LIBRARY_PROFILE"]);
        assert_eq!(find_profile(args.as_slice()), Some("CONSOLE_PROFILE"));
    }

    #[test]
    fn test_take_profile_removes_tokens() {
        let mut args = argv(&["-profile", "X"]);
        assert_eq!(take_profile(&mut args, true).as_deref(), Some("X"));
        assert!(args.is_empty());

        let mut args = argv(&["run", "-profile", "TEST_SQLITE_PROFILE", "--fast"]);
        take_profile(&mut args, true);
        assert_eq!(args, argv(&["run", "--fast"]));
    }

    #[test]
    fn test_take_profile_keeps_tokens() {
        let mut args = argv(&["a", "-profile", "X", "b"]);
        assert_eq!(take_profile(&mut args, false).as_deref(), Some("X"));
        assert_eq!(args, argv(&["a", "-profile", "X", "b"]));
    }

    #[test]
    fn test_take_profile_without_marker_is_noop() {
        let mut args = argv(&["a", "b", "-profile"]);
        assert_eq!(take_profile(&mut args, true), None);
        assert_eq!(args, argv(&["a", "b", "-profile"]));
    }

    #[test]
    fn test_take_profile_duplicate_name_removes_first_by_value() {
        let mut args = argv(&["X", "-profile", "X"]);
        assert_eq!(take_profile(&mut args, true).as_deref(), Some("X"));
        assert_eq!(args, argv(&["X"]));
    }

    #[test]
    fn test_profile_tags() {
        for profile in TvbProfile::ALL {
            assert_eq!(profile.as_str().parse::<TvbProfile>().unwrap(), profile);
            assert_eq!(profile.to_string(), profile.as_str());
        }
        assert!(matches!(
            "library_profile".parse::<TvbProfile>(),
            Err(TvbError::UnknownProfile(_))
        ));
    }

    #[test]
    fn test_profile_serde_uses_tags() {
        let json = serde_json::to_string(&TvbProfile::TestPostgres).unwrap();
        assert_eq!(json, "\"TEST_POSTGRES_PROFILE\"");
    }

    proptest! {
        #[test]
        fn prop_no_marker_means_no_profile(
            args in proptest::collection::vec("[a-zA-Z_ ]{0,12}", 0..8)
        ) {
            prop_assert_eq!(find_profile(args.as_slice()), None);
        }
    }
}
