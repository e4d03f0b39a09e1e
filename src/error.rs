//! Error types for tvb
//!
//! Absent profile flags and a missing framework are normal conditions and
//! never surface here. Errors cover metadata I/O, configuration and writes
//! to a sealed process-wide profile.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tvb operations
#[derive(Error, Debug)]
pub enum TvbError {
    /// I/O error while writing or removing package metadata
    #[error("I/O error at '{path}': {source}")]
    Io {
        /// Path being written or removed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Tag is not one of the known profile constants
    #[error("Unknown profile: {0}")]
    UnknownProfile(String),

    /// The process-wide profile was sealed before this write
    #[error("Profile already frozen as {current:?}; refusing to apply '{requested}'")]
    ProfileFrozen {
        /// Profile in effect when the state was sealed
        current: Option<String>,
        /// Profile the rejected call asked for
        requested: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Metadata serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl TvbError {
    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError(message.into())
    }

    /// Get the path associated with this error, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Result type alias for tvb operations
pub type Result<T> = std::result::Result<T, TvbError>;

impl From<std::io::Error> for TvbError {
    fn from(err: std::io::Error) -> Self {
        TvbError::Io {
            path: PathBuf::new(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for TvbError {
    fn from(err: serde_json::Error) -> Self {
        TvbError::Serialization(err.to_string())
    }
}

/// Extension trait for adding path context to std::io::Result
pub trait IoResultExt<T> {
    /// Add path context to an I/O error
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|e| TvbError::io(path, e))
    }
}
