//! Error types for HTML cleaning.

use std::path::PathBuf;

/// Result type for cleaning operations.
pub type Result<T> = std::result::Result<T, CleanError>;

/// Errors that can occur while cleaning HTML.
///
/// The filter itself never fails on malformed markup; these errors come from the
/// I/O boundary and from configuration.
#[derive(Debug, thiserror::Error)]
pub enum CleanError {
    /// The input file does not exist.
    #[error("File not found - {}", path.display())]
    InputNotFound {
        /// Path that was requested.
        path: PathBuf,
    },

    /// Any other read or write failure, including input that is not valid UTF-8.
    #[error("{}: {source}", path.display())]
    Io {
        /// Path involved in the failed operation.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The cleaning options are inconsistent.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// A configuration file could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CleanError {
    /// Classify a read failure on `path`, keeping "not found" distinct.
    pub(crate) fn from_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::InputNotFound { path }
        } else {
            Self::Io { path, source }
        }
    }
}
