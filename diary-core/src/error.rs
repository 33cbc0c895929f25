//! Error types for the diary ecosystem.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur in diary operations.
///
/// A missing entry is not an error for reads: absent dates return empty
/// content. Tagging a date that has no entry is [`DiaryError::NoEntry`].
#[derive(Error, Debug)]
pub enum DiaryError {
    #[error("Storage error at {}: {source}", .path.display())]
    StorageIO {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid date {0}")]
    InvalidDate(String),

    #[error("Unknown mood '{0}'")]
    UnknownMood(String),

    #[error("No entry for {0}")]
    NoEntry(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl DiaryError {
    pub fn storage(path: &Path, source: std::io::Error) -> Self {
        DiaryError::StorageIO {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Result type alias for diary operations.
pub type DiaryResult<T> = Result<T, DiaryError>;
