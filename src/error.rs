use std::time::Duration;

use thiserror::Error;

/// Classifies word-list loading errors for programmatic matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorKind {
    /// Required path not configured on the loader
    NotConfigured,
    /// File open/read failure
    FileError,
    /// `file:` includes nested deeper than allowed (likely circular)
    IncludeDepth,
}

/// Word finder error types
#[derive(Error, Debug)]
pub enum FinderError {
    #[error("Vocabulary store not ready: canonical word lists are not loaded")]
    NotReady,

    #[error("Word list already registered: {0}")]
    DuplicateKey(String),

    #[error("Word list not registered: {0}")]
    KeyNotFound(String),

    #[error("Load error: {message}")]
    LoadError {
        kind: LoadErrorKind,
        message: String,
    },

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Vocabulary build failed: {0}")]
    BuildFailed(String),

    #[error("Initialization timed out after {0:?}")]
    Timeout(Duration),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl FinderError {
    pub(crate) fn load(kind: LoadErrorKind, message: impl Into<String>) -> Self {
        FinderError::LoadError {
            kind,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FinderError>;
