//! Error types
//!
//! `TreeError` covers the pure tree layer (building, lookups, view state).
//! `ApiError` covers the outer surfaces: configuration, input loading, CLI.

use thiserror::Error;

/// Errors raised while building or navigating a forest.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("Path is empty")]
    EmptyPath,

    #[error("Path inserted twice: {0:?}")]
    DuplicatePath(String),

    #[error("Path {id:?} is used both as a file and as a folder")]
    PathCollision { id: String },

    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Not a file: {0}")]
    NotAFile(String),
}

/// Errors raised by configuration, input loading and command execution.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl ApiError {
    pub(crate) fn io(path: impl std::fmt::Display, source: std::io::Error) -> Self {
        ApiError::Io {
            path: path.to_string(),
            source,
        }
    }
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
