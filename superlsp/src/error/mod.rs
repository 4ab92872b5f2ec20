//! Error types for the fallible edges of the server
//!
//! The completion, hover and signature engines never fail; they degrade to
//! empty results. These errors cover file access, configuration, logging
//! setup, JSON output and registry validation.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, LspError>;

/// Server error
#[derive(Debug, Error)]
pub enum LspError {
    #[error("IO error on {path}: {message}")]
    Io { path: String, message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Registry error for `{name}`: {message}")]
    Registry { name: String, message: String },

    #[error("Logging error: {message}")]
    Logging { message: String },

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LspError {
    pub fn io(path: impl Into<String>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn registry(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Registry {
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Io { message, .. } => message,
            Self::Config { message } => message,
            Self::Registry { message, .. } => message,
            Self::Logging { message } => message,
            Self::Json(_) => "serialization failed",
        }
    }
}
