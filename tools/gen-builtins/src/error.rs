//! Generator errors

use std::path::Path;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GenError>;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("reading {path}: {message}")]
    Read { path: String, message: String },

    #[error("writing {path}: {message}")]
    Write { path: String, message: String },

    #[error("{file}: {message}")]
    Upstream { file: String, message: String },
}

impl GenError {
    pub fn read(path: &Path, err: std::io::Error) -> Self {
        Self::Read {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }

    pub fn write(path: &Path, err: std::io::Error) -> Self {
        Self::Write {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }

    pub fn upstream(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Upstream {
            file: file.into(),
            message: message.into(),
        }
    }
}
