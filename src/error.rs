use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failure classes for one invocation. Every error is terminal: it is
/// reported once on stderr and the process exits non-zero.
#[derive(Debug, Error)]
pub enum PicaError {
    #[error("cannot read {}: {reason}", path.display())]
    Input { path: PathBuf, reason: String },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("cannot write {}: {reason}", path.display())]
    Output { path: PathBuf, reason: String },
}

impl PicaError {
    pub fn input(path: &Path, reason: impl ToString) -> Self {
        Self::Input {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParameter(reason.into())
    }

    pub fn output(path: &Path, reason: impl ToString) -> Self {
        Self::Output {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PicaError>;
