use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum CodedumpError {
    #[error("Directory {0} does not exist")]
    RootNotFound(PathBuf),
    #[error("{0} is not a directory")]
    NotADirectory(PathBuf),
    #[error("Invalid glob pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
impl CodedumpError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CodedumpError::Io {
            path: path.into(),
            source,
        }
    }
}
