use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KtfixError {
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, KtfixError>;
