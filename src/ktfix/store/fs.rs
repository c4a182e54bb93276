use super::SourceStore;
use crate::error::{KtfixError, Result};
use std::fs;
use std::path::Path;

/// Production store backed by the real file system.
#[derive(Debug, Default)]
pub struct FileStore;

impl FileStore {
    pub fn new() -> Self {
        Self
    }
}

impl SourceStore for FileStore {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(KtfixError::FileNotFound(path.to_path_buf()));
        }
        fs::read_to_string(path).map_err(KtfixError::Io)
    }

    fn write(&mut self, path: &Path, content: &str) -> Result<()> {
        fs::write(path, content).map_err(KtfixError::Io)
    }
}
