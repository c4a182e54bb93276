use super::SourceStore;
use crate::error::{KtfixError, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// In-memory store for testing.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    files: HashMap<PathBuf, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }

    pub fn get(&self, path: &Path) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }
}

impl SourceStore for InMemoryStore {
    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn read(&self, path: &Path) -> Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| KtfixError::FileNotFound(path.to_path_buf()))
    }

    fn write(&mut self, path: &Path, content: &str) -> Result<()> {
        self.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
