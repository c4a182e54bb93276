//! # Storage Layer
//!
//! This module defines the file access abstraction for ktfix. The
//! [`SourceStore`] trait is deliberately narrow: the repairs read a whole
//! file into memory, transform it, and write the whole file back. There is
//! no streaming, no partial writes, and no locking; callers must not run two
//! instances against the same file concurrently.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production store over `std::fs`
//! - [`memory::InMemoryStore`]: In-memory store for testing, no persistence

use crate::error::Result;
use std::path::Path;

pub mod fs;
pub mod memory;

/// Abstract interface for whole-file source access.
pub trait SourceStore {
    /// Whether a source file exists at the given path
    fn exists(&self, path: &Path) -> bool;

    /// Read the full text of a source file
    fn read(&self, path: &Path) -> Result<String>;

    /// Write the full text of a source file, replacing prior contents
    fn write(&mut self, path: &Path, content: &str) -> Result<()>;
}
