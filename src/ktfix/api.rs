//! # API Facade
//!
//! `KtfixApi` is the single entry point for all repairs, regardless of the
//! client driving it. It owns batch orchestration: every requested path is
//! attempted in argument order, and any per-file failure (missing path,
//! unreadable content, failed write) becomes a diagnostic message on that
//! file's report instead of an error, so one bad path never aborts the rest
//! of the batch.
//!
//! Files are written back only when a repair actually changed the content,
//! and never in dry-run mode. The facade is generic over [`SourceStore`], so
//! tests drive it against an in-memory store while the CLI uses the real
//! file system.

use crate::commands::{self, RepairResult};
use crate::config::KtfixConfig;
use crate::model::SourceBuffer;
use crate::store::SourceStore;
use std::path::{Path, PathBuf};

pub use crate::commands::{CmdMessage, MessageLevel};

/// Diagnostics for one attempted file.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub changed: bool,
    pub messages: Vec<CmdMessage>,
}

impl FileReport {
    fn failed(path: &Path, message: CmdMessage) -> Self {
        Self {
            path: path.to_path_buf(),
            changed: false,
            messages: vec![message],
        }
    }
}

/// Reports for a whole batch, in the order the paths were given.
#[derive(Debug, Default)]
pub struct BatchResult {
    pub reports: Vec<FileReport>,
}

impl BatchResult {
    pub fn changed_files(&self) -> usize {
        self.reports.iter().filter(|r| r.changed).count()
    }
}

/// The main API facade for ktfix operations.
///
/// Generic over `SourceStore` to allow different storage backends.
pub struct KtfixApi<S: SourceStore> {
    store: S,
    config: KtfixConfig,
}

impl<S: SourceStore> KtfixApi<S> {
    pub fn new(store: S, config: KtfixConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run the whole-buffer brace-deficit repair over each path.
    pub fn repair_braces(&mut self, paths: &[PathBuf], dry_run: bool) -> BatchResult {
        self.repair_batch(paths, dry_run, |buffer, _| commands::braces::run(buffer))
    }

    /// Run the call-chain closing-token repair over each path.
    pub fn repair_chains(&mut self, paths: &[PathBuf], dry_run: bool) -> BatchResult {
        self.repair_batch(paths, dry_run, |buffer, config| {
            commands::chains::run(buffer, config.state_identifier.as_deref())
        })
    }

    fn repair_batch<F>(&mut self, paths: &[PathBuf], dry_run: bool, repair: F) -> BatchResult
    where
        F: Fn(&SourceBuffer, &KtfixConfig) -> RepairResult,
    {
        let mut batch = BatchResult::default();
        for path in paths {
            batch.reports.push(self.repair_file(path, dry_run, &repair));
        }
        batch
    }

    fn repair_file<F>(&mut self, path: &Path, dry_run: bool, repair: &F) -> FileReport
    where
        F: Fn(&SourceBuffer, &KtfixConfig) -> RepairResult,
    {
        if !self.store.exists(path) {
            return FileReport::failed(path, CmdMessage::error("file not found"));
        }
        let text = match self.store.read(path) {
            Ok(text) => text,
            Err(e) => return FileReport::failed(path, CmdMessage::error(e.to_string())),
        };

        let buffer = SourceBuffer::from_text(&text);
        let result = repair(&buffer, &self.config);
        let mut report = FileReport {
            path: path.to_path_buf(),
            changed: result.changed,
            messages: result.messages,
        };

        if !result.changed {
            return report;
        }
        if dry_run {
            report
                .messages
                .push(CmdMessage::info("dry run, file not written"));
            return report;
        }

        if self.config.backup {
            if let Err(e) = self.store.write(&backup_path(path), &text) {
                report.changed = false;
                report
                    .messages
                    .push(CmdMessage::error(format!("backup failed: {}", e)));
                return report;
            }
        }
        if let Err(e) = self.store.write(path, &result.buffer.to_text()) {
            report.changed = false;
            report
                .messages
                .push(CmdMessage::error(format!("write failed: {}", e)));
        }
        report
    }
}

fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".bak");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    fn api_with(files: &[(&str, &str)]) -> KtfixApi<InMemoryStore> {
        let mut store = InMemoryStore::new();
        for (path, content) in files {
            store.insert(*path, *content);
        }
        KtfixApi::new(store, KtfixConfig::default())
    }

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn repairs_and_writes_back() {
        let mut api = api_with(&[("A.kt", "fun f() {\n")]);
        let batch = api.repair_braces(&paths(&["A.kt"]), false);
        assert_eq!(batch.changed_files(), 1);
        assert_eq!(api.store().get(Path::new("A.kt")), Some("fun f() {\n}\n"));
    }

    #[test]
    fn missing_file_does_not_abort_the_batch() {
        let mut api = api_with(&[("A.kt", "fun a() {\n"), ("C.kt", "fun c() {\n")]);
        let batch = api.repair_braces(&paths(&["A.kt", "B.kt", "C.kt"]), false);

        assert_eq!(batch.reports.len(), 3);
        assert!(batch.reports[0].changed);
        assert!(!batch.reports[1].changed);
        assert!(batch.reports[1].messages[0].content.contains("not found"));
        assert!(batch.reports[2].changed);
        assert_eq!(api.store().get(Path::new("C.kt")), Some("fun c() {\n}\n"));
    }

    #[test]
    fn dry_run_leaves_content_untouched() {
        let mut api = api_with(&[("A.kt", "fun f() {\n")]);
        let batch = api.repair_braces(&paths(&["A.kt"]), true);

        assert!(batch.reports[0].changed);
        assert_eq!(api.store().get(Path::new("A.kt")), Some("fun f() {\n"));
        assert!(batch.reports[0]
            .messages
            .iter()
            .any(|m| m.content.contains("dry run")));
    }

    #[test]
    fn balanced_file_is_not_rewritten() {
        let mut api = api_with(&[("A.kt", "fun f() {\n}\n")]);
        let batch = api.repair_braces(&paths(&["A.kt"]), false);
        assert_eq!(batch.changed_files(), 0);
        assert_eq!(api.store().get(Path::new("A.kt")), Some("fun f() {\n}\n"));
    }

    #[test]
    fn backup_keeps_the_original_content() {
        let mut store = InMemoryStore::new();
        store.insert("A.kt", "fun f() {\n");
        let config = KtfixConfig {
            backup: true,
            ..KtfixConfig::default()
        };
        let mut api = KtfixApi::new(store, config);

        api.repair_braces(&paths(&["A.kt"]), false);
        assert_eq!(api.store().get(Path::new("A.kt.bak")), Some("fun f() {\n"));
        assert_eq!(api.store().get(Path::new("A.kt")), Some("fun f() {\n}\n"));
    }

    #[test]
    fn chain_repair_honors_identifier_filter() {
        let mut store = InMemoryStore::new();
        store.insert("VM.kt", "other.update { it.copy(\n  x = 1\n)\n");
        let config = KtfixConfig {
            state_identifier: Some("_uiState".to_string()),
            ..KtfixConfig::default()
        };
        let mut api = KtfixApi::new(store, config);

        let batch = api.repair_chains(&paths(&["VM.kt"]), false);
        assert_eq!(batch.changed_files(), 0);
        assert_eq!(
            api.store().get(Path::new("VM.kt")),
            Some("other.update { it.copy(\n  x = 1\n)\n")
        );
    }

    #[test]
    fn chain_repair_rewrites_close_line() {
        let mut api = api_with(&[("VM.kt", "  _uiState.update { it.copy(\n      name = x\n  )\n")]);
        let batch = api.repair_chains(&paths(&["VM.kt"]), false);
        assert_eq!(batch.changed_files(), 1);
        assert_eq!(
            api.store().get(Path::new("VM.kt")),
            Some("  _uiState.update { it.copy(\n      name = x\n  ) }\n")
        );
    }
}
