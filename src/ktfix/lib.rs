//! # Ktfix Architecture
//!
//! Ktfix is a **repair library** for delimiter imbalances in Kotlin sources,
//! with a thin CLI client on top. Automated rewrites of the
//! `_uiState.update { it.copy(...) }` pattern tend to drop or misplace closing
//! tokens; ktfix restores them without understanding Kotlin syntax beyond
//! counting delimiters.
//!
//! ## The Layers
//!
//! ```text
//! CLI Layer (main.rs, args.rs, print.rs)
//!   - Parses arguments, prints colored diagnostics, owns exit codes
//!   - The ONLY place that touches stdout/stderr or calls process::exit
//!          |
//!          v
//! API Layer (api.rs)
//!   - KtfixApi<S: SourceStore>: per-file batch orchestration
//!   - Reads, repairs, writes back only when content changed
//!   - Downgrades per-file failures to messages so a batch never aborts
//!          |
//!          v
//! Command Layer (commands/*.rs)
//!   - Pure repair functions over SourceBuffer, no I/O assumptions
//!   - braces: whole-buffer closing-brace deficit
//!   - chains: unterminated `.update { it.copy(` call chains
//!          |
//!          v
//! Storage Layer (store/)
//!   - SourceStore trait: whole-file read/write/exists
//!   - FileStore (production), InMemoryStore (testing)
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns regular
//! Rust types, never writes to stdout/stderr, and never exits the process.
//! The CLI is one possible client; tests drive the same API against an
//! in-memory store.
//!
//! ## Known Limitations
//!
//! Every `{`, `}`, `(` and `)` is counted as structural, including those
//! inside string literals and comments. Inputs that carry delimiters in such
//! positions can produce wrong deficit counts; callers are expected to run
//! ktfix only on files known not to contain them. Repairs are best-effort
//! and advisory: anything outside the narrow recognized shapes is left
//! byte-identical, and a human reviews the result.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: The pure repair passes
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`SourceBuffer`, `DelimiterCount`, edits)
//! - [`config`]: Optional `.ktfix.json` configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
