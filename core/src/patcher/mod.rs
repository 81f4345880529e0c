#![deny(missing_docs)]

//! # Stylesheet Patching
//!
//! Literal text patching of the popup stylesheet.
//!
//! - **text**: Pure string operations (replace-all, append-if-missing).
//! - **summary**: The fixed prompt-card summary recipe and its in-memory application.
//! - **files**: Reading, patching and writing the target file.

/// Pure string operations.
pub mod text;

/// The prompt-card summary recipe.
pub mod summary;

/// File-level patch execution.
pub mod files;

pub use files::{run, run_with, RunOptions};
pub use summary::{apply_summary_patch, PatchOutcome};
pub use text::{append_if_missing, replace_block};
