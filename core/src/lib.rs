#![deny(missing_docs)]

//! # CSS Patch Core
//!
//! Rewrites the prompt-card summary block of the relay log uploader popup
//! stylesheet using exact literal matching.

/// Shared error types.
pub mod error;

/// Stylesheet patching.
pub mod patcher;

pub use error::{AppError, AppResult};
pub use patcher::summary::{
    DEFAULT_TARGET, FALLBACK_MARKER, FALLBACK_RULE, NEW_SUMMARY_BLOCK, OLD_SUMMARY_BLOCK,
    SUMMARY_MARKER,
};
pub use patcher::{
    append_if_missing, apply_summary_patch, replace_block, run, run_with, PatchOutcome, RunOptions,
};
