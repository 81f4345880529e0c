//! # Error Handling
//!
//! Provides the unified `AppError` enum used by the patcher and the CLI.

use derive_more::{Display, From};

/// The Global Error Enum.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// The summary marker is missing after substitution: the stylesheet no
    /// longer contains the block this patch was written against.
    #[from(ignore)]
    #[display("failed to update summary block")]
    SummaryNotUpdated,
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
