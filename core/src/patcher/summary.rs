//! The prompt-card summary recipe.
//!
//! Swaps the floated `▾`/`▴` summary arrows for a flex header with a
//! `.prompt-summary__meta` label and arrows on the last `span`, then makes
//! sure the `button.small` rule exists.

use super::text::{append_if_missing, replace_block};
use crate::error::{AppError, AppResult};

/// Historical location of the stylesheet on the operator's machine.
pub const DEFAULT_TARGET: &str = r"C:\Users\User\relay\packages\relay-log-uploader\popup.css";

/// Summary styling as shipped before the flex header.
pub const OLD_SUMMARY_BLOCK: &str = r#".prompt-card summary {
  list-style: none;
  cursor: pointer;
  font-size: 11px;
  text-transform: uppercase;
  letter-spacing: 0.1em;
  color: var(--muted);
}

.prompt-card summary::-webkit-details-marker {
  display: none;
}

.prompt-card summary::after {
  content: "▾";
  float: right;
  color: var(--muted);
}

.prompt-card[open] summary::after {
  content: "▴";
}
"#;

/// Flex summary header with the meta label.
pub const NEW_SUMMARY_BLOCK: &str = r#".prompt-card summary {
  list-style: none;
  cursor: pointer;
  font-size: 11px;
  text-transform: uppercase;
  letter-spacing: 0.1em;
  color: var(--muted);
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.prompt-card summary::-webkit-details-marker {
  display: none;
}

.prompt-summary__meta {
  font-size: 10px;
  letter-spacing: 0.16em;
  color: var(--accent-bright);
}

.prompt-card summary::after {
  content: "";
}

.prompt-card summary span:last-child::after {
  content: " v";
  margin-left: 6px;
  color: var(--muted);
}

.prompt-card[open] summary span:last-child::after {
  content: " ^";
}
"#;

/// Only present once the new summary block is in place.
pub const SUMMARY_MARKER: &str = "prompt-summary__meta";

/// Presence of this selector means the fallback rule is already there.
pub const FALLBACK_MARKER: &str = "button.small";

/// Appended when `FALLBACK_MARKER` is absent.
pub const FALLBACK_RULE: &str =
    "\nbutton.small {\n  font-size: 10px;\n  padding: 6px 10px;\n  letter-spacing: 0.12em;\n}\n";

/// What a patch run did to the stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PatchOutcome {
    /// Occurrences of the old summary block that were replaced.
    pub replacements: usize,
    /// Whether the `button.small` rule was appended.
    pub appended_fallback: bool,
    /// Whether the result was written back to disk.
    pub written: bool,
}

/// Applies the summary recipe to `source` in memory.
///
/// Fails with [`AppError::SummaryNotUpdated`] when the summary marker is
/// missing after substitution. `written` is always `false` in the returned
/// outcome.
pub fn apply_summary_patch(source: &str) -> AppResult<(String, PatchOutcome)> {
    let (text, replacements) = replace_block(source, OLD_SUMMARY_BLOCK, NEW_SUMMARY_BLOCK);

    if !text.contains(SUMMARY_MARKER) {
        return Err(AppError::SummaryNotUpdated);
    }

    let (text, appended_fallback) = append_if_missing(&text, FALLBACK_MARKER, FALLBACK_RULE);

    Ok((
        text,
        PatchOutcome {
            replacements,
            appended_fallback,
            written: false,
        },
    ))
}
