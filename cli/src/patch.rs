#![deny(missing_docs)]

//! # Patch Command
//!
//! Rewrites the summary block of `popup.css`:
//! 1. Replaces the floated arrow summary styling with the flex header.
//! 2. Refuses to write if `prompt-summary__meta` is still missing.
//! 3. Appends the `button.small` rule when absent.

use css_patch_core::{run_with, AppResult, RunOptions, DEFAULT_TARGET};
use std::path::PathBuf;

/// Arguments for the patch command.
#[derive(clap::Args, Debug, Clone)]
pub struct PatchArgs {
    /// Path to the stylesheet to patch.
    #[clap(long, default_value = DEFAULT_TARGET)]
    pub path: PathBuf,

    /// Validate and report without writing the file.
    #[clap(long)]
    pub dry_run: bool,
}

/// Executes the patch against `args.path`.
pub fn execute(args: &PatchArgs) -> AppResult<()> {
    println!("Patching summary block in {:?}...", args.path);

    let outcome = run_with(
        &args.path,
        RunOptions {
            dry_run: args.dry_run,
        },
    )?;

    println!("Replaced {} summary block(s).", outcome.replacements);
    if outcome.appended_fallback {
        println!("Appended button.small rule.");
    }

    if outcome.written {
        println!("Patch completed successfully.");
    } else {
        println!("Dry run: {:?} left unchanged.", args.path);
    }

    Ok(())
}
