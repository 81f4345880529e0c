#![deny(missing_docs)]

//! # CSS Patch CLI
//!
//! Applies the prompt-card summary patch to the relay log uploader popup
//! stylesheet.

use clap::Parser;
use std::process::ExitCode;

mod patch;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Prompt-card summary stylesheet patcher")]
struct Cli {
    #[clap(flatten)]
    patch: patch::PatchArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match patch::execute(&cli.patch) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_to_historical_path() {
        let cli = Cli::try_parse_from(["css-patch"]).unwrap();
        assert_eq!(
            cli.patch.path,
            std::path::PathBuf::from(css_patch_core::DEFAULT_TARGET)
        );
        assert!(!cli.patch.dry_run);
    }

    #[test]
    fn test_parses_path_and_dry_run() {
        let cli = Cli::try_parse_from(["css-patch", "--path", "popup.css", "--dry-run"]).unwrap();
        assert_eq!(cli.patch.path, std::path::PathBuf::from("popup.css"));
        assert!(cli.patch.dry_run);
    }
}
