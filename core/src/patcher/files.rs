use super::summary::{apply_summary_patch, PatchOutcome};
use crate::error::AppResult;
use std::fs;
use std::io;
use std::path::Path;

/// Options for a patch run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Patch in memory and report the outcome without writing the file.
    pub dry_run: bool,
}

/// Patches the stylesheet at `path` in place.
pub fn run(path: &Path) -> AppResult<PatchOutcome> {
    run_with(path, RunOptions::default())
}

/// Patches the stylesheet at `path`.
///
/// The file is read once and, unless `options.dry_run` is set, written once.
/// Nothing is written if the summary block could not be updated. CRLF files
/// are matched against the LF recipe and written back with CRLF endings.
pub fn run_with(path: &Path, options: RunOptions) -> AppResult<PatchOutcome> {
    let raw = fs::read_to_string(path).map_err(|e| with_path(e, "read", path))?;

    let crlf = raw.contains("\r\n");
    let source = if crlf {
        raw.replace("\r\n", "\n")
    } else {
        raw
    };

    let (patched, mut outcome) = apply_summary_patch(&source)?;

    if options.dry_run {
        return Ok(outcome);
    }

    let patched = if crlf {
        patched.replace('\n', "\r\n")
    } else {
        patched
    };

    fs::write(path, patched).map_err(|e| with_path(e, "write", path))?;
    outcome.written = true;

    Ok(outcome)
}

/// Keeps the error kind, names the file in the message.
fn with_path(e: io::Error, action: &str, path: &Path) -> io::Error {
    io::Error::new(e.kind(), format!("Failed to {} file {:?}: {}", action, path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::patcher::summary::{OLD_SUMMARY_BLOCK, SUMMARY_MARKER};
    use tempfile::tempdir;

    #[test]
    fn test_run_writes_patched_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("popup.css");
        fs::write(&path, OLD_SUMMARY_BLOCK).unwrap();

        let outcome = run(&path).unwrap();

        assert!(outcome.written);
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains(SUMMARY_MARKER));
    }

    #[test]
    fn test_dry_run_leaves_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("popup.css");
        fs::write(&path, OLD_SUMMARY_BLOCK).unwrap();

        let outcome = run_with(&path, RunOptions { dry_run: true }).unwrap();

        assert!(!outcome.written);
        assert_eq!(outcome.replacements, 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), OLD_SUMMARY_BLOCK);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let err = run(&dir.path().join("absent.css")).unwrap_err();
        assert!(matches!(err, AppError::Io(ref e) if e.kind() == io::ErrorKind::NotFound));
        assert!(err.to_string().contains("Failed to read file"));
        assert!(err.to_string().contains("absent.css"));
    }

    #[test]
    fn test_crlf_endings_restored() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("popup.css");
        fs::write(&path, OLD_SUMMARY_BLOCK.replace('\n', "\r\n")).unwrap();

        run(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains(SUMMARY_MARKER));
        assert!(!content.replace("\r\n", "").contains('\n'));
    }
}
