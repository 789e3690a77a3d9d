//! File-level cleaning.

use std::fs;
use std::path::Path;

use log::info;

use crate::cleaner::Cleaner;
use crate::error::{CleanError, Result};

/// Read `input`, clean it with `cleaner` and write the result to `output`.
///
/// The output file is only written once cleaning succeeded.
///
/// # Errors
///
/// [`CleanError::InputNotFound`] when `input` does not exist, [`CleanError::Io`] for
/// any other read or write failure (including input that is not UTF-8).
pub fn clean_file(input: impl AsRef<Path>, output: impl AsRef<Path>, cleaner: &Cleaner) -> Result<()> {
    let input = input.as_ref();
    let output = output.as_ref();

    let html = fs::read_to_string(input).map_err(|source| CleanError::from_read(input, source))?;
    let cleaned = cleaner.clean(&html);
    fs::write(output, &cleaned).map_err(|source| CleanError::Io {
        path: output.to_path_buf(),
        source,
    })?;

    info!(
        "cleaned {} ({} bytes) into {} ({} bytes)",
        input.display(),
        html.len(),
        output.display(),
        cleaned.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn cleans_into_output_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("input.html");
        let output = dir.path().join("output.html");
        fs::write(&input, "<style>p{}</style><p style=\"x\">Hi</p>").unwrap();

        clean_file(&input, &output, &Cleaner::default()).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "<p>Hi</p>");
    }

    #[test]
    fn missing_input_is_not_found() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("output.html");
        let err = clean_file(dir.path().join("nope.html"), &output, &Cleaner::default()).unwrap_err();
        assert!(matches!(err, CleanError::InputNotFound { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn invalid_utf8_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("latin1.html");
        fs::write(&input, b"<p>Se\xf1or</p>").unwrap();
        let err = clean_file(&input, dir.path().join("out.html"), &Cleaner::default()).unwrap_err();
        assert!(matches!(err, CleanError::Io { .. }));
    }

    #[test]
    fn unwritable_output_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("input.html");
        fs::write(&input, "<p>x</p>").unwrap();
        let output = dir.path().join("missing-dir").join("out.html");
        let err = clean_file(&input, &output, &Cleaner::default()).unwrap_err();
        assert!(matches!(err, CleanError::Io { .. }));
    }
}
