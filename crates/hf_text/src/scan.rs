use std::fs;
use std::path::{Path, PathBuf};

use hf_handle::checked_assert;

use crate::error::ScanError;

// -----------------------------------------------------------------------------
// Scanner

/// Returns the regular files of `directory` whose extension is `extension`.
///
/// The scan is not recursive, and the result is sorted so repeated runs see
/// the same order. `extension` is given without the leading dot.
///
/// # Examples
///
/// ```no_run
/// use hf_text::files_with_extension;
///
/// let sources = files_with_extension(".".as_ref(), "hm")?;
/// for path in &sources {
///     println!("{}", path.display());
/// }
/// # Ok::<(), hf_text::ScanError>(())
/// ```
///
/// # Errors
///
/// [`ScanError`] when the directory or one of its entries cannot be read.
pub fn files_with_extension(directory: &Path, extension: &str) -> Result<Vec<PathBuf>, ScanError> {
    checked_assert!(
        !extension.starts_with('.'),
        "extension must be given without the leading dot, got `{extension}`"
    );

    let entries = fs::read_dir(directory).map_err(|source| ScanError::ReadDir {
        path: directory.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ScanError::ReadEntry {
            path: directory.to_path_buf(),
            source,
        })?;
        let path = entry.path();

        let file_type = entry.file_type().map_err(|source| ScanError::ReadEntry {
            path: path.clone(),
            source,
        })?;
        if !file_type.is_file() {
            continue;
        }
        if path.extension().is_some_and(|found| found == extension) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

// -----------------------------------------------------------------------------
// Tests
