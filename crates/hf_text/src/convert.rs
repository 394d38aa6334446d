use std::io;
use std::path::{Path, PathBuf};

use hf_seq::Lookahead;

use crate::error::ScanError;
use crate::line::LineReader;
use crate::scan::files_with_extension;

// -----------------------------------------------------------------------------
// Converter

/// Drives conversion over a fixed set of source files.
///
/// The driver owns its file list up front, either given explicitly through
/// [`Converter::new`] or collected from a directory through
/// [`Converter::scan`]. Each file is announced on the `info` log level as it
/// is processed.
#[derive(Debug, Clone)]
pub struct Converter {
    files: Vec<PathBuf>,
}

impl Converter {
    /// Builds a converter over an explicit file list.
    pub fn new(files: Vec<PathBuf>) -> Self {
        Self { files }
    }

    /// Builds a converter over every `extension` file directly under
    /// `directory`.
    ///
    /// # Errors
    ///
    /// [`ScanError`] when the directory cannot be enumerated.
    pub fn scan(directory: &Path, extension: &str) -> Result<Self, ScanError> {
        Ok(Self::new(files_with_extension(directory, extension)?))
    }

    /// The files this converter will process, in processing order.
    #[must_use]
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Converts every file in order, stopping at the first I/O failure.
    ///
    /// # Errors
    ///
    /// The error of the first file that cannot be opened.
    pub fn convert_all(&self) -> io::Result<()> {
        for file in &self.files {
            self.convert(file)?;
        }
        Ok(())
    }

    fn convert(&self, file: &Path) -> io::Result<()> {
        log::info!("converting {}", file.display());

        let mut lines = Lookahead::new(LineReader::open(file)?);
        let mut count = 0u32;
        while lines.next().is_some() {
            count += 1;
        }
        log::debug!("{}: {count} lines", file.display());
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Tests
