use std::io;
use std::path::PathBuf;

use thiserror::Error;

// -----------------------------------------------------------------------------
// Error

/// Failures while selecting input files.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ScanError {
    #[error("failed to read directory `{}`: {source}", path.display())]
    ReadDir { path: PathBuf, source: io::Error },

    #[error("failed to inspect directory entry under `{}`: {source}", path.display())]
    ReadEntry { path: PathBuf, source: io::Error },
}
