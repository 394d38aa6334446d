#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Modules

mod convert;
mod error;
mod line;
mod scan;

// -----------------------------------------------------------------------------
// Top-level exports

pub use convert::Converter;
pub use error::ScanError;
pub use line::{Line, LineReader};
pub use scan::files_with_extension;
