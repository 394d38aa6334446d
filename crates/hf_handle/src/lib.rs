#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod dup;
mod error;
mod leased;
mod owned;

pub mod convert;
pub mod handle;

// -----------------------------------------------------------------------------
// Top-level exports

pub mod __macro_exports;

pub use dup::{Duplicate, duplicate_or_default, duplicated};
pub use error::{InvariantViolation, Trace};
pub use handle::Handle;
pub use leased::{Lease, MaybeLease};
pub use owned::{MaybeOwn, Own};
