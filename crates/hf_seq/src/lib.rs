#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod lookahead;
mod producer;

// -----------------------------------------------------------------------------
// Top-level exports

pub use lookahead::Lookahead;
pub use producer::{FromFn, Producer, from_fn};
