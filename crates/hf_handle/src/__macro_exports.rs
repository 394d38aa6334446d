//! Support items for this crate's exported macros. Not public API.

use crate::InvariantViolation;

pub use alloc::boxed::Box;

/// Whether `hf_handle` was built with the `checks` feature.
#[doc(hidden)]
#[inline(always)]
#[must_use]
pub const fn checks_enabled() -> bool {
    cfg!(feature = "checks")
}

/// Cold path for a failed [`checked_assert!`](crate::checked_assert).
#[doc(hidden)]
#[cold]
#[inline(never)]
#[track_caller]
pub fn checked_failure(message: core::fmt::Arguments<'_>) -> ! {
    InvariantViolation::new(alloc::format!("{message}")).raise()
}

/// Asserts an internal handle invariant.
///
/// Compiled down to nothing when `hf_handle` is built without the `checks`
/// feature; there is no second code path, only a constant-false branch.
///
/// Violations escalate through [`InvariantViolation::raise`], so a failed
/// check carries the stable `invariant violation:` message format.
///
/// [`InvariantViolation::raise`]: crate::InvariantViolation::raise
#[macro_export]
macro_rules! checked_assert {
    ($cond:expr, $($arg:tt)+) => {
        if $crate::__macro_exports::checks_enabled() && !$cond {
            $crate::__macro_exports::checked_failure(::core::format_args!($($arg)+));
        }
    };
}

// -----------------------------------------------------------------------------
// Tests
