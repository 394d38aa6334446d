use alloc::borrow::Cow;
use alloc::vec::Vec;
use core::fmt;
use core::panic::Location;

// -----------------------------------------------------------------------------
// InvariantViolation

/// A broken handle contract.
///
/// This is the single error kind of the handle layer. It is raised when a
/// required handle would become empty, and by internal consistency checks
/// (see [`checked_assert!`](crate::checked_assert)). It is not a retryable
/// condition: incorrect handle usage is a programming error, and the caller
/// is expected to fail fast.
///
/// Each time the violation crosses a guarded call boundary it picks up a
/// breadcrumb (the caller's source location) via [`trace`](Self::trace) or
/// the [`Trace`] extension. Breadcrumbs are displayed most-recent-first.
///
/// # Examples
///
/// ```
/// use hf_handle::{InvariantViolation, Lease, Trace};
///
/// fn outer(target: Option<&i32>) -> Result<i32, InvariantViolation> {
///     let lease = Lease::required(target).trace()?;
///     Ok(*lease.get())
/// }
///
/// let err = outer(None).unwrap_err();
/// assert_eq!(err.message(), "required handle constructed from an absent target");
/// assert_eq!(err.trail().count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    message: Cow<'static, str>,
    // Push order; iterated in reverse so the most recent boundary comes first.
    trail: Vec<&'static Location<'static>>,
}

impl InvariantViolation {
    /// Creates a violation whose trail starts at the caller.
    #[track_caller]
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
            trail: alloc::vec![Location::caller()],
        }
    }

    /// Appends the caller's location to the breadcrumb trail.
    ///
    /// The outcome never changes; the trail only aids diagnosis.
    #[track_caller]
    pub fn trace(mut self) -> Self {
        self.trail.push(Location::caller());
        self
    }

    /// The stable, location-free description of what was violated.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Breadcrumbs collected so far, most recent boundary first.
    pub fn trail(&self) -> impl Iterator<Item = &'static Location<'static>> + '_ {
        self.trail.iter().rev().copied()
    }

    /// Escalates the violation to a panic.
    ///
    /// Used where the contract break is unreachable by construction and a
    /// `Result` would only launder a bug into control flow.
    #[cold]
    #[inline(never)]
    pub fn raise(&self) -> ! {
        panic!("{self}");
    }
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invariant violation: {}", self.message)?;
        for location in self.trail() {
            write!(f, "\n    at {location}")?;
        }
        Ok(())
    }
}

impl core::error::Error for InvariantViolation {}

// -----------------------------------------------------------------------------
// Trace

/// Breadcrumb propagation for fallible handle operations.
///
/// Call [`trace`](Trace::trace) wherever an [`InvariantViolation`] crosses a
/// call boundary worth recording:
///
/// ```
/// use hf_handle::{InvariantViolation, Lease, Trace};
///
/// fn pick<'a>(slot: Option<&'a u8>) -> Result<Lease<'a, u8>, InvariantViolation> {
///     Lease::required(slot).trace()
/// }
/// # assert!(pick(None).is_err());
/// ```
pub trait Trace {
    /// Appends the caller's location to the error's trail, if any.
    #[track_caller]
    fn trace(self) -> Self;
}

impl<T> Trace for Result<T, InvariantViolation> {
    #[track_caller]
    fn trace(self) -> Self {
        self.map_err(InvariantViolation::trace)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{InvariantViolation, Trace};

    #[test]
    fn display_lists_trail_most_recent_first() {
        let err = InvariantViolation::new("broken");
        let err = err.trace();

        let mut lines = err.trail();
        let recent = lines.next().unwrap();
        let origin = lines.next().unwrap();
        assert!(lines.next().is_none());
        // Both breadcrumbs come from this file; the later call pushed last.
        assert_eq!(recent.file(), origin.file());
        assert!(recent.line() > origin.line());

        let rendered = alloc::format!("{err}");
        assert!(rendered.starts_with("invariant violation: broken"));
        assert_eq!(rendered.matches("\n    at ").count(), 2);
    }

    #[test]
    fn result_trace_keeps_ok_untouched() {
        let ok: Result<u8, InvariantViolation> = Ok(1);
        assert_eq!(ok.trace().unwrap(), 1);

        let err: Result<u8, InvariantViolation> = Err(InvariantViolation::new("x"));
        assert_eq!(err.trace().unwrap_err().trail().count(), 2);
    }

    #[test]
    #[should_panic(expected = "invariant violation: boom")]
    fn raise_panics_with_message() {
        InvariantViolation::new("boom").raise();
    }
}
