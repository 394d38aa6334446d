use alloc::boxed::Box;
use core::fmt;

use crate::dup::Duplicate;
use crate::error::InvariantViolation;

pub(crate) const ABSENT_REQUIRED: &str = "required handle constructed from an absent target";

// -----------------------------------------------------------------------------
// Lease

/// A borrowing handle that always refers to a value.
///
/// The handle never frees its referent; the referent outliving the handle is
/// not a caller promise but the lifetime bound `'a`, checked at compile
/// time. The only runtime obligation left is the boundary with optional
/// inputs, where [`required`](Self::required) rejects absence with an
/// [`InvariantViolation`].
///
/// ```
/// use hf_handle::Lease;
///
/// let value = 10;
/// let lease = Lease::new(&value);
/// assert_eq!(*lease.get(), 10);
///
/// // `take` duplicates, since there is nothing ownable to relinquish.
/// let owned = lease.take();
/// assert_eq!(*owned, 10);
/// ```
pub struct Lease<'a, T: ?Sized>(&'a T);

impl<'a, T: ?Sized> Lease<'a, T> {
    /// Borrows `target` for the handle's lifetime.
    #[inline]
    pub const fn new(target: &'a T) -> Self {
        Self(target)
    }

    /// Builds a required lease from an optional target.
    ///
    /// Absence is a contract break here, not a default-value boundary:
    /// a borrowing handle has nowhere to put a substitute value.
    ///
    /// # Errors
    ///
    /// [`InvariantViolation`] with a stable message when `target` is `None`.
    #[track_caller]
    pub fn required(target: Option<&'a T>) -> Result<Self, InvariantViolation> {
        match target {
            Some(target) => Ok(Self(target)),
            None => Err(InvariantViolation::new(ABSENT_REQUIRED)),
        }
    }

    /// Read access to the referent. Never fails.
    #[inline]
    pub const fn get(&self) -> &'a T {
        self.0
    }

    /// Rebinds the handle to another referent. Nothing is freed.
    #[inline]
    pub fn reset(&mut self, target: &'a T) {
        self.0 = target;
    }

    /// Returns a caller-owned duplicate of the referent.
    ///
    /// A borrowing handle never owned its referent, so `take` cannot
    /// relinquish it; the caller still always receives an owned allocation,
    /// at the price of a duplication.
    #[inline]
    pub fn take(&self) -> Box<T>
    where
        T: Duplicate,
    {
        self.0.duplicate()
    }
}

impl<T: ?Sized> Clone for Lease<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Lease<'_, T> {}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Lease<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Lease").field(&self.0).finish()
    }
}

// -----------------------------------------------------------------------------
// MaybeLease

/// A borrowing handle that may refer to nothing.
///
/// ```
/// use hf_handle::MaybeLease;
///
/// let value = 3;
/// let mut lease: MaybeLease<'_, i32> = MaybeLease::empty();
/// assert_eq!(lease.get(), None);
///
/// lease.reset(Some(&value));
/// assert_eq!(lease.get(), Some(&3));
/// ```
pub struct MaybeLease<'a, T: ?Sized>(Option<&'a T>);

impl<'a, T: ?Sized> MaybeLease<'a, T> {
    /// Borrows an optional target.
    #[inline]
    pub const fn new(target: Option<&'a T>) -> Self {
        Self(target)
    }

    /// The empty handle.
    #[inline]
    pub const fn empty() -> Self {
        Self(None)
    }

    /// Read access to the referent, or `None` when empty.
    #[inline]
    pub const fn get(&self) -> Option<&'a T> {
        self.0
    }

    /// Rebinds the handle. Nothing is freed.
    #[inline]
    pub fn reset(&mut self, target: Option<&'a T>) {
        self.0 = target;
    }

    /// Whether the handle currently refers to nothing.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Returns a caller-owned duplicate of the referent, if any.
    ///
    /// See [`Lease::take`] for why borrowing `take` duplicates.
    #[inline]
    pub fn take(&self) -> Option<Box<T>>
    where
        T: Duplicate,
    {
        self.0.map(Duplicate::duplicate)
    }

    /// Converts to the required kind, rejecting absence.
    ///
    /// # Errors
    ///
    /// [`InvariantViolation`] when the handle is empty.
    #[track_caller]
    pub fn into_required(self) -> Result<Lease<'a, T>, InvariantViolation> {
        Lease::required(self.0)
    }
}

impl<T: ?Sized> Clone for MaybeLease<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for MaybeLease<'_, T> {}

impl<T: ?Sized> Default for MaybeLease<'_, T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a, T: ?Sized> From<Lease<'a, T>> for MaybeLease<'a, T> {
    #[inline]
    fn from(lease: Lease<'a, T>) -> Self {
        Self(Some(lease.get()))
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for MaybeLease<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(target) => f.debug_tuple("MaybeLease").field(&target).finish(),
            None => f.write_str("MaybeLease(empty)"),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
