//! The common contract over the four pointer kinds.
//!
//! [`Handle`] is the seam the conversion engine in [`convert`](crate::convert)
//! is written against. It deliberately stays small: read access that may
//! report absence, and a consuming `take_owned` that always hands the caller
//! an owned allocation.
//!
//! The blanket impl for `&H` is what folds copying and moving into one code
//! path: a shared reference to a handle is itself a handle whose
//! `take_owned` duplicates instead of relinquishing. Pass `&h` to copy,
//! `h` to move.

use alloc::boxed::Box;

use crate::dup::Duplicate;
use crate::leased::{Lease, MaybeLease};
use crate::owned::{MaybeOwn, Own};

// -----------------------------------------------------------------------------
// Handle

/// A pointer handle viewed through its kind-independent surface.
///
/// Implementations fix the two axes per kind, not per instance: whether
/// `take_owned` relinquishes (owning) or duplicates (borrowing), and
/// whether `try_get` can return `None` (optional) or never does (required).
pub trait Handle {
    /// The referent type.
    type Target: ?Sized;

    /// Read access; `None` only for the optional kinds.
    fn try_get(&self) -> Option<&Self::Target>;

    /// Consumes the handle into a caller-owned allocation.
    ///
    /// Owning kinds transfer their allocation without duplication;
    /// borrowing kinds duplicate the referent, since there is nothing
    /// ownable to transfer.
    fn take_owned(self) -> Option<Box<Self::Target>>;
}

// -----------------------------------------------------------------------------
// Kind impls

impl<T: ?Sized> Handle for Own<T> {
    type Target = T;

    #[inline]
    fn try_get(&self) -> Option<&T> {
        Some(self.get())
    }

    #[inline]
    fn take_owned(self) -> Option<Box<T>> {
        Some(self.into_box())
    }
}

impl<T: ?Sized> Handle for MaybeOwn<T> {
    type Target = T;

    #[inline]
    fn try_get(&self) -> Option<&T> {
        self.get()
    }

    #[inline]
    fn take_owned(mut self) -> Option<Box<T>> {
        self.take()
    }
}

impl<T: ?Sized + Duplicate> Handle for Lease<'_, T> {
    type Target = T;

    #[inline]
    fn try_get(&self) -> Option<&T> {
        Some(self.get())
    }

    /// A "move" out of a borrow degrades to a duplication.
    #[inline]
    fn take_owned(self) -> Option<Box<T>> {
        Some(self.take())
    }
}

impl<T: ?Sized + Duplicate> Handle for MaybeLease<'_, T> {
    type Target = T;

    #[inline]
    fn try_get(&self) -> Option<&T> {
        self.get()
    }

    #[inline]
    fn take_owned(self) -> Option<Box<T>> {
        self.take()
    }
}

/// Copying view: `&H` is the non-consuming handle over the same target.
///
/// `take_owned` on a reference cannot relinquish, so it duplicates at the
/// dynamic type, exactly like the borrowing kinds.
impl<H: Handle> Handle for &H
where
    H::Target: Duplicate,
{
    type Target = H::Target;

    #[inline]
    fn try_get(&self) -> Option<&H::Target> {
        (**self).try_get()
    }

    #[inline]
    fn take_owned(self) -> Option<Box<H::Target>> {
        self.try_get().map(Duplicate::duplicate)
    }
}

// -----------------------------------------------------------------------------
// Tests
