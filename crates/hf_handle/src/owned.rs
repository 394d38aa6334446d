use alloc::boxed::Box;
use core::fmt;

use crate::dup::Duplicate;
use crate::leased::{Lease, MaybeLease};

// -----------------------------------------------------------------------------
// Own

/// An owning handle that always holds a value.
///
/// `Own<T>` is exclusively responsible for releasing its allocation: exactly
/// once, either when the handle is dropped or when [`reset`](Self::reset)
/// replaces the held value. It can never be observed empty: constructions
/// that accept an absent input substitute `T`'s default value instead.
///
/// For polymorphic use, declare the handle at the base view and let unsized
/// coercion do the rest; copies go through [`Duplicate`], so the held value
/// keeps its concrete type:
///
/// ```
/// use hf_handle::Own;
///
/// let mut counter: Own<u32> = Own::adopt(None);
/// assert_eq!(*counter.get(), 0);
///
/// *counter.get_mut() += 1;
/// let relinquished = counter.take();
/// assert_eq!(*relinquished, 1);
/// // `take` left a fresh default behind; the handle is still usable.
/// assert_eq!(*counter.get(), 0);
/// ```
pub struct Own<T: ?Sized>(Box<T>);

impl<T> Own<T> {
    /// Wraps a value in a new allocation.
    #[inline]
    pub fn new(value: T) -> Self {
        Self(Box::new(value))
    }

    /// Adopts an allocation if present, else allocates `T`'s default value.
    ///
    /// This is the required-owning construction rule: absence never produces
    /// an empty handle.
    #[inline]
    pub fn adopt(target: Option<Box<T>>) -> Self
    where
        T: Default,
    {
        Self(target.unwrap_or_default())
    }

    /// Relinquishes the held allocation, leaving a default value behind.
    ///
    /// The returned allocation is exactly the one previously held; nothing
    /// is duplicated. Use [`into_box`](Self::into_box) when the handle
    /// itself is done for.
    #[inline]
    pub fn take(&mut self) -> Box<T>
    where
        T: Default,
    {
        core::mem::replace(&mut self.0, Box::default())
    }

    /// Builds a `T` from an unrelated source type via its converting
    /// constructor, releasing the source's allocation afterwards.
    ///
    /// See [`convert::converted_required`](crate::convert::converted_required)
    /// for the handle-to-handle form.
    #[inline]
    pub fn converted<U>(source: U) -> Self
    where
        T: From<U>,
    {
        Self(Box::new(T::from(source)))
    }

    /// Like [`converted`](Self::converted), with the required-kind absence
    /// rule: an absent source converts `U`'s default value.
    #[inline]
    pub fn converted_or_default<U: Default>(source: Option<U>) -> Self
    where
        T: From<U>,
    {
        Self(Box::new(T::from(source.unwrap_or_default())))
    }
}

impl<T: ?Sized> Own<T> {
    /// Adopts an existing allocation as-is.
    ///
    /// The usual entry point for polymorphic values, since `Box<Concrete>`
    /// coerces to `Box<dyn Trait>` here:
    ///
    /// ```
    /// # use hf_handle::Own;
    /// let held: Own<dyn core::fmt::Debug> = Own::from_box(Box::new(5_i32));
    /// ```
    #[inline]
    pub fn from_box(target: Box<T>) -> Self {
        Self(target)
    }

    /// Read access to the held value. Never fails; the handle is never empty.
    #[inline]
    pub fn get(&self) -> &T {
        &self.0
    }

    /// Mutable access to the held value.
    #[inline]
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.0
    }

    /// Replaces the held value, releasing the previous allocation.
    #[inline]
    pub fn reset(&mut self, target: Box<T>) {
        self.0 = target;
    }

    /// Consumes the handle, relinquishing the held allocation.
    ///
    /// Unlike [`take`](Self::take) this needs no default value, so it also
    /// works for unsized targets; it is the covariant move's building block.
    #[inline]
    pub fn into_box(self) -> Box<T> {
        self.0
    }

    /// Borrows the held value as a required lease.
    #[inline]
    pub fn lease(&self) -> Lease<'_, T> {
        Lease::new(&self.0)
    }
}

impl<T: ?Sized + Duplicate> Clone for Own<T> {
    /// Copies at the held value's dynamic type via [`Duplicate`].
    #[inline]
    fn clone(&self) -> Self {
        Self(self.0.duplicate())
    }
}

impl<T: Default> Default for Own<T> {
    #[inline]
    fn default() -> Self {
        Self(Box::default())
    }
}

impl<T> From<T> for Own<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: ?Sized> From<Box<T>> for Own<T> {
    #[inline]
    fn from(target: Box<T>) -> Self {
        Self::from_box(target)
    }
}

impl<T: ?Sized> AsRef<T> for Own<T> {
    #[inline]
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Own<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Own").field(&&self.0).finish()
    }
}

// -----------------------------------------------------------------------------
// MaybeOwn

/// An owning handle that may legitimately be empty.
///
/// Identical release discipline to [`Own`], but absence is part of the
/// contract: [`get`](Self::get) and [`take`](Self::take) report it as
/// `None` instead of substituting a default value.
///
/// ```
/// use hf_handle::MaybeOwn;
///
/// let mut slot: MaybeOwn<&str> = MaybeOwn::empty();
/// assert!(slot.is_empty());
///
/// slot.reset(Some(Box::new("hello")));
/// assert_eq!(slot.get(), Some(&"hello"));
///
/// let out = slot.take();
/// assert_eq!(out.as_deref(), Some(&"hello"));
/// assert!(slot.is_empty());
/// ```
pub struct MaybeOwn<T: ?Sized>(Option<Box<T>>);

impl<T> MaybeOwn<T> {
    /// Wraps a value in a new allocation.
    #[inline]
    pub fn new(value: T) -> Self {
        Self(Some(Box::new(value)))
    }

    /// Converts to the required kind; absence becomes `T`'s default value.
    #[inline]
    pub fn into_required(self) -> Own<T>
    where
        T: Default,
    {
        Own::adopt(self.0)
    }
}

impl<T: ?Sized> MaybeOwn<T> {
    /// The empty handle.
    #[inline]
    pub const fn empty() -> Self {
        Self(None)
    }

    /// Adopts an allocation exactly as given, nullable.
    #[inline]
    pub fn adopt(target: Option<Box<T>>) -> Self {
        Self(target)
    }

    /// Read access to the held value, or `None` when empty.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        self.0.as_deref()
    }

    /// Mutable access to the held value, or `None` when empty.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.0.as_deref_mut()
    }

    /// Relinquishes the held allocation if present, leaving the handle
    /// empty. Nothing is duplicated.
    #[inline]
    pub fn take(&mut self) -> Option<Box<T>> {
        self.0.take()
    }

    /// Replaces the held value, releasing any previous allocation.
    #[inline]
    pub fn reset(&mut self, target: Option<Box<T>>) {
        self.0 = target;
    }

    /// Whether the handle currently holds nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Borrows the held value, if any, as an optional lease.
    #[inline]
    pub fn lease(&self) -> MaybeLease<'_, T> {
        MaybeLease::new(self.0.as_deref())
    }
}

impl<T: ?Sized + Duplicate> Clone for MaybeOwn<T> {
    /// Copies at the held value's dynamic type; absence propagates.
    #[inline]
    fn clone(&self) -> Self {
        Self(self.0.as_deref().map(Duplicate::duplicate))
    }
}

impl<T: ?Sized> Default for MaybeOwn<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: ?Sized> From<Own<T>> for MaybeOwn<T> {
    #[inline]
    fn from(handle: Own<T>) -> Self {
        Self(Some(handle.into_box()))
    }
}

impl<T: ?Sized> From<Option<Box<T>>> for MaybeOwn<T> {
    #[inline]
    fn from(target: Option<Box<T>>) -> Self {
        Self::adopt(target)
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for MaybeOwn<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(target) => f.debug_tuple("MaybeOwn").field(&&**target).finish(),
            None => f.write_str("MaybeOwn(empty)"),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{MaybeOwn, Own};
    use alloc::boxed::Box;
    use alloc::string::{String, ToString};

    #[test]
    fn adopt_none_yields_default() {
        let handle: Own<String> = Own::adopt(None);
        assert_eq!(handle.get(), "");

        let adopted: Own<String> = Own::adopt(Some(Box::new("kept".to_string())));
        assert_eq!(adopted.get(), "kept");
    }

    #[test]
    fn take_leaves_default_behind() {
        let mut handle = Own::new(41_i32);
        let out = handle.take();
        assert_eq!(*out, 41);
        assert_eq!(*handle.get(), 0);
    }

    #[test]
    fn reset_replaces_in_place() {
        let mut handle = Own::new(1_u8);
        handle.reset(Box::new(2));
        assert_eq!(*handle.get(), 2);
    }

    #[test]
    fn converting_construction() {
        let converted: Own<String> = Own::converted("text");
        assert_eq!(converted.get(), "text");

        let defaulted: Own<String> = Own::converted_or_default::<&str>(None);
        assert_eq!(defaulted.get(), "");
    }

    #[test]
    fn clone_yields_independent_allocation() {
        let a = Own::new("left".to_string());
        let mut b = a.clone();
        b.get_mut().push_str(" right");

        assert_eq!(a.get(), "left");
        assert_eq!(b.get(), "left right");
    }

    #[test]
    fn lease_views_borrow_without_consuming() {
        let handle = Own::new(5_i32);
        let lease = handle.lease();
        assert_eq!(*lease.get(), 5);
        // The owning handle still holds its value.
        assert_eq!(*handle.get(), 5);

        let slot = MaybeOwn::new(7_i32);
        assert_eq!(slot.lease().get(), Some(&7));

        let vacant: MaybeOwn<i32> = MaybeOwn::empty();
        assert!(vacant.lease().is_empty());
    }

    #[test]
    fn maybe_own_round_trip() {
        let mut slot: MaybeOwn<i32> = MaybeOwn::empty();
        assert!(slot.is_empty());
        assert_eq!(slot.get(), None);
        assert_eq!(slot.take(), None);

        slot.reset(Some(Box::new(9)));
        assert_eq!(slot.get(), Some(&9));

        let out = slot.take().unwrap();
        assert_eq!(*out, 9);
        assert!(slot.is_empty());
    }

    #[test]
    fn required_conversion_defaults_on_absence() {
        let empty: MaybeOwn<u64> = MaybeOwn::empty();
        assert_eq!(*empty.into_required().get(), 0);

        let full = MaybeOwn::new(3_u64);
        assert_eq!(*full.into_required().get(), 3);
    }
}
