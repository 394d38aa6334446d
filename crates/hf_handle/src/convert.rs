//! The conversion engine: building one handle kind out of another.
//!
//! Every operation here is total over the source axes (owning or
//! borrowing, required or optional) and over copy versus move:
//!
//! - pass the handle by value to **move** (owning sources transfer their
//!   allocation without duplication; borrowing sources degrade to a
//!   duplication),
//! - pass `&handle` to **copy** (always a duplication at the source's
//!   dynamic type, via [`Duplicate`]).
//!
//! Absence resolves by destination kind: `*_required` substitutes a default
//! value, `*_optional` propagates the absence.
//!
//! # The covariant path
//!
//! Constructing a base-view handle from a descendant uses unsized coercion
//! of the underlying `Box` at the call site; no engine function is needed
//! and no dynamic type information is lost:
//!
//! ```
//! use hf_handle::{Duplicate, Own, impl_object_duplicate};
//!
//! trait Node {
//!     fn label(&self) -> &str;
//!     fn boxed(&self) -> Box<dyn Node>;
//! }
//! impl_object_duplicate!(Node, boxed);
//!
//! #[derive(Clone)]
//! struct Leaf(String);
//! impl Node for Leaf {
//!     fn label(&self) -> &str { &self.0 }
//!     fn boxed(&self) -> Box<dyn Node> { Box::new(self.clone()) }
//! }
//!
//! let leaf = Own::new(Leaf("x".into()));
//! // Covariant copy: duplicate at the dynamic type, then view as the base.
//! let viewed: Own<dyn Node> = Own::from_box(leaf.get().duplicate());
//! // Covariant move: transfer the allocation itself.
//! let moved: Own<dyn Node> = Own::from_box(leaf.into_box());
//!
//! assert_eq!(viewed.get().label(), "x");
//! assert_eq!(moved.get().label(), "x");
//! ```
//!
//! # The unrelated-type path
//!
//! [`converted_required`] and [`converted_optional`] build a destination
//! type that is not a supertype of the source, through the destination's
//! own `From` impl; the source allocation is released after the conversion.

use crate::dup::{Duplicate, duplicated};
use crate::handle::Handle;
use crate::owned::{MaybeOwn, Own};

// -----------------------------------------------------------------------------
// Same-type / covariant conversions

/// Copies `source` into a required owning handle.
///
/// Absent sources become the default value; present sources are duplicated
/// at their dynamic type.
///
/// # Examples
///
/// ```
/// use hf_handle::{MaybeOwn, convert};
///
/// let empty: MaybeOwn<u32> = MaybeOwn::empty();
/// assert_eq!(*convert::copied_required(&empty).get(), 0);
///
/// let full = MaybeOwn::new(4_u32);
/// assert_eq!(*convert::copied_required(&full).get(), 4);
/// // The source still holds its value.
/// assert_eq!(full.get(), Some(&4));
/// ```
#[inline]
pub fn copied_required<H: Handle>(source: &H) -> Own<H::Target>
where
    H::Target: Duplicate + Default,
{
    Own::adopt(duplicated(source.try_get()))
}

/// Copies `source` into an optional owning handle; absence propagates.
#[inline]
pub fn copied_optional<H: Handle>(source: &H) -> MaybeOwn<H::Target>
where
    H::Target: Duplicate,
{
    MaybeOwn::adopt(duplicated(source.try_get()))
}

/// Moves `source` into a required owning handle.
///
/// An owning source transfers its allocation without any duplication; a
/// borrowing source degrades to a duplication (see
/// [`Handle::take_owned`]). Absence becomes the default value.
///
/// # Examples
///
/// ```
/// use hf_handle::{Own, convert};
///
/// let source = Own::new(5_i64);
/// let moved = convert::moved_required(source);
/// assert_eq!(*moved.get(), 5);
/// ```
#[inline]
pub fn moved_required<H: Handle>(source: H) -> Own<H::Target>
where
    H::Target: Default,
{
    Own::adopt(source.take_owned())
}

/// Moves `source` into an optional owning handle; absence propagates.
#[inline]
pub fn moved_optional<H: Handle>(source: H) -> MaybeOwn<H::Target> {
    MaybeOwn::adopt(source.take_owned())
}

// -----------------------------------------------------------------------------
// Unrelated-type conversions

/// Builds a required handle of an unrelated type `T` from `source`,
/// via `T`'s converting constructor.
///
/// The source value is consumed and its original allocation released after
/// the conversion, since it was not reused. An absent source converts the
/// source type's default value.
///
/// # Examples
///
/// ```
/// use hf_handle::{Lease, convert};
///
/// struct Meters(f32);
/// impl From<f32> for Meters {
///     fn from(raw: f32) -> Self { Meters(raw) }
/// }
/// impl Default for Meters {
///     fn default() -> Self { Meters(0.0) }
/// }
///
/// let raw = 2.5_f32;
/// let held = convert::converted_required::<Meters, _>(Lease::new(&raw));
/// assert_eq!(held.get().0, 2.5);
/// ```
#[inline]
pub fn converted_required<T, H: Handle>(source: H) -> Own<T>
where
    H::Target: Sized + Default,
    T: From<H::Target>,
{
    Own::converted_or_default(source.take_owned().map(|target| *target))
}

/// Builds an optional handle of an unrelated type `T` from `source`;
/// absence propagates.
#[inline]
pub fn converted_optional<T, H: Handle>(source: H) -> MaybeOwn<T>
where
    H::Target: Sized,
    T: From<H::Target>,
{
    match source.take_owned() {
        Some(target) => MaybeOwn::new(T::from(*target)),
        None => MaybeOwn::empty(),
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{
        converted_optional, converted_required, copied_optional, copied_required, moved_optional,
        moved_required,
    };
    use crate::{Lease, MaybeLease, MaybeOwn, Own};
    use alloc::string::{String, ToString};
    use core::cell::Cell;

    // Counts duplications so transfers can be told apart from copies.
    #[derive(Default)]
    struct Tracked<'c> {
        value: i32,
        copies: Option<&'c Cell<u32>>,
    }

    impl Clone for Tracked<'_> {
        fn clone(&self) -> Self {
            if let Some(copies) = self.copies {
                copies.set(copies.get() + 1);
            }
            Self {
                value: self.value,
                copies: self.copies,
            }
        }
    }

    #[test]
    fn moving_between_owning_handles_never_duplicates() {
        let copies = Cell::new(0);
        let source = Own::new(Tracked {
            value: 11,
            copies: Some(&copies),
        });

        let moved = moved_required(source);
        assert_eq!(moved.get().value, 11);
        assert_eq!(copies.get(), 0);

        let optional = moved_optional(moved);
        assert_eq!(optional.get().map(|t| t.value), Some(11));
        assert_eq!(copies.get(), 0);
    }

    #[test]
    fn copying_duplicates_exactly_once() {
        let copies = Cell::new(0);
        let source = Own::new(Tracked {
            value: 3,
            copies: Some(&copies),
        });

        let copy = copied_required(&source);
        assert_eq!(copy.get().value, 3);
        assert_eq!(source.get().value, 3);
        assert_eq!(copies.get(), 1);
    }

    #[test]
    fn moving_from_a_borrow_degrades_to_duplication() {
        let copies = Cell::new(0);
        let referent = Tracked {
            value: 6,
            copies: Some(&copies),
        };

        let moved = moved_required(Lease::new(&referent));
        assert_eq!(moved.get().value, 6);
        assert_eq!(copies.get(), 1);
        // The referent is untouched.
        assert_eq!(referent.value, 6);
    }

    #[test]
    fn absence_resolves_by_destination_kind() {
        let absent: MaybeLease<'_, i32> = MaybeLease::empty();
        assert_eq!(*moved_required(absent).get(), 0);
        assert!(moved_optional(absent).is_empty());

        let empty: MaybeOwn<i32> = MaybeOwn::empty();
        assert_eq!(*copied_required(&empty).get(), 0);
        assert!(copied_optional(&empty).is_empty());
    }

    struct Label(String);

    impl From<String> for Label {
        fn from(text: String) -> Self {
            Self(text)
        }
    }

    #[test]
    fn converting_path_moves_and_copies() {
        let source = Own::new("name".to_string());
        let copied: Own<Label> = converted_required(&source);
        assert_eq!(copied.get().0, "name");
        assert_eq!(source.get(), "name");

        let moved: Own<Label> = converted_required(source);
        assert_eq!(moved.get().0, "name");

        let absent: MaybeOwn<String> = MaybeOwn::empty();
        let defaulted: Own<Label> = converted_required(absent);
        assert_eq!(defaulted.get().0, "");

        let empty: MaybeOwn<String> = MaybeOwn::empty();
        let propagated: MaybeOwn<Label> = converted_optional(empty);
        assert!(propagated.is_empty());
    }
}
