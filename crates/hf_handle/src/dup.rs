use alloc::boxed::Box;

// -----------------------------------------------------------------------------
// Duplicate

/// The capability contract for type-preserving copies.
///
/// `duplicate` must return a new, independent allocation of the **same
/// dynamic type** as the receiver. Handles use it whenever a copy is
/// requested, so a `dyn` value held through a base view is never flattened
/// to the view type.
///
/// # Implementing
///
/// Every `Clone` type already satisfies the contract through the blanket
/// impl below. A polymorphic hierarchy adds one boxed-clone method to its
/// object trait and bridges it with [`impl_object_duplicate!`]:
///
/// ```
/// use hf_handle::{Duplicate, Own, impl_object_duplicate};
///
/// trait Shape {
///     fn area(&self) -> f64;
///     fn boxed(&self) -> Box<dyn Shape>;
/// }
///
/// impl_object_duplicate!(Shape, boxed);
///
/// #[derive(Clone)]
/// struct Circle { radius: f64 }
///
/// impl Shape for Circle {
///     fn area(&self) -> f64 { core::f64::consts::PI * self.radius * self.radius }
///     fn boxed(&self) -> Box<dyn Shape> { Box::new(self.clone()) }
/// }
///
/// let held: Own<dyn Shape> = Own::from_box(Box::new(Circle { radius: 1.0 }));
/// let copy = held.clone();
/// assert_eq!(held.get().area(), copy.get().area());
/// ```
///
/// [`impl_object_duplicate!`]: crate::impl_object_duplicate
pub trait Duplicate {
    /// Returns a new allocation holding an independent copy of `self`,
    /// with the same dynamic type.
    fn duplicate(&self) -> Box<Self>;
}

/// The escape hatch for non-polymorphic types: a plain same-static-type copy.
///
/// This only ever runs at the value's static type, so it cannot observe (or
/// lose) a more-derived dynamic type; hierarchies that need type-preserving
/// copies bridge their object trait with
/// [`impl_object_duplicate!`](crate::impl_object_duplicate) instead.
impl<T: Clone> Duplicate for T {
    #[inline]
    fn duplicate(&self) -> Box<T> {
        Box::new(self.clone())
    }
}

// -----------------------------------------------------------------------------
// Helpers

/// Duplicates `source` if present, else allocates `T`'s default value.
///
/// This is the absence rule of every required owning construction: a missing
/// input is converted to a default value at the boundary, never to an empty
/// handle.
///
/// # Examples
///
/// ```
/// use hf_handle::duplicate_or_default;
///
/// assert_eq!(*duplicate_or_default(Some(&7)), 7);
/// assert_eq!(*duplicate_or_default::<i32>(None), 0);
/// ```
#[inline]
pub fn duplicate_or_default<T: Duplicate + Default>(source: Option<&T>) -> Box<T> {
    match source {
        Some(value) => value.duplicate(),
        None => Box::new(T::default()),
    }
}

/// Duplicates `source` if present; absence propagates.
///
/// # Examples
///
/// ```
/// use hf_handle::duplicated;
///
/// assert_eq!(duplicated(Some(&7)).as_deref(), Some(&7));
/// assert_eq!(duplicated::<i32>(None), None);
/// ```
#[inline]
pub fn duplicated<T: ?Sized + Duplicate>(source: Option<&T>) -> Option<Box<T>> {
    source.map(Duplicate::duplicate)
}

// -----------------------------------------------------------------------------
// Object bridging

/// Implements [`Duplicate`] for a trait object out of a boxed-clone method
/// on the trait.
///
/// The method must have the signature `fn(&self) -> Box<dyn Trait>` and
/// return a copy of the receiver's concrete type; every copy made through a
/// handle then preserves the dynamic type.
///
/// See [`Duplicate`] for a worked example.
#[macro_export]
macro_rules! impl_object_duplicate {
    ($object:path, $method:ident) => {
        impl $crate::Duplicate for dyn $object {
            #[inline]
            fn duplicate(&self) -> $crate::__macro_exports::Box<Self> {
                self.$method()
            }
        }
    };
}

// -----------------------------------------------------------------------------
// Tests
