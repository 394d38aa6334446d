use alloc::boxed::Box;

// -----------------------------------------------------------------------------
// Producer

/// A stateful, zero-argument source of owned elements.
///
/// `produce` hands out the next element of the sequence, or `None` when the
/// sequence is over. Absence is **permanent exhaustion**: once a producer
/// has returned `None` it must keep returning `None` on every later call.
/// Consumers such as [`Lookahead`](crate::Lookahead) rely on this and stop
/// calling an exhausted producer altogether.
///
/// Elements are handed out as allocations, so a producer can yield
/// trait objects (`Item = dyn Trait`) without losing their concrete type.
pub trait Producer {
    /// The element type of the sequence.
    type Item: ?Sized;

    /// Yields the next element, or `None` forever after exhaustion.
    fn produce(&mut self) -> Option<Box<Self::Item>>;
}

// -----------------------------------------------------------------------------
// FromFn

/// A [`Producer`] backed by a closure. See [`from_fn`].
pub struct FromFn<F>(F);

/// Wraps a `FnMut() -> Option<Box<T>>` closure as a [`Producer`].
///
/// The permanent-exhaustion contract is on the closure.
///
/// # Examples
///
/// ```
/// use hf_seq::{Producer, from_fn};
///
/// let mut left = 3;
/// let mut countdown = from_fn(move || {
///     left -= 1;
///     (left >= 0).then(|| Box::new(left))
/// });
///
/// assert_eq!(countdown.produce().as_deref(), Some(&2));
/// ```
#[inline]
pub fn from_fn<T, F>(produce: F) -> FromFn<F>
where
    T: ?Sized,
    F: FnMut() -> Option<Box<T>>,
{
    FromFn(produce)
}

impl<T, F> Producer for FromFn<F>
where
    T: ?Sized,
    F: FnMut() -> Option<Box<T>>,
{
    type Item = T;

    #[inline]
    fn produce(&mut self) -> Option<Box<T>> {
        (self.0)()
    }
}

impl<P: Producer + ?Sized> Producer for &mut P {
    type Item = P::Item;

    #[inline]
    fn produce(&mut self) -> Option<Box<P::Item>> {
        (**self).produce()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{Producer, from_fn};
    use alloc::boxed::Box;

    #[test]
    fn closure_producer_runs_to_exhaustion() {
        let mut next = 0;
        let mut evens = from_fn(move || {
            let current = next;
            next += 2;
            (current < 6).then(|| Box::new(current))
        });

        assert_eq!(evens.produce().as_deref(), Some(&0));
        assert_eq!(evens.produce().as_deref(), Some(&2));
        assert_eq!(evens.produce().as_deref(), Some(&4));
        assert_eq!(evens.produce(), None);
        assert_eq!(evens.produce(), None);
    }

    #[test]
    fn mutable_reference_forwards() {
        let mut once = from_fn({
            let mut fired = false;
            move || {
                (!fired).then(|| {
                    fired = true;
                    Box::new('x')
                })
            }
        });

        let by_ref = &mut once;
        fn drain<P: Producer>(mut producer: P) -> usize {
            let mut count = 0;
            while producer.produce().is_some() {
                count += 1;
            }
            count
        }
        assert_eq!(drain(by_ref), 1);
        assert_eq!(once.produce(), None);
    }
}
