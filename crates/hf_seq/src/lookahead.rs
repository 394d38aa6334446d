use alloc::boxed::Box;

use hf_handle::MaybeOwn;

use crate::producer::Producer;

// -----------------------------------------------------------------------------
// Lookahead

/// A one-element-lookahead cursor over a [`Producer`].
///
/// Construction eagerly pulls one element into the buffer, so
/// [`peek`](Self::peek) can always inspect the element that the next call
/// to [`next`](Self::next) will return. The buffer is an owning-optional
/// handle; taking it relinquishes the element to the caller without any
/// duplication.
///
/// Exhaustion is terminal: once the buffer has observed an absent element,
/// the producer is never invoked again and every later `next`/`peek`
/// reports absence. The cursor is consumed in place and cannot restart.
///
/// # Examples
///
/// ```
/// use hf_seq::{Lookahead, from_fn};
///
/// let mut pulled = 0_u32;
/// let mut sequence = Lookahead::new(from_fn(move || {
///     pulled += 1;
///     (pulled <= 2).then(|| Box::new(pulled))
/// }));
///
/// // Peeking never advances.
/// assert_eq!(sequence.peek(), Some(&1));
/// assert_eq!(sequence.peek(), Some(&1));
///
/// assert_eq!(sequence.next().as_deref(), Some(&1));
/// assert_eq!(sequence.next().as_deref(), Some(&2));
/// assert_eq!(sequence.next(), None);
/// ```
pub struct Lookahead<P: Producer> {
    buffered: MaybeOwn<P::Item>,
    producer: P,
}

impl<P: Producer> Lookahead<P> {
    /// Builds the cursor, invoking the producer once to fill the buffer.
    pub fn new(mut producer: P) -> Self {
        let buffered = MaybeOwn::adopt(producer.produce());
        Self { buffered, producer }
    }

    /// A read-only view of the buffered element, or `None` once exhausted.
    ///
    /// Never advances and never invokes the producer.
    #[inline]
    pub fn peek(&self) -> Option<&P::Item> {
        self.buffered.get()
    }

    /// Consumes and returns the buffered element, refilling the buffer
    /// with exactly one producer invocation.
    ///
    /// When the buffer is already empty this returns `None` immediately;
    /// the producer is not consulted again.
    pub fn next(&mut self) -> Option<Box<P::Item>> {
        let front = self.buffered.take()?;
        self.buffered.reset(self.producer.produce());
        Some(front)
    }

    /// Whether the sequence has permanently run out.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.buffered.is_empty()
    }
}

impl<P: Producer> Iterator for Lookahead<P> {
    type Item = Box<P::Item>;

    #[inline]
    fn next(&mut self) -> Option<Box<P::Item>> {
        Lookahead::next(self)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.is_exhausted() { (0, Some(0)) } else { (1, None) }
    }
}

// -----------------------------------------------------------------------------
// Tests
