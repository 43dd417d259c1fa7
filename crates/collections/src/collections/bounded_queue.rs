//! Bounded FIFO queue with indexed slot storage.
//!
//! [`BoundedQueue`] keeps its elements in a contiguous vector addressed
//! `0..len`: slot `0` always holds the oldest element that has not been
//! dequeued yet. Inserting into a full queue is an error rather than a wait
//! or an overwrite.
//!
//! **Complexity**
//! - `enqueue`, `front`, `len`, `is_empty`, `is_full` and `capacity` complete
//!   in `O(1)`.
//! - `dequeue` is `O(n)`: the remaining elements are shifted one slot towards
//!   the front so the storage never has gaps.
//!
//! **Panic Safety**
//! - No public method panics. Invalid capacities are reported through
//!   [`BoundedQueue::try_new`] instead of asserting.
//!
//! **Thread Safety**
//! - The queue is a plain owned value with no interior mutability. Mutation
//!   requires `&mut self`, so it cannot change underneath a live iterator.

#[cfg(feature = "observability")]
use tracing::{debug, trace};

use super::container::SequentialContainer;
use super::iter::{IntoIter, Iter};
use super::numeric::{Capacity, IntoCapacity};
use crate::config::{QueueConfig, MAX_PREALLOCATED_SLOTS};
use crate::error::{QueueError, QueueResult};

/// Fixed-capacity first-in-first-out queue.
///
/// ```
/// use boundq_collections::collections::BoundedQueue;
/// use boundq_collections::error::ErrorKind;
///
/// let mut queue = BoundedQueue::new(2);
/// assert_eq!(queue.enqueue("first").unwrap(), 1);
/// assert_eq!(queue.enqueue("second").unwrap(), 2);
///
/// let err = queue.enqueue("third").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::RangeConstraint);
///
/// assert_eq!(queue.front(), Some(&"first"));
/// assert_eq!(queue.dequeue(), Some("first"));
/// assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec!["second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedQueue<T> {
    slots: Vec<T>,
    capacity: usize,
}

impl<T> BoundedQueue<T> {
    /// Creates an empty queue that holds at most `capacity` elements.
    ///
    /// A capacity of zero is legal and produces a queue that rejects every
    /// insertion.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self::with_capacity(Capacity::new(capacity), false)
    }

    /// Creates an empty queue from a loosely typed capacity.
    ///
    /// # Errors
    ///
    /// Returns a type-kind error when `capacity` is not a number and a
    /// range-kind error when it is NaN, negative or not an integer.
    ///
    /// ```
    /// use boundq_collections::collections::BoundedQueue;
    /// use boundq_collections::error::ErrorKind;
    ///
    /// assert_eq!(BoundedQueue::<u8>::try_new(3.0).unwrap().capacity(), 3);
    /// assert_eq!(
    ///     BoundedQueue::<u8>::try_new(-1).unwrap_err().kind(),
    ///     ErrorKind::RangeConstraint
    /// );
    /// ```
    pub fn try_new(capacity: impl IntoCapacity) -> QueueResult<Self> {
        let capacity = capacity.into_capacity().map_err(|err| {
            #[cfg(feature = "observability")]
            debug!(error = %err, "rejected queue capacity");
            err
        })?;
        Ok(Self::with_capacity(capacity, false))
    }

    /// Creates an empty queue sized by `config`.
    ///
    /// Up-front reservation never exceeds [`MAX_PREALLOCATED_SLOTS`], even for
    /// a config that skipped [`QueueConfig::validate`].
    #[must_use]
    pub fn with_config(config: &QueueConfig) -> Self {
        Self::with_capacity(config.capacity, config.preallocate)
    }

    fn with_capacity(capacity: Capacity, preallocate: bool) -> Self {
        let capacity = capacity.get();
        let slots = if preallocate {
            Vec::with_capacity(capacity.min(MAX_PREALLOCATED_SLOTS))
        } else {
            Vec::new()
        };
        Self { slots, capacity }
    }

    /// Returns the maximum number of elements that can be stored.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the current element count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` when the queue has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns `true` when the queue is at capacity.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.capacity
    }

    /// Appends `value` behind the newest element and returns the new count.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::CapacityExceeded`] when the queue is full; the
    /// queue is left unchanged.
    pub fn enqueue(&mut self, value: T) -> QueueResult<usize> {
        if self.is_full() {
            #[cfg(feature = "observability")]
            debug!(capacity = self.capacity, "rejecting enqueue: capacity exceeded");
            return Err(QueueError::CapacityExceeded { capacity: self.capacity });
        }
        self.slots.push(value);
        #[cfg(feature = "observability")]
        trace!(len = self.slots.len(), capacity = self.capacity, "enqueued");
        Ok(self.slots.len())
    }

    /// Removes and returns the oldest element, or `None` when empty.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.slots.is_empty() {
            return None;
        }
        let item = self.slots.remove(0);
        #[cfg(feature = "observability")]
        trace!(len = self.slots.len(), "dequeued");
        Some(item)
    }

    /// Borrows the oldest element without removing it.
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.slots.first()
    }

    /// Removes all elements, leaving the capacity unchanged.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Returns an iterator visiting elements from oldest to newest.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.slots)
    }

    /// Mutable view of the occupied slots, used to reorder elements in place.
    pub(crate) fn slots_mut(&mut self) -> &mut [T] {
        &mut self.slots
    }
}

impl<T> Default for BoundedQueue<T> {
    /// Creates an empty queue with [`Capacity::DEFAULT`] slots.
    fn default() -> Self {
        Self::with_capacity(Capacity::DEFAULT, false)
    }
}

impl<T> IntoIterator for BoundedQueue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.slots)
    }
}

impl<'a, T> IntoIterator for &'a BoundedQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> SequentialContainer for BoundedQueue<T> {
    type Item = T;
    type Input = T;

    fn enqueue(&mut self, input: T) -> QueueResult<usize> {
        Self::enqueue(self, input)
    }

    fn dequeue(&mut self) -> Option<T> {
        Self::dequeue(self)
    }

    fn front(&self) -> Option<&T> {
        Self::front(self)
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn capacity(&self) -> usize {
        Self::capacity(self)
    }

    fn iter(&self) -> Iter<'_, T> {
        Self::iter(self)
    }

    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }

    fn is_full(&self) -> bool {
        Self::is_full(self)
    }
}
