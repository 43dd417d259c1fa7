//! The capability shared by every queue in this crate.

use super::iter::Iter;
use crate::error::QueueResult;

/// Shared bounded-container operations.
///
/// Implemented by [`BoundedQueue`](super::BoundedQueue) (plain FIFO) and
/// [`PriorityQueue`](super::PriorityQueue) (highest priority first). Code
/// that only needs to feed and drain a queue can be written once against
/// this trait.
///
/// ```
/// use boundq_collections::collections::{BoundedQueue, SequentialContainer};
///
/// fn drain<C: SequentialContainer>(container: &mut C) -> Vec<C::Item> {
///     std::iter::from_fn(|| container.dequeue()).collect()
/// }
///
/// let mut queue = BoundedQueue::new(4);
/// queue.enqueue('a').unwrap();
/// queue.enqueue('b').unwrap();
/// assert_eq!(drain(&mut queue), vec!['a', 'b']);
/// ```
pub trait SequentialContainer {
    /// Element type stored in the slots.
    type Item;
    /// Argument accepted by [`enqueue`](Self::enqueue).
    type Input;

    /// Inserts an element and returns the new number of stored elements.
    ///
    /// # Errors
    ///
    /// Fails with a range-kind error when the container is full, or with the
    /// error raised while validating `input`.
    fn enqueue(&mut self, input: Self::Input) -> QueueResult<usize>;
    /// Removes the front element, returning `None` when empty.
    fn dequeue(&mut self) -> Option<Self::Item>;
    /// Borrows the front element without removing it.
    fn front(&self) -> Option<&Self::Item>;
    /// Returns the number of stored elements.
    fn len(&self) -> usize;
    /// Returns the maximum number of elements.
    fn capacity(&self) -> usize;
    /// Iterates over the stored elements front to back.
    fn iter(&self) -> Iter<'_, Self::Item>;

    /// Returns `true` when the container holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` when no further element can be enqueued.
    fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }
}
