//! Bounded priority queue that keeps its slots sorted by priority.
//!
//! [`PriorityQueue`] wraps a [`BoundedQueue`] of [`PriorityItem`]s. Every
//! insertion appends at the tail and then bubbles the new item towards the
//! front past each neighbour with a strictly lower priority, so slot `0`
//! always holds the highest priority and removal stays a plain FIFO
//! `dequeue`.
//!
//! # Ordering
//! - Slots are non-increasing by priority from front to back.
//! - Items with equal priority leave in insertion order: the bubbling stops
//!   at the first neighbour whose priority is greater than *or equal to* the
//!   new item's.
//!
//! # Complexity
//! - `enqueue`: `O(n)` (one linear pass of adjacent swaps)
//! - `dequeue`: `O(n)` (slot compaction)
//! - `front`: `O(1)`
//!
//! # Examples
//! ```
//! use boundq_collections::collections::PriorityQueue;
//!
//! let mut queue = PriorityQueue::new(8);
//! queue.enqueue("a", 1).unwrap();
//! queue.enqueue("b", 5).unwrap();
//! queue.enqueue("c", 3).unwrap();
//!
//! let order: Vec<_> = std::iter::from_fn(|| queue.dequeue()).map(|item| item.into_value()).collect();
//! assert_eq!(order, vec!["b", "c", "a"]);
//! ```

#[cfg(feature = "observability")]
use tracing::debug;

use super::bounded_queue::BoundedQueue;
use super::container::SequentialContainer;
use super::iter::{IntoIter, Iter};
use super::numeric::{IntoCapacity, IntoPriority, Priority};
use super::priority_item::PriorityItem;
use crate::config::QueueConfig;
use crate::error::QueueResult;

/// Input accepted by [`SequentialContainer::enqueue`] on a [`PriorityQueue`].
///
/// The caller states up front whether it hands over an already built item
/// or a raw payload that still needs a priority attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry<T> {
    /// A pre-built item; its priority was validated when it was created.
    Item(PriorityItem<T>),
    /// A raw payload with the priority to attach to it.
    Payload {
        /// The payload to store.
        value: T,
        /// Priority for the payload.
        priority: Priority,
    },
}

impl<T> Entry<T> {
    /// Wraps a raw payload, validating `priority` on the way in.
    ///
    /// # Errors
    ///
    /// Same as [`PriorityItem::new`].
    pub fn payload(value: T, priority: impl IntoPriority) -> QueueResult<Self> {
        Ok(Self::Payload { value, priority: priority.into_priority()? })
    }

    fn into_item(self) -> PriorityItem<T> {
        match self {
            Self::Item(item) => item,
            Self::Payload { value, priority } => PriorityItem::with_priority(value, priority),
        }
    }
}

impl<T> From<PriorityItem<T>> for Entry<T> {
    fn from(item: PriorityItem<T>) -> Self {
        Self::Item(item)
    }
}

/// Fixed-capacity queue that always serves the highest priority first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityQueue<T> {
    inner: BoundedQueue<PriorityItem<T>>,
    default_priority: Priority,
}

impl<T> PriorityQueue<T> {
    /// Creates an empty priority queue that holds at most `capacity` items.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self { inner: BoundedQueue::new(capacity), default_priority: Priority::DEFAULT }
    }

    /// Creates an empty priority queue from a loosely typed capacity.
    ///
    /// # Errors
    ///
    /// Same as [`BoundedQueue::try_new`].
    pub fn try_new(capacity: impl IntoCapacity) -> QueueResult<Self> {
        Ok(Self { inner: BoundedQueue::try_new(capacity)?, default_priority: Priority::DEFAULT })
    }

    /// Creates an empty priority queue sized by `config`; [`push`](Self::push)
    /// uses the configured default priority.
    #[must_use]
    pub fn with_config(config: &QueueConfig) -> Self {
        Self { inner: BoundedQueue::with_config(config), default_priority: config.default_priority }
    }

    /// Returns the maximum number of items that can be stored.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Returns the current item count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` when the queue has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns `true` when the queue is at capacity.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.inner.is_full()
    }

    /// Returns the priority [`push`](Self::push) attaches to payloads.
    #[must_use]
    pub fn default_priority(&self) -> Priority {
        self.default_priority
    }

    /// Inserts `value` with `priority` and returns the new count.
    ///
    /// The priority is validated before the capacity is checked.
    ///
    /// # Errors
    ///
    /// Returns a type-kind error when `priority` is not an integer number, a
    /// range-kind error when it is not positive, and
    /// [`QueueError::CapacityExceeded`](crate::error::QueueError::CapacityExceeded)
    /// when the queue is full.
    pub fn enqueue(&mut self, value: T, priority: impl IntoPriority) -> QueueResult<usize> {
        let priority = priority.into_priority().map_err(|err| {
            #[cfg(feature = "observability")]
            debug!(error = %err, "rejected item priority");
            err
        })?;
        self.enqueue_item(PriorityItem::with_priority(value, priority))
    }

    /// Inserts `value` with the queue's default priority.
    ///
    /// # Errors
    ///
    /// Returns
    /// [`QueueError::CapacityExceeded`](crate::error::QueueError::CapacityExceeded)
    /// when the queue is full.
    pub fn push(&mut self, value: T) -> QueueResult<usize> {
        self.enqueue_item(PriorityItem::with_priority(value, self.default_priority))
    }

    /// Inserts a pre-built item as is and returns the new count.
    ///
    /// # Errors
    ///
    /// Returns
    /// [`QueueError::CapacityExceeded`](crate::error::QueueError::CapacityExceeded)
    /// when the queue is full.
    pub fn enqueue_item(&mut self, item: PriorityItem<T>) -> QueueResult<usize> {
        let len = self.inner.enqueue(item)?;
        self.sift_tail_forward();
        Ok(len)
    }

    // The slots before the tail are already sorted, so swapping the new item
    // forward while its left neighbour is strictly lower gives the same order
    // as rescanning from the front after every swap.
    fn sift_tail_forward(&mut self) {
        let slots = self.inner.slots_mut();
        let mut idx = slots.len().saturating_sub(1);
        while idx > 0 && slots[idx - 1].priority() < slots[idx].priority() {
            slots.swap(idx - 1, idx);
            idx -= 1;
        }
    }

    /// Removes and returns the highest-priority item, or `None` when empty.
    pub fn dequeue(&mut self) -> Option<PriorityItem<T>> {
        self.inner.dequeue()
    }

    /// Borrows the highest-priority item without removing it.
    #[must_use]
    pub fn front(&self) -> Option<&PriorityItem<T>> {
        self.inner.front()
    }

    /// Removes all items, leaving the capacity unchanged.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Returns an iterator visiting items from highest to lowest priority.
    pub fn iter(&self) -> Iter<'_, PriorityItem<T>> {
        self.inner.iter()
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self { inner: BoundedQueue::default(), default_priority: Priority::DEFAULT }
    }
}

impl<T> IntoIterator for PriorityQueue<T> {
    type Item = PriorityItem<T>;
    type IntoIter = IntoIter<PriorityItem<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a PriorityQueue<T> {
    type Item = &'a PriorityItem<T>;
    type IntoIter = Iter<'a, PriorityItem<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> SequentialContainer for PriorityQueue<T> {
    type Item = PriorityItem<T>;
    type Input = Entry<T>;

    fn enqueue(&mut self, input: Entry<T>) -> QueueResult<usize> {
        self.enqueue_item(input.into_item())
    }

    fn dequeue(&mut self) -> Option<PriorityItem<T>> {
        Self::dequeue(self)
    }

    fn front(&self) -> Option<&PriorityItem<T>> {
        Self::front(self)
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn capacity(&self) -> usize {
        Self::capacity(self)
    }

    fn iter(&self) -> Iter<'_, PriorityItem<T>> {
        Self::iter(self)
    }

    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }

    fn is_full(&self) -> bool {
        Self::is_full(self)
    }
}
