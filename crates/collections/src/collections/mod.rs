//! Bounded sequential containers
//!
//! This module provides two fixed-capacity queues over the same slot storage:
//! - **[`bounded_queue`]**: plain first-in-first-out queue
//! - **[`priority_queue`]**: queue kept sorted by [`Priority`], highest first
//! - **[`priority_item`]**: the value plus priority pair a priority queue
//!   stores
//! - **[`numeric`]**: validated [`Capacity`] and [`Priority`] arguments
//! - **[`container`]**: the [`SequentialContainer`] trait both queues
//!   implement
//!
//! ## Usage
//!
//! ```rust
//! use boundq_collections::collections::{BoundedQueue, PriorityQueue};
//!
//! // FIFO queue
//! let mut queue = BoundedQueue::new(100);
//! queue.enqueue(42).unwrap();
//! assert_eq!(queue.dequeue(), Some(42));
//!
//! // Priority queue
//! let mut jobs = PriorityQueue::new(10);
//! jobs.enqueue("backup", 1).unwrap();
//! jobs.enqueue("page-oncall", 9).unwrap();
//! assert_eq!(jobs.front().map(|item| *item.value()), Some("page-oncall"));
//! ```

pub mod bounded_queue;
pub mod container;
pub mod iter;
pub mod numeric;
pub mod priority_item;
pub mod priority_queue;

// Re-export commonly used types
pub use bounded_queue::BoundedQueue;
pub use container::SequentialContainer;
pub use iter::{IntoIter, Iter};
pub use numeric::{Capacity, IntoCapacity, IntoPriority, Priority};
pub use priority_item::PriorityItem;
pub use priority_queue::{Entry, PriorityQueue};
