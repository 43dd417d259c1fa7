//! Bounded FIFO and priority queues with explicit capacity and priority
//! validation.
//!
//! # Safety and Quality
//!
//! The crate forbids `unsafe` code and never panics on caller input: invalid
//! capacities, invalid priorities and overflowing a full queue are all
//! reported as [`QueueError`] values.
//!
//! # Feature Flags
//!
//! - `observability`: emit `tracing` events for insertions, removals,
//!   rejected arguments and configuration loading
//! - `serde`: derive `Serialize`/`Deserialize` for items, priorities,
//!   capacities and [`QueueConfig`]
//! - `test-utils`: expose the [`testing`] assertion helpers

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod collections;
pub mod config;
pub mod error;

// Testing utilities
// ---------------------------------------------------------------
#[cfg(any(feature = "test-utils", test))]
pub mod testing;

// Re-export commonly used types and traits for convenience
// ------------------------
pub use collections::{
    BoundedQueue, Capacity, Entry, IntoCapacity, IntoPriority, Priority, PriorityItem,
    PriorityQueue, SequentialContainer,
};
pub use config::{QueueConfig, QueueConfigBuilder};
pub use error::{
    ConfigError, ErrorClassification, ErrorKind, ErrorSeverity, QueueError, QueueResult,
};
