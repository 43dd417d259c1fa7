//! Testing utilities and helpers
//!
//! - **[`assertions`]**: assertion macros and functions for queue contents
//!   and error kinds
//!
//! ## Usage
//!
//! ```rust
//! # #[cfg(feature = "test-utils")]
//! # {
//! use boundq_collections::collections::PriorityQueue;
//! use boundq_collections::error::ErrorKind;
//!
//! let mut queue = PriorityQueue::<&str>::new(1);
//! boundq_collections::assert_error_kind!(queue.enqueue("x", 0), ErrorKind::RangeConstraint);
//! # }
//! ```

pub mod assertions;

// Re-export assertion functions (not macros)
// Note: Macros exported with #[macro_export] are available at crate root
pub use assertions::{assert_sorted_by_priority, assert_yields};
