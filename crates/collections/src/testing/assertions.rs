//! Custom assertions for testing
//!
//! Provides assertion macros and functions for queue test suites.

// Allow missing panics docs for test utilities - these assertions are designed to panic
// on failure which is their core purpose in test contexts
#![allow(clippy::missing_panics_doc)]

use std::fmt::Debug;

use crate::collections::PriorityItem;

/// Assert that an error contains a specific substring
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "test-utils")]
/// # {
/// use boundq_collections::collections::BoundedQueue;
///
/// let mut queue = BoundedQueue::new(0);
/// boundq_collections::assert_error_contains!(queue.enqueue(1), "capacity exceeded");
/// # }
/// ```
#[macro_export]
macro_rules! assert_error_contains {
    ($result:expr, $substring:expr) => {
        match &$result {
            Ok(_) => panic!("Expected error but got Ok"),
            Err(e) => {
                let error_msg = format!("{}", e);
                assert!(
                    error_msg.contains($substring),
                    "Error message '{}' does not contain '{}'",
                    error_msg,
                    $substring
                );
            }
        }
    };
}

/// Assert that an error is of a specific kind
///
/// The error must expose a `kind()` accessor, as
/// [`QueueError`](crate::error::QueueError) does. For other accessors pass
/// a closure as the third argument.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "test-utils")]
/// # {
/// use boundq_collections::collections::PriorityItem;
/// use boundq_collections::error::ErrorKind;
///
/// boundq_collections::assert_error_kind!(PriorityItem::new((), 1.5), ErrorKind::TypeConstraint);
/// # }
/// ```
#[macro_export]
macro_rules! assert_error_kind {
    ($result:expr, $expected_kind:expr $(,)?) => {{
        match &$result {
            Ok(_) => panic!("Expected error but got Ok"),
            Err(e) => {
                let actual_kind = e.kind();
                let expected_kind = $expected_kind;
                assert_eq!(
                    std::mem::discriminant(&actual_kind),
                    std::mem::discriminant(&expected_kind),
                    "Error kind mismatch: expected {:?}, got {:?}",
                    expected_kind,
                    actual_kind
                );
            }
        }
    }};
    ($result:expr, $expected_kind:expr, $kind_accessor:expr $(,)?) => {{
        match &$result {
            Ok(_) => panic!("Expected error but got Ok"),
            Err(e) => {
                let actual_kind = $kind_accessor(e);
                let expected_kind = $expected_kind;
                assert_eq!(
                    std::mem::discriminant(&actual_kind),
                    std::mem::discriminant(&expected_kind),
                    "Error kind mismatch: expected {:?}, got {:?}",
                    expected_kind,
                    actual_kind
                );
            }
        }
    }};
}

/// Assert that items are ordered front to back by non-increasing priority
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "test-utils")]
/// # {
/// use boundq_collections::collections::PriorityQueue;
/// use boundq_collections::testing::assert_sorted_by_priority;
///
/// let mut queue = PriorityQueue::new(4);
/// queue.enqueue('a', 2).unwrap();
/// queue.enqueue('b', 9).unwrap();
/// assert_sorted_by_priority(queue.iter());
/// # }
/// ```
pub fn assert_sorted_by_priority<'a, T, I>(items: I)
where
    T: Debug + 'a,
    I: IntoIterator<Item = &'a PriorityItem<T>>,
{
    let mut previous: Option<&PriorityItem<T>> = None;
    for item in items {
        if let Some(prev) = previous {
            assert!(
                prev.priority() >= item.priority(),
                "Items not sorted by priority: {:?} before {:?}",
                prev,
                item
            );
        }
        previous = Some(item);
    }
}

/// Assert that draining an iterator yields exactly `expected`, in order
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "test-utils")]
/// # {
/// use boundq_collections::collections::BoundedQueue;
/// use boundq_collections::testing::assert_yields;
///
/// let mut queue = BoundedQueue::new(3);
/// queue.enqueue(1).unwrap();
/// queue.enqueue(2).unwrap();
/// assert_yields(queue.iter().copied(), &[1, 2]);
/// # }
/// ```
pub fn assert_yields<T, I>(items: I, expected: &[T])
where
    T: PartialEq + Debug,
    I: IntoIterator<Item = T>,
{
    let actual: Vec<T> = items.into_iter().collect();
    assert_eq!(actual.as_slice(), expected, "Iterator yielded unexpected sequence");
}
