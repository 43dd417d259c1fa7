//! Value plus priority pair stored by [`PriorityQueue`](super::PriorityQueue).

use super::numeric::{IntoPriority, Priority};
use crate::error::QueueResult;

/// An immutable payload tagged with a strictly positive priority.
///
/// The priority is validated when the item is built, so an existing
/// `PriorityItem` always carries a legal priority.
///
/// ```
/// use boundq_collections::collections::PriorityItem;
/// use boundq_collections::error::ErrorKind;
///
/// let item = PriorityItem::new("deploy", 5).unwrap();
/// assert_eq!(item.value(), &"deploy");
/// assert_eq!(item.priority().get(), 5);
///
/// assert_eq!(PriorityItem::new("x", 0).unwrap_err().kind(), ErrorKind::RangeConstraint);
/// assert_eq!(PriorityItem::new("x", 1.5).unwrap_err().kind(), ErrorKind::TypeConstraint);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PriorityItem<T> {
    value: T,
    priority: Priority,
}

impl<T> PriorityItem<T> {
    /// Pairs `value` with a validated `priority`.
    ///
    /// # Errors
    ///
    /// Returns a type-kind error when `priority` is not an integer number and
    /// a range-kind error when it is not greater than zero.
    pub fn new(value: T, priority: impl IntoPriority) -> QueueResult<Self> {
        Ok(Self::with_priority(value, priority.into_priority()?))
    }

    /// Pairs `value` with an already validated priority.
    #[must_use]
    pub const fn with_priority(value: T, priority: Priority) -> Self {
        Self { value, priority }
    }

    /// Borrows the payload.
    #[must_use]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Consumes the item, returning the payload.
    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }

    /// Consumes the item, returning the payload and its priority.
    #[must_use]
    pub fn into_parts(self) -> (T, Priority) {
        (self.value, self.priority)
    }
}
