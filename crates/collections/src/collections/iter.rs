//! Front-to-back iterators shared by [`BoundedQueue`](super::BoundedQueue)
//! and [`PriorityQueue`](super::PriorityQueue).

use std::iter::FusedIterator;
use std::{slice, vec};

/// Borrowing iterator over the occupied slots of a queue, front first.
///
/// Created by `iter()` or by iterating over `&queue`. Each call creates a
/// fresh iterator starting at the front; the queue cannot be mutated while
/// it is alive.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(slots: &'a [T]) -> Self {
        Self { inner: slots.iter() }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator that yields the elements of a queue in dequeue order.
#[derive(Debug)]
pub struct IntoIter<T> {
    inner: vec::IntoIter<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(slots: Vec<T>) -> Self {
        Self { inner: slots.into_iter() }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {
    //! Unit tests for collections::iter.
    use super::{IntoIter, Iter};

    /// Validates `Iter::new` behavior for the exhaustion scenario.
    ///
    /// Assertions:
    /// - Confirms elements are yielded in slot order.
    /// - Confirms the iterator stays exhausted once it returns `None`.
    #[test]
    fn iter_yields_slots_then_stays_done() {
        let slots = [1, 2, 3];
        let mut iter = Iter::new(&slots);
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    /// Validates `IntoIter::new` behavior for the ownership scenario.
    ///
    /// Assertions:
    /// - Confirms owned values are yielded front to back.
    #[test]
    fn into_iter_moves_values_out() {
        let iter = IntoIter::new(vec![String::from("a"), String::from("b")]);
        assert_eq!(iter.collect::<Vec<_>>(), vec!["a".to_string(), "b".to_string()]);
    }
}
