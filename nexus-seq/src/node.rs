//! Chain node: one element plus a forward link.

use crate::Key;

/// A node in the chain.
///
/// The list's arena owns every node; `next` names the successor's slot, or
/// `K::NONE` for the tail.
#[derive(Debug, Clone)]
pub(crate) struct Node<T, K: Key> {
    value: T,
    next: K,
}

impl<T, K: Key> Node<T, K> {
    /// Creates an unlinked node.
    #[inline]
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            next: K::NONE,
        }
    }

    #[inline]
    pub(crate) fn value(&self) -> &T {
        &self.value
    }

    #[inline]
    pub(crate) fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Replaces the element, returning the previous one.
    #[inline]
    pub(crate) fn set_value(&mut self, value: T) -> T {
        core::mem::replace(&mut self.value, value)
    }

    #[inline]
    pub(crate) fn into_value(self) -> T {
        self.value
    }

    #[inline]
    pub(crate) fn next(&self) -> K {
        self.next
    }

    #[inline]
    pub(crate) fn set_next(&mut self, next: K) {
        self.next = next;
    }
}
