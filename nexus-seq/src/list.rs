//! Singly-linked sequence over slab storage.
//!
//! Nodes live in a [`slab::Slab`] owned by the list, linked front to rear by
//! slot index. The list tracks head, tail, length, and a generation counter
//! that advances on every structural change (insert or remove).
//!
//! # Costs
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `push_front`, `push_back`, `pop_front` | O(1) |
//! | `pop_back` | O(n), walks from head to find the new tail |
//! | `get`, `set`, `insert`, `remove_at` | O(index) |
//! | `remove`, `insert_after`, `index_of`, `contains` | O(n) |
//!
//! There is no backward link, so anything that needs a predecessor walks
//! from the head. This keeps a node at one element plus one key.
//!
//! # Example
//!
//! ```
//! use nexus_seq::SeqList;
//!
//! let mut list: SeqList<u64> = SeqList::new();
//! list.push_back(1);
//! list.push_back(2);
//! list.push_back(3);
//! assert_eq!(list.to_string(), "[1,2,3]");
//!
//! assert_eq!(list.remove(&2), Ok(2));
//! assert_eq!(list.index_of(&3), Some(1));
//!
//! list.insert(1, 9).unwrap();
//! assert_eq!(list.to_string(), "[1,9,3]");
//! ```

use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use std::sync::atomic::{AtomicU64, Ordering};

use slab::Slab;

use crate::node::Node;
use crate::{Cursor, Error, Key, Result};

static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(0);

#[inline]
fn next_list_id() -> u64 {
    NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed)
}

/// A singly-linked list that owns its nodes.
///
/// # Type Parameters
///
/// - `T`: Element type
/// - `K`: Link type (default `u32`). See [`Key`].
///
/// # Example
///
/// ```
/// use nexus_seq::{Error, SeqList};
///
/// let mut list: SeqList<&str> = SeqList::new();
/// list.push_back("b");
/// list.push_front("a");
/// list.insert_after(&"b", "c").unwrap();
///
/// assert_eq!(list.first(), Ok(&"a"));
/// assert_eq!(list.last(), Ok(&"c"));
/// assert_eq!(list.insert_after(&"z", "d"), Err(Error::NotFound));
/// ```
pub struct SeqList<T, K: Key = u32> {
    nodes: Slab<Node<T, K>>,
    head: K,
    tail: K,
    len: usize,
    generation: u64,
    id: u64,
}

impl<T, K: Key> Default for SeqList<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Construction and queries
// =============================================================================

impl<T, K: Key> SeqList<T, K> {
    /// Creates an empty list.
    #[inline]
    pub fn new() -> Self {
        Self::from_slab(Slab::new())
    }

    /// Creates an empty list with room for `capacity` nodes before the arena
    /// reallocates.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_slab(Slab::with_capacity(capacity))
    }

    fn from_slab(nodes: Slab<Node<T, K>>) -> Self {
        Self {
            nodes,
            head: K::NONE,
            tail: K::NONE,
            len: 0,
            generation: 0,
            id: next_list_id(),
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes the arena holds without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Returns the structural modification counter.
    ///
    /// Advances on every insert and remove. In-place replacement (`set`,
    /// `get_mut`) leaves it alone.
    #[inline]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns a reference to the front element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the list is empty.
    #[inline]
    pub fn first(&self) -> Result<&T> {
        if self.head.is_none() {
            return Err(Error::Empty);
        }
        Ok(self.node(self.head).value())
    }

    /// Returns a reference to the rear element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the list is empty.
    #[inline]
    pub fn last(&self) -> Result<&T> {
        if self.tail.is_none() {
            return Err(Error::Empty);
        }
        Ok(self.node(self.tail).value())
    }

    /// Returns a mutable reference to the front element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the list is empty.
    #[inline]
    pub fn first_mut(&mut self) -> Result<&mut T> {
        if self.head.is_none() {
            return Err(Error::Empty);
        }
        let head = self.head;
        Ok(self.node_mut(head).value_mut())
    }

    /// Returns a mutable reference to the rear element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the list is empty.
    #[inline]
    pub fn last_mut(&mut self) -> Result<&mut T> {
        if self.tail.is_none() {
            return Err(Error::Empty);
        }
        let tail = self.tail;
        Ok(self.node_mut(tail).value_mut())
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] unless `index < len`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_index(index, self.len)?;
        Ok(self.node(self.key_at(index)).value())
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// Does not advance the generation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] unless `index < len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_index(index, self.len)?;
        let key = self.key_at(index);
        Ok(self.node_mut(key).value_mut())
    }

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// Does not advance the generation: live cursors stay valid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] unless `index < len`.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        self.check_index(index, self.len)?;
        let key = self.key_at(index);
        Ok(self.node_mut(key).set_value(value))
    }

    // ========================================================================
    // Insert operations
    // ========================================================================

    /// Inserts a value at the front.
    #[inline]
    pub fn push_front(&mut self, value: T) {
        let key = self.alloc(value);
        self.link_after(K::NONE, key);
    }

    /// Inserts a value at the rear.
    #[inline]
    pub fn push_back(&mut self, value: T) {
        let key = self.alloc(value);
        self.link_after(self.tail, key);
    }

    /// Inserts a value at the rear. Same as [`push_back`](Self::push_back).
    #[inline]
    pub fn add(&mut self, value: T) {
        self.push_back(value);
    }

    /// Inserts a value at position `index`, shifting later elements back.
    ///
    /// `index == len` appends.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] unless `index <= len`. The value is
    /// dropped.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        self.check_index(index, self.len + 1)?;
        let prev = if index == 0 {
            K::NONE
        } else {
            self.key_at(index - 1)
        };
        let key = self.alloc(value);
        self.link_after(prev, key);
        Ok(())
    }

    // ========================================================================
    // Remove operations
    // ========================================================================

    /// Removes and returns the front element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the list is empty.
    #[inline]
    pub fn pop_front(&mut self) -> Result<T> {
        if self.head.is_none() {
            return Err(Error::Empty);
        }
        Ok(self.unlink_after(K::NONE, self.head))
    }

    /// Removes and returns the rear element.
    ///
    /// Walks from the head to find the new tail.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the list is empty.
    pub fn pop_back(&mut self) -> Result<T> {
        if self.tail.is_none() {
            return Err(Error::Empty);
        }
        let tail = self.tail;
        let prev = self.predecessor(tail);
        Ok(self.unlink_after(prev, tail))
    }

    /// Removes and returns the element at `index`, shifting later elements
    /// forward.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] unless `index < len`.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        self.check_index(index, self.len)?;
        let (prev, key) = if index == 0 {
            (K::NONE, self.head)
        } else {
            let prev = self.key_at(index - 1);
            (prev, self.node(prev).next())
        };
        Ok(self.unlink_after(prev, key))
    }

    /// Removes all elements.
    ///
    /// Advances the generation if anything was removed.
    pub fn clear(&mut self) {
        if self.is_empty() {
            return;
        }
        self.nodes.clear();
        self.head = K::NONE;
        self.tail = K::NONE;
        self.len = 0;
        self.bump();
    }

    /// Keeps only the elements for which `keep` returns `true`, in order.
    ///
    /// Each removal advances the generation.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        let mut prev = K::NONE;
        let mut key = self.head;
        while key.is_some() {
            let node = self.node(key);
            let next = node.next();
            if keep(node.value()) {
                prev = key;
            } else {
                self.unlink_after(prev, key);
            }
            key = next;
        }
    }

    /// Moves every element of `other` to the rear of this list, in order.
    ///
    /// `other` is left empty. Runs in O(len of `other`): the lists own
    /// separate arenas, so each element is moved rather than relinked.
    pub fn append(&mut self, other: &mut Self) {
        self.nodes.reserve(other.len);
        while let Ok(value) = other.pop_front() {
            self.push_back(value);
        }
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Returns an iterator over references to elements, front to rear.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, K> {
        Iter {
            nodes: &self.nodes,
            next: self.head,
            remaining: self.len,
        }
    }

    /// Returns a fail-fast cursor positioned before the front element.
    ///
    /// The cursor does not borrow the list; hand the list to each call.
    /// See [`Cursor`].
    #[inline]
    pub fn cursor(&self) -> Cursor<T, K> {
        Cursor::new(self)
    }

    // ========================================================================
    // Chain internals
    // ========================================================================

    #[inline]
    pub(crate) fn head(&self) -> K {
        self.head
    }

    #[inline]
    pub(crate) fn id(&self) -> u64 {
        self.id
    }

    #[inline]
    pub(crate) fn node(&self, key: K) -> &Node<T, K> {
        &self.nodes[key.as_usize()]
    }

    #[inline]
    fn node_mut(&mut self, key: K) -> &mut Node<T, K> {
        &mut self.nodes[key.as_usize()]
    }

    #[inline]
    fn bump(&mut self) {
        self.generation += 1;
    }

    #[inline]
    fn check_index(&self, index: usize, bound: usize) -> Result<()> {
        if index < bound {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            })
        }
    }

    /// Stores a value in a fresh unlinked node.
    ///
    /// # Panics
    ///
    /// Panics if the next slot index would collide with `K::NONE`.
    fn alloc(&mut self, value: T) -> K {
        assert!(
            self.nodes.vacant_key() < K::NONE.as_usize(),
            "key space exhausted"
        );
        K::from_usize(self.nodes.insert(Node::new(value)))
    }

    /// Key of the node at position `index`. Caller checks `index < len`.
    fn key_at(&self, index: usize) -> K {
        let mut key = self.head;
        for _ in 0..index {
            key = self.node(key).next();
        }
        key
    }

    /// Key of the node linking to `key`, or `NONE` if `key` is the head.
    ///
    /// `key` must be in the chain.
    pub(crate) fn predecessor(&self, key: K) -> K {
        let mut prev = K::NONE;
        let mut current = self.head;
        while current != key {
            debug_assert!(current.is_some(), "key not in chain");
            prev = current;
            current = self.node(current).next();
        }
        prev
    }

    /// Links the unlinked node `key` after `prev`, or at the front if `prev`
    /// is `NONE`.
    fn link_after(&mut self, prev: K, key: K) {
        let next = if prev.is_none() {
            core::mem::replace(&mut self.head, key)
        } else {
            let prev_node = self.node_mut(prev);
            let next = prev_node.next();
            prev_node.set_next(key);
            next
        };
        self.node_mut(key).set_next(next);

        if next.is_none() {
            self.tail = key;
        }

        self.len += 1;
        self.bump();
    }

    /// Unlinks `key`, the successor of `prev` (or the head if `prev` is
    /// `NONE`), and returns its element.
    pub(crate) fn unlink_after(&mut self, prev: K, key: K) -> T {
        let next = self.node(key).next();
        if prev.is_none() {
            self.head = next;
        } else {
            self.node_mut(prev).set_next(next);
        }

        if self.tail == key {
            self.tail = prev;
        }

        self.len -= 1;
        self.bump();
        self.nodes.remove(key.as_usize()).into_value()
    }
}

// =============================================================================
// Equality-based operations
// =============================================================================

impl<T: PartialEq, K: Key> SeqList<T, K> {
    /// Returns the position of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|v| v == value)
    }

    /// Returns `true` if some element equals `value`.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Inserts `value` immediately after the first element equal to `target`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no element equals `target`. The value is
    /// dropped.
    pub fn insert_after(&mut self, target: &T, value: T) -> Result<()> {
        let (_, anchor) = self.find(target).ok_or(Error::NotFound)?;
        let key = self.alloc(value);
        self.link_after(anchor, key);
        Ok(())
    }

    /// Removes and returns the first element equal to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no element equals `value`.
    pub fn remove(&mut self, value: &T) -> Result<T> {
        let (prev, key) = self.find(value).ok_or(Error::NotFound)?;
        Ok(self.unlink_after(prev, key))
    }

    /// First node equal to `value`, with its predecessor (`NONE` for the head).
    fn find(&self, value: &T) -> Option<(K, K)> {
        let mut prev = K::NONE;
        let mut key = self.head;
        while key.is_some() {
            let node = self.node(key);
            if node.value() == value {
                return Some((prev, key));
            }
            prev = key;
            key = node.next();
        }
        None
    }
}

// =============================================================================
// Trait impls
// =============================================================================

impl<T: Clone, K: Key> Clone for SeqList<T, K> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            head: self.head,
            tail: self.tail,
            len: self.len,
            generation: self.generation,
            id: next_list_id(),
        }
    }
}

impl<T: fmt::Debug, K: Key> fmt::Debug for SeqList<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Renders `[a,b,c]`, front to rear; `[]` when empty.
impl<T: fmt::Display, K: Key> fmt::Display for SeqList<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            fmt::Display::fmt(value, f)?;
        }
        f.write_str("]")
    }
}

impl<T: PartialEq, K: Key> PartialEq for SeqList<T, K> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq, K: Key> Eq for SeqList<T, K> {}

impl<T: Hash, K: Key> Hash for SeqList<T, K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for value in self {
            value.hash(state);
        }
    }
}

impl<T, K: Key> FromIterator<T> for SeqList<T, K> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T, K: Key> Extend<T> for SeqList<T, K> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.nodes.reserve(iter.size_hint().0);
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T: Copy + 'a, K: Key> Extend<&'a T> for SeqList<T, K> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<'a, T, K: Key> IntoIterator for &'a SeqList<T, K> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, K: Key> IntoIterator for SeqList<T, K> {
    type Item = T;
    type IntoIter = IntoIter<T, K>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to list elements, front to rear.
///
/// Holds a shared borrow of the list, so the list cannot change underneath
/// it. Use a [`Cursor`] to remove elements while walking.
pub struct Iter<'a, T, K: Key = u32> {
    nodes: &'a Slab<Node<T, K>>,
    next: K,
    remaining: usize,
}

impl<'a, T, K: Key> Iterator for Iter<'a, T, K> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.next.is_none() {
            return None;
        }

        let node = &self.nodes[self.next.as_usize()];
        self.next = node.next();
        self.remaining -= 1;
        Some(node.value())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, K: Key> ExactSizeIterator for Iter<'_, T, K> {}

impl<T, K: Key> FusedIterator for Iter<'_, T, K> {}

impl<T, K: Key> Clone for Iter<'_, T, K> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            next: self.next,
            remaining: self.remaining,
        }
    }
}

/// Owning iterator that pops elements from the front.
pub struct IntoIter<T, K: Key = u32> {
    list: SeqList<T, K>,
}

impl<T, K: Key> Iterator for IntoIter<T, K> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T, K: Key> ExactSizeIterator for IntoIter<T, K> {}

impl<T, K: Key> FusedIterator for IntoIter<T, K> {}
