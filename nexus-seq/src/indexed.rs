//! Indexed unsorted list contract.
//!
//! [`IndexedList`] names the operations a position- and value-addressable
//! sequence offers, so callers and test suites can be written once and run
//! against any implementation. [`SeqList`] is the implementation in this
//! crate.
//!
//! [`ListCursor`] is the forward iteration half of the contract. Like
//! [`Cursor`], it is handed the list on every call.

use crate::{Cursor, Key, Result, SeqList};

/// A mutable sequence addressable by position and by value.
///
/// Value-based operations use `T`'s equality and always act on the first
/// (lowest-index) match.
///
/// # Example
///
/// ```
/// use nexus_seq::{IndexedList, SeqList};
///
/// fn rotate<L: IndexedList<u32>>(list: &mut L) {
///     if let Ok(front) = list.pop_front() {
///         list.push_back(front);
///     }
/// }
///
/// let mut list: SeqList<u32> = (1..=3).collect();
/// rotate(&mut list);
/// assert_eq!(list.to_string(), "[2,3,1]");
/// ```
pub trait IndexedList<T: PartialEq> {
    /// Forward cursor type returned by [`cursor`](Self::cursor).
    type Cursor: ListCursor<Self, T>;

    /// Inserts at the front.
    fn push_front(&mut self, value: T);

    /// Inserts at the rear.
    fn push_back(&mut self, value: T);

    /// Inserts at the rear.
    fn add(&mut self, value: T) {
        self.push_back(value);
    }

    /// Inserts after the first element equal to `target`.
    fn insert_after(&mut self, target: &T, value: T) -> Result<()>;

    /// Inserts at `index`, `0..=len`.
    fn insert(&mut self, index: usize, value: T) -> Result<()>;

    /// Removes the front element.
    fn pop_front(&mut self) -> Result<T>;

    /// Removes the rear element.
    fn pop_back(&mut self) -> Result<T>;

    /// Removes the first element equal to `value`.
    fn remove(&mut self, value: &T) -> Result<T>;

    /// Removes the element at `index`, `0..len`.
    fn remove_at(&mut self, index: usize) -> Result<T>;

    /// Replaces the element at `index`, returning the previous one.
    fn set(&mut self, index: usize, value: T) -> Result<T>;

    /// Returns the element at `index`.
    fn get(&self, index: usize) -> Result<&T>;

    /// Position of the first element equal to `value`.
    fn index_of(&self, value: &T) -> Option<usize>;

    /// Front element.
    fn first(&self) -> Result<&T>;

    /// Rear element.
    fn last(&self) -> Result<&T>;

    /// Number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if some element equals `value`.
    fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }

    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Creates a forward cursor positioned before the front element.
    fn cursor(&self) -> Self::Cursor;
}

/// Fail-fast forward cursor over a list of type `L`.
///
/// # Example
///
/// ```
/// use nexus_seq::{IndexedList, ListCursor, SeqList};
///
/// fn drop_matching<L: IndexedList<u32>>(list: &mut L, value: u32) -> usize {
///     let mut cursor = list.cursor();
///     let mut removed = 0;
///     while cursor.has_next() {
///         if *cursor.next(list).unwrap() == value {
///             cursor.remove(list).unwrap();
///             removed += 1;
///         }
///     }
///     removed
/// }
///
/// let mut list: SeqList<u32> = [1, 2, 1, 3].into_iter().collect();
/// assert_eq!(drop_matching(&mut list, 1), 2);
/// assert_eq!(list.to_string(), "[2,3]");
/// ```
pub trait ListCursor<L: ?Sized, T> {
    /// Returns `true` if another element is waiting.
    fn has_next(&self) -> bool;

    /// Returns the next element and moves past it.
    fn next<'a>(&mut self, list: &'a L) -> Result<&'a T>;

    /// Removes the element most recently returned by [`next`](Self::next).
    fn remove(&mut self, list: &mut L) -> Result<T>;
}

impl<T, K: Key> ListCursor<SeqList<T, K>, T> for Cursor<T, K> {
    #[inline]
    fn has_next(&self) -> bool {
        Cursor::has_next(self)
    }

    #[inline]
    fn next<'a>(&mut self, list: &'a SeqList<T, K>) -> Result<&'a T> {
        Cursor::next(self, list)
    }

    #[inline]
    fn remove(&mut self, list: &mut SeqList<T, K>) -> Result<T> {
        Cursor::remove(self, list)
    }
}

impl<T: PartialEq, K: Key> IndexedList<T> for SeqList<T, K> {
    type Cursor = Cursor<T, K>;

    #[inline]
    fn push_front(&mut self, value: T) {
        SeqList::push_front(self, value);
    }

    #[inline]
    fn push_back(&mut self, value: T) {
        SeqList::push_back(self, value);
    }

    #[inline]
    fn insert_after(&mut self, target: &T, value: T) -> Result<()> {
        SeqList::insert_after(self, target, value)
    }

    #[inline]
    fn insert(&mut self, index: usize, value: T) -> Result<()> {
        SeqList::insert(self, index, value)
    }

    #[inline]
    fn pop_front(&mut self) -> Result<T> {
        SeqList::pop_front(self)
    }

    #[inline]
    fn pop_back(&mut self) -> Result<T> {
        SeqList::pop_back(self)
    }

    #[inline]
    fn remove(&mut self, value: &T) -> Result<T> {
        SeqList::remove(self, value)
    }

    #[inline]
    fn remove_at(&mut self, index: usize) -> Result<T> {
        SeqList::remove_at(self, index)
    }

    #[inline]
    fn set(&mut self, index: usize, value: T) -> Result<T> {
        SeqList::set(self, index, value)
    }

    #[inline]
    fn get(&self, index: usize) -> Result<&T> {
        SeqList::get(self, index)
    }

    #[inline]
    fn index_of(&self, value: &T) -> Option<usize> {
        SeqList::index_of(self, value)
    }

    #[inline]
    fn first(&self) -> Result<&T> {
        SeqList::first(self)
    }

    #[inline]
    fn last(&self) -> Result<&T> {
        SeqList::last(self)
    }

    #[inline]
    fn len(&self) -> usize {
        SeqList::len(self)
    }

    #[inline]
    fn contains(&self, value: &T) -> bool {
        SeqList::contains(self, value)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        SeqList::is_empty(self)
    }

    #[inline]
    fn cursor(&self) -> Self::Cursor {
        SeqList::cursor(self)
    }
}
