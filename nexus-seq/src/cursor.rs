//! Fail-fast forward cursor.
//!
//! A [`Cursor`] walks a [`SeqList`] front to rear and can remove the element
//! it just returned. It does not borrow the list: the list is passed to every
//! call, so the caller is free to mutate the list directly in between. The
//! cursor notices when that happens.
//!
//! # Fail-fast
//!
//! The cursor snapshots the list's generation when it is created. Every
//! [`next`](Cursor::next) and [`remove`](Cursor::remove) compares the snapshot
//! against the live generation and fails with
//! [`Error::ModifiedDuringIteration`] on mismatch. Removal through the cursor
//! advances both counters in step, so the cursor's own removals never trip
//! the check.
//!
//! Once the check has failed the cursor stays invalid; create a new one.
//!
//! # Storage Invariant
//!
//! A cursor must always be used with the list that created it. A clone of
//! that list counts as a different list. Every call asserts this and panics
//! on a foreign list, since the cursor's slot keys mean nothing there.

use core::marker::PhantomData;

use crate::{Error, Key, Result, SeqList};

/// External fail-fast cursor over a [`SeqList`].
///
/// # Example
///
/// ```
/// use nexus_seq::SeqList;
///
/// let mut list: SeqList<u64> = (1..=6).collect();
/// let mut cursor = list.cursor();
///
/// // Drop every even element while walking
/// while cursor.has_next() {
///     if cursor.next(&list).unwrap() % 2 == 0 {
///         cursor.remove(&mut list).unwrap();
///     }
/// }
///
/// assert_eq!(list.to_string(), "[1,3,5]");
/// ```
///
/// Direct mutation invalidates the cursor:
///
/// ```
/// use nexus_seq::{Error, SeqList};
///
/// let mut list: SeqList<u64> = (1..=3).collect();
/// let mut cursor = list.cursor();
///
/// list.push_back(4);
/// assert_eq!(cursor.next(&list), Err(Error::ModifiedDuringIteration));
/// ```
pub struct Cursor<T, K: Key = u32> {
    next: K,
    last: K,
    generation: u64,
    can_remove: bool,
    owner: u64,
    _marker: PhantomData<fn() -> T>,
}

impl<T, K: Key> Cursor<T, K> {
    #[inline]
    pub(crate) fn new(list: &SeqList<T, K>) -> Self {
        Self {
            next: list.head(),
            last: K::NONE,
            generation: list.generation(),
            can_remove: false,
            owner: list.id(),
            _marker: PhantomData,
        }
    }

    /// Returns `true` if another element is waiting.
    ///
    /// Looks at position only; it never checks the generation.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Returns `true` if `list` has not been structurally modified behind
    /// this cursor's back.
    #[inline]
    pub fn is_valid(&self, list: &SeqList<T, K>) -> bool {
        self.generation == list.generation()
    }

    /// Returns the next element and moves past it.
    ///
    /// # Errors
    ///
    /// - [`Error::ModifiedDuringIteration`] if the list changed since the
    ///   cursor was created (other than through this cursor).
    /// - [`Error::Empty`] if the cursor is past the last element. The cursor
    ///   stays usable; `has_next` keeps returning `false`.
    ///
    /// # Panics
    ///
    /// Panics if `list` is not the list that created this cursor.
    pub fn next<'a>(&mut self, list: &'a SeqList<T, K>) -> Result<&'a T> {
        self.check(list)?;
        if self.next.is_none() {
            return Err(Error::Empty);
        }

        let node = list.node(self.next);
        self.last = self.next;
        self.next = node.next();
        self.can_remove = true;
        Ok(node.value())
    }

    /// Removes the element most recently returned by [`next`](Self::next).
    ///
    /// Walks from the head to find the predecessor. The cursor keeps its
    /// position: the following `next` returns the element after the removed
    /// one.
    ///
    /// # Errors
    ///
    /// - [`Error::ModifiedDuringIteration`] if the list changed since the
    ///   cursor was created (other than through this cursor).
    /// - [`Error::IllegalState`] if `next` has not succeeded since the cursor
    ///   was created or since the last removal.
    ///
    /// # Panics
    ///
    /// Panics if `list` is not the list that created this cursor.
    pub fn remove(&mut self, list: &mut SeqList<T, K>) -> Result<T> {
        self.check(list)?;
        if !self.can_remove {
            return Err(Error::IllegalState);
        }

        let key = self.last;
        let prev = list.predecessor(key);
        let value = list.unlink_after(prev, key);

        self.generation += 1;
        debug_assert_eq!(self.generation, list.generation());

        self.last = K::NONE;
        self.can_remove = false;
        Ok(value)
    }

    #[inline]
    fn check(&self, list: &SeqList<T, K>) -> Result<()> {
        assert!(
            self.owner == list.id(),
            "cursor used with a different list"
        );
        if self.generation != list.generation() {
            return Err(Error::ModifiedDuringIteration);
        }
        Ok(())
    }
}

impl<T, K: Key> core::fmt::Debug for Cursor<T, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Cursor")
            .field("next", &self.next)
            .field("last", &self.last)
            .field("generation", &self.generation)
            .field("can_remove", &self.can_remove)
            .finish()
    }
}
