//! Singly-linked sequence container with fail-fast cursors.
//!
//! [`SeqList`] is a position- and value-addressable list built on a forward
//! chain of nodes. Nodes live in a slab owned by the list and link to each
//! other by slot index, so there are no raw pointers and no reference
//! counting: the list is the single owner of every element.
//!
//! # Quick Start
//!
//! ```
//! use nexus_seq::{Error, SeqList};
//!
//! let mut list: SeqList<u64> = SeqList::new();
//! list.push_back(1);
//! list.push_back(2);
//! list.push_back(3);
//!
//! assert_eq!(list.remove(&2), Ok(2));
//! assert_eq!(list.to_string(), "[1,3]");
//! assert_eq!(list.index_of(&3), Some(1));
//!
//! list.insert(1, 9).unwrap();
//! assert_eq!(list.to_string(), "[1,9,3]");
//!
//! assert_eq!(list.get(7), Err(Error::IndexOutOfRange { index: 7, len: 3 }));
//! ```
//!
//! # Cursors
//!
//! A [`Cursor`] walks the list front to rear and can remove the element it
//! just returned. It holds no borrow; the list is passed to each call. A
//! generation counter on the list catches structural changes made behind the
//! cursor's back.
//!
//! ```
//! use nexus_seq::{Error, SeqList};
//!
//! let mut list: SeqList<u64> = [1, 9, 3].into_iter().collect();
//!
//! let mut cursor = list.cursor();
//! while cursor.has_next() {
//!     if *cursor.next(&list)? == 9 {
//!         cursor.remove(&mut list)?;
//!     }
//! }
//! assert_eq!(list.to_string(), "[1,3]");
//!
//! let mut stale = list.cursor();
//! list.push_front(0);
//! assert_eq!(stale.next(&list), Err(Error::ModifiedDuringIteration));
//! # Ok::<(), Error>(())
//! ```
//!
//! # Generation Counter
//!
//! | Operation | Advances generation |
//! |-----------|---------------------|
//! | push, insert, insert_after | yes |
//! | pop, remove, remove_at, cursor remove | yes |
//! | clear, retain, append (when something moves) | yes |
//! | set, get_mut, first_mut, last_mut | no |
//! | reads, iteration, Display | no |
//!
//! # Key Types
//!
//! Links are slot indices of a [`Key`] type, `u32` by default. A narrower key
//! shrinks every node; the list panics if it would need more slots than the
//! key can address.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cursor;
pub mod error;
pub mod indexed;
pub mod key;
pub mod list;
mod node;

pub use cursor::Cursor;
pub use error::{Error, Result};
pub use indexed::{IndexedList, ListCursor};
pub use key::Key;
pub use list::{IntoIter, Iter, SeqList};
