//! This crate provides a doubly-linked list with stable node handles,
//! backed by a generational slot arena.
//!
//! The [`List`] allows inserting and removing nodes at any known position
//! in constant time. In compromise, positional access takes *O*(*n*) time.
//! Every insertion returns a [`NodeId`] handle the caller can keep and use
//! later, which is what classic linked-list workloads (LRU chains,
//! subscriber registries, job queues) actually need from the structure.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use arena_list::List;
//!
//! let mut list = List::from_iter([1, 2, 3, 4]);
//!
//! let three = list.node_at(2).unwrap();
//! list.insert_before(three, 0); // becomes [1, 2, 0, 3, 4]
//! assert_eq!(list.get(three), Some(&3));
//!
//! list.delete(three); // becomes [1, 2, 0, 4]
//! assert_eq!(list.get(three), None); // the handle is now stale
//!
//! list.rotate_tail_to_head();
//! assert_eq!(Vec::from_iter(list), vec![4, 1, 2, 0]);
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!  ╔════════════╗     slot 0          slot 1          slot 2
//!  ║   arena    ║ ┌─────────────┐ ┌─────────────┐ ┌╌╌╌╌╌╌╌╌╌╌╌╌╌┐
//!  ╟────────────╢ │ gen 0       │ │ gen 2       │ ┊ gen 1       ┊
//!  ║    head ───╫→│  next ──────┼→│  next: None │ ┊   Vacant    ┊
//!  ║    tail ───╫→│  prev: None │←┼─ prev       │ ┊  next_free  ┊
//!  ╟────────────╢ │  payload T  │ │  payload T  │ └╌╌╌╌╌╌╌╌╌╌╌╌╌┘
//!  ║ dup        ║ └─────────────┘ └─────────────┘       ↑
//!  ║ destroy    ║                               free ───┘
//!  ║ match      ║
//!  ╚════════════╝
//!       List
//! ```
//! The `List` contains:
//! - the arena, a vector of generation-counted slots that owns every node;
//! - `head`/`tail` handles, `None` exactly when the list is empty;
//! - three optional value hooks (dup, destroy, match).
//!
//! Each node lives in an arena slot, which contains:
//! - the `next` handle of the next node (or `None` if it is the last node);
//! - the `prev` handle of the previous node (or `None` if it is the first
//!   node);
//! - the actual payload `T`.
//!
//! Vacated slots are threaded into a free list and reused before the
//! backing vector grows, and each vacation bumps the slot's generation.
//! A [`NodeId`] pairs a slot index with the generation it was issued
//! under, so a handle to a removed node is *detected* as stale rather
//! than silently resolving to whatever reused its slot: value reads
//! return `None`, structural operations that take an anchor handle panic.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators.
//! These are double-ended, fused iterators and borrow the list for their
//! whole lifetime. [`IterMut`] provides mutability of the values (but not
//! of the linked structure of the list).
//!
//! ## Examples
//!
//! ```
//! use arena_list::List;
//!
//! let mut list = List::from_iter([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next_back(), Some(&3));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), None);
//! assert_eq!(iter.next(), None); // Fused
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Cursors
//!
//! Beside iteration, the detached [`Cursor`] walks the list in either
//! [`Direction`] without borrowing it, so the list can be mutated between
//! steps. Deleting the just-yielded node is explicitly supported:
//!
//! ```
//! use arena_list::{Direction, List};
//!
//! let mut list = List::from_iter(0..6);
//! let mut cursor = list.cursor(Direction::Forward);
//! while let Some(node) = cursor.next(&list) {
//!     if list.get(node).unwrap() % 2 == 0 {
//!         list.delete(node);
//!     }
//! }
//! assert_eq!(Vec::from_iter(list), vec![1, 3, 5]);
//! ```
//!
//! # Value Hooks
//!
//! The container treats its values as opaque, and exposes three optional
//! hooks to customize the operations that would otherwise need to know
//! about them: [`set_dup`] (deep copy, used by [`duplicate`]),
//! [`set_destroy`] (release, run right before the list drops a value it
//! owns), and [`set_match`] (search predicate, used by [`search`]).
//! [`duplicate`] hands all three hooks to the copy.
//!
//! ```
//! use arena_list::List;
//!
//! let mut list = List::new();
//! list.set_match(|value: &&str, key: &&str| value.eq_ignore_ascii_case(key));
//!
//! let hello = list.push_back("Hello");
//! list.push_back("world");
//! assert_eq!(list.search(&"HELLO"), Some(hello));
//! ```
//!
//! [`List`]: crate::List
//! [`NodeId`]: crate::NodeId
//! [`Iter`]: crate::Iter
//! [`IterMut`]: crate::IterMut
//! [`Cursor`]: crate::Cursor
//! [`Direction`]: crate::Direction
//! [`set_dup`]: crate::List::set_dup
//! [`set_destroy`]: crate::List::set_destroy
//! [`set_match`]: crate::List::set_match
//! [`duplicate`]: crate::List::duplicate
//! [`search`]: crate::List::search

#[doc(inline)]
pub use list::cursor::{Cursor, Direction};
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::{DuplicateError, List, NodeId};

pub mod list;
