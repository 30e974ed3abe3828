use std::fmt::{Debug, Formatter};

use thiserror::Error;

use crate::list::arena::{Arena, Node};
use crate::list::hooks::{DestroyFn, DupFn, MatchFn};
use crate::{Cursor, Direction, Iter, IterMut};

pub mod cursor;
pub mod iterator;

mod algorithms;
mod arena;
mod hooks;

pub use arena::NodeId;

/// The `List` is a doubly-linked list with stable node handles, backed by a
/// generational slot arena. It allows inserting and removing nodes at any
/// known position in constant time; positional access takes *O*(*n*) time.
///
/// The `List` contains:
/// - the arena owning every node (value + neighbor handles);
/// - `head`/`tail` handles, `None` exactly when the list is empty;
/// - three optional value hooks (`dup`, `destroy`, `match`) customizing
///   copy, release and search semantics for the stored values.
///
/// # Node handles
///
/// Every insertion returns a [`NodeId`]. The handle stays valid until that
/// exact node is removed, no matter how the rest of the list is mutated,
/// and a handle to a removed node is detected as stale rather than
/// dereferenced: value reads return `None`, structural operations that
/// take an anchor handle panic.
///
/// # Value hooks
///
/// - [`set_dup`](List::set_dup): deep-copy hook used by
///   [`duplicate`](List::duplicate); absent means values are `Clone`d.
/// - [`set_destroy`](List::set_destroy): release hook run right before the
///   list drops a value it owns; absent means values are simply dropped.
/// - [`set_match`](List::set_match): `(value, key)` predicate used by
///   [`search`](List::search); absent means address identity.
pub struct List<T> {
    arena: Arena<T>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    pub(crate) dup: Option<DupFn<T>>,
    pub(crate) destroy: Option<DestroyFn<T>>,
    pub(crate) matches: Option<MatchFn<T>>,
}

/// The dup hook declined to copy a value during [`List::duplicate`].
///
/// The partially built copy has already been released (running its destroy
/// hook once per copied value); the source list is untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("dup hook failed to copy a value")]
pub struct DuplicateError;

// private methods
impl<T> List<T> {
    /// Resolve a handle the caller vouched for, panicking if it is stale.
    fn node(&self, id: NodeId) -> &Node<T> {
        self.arena.get(id).expect("stale or foreign node handle")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.arena
            .get_mut(id)
            .expect("stale or foreign node handle")
    }

    /// Unlink the node behind `id` and take it out of the arena, or return
    /// `None` if the handle is stale. `head`/`tail` are fixed up when the
    /// node was a boundary node.
    fn detach(&mut self, id: NodeId) -> Option<Node<T>> {
        let node = self.arena.remove(id)?;
        match node.prev {
            Some(prev) => self.node_mut(prev).next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.node_mut(next).prev = node.prev,
            None => self.tail = node.prev,
        }
        Some(node)
    }

    /// Run the destroy hook on a value the list is about to drop.
    fn release_value(&self, mut value: T) {
        if let Some(destroy) = &self.destroy {
            destroy(&mut value);
        }
    }
}

impl<T> List<T> {
    /// Create an empty `List` with no hooks attached.
    ///
    /// # Examples
    /// ```
    /// use arena_list::List;
    /// let list: List<u32> = List::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            head: None,
            tail: None,
            dup: None,
            destroy: None,
            matches: None,
        }
    }

    /// Create an empty `List` whose arena can hold `capacity` nodes before
    /// growing.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            head: None,
            tail: None,
            dup: None,
            destroy: None,
            matches: None,
        }
    }

    /// Returns the number of nodes in the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_back(3);
    /// assert_eq!(list.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_list::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Returns the handle of the first node, or `None` if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.first(), None);
    ///
    /// let a = list.push_front(1);
    /// assert_eq!(list.first(), Some(a));
    /// ```
    #[inline]
    pub fn first(&self) -> Option<NodeId> {
        self.head
    }

    /// Returns the handle of the last node, or `None` if the list is empty.
    #[inline]
    pub fn last(&self) -> Option<NodeId> {
        self.tail
    }

    /// Provides a reference to the value behind `node`, or `None` if the
    /// handle is stale.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_list::List;
    ///
    /// let mut list = List::new();
    /// let a = list.push_back(1);
    /// assert_eq!(list.get(a), Some(&1));
    ///
    /// list.delete(a);
    /// assert_eq!(list.get(a), None);
    /// ```
    #[inline]
    pub fn get(&self, node: NodeId) -> Option<&T> {
        Some(&self.arena.get(node)?.value)
    }

    /// Provides a mutable reference to the value behind `node`, or `None`
    /// if the handle is stale.
    #[inline]
    pub fn get_mut(&mut self, node: NodeId) -> Option<&mut T> {
        Some(&mut self.arena.get_mut(node)?.value)
    }

    /// Returns the handle of the node after `node`, or `None` if `node` is
    /// the tail or the handle is stale.
    #[inline]
    pub fn next_node(&self, node: NodeId) -> Option<NodeId> {
        self.arena.get(node)?.next
    }

    /// Returns the handle of the node before `node`, or `None` if `node`
    /// is the head or the handle is stale.
    #[inline]
    pub fn prev_node(&self, node: NodeId) -> Option<NodeId> {
        self.arena.get(node)?.prev
    }

    /// Provides a reference to the front value, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(self.head?)
    }

    /// Provides a mutable reference to the front value, or `None` if the
    /// list is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(self.head?)
    }

    /// Provides a reference to the back value, or `None` if the list is
    /// empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.get(self.tail?)
    }

    /// Provides a mutable reference to the back value, or `None` if the
    /// list is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.get_mut(self.tail?)
    }

    /// Adds a value first in the list and returns its handle.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Panics
    ///
    /// Panics if the arena runs out of addressable slots, which happens
    /// when the list already holds more than `u32::MAX` nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.front(), Some(&2));
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    pub fn push_front(&mut self, value: T) -> NodeId {
        let id = self.arena.insert(Node {
            value,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(head) => self.node_mut(head).prev = Some(id),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        id
    }

    /// Appends a value to the back of the list and returns its handle.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Panics
    ///
    /// Panics if the arena runs out of addressable slots, which happens
    /// when the list already holds more than `u32::MAX` nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.back(), Some(&3));
    /// ```
    pub fn push_back(&mut self, value: T) -> NodeId {
        let id = self.arena.insert(Node {
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(tail) => self.node_mut(tail).next = Some(id),
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        id
    }

    /// Inserts a value right before `anchor` and returns its handle. If
    /// `anchor` is the head, the new node becomes the head.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Panics
    ///
    /// Panics if `anchor` is stale, or if the arena runs out of
    /// addressable slots (more than `u32::MAX` nodes).
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_list::List;
    ///
    /// let mut list = List::new();
    /// let b = list.push_back('b');
    /// list.insert_before(b, 'a');
    /// assert_eq!(list.front(), Some(&'a'));
    /// ```
    pub fn insert_before(&mut self, anchor: NodeId, value: T) -> NodeId {
        let prev = self.node(anchor).prev;
        let id = self.arena.insert(Node {
            value,
            prev,
            next: Some(anchor),
        });
        self.node_mut(anchor).prev = Some(id);
        match prev {
            Some(prev) => self.node_mut(prev).next = Some(id),
            None => self.head = Some(id),
        }
        id
    }

    /// Inserts a value right after `anchor` and returns its handle. If
    /// `anchor` is the tail, the new node becomes the tail.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Panics
    ///
    /// Panics if `anchor` is stale, or if the arena runs out of
    /// addressable slots (more than `u32::MAX` nodes).
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_list::List;
    ///
    /// let mut list = List::new();
    /// let a = list.push_back('a');
    /// list.push_back('c');
    /// list.insert_after(a, 'b');
    /// assert_eq!(Vec::from_iter(list), vec!['a', 'b', 'c']);
    /// ```
    pub fn insert_after(&mut self, anchor: NodeId, value: T) -> NodeId {
        let next = self.node(anchor).next;
        let id = self.arena.insert(Node {
            value,
            prev: Some(anchor),
            next,
        });
        self.node_mut(anchor).next = Some(id);
        match next {
            Some(next) => self.node_mut(next).prev = Some(id),
            None => self.tail = Some(id),
        }
        id
    }

    /// Unlinks the node behind `node`, runs the destroy hook on its value,
    /// and drops it. The handle becomes stale.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Panics
    ///
    /// Panics if `node` is already stale.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_list::List;
    ///
    /// let mut list = List::new();
    /// let a = list.push_back(1);
    /// let b = list.push_back(2);
    ///
    /// list.delete(a);
    /// assert_eq!(list.first(), Some(b));
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn delete(&mut self, node: NodeId) {
        match self.detach(node) {
            Some(node) => self.release_value(node.value),
            None => panic!("stale or foreign node handle"),
        }
    }

    /// Unlinks the node behind `node` and hands its value back, skipping
    /// the destroy hook. Returns `None` if the handle is stale.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_list::List;
    ///
    /// let mut list = List::new();
    /// let a = list.push_back(1);
    /// assert_eq!(list.remove(a), Some(1));
    /// assert_eq!(list.remove(a), None);
    /// ```
    pub fn remove(&mut self, node: NodeId) -> Option<T> {
        Some(self.detach(node)?.value)
    }

    /// Removes the first value and returns it, skipping the destroy hook,
    /// or `None` if the list is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_list::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), None);
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        self.remove(self.head?)
    }

    /// Removes the last value and returns it, skipping the destroy hook,
    /// or `None` if the list is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn pop_back(&mut self) -> Option<T> {
        self.remove(self.tail?)
    }

    /// Removes every node, running the destroy hook once per value. The
    /// list stays valid and empty; every outstanding handle becomes stale.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_list::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    ///
    /// list.clear();
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.front(), None);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        while let Some(head) = self.head {
            self.delete(head);
        }
    }

    /// Returns the handle of the node at the given zero-based position.
    ///
    /// Non-negative indices count from the head (0 is the head); negative
    /// indices count from the tail (-1 is the tail, -2 the node before it,
    /// and so on). Out-of-range indices return `None`.
    ///
    /// # Complexity
    ///
    /// Walks linearly from the head for `index >= 0` and from the tail for
    /// `index < 0`, so this operation should compute in *O*(|`index`|)
    /// time.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_list::List;
    ///
    /// let mut list = List::new();
    /// let a = list.push_back('a');
    /// list.push_back('b');
    /// let c = list.push_back('c');
    ///
    /// assert_eq!(list.node_at(0), Some(a));
    /// assert_eq!(list.node_at(2), Some(c));
    /// assert_eq!(list.node_at(-1), Some(c));
    /// assert_eq!(list.node_at(-3), Some(a));
    /// assert_eq!(list.node_at(3), None);
    /// assert_eq!(list.node_at(-4), None);
    /// ```
    pub fn node_at(&self, index: isize) -> Option<NodeId> {
        if index >= 0 {
            let mut current = self.head;
            for _ in 0..index {
                current = self.node(current?).next;
            }
            current
        } else {
            let mut current = self.tail;
            for _ in 0..-(index + 1) {
                current = self.node(current?).prev;
            }
            current
        }
    }

    /// Scans head→tail for the first node whose value matches `key` and
    /// returns its handle, or `None` if no node matches.
    ///
    /// With a match hook attached (see [`set_match`](List::set_match)) the
    /// hook decides; without one, a node matches only when its value *is*
    /// `key` — the very same object, compared by address, not by equality.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(String::from("a"));
    /// let b = list.push_back(String::from("b"));
    ///
    /// // Without a match hook, only the stored object itself matches.
    /// let key = String::from("b");
    /// assert_eq!(list.search(&key), None);
    ///
    /// list.set_match(|value, key| value == key);
    /// assert_eq!(list.search(&key), Some(b));
    /// ```
    pub fn search(&self, key: &T) -> Option<NodeId> {
        let mut cursor = self.cursor(Direction::Forward);
        while let Some(id) = cursor.next(self) {
            let value = &self.node(id).value;
            let hit = match &self.matches {
                Some(matches) => matches(value, key),
                None => std::ptr::eq(value, key),
            };
            if hit {
                return Some(id);
            }
        }
        None
    }

    /// Produces a new `List` with the same hooks and an independently
    /// owned chain of copied values in the same order.
    ///
    /// With a dup hook attached (see [`set_dup`](List::set_dup)) every
    /// value is copied through it; if the hook returns `None`, the whole
    /// operation aborts with [`DuplicateError`] and the partial copy is
    /// released (running its destroy hook once per copied value). Without
    /// a hook, values are `Clone`d. The source list is never modified.
    ///
    /// The `Clone` bound backs the hook-less fallback; for value types
    /// that are not `Clone`, use [`duplicate_with`](List::duplicate_with).
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_list::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// let copy = list.duplicate().unwrap();
    /// assert_eq!(Vec::from_iter(copy), vec![1, 2]);
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn duplicate(&self) -> Result<Self, DuplicateError>
    where
        T: Clone,
    {
        match self.dup.clone() {
            Some(dup) => self.duplicate_with(move |value| dup(value)),
            None => self.duplicate_with(|value| Some(value.clone())),
        }
    }

    /// Like [`duplicate`](List::duplicate), but copies every value
    /// through the given closure instead of the dup hook (or `Clone`),
    /// so the value type needs no `Clone` impl. The copy still inherits
    /// all three hooks, and a `None` from the closure aborts with
    /// [`DuplicateError`], releasing the partial copy.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_list::List;
    ///
    /// struct Ticket(u32); // deliberately not Clone
    ///
    /// let mut list = List::new();
    /// list.push_back(Ticket(7));
    ///
    /// let copy = list.duplicate_with(|t| Some(Ticket(t.0))).unwrap();
    /// assert_eq!(copy.front().map(|t| t.0), Some(7));
    /// ```
    pub fn duplicate_with(&self, dup: impl Fn(&T) -> Option<T>) -> Result<Self, DuplicateError> {
        let mut copy = Self::with_capacity(self.len());
        copy.dup = self.dup.clone();
        copy.destroy = self.destroy.clone();
        copy.matches = self.matches.clone();
        let mut cursor = self.cursor(Direction::Forward);
        while let Some(id) = cursor.next(self) {
            let value = &self.node(id).value;
            copy.push_back(dup(value).ok_or(DuplicateError)?);
        }
        Ok(copy)
    }

    /// Detaches the tail node and reinserts it as the new head. No-op if
    /// the list has fewer than two nodes. Handles are preserved.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_list::List;
    ///
    /// let mut list: List<_> = (1..=3).collect();
    /// list.rotate_tail_to_head();
    /// assert_eq!(Vec::from_iter(list), vec![3, 1, 2]);
    /// ```
    pub fn rotate_tail_to_head(&mut self) {
        let (head, tail) = match (self.head, self.tail) {
            (Some(head), Some(tail)) if head != tail => (head, tail),
            _ => return,
        };
        // Detach the current tail.
        let before_tail = self.node(tail).prev;
        if let Some(before_tail) = before_tail {
            self.node_mut(before_tail).next = None;
        }
        self.tail = before_tail;
        // Move it in as the head.
        let node = self.node_mut(tail);
        node.prev = None;
        node.next = Some(head);
        self.node_mut(head).prev = Some(tail);
        self.head = Some(tail);
    }

    /// Detaches the head node and reinserts it as the new tail. No-op if
    /// the list has fewer than two nodes. Handles are preserved. Exact
    /// inverse of [`rotate_tail_to_head`](List::rotate_tail_to_head).
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_list::List;
    ///
    /// let mut list: List<_> = (1..=3).collect();
    /// list.rotate_head_to_tail();
    /// assert_eq!(Vec::from_iter(list), vec![2, 3, 1]);
    /// ```
    pub fn rotate_head_to_tail(&mut self) {
        let (head, tail) = match (self.head, self.tail) {
            (Some(head), Some(tail)) if head != tail => (head, tail),
            _ => return,
        };
        // Detach the current head.
        let after_head = self.node(head).next;
        if let Some(after_head) = after_head {
            self.node_mut(after_head).prev = None;
        }
        self.head = after_head;
        // Move it in as the tail.
        let node = self.node_mut(head);
        node.next = None;
        node.prev = Some(tail);
        self.node_mut(tail).next = Some(head);
        self.tail = Some(head);
    }

    /// Moves every value of `other`, in order, to the end of this list.
    /// After the call `other` is a valid empty list. No-op if `other` is
    /// already empty.
    ///
    /// Destroy hooks never run during the transfer; this list's hooks are
    /// unaffected and govern the transferred values from then on. Because
    /// each list owns its own arena, handles issued by `other` become
    /// stale and this list issues fresh handles for the moved nodes.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(`other.len()`) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_list::List;
    ///
    /// let mut list1: List<_> = ['a'].into_iter().collect();
    /// let mut list2: List<_> = ['b', 'c'].into_iter().collect();
    ///
    /// list1.join(&mut list2);
    ///
    /// assert_eq!(Vec::from_iter(&list1), vec![&'a', &'b', &'c']);
    /// assert!(list2.is_empty());
    /// assert_eq!(list2.first(), None);
    /// ```
    pub fn join(&mut self, other: &mut Self) {
        while let Some(value) = other.pop_front() {
            self.push_back(value);
        }
    }

    /// Provides a detached cursor positioned at the head (forward) or the
    /// tail (backward). See [`Cursor`] for the mutation-safety contract.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_list::{Direction, List};
    ///
    /// let mut list = List::new();
    /// let a = list.push_back(1);
    /// let b = list.push_back(2);
    ///
    /// let mut cursor = list.cursor(Direction::Backward);
    /// assert_eq!(cursor.next(&list), Some(b));
    /// assert_eq!(cursor.next(&list), Some(a));
    /// assert_eq!(cursor.next(&list), None);
    /// ```
    #[inline]
    pub fn cursor(&self, direction: Direction) -> Cursor {
        Cursor::new(self, direction)
    }

    /// Provides a forward iterator over the values.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_list::List;
    ///
    /// let list: List<_> = (0..3).collect();
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references to the values.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_list::List;
    ///
    /// let mut list: List<_> = (0..3).collect();
    ///
    /// for value in list.iter_mut() {
    ///     *value += 10;
    /// }
    ///
    /// assert_eq!(Vec::from_iter(list), vec![10, 11, 12]);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}
