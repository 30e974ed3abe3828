use crate::list::List;
use crate::NodeId;

/// Traversal direction of a [`Cursor`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    /// head → tail
    Forward,
    /// tail → head
    Backward,
}

/// A detached external cursor over a [`List`].
///
/// Unlike [`Iter`], a `Cursor` does not borrow the list: it stores the
/// handle of the next node to yield and is given the list again at every
/// [`next`](Cursor::next) call. That is what makes the classic
/// delete-while-iterating pattern work — the borrow of the list ends
/// between calls, so the just-yielded node can be deleted and the
/// traversal continues unharmed:
///
/// ```
/// use arena_list::{Direction, List};
///
/// let mut list: List<_> = (0..6).collect();
///
/// let mut cursor = list.cursor(Direction::Forward);
/// while let Some(node) = cursor.next(&list) {
///     if list.get(node).unwrap() % 2 == 0 {
///         list.delete(node);
///     }
/// }
///
/// assert_eq!(Vec::from_iter(list), vec![1, 3, 5]);
/// ```
///
/// The cursor has already captured the node's neighbor by the time the
/// node is yielded, so deleting the yielded node never skips or repeats
/// another one. Deleting *other* nodes mid-traversal is also memory-safe
/// here (the stored handle merely goes stale and the traversal ends
/// early), but which nodes such a traversal visits is unspecified.
///
/// [`Iter`]: crate::Iter
#[derive(Clone, Debug)]
pub struct Cursor {
    next: Option<NodeId>,
    direction: Direction,
}

impl Cursor {
    pub(crate) fn new<T>(list: &List<T>, direction: Direction) -> Self {
        let next = match direction {
            Direction::Forward => list.first(),
            Direction::Backward => list.last(),
        };
        Self { next, direction }
    }

    /// Returns the traversal direction.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Yields the node at the cursor and advances to its `next` (forward)
    /// or `prev` (backward) neighbor, as read before returning. Returns
    /// `None` once the traversal is exhausted, and `None` on every call
    /// thereafter.
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
    /// let mut cursor = list.cursor(Direction::Forward);
    /// assert_eq!(cursor.next(&list), Some(a));
    /// assert_eq!(cursor.next(&list), Some(b));
    /// assert_eq!(cursor.next(&list), None);
    /// assert_eq!(cursor.next(&list), None);
    /// ```
    pub fn next<T>(&mut self, list: &List<T>) -> Option<NodeId> {
        let current = self.next?;
        // A stale stored handle means the caller deleted more than the
        // just-yielded node; end the traversal instead of resolving it.
        let node = list.arena.get(current)?;
        self.next = match self.direction {
            Direction::Forward => node.next,
            Direction::Backward => node.prev,
        };
        Some(current)
    }

    /// Resets the cursor in place to a forward traversal from the head.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_list::{Direction, List};
    ///
    /// let mut list = List::new();
    /// let a = list.push_back(1);
    ///
    /// let mut cursor = list.cursor(Direction::Forward);
    /// assert_eq!(cursor.next(&list), Some(a));
    /// assert_eq!(cursor.next(&list), None);
    ///
    /// cursor.rewind(&list);
    /// assert_eq!(cursor.next(&list), Some(a));
    /// ```
    pub fn rewind<T>(&mut self, list: &List<T>) {
        self.next = list.first();
        self.direction = Direction::Forward;
    }

    /// Resets the cursor in place to a backward traversal from the tail.
    pub fn rewind_tail<T>(&mut self, list: &List<T>) {
        self.next = list.last();
        self.direction = Direction::Backward;
    }
}

#[cfg(test)]
mod tests {
    use super::Direction;
    use crate::list::List;

    #[test]
    fn forward_and_backward_visit_reversed_orders() {
        let list: List<_> = (0..5).collect();

        let mut forward = Vec::new();
        let mut cursor = list.cursor(Direction::Forward);
        while let Some(id) = cursor.next(&list) {
            forward.push(*list.get(id).unwrap());
        }

        let mut backward = Vec::new();
        cursor.rewind_tail(&list);
        while let Some(id) = cursor.next(&list) {
            backward.push(*list.get(id).unwrap());
        }

        assert_eq!(forward, vec![0, 1, 2, 3, 4]);
        backward.reverse();
        assert_eq!(forward, backward);
    }

    #[test]
    fn exhausted_cursor_stays_exhausted() {
        let list: List<_> = (0..2).collect();
        let mut cursor = list.cursor(Direction::Forward);
        assert!(cursor.next(&list).is_some());
        assert!(cursor.next(&list).is_some());
        for _ in 0..3 {
            assert_eq!(cursor.next(&list), None);
        }
    }

    #[test]
    fn empty_list_cursor() {
        let list = List::<u8>::new();
        let mut cursor = list.cursor(Direction::Forward);
        assert_eq!(cursor.next(&list), None);
        cursor.rewind_tail(&list);
        assert_eq!(cursor.next(&list), None);
    }

    #[test]
    fn delete_just_yielded_node_mid_traversal() {
        let mut list: List<_> = (0..5).collect();
        let mut cursor = list.cursor(Direction::Forward);
        let mut visited = Vec::new();
        while let Some(id) = cursor.next(&list) {
            let value = *list.get(id).unwrap();
            visited.push(value);
            if value == 2 {
                list.delete(id);
            }
        }
        // Nothing skipped, nothing repeated.
        assert_eq!(visited, vec![0, 1, 2, 3, 4]);
        assert_eq!(Vec::from_iter(list), vec![0, 1, 3, 4]);
    }

    #[test]
    fn delete_just_yielded_node_backward() {
        let mut list: List<_> = (0..4).collect();
        let mut cursor = list.cursor(Direction::Backward);
        let mut visited = Vec::new();
        while let Some(id) = cursor.next(&list) {
            visited.push(*list.get(id).unwrap());
            list.delete(id);
        }
        assert_eq!(visited, vec![3, 2, 1, 0]);
        assert!(list.is_empty());
    }

    #[test]
    fn rewind_restarts_after_mutation() {
        let mut list: List<_> = (0..3).collect();
        let mut cursor = list.cursor(Direction::Forward);
        let first = cursor.next(&list).unwrap();
        list.delete(first);

        cursor.rewind(&list);
        let mut visited = Vec::new();
        while let Some(id) = cursor.next(&list) {
            visited.push(*list.get(id).unwrap());
        }
        assert_eq!(visited, vec![1, 2]);
    }

    #[test]
    fn independent_cursors_over_the_same_list() {
        let list: List<_> = (0..3).collect();
        let mut one = list.cursor(Direction::Forward);
        let mut two = list.cursor(Direction::Forward);
        assert_eq!(one.next(&list), two.next(&list));
        // Advancing one cursor leaves the other alone.
        one.next(&list);
        assert_eq!(two.next(&list), list.node_at(1));
    }

    #[test]
    fn stale_stored_handle_ends_traversal() {
        let mut list: List<_> = (0..3).collect();
        let mut cursor = list.cursor(Direction::Forward);
        let first = cursor.next(&list).unwrap();
        // Deleting the node the cursor is parked on (not the one just
        // yielded from this position) leaves a stale stored handle.
        let second = list.next_node(first).unwrap();
        list.delete(second);
        assert_eq!(cursor.next(&list), None);
    }
}
