use crate::list::arena::RawAccess;
use crate::list::List;
use crate::NodeId;
use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;

/// An iterator over the values of a `List`.
///
/// It keeps the handles of the two unvisited boundary nodes plus a
/// remaining count; the count alone decides exhaustion, which is what
/// makes the double-ended halves meet cleanly in the middle.
///
/// # Examples
///
/// ```compile_fail
/// use arena_list::List;
///
/// let mut list: List<_> = (1..=3).collect();
/// let mut iter = list.iter();
///
/// // Won't compile, because list is already borrowed immutably.
/// list.push_back(4);
/// println!("{:?}", iter.next());
/// ```
pub struct Iter<'a, T: 'a> {
    list: &'a List<T>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

impl<'a, T: 'a> Iter<'a, T> {
    pub(crate) fn new(list: &'a List<T>) -> Self {
        Self {
            list,
            front: list.first(),
            back: list.last(),
            remaining: list.len(),
        }
    }
}

impl<'a, T: 'a> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T: 'a> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.arena.get(self.front?)?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.arena.get(self.back?)?;
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<'a, T: 'a> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: 'a> FusedIterator for Iter<'a, T> {}

/// A mutable iterator over the values of a `List`.
///
/// The `IterMut` borrows the list mutably for its whole lifetime, so the
/// list cannot be touched while the iterator is alive. Internally it
/// captures the arena's slot storage as a raw base pointer once, at
/// construction, and every yielded `&mut T` is projected from that base
/// pointer; no step reborrows the list or the arena as a whole, so the
/// yielded references can all be held at the same time.
///
/// # Examples
///
/// ```compile_fail
/// use arena_list::List;
///
/// let mut list: List<_> = (1..=3).collect();
/// let mut iter = list.iter_mut();
/// println!("{:?}", list.back());
/// println!("{:?}", iter.next());
/// ```
pub struct IterMut<'a, T: 'a> {
    access: RawAccess<T>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
    _marker: PhantomData<&'a mut List<T>>,
}

impl<'a, T: 'a> IterMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>) -> Self {
        let front = list.first();
        let back = list.last();
        let remaining = list.len();
        Self {
            access: list.arena.raw_access(),
            front,
            back,
            remaining,
            _marker: PhantomData,
        }
    }
}

impl<'a, T: 'a> fmt::Debug for IterMut<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut")
            .field("remaining", &self.remaining)
            .finish()
    }
}

impl<'a, T: 'a> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.front?;
        // SAFETY: the iterator holds the only borrow of the list for its
        // whole lifetime, so the arena is neither moved nor mutated, and
        // the chain is acyclic, so each node is resolved at most once.
        let node = unsafe { self.access.node_mut(id)? };
        self.front = node.next;
        self.remaining -= 1;
        Some(&mut node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<'a, T: 'a> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.back?;
        // SAFETY: same as `next`: distinct nodes, resolved at most once.
        let node = unsafe { self.access.node_mut(id)? };
        self.back = node.prev;
        self.remaining -= 1;
        Some(&mut node.value)
    }
}

impl<'a, T: 'a> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T: 'a> FusedIterator for IterMut<'a, T> {}

/// An owning iterator over the values of a `List`.
///
/// This `struct` is created by the [`into_iter`] method on [`List`]
/// (provided by the `IntoIterator` trait). Yielded values are handed to
/// the caller without running the destroy hook; values left unconsumed
/// are released normally when the inner list drops.
///
/// [`into_iter`]: List::into_iter
pub struct IntoIter<T> {
    list: List<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter").field("list", &self.list).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.list.len();
        (len, Some(len))
    }

    fn last(mut self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        self.next_back()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| {
            self.push_back(value);
        });
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for List<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use crate::List;
    use std::cell::RefCell;
    use std::fmt::Debug;
    use std::rc::Rc;

    fn test_iter_against_vec<T, I>(input: I, mid: usize)
    where
        T: Eq + Debug + Clone,
        I: IntoIterator<Item = T>,
    {
        let vec = Vec::from_iter(input);
        let list = List::from_iter(vec.clone());
        let len = vec.len();

        let mut iter = list.iter();
        for (i, value) in vec.iter().enumerate() {
            assert_eq!(iter.next(), Some(value));
            assert_eq!(iter.len(), len - i - 1);
        }
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
        assert_eq!(iter.len(), 0);

        // Consume `mid` from the front, the rest from the back.
        let mut iter = list.iter();
        for value in vec.iter().take(mid) {
            assert_eq!(iter.next(), Some(value));
        }
        for value in vec.iter().skip(mid).rev() {
            assert_eq!(iter.next_back(), Some(value));
        }
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn iter_both_ends() {
        test_iter_against_vec(0..10, 10);
        test_iter_against_vec(0..10, 5);
        test_iter_against_vec(0..10, 0);
        test_iter_against_vec(0..2, 1);
        test_iter_against_vec(0..1, 1);
        test_iter_against_vec(0..1, 0);
        test_iter_against_vec(0..0, 0);
    }

    #[test]
    fn iter_rev() {
        let list: List<_> = (0..5).collect();
        let backward: Vec<_> = list.iter().rev().copied().collect();
        assert_eq!(backward, vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn iter_mut_edits_every_value() {
        let mut list: List<_> = (0..4).collect();
        for value in list.iter_mut() {
            *value *= 3;
        }
        assert_eq!(Vec::from_iter(&list), vec![&0, &3, &6, &9]);

        for value in list.iter_mut().rev() {
            *value += 1;
        }
        assert_eq!(Vec::from_iter(list), vec![1, 4, 7, 10]);
    }

    #[test]
    fn iter_mut_references_can_be_held_together() {
        // All yielded references stay valid at once; writing through an
        // early one after later ones were produced must be sound.
        let mut list: List<_> = (0..4).collect();
        let refs: Vec<&mut i32> = list.iter_mut().collect();
        for reference in refs {
            *reference += 10;
        }
        assert_eq!(Vec::from_iter(&list), vec![&10, &11, &12, &13]);

        let mut backward: Vec<&mut i32> = list.iter_mut().rev().collect();
        *backward[3] *= -1;
        *backward[0] *= -1;
        assert_eq!(Vec::from_iter(list), vec![-10, 11, 12, -13]);
    }

    #[test]
    fn iter_mut_both_ends_meet() {
        let mut list: List<_> = (0..5).collect();
        let mut iter = list.iter_mut();
        assert_eq!(iter.next(), Some(&mut 0));
        assert_eq!(iter.next_back(), Some(&mut 4));
        assert_eq!(iter.next(), Some(&mut 1));
        assert_eq!(iter.next_back(), Some(&mut 3));
        assert_eq!(iter.next(), Some(&mut 2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn into_iter_front_and_back() {
        let list: List<_> = (0..4).collect();
        let mut iter = list.into_iter();
        assert_eq!(iter.size_hint(), (4, Some(4)));
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next_back(), Some(3));
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next(), Some(2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn into_iter_skips_destroy_hook_for_yielded_values() {
        let released = Rc::new(RefCell::new(Vec::new()));
        let mut list = List::new();
        {
            let released = released.clone();
            list.set_destroy(move |value: &mut i32| released.borrow_mut().push(*value));
        }
        list.extend(0..4);

        let mut iter = list.into_iter();
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next(), Some(1));
        drop(iter);
        // Only the two unconsumed values went through the hook.
        assert_eq!(released.borrow().as_slice(), &[2, 3]);
    }

    #[test]
    fn from_iterator_and_extend() {
        let mut list: List<_> = (0..3).collect();
        list.extend(3..5);
        list.extend(&[5, 6]);
        assert_eq!(Vec::from_iter(list), vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn iter_debug_lists_values() {
        let list: List<_> = (0..3).collect();
        assert_eq!(format!("{:?}", list.iter()), "[0, 1, 2]");
    }
}
