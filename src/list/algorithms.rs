use crate::list::List;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

impl<T> List<T> {
    /// Returns `true` if the list contains a value equal to the given
    /// one. Unlike [`search`](List::search) this compares with `==` and
    /// ignores the match hook.
    ///
    /// # Complexity
    ///
    /// This operation should compute linearly in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_list::List;
    ///
    /// let list: List<_> = (0..3).collect();
    ///
    /// assert_eq!(list.contains(&1), true);
    /// assert_eq!(list.contains(&10), false);
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|stored| stored == value)
    }
}

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self {
            value.hash(state);
        }
    }
}

impl<T: Clone> Clone for List<T> {
    /// Copies the values with `Clone`, never consulting the dup hook, and
    /// hands all three hooks to the copy. Use
    /// [`duplicate`](List::duplicate) to copy through the dup hook.
    fn clone(&self) -> Self {
        let mut copy: Self = self.iter().cloned().collect();
        copy.dup = self.dup.clone();
        copy.destroy = self.destroy.clone();
        copy.matches = self.matches.clone();
        copy
    }
}
