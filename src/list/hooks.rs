//! Optional value hooks of a [`List`].
//!
//! The hooks are stored as `Rc` closures so that [`List::duplicate`] can
//! hand the exact same behaviors to the copy. They are the only
//! customization surface of the container; the values themselves stay
//! opaque to it.
//!
//! [`List`]: crate::List
//! [`List::duplicate`]: crate::List::duplicate

use std::rc::Rc;

use crate::List;

/// Deep-copy hook: produces a copy of a value, or `None` to signal that
/// the value cannot be copied.
pub(crate) type DupFn<T> = Rc<dyn Fn(&T) -> Option<T>>;

/// Release hook: run on a value right before the list drops it.
pub(crate) type DestroyFn<T> = Rc<dyn Fn(&mut T)>;

/// Search predicate: `(value, key)` pairs for which it returns `true`
/// are considered matches.
pub(crate) type MatchFn<T> = Rc<dyn Fn(&T, &T) -> bool>;

impl<T> List<T> {
    /// Attaches (or replaces) the dup hook used by
    /// [`duplicate`](List::duplicate) to deep-copy values. Returning
    /// `None` from the hook aborts the duplication.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_list::List;
    ///
    /// let mut list = List::new();
    /// list.set_dup(|value: &String| Some(value.clone()));
    /// list.push_back(String::from("deep"));
    ///
    /// let copy = list.duplicate().unwrap();
    /// assert_eq!(copy.front(), list.front());
    /// ```
    pub fn set_dup(&mut self, dup: impl Fn(&T) -> Option<T> + 'static) {
        self.dup = Some(Rc::new(dup));
    }

    /// Attaches (or replaces) the destroy hook, run once per value right
    /// before the list drops it — on [`delete`](List::delete),
    /// [`clear`](List::clear), list drop, and the cleanup of a failed
    /// [`duplicate`](List::duplicate).
    ///
    /// Operations that hand the value back to the caller
    /// ([`remove`](List::remove), [`pop_front`](List::pop_front),
    /// [`pop_back`](List::pop_back), consuming iteration) skip the hook:
    /// ownership moves out instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_list::List;
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// let count = Rc::new(Cell::new(0));
    /// let mut list = List::new();
    /// {
    ///     let count = count.clone();
    ///     list.set_destroy(move |_: &mut i32| count.set(count.get() + 1));
    /// }
    ///
    /// let a = list.push_back(1);
    /// list.push_back(2);
    ///
    /// list.delete(a);
    /// drop(list);
    /// assert_eq!(count.get(), 2);
    /// ```
    pub fn set_destroy(&mut self, destroy: impl Fn(&mut T) + 'static) {
        self.destroy = Some(Rc::new(destroy));
    }

    /// Attaches (or replaces) the match hook consulted by
    /// [`search`](List::search). The first argument is a stored value, the
    /// second is the search key.
    ///
    /// # Examples
    ///
    /// ```
    /// use arena_list::List;
    ///
    /// let mut list = List::new();
    /// list.set_match(|value: &&str, key: &&str| value.eq_ignore_ascii_case(key));
    ///
    /// let hit = list.push_back("Hello");
    /// assert_eq!(list.search(&"hello"), Some(hit));
    /// ```
    pub fn set_match(&mut self, matches: impl Fn(&T, &T) -> bool + 'static) {
        self.matches = Some(Rc::new(matches));
    }
}
