use std::fmt;

/// A stable handle to a node of a [`List`].
///
/// A `NodeId` stays valid from the moment its node is inserted until the
/// moment that node is removed, no matter how the rest of the list is
/// mutated in between. It is `Copy` and cheap to pass around, so callers
/// can keep handles to interesting nodes (an LRU entry, a subscriber, a
/// pipeline stage) and delete or splice around them in *O*(1) later.
///
/// A handle to a removed node is *stale*: the arena detects it through the
/// slot generation and refuses to resolve it, even if the slot has since
/// been reused by another insertion.
///
/// Handles are only meaningful for the list that issued them. Passing a
/// handle to a different list is a contract violation; it is detected
/// only when the slot or generation happens not to line up.
///
/// [`List`]: crate::List
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({}v{})", self.index, self.generation)
    }
}

/// A single chain cell: one value plus handles to its neighbors.
///
/// `prev` is `None` exactly at the head, `next` is `None` exactly at
/// the tail.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) prev: Option<NodeId>,
    pub(crate) next: Option<NodeId>,
}

enum Slot<T> {
    Occupied(Node<T>),
    Vacant { next_free: Option<u32> },
}

/// Generational slot arena owning every node of a list.
///
/// Occupied slots hold a [`Node`]; vacant slots are threaded into an
/// intrusive free list and are reused before the backing vector grows.
/// Each slot carries a generation counter that is bumped when the slot is
/// vacated, which is what makes stale [`NodeId`]s detectable.
pub(crate) struct Arena<T> {
    slots: Vec<(u32, Slot<T>)>,
    free: Option<u32>,
    occupied: usize,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            occupied: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: None,
            occupied: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.occupied
    }

    /// Store a node, reusing a vacant slot when one is available, and
    /// return its handle.
    pub(crate) fn insert(&mut self, node: Node<T>) -> NodeId {
        self.occupied += 1;
        match self.free {
            Some(index) => {
                let (generation, slot) = &mut self.slots[index as usize];
                match *slot {
                    Slot::Vacant { next_free } => self.free = next_free,
                    Slot::Occupied(_) => unreachable!("occupied slot on the free list"),
                }
                *slot = Slot::Occupied(node);
                NodeId {
                    index,
                    generation: *generation,
                }
            }
            None => {
                let index = u32::try_from(self.slots.len()).expect("arena slot count overflow");
                self.slots.push((0, Slot::Occupied(node)));
                NodeId {
                    index,
                    generation: 0,
                }
            }
        }
    }

    /// Vacate the slot behind `id` and return its node, or `None` if the
    /// handle is stale. The slot generation is bumped so the handle can
    /// never resolve again.
    pub(crate) fn remove(&mut self, id: NodeId) -> Option<Node<T>> {
        let (generation, slot) = self.slots.get_mut(id.index as usize)?;
        if *generation != id.generation || matches!(slot, Slot::Vacant { .. }) {
            return None;
        }
        *generation = generation.wrapping_add(1);
        let vacated = std::mem::replace(slot, Slot::Vacant { next_free: self.free });
        self.free = Some(id.index);
        self.occupied -= 1;
        match vacated {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => unreachable!(),
        }
    }

    pub(crate) fn get(&self, id: NodeId) -> Option<&Node<T>> {
        match self.slots.get(id.index as usize) {
            Some((generation, Slot::Occupied(node))) if *generation == id.generation => Some(node),
            _ => None,
        }
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Option<&mut Node<T>> {
        match self.slots.get_mut(id.index as usize) {
            Some((generation, Slot::Occupied(node))) if *generation == id.generation => Some(node),
            _ => None,
        }
    }

    /// Captures the slot storage as a raw base pointer, for iterators
    /// that must keep several `&mut` borrows into the arena alive at
    /// once. Resolving a node through the window projects from that base
    /// pointer instead of reborrowing the arena as a whole, so earlier
    /// borrows stay valid.
    pub(crate) fn raw_access(&mut self) -> RawAccess<T> {
        RawAccess {
            slots: self.slots.as_mut_ptr(),
            len: self.slots.len(),
        }
    }
}

pub(crate) struct RawAccess<T> {
    slots: *mut (u32, Slot<T>),
    len: usize,
}

impl<T> RawAccess<T> {
    /// Resolves `id` to its node, or `None` if the handle is stale.
    ///
    /// # Safety
    ///
    /// The arena must outlive `'a` and must not be moved or mutated
    /// while the window is alive, and no node may be resolved twice:
    /// the returned borrows cover disjoint slots only under that
    /// contract.
    pub(crate) unsafe fn node_mut<'a>(&mut self, id: NodeId) -> Option<&'a mut Node<T>> {
        if id.index as usize >= self.len {
            return None;
        }
        // SAFETY: in bounds per the check above; the caller keeps the
        // slot bytes free of other live borrows.
        let (generation, slot) = unsafe { &mut *self.slots.add(id.index as usize) };
        match slot {
            Slot::Occupied(node) if *generation == id.generation => Some(node),
            _ => None,
        }
    }
}
