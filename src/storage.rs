//! Storage seam for node-based structures.
//!
//! A [`Storage`] hands out stable indices on insert: an index stays valid
//! until that exact element is removed, no matter what happens to other
//! slots. Lists coordinate indices; storage owns the data. This is the
//! boundary where a growable array plugs in — the bundled [`Arena`] is one
//! such array, and `slab::Slab` is another (feature `slab`).

use crate::Index;

/// Growable storage with stable indices.
///
/// # Requirements
///
/// Implementations must provide:
/// - **Stable indices**: an index remains valid until explicitly removed
/// - **O(1)** insert, remove, get operations (amortized for growth)
/// - **Slot reuse**: removed slots can be reused by future inserts
///
/// Indices handed out must never equal `Idx::NONE`; the sentinel is
/// reserved for links.
pub trait Storage<T> {
    /// Index type for this storage.
    type Index: Index;

    /// Inserts a value, returning its stable index.
    fn insert(&mut self, value: T) -> Self::Index;

    /// Removes and returns the value at `index`, if present.
    fn remove(&mut self, index: Self::Index) -> Option<T>;

    /// Returns a reference to the value at `index`, if present.
    fn get(&self, index: Self::Index) -> Option<&T>;

    /// Returns a mutable reference to the value at `index`, if present.
    fn get_mut(&mut self, index: Self::Index) -> Option<&mut T>;

    /// Returns the number of occupied slots.
    fn len(&self) -> usize;

    /// Returns `true` if no slots are occupied.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// =============================================================================
// Arena - growable Vec-backed slots with an intrusive free list
// =============================================================================

enum Slot<T, Idx> {
    Occupied(T),
    /// Vacant slot, holding the index of the next free slot (or `NONE`).
    Vacant(Idx),
}

/// Growable slot arena with stable indices.
///
/// Slots live in a `Vec`; vacant slots form an intrusive free list so
/// removal is O(1) and freed slots are reused LIFO. Insertion appends only
/// when no slot is free.
///
/// # Example
///
/// ```
/// use listkit::{Arena, Storage};
///
/// let mut arena: Arena<u64> = Arena::new();
///
/// let a = arena.insert(1);
/// let b = arena.insert(2);
///
/// assert_eq!(arena.remove(a), Some(1));
/// // b is untouched by a's removal
/// assert_eq!(arena.get(b), Some(&2));
/// ```
pub struct Arena<T, Idx: Index = u32> {
    slots: Vec<Slot<T, Idx>>,
    free_head: Idx,
    len: usize,
}

impl<T, Idx: Index> Arena<T, Idx> {
    /// Creates an empty arena.
    #[inline]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: Idx::NONE,
            len: 0,
        }
    }

    /// Creates an arena with room for `capacity` elements before growing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: Idx::NONE,
            len: 0,
        }
    }

    /// Returns the number of slots the arena can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Removes all elements, making every slot available for reuse.
    ///
    /// Any index previously handed out becomes invalid. Lists referencing
    /// this arena must be reset alongside it.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_head = Idx::NONE;
        self.len = 0;
    }
}

impl<T, Idx: Index> Default for Arena<T, Idx> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, Idx: Index> Storage<T> for Arena<T, Idx> {
    type Index = Idx;

    #[inline]
    fn insert(&mut self, value: T) -> Idx {
        self.len += 1;

        if self.free_head.is_some() {
            let idx = self.free_head;
            let next_free = match &self.slots[idx.as_usize()] {
                Slot::Vacant(next) => *next,
                Slot::Occupied(_) => unreachable!("free list points at occupied slot"),
            };
            self.free_head = next_free;
            self.slots[idx.as_usize()] = Slot::Occupied(value);
            idx
        } else {
            let idx = Idx::from_usize(self.slots.len());
            assert!(idx.is_some(), "arena exceeds index type maximum");
            self.slots.push(Slot::Occupied(value));
            idx
        }
    }

    #[inline]
    fn remove(&mut self, index: Idx) -> Option<T> {
        let i = index.as_usize();
        if i >= self.slots.len() || matches!(self.slots[i], Slot::Vacant(_)) {
            return None;
        }

        let slot = std::mem::replace(&mut self.slots[i], Slot::Vacant(self.free_head));
        self.free_head = index;
        self.len -= 1;

        match slot {
            Slot::Occupied(value) => Some(value),
            Slot::Vacant(_) => unreachable!(),
        }
    }

    #[inline]
    fn get(&self, index: Idx) -> Option<&T> {
        match self.slots.get(index.as_usize()) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    #[inline]
    fn get_mut(&mut self, index: Idx) -> Option<&mut T> {
        match self.slots.get_mut(index.as_usize()) {
            Some(Slot::Occupied(value)) => Some(value),
            _ => None,
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }
}

// =============================================================================
// slab::Slab implementation
// =============================================================================

#[cfg(feature = "slab")]
impl<T> Storage<T> for slab::Slab<T> {
    type Index = usize;

    #[inline]
    fn insert(&mut self, value: T) -> usize {
        self.insert(value)
    }

    #[inline]
    fn remove(&mut self, index: usize) -> Option<T> {
        self.try_remove(index)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.get(index)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.get_mut(index)
    }

    #[inline]
    fn len(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        let arena: Arena<u64> = Arena::new();
        assert!(arena.is_empty());
        assert_eq!(arena.len(), 0);
    }

    #[test]
    fn insert_get_remove() {
        let mut arena: Arena<u64> = Arena::new();

        let idx = arena.insert(42);
        assert_eq!(arena.len(), 1);
        assert_eq!(arena.get(idx), Some(&42));

        assert_eq!(arena.remove(idx), Some(42));
        assert_eq!(arena.get(idx), None);
        assert_eq!(arena.len(), 0);
    }

    #[test]
    fn get_mut() {
        let mut arena: Arena<u64> = Arena::new();

        let idx = arena.insert(10);
        *arena.get_mut(idx).unwrap() = 20;

        assert_eq!(arena.get(idx), Some(&20));
    }

    #[test]
    fn indices_stable_across_removal() {
        let mut arena: Arena<u64> = Arena::new();

        let a = arena.insert(1);
        let b = arena.insert(2);
        let c = arena.insert(3);

        arena.remove(b);

        assert_eq!(arena.get(a), Some(&1));
        assert_eq!(arena.get(c), Some(&3));
    }

    #[test]
    fn slot_reuse_is_lifo() {
        let mut arena: Arena<u64> = Arena::new();

        let a = arena.insert(1);
        let b = arena.insert(2);

        arena.remove(a);
        arena.remove(b);

        // Most recently freed slot is handed out first
        assert_eq!(arena.insert(3), b);
        assert_eq!(arena.insert(4), a);
    }

    #[test]
    fn double_remove_returns_none() {
        let mut arena: Arena<u64> = Arena::new();

        let idx = arena.insert(42);
        arena.remove(idx);

        assert_eq!(arena.remove(idx), None);
    }

    #[test]
    fn remove_out_of_bounds() {
        let mut arena: Arena<u64> = Arena::new();
        assert_eq!(arena.remove(17), None);
        assert_eq!(arena.get(17), None);
    }

    #[test]
    fn clear_resets() {
        let mut arena: Arena<u64> = Arena::new();

        arena.insert(1);
        arena.insert(2);
        arena.clear();

        assert!(arena.is_empty());
        assert_eq!(arena.len(), 0);
    }

    #[test]
    fn u16_index() {
        let mut arena: Arena<u64, u16> = Arena::new();

        let idx = arena.insert(42);
        assert_eq!(arena.get(idx), Some(&42));
    }

    #[test]
    fn drop_cleans_up() {
        use std::rc::Rc;

        let tracked = Rc::new(());

        {
            let mut arena: Arena<Rc<()>> = Arena::new();
            arena.insert(Rc::clone(&tracked));
            arena.insert(Rc::clone(&tracked));
            let idx = arena.insert(Rc::clone(&tracked));
            arena.remove(idx);
            assert_eq!(Rc::strong_count(&tracked), 3);
        }

        assert_eq!(Rc::strong_count(&tracked), 1);
    }

    #[cfg(feature = "slab")]
    mod slab_tests {
        use super::*;

        #[test]
        fn insert_get_remove() {
            let mut storage = slab::Slab::new();

            let idx = Storage::insert(&mut storage, 42u64);
            assert_eq!(Storage::get(&storage, idx), Some(&42));

            assert_eq!(Storage::remove(&mut storage, idx), Some(42));
            assert_eq!(Storage::get(&storage, idx), None);
        }

        #[test]
        fn slot_reuse() {
            let mut storage = slab::Slab::new();

            let a = Storage::insert(&mut storage, 1u64);
            Storage::remove(&mut storage, a);

            let b = Storage::insert(&mut storage, 2u64);
            assert_eq!(a, b);
        }
    }
}
