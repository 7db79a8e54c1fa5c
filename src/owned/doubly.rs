//! OwnedDoublyList - a doubly-linked list that owns its arena.

use core::fmt;

use crate::doubly::{DoublyArena, Iter};
use crate::{DoublyList, Index};

/// A doubly-linked list bundled with its own [`Arena`](crate::Arena).
///
/// Wrapper around [`DoublyList`] + [`DoublyArena`] for the common case
/// where nothing else shares the node pool. Every method mirrors the raw
/// list, minus the `storage` parameter.
///
/// # Example
///
/// ```
/// use listkit::OwnedDoublyList;
///
/// let mut list: OwnedDoublyList<i32> = OwnedDoublyList::new();
///
/// list.push_front(30);
/// list.push_front(20);
///
/// assert_eq!(list.to_string(), "[20,30]");
/// assert_eq!(list.pop_back(), Some(30));
/// assert_eq!(list.to_string(), "[20]");
/// ```
pub struct OwnedDoublyList<T, Idx: Index = u32> {
    arena: DoublyArena<T, Idx>,
    list: DoublyList<T, DoublyArena<T, Idx>, Idx>,
}

impl<T, Idx: Index> OwnedDoublyList<T, Idx> {
    /// Creates an empty list.
    pub const fn new() -> Self {
        Self {
            arena: DoublyArena::new(),
            list: DoublyList::new(),
        }
    }

    /// Creates an empty list with arena room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: DoublyArena::with_capacity(capacity),
            list: DoublyList::new(),
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the head node's index, or `None` if empty.
    #[inline]
    pub fn head_index(&self) -> Option<Idx> {
        self.list.head_index()
    }

    /// Returns the index of the node before `idx`, or `None` if `idx` is
    /// the head or invalid.
    #[inline]
    pub fn prev_index(&self, idx: Idx) -> Option<Idx> {
        self.list.prev_index(&self.arena, idx)
    }

    /// Returns the index of the node after `idx`, or `None` if `idx` is
    /// the tail or invalid.
    #[inline]
    pub fn next_index(&self, idx: Idx) -> Option<Idx> {
        self.list.next_index(&self.arena, idx)
    }

    /// Pushes a value to the front of the list. O(1).
    #[inline]
    pub fn push_front(&mut self, value: T) -> Idx {
        self.list.push_front(&mut self.arena, value)
    }

    /// Pushes a value to the back of the list. O(n).
    #[inline]
    pub fn push_back(&mut self, value: T) -> Idx {
        self.list.push_back(&mut self.arena, value)
    }

    /// Inserts a value at the given position, clamped to `[0, len]`. O(n).
    #[inline]
    pub fn insert(&mut self, position: usize, value: T) -> Idx {
        self.list.insert(&mut self.arena, position, value)
    }

    /// Removes and returns the front element, or `None` if empty.
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        self.list.pop_front(&mut self.arena)
    }

    /// Removes and returns the back element, or `None` if empty. O(n).
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        self.list.pop_back(&mut self.arena)
    }

    /// Removes the node at the given index, if it is a member. O(n).
    #[inline]
    pub fn remove_node(&mut self, idx: Idx) -> Option<T> {
        self.list.remove_node(&mut self.arena, idx)
    }

    /// Removes the element at the given position, clamped to
    /// `[0, len - 1]`; `None` if empty. O(n).
    #[inline]
    pub fn remove_at(&mut self, position: usize) -> Option<T> {
        self.list.remove_at(&mut self.arena, position)
    }

    /// Returns the 0-based position of the first element equal to `value`.
    #[inline]
    pub fn position_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.list.position_of(&self.arena, value)
    }

    /// Returns a reference to the element at the given index.
    #[inline]
    pub fn get(&self, idx: Idx) -> Option<&T> {
        self.list.get(&self.arena, idx)
    }

    /// Returns a mutable reference to the element at the given index.
    #[inline]
    pub fn get_mut(&mut self, idx: Idx) -> Option<&mut T> {
        self.list.get_mut(&mut self.arena, idx)
    }

    /// Returns a reference to the front element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.list.front(&self.arena)
    }

    /// Clears the list, recycling every node slot.
    pub fn clear(&mut self) {
        self.list.clear(&mut self.arena);
        self.arena.clear();
    }

    /// Returns an iterator over references to elements, head to tail.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, DoublyArena<T, Idx>, Idx> {
        self.list.iter(&self.arena)
    }
}

impl<T, Idx: Index> Default for OwnedDoublyList<T, Idx> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display, Idx: Index> fmt::Display for OwnedDoublyList<T, Idx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.list.display(&self.arena).fmt(f)
    }
}

impl<T, Idx: Index> Extend<T> for OwnedDoublyList<T, Idx> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T, Idx: Index> FromIterator<T> for OwnedDoublyList<T, Idx> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}
