//! OwnedSinglyList - a singly-linked list that owns its arena.

use core::fmt;

use crate::singly::{Iter, SinglyArena};
use crate::{Index, SinglyList};

/// A singly-linked list bundled with its own [`Arena`](crate::Arena).
///
/// Wrapper around [`SinglyList`] + [`SinglyArena`] for the common case
/// where nothing else shares the node pool. Every method mirrors the raw
/// list, minus the `storage` parameter.
///
/// # Example
///
/// ```
/// use listkit::OwnedSinglyList;
///
/// let mut list: OwnedSinglyList<i32> = OwnedSinglyList::new();
///
/// let idx = list.push_back(2);
/// list.push_front(1);
/// list.push_back(3);
///
/// assert_eq!(list.len(), 3);
/// assert_eq!(list.remove_node(idx), Some(2));
/// assert_eq!(list.to_string(), "[1,3]");
/// ```
pub struct OwnedSinglyList<T, Idx: Index = u32> {
    arena: SinglyArena<T, Idx>,
    list: SinglyList<T, SinglyArena<T, Idx>, Idx>,
}

impl<T, Idx: Index> OwnedSinglyList<T, Idx> {
    /// Creates an empty list.
    pub const fn new() -> Self {
        Self {
            arena: SinglyArena::new(),
            list: SinglyList::new(),
        }
    }

    /// Creates an empty list with arena room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: SinglyArena::with_capacity(capacity),
            list: SinglyList::new(),
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
    pub fn iter(&self) -> Iter<'_, T, SinglyArena<T, Idx>, Idx> {
        self.list.iter(&self.arena)
    }
}

impl<T, Idx: Index> Default for OwnedSinglyList<T, Idx> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display, Idx: Index> fmt::Display for OwnedSinglyList<T, Idx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.list.display(&self.arena).fmt(f)
    }
}

impl<T, Idx: Index> Extend<T> for OwnedSinglyList<T, Idx> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T, Idx: Index> FromIterator<T> for OwnedSinglyList<T, Idx> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}
