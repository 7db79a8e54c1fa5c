//! Singly-linked list over external storage.
//!
//! Nodes carry a single forward link and live in user-provided storage;
//! the list itself holds only a head index and a length counter. The list
//! keeps no tail index, so back operations are O(n) forward scans.
//!
//! Every insertion allocates the node into storage and returns its index.
//! That index is the node's identity: [`SinglyList::remove_node`] removes
//! the node at that exact index, while [`SinglyList::position_of`] searches
//! by value equality. The two are deliberately distinct operations.
//!
//! Out-of-range positions are clamped, never rejected: `insert` clamps to
//! `[0, len]`, `remove_at` to the last valid index.
//!
//! # Example
//!
//! ```
//! use listkit::{Arena, SinglyList, SinglyNode};
//!
//! let mut arena: Arena<SinglyNode<u64>> = Arena::new();
//! let mut list: SinglyList<u64, _> = SinglyList::new();
//!
//! list.push_back(&mut arena, 20);
//! list.push_back(&mut arena, 30);
//! list.push_front(&mut arena, 10);
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.display(&arena).to_string(), "[10,20,30]");
//! assert_eq!(list.position_of(&arena, &30), Some(2));
//!
//! assert_eq!(list.pop_front(&mut arena), Some(10));
//! assert_eq!(list.pop_back(&mut arena), Some(30));
//! ```

use core::fmt;
use std::marker::PhantomData;

use crate::{Arena, Index, Storage};

/// Type alias for arena storage holding singly-linked nodes.
pub type SinglyArena<T, Idx = u32> = Arena<SinglyNode<T, Idx>, Idx>;

/// A node in a singly-linked list.
///
/// Wraps user data with a forward link. Users interact with `&T` and
/// `&mut T` through the list's accessors; the node structure is an
/// implementation detail.
#[derive(Debug)]
pub struct SinglyNode<T, Idx: Index = u32> {
    pub(crate) data: T,
    pub(crate) next: Idx,
}

impl<T, Idx: Index> SinglyNode<T, Idx> {
    #[inline]
    fn new(data: T) -> Self {
        Self {
            data,
            next: Idx::NONE,
        }
    }
}

/// A singly-linked list over external storage.
///
/// The list tracks head and length. Nodes live in user-provided storage,
/// wrapped in [`SinglyNode`]. All operations on a list must use the same
/// storage instance; that discipline is the caller's responsibility.
///
/// # Type Parameters
///
/// - `T`: Element type
/// - `S`: Storage type (e.g., [`SinglyArena<T>`])
/// - `Idx`: Index type (default `u32`)
#[derive(Debug)]
pub struct SinglyList<T, S, Idx: Index = u32>
where
    S: Storage<SinglyNode<T, Idx>, Index = Idx>,
{
    head: Idx,
    len: usize,
    _marker: PhantomData<(T, S)>,
}

impl<T, S, Idx: Index> Default for SinglyList<T, S, Idx>
where
    S: Storage<SinglyNode<T, Idx>, Index = Idx>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S, Idx: Index> SinglyList<T, S, Idx>
where
    S: Storage<SinglyNode<T, Idx>, Index = Idx>,
{
    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        Self {
            head: Idx::NONE,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the head node's index, or `None` if empty.
    #[inline]
    pub fn head_index(&self) -> Option<Idx> {
        if self.head.is_none() {
            None
        } else {
            Some(self.head)
        }
    }

    // ========================================================================
    // Insert operations
    // ========================================================================

    /// Pushes a value to the front of the list. O(1).
    ///
    /// Returns the index of the new node.
    #[inline]
    pub fn push_front(&mut self, storage: &mut S, value: T) -> Idx {
        let mut node = SinglyNode::new(value);
        node.next = self.head;

        let idx = storage.insert(node);
        self.head = idx;
        self.len += 1;
        idx
    }

    /// Pushes a value to the back of the list. O(n).
    ///
    /// Walks the chain to the terminal node and attaches there; becomes the
    /// head if the list is empty. Returns the index of the new node.
    pub fn push_back(&mut self, storage: &mut S, value: T) -> Idx {
        let idx = storage.insert(SinglyNode::new(value));

        if self.head.is_none() {
            self.head = idx;
        } else {
            let last = self.tail_index(storage);
            storage.get_mut(last).expect("stale list link").next = idx;
        }

        self.len += 1;
        idx
    }

    /// Inserts a value at the given position. O(n).
    ///
    /// `position` is clamped to `[0, len]`: position 0 behaves like
    /// [`push_front`](Self::push_front) and position `len` like
    /// [`push_back`](Self::push_back). Returns the index of the new node.
    pub fn insert(&mut self, storage: &mut S, position: usize, value: T) -> Idx {
        let position = position.min(self.len);

        if position == 0 {
            return self.push_front(storage, value);
        }

        // Walk to the predecessor (node at position - 1)
        let mut prev = self.head;
        for _ in 1..position {
            prev = storage.get(prev).expect("stale list link").next;
        }

        let next = storage.get(prev).expect("stale list link").next;
        let mut node = SinglyNode::new(value);
        node.next = next;

        let idx = storage.insert(node);
        storage.get_mut(prev).expect("stale list link").next = idx;
        self.len += 1;
        idx
    }

    // ========================================================================
    // Remove operations
    // ========================================================================

    /// Removes and returns the front element.
    ///
    /// Returns `None` if the list is empty.
    #[inline]
    pub fn pop_front(&mut self, storage: &mut S) -> Option<T> {
        if self.head.is_none() {
            return None;
        }

        let node = storage.remove(self.head).expect("stale list link");
        self.head = node.next;
        self.len -= 1;
        Some(node.data)
    }

    /// Removes and returns the back element. O(n).
    ///
    /// Returns `None` if the list is empty. Walks with one node of lag so
    /// the second-to-last node's link can be cleared; a single-node list
    /// becomes empty.
    pub fn pop_back(&mut self, storage: &mut S) -> Option<T> {
        if self.head.is_none() {
            return None;
        }

        let mut prev = Idx::NONE;
        let mut curr = self.head;
        loop {
            let next = storage.get(curr).expect("stale list link").next;
            if next.is_none() {
                break;
            }
            prev = curr;
            curr = next;
        }

        if prev.is_none() {
            // Single-node list: no predecessor to relink
            self.head = Idx::NONE;
        } else {
            storage.get_mut(prev).expect("stale list link").next = Idx::NONE;
        }

        self.len -= 1;
        storage.remove(curr).map(|node| node.data)
    }

    /// Removes the node at the given index, if it is a member of this list.
    ///
    /// This is identity removal: the chain is walked comparing indices, and
    /// only the node at exactly `idx` is unlinked. An index that is not in
    /// this list (even one valid in storage) leaves the list untouched and
    /// returns `None`. O(n).
    pub fn remove_node(&mut self, storage: &mut S, idx: Idx) -> Option<T> {
        if self.head.is_none() {
            return None;
        }

        if self.head == idx {
            return self.pop_front(storage);
        }

        let mut prev = self.head;
        loop {
            let next = storage.get(prev).expect("stale list link").next;
            if next.is_none() {
                return None;
            }
            if next == idx {
                let node = storage.remove(idx).expect("stale list link");
                storage.get_mut(prev).expect("stale list link").next = node.next;
                self.len -= 1;
                return Some(node.data);
            }
            prev = next;
        }
    }

    /// Removes and returns the element at the given position. O(n).
    ///
    /// `position` is clamped to `[0, len - 1]`, so any position at or past
    /// the end removes the last element. Returns `None` if the list is
    /// empty.
    pub fn remove_at(&mut self, storage: &mut S, position: usize) -> Option<T> {
        if self.head.is_none() {
            return None;
        }
        let position = position.min(self.len - 1);

        if position == 0 {
            return self.pop_front(storage);
        }

        // Walk to the predecessor, splice it to the target's successor
        let mut prev = self.head;
        for _ in 1..position {
            prev = storage.get(prev).expect("stale list link").next;
        }

        let target = storage.get(prev).expect("stale list link").next;
        let node = storage.remove(target).expect("stale list link");
        storage.get_mut(prev).expect("stale list link").next = node.next;
        self.len -= 1;
        Some(node.data)
    }

    /// Clears the list, removing every node from storage.
    pub fn clear(&mut self, storage: &mut S) {
        let mut idx = self.head;
        while idx.is_some() {
            let node = storage.remove(idx).expect("stale list link");
            idx = node.next;
        }

        self.head = Idx::NONE;
        self.len = 0;
    }

    // ========================================================================
    // Access & search
    // ========================================================================

    /// Returns a reference to the element at the given index.
    #[inline]
    pub fn get<'a>(&self, storage: &'a S, idx: Idx) -> Option<&'a T>
    where
        Idx: 'a,
    {
        storage.get(idx).map(|node| &node.data)
    }

    /// Returns a mutable reference to the element at the given index.
    #[inline]
    pub fn get_mut<'a>(&self, storage: &'a mut S, idx: Idx) -> Option<&'a mut T>
    where
        Idx: 'a,
    {
        storage.get_mut(idx).map(|node| &mut node.data)
    }

    /// Returns a reference to the front element.
    #[inline]
    pub fn front<'a>(&self, storage: &'a S) -> Option<&'a T>
    where
        Idx: 'a,
    {
        self.get(storage, self.head)
    }

    /// Returns the 0-based position of the first element equal to `value`,
    /// searching by value equality. O(n).
    ///
    /// Returns `None` if no element matches.
    pub fn position_of(&self, storage: &S, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let mut idx = self.head;
        let mut position = 0;
        while idx.is_some() {
            let node = storage.get(idx).expect("stale list link");
            if node.data == *value {
                return Some(position);
            }
            idx = node.next;
            position += 1;
        }
        None
    }

    /// Returns an iterator over references to elements, head to tail.
    #[inline]
    pub fn iter<'a>(&self, storage: &'a S) -> Iter<'a, T, S, Idx> {
        Iter {
            storage,
            curr: self.head,
            _marker: PhantomData,
        }
    }

    /// Returns an adapter that renders the list as `[v0,v1,...,vk]`
    /// (or `[]` when empty) via [`fmt::Display`].
    #[inline]
    pub fn display<'a>(&self, storage: &'a S) -> Display<'a, T, S, Idx> {
        Display {
            storage,
            head: self.head,
            _marker: PhantomData,
        }
    }

    /// Walks the chain to the terminal node. Caller must ensure the list is
    /// non-empty.
    fn tail_index(&self, storage: &S) -> Idx {
        let mut curr = self.head;
        loop {
            let next = storage.get(curr).expect("stale list link").next;
            if next.is_none() {
                return curr;
            }
            curr = next;
        }
    }
}

/// Iterator over references to list elements, head to tail.
pub struct Iter<'a, T, S, Idx: Index> {
    storage: &'a S,
    curr: Idx,
    _marker: PhantomData<T>,
}

impl<'a, T: 'a, S, Idx: Index + 'a> Iterator for Iter<'a, T, S, Idx>
where
    S: Storage<SinglyNode<T, Idx>, Index = Idx>,
{
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.curr.is_none() {
            return None;
        }

        let node = self.storage.get(self.curr).expect("stale list link");
        self.curr = node.next;
        Some(&node.data)
    }
}

/// Helper struct for rendering a list, created by [`SinglyList::display`].
pub struct Display<'a, T, S, Idx: Index> {
    storage: &'a S,
    head: Idx,
    _marker: PhantomData<T>,
}

impl<T, S, Idx: Index> fmt::Display for Display<'_, T, S, Idx>
where
    T: fmt::Display,
    S: Storage<SinglyNode<T, Idx>, Index = Idx>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;

        let mut idx = self.head;
        let mut first = true;
        while idx.is_some() {
            let node = self.storage.get(idx).expect("stale list link");
            if first {
                first = false;
            } else {
                write!(f, ",")?;
            }
            write!(f, "{}", node.data)?;
            idx = node.next;
        }

        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(list: &SinglyList<u64, SinglyArena<u64>>, arena: &SinglyArena<u64>) -> Vec<u64> {
        list.iter(arena).copied().collect()
    }

    /// Walks the chain and checks it agrees with the length counter.
    fn assert_chain_consistent(list: &SinglyList<u64, SinglyArena<u64>>, arena: &SinglyArena<u64>) {
        assert_eq!(list.iter(arena).count(), list.len());
        assert_eq!(list.is_empty(), list.head_index().is_none());
    }

    #[test]
    fn new_list_is_empty() {
        let list: SinglyList<u64, SinglyArena<u64>> = SinglyList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.head_index().is_none());
    }

    #[test]
    fn push_front_prepends() {
        let mut arena = SinglyArena::new();
        let mut list: SinglyList<u64, _> = SinglyList::new();

        list.push_front(&mut arena, 20);
        let idx = list.push_front(&mut arena, 10);

        assert_eq!(list.len(), 2);
        assert_eq!(list.head_index(), Some(idx));
        assert_eq!(collect(&list, &arena), vec![10, 20]);
        assert_chain_consistent(&list, &arena);
    }

    #[test]
    fn push_back_appends() {
        let mut arena = SinglyArena::new();
        let mut list: SinglyList<u64, _> = SinglyList::new();

        list.push_back(&mut arena, 1);
        list.push_back(&mut arena, 2);
        list.push_back(&mut arena, 3);

        assert_eq!(collect(&list, &arena), vec![1, 2, 3]);
        assert_chain_consistent(&list, &arena);
    }

    #[test]
    fn insert_at_zero_is_push_front() {
        let mut arena = SinglyArena::new();
        let mut list: SinglyList<u64, _> = SinglyList::new();

        list.push_back(&mut arena, 2);
        list.insert(&mut arena, 0, 1);

        assert_eq!(collect(&list, &arena), vec![1, 2]);
    }

    #[test]
    fn insert_at_len_is_push_back() {
        let mut arena = SinglyArena::new();
        let mut list: SinglyList<u64, _> = SinglyList::new();

        list.push_back(&mut arena, 1);
        list.push_back(&mut arena, 2);
        list.insert(&mut arena, list.len(), 3);

        assert_eq!(collect(&list, &arena), vec![1, 2, 3]);
    }

    #[test]
    fn insert_in_middle() {
        let mut arena = SinglyArena::new();
        let mut list: SinglyList<u64, _> = SinglyList::new();

        list.push_back(&mut arena, 1);
        list.push_back(&mut arena, 3);
        list.insert(&mut arena, 1, 2);

        assert_eq!(collect(&list, &arena), vec![1, 2, 3]);
        assert_chain_consistent(&list, &arena);
    }

    #[test]
    fn insert_clamps_past_end() {
        let mut arena = SinglyArena::new();
        let mut list: SinglyList<u64, _> = SinglyList::new();

        list.push_back(&mut arena, 1);
        list.insert(&mut arena, 999, 2);

        assert_eq!(collect(&list, &arena), vec![1, 2]);
    }

    #[test]
    fn insert_into_empty_ignores_position() {
        let mut arena = SinglyArena::new();
        let mut list: SinglyList<u64, _> = SinglyList::new();

        list.insert(&mut arena, 7, 42);

        assert_eq!(collect(&list, &arena), vec![42]);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn pop_front_empties_list() {
        let mut arena = SinglyArena::new();
        let mut list: SinglyList<u64, _> = SinglyList::new();

        list.push_back(&mut arena, 1);
        list.push_back(&mut arena, 2);

        assert_eq!(list.pop_front(&mut arena), Some(1));
        assert_eq!(list.pop_front(&mut arena), Some(2));
        assert_eq!(list.pop_front(&mut arena), None);
        assert!(list.is_empty());
        assert_chain_consistent(&list, &arena);
    }

    #[test]
    fn pop_back_single_node_clears_head() {
        let mut arena = SinglyArena::new();
        let mut list: SinglyList<u64, _> = SinglyList::new();

        list.push_back(&mut arena, 1);

        assert_eq!(list.pop_back(&mut arena), Some(1));
        assert!(list.is_empty());
        assert!(list.head_index().is_none());
    }

    #[test]
    fn pop_back_relinks_predecessor() {
        let mut arena = SinglyArena::new();
        let mut list: SinglyList<u64, _> = SinglyList::new();

        list.push_back(&mut arena, 1);
        list.push_back(&mut arena, 2);
        list.push_back(&mut arena, 3);

        assert_eq!(list.pop_back(&mut arena), Some(3));
        assert_eq!(collect(&list, &arena), vec![1, 2]);
        assert_chain_consistent(&list, &arena);
    }

    #[test]
    fn pop_back_empty_is_none() {
        let mut arena = SinglyArena::new();
        let mut list: SinglyList<u64, _> = SinglyList::new();
        assert_eq!(list.pop_back(&mut arena), None);
    }

    #[test]
    fn remove_node_by_identity() {
        let mut arena = SinglyArena::new();
        let mut list: SinglyList<u64, _> = SinglyList::new();

        list.push_back(&mut arena, 1);
        let b = list.push_back(&mut arena, 2);
        list.push_back(&mut arena, 2); // same value, different node

        assert_eq!(list.remove_node(&mut arena, b), Some(2));
        assert_eq!(list.len(), 2);
        assert_eq!(collect(&list, &arena), vec![1, 2]);
    }

    #[test]
    fn remove_node_head() {
        let mut arena = SinglyArena::new();
        let mut list: SinglyList<u64, _> = SinglyList::new();

        let a = list.push_back(&mut arena, 1);
        list.push_back(&mut arena, 2);

        assert_eq!(list.remove_node(&mut arena, a), Some(1));
        assert_eq!(collect(&list, &arena), vec![2]);
    }

    #[test]
    fn remove_node_not_a_member() {
        let mut arena = SinglyArena::new();
        let mut list: SinglyList<u64, _> = SinglyList::new();
        let mut other: SinglyList<u64, _> = SinglyList::new();

        list.push_back(&mut arena, 1);
        // Valid in storage, but linked into a different list
        let foreign = other.push_back(&mut arena, 99);

        assert_eq!(list.remove_node(&mut arena, foreign), None);
        assert_eq!(list.len(), 1);
        assert_eq!(other.len(), 1);
    }

    #[test]
    fn remove_node_empty_is_none() {
        let mut arena = SinglyArena::new();
        let mut list: SinglyList<u64, _> = SinglyList::new();
        assert_eq!(list.remove_node(&mut arena, 0), None);
    }

    #[test]
    fn remove_at_middle() {
        let mut arena = SinglyArena::new();
        let mut list: SinglyList<u64, _> = SinglyList::new();

        list.push_back(&mut arena, 1);
        list.push_back(&mut arena, 2);
        list.push_back(&mut arena, 3);

        assert_eq!(list.remove_at(&mut arena, 1), Some(2));
        assert_eq!(collect(&list, &arena), vec![1, 3]);
        assert_chain_consistent(&list, &arena);
    }

    #[test]
    fn remove_at_clamps_to_last_index() {
        let mut arena = SinglyArena::new();
        let mut list: SinglyList<u64, _> = SinglyList::new();

        list.push_back(&mut arena, 1);
        list.push_back(&mut arena, 2);
        list.push_back(&mut arena, 3);

        // Position past the end removes the last element, not nothing
        assert_eq!(list.remove_at(&mut arena, 999), Some(3));
        assert_eq!(collect(&list, &arena), vec![1, 2]);
    }

    #[test]
    fn remove_at_empty_is_none() {
        let mut arena = SinglyArena::new();
        let mut list: SinglyList<u64, _> = SinglyList::new();
        assert_eq!(list.remove_at(&mut arena, 0), None);
    }

    #[test]
    fn position_of_finds_first_match() {
        let mut arena = SinglyArena::new();
        let mut list: SinglyList<u64, _> = SinglyList::new();

        list.push_back(&mut arena, 10);
        list.push_back(&mut arena, 20);
        list.push_back(&mut arena, 20);

        assert_eq!(list.position_of(&arena, &10), Some(0));
        assert_eq!(list.position_of(&arena, &20), Some(1));
        assert_eq!(list.position_of(&arena, &999), None);
    }

    #[test]
    fn clear_then_reads_match_fresh_list() {
        let mut arena = SinglyArena::new();
        let mut list: SinglyList<u64, _> = SinglyList::new();

        list.push_back(&mut arena, 1);
        list.push_back(&mut arena, 2);

        list.clear(&mut arena);
        assert!(list.is_empty());
        assert_eq!(list.display(&arena).to_string(), "[]");
        assert_eq!(arena.len(), 0);

        // Idempotent
        list.clear(&mut arena);
        assert!(list.is_empty());
        assert_eq!(list.display(&arena).to_string(), "[]");
    }

    #[test]
    fn display_renders_head_to_tail() {
        let mut arena = SinglyArena::new();
        let mut list: SinglyList<u64, _> = SinglyList::new();

        assert_eq!(list.display(&arena).to_string(), "[]");

        list.push_back(&mut arena, 20);
        list.push_back(&mut arena, 30);
        list.push_back(&mut arena, 40);

        assert_eq!(list.display(&arena).to_string(), "[20,30,40]");
    }

    #[test]
    fn get_and_get_mut() {
        let mut arena = SinglyArena::new();
        let mut list: SinglyList<u64, _> = SinglyList::new();

        let a = list.push_back(&mut arena, 10);

        assert_eq!(list.get(&arena, a), Some(&10));
        *list.get_mut(&mut arena, a).unwrap() = 20;
        assert_eq!(list.front(&arena), Some(&20));
    }

    #[test]
    fn two_lists_share_one_arena() {
        let mut arena = SinglyArena::new();
        let mut xs: SinglyList<u64, _> = SinglyList::new();
        let mut ys: SinglyList<u64, _> = SinglyList::new();

        xs.push_back(&mut arena, 1);
        ys.push_back(&mut arena, 10);
        xs.push_back(&mut arena, 2);
        ys.push_back(&mut arena, 20);

        assert_eq!(collect(&xs, &arena), vec![1, 2]);
        assert_eq!(collect(&ys, &arena), vec![10, 20]);
    }
}
