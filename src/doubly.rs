//! Doubly-linked list over external storage.
//!
//! Nodes carry both a forward and a backward link. The backward link is a
//! plain index, used only for traversal shortcuts, so it is non-owning by
//! construction. The asymptotic profile matches [`SinglyList`](crate::SinglyList)
//! — there is still no tail index, so finding the last node is a forward
//! scan — but once found, its predecessor is an O(1) `prev` lookup instead
//! of a second pass with a lag pointer.
//!
//! The cost of the shortcut is link symmetry: every mutation must keep
//! `node.next == m` ⟺ `m.prev == node` for the whole chain, `head.prev`
//! must stay `NONE`, and a detached node must not retain links into the
//! remaining chain.
//!
//! Position clamping and the identity/value split (`remove_node` vs
//! `position_of`) are the same as in the singly list.
//!
//! # Example
//!
//! ```
//! use listkit::{Arena, DoublyList, DoublyNode};
//!
//! let mut arena: Arena<DoublyNode<u64>> = Arena::new();
//! let mut list: DoublyList<u64, _> = DoublyList::new();
//!
//! list.push_front(&mut arena, 30);
//! list.push_front(&mut arena, 20);
//!
//! assert_eq!(list.display(&arena).to_string(), "[20,30]");
//! assert_eq!(list.pop_back(&mut arena), Some(30));
//! assert_eq!(list.display(&arena).to_string(), "[20]");
//! ```

use core::fmt;
use std::marker::PhantomData;

use crate::{Arena, Index, Storage};

/// Type alias for arena storage holding doubly-linked nodes.
pub type DoublyArena<T, Idx = u32> = Arena<DoublyNode<T, Idx>, Idx>;

/// A node in a doubly-linked list.
#[derive(Debug)]
pub struct DoublyNode<T, Idx: Index = u32> {
    pub(crate) data: T,
    pub(crate) next: Idx,
    pub(crate) prev: Idx,
}

impl<T, Idx: Index> DoublyNode<T, Idx> {
    #[inline]
    fn new(data: T) -> Self {
        Self {
            data,
            next: Idx::NONE,
            prev: Idx::NONE,
        }
    }
}

/// A doubly-linked list over external storage.
///
/// The list tracks head and length. Nodes live in user-provided storage,
/// wrapped in [`DoublyNode`]. All operations on a list must use the same
/// storage instance; that discipline is the caller's responsibility.
///
/// # Type Parameters
///
/// - `T`: Element type
/// - `S`: Storage type (e.g., [`DoublyArena<T>`])
/// - `Idx`: Index type (default `u32`)
#[derive(Debug)]
pub struct DoublyList<T, S, Idx: Index = u32>
where
    S: Storage<DoublyNode<T, Idx>, Index = Idx>,
{
    head: Idx,
    len: usize,
    _marker: PhantomData<(T, S)>,
}

impl<T, S, Idx: Index> Default for DoublyList<T, S, Idx>
where
    S: Storage<DoublyNode<T, Idx>, Index = Idx>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S, Idx: Index> DoublyList<T, S, Idx>
where
    S: Storage<DoublyNode<T, Idx>, Index = Idx>,
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
    /// Repoints the old head's `prev` to the new node. Returns the index of
    /// the new node.
    pub fn push_front(&mut self, storage: &mut S, value: T) -> Idx {
        let mut node = DoublyNode::new(value);
        node.next = self.head;

        let idx = storage.insert(node);
        if self.head.is_some() {
            storage.get_mut(self.head).expect("stale list link").prev = idx;
        }

        self.head = idx;
        self.len += 1;
        idx
    }

    /// Pushes a value to the back of the list. O(n).
    ///
    /// Walks the chain to the terminal node, attaches there, and sets the
    /// new node's `prev`. Returns the index of the new node.
    pub fn push_back(&mut self, storage: &mut S, value: T) -> Idx {
        if self.head.is_none() {
            return self.push_front(storage, value);
        }

        let last = self.tail_index(storage);
        let mut node = DoublyNode::new(value);
        node.prev = last;

        let idx = storage.insert(node);
        storage.get_mut(last).expect("stale list link").next = idx;
        self.len += 1;
        idx
    }

    /// Inserts a value at the given position. O(n).
    ///
    /// `position` is clamped to `[0, len]`. Both the new node's links and
    /// its neighbors' links are repointed. Returns the index of the new
    /// node.
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
        let mut node = DoublyNode::new(value);
        node.prev = prev;
        node.next = next;

        let idx = storage.insert(node);
        storage.get_mut(prev).expect("stale list link").next = idx;
        if next.is_some() {
            storage.get_mut(next).expect("stale list link").prev = idx;
        }

        self.len += 1;
        idx
    }

    // ========================================================================
    // Remove operations
    // ========================================================================

    /// Removes and returns the front element.
    ///
    /// Returns `None` if the list is empty. On a single-element list there
    /// is no successor whose `prev` needs clearing; the guard covers that.
    pub fn pop_front(&mut self, storage: &mut S) -> Option<T> {
        if self.head.is_none() {
            return None;
        }

        let node = storage.remove(self.head).expect("stale list link");
        self.head = node.next;
        if self.head.is_some() {
            storage.get_mut(self.head).expect("stale list link").prev = Idx::NONE;
        }

        self.len -= 1;
        Some(node.data)
    }

    /// Removes and returns the back element. O(n).
    ///
    /// The terminal node is found by a forward scan; its predecessor is
    /// then an O(1) `prev` lookup — no lag pointer needed. Returns `None`
    /// if the list is empty.
    pub fn pop_back(&mut self, storage: &mut S) -> Option<T> {
        if self.head.is_none() {
            return None;
        }

        let last = self.tail_index(storage);
        let node = storage.remove(last).expect("stale list link");

        if node.prev.is_none() {
            self.head = Idx::NONE;
        } else {
            storage.get_mut(node.prev).expect("stale list link").next = Idx::NONE;
        }

        self.len -= 1;
        Some(node.data)
    }

    /// Removes the node at the given index, if it is a member of this list.
    ///
    /// Identity removal: the chain is walked comparing indices, so an index
    /// that is not in this list (even one valid in storage) leaves the list
    /// untouched and returns `None`. O(n).
    pub fn remove_node(&mut self, storage: &mut S, idx: Idx) -> Option<T> {
        if self.head.is_none() {
            return None;
        }

        if self.head == idx {
            return self.pop_front(storage);
        }

        let mut curr = storage.get(self.head).expect("stale list link").next;
        while curr.is_some() {
            if curr == idx {
                return Some(self.unlink(storage, idx));
            }
            curr = storage.get(curr).expect("stale list link").next;
        }

        None
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

        let mut curr = self.head;
        for _ in 0..position {
            curr = storage.get(curr).expect("stale list link").next;
        }

        Some(self.unlink(storage, curr))
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

    /// Detaches a non-head node, repointing both neighbors.
    ///
    /// Removing the node from storage also discards its links, so the
    /// detached node cannot retain reachability into the chain.
    fn unlink(&mut self, storage: &mut S, idx: Idx) -> T {
        let node = storage.remove(idx).expect("stale list link");

        storage.get_mut(node.prev).expect("stale list link").next = node.next;
        if node.next.is_some() {
            storage.get_mut(node.next).expect("stale list link").prev = node.prev;
        }

        self.len -= 1;
        node.data
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

    /// Returns the index of the node before `idx`, or `None` if `idx` is
    /// the head or invalid.
    #[inline]
    pub fn prev_index(&self, storage: &S, idx: Idx) -> Option<Idx> {
        let prev = storage.get(idx)?.prev;
        if prev.is_none() {
            None
        } else {
            Some(prev)
        }
    }

    /// Returns the index of the node after `idx`, or `None` if `idx` is
    /// the tail or invalid.
    #[inline]
    pub fn next_index(&self, storage: &S, idx: Idx) -> Option<Idx> {
        let next = storage.get(idx)?.next;
        if next.is_none() {
            None
        } else {
            Some(next)
        }
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
    S: Storage<DoublyNode<T, Idx>, Index = Idx>,
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

/// Helper struct for rendering a list, created by [`DoublyList::display`].
pub struct Display<'a, T, S, Idx: Index> {
    storage: &'a S,
    head: Idx,
    _marker: PhantomData<T>,
}

impl<T, S, Idx: Index> fmt::Display for Display<'_, T, S, Idx>
where
    T: fmt::Display,
    S: Storage<DoublyNode<T, Idx>, Index = Idx>,
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
