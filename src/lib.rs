//! Linked lists over index-addressed arena storage.
//!
//! This crate is a teaching library of linear structures: a singly-linked
//! and a doubly-linked list with the classic ADT surface (head pointer,
//! length counter, positional insert/remove, identity and value search).
//! The key move: nodes are not boxed and chained by pointers, they live in
//! an arena and link to each other by stable indices.
//!
//! A pointer-chained rendition looks like this:
//!
//! ```text
//! head ──▶ Node ──▶ Node ──▶ Node ──▶ ∅
//!          (owns)   (owns)   (owns)
//! ```
//!
//! This crate inverts the model:
//!
//! ```text
//! Arena (slots)            - owns every node, hands out stable indices
//! SinglyList / DoublyList  - head index + length, nothing else
//! ```
//!
//! Benefits:
//! - **No ownership cycles**: backward links are plain indices, non-owning
//!   by construction
//! - **Stable identity**: a node's index survives unrelated removals, so
//!   "remove this exact node" needs no reference equality
//! - **Pluggable storage**: any [`Storage`] implementor can hold nodes;
//!   `slab::Slab` works behind the `slab` feature
//!
//! # Quick Start
//!
//! ```
//! use listkit::OwnedSinglyList;
//!
//! let mut list: OwnedSinglyList<u64> = OwnedSinglyList::new();
//!
//! list.push_back(20);
//! list.push_back(30);
//! list.push_front(10);
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.to_string(), "[10,20,30]");
//! assert_eq!(list.position_of(&30), Some(2));
//!
//! list.remove_at(1);
//! assert_eq!(list.to_string(), "[10,30]");
//! ```
//!
//! # Identity vs value
//!
//! Two removal flavors, deliberately distinct:
//! - `remove_node(idx)` removes the node at exactly that index (identity)
//! - `position_of(&v)` / `remove_at(pos)` work by value equality and
//!   0-based position
//!
//! ```
//! use listkit::OwnedDoublyList;
//!
//! let mut list: OwnedDoublyList<u64> = OwnedDoublyList::new();
//!
//! list.push_back(7);
//! let marked = list.push_back(7); // same value, its own identity
//! list.push_back(7);
//!
//! list.remove_node(marked);
//! assert_eq!(list.len(), 2);
//! assert_eq!(list.position_of(&7), Some(0)); // first 7 untouched
//! ```
//!
//! # Position clamping
//!
//! Out-of-range positions are clamped, never rejected: `insert` clamps to
//! `[0, len]` (so `insert(0, v)` is `push_front` and `insert(len, v)` is
//! `push_back`), `remove_at` clamps to the last valid index. Absence is
//! always `Option::None` — removals on an empty list, searches with no
//! match, and non-member indices all answer `None` instead of failing.
//!
//! # Sharing an arena
//!
//! The raw lists take `&mut storage` on every call, so several lists can
//! keep disjoint chains in one arena:
//!
//! ```
//! use listkit::{Arena, SinglyList, SinglyNode};
//!
//! let mut arena: Arena<SinglyNode<u64>> = Arena::new();
//! let mut evens: SinglyList<u64, _> = SinglyList::new();
//! let mut odds: SinglyList<u64, _> = SinglyList::new();
//!
//! for n in 0..6u64 {
//!     if n % 2 == 0 {
//!         evens.push_back(&mut arena, n);
//!     } else {
//!         odds.push_back(&mut arena, n);
//!     }
//! }
//!
//! assert_eq!(evens.display(&arena).to_string(), "[0,2,4]");
//! assert_eq!(odds.display(&arena).to_string(), "[1,3,5]");
//! ```
//!
//! All operations on a list must use the storage instance its nodes were
//! inserted into; that discipline is the caller's responsibility (same as
//! the `slab` crate). The [`OwnedSinglyList`]/[`OwnedDoublyList`] wrappers
//! bundle list and arena when nothing needs to share.
//!
//! # Complexity
//!
//! Neither list keeps a tail index, so back operations scan forward:
//!
//! | Operation | Singly | Doubly |
//! |-----------|--------|--------|
//! | push_front / pop_front | O(1) | O(1) |
//! | push_back / pop_back | O(n) | O(n) scan, O(1) relink via `prev` |
//! | insert / remove_at / remove_node | O(n) | O(n) |
//! | position_of | O(n) | O(n) |
//! | len / is_empty | O(1) | O(1) |
//!
//! # Feature Flags
//!
//! - `slab` - [`Storage`] impl for `slab::Slab`

#![warn(missing_docs)]

pub mod doubly;
pub mod index;
pub mod owned;
pub mod singly;
pub mod storage;

pub use doubly::{DoublyArena, DoublyList, DoublyNode};
pub use index::Index;
pub use owned::{OwnedDoublyList, OwnedSinglyList};
pub use singly::{SinglyArena, SinglyList, SinglyNode};
pub use storage::{Arena, Storage};
