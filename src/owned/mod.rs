//! Convenience wrappers that own their storage.
//!
//! The types in this module bundle a list with its own [`Arena`](crate::Arena),
//! giving the classic "list owns its nodes" surface: no `storage` parameter
//! on any call, and `fmt::Display` directly on the list.
//!
//! # When to use owned variants
//!
//! Use [`OwnedSinglyList`] or [`OwnedDoublyList`] when:
//! - one list, one arena — nothing else shares the node pool
//! - you want the plain ADT surface without threading `&mut arena` around
//!
//! # When to use the raw variants
//!
//! Use [`SinglyList`](crate::SinglyList) or [`DoublyList`](crate::DoublyList)
//! with external storage when several lists share one arena, or when you
//! want to choose the storage backend (e.g. `slab::Slab`).
//!
//! # Example
//!
//! ```
//! use listkit::OwnedSinglyList;
//!
//! let mut list: OwnedSinglyList<u64> = OwnedSinglyList::new();
//! list.push_back(20);
//! list.push_back(30);
//! list.push_front(10);
//!
//! assert_eq!(list.to_string(), "[10,20,30]");
//! assert_eq!(list.pop_back(), Some(30));
//! ```

mod doubly;
mod singly;

pub use doubly::OwnedDoublyList;
pub use singly::OwnedSinglyList;
