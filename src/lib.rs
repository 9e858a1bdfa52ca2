//! Indexed List - a sequence with O(sqrt(n)) indexed get, set, insert and
//! remove.
//!
//! Elements are stored in a chain of blocks of roughly sqrt(n) elements
//! each. Locating an index walks the block chain and then one block, and a
//! single balancing pass after each insert or remove keeps the blocks sized
//! so that both walks stay short.
//!
//! # Quick Start
//!
//! ```
//! use indexed_list::IndexedList;
//!
//! let mut list = IndexedList::new();
//! list.insert(0, "a").unwrap();
//! list.insert(1, "b").unwrap();
//! list.insert(1, "c").unwrap();
//! assert_eq!(list.to_vec(), vec!["a", "c", "b"]);
//!
//! assert_eq!(list.remove(0), Ok("a"));
//! assert_eq!(list.get(0), Ok(&"c"));
//! assert!(list.get(2).is_err());
//! ```
//!
//! The list has no internal locking. Wrap it in a `Mutex` (or similar) to
//! share it across threads.

mod arena;
mod balance;
mod block;
pub mod error;
pub mod iter;
mod list;

pub use balance::MIN_THRESHOLD;
pub use balance::threshold;
pub use error::IndexError;
pub use error::Op;
pub use error::Result;
pub use list::IndexedList;
