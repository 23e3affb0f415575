//! An ordered set backed by a treap: a binary search tree whose shape is decided by random
//! per-node priorities kept in max-heap order.
//!
//! # Examples
//!
//! ```
//! use treap_collections::treap::TreapSet;
//!
//! let mut t = TreapSet::new();
//! t.insert(String::from("f"));
//! assert!(t.contains("f"));
//! t.remove("f");
//! assert!(t.is_empty());
//! ```

pub mod priority;
pub mod treap;
