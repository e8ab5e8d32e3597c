//! Red-black tree collections for Rust.
//!
//! This crate provides [`RBTreeMap`] and [`RBTreeSet`], ordered map and set
//! collections backed by a red-black binary search tree:
//!
//! - O(log n) insertion, lookup, and removal
//! - In-order iteration in both directions, worst-case logarithmic and
//!   amortized constant time per item
//! - Duplicate-rejecting insertion for map/set semantics, with the
//!   underlying tree also supporting duplicate keys
//!
//! # Example
//!
//! ```
//! use rubi_tree::RBTreeMap;
//!
//! let mut scores = RBTreeMap::new();
//! scores.insert("Alice", 100);
//! scores.insert("Bob", 85);
//! scores.insert("Carol", 92);
//!
//! // Standard BTreeMap-style operations work as expected
//! assert_eq!(scores.get(&"Bob"), Some(&85));
//! assert_eq!(scores.len(), 3);
//!
//! // Iteration is sorted by key
//! let names: Vec<_> = scores.keys().copied().collect();
//! assert_eq!(names, ["Alice", "Bob", "Carol"]);
//!
//! // Entries can be manipulated in place
//! *scores.entry("Bob").or_insert(0) += 5;
//! assert_eq!(scores[&"Bob"], 90);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Drop-in replacement** - API mirrors `std::collections::BTreeMap`/`BTreeSet`
//! - **Arena storage** - Nodes live in a contiguous slot arena indexed by integer
//!   handles; child links own their subtrees and parent links are plain indices
//!
//! # Implementation
//!
//! The collections are implemented as a classic red-black tree with parent
//! back-references. Insertion recolors past a red uncle or applies one of
//! four rotation shapes past a black one; iteration walks successor and
//! predecessor links without any auxiliary stack. Removal splices nodes
//! structurally and does not rebalance, trading the strict height bound
//! after deletions for a simpler, O(1)-relink erase.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
// NOTE: One unsafe block is needed so iter_mut can hand out long-lived value
// references while navigating the node arena.
// #![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod raw;

pub mod rbtree_map;
pub mod rbtree_set;

pub use rbtree_map::RBTreeMap;
pub use rbtree_set::RBTreeSet;
