//! This crate exposes a linked Binary Search Tree (BST) of values that is
//! kept unbalanced until asked to rebalance, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than or equal to its own value. Duplicates are kept and
//!    always inserted to the right.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is
//! defined as the longest path from the root `Node` to a leaf `Node`). This
//! tree does nothing to keep its height down while values are added, so adding
//! sorted values builds a chain with height `N - 1`. [`Tree::is_balanced`]
//! reports when that has happened and [`Tree::rebalance`] rebuilds the tree
//! with height `O(lg N)`. BSTs also naturally support sorted iteration by
//! visiting the left subtree, then the subtree root, then the right subtree.
//!
//! # Examples
//!
//! ```
//! use linkedbst::Tree;
//!
//! let mut tree: Tree<_> = (1..=100).collect();
//! assert_eq!(tree.height(), 99);
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert_eq!(tree.height(), 6);
//! assert!(tree.is_balanced());
//!
//! assert_eq!(tree.successor(&50), Some(&51));
//! assert_eq!(tree.range_find(&10, &12), [&10, &11, &12]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod balance;
mod error;
mod node;
mod order;
mod rebalance;
pub mod traversal;
mod tree;


pub use error::{TreeError, TreeResult};
pub use node::{find_max, find_min, Node};
pub use tree::Tree;
