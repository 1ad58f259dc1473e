//! This crate exposes a plain, unbalanced Binary Search Tree (BST) mostly
//! for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and traverse stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores the value that
//! was inserted and may have up to two child `Node`s. The most important
//! invariants of this BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than _or equal to_ its own value. Inserting a value that
//!    is already present always places the new copy to the right.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). Nothing here rebalances the tree
//! so inserting already sorted values degrades it into a linked list. BSTs also
//! naturally support sorted iteration by visiting the left subtree, then the
//! subtree root, then the right subtree.
//!
//! # Examples
//!
//! ```
//! use search_tree::Tree;
//!
//! let mut tree = Tree::new();
//! tree.insert(10).insert(5).insert(15).insert(2).insert(7);
//!
//! assert_eq!(tree.dfs_in_order(), [&2, &5, &7, &10, &15]);
//! assert_eq!(tree.dfs_pre_order(), [&10, &5, &2, &7, &15]);
//! assert_eq!(tree.dfs_post_order(), [&2, &7, &5, &15, &10]);
//! assert_eq!(tree.bfs(), [&10, &5, &15, &2, &7]);
//!
//! let five = tree.find(&5).expect("5 was inserted");
//! assert_eq!(five.left().map(|n| n.value()), Some(&2));
//! assert!(tree.find(&42).is_none());
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod node;
pub mod traversal;
pub mod tree;


pub use node::Node;
pub use tree::Tree;
