//! Depth-first and breadth-first walks over a [`Tree`].
//!
//! The `dfs_*` methods recurse once per level and collect every value into a
//! `Vec`. Each order also has a lazy iterator that keeps its own stack (or
//! queue) on the heap, so walking a degenerate, list-like tree can't overflow
//! the call stack. Both forms yield the same sequence.
//!
//! # Examples
//!
//! ```
//! use search_tree::Tree;
//!
//! let tree: Tree<_> = [10, 5, 15, 2, 7].into_iter().collect();
//!
//! assert_eq!(tree.dfs_post_order(), [&2, &7, &5, &15, &10]);
//! assert!(tree.iter_post_order().eq(tree.dfs_post_order()));
//!
//! // In-order is sorted.
//! let sorted: Vec<_> = tree.iter().copied().collect();
//! assert_eq!(sorted, [2, 5, 7, 10, 15]);
//! ```

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::node::Node;
use crate::tree::Tree;

impl<T> Tree<T> {
    /// Every value, each node before its left subtree and then its right subtree.
    pub fn dfs_pre_order(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len());
        if let Some(root) = self.root() {
            root.pre_order(&mut values);
        }
        values
    }

    /// Every value in ascending order: left subtree, node, right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::Tree;
    ///
    /// let tree: Tree<_> = [3, 1, 2, 3].into_iter().collect();
    /// assert_eq!(tree.dfs_in_order(), [&1, &2, &3, &3]);
    ///
    /// let empty = Tree::<i32>::new();
    /// assert!(empty.dfs_in_order().is_empty());
    /// ```
    pub fn dfs_in_order(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len());
        if let Some(root) = self.root() {
            root.in_order(&mut values);
        }
        values
    }

    /// Every value, each node after both of its subtrees.
    pub fn dfs_post_order(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len());
        if let Some(root) = self.root() {
            root.post_order(&mut values);
        }
        values
    }

    /// Every value level by level: the root, then its children left to right, then their
    /// children, and so on.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::Tree;
    ///
    /// let tree: Tree<_> = [10, 5, 15, 2, 7].into_iter().collect();
    /// assert_eq!(tree.bfs(), [&10, &5, &15, &2, &7]);
    /// ```
    pub fn bfs(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len());
        values.extend(self.iter_level_order());
        values
    }

    /// Lazily walks the tree in pre-order. See [`Tree::dfs_pre_order`].
    pub fn iter_pre_order(&self) -> PreOrder<'_, T> {
        PreOrder {
            stack: self.root().into_iter().collect(),
        }
    }

    /// Lazily walks the tree in sorted order. See [`Tree::dfs_in_order`].
    pub fn iter(&self) -> InOrder<'_, T> {
        let mut iter = InOrder { stack: Vec::new() };
        iter.push_left_spine(self.root());
        iter
    }

    /// Lazily walks the tree in post-order. See [`Tree::dfs_post_order`].
    pub fn iter_post_order(&self) -> PostOrder<'_, T> {
        PostOrder {
            stack: self.root().map(|root| (root, false)).into_iter().collect(),
        }
    }

    /// Lazily walks the tree level by level. See [`Tree::bfs`].
    pub fn iter_level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder {
            queue: self.root().into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Node<T> {
    fn pre_order<'a>(&'a self, values: &mut Vec<&'a T>) {
        values.push(&self.value);
        if let Some(left) = self.left() {
            left.pre_order(values);
        }
        if let Some(right) = self.right() {
            right.pre_order(values);
        }
    }

    fn in_order<'a>(&'a self, values: &mut Vec<&'a T>) {
        if let Some(left) = self.left() {
            left.in_order(values);
        }
        values.push(&self.value);
        if let Some(right) = self.right() {
            right.in_order(values);
        }
    }

    fn post_order<'a>(&'a self, values: &mut Vec<&'a T>) {
        if let Some(left) = self.left() {
            left.post_order(values);
        }
        if let Some(right) = self.right() {
            right.post_order(values);
        }
        values.push(&self.value);
    }
}

/// Pre-order iterator returned by [`Tree::iter_pre_order`].
#[derive(Debug)]
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right first so the left subtree is popped first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(&node.value)
    }
}

impl<T> FusedIterator for PreOrder<'_, T> {}

/// In-order iterator returned by [`Tree::iter`].
///
/// The stack holds the nodes whose left subtrees are being visited, deepest on top.
#[derive(Debug)]
pub struct InOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> InOrder<'a, T> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(&node.value)
    }
}

impl<T> FusedIterator for InOrder<'_, T> {}

/// Post-order iterator returned by [`Tree::iter_post_order`].
#[derive(Debug)]
pub struct PostOrder<'a, T> {
    /// Each node is pushed twice: once unexpanded (`false`) and, once its children have been
    /// scheduled, again as expanded (`true`) so it is yielded after them.
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(&node.value);
            }
            self.stack.push((node, true));
            self.stack.extend(node.right().map(|n| (n, false)));
            self.stack.extend(node.left().map(|n| (n, false)));
        }
    }
}

impl<T> FusedIterator for PostOrder<'_, T> {}

/// Breadth-first iterator returned by [`Tree::iter_level_order`].
#[derive(Debug)]
pub struct LevelOrder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(&node.value)
    }
}

impl<T> FusedIterator for LevelOrder<'_, T> {}
