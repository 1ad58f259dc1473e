//! An unbalanced BST built from exclusively owned, boxed [`Node`]s.
//!
//! Insertion and lookup each come in an iterative and a recursive flavor. Both
//! flavors walk the same path and build the same tree.
//!
//! # Examples
//!
//! ```
//! use search_tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.find(&1).is_none());
//!
//! tree.insert(1).insert_recursively(2);
//! assert_eq!(tree.find(&2).map(|n| n.value()), Some(&2));
//!
//! // Equal values are kept and always go to the right.
//! tree.insert(1);
//! assert_eq!(tree.dfs_in_order(), [&1, &1, &2]);
//!
//! // Removing a value hands it back.
//! assert_eq!(tree.remove(&1), Some(1));
//! assert_eq!(tree.dfs_in_order(), [&1, &2]);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::node::{Link, Node};

/// A Binary Search Tree. Values are kept in sorted order (duplicates included)
/// and the tree is never rebalanced.
///
/// Cloning, comparing, formatting and dropping never recurse, so they are safe on trees of any
/// height. The `*_recursively` and `dfs_*` methods recurse once per level.
#[derive(Clone, PartialEq, Eq)]
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    // The derived drop recurses once per level, which overflows the stack on long chains (e.g.
    // after inserting sorted values).
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("pre_order", &self.iter_pre_order().collect::<Vec<_>>())
            .finish()
    }
}

impl<T> From<Node<T>> for Tree<T> {
    /// Uses `root` (and everything below it) as a new tree. A subtree cloned out of another tree
    /// already satisfies the search property.
    fn from(root: Node<T>) -> Self {
        let len = root.size();
        Self {
            root: Some(Box::new(root)),
            len,
        }
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The root node, if the tree isn't empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// How many values are stored, counting duplicates.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree stores no values at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of levels in the tree. An empty tree has height 0 and a lone root has
    /// height 1.
    pub fn height(&self) -> usize {
        self.root().map_or(0, Node::height)
    }

    /// The smallest stored value.
    pub fn min(&self) -> Option<&T> {
        self.root().map(Node::min)
    }

    /// The largest stored value.
    pub fn max(&self) -> Option<&T> {
        self.root().map(Node::max)
    }

    /// Inserts `value` by walking down from the root until an empty slot is found. Smaller values
    /// go left and everything else, including equal values, goes right. Returns the tree so calls
    /// can be chained.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(5).insert(5);
    ///
    /// let root = tree.root().unwrap();
    /// assert!(root.left().is_none());
    /// assert_eq!(root.right().map(|n| n.value()), Some(&5));
    /// ```
    pub fn insert(&mut self, value: T) -> &mut Self
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *link = Some(Box::new(Node::new(value)));
        self.len += 1;

        self
    }

    /// Inserts `value` by recursing from the root. The resulting tree is identical to the one
    /// [`Tree::insert`] would build.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::Tree;
    ///
    /// let mut iterative = Tree::new();
    /// let mut recursive = Tree::new();
    /// for x in [4, 2, 6, 2, 5] {
    ///     iterative.insert(x);
    ///     recursive.insert_recursively(x);
    /// }
    ///
    /// assert_eq!(iterative, recursive);
    /// ```
    pub fn insert_recursively(&mut self, value: T) -> &mut Self
    where
        T: Ord,
    {
        match self.root.as_mut() {
            Some(root) => root.insert_recursively(value),
            None => self.root = Some(Box::new(Node::new(value))),
        }
        self.len += 1;

        self
    }

    /// Potentially finds the node holding `value` by walking down from the root. If no node has
    /// the value, `None` is returned. With duplicates, the one closest to the root is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1).insert(2);
    ///
    /// let found = tree.find(&1).unwrap();
    /// assert_eq!(found.value(), &1);
    /// assert_eq!(found.right().map(|n| n.value()), Some(&2));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        let mut current = self.root();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Equal => return Some(node),
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
            };
        }

        None
    }

    /// Like [`Tree::find`] but recursing from the root. Use [`Node::find_recursively`] to start
    /// from some other node.
    pub fn find_recursively(&self, value: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        self.root().and_then(|root| root.find_recursively(value))
    }

    /// Whether any node holds `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.find(value).is_some()
    }

    /// Removes the node [`Tree::find`] would return for `value` and returns its value. If the
    /// tree does not contain `value`, nothing happens.
    ///
    /// A node with two children is replaced by its in-order successor.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::Tree;
    ///
    /// let mut tree: Tree<_> = [5, 3, 8, 7, 9].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&8), Some(8));
    /// assert_eq!(tree.remove(&8), None);
    /// assert_eq!(tree.dfs_pre_order(), [&5, &3, &9, &7]);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let removed = Self::remove_from(&mut self.root, value)?;
        self.len -= 1;

        Some(removed)
    }

    fn remove_from(link: &mut Link<T>, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let mut link = link;
        loop {
            let ordering = value.cmp(&link.as_ref()?.value);
            link = match ordering {
                Ordering::Equal => break,
                Ordering::Less => &mut link.as_mut()?.left,
                Ordering::Greater => &mut link.as_mut()?.right,
            };
        }

        let mut removed = link.take()?;
        *link = match (removed.left.take(), removed.right.take()) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                let mut rest = Some(right);
                let mut successor = Node::take_min(&mut rest)?;
                successor.left = Some(left);
                successor.right = rest;

                if cfg!(debug_assertions) {
                    successor.assert_children_ordered();
                }
                Some(successor)
            }
        };

        Some(removed.value)
    }

    /// Whether, for every node, the heights of its two subtrees differ by at most one.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::Tree;
    ///
    /// let balanced: Tree<_> = [2, 1, 3].into_iter().collect();
    /// let chain: Tree<_> = [1, 2, 3].into_iter().collect();
    ///
    /// assert!(balanced.is_balanced());
    /// assert!(!chain.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        self.root().map_or(true, |root| root.balanced_height().is_some())
    }

    /// Finds the second largest stored value, i.e. the second-to-last element of
    /// [`Tree::dfs_in_order`]. Duplicates count separately so a tree holding `[5, 5]` answers
    /// `5`. Returns `None` when fewer than two values are stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::Tree;
    ///
    /// let tree: Tree<_> = [10, 5, 15, 12].into_iter().collect();
    /// assert_eq!(tree.find_second_highest(), Some(&12));
    ///
    /// let lonely: Tree<_> = [10].into_iter().collect();
    /// assert_eq!(lonely.find_second_highest(), None);
    /// ```
    pub fn find_second_highest(&self) -> Option<&T> {
        let mut parent = None;
        let mut current = self.root()?;
        while let Some(right) = current.right() {
            parent = Some(current);
            current = right;
        }

        // The largest value is `current`. Anything left of it beats its parent.
        match current.left() {
            Some(left) => Some(left.max()),
            None => parent.map(Node::value),
        }
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
