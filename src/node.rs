//! The storage unit of a [`Tree`][crate::Tree].
//!
//! A `Node` owns its value and up to two children. Callers only ever see a
//! `Node` through a shared reference (e.g. from [`Tree::find`][crate::Tree::find])
//! so they can inspect the subtree but never reorder it.

use std::cmp::Ordering;
use std::fmt;

/// An owned, possibly empty, child slot.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single value in a [`Tree`][crate::Tree] along with its two subtrees.
///
/// `Clone` and `PartialEq` walk the subtree with a heap allocated stack so they work on
/// degenerate, list-like subtrees of any depth. `Debug` only shows the values of the direct
/// children.
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    /// Construct a new leaf `Node` holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree. Every value in it is less than [`Node::value`].
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree. Every value in it is greater than or equal to
    /// [`Node::value`].
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|n| (n, depth + 1)));
            stack.extend(node.right().map(|n| (n, depth + 1)));
        }
        height
    }

    /// How many nodes are in the subtree rooted at this node, including itself.
    pub fn size(&self) -> usize {
        let mut size = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            size += 1;
            stack.extend(node.left());
            stack.extend(node.right());
        }
        size
    }

    /// The smallest value in this subtree, i.e. the leftmost node's value.
    pub fn min(&self) -> &T {
        let mut current = self;
        while let Some(left) = current.left() {
            current = left;
        }
        &current.value
    }

    /// The largest value in this subtree, i.e. the rightmost node's value.
    pub fn max(&self) -> &T {
        let mut current = self;
        while let Some(right) = current.right() {
            current = right;
        }
        &current.value
    }

    /// Searches the subtree rooted at this node for `value`, recursing into
    /// whichever child could hold it. This recurses once per level, so prefer
    /// [`Tree::find`][crate::Tree::find] on very deep trees.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(10).insert(5).insert(15).insert(2);
    ///
    /// let five = tree.find(&5).unwrap();
    /// assert_eq!(five.find_recursively(&2).map(|n| n.value()), Some(&2));
    ///
    /// // 15 is in the tree, just not below 5.
    /// assert!(five.find_recursively(&15).is_none());
    /// ```
    pub fn find_recursively(&self, value: &T) -> Option<&Self>
    where
        T: Ord,
    {
        match value.cmp(&self.value) {
            Ordering::Equal => Some(self),
            Ordering::Less => self.left().and_then(|n| n.find_recursively(value)),
            Ordering::Greater => self.right().and_then(|n| n.find_recursively(value)),
        }
    }

    /// Inserts `value` somewhere in the subtree rooted at this node, recursing once per level.
    /// Equal values go right.
    pub(crate) fn insert_recursively(&mut self, value: T)
    where
        T: Ord,
    {
        let child = if value < self.value {
            &mut self.left
        } else {
            &mut self.right
        };
        match child {
            Some(node) => node.insert_recursively(value),
            None => *child = Some(Box::new(Node::new(value))),
        }

        if cfg!(debug_assertions) {
            self.assert_children_ordered();
        }
    }

    /// Checks the search property between this node and its direct children.
    pub(crate) fn assert_children_ordered(&self)
    where
        T: Ord,
    {
        if let Some(left) = self.left() {
            assert!(left.value < self.value);
        }
        if let Some(right) = self.right() {
            assert!(right.value >= self.value);
        }
    }

    /// Detaches the leftmost node of the subtree in `link` and splices that node's right
    /// subtree into its old slot. The returned node has no children. Returns `None` if `link` is
    /// empty.
    pub(crate) fn take_min(link: &mut Link<T>) -> Option<Box<Self>> {
        let mut link = link;
        while link.as_ref()?.left.is_some() {
            link = &mut link.as_mut()?.left;
        }

        let mut min = link.take()?;
        *link = min.right.take();
        Some(min)
    }

    /// Returns the height of this subtree if every node in it is balanced, or `None` as soon as
    /// one isn't.
    pub(crate) fn balanced_height(&self) -> Option<usize> {
        // Post-order walk. `heights` holds the height of each finished subtree, so when a node is
        // expanded its right subtree's height is on top with its left subtree's below.
        let mut heights: Vec<usize> = Vec::new();
        let mut stack = vec![(self, false)];
        while let Some((node, expanded)) = stack.pop() {
            if !expanded {
                stack.push((node, true));
                stack.extend(node.right().map(|n| (n, false)));
                stack.extend(node.left().map(|n| (n, false)));
                continue;
            }

            let right_height = match node.right() {
                Some(_) => heights.pop()?,
                None => 0,
            };
            let left_height = match node.left() {
                Some(_) => heights.pop()?,
                None => 0,
            };
            if left_height.abs_diff(right_height) > 1 {
                return None;
            }
            heights.push(left_height.max(right_height) + 1);
        }

        heights.pop()
    }
}

impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        // Post-order walk building each copy after both of its children. `built` holds the
        // finished copies, right child on top of left child.
        let mut built: Vec<Self> = Vec::new();
        let mut stack = vec![(self, false)];
        while let Some((node, expanded)) = stack.pop() {
            if !expanded {
                stack.push((node, true));
                stack.extend(node.right().map(|n| (n, false)));
                stack.extend(node.left().map(|n| (n, false)));
                continue;
            }

            let right = node.right.as_ref().and_then(|_| built.pop()).map(Box::new);
            let left = node.left.as_ref().and_then(|_| built.pop()).map(Box::new);
            built.push(Self {
                value: node.value.clone(),
                left,
                right,
            });
        }

        built.pop().expect("Cloning a node builds its copy last")
    }
}

impl<T: PartialEq> PartialEq for Node<T> {
    /// Two subtrees are equal when they have the same shape and the same value at every position.
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((a, b)) = stack.pop() {
            if a.value != b.value {
                return false;
            }
            for children in [(a.left(), b.left()), (a.right(), b.right())] {
                match children {
                    (Some(a), Some(b)) => stack.push((a, b)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

impl<T: Eq> Eq for Node<T> {}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left().map(Node::value))
            .field("right", &self.right().map(Node::value))
            .finish()
    }
}
