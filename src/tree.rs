//! The structural core of the tree: adding, finding, removing, and replacing
//! values.
//!
//! # Examples
//!
//! ```
//! use linkedbst::{Tree, TreeError};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! tree.add(1);
//! assert_eq!(tree.find(&1), Some(&1));
//!
//! // Adding an equal value keeps both copies.
//! tree.add(1);
//! assert_eq!(tree.len(), 2);
//!
//! // Removing a value returns it, once per copy.
//! assert_eq!(tree.remove(&1), Ok(1));
//! assert_eq!(tree.remove(&1), Ok(1));
//! assert_eq!(tree.remove(&1), Err(TreeError::KeyNotFound));
//! ```

use std::cmp::Ordering;
use std::{fmt, mem};

use tracing::trace;

use crate::error::{TreeError, TreeResult};
use crate::node::{self, Link, Node};

/// An unbalanced Binary Search Tree of values. Equal values are kept and are
/// always placed to the right of the copies already stored.
///
/// The tree never restructures itself on insertion. Call
/// [`rebalance`](Tree::rebalance) to rebuild it with minimal height.
pub struct Tree<T> {
    pub(crate) root: Link<T>,
    pub(crate) len: usize,
}

/// Copies the tree node for node, so the clone has the same shape even if
/// [`replace`](Tree::replace) has broken the ordering.
impl<T: Clone> Clone for Tree<T> {
    fn clone(&self) -> Self {
        Self {
            root: node::clone_link(self.root()),
            len: self.len,
        }
    }
}

/// Formats the values in ascending order, like a set.
impl<T: fmt::Debug> fmt::Debug for Tree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inorder()).finish()
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        // Unlink nodes one at a time so a degenerate tree doesn't drop recursively.
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of values stored in the tree, counting duplicates.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The root node, for walking the tree's shape directly.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Removes every value from the tree.
    pub fn clear(&mut self) {
        trace!(len = self.len, "clearing tree");
        drop(mem::take(self));
    }

    /// Adds `value` to the tree. Starting at the root, the walk goes right
    /// whenever the current value is less than or equal to `value` and left
    /// otherwise, and the value is attached at the first empty slot.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedbst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.add(2);
    /// tree.add(1);
    /// tree.add(2);
    ///
    /// let root = tree.root().unwrap();
    /// assert_eq!(root.value(), &2);
    /// assert_eq!(root.left().map(|n| n.value()), Some(&1));
    /// assert_eq!(root.right().map(|n| n.value()), Some(&2));
    /// ```
    pub fn add(&mut self, value: T)
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if node.value <= value {
                &mut node.right
            } else {
                &mut node.left
            };
        }
        *link = Some(Node::new_boxed(value));
        self.len += 1;
    }

    /// Potentially finds the stored value equal to `value`. If no node holds
    /// an equal value, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedbst::Tree;
    ///
    /// let tree: Tree<_> = ["b", "a", "c"].into_iter().collect();
    ///
    /// assert_eq!(tree.find(&"a"), Some(&"a"));
    /// assert_eq!(tree.find(&"z"), None);
    /// ```
    pub fn find(&self, value: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut node = self.root();
        while let Some(n) = node {
            node = match value.cmp(&n.value) {
                Ordering::Equal => return Some(&n.value),
                Ordering::Less => n.left(),
                Ordering::Greater => n.right(),
            };
        }
        None
    }

    /// Whether a value equal to `value` is stored in the tree.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.find(value).is_some()
    }

    /// Removes one stored value equal to `value` and returns it.
    ///
    /// A node with two children is not unlinked itself: it takes over the
    /// largest value of its left subtree and that value's node is unlinked
    /// instead.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::KeyNotFound`] if no stored value equals `value`.
    /// The tree is left untouched in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedbst::{Tree, TreeError};
    ///
    /// let mut tree: Tree<_> = [5, 3, 8, 1, 4].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&5), Ok(5));
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(4));
    /// assert_eq!(tree.remove(&42), Err(TreeError::KeyNotFound));
    /// ```
    pub fn remove(&mut self, value: &T) -> TreeResult<T>
    where
        T: Ord,
    {
        let link = self.link_mut(value);
        let Some(mut target) = link.take() else {
            return Err(TreeError::KeyNotFound);
        };

        let removed = match (target.left.take(), target.right.take()) {
            (Some(left), Some(right)) => {
                trace!("removing node with two children");
                let (donor, left) = node::split_max(left);
                target.left = left;
                target.right = Some(right);
                let removed = mem::replace(&mut target.value, donor);
                *link = Some(target);
                removed
            }
            (left, right) => {
                trace!(
                    leaf = left.is_none() && right.is_none(),
                    "splicing out node with at most one child"
                );
                *link = left.or(right);
                target.value
            }
        };

        self.len -= 1;
        debug_assert_eq!(self.root.is_none(), self.len == 0);
        Ok(removed)
    }

    /// Overwrites the stored value equal to `value` with `new_value` and
    /// returns the old one, or `None` if no stored value equals `value`.
    ///
    /// The node is not moved. If `new_value` doesn't sort the same way as the
    /// value it replaces, the tree's ordering is broken and later lookups may
    /// miss values.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedbst::Tree;
    ///
    /// let mut tree: Tree<_> = [(2, "b"), (1, "a")].into_iter().collect();
    ///
    /// assert_eq!(tree.replace(&(1, "a"), (1, "z")), Some((1, "a")));
    /// assert_eq!(tree.find(&(1, "z")), Some(&(1, "z")));
    /// assert_eq!(tree.replace(&(3, "c"), (3, "d")), None);
    /// ```
    pub fn replace(&mut self, value: &T, new_value: T) -> Option<T>
    where
        T: Ord,
    {
        self.link_mut(value)
            .as_deref_mut()
            .map(|node| mem::replace(&mut node.value, new_value))
    }

    /// Walks down to the slot owning the first node equal to `value`, or to the
    /// empty slot where the walk falls off the tree. The slot stands in for the
    /// (parent, side) pair a parent-linked tree would use.
    fn link_mut(&mut self, value: &T) -> &mut Link<T>
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        while let Some(ordering) = link.as_deref().map(|node| value.cmp(&node.value)) {
            if ordering == Ordering::Equal {
                break;
            }
            let Some(node) = link else { break };
            link = if ordering == Ordering::Less {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        link
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
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
