//! Rebuilding a tree with minimal height.

use std::mem;

use tracing::{debug, enabled, Level};

use crate::node::{Link, Node};
use crate::tree::Tree;

impl<T> Tree<T> {
    /// Rebuilds the tree so it has the smallest possible height for the
    /// number of values it holds, `ceil(log2(len + 1)) - 1`.
    ///
    /// The values are drained in ascending order and the middle one (index
    /// `len / 2`) becomes the root, with the values before and after it built
    /// the same way into its left and right subtrees. This is the only
    /// operation that restores balance.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedbst::Tree;
    ///
    /// let mut tree: Tree<_> = (1..=7).collect();
    /// assert_eq!(tree.height(), 6);
    ///
    /// tree.rebalance();
    /// assert_eq!(tree.height(), 2);
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(4));
    /// assert!(tree.inorder().copied().eq(1..=7));
    /// ```
    pub fn rebalance(&mut self) {
        let len = self.len;
        // Heights cost a full walk each, so only measure them when logged.
        let old_height = enabled!(Level::DEBUG).then(|| self.height());

        let mut values = mem::take(self).into_iter();
        self.root = build(&mut values, len);
        self.len = len;

        if let Some(old_height) = old_height {
            debug!(len, old_height, new_height = self.height(), "rebalanced tree");
        }
    }
}

/// Builds a minimal-height subtree from the next `len` values of an ascending
/// iterator. The left subtree takes `len / 2` values, so the root is the
/// value at index `len / 2`.
fn build<T>(values: &mut impl Iterator<Item = T>, len: usize) -> Link<T> {
    if len == 0 {
        return None;
    }

    let left_len = len / 2;
    let left = build(values, left_len);
    let value = values.next()?;
    let right = build(values, len - left_len - 1);

    Some(Box::new(Node::with_children(value, left, right)))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal height for `len` values: `ceil(log2(len + 1)) - 1`.
    fn minimal_height(len: usize) -> isize {
        (usize::BITS - len.leading_zeros()) as isize - 1
    }

    #[test]
    fn rebalance_degenerate_tree() {
        let mut tree: Tree<_> = (0..1000).collect();
        assert_eq!(tree.height(), 999);

        tree.rebalance();

        assert_eq!(tree.len(), 1000);
        assert_eq!(tree.height(), minimal_height(1000));
        assert!(tree.inorder().copied().eq(0..1000));
        assert!(tree.is_balanced());
    }

    #[test]
    fn rebalance_picks_middle_index() {
        let mut tree: Tree<_> = [1, 2, 3, 4].into_iter().collect();
        tree.rebalance();

        // Index 4 / 2 = 2 is the root; [1, 2] goes left and [4] goes right.
        let root = tree.root().unwrap();
        assert_eq!(root.value(), &3);
        let two = root.left().unwrap();
        assert_eq!(two.value(), &2);
        assert_eq!(two.left().map(Node::value), Some(&1));
        assert!(two.right().is_none());
        assert_eq!(root.right().map(Node::value), Some(&4));
    }

    #[test]
    fn rebalance_every_small_size() {
        for len in 0..=64 {
            let mut tree: Tree<_> = (0..len).rev().collect();
            tree.rebalance();

            assert_eq!(tree.len(), len);
            assert_eq!(tree.height(), minimal_height(len));
            assert!(tree.inorder().copied().eq(0..len));
        }
    }

    #[test]
    fn rebalance_keeps_duplicates() {
        let mut tree: Tree<_> = [3, 1, 3, 2, 3, 1].into_iter().collect();
        tree.rebalance();

        let values: Vec<_> = tree.inorder().copied().collect();
        assert_eq!(values, [1, 1, 2, 3, 3, 3]);
        assert_eq!(tree.len(), 6);
        assert_eq!(tree.find(&3), Some(&3));
        assert_eq!(tree.remove(&3), Ok(3));
        assert_eq!(tree.remove(&3), Ok(3));
        assert_eq!(tree.remove(&3), Ok(3));
        assert!(!tree.contains(&3));
    }

    #[test]
    fn rebalance_is_idempotent() {
        let mut tree: Tree<_> = [5, 9, 1, 7, 3, 8, 2].into_iter().collect();
        tree.rebalance();
        let once: Vec<_> = tree.iter().copied().collect();

        tree.rebalance();
        let twice: Vec<_> = tree.iter().copied().collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn rebalance_with_debug_logging() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_test_writer()
            .finish();

        let mut tree: Tree<_> = (0..100).collect();
        tracing::subscriber::with_default(subscriber, || tree.rebalance());

        assert_eq!(tree.height(), minimal_height(100));
        assert!(tree.inorder().copied().eq(0..100));
    }

    #[test]
    fn rebalance_empty_tree() {
        let mut tree: Tree<i32> = Tree::new();
        tree.rebalance();
        assert!(tree.is_empty());
        assert!(tree.root().is_none());
        assert_eq!(tree.height(), -1);
    }
}
