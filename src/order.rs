//! Queries about where values sit in sorted order.

use crate::node::{find_max, find_min};
use crate::tree::Tree;

impl<T> Tree<T> {
    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        find_min(self.root()).map(|node| node.value())
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        find_max(self.root()).map(|node| node.value())
    }

    /// The smallest stored value strictly greater than `value`. `value` itself
    /// doesn't need to be in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedbst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// assert_eq!(tree.successor(&5), Some(&7));
    /// assert_eq!(tree.successor(&6), Some(&7));
    /// assert_eq!(tree.successor(&9), None);
    /// ```
    pub fn successor(&self, value: &T) -> Option<&T>
    where
        T: Ord,
    {
        // The last node the walk turned left at is the best candidate so far.
        let mut successor = None;
        let mut node = self.root();
        while let Some(n) = node {
            node = if *value < n.value {
                successor = Some(&n.value);
                n.left()
            } else {
                n.right()
            };
        }
        successor
    }

    /// The largest stored value strictly less than `value`. `value` itself
    /// doesn't need to be in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedbst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// assert_eq!(tree.predecessor(&5), Some(&4));
    /// assert_eq!(tree.predecessor(&6), Some(&5));
    /// assert_eq!(tree.predecessor(&1), None);
    /// ```
    pub fn predecessor(&self, value: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut predecessor = None;
        let mut node = self.root();
        while let Some(n) = node {
            node = if *value > n.value {
                predecessor = Some(&n.value);
                n.right()
            } else {
                n.left()
            };
        }
        predecessor
    }

    /// Every stored value in `low..=high`, in in-order sequence (ascending
    /// unless [`replace`](Tree::replace) broke the ordering). The whole tree is
    /// scanned, so values moved out of place are still reported.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedbst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// assert_eq!(tree.range_find(&4, &8), [&4, &5, &7, &8]);
    /// assert!(tree.range_find(&8, &4).is_empty());
    /// ```
    pub fn range_find(&self, low: &T, high: &T) -> Vec<&T>
    where
        T: Ord,
    {
        self.inorder()
            .filter(|value| low <= *value && *value <= high)
            .collect()
    }
}
