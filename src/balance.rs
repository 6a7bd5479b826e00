//! Shape diagnostics.

use crate::tree::Tree;

impl<T> Tree<T> {
    /// The number of edges on the longest path from the root to a leaf. A tree
    /// with just a root has height `0` and an empty tree has height `-1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedbst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), -1);
    ///
    /// tree.add(2);
    /// assert_eq!(tree.height(), 0);
    ///
    /// tree.add(1);
    /// tree.add(3);
    /// assert_eq!(tree.height(), 1);
    /// ```
    pub fn height(&self) -> isize {
        let mut height = -1;
        let mut stack: Vec<_> = self.root().map(|root| (root, 0)).into_iter().collect();

        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left().map(|n| (n, depth + 1)));
            stack.extend(node.right().map(|n| (n, depth + 1)));
        }

        height
    }

    /// Whether the tree is no taller than a loose multiple of the smallest
    /// possible height for its size: `height < 2 * log2(len + 1) - 1`.
    ///
    /// This is a health check for trees grown far taller than they need to be,
    /// not a per-node balance invariant. An empty tree is never balanced by
    /// this measure.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedbst::Tree;
    ///
    /// let mut tree: Tree<_> = (0..15).collect();
    /// assert!(!tree.is_balanced());
    ///
    /// tree.rebalance();
    /// assert!(tree.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        let bound = 2.0 * ((self.len + 1) as f64).log2() - 1.0;
        (self.height() as f64) < bound
    }
}
