//! Lazy traversals over a [`Tree`]. All of them keep their own stack (or
//! queue) so a tall, unbalanced tree can't overflow the call stack.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::node::{Link, Node};
use crate::tree::Tree;

impl<T> Tree<T> {
    /// Iterates over the tree in pre-order: each value comes before the values
    /// in its left subtree, which come before those in its right subtree. This
    /// is the tree's default iteration order.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedbst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4].into_iter().collect();
    /// let values: Vec<_> = tree.iter().copied().collect();
    ///
    /// assert_eq!(values, [5, 3, 1, 4, 8]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            stack: self.root().into_iter().collect(),
            remaining: self.len,
        }
    }

    /// Iterates over the tree in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use linkedbst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4].into_iter().collect();
    /// let values: Vec<_> = tree.inorder().copied().collect();
    ///
    /// assert_eq!(values, [1, 3, 4, 5, 8]);
    /// ```
    pub fn inorder(&self) -> Inorder<'_, T> {
        let mut inorder = Inorder {
            stack: Vec::new(),
            remaining: self.len,
        };
        inorder.push_left_spine(self.root());
        inorder
    }

    /// Iterates over the tree in post-order: both subtrees, left first, before
    /// the value at their root.
    pub fn postorder(&self) -> Postorder<'_, T> {
        Postorder {
            stack: self.root().map(|root| (root, false)).into_iter().collect(),
            remaining: self.len,
        }
    }

    /// Iterates over the tree one level at a time, left to right within a
    /// level, starting at the root.
    pub fn levelorder(&self) -> Levelorder<'_, T> {
        Levelorder {
            queue: self.root().into_iter().collect(),
            remaining: self.len,
        }
    }
}

/// Pre-order iterator returned by [`Tree::iter`].
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so the left subtree is visited first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        self.remaining -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator returned by [`Tree::inorder`].
#[derive(Clone, Debug)]
pub struct Inorder<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Inorder<'a, T> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for Inorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Inorder<'_, T> {}
impl<T> FusedIterator for Inorder<'_, T> {}

/// Post-order iterator returned by [`Tree::postorder`].
#[derive(Clone, Debug)]
pub struct Postorder<'a, T> {
    /// Each node is paired with whether its children have been pushed yet.
    stack: Vec<(&'a Node<T>, bool)>,
    remaining: usize,
}

impl<'a, T> Iterator for Postorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded || node.is_leaf() {
                self.remaining -= 1;
                return Some(node.value());
            }
            self.stack.push((node, true));
            self.stack.extend(node.right().map(|n| (n, false)));
            self.stack.extend(node.left().map(|n| (n, false)));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Postorder<'_, T> {}
impl<T> FusedIterator for Postorder<'_, T> {}

/// Level-order iterator returned by [`Tree::levelorder`].
#[derive(Clone, Debug)]
pub struct Levelorder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Levelorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        self.remaining -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Levelorder<'_, T> {}
impl<T> FusedIterator for Levelorder<'_, T> {}

/// Consuming iterator over a tree's values in ascending order. Nodes are
/// freed as they're passed.
#[derive(Debug)]
pub struct IntoIter<T> {
    stack: Vec<Box<Node<T>>>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    fn push_left_spine(&mut self, mut link: Link<T>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.stack.pop()?;
        self.push_left_spine(node.right.take());
        self.remaining -= 1;
        Some(node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // Same as `Tree`'s drop: don't recurse down whatever's left.
        while let Some(mut node) = self.stack.pop() {
            self.stack.extend(node.left.take());
            self.stack.extend(node.right.take());
        }
    }
}

impl<T> IntoIterator for Tree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Consumes the tree, yielding its values in ascending order.
    fn into_iter(mut self) -> Self::IntoIter {
        let mut into_iter = IntoIter {
            stack: Vec::new(),
            remaining: self.len,
        };
        into_iter.push_left_spine(self.root.take());
        self.len = 0;
        into_iter
    }
}
