//! The storage unit of a [`Tree`](crate::Tree).

use std::fmt;

/// An owning slot for a child. A `Link` is either empty or the sole owner of
/// the subtree below it.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A `Node` stores a single value and owns up to two children. Every value in
/// the left subtree sorts before `value` and every value in the right subtree
/// sorts at or after it. [`Tree::add`](crate::Tree::add) always sends equal
/// values right, but removing or rebalancing duplicates can leave a copy equal
/// to `value` in the left subtree. Lookups only rely on the non-strict order.
///
/// Nodes carry no pointer to their parent. Anything that needs to know where a
/// node hangs from (deletion, for instance) tracks that while walking down.
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self::with_children(value, None, None))
    }

    pub(crate) fn with_children(value: T, left: Link<T>, right: Link<T>) -> Self {
        Self { value, left, right }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of this node's left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of this node's right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Finds the node holding the smallest value in the subtree rooted at `root` by
/// following left children until there are none. An empty subtree has no
/// minimum.
///
/// # Examples
///
/// ```
/// use linkedbst::{find_min, Tree};
///
/// let tree: Tree<_> = [5, 3, 8, 1].into_iter().collect();
/// let eight = tree.root().and_then(|root| root.right());
///
/// assert_eq!(find_min(tree.root()).map(|n| *n.value()), Some(1));
/// assert_eq!(find_min(eight).map(|n| *n.value()), Some(8));
/// assert!(find_min::<i32>(None).is_none());
/// ```
pub fn find_min<T>(root: Option<&Node<T>>) -> Option<&Node<T>> {
    let mut node = root?;
    while let Some(left) = node.left() {
        node = left;
    }
    Some(node)
}

/// Finds the node holding the largest value in the subtree rooted at `root`.
/// See [`find_min`].
pub fn find_max<T>(root: Option<&Node<T>>) -> Option<&Node<T>> {
    let mut node = root?;
    while let Some(right) = node.right() {
        node = right;
    }
    Some(node)
}

impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        Self::with_children(
            self.value.clone(),
            clone_link(self.left()),
            clone_link(self.right()),
        )
    }
}

/// Only this node's value and its children's values are shown, so formatting
/// a deep subtree does not recurse.
impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left().map(Node::value))
            .field("right", &self.right().map(Node::value))
            .finish()
    }
}

/// Copies the subtree rooted at `root` with the same shape. Nodes are built
/// in post-order so every child is finished before its parent picks it up.
pub(crate) fn clone_link<T: Clone>(root: Option<&Node<T>>) -> Link<T> {
    let mut pending: Vec<_> = root.map(|node| (node, false)).into_iter().collect();
    let mut built: Vec<Box<Node<T>>> = Vec::new();

    while let Some((node, expanded)) = pending.pop() {
        if !expanded {
            pending.push((node, true));
            pending.extend(node.right().map(|right| (right, false)));
            pending.extend(node.left().map(|left| (left, false)));
            continue;
        }

        // The left subtree finished first, so the right one is on top.
        let right = if node.right.is_some() { built.pop() } else { None };
        let left = if node.left.is_some() { built.pop() } else { None };
        built.push(Box::new(Node::with_children(node.value.clone(), left, right)));
    }

    debug_assert!(built.len() <= 1);
    built.pop()
}

/// Splits the largest value off the subtree rooted at `root`. Returns that
/// value and what is left of the subtree: the largest node's left child takes
/// its place.
pub(crate) fn split_max<T>(mut root: Box<Node<T>>) -> (T, Link<T>) {
    let Some(mut max) = root.right.take() else {
        let Node { value, left, .. } = *root;
        return (value, left);
    };

    // `max` is always detached; `link` is the empty slot it came from.
    let mut link = &mut root.right;
    while let Some(next) = max.right.take() {
        link = &mut link.insert(max).right;
        max = next;
    }

    let Node { value, left, .. } = *max;
    *link = left;
    (value, Some(root))
}
