use linkedbst::{Tree, TreeError};

use std::collections::HashSet;

use crate::init_logging;

/// Builds a tree by adding `xs` one at a time, in order.
fn build(xs: &[i8]) -> Tree<i8> {
    init_logging();
    xs.iter().copied().collect()
}

/// Counts reachable nodes by walking the shape, independently of `len`.
fn count_nodes(tree: &Tree<i8>) -> usize {
    let mut stack: Vec<_> = tree.root().into_iter().collect();
    let mut count = 0;
    while let Some(node) = stack.pop() {
        count += 1;
        stack.extend(node.left());
        stack.extend(node.right());
    }
    count
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    xs.iter().all(|x| tree.find(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = build(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn inorder_is_sorted(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let mut sorted = xs;
    sorted.sort_unstable();

    tree.inorder().eq(sorted.iter()) && tree.len() == count_nodes(&tree)
}

#[quickcheck]
fn iter_visits_every_value_once(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    let mut visited: Vec<_> = tree.iter().copied().collect();
    visited.sort_unstable();
    let mut sorted = xs;
    sorted.sort_unstable();

    visited == sorted
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    let mut still_present = xs;

    for delete in &deletes {
        let expected = match still_present.iter().position(|x| x == delete) {
            Some(pos) => {
                still_present.swap_remove(pos);
                Ok(*delete)
            }
            None => Err(TreeError::KeyNotFound),
        };
        if tree.remove(delete) != expected {
            return false;
        }
    }

    still_present.sort_unstable();
    tree.len() == still_present.len()
        && count_nodes(&tree) == still_present.len()
        && tree.inorder().eq(still_present.iter())
}

#[quickcheck]
fn missing_remove_changes_nothing(xs: Vec<i8>, missing: i8) -> bool {
    let mut tree = build(&xs.iter().copied().filter(|x| *x != missing).collect::<Vec<_>>());
    let before: Vec<_> = tree.iter().copied().collect();

    tree.remove(&missing) == Err(TreeError::KeyNotFound)
        && tree.iter().copied().eq(before.iter().copied())
}

#[quickcheck]
fn rebalance_keeps_values(xs: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    let before: Vec<_> = tree.inorder().copied().collect();
    let len = tree.len();

    tree.rebalance();

    tree.len() == len && count_nodes(&tree) == len && tree.inorder().copied().eq(before)
}

#[quickcheck]
fn rebalance_no_taller_than_sorted_insertion(xs: Vec<i8>) -> bool {
    let mut sorted = xs.clone();
    sorted.sort_unstable();
    let naive = build(&sorted);

    let mut tree = build(&xs);
    tree.rebalance();

    tree.height() <= naive.height()
}

#[quickcheck]
fn neighbours_match_sorted_values(xs: Vec<i8>, probe: i8) -> bool {
    let tree = build(&xs);
    let mut sorted = xs;
    sorted.sort_unstable();

    let successor = sorted.iter().find(|x| **x > probe);
    let predecessor = sorted.iter().rev().find(|x| **x < probe);

    tree.successor(&probe) == successor && tree.predecessor(&probe) == predecessor
}

#[quickcheck]
fn range_find_matches_filter(xs: Vec<i8>, low: i8, high: i8) -> bool {
    let tree = build(&xs);
    let mut sorted = xs;
    sorted.sort_unstable();

    let expected: Vec<_> = sorted.iter().filter(|x| low <= **x && **x <= high).collect();
    tree.range_find(&low, &high) == expected
}

#[quickcheck]
fn replace_with_same_value(xs: Vec<i8>) -> bool {
    let mut tree = build(&xs);

    xs.iter().all(|x| tree.replace(x, *x) == Some(*x)) && tree.len() == xs.len()
}
