//! Binary-search-tree sort.
//!
//! Every element is inserted into an unbalanced binary search tree, which is then walked
//! in order. The tree stores indices into the slice rather than the elements themselves,
//! and the walk order is applied back to the slice with positional swaps, so the slice is
//! only ever overwritten by index.
//!
//! Equal elements are inserted to the right of their match. Adversarial (e.g. sorted)
//! input produces a linear tree and O(n²) behavior; no rebalancing is done.

use crate::core::apply_permutation;
use log::trace;
use std::cmp::Ordering;

/// Sorts the slice with binary-search-tree sort.
///
/// # Examples
///
/// ```
/// use sortkit::tree_sort;
///
/// let mut data = [3, 1, 4, 1, 5, 9, 2, 6];
/// tree_sort(&mut data);
/// assert_eq!(data, [1, 1, 2, 3, 4, 5, 6, 9]);
/// ```
pub fn tree_sort<T: Ord>(v: &mut [T]) -> &mut [T] {
    tree_sort_by(v, T::cmp)
}

/// Sorts the slice with binary-search-tree sort using a comparator.
pub fn tree_sort_by<T, F>(v: &mut [T], mut compare: F) -> &mut [T]
where
    F: FnMut(&T, &T) -> Ordering,
{
    trace!("tree_sort: len={}", v.len());
    if v.len() < 2 {
        return v;
    }

    let mut tree = SearchTree::with_capacity(v.len());
    for index in 0..v.len() {
        tree.insert(v, index, &mut compare);
    }
    let order = tree.in_order();
    apply_permutation(v, order);
    v
}

/// Sorts the slice with binary-search-tree sort, ordering elements by a key.
pub fn tree_sort_by_key<T, K, F>(v: &mut [T], mut key: F) -> &mut [T]
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    tree_sort_by(v, |a, b| key(a).cmp(&key(b)))
}

#[derive(Debug)]
struct Node {
    index: usize,
    left: Option<usize>,
    right: Option<usize>,
}

/// Arena-backed search tree over slice indices. Node 0 is the root.
#[derive(Debug)]
struct SearchTree {
    nodes: Vec<Node>,
}

impl SearchTree {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    fn insert<T, F>(&mut self, v: &[T], index: usize, compare: &mut F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let id = self.nodes.len();
        self.nodes.push(Node {
            index,
            left: None,
            right: None,
        });
        if id == 0 {
            return;
        }

        let mut current = 0;
        loop {
            let node = &mut self.nodes[current];
            let slot = if compare(&v[index], &v[node.index]) == Ordering::Less {
                &mut node.left
            } else {
                &mut node.right
            };
            match *slot {
                Some(child) => current = child,
                None => {
                    *slot = Some(id);
                    return;
                }
            }
        }
    }

    /// Slice indices in sorted order. Iterative so a degenerate tree cannot blow the stack.
    fn in_order(&self) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = Vec::new();
        let mut current = if self.nodes.is_empty() { None } else { Some(0) };

        loop {
            while let Some(id) = current {
                stack.push(id);
                current = self.nodes[id].left;
            }
            let Some(id) = stack.pop() else {
                break;
            };
            order.push(self.nodes[id].index);
            current = self.nodes[id].right;
        }
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_order_walk() {
        let data = [50, 30, 70, 20, 40, 60, 80];
        let mut tree = SearchTree::with_capacity(data.len());
        for index in 0..data.len() {
            tree.insert(&data, index, &mut i32::cmp);
        }
        assert_eq!(tree.in_order(), vec![3, 1, 4, 0, 5, 2, 6]);
    }

    #[test]
    fn test_duplicates_go_right() {
        let data = [5, 5, 5];
        let mut tree = SearchTree::with_capacity(data.len());
        for index in 0..data.len() {
            tree.insert(&data, index, &mut i32::cmp);
        }
        assert_eq!(tree.nodes[0].right, Some(1));
        assert_eq!(tree.nodes[1].right, Some(2));
        assert_eq!(tree.in_order(), vec![0, 1, 2]);
    }

    #[test]
    fn test_degenerate_tree() {
        let mut data: Vec<u32> = (0..5_000).rev().collect();
        tree_sort(&mut data);
        assert!(data.windows(2).all(|w| w[0] <= w[1]));
    }
}
