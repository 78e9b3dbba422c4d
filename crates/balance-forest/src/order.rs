//! Order statistics over counted nodes.
//!
//! Both routines are count-guided root-to-leaf descents, O(height) with no
//! extra traversal. Rank is the number of stored keys strictly less than
//! the query key, so it is defined for absent keys too; `rank` and `select`
//! are inverse on present keys.

use crate::types::{subtree_count, CountNode, KeyNode};

/// Number of keys in the tree strictly less than `key`.
pub fn rank<K, N, C>(arena: &[N], root: Option<u32>, key: &K, comparator: &C) -> usize
where
    N: KeyNode<K> + CountNode,
    C: Fn(&K, &K) -> i32,
{
    let mut acc = 0usize;
    let mut cur = root;
    while let Some(i) = cur {
        let node = &arena[i as usize];
        let cmp = comparator(key, node.key());
        if cmp <= 0 {
            cur = node.l();
        } else {
            acc += 1 + subtree_count(arena, node.l());
            cur = node.r();
        }
    }
    acc
}

/// Node holding the `k`-th smallest key (0-indexed) in the subtree at
/// `root`. The caller bounds `k` against the subtree size.
///
/// Panics if stored counts are inconsistent with the subtree shape.
pub fn select<N: CountNode>(arena: &[N], root: u32, k: usize) -> u32 {
    let mut cur = root;
    let mut k = k;
    loop {
        let node = &arena[cur as usize];
        let left = subtree_count(arena, node.l());
        if k < left {
            cur = node.l().expect("subtree counts are inconsistent");
        } else if k == left {
            return cur;
        } else {
            k -= left + 1;
            cur = node.r().expect("subtree counts are inconsistent");
        }
    }
}
