//! Overlap queries and the augmented update callback.
//!
//! The structural work (insert retrace, erase, rotations) is the AVL
//! machinery; the only interval-specific pieces are the subtree-max
//! maintenance and the searches that prune on it.

use super::types::{Interval, IntervalNode};
use crate::avl::util::{assert_avl, height_of};
use crate::error::ValidateError;
use crate::types::{subtree_count, Node};

/// Refresh height, subtree count, and subtree max of `i` from its children.
pub fn update_interval<T: Copy + PartialOrd>(arena: &mut [IntervalNode<T>], i: u32) {
    let l = arena[i as usize].l();
    let r = arena[i as usize].r();
    let height = 1 + height_of(arena, l).max(height_of(arena, r));
    let count = 1 + subtree_count(arena, l) + subtree_count(arena, r);
    let mut max = arena[i as usize].k.hi();
    for child in [l, r] {
        if let Some(c) = child {
            let m = arena[c as usize].max;
            if m > max {
                max = m;
            }
        }
    }
    let node = &mut arena[i as usize];
    node.height = height;
    node.count = count;
    node.max = max;
}

/// Some stored interval overlapping `q`, or `None`. Descends left whenever
/// the left subtree's max endpoint reaches `q`, which is the standard
/// single-path overlap search.
pub fn find_overlap<T: Copy + PartialOrd>(
    arena: &[IntervalNode<T>],
    root: Option<u32>,
    q: &Interval<T>,
) -> Option<u32> {
    let mut cur = root?;
    loop {
        let node = &arena[cur as usize];
        if node.k.overlaps(q) {
            return Some(cur);
        }
        let go_left = node
            .l()
            .map_or(false, |l| arena[l as usize].max >= q.lo());
        cur = if go_left { node.l() } else { node.r() }?;
    }
}

/// Collect every stored interval overlapping `q`, in key order. Subtrees
/// whose max endpoint falls short of `q.lo` are skipped whole; right
/// subtrees are skipped once the node's own `lo` passes `q.hi`.
pub fn all_overlaps<T: Copy + PartialOrd>(
    arena: &[IntervalNode<T>],
    root: Option<u32>,
    q: &Interval<T>,
    out: &mut Vec<Interval<T>>,
) {
    let Some(i) = root else {
        return;
    };
    let node = &arena[i as usize];
    if node.max < q.lo() {
        return;
    }
    all_overlaps(arena, node.l(), q, out);
    if node.k.overlaps(q) {
        out.push(node.k);
    }
    if node.k.lo() <= q.hi() {
        all_overlaps(arena, node.r(), q, out);
    }
}

/// Full recheck: the AVL invariants plus stored subtree-max endpoints.
pub fn assert_interval<T, C>(
    arena: &[IntervalNode<T>],
    root: Option<u32>,
    comparator: &C,
) -> Result<(), ValidateError>
where
    T: Copy + PartialOrd,
    C: Fn(&Interval<T>, &Interval<T>) -> i32,
{
    assert_avl(arena, root, comparator)?;
    check_max(arena, root).map(|_| ())
}

fn check_max<T: Copy + PartialOrd>(
    arena: &[IntervalNode<T>],
    i: Option<u32>,
) -> Result<Option<T>, ValidateError> {
    let Some(i) = i else {
        return Ok(None);
    };
    let node = &arena[i as usize];
    let mut actual = node.k.hi();
    for child in [check_max(arena, node.l())?, check_max(arena, node.r())?] {
        if let Some(m) = child {
            if m > actual {
                actual = m;
            }
        }
    }
    if node.max != actual {
        return Err(ValidateError::SubtreeMaxMismatch(i));
    }
    Ok(Some(actual))
}
