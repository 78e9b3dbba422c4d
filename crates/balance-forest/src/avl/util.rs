//! Height-balanced insert/erase repair, generic over any `HeightNode`.
//!
//! The routines take the update callback as a parameter rather than calling
//! `update_avl` directly so augmented trees can refresh extra metadata
//! (the interval trees' subtree max) inside the same walks and rotations.

use super::types::HeightNode;
use crate::error::ValidateError;
use crate::rotate::{rotate_left, rotate_right};
use crate::traverse::{self, assert_bst};
use crate::types::{subtree_count, CountNode, KeyNode};

#[inline]
pub fn height_of<N: HeightNode>(arena: &[N], i: Option<u32>) -> i32 {
    i.map_or(0, |i| arena[i as usize].height())
}

/// Balance factor: right height minus left height. In [-1, 1] when balanced.
#[inline]
pub fn balance_of<N: HeightNode>(arena: &[N], i: u32) -> i32 {
    height_of(arena, arena[i as usize].r()) - height_of(arena, arena[i as usize].l())
}

/// Refresh height and subtree count of `i` from its children.
pub fn update_avl<N: HeightNode + CountNode>(arena: &mut [N], i: u32) {
    let l = arena[i as usize].l();
    let r = arena[i as usize].r();
    let height = 1 + height_of(arena, l).max(height_of(arena, r));
    let count = 1 + subtree_count(arena, l) + subtree_count(arena, r);
    arena[i as usize].set_height(height);
    arena[i as usize].set_count(count);
}

/// Walk from `start` to the root, refreshing metadata and restoring the
/// height invariant with single or double rotations. Returns the root.
pub fn retrace<N, U>(arena: &mut [N], start: u32, update: &mut U) -> u32
where
    N: HeightNode,
    U: FnMut(&mut [N], u32),
{
    let mut cur = start;
    loop {
        update(arena, cur);
        let bf = balance_of(arena, cur);
        let top = if bf > 1 {
            let r = arena[cur as usize]
                .r()
                .expect("right-heavy node has a right child");
            if balance_of(arena, r) < 0 {
                rotate_right(arena, r, update);
            }
            rotate_left(arena, cur, update)
        } else if bf < -1 {
            let l = arena[cur as usize]
                .l()
                .expect("left-heavy node has a left child");
            if balance_of(arena, l) > 0 {
                rotate_left(arena, l, update);
            }
            rotate_right(arena, cur, update)
        } else {
            cur
        };
        match arena[top as usize].p() {
            Some(p) => cur = p,
            None => return top,
        }
    }
}

/// Unlink `n` from its tree and restore balance. Returns the new root.
///
/// Keys never move between slots: a node with two children structurally
/// swaps places with its in-order successor, after which it has at most one
/// child and detaches the usual way. On return `n` is fully unlinked.
pub fn remove<N, U>(arena: &mut [N], n: u32, update: &mut U) -> Option<u32>
where
    N: HeightNode,
    U: FnMut(&mut [N], u32),
{
    if arena[n as usize].l().is_some() && arena[n as usize].r().is_some() {
        let s = traverse::first(arena, arena[n as usize].r())
            .expect("node with a right child has a successor");
        traverse::transplant_successor(arena, n, s);
    }

    let child = arena[n as usize].l().or(arena[n as usize].r());
    let p = arena[n as usize].p();
    if let Some(c) = child {
        arena[c as usize].set_p(p);
    }
    if let Some(p) = p {
        if arena[p as usize].l() == Some(n) {
            arena[p as usize].set_l(child);
        } else {
            arena[p as usize].set_r(child);
        }
    }
    arena[n as usize].set_p(None);
    arena[n as usize].set_l(None);
    arena[n as usize].set_r(None);

    match p {
        Some(p) => Some(retrace(arena, p, update)),
        None => child.map(|c| retrace(arena, c, update)),
    }
}

/// Full recheck of the AVL invariants: shared structural checks plus stored
/// heights and the balance-factor bound.
pub fn assert_avl<K, N, C>(
    arena: &[N],
    root: Option<u32>,
    comparator: &C,
) -> Result<(), ValidateError>
where
    N: KeyNode<K> + CountNode + HeightNode,
    C: Fn(&K, &K) -> i32,
{
    assert_bst(arena, root, comparator)?;
    check_heights(arena, root).map(|_| ())
}

fn check_heights<N: HeightNode>(arena: &[N], i: Option<u32>) -> Result<i32, ValidateError> {
    let Some(i) = i else {
        return Ok(0);
    };
    let lh = check_heights(arena, arena[i as usize].l())?;
    let rh = check_heights(arena, arena[i as usize].r())?;
    let actual = 1 + lh.max(rh);
    let stored = arena[i as usize].height();
    if stored != actual {
        return Err(ValidateError::HeightMismatch {
            node: i,
            stored,
            actual,
        });
    }
    let balance = rh - lh;
    if balance.abs() > 1 {
        return Err(ValidateError::Imbalance { node: i, balance });
    }
    Ok(actual)
}
