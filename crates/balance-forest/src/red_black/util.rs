//! Red-black insert and erase repair with `None` read as a black leaf.
//!
//! Subtree counts are refreshed along the splice path before any repair
//! rotations run; the rotations then keep them exact through their update
//! callback, and recolorings never touch them.

use super::types::ColorNode;
use crate::error::ValidateError;
use crate::rotate::{rotate_left, rotate_right};
use crate::traverse::{self, assert_bst};
use crate::types::{CountNode, KeyNode};

#[inline]
pub fn is_black<N: ColorNode>(arena: &[N], i: Option<u32>) -> bool {
    i.map_or(true, |i| arena[i as usize].is_black())
}

/// Restore the red-black invariants after attaching the red node `n`.
/// Returns the root, repainted black.
pub fn repair_insert<N, U>(arena: &mut [N], mut n: u32, update: &mut U) -> u32
where
    N: ColorNode,
    U: FnMut(&mut [N], u32),
{
    loop {
        let Some(p) = arena[n as usize].p() else {
            break;
        };
        if arena[p as usize].is_black() {
            break;
        }
        // A red parent is never the root, so the grandparent exists.
        let g = arena[p as usize].p().expect("red node below the root");
        let parent_is_left = arena[g as usize].l() == Some(p);
        let uncle = if parent_is_left {
            arena[g as usize].r()
        } else {
            arena[g as usize].l()
        };
        match uncle.filter(|&u| !arena[u as usize].is_black()) {
            Some(u) => {
                // Red uncle: push the blackness down from the grandparent
                // and continue from there.
                arena[p as usize].set_black(true);
                arena[u as usize].set_black(true);
                arena[g as usize].set_black(false);
                n = g;
            }
            None => {
                let mut n2 = n;
                let mut p2 = p;
                if parent_is_left {
                    if arena[p2 as usize].r() == Some(n2) {
                        n2 = p2;
                        p2 = rotate_left(arena, n2, update);
                    }
                    arena[p2 as usize].set_black(true);
                    arena[g as usize].set_black(false);
                    rotate_right(arena, g, update);
                } else {
                    if arena[p2 as usize].l() == Some(n2) {
                        n2 = p2;
                        p2 = rotate_right(arena, n2, update);
                    }
                    arena[p2 as usize].set_black(true);
                    arena[g as usize].set_black(false);
                    rotate_left(arena, g, update);
                }
                n = n2;
            }
        }
    }
    let root = traverse::root_of(arena, n);
    arena[root as usize].set_black(true);
    root
}

/// Unlink `z`, refresh counts on the splice path, and repair colors.
/// Returns the new root. On return `z` is fully unlinked.
pub fn remove<N, U>(arena: &mut [N], z: u32, update: &mut U) -> Option<u32>
where
    N: ColorNode,
    U: FnMut(&mut [N], u32),
{
    let y_was_black;
    if arena[z as usize].l().is_some() && arena[z as usize].r().is_some() {
        let s = traverse::first(arena, arena[z as usize].r())
            .expect("node with a right child has a successor");
        y_was_black = arena[s as usize].is_black();
        traverse::transplant_successor(arena, z, s);
        // The successor inherits z's position and color; the color that
        // actually leaves the tree is the successor's own.
        let zb = arena[z as usize].is_black();
        arena[s as usize].set_black(zb);
    } else {
        y_was_black = arena[z as usize].is_black();
    }

    let x = arena[z as usize].l().or(arena[z as usize].r());
    let xp = arena[z as usize].p();
    if let Some(x) = x {
        arena[x as usize].set_p(xp);
    }
    if let Some(p) = xp {
        if arena[p as usize].l() == Some(z) {
            arena[p as usize].set_l(x);
        } else {
            arena[p as usize].set_r(x);
        }
    }
    arena[z as usize].set_p(None);
    arena[z as usize].set_l(None);
    arena[z as usize].set_r(None);

    traverse::refresh_upward(arena, xp, update);

    let Some(anchor) = xp.or(x) else {
        return None;
    };

    if y_was_black {
        fixup(arena, x, xp, update);
    }

    let root = traverse::root_of(arena, anchor);
    arena[root as usize].set_black(true);
    Some(root)
}

/// Rebalance after removing a black node: `x` (possibly absent, read as
/// black) carries an extra unit of blackness, `xp` is its parent.
fn fixup<N, U>(arena: &mut [N], mut x: Option<u32>, mut xp: Option<u32>, update: &mut U)
where
    N: ColorNode,
    U: FnMut(&mut [N], u32),
{
    while let Some(p) = xp {
        if !is_black(arena, x) {
            break;
        }
        if arena[p as usize].l() == x {
            let mut w = arena[p as usize]
                .r()
                .expect("short side implies a sibling");
            if !arena[w as usize].is_black() {
                arena[w as usize].set_black(true);
                arena[p as usize].set_black(false);
                rotate_left(arena, p, update);
                w = arena[p as usize].r().expect("sibling after rotation");
            }
            if is_black(arena, arena[w as usize].l()) && is_black(arena, arena[w as usize].r()) {
                arena[w as usize].set_black(false);
                x = Some(p);
                xp = arena[p as usize].p();
            } else {
                if is_black(arena, arena[w as usize].r()) {
                    if let Some(wl) = arena[w as usize].l() {
                        arena[wl as usize].set_black(true);
                    }
                    arena[w as usize].set_black(false);
                    rotate_right(arena, w, update);
                    w = arena[p as usize].r().expect("sibling after rotation");
                }
                let pb = arena[p as usize].is_black();
                arena[w as usize].set_black(pb);
                arena[p as usize].set_black(true);
                if let Some(wr) = arena[w as usize].r() {
                    arena[wr as usize].set_black(true);
                }
                rotate_left(arena, p, update);
                return;
            }
        } else {
            let mut w = arena[p as usize]
                .l()
                .expect("short side implies a sibling");
            if !arena[w as usize].is_black() {
                arena[w as usize].set_black(true);
                arena[p as usize].set_black(false);
                rotate_right(arena, p, update);
                w = arena[p as usize].l().expect("sibling after rotation");
            }
            if is_black(arena, arena[w as usize].l()) && is_black(arena, arena[w as usize].r()) {
                arena[w as usize].set_black(false);
                x = Some(p);
                xp = arena[p as usize].p();
            } else {
                if is_black(arena, arena[w as usize].l()) {
                    if let Some(wr) = arena[w as usize].r() {
                        arena[wr as usize].set_black(true);
                    }
                    arena[w as usize].set_black(false);
                    rotate_left(arena, w, update);
                    w = arena[p as usize].l().expect("sibling after rotation");
                }
                let pb = arena[p as usize].is_black();
                arena[w as usize].set_black(pb);
                arena[p as usize].set_black(true);
                if let Some(wl) = arena[w as usize].l() {
                    arena[wl as usize].set_black(true);
                }
                rotate_right(arena, p, update);
                return;
            }
        }
    }
    if let Some(x) = x {
        arena[x as usize].set_black(true);
    }
}

/// Full recheck of the red-black invariants: shared structural checks plus
/// a black root, no red-red edge, and equal black heights on every path.
pub fn assert_red_black<K, N, C>(
    arena: &[N],
    root: Option<u32>,
    comparator: &C,
) -> Result<(), ValidateError>
where
    N: KeyNode<K> + CountNode + ColorNode,
    C: Fn(&K, &K) -> i32,
{
    assert_bst(arena, root, comparator)?;
    if let Some(root) = root {
        if !arena[root as usize].is_black() {
            return Err(ValidateError::RedRoot(root));
        }
    }
    check_colors(arena, root).map(|_| ())
}

fn check_colors<N: ColorNode>(arena: &[N], i: Option<u32>) -> Result<u32, ValidateError> {
    let Some(i) = i else {
        return Ok(1);
    };
    let node = &arena[i as usize];
    if !node.is_black() && (!is_black(arena, node.l()) || !is_black(arena, node.r())) {
        return Err(ValidateError::RedRedViolation(i));
    }
    let lb = check_colors(arena, node.l())?;
    let rb = check_colors(arena, node.r())?;
    if lb != rb {
        return Err(ValidateError::BlackHeightMismatch(i));
    }
    Ok(lb + arena[i as usize].is_black() as u32)
}
