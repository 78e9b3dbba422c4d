//! The splay operation and the splay-based search and erase.
//!
//! The zig-zig/zig-zag case split is what gives the amortized bound; a
//! naive rotate-to-root loop would be linear on a degenerate chain. Each
//! rotation's update callback refreshes counts, and every former ancestor
//! of the splayed node takes part in exactly one step, so counts stay exact
//! even when the splay starts from a freshly attached node with stale
//! ancestors.

use crate::rotate::{rotate_left, rotate_right};
use crate::traverse;
use crate::types::{KeyNode, Node};

/// Move `n` to the root of its tree.
pub fn splay<N, U>(arena: &mut [N], n: u32, update: &mut U)
where
    N: Node,
    U: FnMut(&mut [N], u32),
{
    while let Some(p) = arena[n as usize].p() {
        let n_left = arena[p as usize].l() == Some(n);
        match arena[p as usize].p() {
            None => {
                // zig
                if n_left {
                    rotate_right(arena, p, update);
                } else {
                    rotate_left(arena, p, update);
                }
            }
            Some(g) => {
                let p_left = arena[g as usize].l() == Some(p);
                if p_left == n_left {
                    // zig-zig: grandparent first
                    if p_left {
                        rotate_right(arena, g, update);
                        rotate_right(arena, p, update);
                    } else {
                        rotate_left(arena, g, update);
                        rotate_left(arena, p, update);
                    }
                } else {
                    // zig-zag
                    if n_left {
                        rotate_right(arena, p, update);
                        rotate_left(arena, g, update);
                    } else {
                        rotate_left(arena, p, update);
                        rotate_right(arena, g, update);
                    }
                }
            }
        }
    }
}

/// Search for `key` and splay the node found, or the last node visited when
/// the key is absent. Returns `(new_root, found)`.
pub fn splay_find<K, N, C, U>(
    arena: &mut [N],
    root: Option<u32>,
    key: &K,
    comparator: &C,
    update: &mut U,
) -> (Option<u32>, Option<u32>)
where
    N: KeyNode<K>,
    C: Fn(&K, &K) -> i32,
    U: FnMut(&mut [N], u32),
{
    let Some(root) = root else {
        return (None, None);
    };
    let mut cur = root;
    let mut found = None;
    loop {
        let cmp = comparator(key, arena[cur as usize].key());
        if cmp == 0 {
            found = Some(cur);
            break;
        }
        let child = if cmp < 0 {
            arena[cur as usize].l()
        } else {
            arena[cur as usize].r()
        };
        match child {
            Some(c) => cur = c,
            None => break,
        }
    }
    splay(arena, cur, update);
    (Some(cur), found)
}

/// Unlink `n`: splay it to the root, detach, then join the two subtrees by
/// splaying the left subtree's maximum (which then has no right child) and
/// hanging the right subtree off it. Returns the new root.
pub fn remove<N, U>(arena: &mut [N], n: u32, update: &mut U) -> Option<u32>
where
    N: Node,
    U: FnMut(&mut [N], u32),
{
    splay(arena, n, update);
    let l = arena[n as usize].l();
    let r = arena[n as usize].r();
    arena[n as usize].set_l(None);
    arena[n as usize].set_r(None);
    if let Some(l) = l {
        arena[l as usize].set_p(None);
    }
    if let Some(r) = r {
        arena[r as usize].set_p(None);
    }
    match l {
        None => r,
        Some(l) => {
            let m = traverse::last(arena, Some(l)).expect("non-empty subtree has a maximum");
            splay(arena, m, update);
            arena[m as usize].set_r(r);
            if let Some(r) = r {
                arena[r as usize].set_p(Some(m));
            }
            update(arena, m);
            Some(m)
        }
    }
}
