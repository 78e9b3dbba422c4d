//! Heap repair by rotation: bubble a fresh node up, sink a doomed node
//! down. Both lean entirely on the shared rotation primitives.

use super::types::PriorityNode;
use crate::error::ValidateError;
use crate::rotate::{rotate_left, rotate_right};
use crate::traverse::{self, assert_bst};
use crate::types::{CountNode, KeyNode};

/// Rotate `n` upward while its priority beats its parent's. Equal
/// priorities stay put, so tie order is attachment order. Returns the root.
pub fn bubble_up<N, U>(arena: &mut [N], n: u32, update: &mut U) -> u32
where
    N: PriorityNode,
    U: FnMut(&mut [N], u32),
{
    while let Some(p) = arena[n as usize].p() {
        if arena[p as usize].priority() >= arena[n as usize].priority() {
            break;
        }
        if arena[p as usize].l() == Some(n) {
            rotate_right(arena, p, update);
        } else {
            rotate_left(arena, p, update);
        }
    }
    traverse::root_of(arena, n)
}

/// Unlink `n`: rotate its larger-priority child over it until `n` is a
/// leaf, detach, and refresh counts up the spine. Returns the new root.
pub fn remove<N, U>(arena: &mut [N], n: u32, update: &mut U) -> Option<u32>
where
    N: PriorityNode,
    U: FnMut(&mut [N], u32),
{
    loop {
        match (arena[n as usize].l(), arena[n as usize].r()) {
            (None, None) => break,
            (Some(_), None) => {
                rotate_right(arena, n, update);
            }
            (None, Some(_)) => {
                rotate_left(arena, n, update);
            }
            (Some(l), Some(r)) => {
                if arena[l as usize].priority() >= arena[r as usize].priority() {
                    rotate_right(arena, n, update);
                } else {
                    rotate_left(arena, n, update);
                }
            }
        }
    }
    let p = arena[n as usize].p();
    if let Some(p) = p {
        if arena[p as usize].l() == Some(n) {
            arena[p as usize].set_l(None);
        } else {
            arena[p as usize].set_r(None);
        }
    }
    arena[n as usize].set_p(None);
    traverse::refresh_upward(arena, p, update)
}

/// Full recheck of the treap invariants: shared structural checks plus the
/// max-heap order on priorities.
pub fn assert_treap<K, N, C>(
    arena: &[N],
    root: Option<u32>,
    comparator: &C,
) -> Result<(), ValidateError>
where
    N: KeyNode<K> + CountNode + PriorityNode,
    C: Fn(&K, &K) -> i32,
{
    assert_bst(arena, root, comparator)?;
    check_heap(arena, root)
}

fn check_heap<N: PriorityNode>(arena: &[N], i: Option<u32>) -> Result<(), ValidateError> {
    let Some(i) = i else {
        return Ok(());
    };
    for child in [arena[i as usize].l(), arena[i as usize].r()] {
        if let Some(c) = child {
            if arena[c as usize].priority() > arena[i as usize].priority() {
                return Err(ValidateError::HeapOrderViolation { node: i, child: c });
            }
            check_heap(arena, Some(c))?;
        }
    }
    Ok(())
}
