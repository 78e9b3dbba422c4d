//! Shape-agnostic traversal, search, and structural validation.
//!
//! Everything here is iterative; parent links make successor and
//! predecessor walks O(1) amortized without a stack.

use crate::error::ValidateError;
use crate::types::{CountNode, KeyNode, Node};

/// Leftmost node of the subtree rooted at `i`.
pub fn first<N: Node>(arena: &[N], i: Option<u32>) -> Option<u32> {
    let mut cur = i?;
    while let Some(l) = arena[cur as usize].l() {
        cur = l;
    }
    Some(cur)
}

/// Rightmost node of the subtree rooted at `i`.
pub fn last<N: Node>(arena: &[N], i: Option<u32>) -> Option<u32> {
    let mut cur = i?;
    while let Some(r) = arena[cur as usize].r() {
        cur = r;
    }
    Some(cur)
}

/// In-order successor of `i`, or `None` at the maximum.
pub fn next<N: Node>(arena: &[N], i: u32) -> Option<u32> {
    if let Some(r) = arena[i as usize].r() {
        return first(arena, Some(r));
    }
    let mut cur = i;
    loop {
        let p = arena[cur as usize].p()?;
        if arena[p as usize].l() == Some(cur) {
            return Some(p);
        }
        cur = p;
    }
}

/// In-order predecessor of `i`, or `None` at the minimum.
pub fn prev<N: Node>(arena: &[N], i: u32) -> Option<u32> {
    if let Some(l) = arena[i as usize].l() {
        return last(arena, Some(l));
    }
    let mut cur = i;
    loop {
        let p = arena[cur as usize].p()?;
        if arena[p as usize].r() == Some(cur) {
            return Some(p);
        }
        cur = p;
    }
}

/// Exact-match search from `root`.
pub fn find<K, N, C>(arena: &[N], root: Option<u32>, key: &K, comparator: &C) -> Option<u32>
where
    N: KeyNode<K>,
    C: Fn(&K, &K) -> i32,
{
    let mut cur = root?;
    loop {
        let cmp = comparator(key, arena[cur as usize].key());
        if cmp == 0 {
            return Some(cur);
        }
        let child = if cmp < 0 {
            arena[cur as usize].l()
        } else {
            arena[cur as usize].r()
        };
        cur = child?;
    }
}

/// Result of descending toward a key: either the key's node or the leaf
/// position where it would be attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locate {
    Empty,
    Found(u32),
    Vacant { parent: u32, left: bool },
}

/// Descend toward `key`, stopping at its node or its attachment point.
pub fn locate<K, N, C>(arena: &[N], root: Option<u32>, key: &K, comparator: &C) -> Locate
where
    N: KeyNode<K>,
    C: Fn(&K, &K) -> i32,
{
    let Some(mut cur) = root else {
        return Locate::Empty;
    };
    loop {
        let cmp = comparator(key, arena[cur as usize].key());
        if cmp == 0 {
            return Locate::Found(cur);
        }
        let left = cmp < 0;
        let child = if left {
            arena[cur as usize].l()
        } else {
            arena[cur as usize].r()
        };
        match child {
            Some(c) => cur = c,
            None => return Locate::Vacant { parent: cur, left },
        }
    }
}

/// Walk parent links from `i` to the root of its tree.
pub fn root_of<N: Node>(arena: &[N], i: u32) -> u32 {
    let mut cur = i;
    while let Some(p) = arena[cur as usize].p() {
        cur = p;
    }
    cur
}

/// Re-run `update` on `start` and every ancestor above it. Returns the root
/// reached, or `None` when `start` is `None`.
pub fn refresh_upward<N, U>(arena: &mut [N], start: Option<u32>, update: &mut U) -> Option<u32>
where
    N: Node,
    U: FnMut(&mut [N], u32),
{
    let mut cur = start?;
    loop {
        update(arena, cur);
        match arena[cur as usize].p() {
            Some(p) => cur = p,
            None => return Some(cur),
        }
    }
}

/// Exchange the structural positions of `n` and its in-order successor `s`,
/// leaving `n` where `s` was, holding at most a right child. Used by the
/// erase paths so keys never move between arena slots. Metadata on the
/// touched nodes goes stale; the caller's repair pass refreshes it.
pub(crate) fn transplant_successor<N: Node>(arena: &mut [N], n: u32, s: u32) {
    let np = arena[n as usize].p();
    let nl = arena[n as usize].l().expect("transplant needs two children");
    let nr = arena[n as usize].r().expect("transplant needs two children");
    let sr = arena[s as usize].r();

    if let Some(np) = np {
        if arena[np as usize].l() == Some(n) {
            arena[np as usize].set_l(Some(s));
        } else {
            arena[np as usize].set_r(Some(s));
        }
    }
    arena[s as usize].set_p(np);
    arena[s as usize].set_l(Some(nl));
    arena[nl as usize].set_p(Some(s));

    if nr == s {
        arena[s as usize].set_r(Some(n));
        arena[n as usize].set_p(Some(s));
    } else {
        // The successor is the leftmost node of the right subtree, so it
        // hangs off its parent's left link.
        let sp = arena[s as usize].p().expect("deep successor has a parent");
        arena[s as usize].set_r(Some(nr));
        arena[nr as usize].set_p(Some(s));
        arena[sp as usize].set_l(Some(n));
        arena[n as usize].set_p(Some(sp));
    }
    arena[n as usize].set_l(None);
    arena[n as usize].set_r(sr);
    if let Some(sr) = sr {
        arena[sr as usize].set_p(Some(n));
    }
}

/// Check the invariants every strategy shares: the root has no parent,
/// child-parent links agree, stored subtree counts are exact, and an
/// in-order walk yields strictly ascending keys.
pub fn assert_bst<K, N, C>(
    arena: &[N],
    root: Option<u32>,
    comparator: &C,
) -> Result<(), ValidateError>
where
    N: KeyNode<K> + CountNode,
    C: Fn(&K, &K) -> i32,
{
    let Some(root) = root else {
        return Ok(());
    };
    if arena[root as usize].p().is_some() {
        return Err(ValidateError::RootHasParent(root));
    }
    check_links_and_counts(arena, root)?;

    let mut cur = first(arena, Some(root));
    while let Some(i) = cur {
        let succ = next(arena, i);
        if let Some(n) = succ {
            let cmp = comparator(arena[i as usize].key(), arena[n as usize].key());
            if cmp == 0 {
                return Err(ValidateError::DuplicateKey(n));
            }
            if cmp > 0 {
                return Err(ValidateError::OrderViolation(n));
            }
        }
        cur = succ;
    }
    Ok(())
}

fn check_links_and_counts<N: CountNode>(arena: &[N], i: u32) -> Result<usize, ValidateError> {
    let mut actual = 1usize;
    for child in [arena[i as usize].l(), arena[i as usize].r()] {
        if let Some(c) = child {
            if arena[c as usize].p() != Some(i) {
                return Err(ValidateError::BrokenParentLink(i));
            }
            actual += check_links_and_counts(arena, c)?;
        }
    }
    let stored = arena[i as usize].count();
    if stored != actual {
        return Err(ValidateError::CountMismatch {
            node: i,
            stored,
            actual,
        });
    }
    Ok(actual)
}

/// Render the subtree under `i` as an indented sideways sketch, right child
/// on top. Debug aid only.
pub fn print_tree<N, F>(arena: &[N], i: Option<u32>, out: &mut String, describe: &F, depth: usize)
where
    N: Node,
    F: Fn(&N) -> String,
{
    let Some(i) = i else {
        return;
    };
    let node = &arena[i as usize];
    print_tree(arena, node.r(), out, describe, depth + 1);
    for _ in 0..depth {
        out.push_str("    ");
    }
    out.push_str(&describe(node));
    out.push('\n');
    print_tree(arena, node.l(), out, describe, depth + 1);
}
