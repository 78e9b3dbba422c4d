//! Node trait definitions shared by every tree strategy.
//!
//! Nodes live in a `Vec`-backed arena owned by their tree; every "pointer"
//! is an `Option<u32>` index into that arena. Tree-manipulation functions
//! take the arena as a slice plus indices, so one set of rotation and
//! traversal routines serves all node shapes.

/// Structural links: parent, left child, right child.
///
/// The parent link is non-owning; ownership flows root-to-leaf through the
/// arena. Only the rotation primitives and each strategy's repair routines
/// may rewrite these links.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Keyed node. Keys are unique within a tree.
pub trait KeyNode<K>: Node {
    fn key(&self) -> &K;
}

/// Subtree-size bookkeeping, maintained by the strategies' update callbacks.
///
/// Invariant: `count == 1 + count(l) + count(r)` with absent children
/// counting 0. Any strategy whose node carries a count gets rank/select
/// support for free.
pub trait CountNode: Node {
    fn count(&self) -> usize;
    fn set_count(&mut self, v: usize);
}

/// Three-way comparison used by all tree structures: negative when
/// `a < b`, zero on equality, positive when `a > b`.
pub type Comparator<K> = dyn Fn(&K, &K) -> i32;

/// Default comparator for keys with a partial order.
pub fn default_comparator<K: PartialOrd>(a: &K, b: &K) -> i32 {
    if a == b {
        0
    } else if a < b {
        -1
    } else {
        1
    }
}

#[inline]
pub(crate) fn subtree_count<N: CountNode>(arena: &[N], i: Option<u32>) -> usize {
    i.map_or(0, |i| arena[i as usize].count())
}

/// Refresh the subtree count of `i` from its children. The update callback
/// for strategies whose nodes carry no other metadata.
pub fn update_count<N: CountNode>(arena: &mut [N], i: u32) {
    let count = 1
        + subtree_count(arena, arena[i as usize].l())
        + subtree_count(arena, arena[i as usize].r());
    arena[i as usize].set_count(count);
}
