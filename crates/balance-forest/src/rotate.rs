//! The two rotation primitives shared by every rebalancing strategy.
//!
//! A rotation relinks exactly three edges plus the parent hand-off and then
//! invokes the caller's `update` callback on the demoted node first, then on
//! the promoted node. The callback is where each strategy refreshes its
//! per-node metadata (height, count, subtree max); the rotation itself knows
//! nothing about augmentation.

use crate::types::Node;

/// Rotate left around `x`. The right child of `x` takes its place; `x`
/// becomes its left child. Returns the promoted node's index.
///
/// Panics if `x` has no right child.
pub fn rotate_left<N, U>(arena: &mut [N], x: u32, update: &mut U) -> u32
where
    N: Node,
    U: FnMut(&mut [N], u32),
{
    let r = arena[x as usize]
        .r()
        .expect("rotate_left requires a right child");
    let rl = arena[r as usize].l();
    let p = arena[x as usize].p();

    arena[x as usize].set_r(rl);
    if let Some(rl) = rl {
        arena[rl as usize].set_p(Some(x));
    }

    arena[r as usize].set_l(Some(x));
    arena[x as usize].set_p(Some(r));

    arena[r as usize].set_p(p);
    if let Some(p) = p {
        if arena[p as usize].l() == Some(x) {
            arena[p as usize].set_l(Some(r));
        } else {
            arena[p as usize].set_r(Some(r));
        }
    }

    update(arena, x);
    update(arena, r);
    r
}

/// Rotate right around `x`. Mirror of [`rotate_left`].
///
/// Panics if `x` has no left child.
pub fn rotate_right<N, U>(arena: &mut [N], x: u32, update: &mut U) -> u32
where
    N: Node,
    U: FnMut(&mut [N], u32),
{
    let l = arena[x as usize]
        .l()
        .expect("rotate_right requires a left child");
    let lr = arena[l as usize].r();
    let p = arena[x as usize].p();

    arena[x as usize].set_l(lr);
    if let Some(lr) = lr {
        arena[lr as usize].set_p(Some(x));
    }

    arena[l as usize].set_r(Some(x));
    arena[x as usize].set_p(Some(l));

    arena[l as usize].set_p(p);
    if let Some(p) = p {
        if arena[p as usize].l() == Some(x) {
            arena[p as usize].set_l(Some(l));
        } else {
            arena[p as usize].set_r(Some(l));
        }
    }

    update(arena, x);
    update(arena, l);
    l
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestNode {
        p: Option<u32>,
        l: Option<u32>,
        r: Option<u32>,
    }

    impl Node for TestNode {
        fn p(&self) -> Option<u32> {
            self.p
        }
        fn l(&self) -> Option<u32> {
            self.l
        }
        fn r(&self) -> Option<u32> {
            self.r
        }
        fn set_p(&mut self, v: Option<u32>) {
            self.p = v;
        }
        fn set_l(&mut self, v: Option<u32>) {
            self.l = v;
        }
        fn set_r(&mut self, v: Option<u32>) {
            self.r = v;
        }
    }

    fn node(p: Option<u32>, l: Option<u32>, r: Option<u32>) -> TestNode {
        TestNode { p, l, r }
    }

    #[test]
    fn test_rotate_left_relinks_all_edges() {
        // 0 is root with right child 1; 1 has left child 2.
        let mut arena = vec![
            node(None, None, Some(1)),
            node(Some(0), Some(2), None),
            node(Some(1), None, None),
        ];
        let mut touched = Vec::new();
        let new_root = rotate_left(&mut arena, 0, &mut |_: &mut [TestNode], i| touched.push(i));

        assert_eq!(new_root, 1);
        assert_eq!(arena[1].p(), None);
        assert_eq!(arena[1].l(), Some(0));
        assert_eq!(arena[0].p(), Some(1));
        assert_eq!(arena[0].r(), Some(2));
        assert_eq!(arena[2].p(), Some(0));
        // Demoted node updated before the promoted node.
        assert_eq!(touched, vec![0, 1]);
    }

    #[test]
    fn test_rotate_right_updates_parent_child_pointer() {
        // 0 is root; its right child 1 has left child 2.
        let mut arena = vec![
            node(None, None, Some(1)),
            node(Some(0), Some(2), None),
            node(Some(1), None, None),
        ];
        let new_sub = rotate_right(&mut arena, 1, &mut |_: &mut [TestNode], _| {});

        assert_eq!(new_sub, 2);
        assert_eq!(arena[0].r(), Some(2));
        assert_eq!(arena[2].p(), Some(0));
        assert_eq!(arena[2].r(), Some(1));
        assert_eq!(arena[1].p(), Some(2));
        assert_eq!(arena[1].l(), None);
    }

    #[test]
    fn test_rotations_are_inverses() {
        let mut arena = vec![
            node(None, None, Some(1)),
            node(Some(0), Some(2), Some(3)),
            node(Some(1), None, None),
            node(Some(1), None, None),
        ];
        let mut noop = |_: &mut [TestNode], _| {};
        let up = rotate_left(&mut arena, 0, &mut noop);
        let back = rotate_right(&mut arena, up, &mut noop);

        assert_eq!(back, 0);
        assert_eq!(arena[0].p(), None);
        assert_eq!(arena[0].r(), Some(1));
        assert_eq!(arena[1].l(), Some(2));
        assert_eq!(arena[1].r(), Some(3));
        assert_eq!(arena[2].p(), Some(1));
    }

    #[test]
    #[should_panic(expected = "rotate_left requires a right child")]
    fn test_rotate_left_without_right_child_panics() {
        let mut arena = vec![node(None, None, None)];
        rotate_left(&mut arena, 0, &mut |_: &mut [TestNode], _| {});
    }
}
