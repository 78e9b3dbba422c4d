use crate::types::{CountNode, KeyNode, Node};

/// Height bookkeeping. A leaf has height 1; an absent child has height 0.
///
/// Shared with the interval nodes, which reuse the AVL rebalancing with a
/// richer update callback.
pub trait HeightNode: Node {
    fn height(&self) -> i32;
    fn set_height(&mut self, v: i32);
}

pub struct AvlNode<K> {
    pub(crate) k: K,
    pub(crate) p: Option<u32>,
    pub(crate) l: Option<u32>,
    pub(crate) r: Option<u32>,
    pub(crate) height: i32,
    pub(crate) count: usize,
}

impl<K> AvlNode<K> {
    pub fn new(k: K) -> Self {
        Self {
            k,
            p: None,
            l: None,
            r: None,
            height: 1,
            count: 1,
        }
    }
}

impl<K> Node for AvlNode<K> {
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

impl<K> KeyNode<K> for AvlNode<K> {
    fn key(&self) -> &K {
        &self.k
    }
}

impl<K> CountNode for AvlNode<K> {
    fn count(&self) -> usize {
        self.count
    }
    fn set_count(&mut self, v: usize) {
        self.count = v;
    }
}

impl<K> HeightNode for AvlNode<K> {
    fn height(&self) -> i32 {
        self.height
    }
    fn set_height(&mut self, v: i32) {
        self.height = v;
    }
}
