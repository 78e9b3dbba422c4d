use crate::types::{CountNode, KeyNode, Node};

/// Red/black coloring. Absent children read as black; there is no sentinel
/// nil node in the arena.
pub trait ColorNode: Node {
    fn is_black(&self) -> bool;
    fn set_black(&mut self, v: bool);
}

pub struct RbNode<K> {
    pub(crate) k: K,
    pub(crate) p: Option<u32>,
    pub(crate) l: Option<u32>,
    pub(crate) r: Option<u32>,
    pub(crate) black: bool,
    pub(crate) count: usize,
}

impl<K> RbNode<K> {
    /// Fresh nodes are red; insertion repair may repaint them.
    pub fn new(k: K) -> Self {
        Self {
            k,
            p: None,
            l: None,
            r: None,
            black: false,
            count: 1,
        }
    }
}

impl<K> Node for RbNode<K> {
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

impl<K> KeyNode<K> for RbNode<K> {
    fn key(&self) -> &K {
        &self.k
    }
}

impl<K> CountNode for RbNode<K> {
    fn count(&self) -> usize {
        self.count
    }
    fn set_count(&mut self, v: usize) {
        self.count = v;
    }
}

impl<K> ColorNode for RbNode<K> {
    fn is_black(&self) -> bool {
        self.black
    }
    fn set_black(&mut self, v: bool) {
        self.black = v;
    }
}
