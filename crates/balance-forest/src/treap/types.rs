use crate::types::{CountNode, KeyNode, Node};

/// Heap priority. Fixed at insert; only rotations move a node relative to
/// its priority order.
pub trait PriorityNode: Node {
    fn priority(&self) -> u64;
}

pub struct TreapNode<K> {
    pub(crate) k: K,
    pub(crate) p: Option<u32>,
    pub(crate) l: Option<u32>,
    pub(crate) r: Option<u32>,
    pub(crate) priority: u64,
    pub(crate) count: usize,
}

impl<K> TreapNode<K> {
    pub fn new(k: K, priority: u64) -> Self {
        Self {
            k,
            p: None,
            l: None,
            r: None,
            priority,
            count: 1,
        }
    }
}

impl<K> Node for TreapNode<K> {
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

impl<K> KeyNode<K> for TreapNode<K> {
    fn key(&self) -> &K {
        &self.k
    }
}

impl<K> CountNode for TreapNode<K> {
    fn count(&self) -> usize {
        self.count
    }
    fn set_count(&mut self, v: usize) {
        self.count = v;
    }
}

impl<K> PriorityNode for TreapNode<K> {
    fn priority(&self) -> u64 {
        self.priority
    }
}
