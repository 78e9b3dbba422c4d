use crate::types::{CountNode, KeyNode, Node};

/// Splay node: links, key, and the subtree count that powers rank/select.
/// No balance metadata; the access pattern itself restructures the tree.
pub struct SplayNode<K> {
    pub(crate) k: K,
    pub(crate) p: Option<u32>,
    pub(crate) l: Option<u32>,
    pub(crate) r: Option<u32>,
    pub(crate) count: usize,
}

impl<K> SplayNode<K> {
    pub fn new(k: K) -> Self {
        Self {
            k,
            p: None,
            l: None,
            r: None,
            count: 1,
        }
    }
}

impl<K> Node for SplayNode<K> {
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

impl<K> KeyNode<K> for SplayNode<K> {
    fn key(&self) -> &K {
        &self.k
    }
}

impl<K> CountNode for SplayNode<K> {
    fn count(&self) -> usize {
        self.count
    }
    fn set_count(&mut self, v: usize) {
        self.count = v;
    }
}
