//! Arena-owning core shared by the strategy wrappers.
//!
//! `SetCore` owns the node `Vec`, the free list, the root index, and the
//! comparator. It implements everything that does not depend on a
//! rebalancing strategy; the wrappers layer insert and erase repair on top.

use std::marker::PhantomData;

use crate::error::SelectError;
use crate::order;
use crate::traverse::{self, Locate};
use crate::types::{CountNode, KeyNode};

pub struct SetCore<K, N, C> {
    arena: Vec<N>,
    free: Vec<u32>,
    root: Option<u32>,
    len: usize,
    comparator: C,
    _key: PhantomData<K>,
}

impl<K, N, C> SetCore<K, N, C>
where
    N: KeyNode<K> + CountNode,
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            arena: Vec::new(),
            free: Vec::new(),
            root: None,
            len: 0,
            comparator,
            _key: PhantomData,
        }
    }

    /// Place `node` in the arena, reusing a freed slot when one exists.
    pub(crate) fn alloc(&mut self, node: N) -> u32 {
        self.len += 1;
        match self.free.pop() {
            Some(i) => {
                self.arena[i as usize] = node;
                i
            }
            None => {
                self.arena.push(node);
                (self.arena.len() - 1) as u32
            }
        }
    }

    /// Return a detached node's slot to the free list. The slot's contents
    /// stay in place until reuse or drop; links must already be cleared.
    pub(crate) fn release(&mut self, i: u32) {
        debug_assert!(self.arena[i as usize].p().is_none());
        self.len -= 1;
        self.free.push(i);
    }

    pub(crate) fn root(&self) -> Option<u32> {
        self.root
    }

    pub(crate) fn set_root(&mut self, root: Option<u32>) {
        self.root = root;
    }

    pub(crate) fn arena(&self) -> &[N] {
        &self.arena
    }

    pub(crate) fn arena_mut(&mut self) -> &mut Vec<N> {
        &mut self.arena
    }

    pub(crate) fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Split borrow for callers that search and restructure in one pass.
    pub(crate) fn parts_mut(&mut self) -> (&mut Vec<N>, &C) {
        (&mut self.arena, &self.comparator)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn key(&self, i: u32) -> &K {
        self.arena[i as usize].key()
    }

    pub(crate) fn find(&self, key: &K) -> Option<u32> {
        traverse::find(&self.arena, self.root, key, &self.comparator)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    pub(crate) fn locate(&self, key: &K) -> Locate {
        traverse::locate(&self.arena, self.root, key, &self.comparator)
    }

    /// Number of stored keys strictly less than `key`.
    pub fn rank(&self, key: &K) -> usize {
        order::rank(&self.arena, self.root, key, &self.comparator)
    }

    /// Index of the node holding the `k`-th smallest key, 0-indexed.
    pub(crate) fn select(&self, k: usize) -> Result<u32, SelectError> {
        let Some(root) = self.root else {
            return Err(SelectError::OutOfRange { rank: k, len: 0 });
        };
        if k >= self.len {
            return Err(SelectError::OutOfRange {
                rank: k,
                len: self.len,
            });
        }
        Ok(order::select(&self.arena, root, k))
    }

    pub(crate) fn first(&self) -> Option<u32> {
        traverse::first(&self.arena, self.root)
    }

    pub(crate) fn last(&self) -> Option<u32> {
        traverse::last(&self.arena, self.root)
    }

    /// Ascending in-order iteration over stored keys.
    pub fn iter(&self) -> SetIter<'_, K, N, C> {
        SetIter {
            core: self,
            cursor: self.first(),
        }
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.free.clear();
        self.root = None;
        self.len = 0;
    }
}

pub struct SetIter<'a, K, N, C> {
    core: &'a SetCore<K, N, C>,
    cursor: Option<u32>,
}

impl<'a, K, N, C> Iterator for SetIter<'a, K, N, C>
where
    N: KeyNode<K> + CountNode,
    C: Fn(&K, &K) -> i32,
{
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.cursor?;
        self.cursor = traverse::next(self.core.arena(), i);
        Some(self.core.key(i))
    }
}
