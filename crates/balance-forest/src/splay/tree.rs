//! Public splay set over unique keys.

use std::fmt::Debug;

use super::types::SplayNode;
use super::util;
use crate::error::{SelectError, ValidateError};
use crate::set::{SetCore, SetIter};
use crate::traverse::{self, Locate};
use crate::types::{default_comparator, update_count, Node};

/// Self-adjusting search tree storing each key once.
///
/// Lookups restructure the tree, so [`find`](SplayTree::find) and
/// [`contains`](SplayTree::contains) take `&mut self`; that is the price of
/// the amortized bound. Rank and select stay read-only.
pub struct SplayTree<K, C = fn(&K, &K) -> i32> {
    core: SetCore<K, SplayNode<K>, C>,
}

impl<K: PartialOrd> SplayTree<K> {
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K: PartialOrd> Default for SplayTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> SplayTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            core: SetCore::with_comparator(comparator),
        }
    }

    /// Insert `key` and splay it to the root. Returns `false` when the key
    /// is already present (the existing node is splayed instead).
    pub fn insert(&mut self, key: K) -> bool {
        match self.core.locate(&key) {
            Locate::Found(i) => {
                util::splay(self.core.arena_mut(), i, &mut update_count);
                self.core.set_root(Some(i));
                false
            }
            Locate::Empty => {
                let i = self.core.alloc(SplayNode::new(key));
                self.core.set_root(Some(i));
                true
            }
            Locate::Vacant { parent, left } => {
                let i = self.core.alloc(SplayNode::new(key));
                let arena = self.core.arena_mut();
                arena[i as usize].set_p(Some(parent));
                if left {
                    arena[parent as usize].set_l(Some(i));
                } else {
                    arena[parent as usize].set_r(Some(i));
                }
                util::splay(arena, i, &mut update_count);
                self.core.set_root(Some(i));
                true
            }
        }
    }

    /// Erase `key`. Returns `false` when the key is absent; the search
    /// still splays the last node visited.
    pub fn erase(&mut self, key: &K) -> bool {
        let root = self.core.root();
        let (arena, comparator) = self.core.parts_mut();
        let (new_root, found) = util::splay_find(arena, root, key, comparator, &mut update_count);
        self.core.set_root(new_root);
        let Some(i) = found else {
            return false;
        };
        let root = util::remove(self.core.arena_mut(), i, &mut update_count);
        self.core.set_root(root);
        self.core.release(i);
        true
    }

    /// Find `key`, splaying it (or the last node on the search path) to
    /// the root.
    pub fn find(&mut self, key: &K) -> Option<&K> {
        let root = self.core.root();
        let (arena, comparator) = self.core.parts_mut();
        let (new_root, found) = util::splay_find(arena, root, key, comparator, &mut update_count);
        self.core.set_root(new_root);
        found.map(|i| self.core.key(i))
    }

    pub fn contains(&mut self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Number of stored keys strictly less than `key`. Read-only; does not
    /// splay.
    pub fn rank(&self, key: &K) -> usize {
        self.core.rank(key)
    }

    /// The `k`-th smallest key, 0-indexed. Read-only; does not splay.
    pub fn select(&self, k: usize) -> Result<&K, SelectError> {
        self.core.select(k).map(|i| self.core.key(i))
    }

    pub fn len(&self) -> usize {
        self.core.len()
    }

    pub fn is_empty(&self) -> bool {
        self.core.is_empty()
    }

    pub fn first(&self) -> Option<&K> {
        self.core.first().map(|i| self.core.key(i))
    }

    pub fn last(&self) -> Option<&K> {
        self.core.last().map(|i| self.core.key(i))
    }

    pub fn iter(&self) -> SetIter<'_, K, SplayNode<K>, C> {
        self.core.iter()
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Recheck the structural invariants from scratch. O(n). Splay trees
    /// promise nothing about shape, so only the shared checks apply.
    pub fn validate(&self) -> Result<(), ValidateError> {
        traverse::assert_bst(self.core.arena(), self.core.root(), self.core.comparator())
    }
}

impl<K: Debug, C> SplayTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    /// Sideways sketch of the tree for debugging, right child on top.
    pub fn sketch(&self) -> String {
        let mut out = String::new();
        traverse::print_tree(
            self.core.arena(),
            self.core.root(),
            &mut out,
            &|n: &SplayNode<K>| format!("{:?}", n.k),
            0,
        );
        out
    }
}
