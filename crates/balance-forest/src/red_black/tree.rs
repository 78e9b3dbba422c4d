//! Public red-black set over unique keys.

use std::fmt::Debug;

use super::types::{ColorNode, RbNode};
use super::util;
use crate::error::{SelectError, ValidateError};
use crate::set::{SetCore, SetIter};
use crate::traverse::{self, Locate};
use crate::types::{default_comparator, update_count, Node};

/// Red-black search tree storing each key once.
///
/// Same surface as [`AvlTree`](crate::AvlTree); the trade-off is looser
/// balance for fewer rotations on mutation.
pub struct RbTree<K, C = fn(&K, &K) -> i32> {
    core: SetCore<K, RbNode<K>, C>,
}

impl<K: PartialOrd> RbTree<K> {
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K: PartialOrd> Default for RbTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> RbTree<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            core: SetCore::with_comparator(comparator),
        }
    }

    /// Insert `key`. Returns `false` (and changes nothing) when the key is
    /// already present.
    pub fn insert(&mut self, key: K) -> bool {
        match self.core.locate(&key) {
            Locate::Found(_) => false,
            Locate::Empty => {
                let i = self.core.alloc(RbNode::new(key));
                self.core.arena_mut()[i as usize].set_black(true);
                self.core.set_root(Some(i));
                true
            }
            Locate::Vacant { parent, left } => {
                let i = self.core.alloc(RbNode::new(key));
                let arena = self.core.arena_mut();
                arena[i as usize].set_p(Some(parent));
                if left {
                    arena[parent as usize].set_l(Some(i));
                } else {
                    arena[parent as usize].set_r(Some(i));
                }
                traverse::refresh_upward(arena, Some(parent), &mut update_count);
                let root = util::repair_insert(arena, i, &mut update_count);
                self.core.set_root(Some(root));
                true
            }
        }
    }

    /// Erase `key`. Returns `false` when the key is absent.
    pub fn erase(&mut self, key: &K) -> bool {
        let Some(i) = self.core.find(key) else {
            return false;
        };
        let root = util::remove(self.core.arena_mut(), i, &mut update_count);
        self.core.set_root(root);
        self.core.release(i);
        true
    }

    pub fn find(&self, key: &K) -> Option<&K> {
        self.core.find(key).map(|i| self.core.key(i))
    }

    pub fn contains(&self, key: &K) -> bool {
        self.core.contains(key)
    }

    /// Number of stored keys strictly less than `key`.
    pub fn rank(&self, key: &K) -> usize {
        self.core.rank(key)
    }

    /// The `k`-th smallest key, 0-indexed.
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

    pub fn iter(&self) -> SetIter<'_, K, RbNode<K>, C> {
        self.core.iter()
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Recheck every invariant from scratch. O(n).
    pub fn validate(&self) -> Result<(), ValidateError> {
        util::assert_red_black(self.core.arena(), self.core.root(), self.core.comparator())
    }
}

impl<K: Debug, C> RbTree<K, C>
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
            &|n: &RbNode<K>| format!("{:?} ({})", n.k, if n.is_black() { "B" } else { "R" }),
            0,
        );
        out
    }
}
