//! Public treap set over unique keys.

use std::fmt::Debug;

use rand::{rngs::OsRng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

use super::types::TreapNode;
use super::util;
use crate::error::{SelectError, ValidateError};
use crate::set::{SetCore, SetIter};
use crate::traverse::{self, Locate};
use crate::types::{default_comparator, update_count, Node};

/// Randomized search tree storing each key once.
///
/// Priorities come from an owned xoshiro256** generator. [`Treap::new`]
/// seeds it from the OS; [`Treap::with_seed`] pins the whole tree shape for
/// reproducible runs.
pub struct Treap<K, C = fn(&K, &K) -> i32> {
    core: SetCore<K, TreapNode<K>, C>,
    rng: Xoshiro256StarStar,
}

impl<K: PartialOrd> Treap<K> {
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }

    /// Deterministic priorities for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            core: SetCore::with_comparator(default_comparator::<K>),
            rng: Xoshiro256StarStar::seed_from_u64(seed),
        }
    }
}

impl<K: PartialOrd> Default for Treap<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> Treap<K, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        let mut seed = [0u8; 32];
        OsRng.fill_bytes(&mut seed);
        Self {
            core: SetCore::with_comparator(comparator),
            rng: Xoshiro256StarStar::from_seed(seed),
        }
    }

    /// Insert `key` with a fresh random priority. Returns `false` (and
    /// draws nothing from the generator) when the key is already present.
    pub fn insert(&mut self, key: K) -> bool {
        match self.core.locate(&key) {
            Locate::Found(_) => false,
            Locate::Empty => {
                let priority = self.rng.next_u64();
                let i = self.core.alloc(TreapNode::new(key, priority));
                self.core.set_root(Some(i));
                true
            }
            Locate::Vacant { parent, left } => {
                let priority = self.rng.next_u64();
                let i = self.core.alloc(TreapNode::new(key, priority));
                let arena = self.core.arena_mut();
                arena[i as usize].set_p(Some(parent));
                if left {
                    arena[parent as usize].set_l(Some(i));
                } else {
                    arena[parent as usize].set_r(Some(i));
                }
                traverse::refresh_upward(arena, Some(parent), &mut update_count);
                let root = util::bubble_up(arena, i, &mut update_count);
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

    pub fn iter(&self) -> SetIter<'_, K, TreapNode<K>, C> {
        self.core.iter()
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Recheck every invariant from scratch. O(n).
    pub fn validate(&self) -> Result<(), ValidateError> {
        util::assert_treap(self.core.arena(), self.core.root(), self.core.comparator())
    }
}

impl<K: Debug, C> Treap<K, C>
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
            &|n: &TreapNode<K>| format!("{:?} (pri={})", n.k, n.priority),
            0,
        );
        out
    }
}
