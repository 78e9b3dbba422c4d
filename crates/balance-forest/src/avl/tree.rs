//! Public AVL set over unique keys.

use std::fmt::Debug;

use super::types::AvlNode;
use super::util;
use crate::error::{SelectError, ValidateError};
use crate::set::{SetCore, SetIter};
use crate::traverse::{self, Locate};
use crate::types::{default_comparator, Node};

/// Height-balanced search tree storing each key once.
///
/// # Examples
///
/// ```
/// use balance_forest::AvlTree;
///
/// let mut tree = AvlTree::new();
/// for k in [5, 2, 8, 1, 9] {
///     assert!(tree.insert(k));
/// }
/// assert!(!tree.insert(5));
/// assert_eq!(tree.rank(&8), 3);
/// assert_eq!(tree.select(0), Ok(&1));
/// assert!(tree.erase(&2));
/// assert_eq!(tree.len(), 4);
/// ```
pub struct AvlTree<K, C = fn(&K, &K) -> i32> {
    core: SetCore<K, AvlNode<K>, C>,
}

impl<K: PartialOrd> AvlTree<K> {
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K: PartialOrd> Default for AvlTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, C> AvlTree<K, C>
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
                let i = self.core.alloc(AvlNode::new(key));
                self.core.set_root(Some(i));
                true
            }
            Locate::Vacant { parent, left } => {
                let i = self.core.alloc(AvlNode::new(key));
                let arena = self.core.arena_mut();
                arena[i as usize].set_p(Some(parent));
                if left {
                    arena[parent as usize].set_l(Some(i));
                } else {
                    arena[parent as usize].set_r(Some(i));
                }
                let root = util::retrace(arena, parent, &mut util::update_avl);
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
        let root = util::remove(self.core.arena_mut(), i, &mut util::update_avl);
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

    pub fn iter(&self) -> SetIter<'_, K, AvlNode<K>, C> {
        self.core.iter()
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Stored height of the root, 0 when empty.
    pub fn height(&self) -> i32 {
        util::height_of(self.core.arena(), self.core.root())
    }

    /// Recheck every invariant from scratch. O(n); meant for tests and
    /// debugging sessions, not steady-state use.
    pub fn validate(&self) -> Result<(), ValidateError> {
        util::assert_avl(self.core.arena(), self.core.root(), self.core.comparator())
    }
}

impl<K: Debug, C> AvlTree<K, C>
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
            &|n: &AvlNode<K>| format!("{:?} (h={})", n.k, n.height),
            0,
        );
        out
    }
}
