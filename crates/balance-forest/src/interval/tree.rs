//! Public interval set with overlap queries.

use std::fmt::Debug;

use super::types::{Interval, IntervalNode};
use super::util;
use crate::avl::util as avl_util;
use crate::error::{SelectError, ValidateError};
use crate::set::{SetCore, SetIter};
use crate::traverse::{self, Locate};
use crate::types::{default_comparator, Node};

/// AVL-balanced set of unique closed intervals with overlap search.
///
/// # Examples
///
/// ```
/// use balance_forest::{Interval, IntervalTree};
///
/// let mut tree = IntervalTree::new();
/// tree.insert(Interval::new(1, 5).unwrap());
/// tree.insert(Interval::new(8, 12).unwrap());
///
/// let q = Interval::new(4, 9).unwrap();
/// assert!(tree.overlaps_any(&q));
/// assert_eq!(tree.all_overlaps(&q).len(), 2);
/// assert!(!tree.overlaps_any(&Interval::new(6, 7).unwrap()));
/// ```
pub struct IntervalTree<T, C = fn(&Interval<T>, &Interval<T>) -> i32> {
    core: SetCore<Interval<T>, IntervalNode<T>, C>,
}

impl<T: Copy + PartialOrd> IntervalTree<T> {
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<Interval<T>>)
    }
}

impl<T: Copy + PartialOrd> Default for IntervalTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> IntervalTree<T, C>
where
    T: Copy + PartialOrd,
    C: Fn(&Interval<T>, &Interval<T>) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            core: SetCore::with_comparator(comparator),
        }
    }

    /// Insert `interval`. Returns `false` (and changes nothing) when an
    /// equal interval is already present.
    pub fn insert(&mut self, interval: Interval<T>) -> bool {
        match self.core.locate(&interval) {
            Locate::Found(_) => false,
            Locate::Empty => {
                let i = self.core.alloc(IntervalNode::new(interval));
                self.core.set_root(Some(i));
                true
            }
            Locate::Vacant { parent, left } => {
                let i = self.core.alloc(IntervalNode::new(interval));
                let arena = self.core.arena_mut();
                arena[i as usize].set_p(Some(parent));
                if left {
                    arena[parent as usize].set_l(Some(i));
                } else {
                    arena[parent as usize].set_r(Some(i));
                }
                let root = avl_util::retrace(arena, parent, &mut util::update_interval);
                self.core.set_root(Some(root));
                true
            }
        }
    }

    /// Erase the interval equal to `interval`. Returns `false` when absent.
    pub fn erase(&mut self, interval: &Interval<T>) -> bool {
        let Some(i) = self.core.find(interval) else {
            return false;
        };
        let root = avl_util::remove(self.core.arena_mut(), i, &mut util::update_interval);
        self.core.set_root(root);
        self.core.release(i);
        true
    }

    /// Exact-match lookup, not an overlap query.
    pub fn contains(&self, interval: &Interval<T>) -> bool {
        self.core.contains(interval)
    }

    /// Some stored interval overlapping `q`, if any. O(log n); which one
    /// comes back is determined by the tree shape, not by key order.
    pub fn find_overlap(&self, q: &Interval<T>) -> Option<&Interval<T>> {
        util::find_overlap(self.core.arena(), self.core.root(), q).map(|i| self.core.key(i))
    }

    pub fn overlaps_any(&self, q: &Interval<T>) -> bool {
        self.find_overlap(q).is_some()
    }

    /// Every stored interval overlapping `q`, in ascending key order.
    /// O(log n + m) for m matches.
    pub fn all_overlaps(&self, q: &Interval<T>) -> Vec<Interval<T>> {
        let mut out = Vec::new();
        util::all_overlaps(self.core.arena(), self.core.root(), q, &mut out);
        out
    }

    /// Number of stored intervals strictly less than `interval` in key
    /// order.
    pub fn rank(&self, interval: &Interval<T>) -> usize {
        self.core.rank(interval)
    }

    /// The `k`-th smallest interval, 0-indexed.
    pub fn select(&self, k: usize) -> Result<&Interval<T>, SelectError> {
        self.core.select(k).map(|i| self.core.key(i))
    }

    pub fn len(&self) -> usize {
        self.core.len()
    }

    pub fn is_empty(&self) -> bool {
        self.core.is_empty()
    }

    pub fn first(&self) -> Option<&Interval<T>> {
        self.core.first().map(|i| self.core.key(i))
    }

    pub fn last(&self) -> Option<&Interval<T>> {
        self.core.last().map(|i| self.core.key(i))
    }

    pub fn iter(&self) -> SetIter<'_, Interval<T>, IntervalNode<T>, C> {
        self.core.iter()
    }

    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Recheck every invariant from scratch, subtree-max caches included.
    /// O(n).
    pub fn validate(&self) -> Result<(), ValidateError> {
        util::assert_interval(self.core.arena(), self.core.root(), self.core.comparator())
    }
}

impl<T: Copy + PartialOrd + Debug, C> IntervalTree<T, C>
where
    C: Fn(&Interval<T>, &Interval<T>) -> i32,
{
    /// Sideways sketch of the tree for debugging, right child on top.
    pub fn sketch(&self) -> String {
        let mut out = String::new();
        traverse::print_tree(
            self.core.arena(),
            self.core.root(),
            &mut out,
            &|n: &IntervalNode<T>| format!("[{:?}, {:?}] (max={:?})", n.k.lo(), n.k.hi(), n.max),
            0,
        );
        out
    }
}
