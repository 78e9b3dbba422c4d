use crate::avl::HeightNode;
use crate::error::IntervalError;
use crate::types::{CountNode, KeyNode, Node};

/// A closed interval `[lo, hi]`. Construction rejects inverted endpoints,
/// so every live `Interval` satisfies `lo <= hi`.
///
/// Intervals order lexicographically by `lo` then `hi`, which is the key
/// order inside [`IntervalTree`](super::IntervalTree).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Interval<T> {
    lo: T,
    hi: T,
}

impl<T: Copy + PartialOrd> Interval<T> {
    pub fn new(lo: T, hi: T) -> Result<Self, IntervalError> {
        if lo > hi {
            return Err(IntervalError::Inverted);
        }
        Ok(Self { lo, hi })
    }

    pub fn lo(&self) -> T {
        self.lo
    }

    pub fn hi(&self) -> T {
        self.hi
    }

    /// Closed-interval overlap; a shared endpoint counts.
    pub fn overlaps(&self, other: &Interval<T>) -> bool {
        self.lo <= other.hi && other.lo <= self.hi
    }
}

/// AVL node carrying an interval key plus the largest `hi` endpoint found
/// anywhere in its subtree.
pub struct IntervalNode<T> {
    pub(crate) k: Interval<T>,
    pub(crate) p: Option<u32>,
    pub(crate) l: Option<u32>,
    pub(crate) r: Option<u32>,
    pub(crate) height: i32,
    pub(crate) count: usize,
    pub(crate) max: T,
}

impl<T: Copy> IntervalNode<T> {
    pub fn new(k: Interval<T>) -> Self {
        let max = k.hi;
        Self {
            k,
            p: None,
            l: None,
            r: None,
            height: 1,
            count: 1,
            max,
        }
    }
}

impl<T> Node for IntervalNode<T> {
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

impl<T> KeyNode<Interval<T>> for IntervalNode<T> {
    fn key(&self) -> &Interval<T> {
        &self.k
    }
}

impl<T> CountNode for IntervalNode<T> {
    fn count(&self) -> usize {
        self.count
    }
    fn set_count(&mut self, v: usize) {
        self.count = v;
    }
}

impl<T> HeightNode for IntervalNode<T> {
    fn height(&self) -> i32 {
        self.height
    }
    fn set_height(&mut self, v: i32) {
        self.height = v;
    }
}
