//! Interval tree: an AVL tree over closed intervals, augmented with a
//! subtree-max endpoint that prunes overlap searches.

pub mod tree;
pub mod types;
pub mod util;

pub use tree::IntervalTree;
pub use types::{Interval, IntervalNode};
