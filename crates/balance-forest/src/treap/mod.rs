//! Treap: a BST on keys that is simultaneously a max-heap on random
//! priorities, giving expected O(log n) depth.

pub mod tree;
pub mod types;
pub mod util;

pub use tree::Treap;
pub use types::{PriorityNode, TreapNode};
