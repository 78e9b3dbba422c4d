//! AVL tree: height-balanced, the strictest (and shallowest) strategy here.

pub mod tree;
pub mod types;
pub mod util;

pub use tree::AvlTree;
pub use types::{AvlNode, HeightNode};
