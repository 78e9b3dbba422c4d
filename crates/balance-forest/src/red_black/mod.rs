//! Red-black tree: looser balance than AVL, fewer rotations per update.

pub mod tree;
pub mod types;
pub mod util;

pub use tree::RbTree;
pub use types::{ColorNode, RbNode};
