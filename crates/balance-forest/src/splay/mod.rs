//! Splay tree: no per-node balance metadata, amortized O(log n) by moving
//! every accessed node to the root.

pub mod tree;
pub mod types;
pub mod util;

pub use tree::SplayTree;
pub use types::SplayNode;
