//! balance-forest - arena-based self-balancing binary search trees.
//!
//! Four balancing strategies (AVL, red-black, splay, treap) plus an
//! interval-augmented AVL variant share one node model: nodes live in a
//! `Vec` arena, links are `Option<u32>` indices, and every node carries a
//! parent back-reference so all walks are iterative. Two rotation
//! primitives ([`rotate::rotate_left`], [`rotate::rotate_right`]) are the
//! only structural mutations the strategies build on.
//!
//! Every tree stores unique keys, maintains subtree counts for O(log n)
//! [`rank`](AvlTree::rank) and [`select`](AvlTree::select), and exposes a
//! from-scratch [`validate`](AvlTree::validate) for tests and debugging.
//!
//! # Example
//!
//! ```
//! use balance_forest::RbTree;
//!
//! let mut tree = RbTree::new();
//! for k in [30, 10, 20, 50, 40] {
//!     tree.insert(k);
//! }
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![10, 20, 30, 40, 50]);
//! assert_eq!(tree.rank(&40), 3);
//! assert!(tree.validate().is_ok());
//! ```

pub mod avl;
pub mod error;
pub mod interval;
pub mod order;
pub mod red_black;
pub mod rotate;
pub mod set;
pub mod splay;
pub mod traverse;
pub mod treap;
pub mod types;

pub use avl::AvlTree;
pub use error::{IntervalError, SelectError, ValidateError};
pub use interval::{Interval, IntervalTree};
pub use red_black::RbTree;
pub use splay::SplayTree;
pub use treap::Treap;
