//! balance-forest-util - Randomized-testing support for balance-forest.
//!
//! The tree engine is exercised by external harnesses; this crate is that
//! harness's toolbox: a seeded, reproducible source of keys, intervals, and
//! operation sequences.

pub mod fuzzer;

pub use fuzzer::{Fuzzer, TreeOp};
