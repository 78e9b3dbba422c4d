//! Seeded random workloads against a `BTreeSet` oracle, run over every
//! strategy. Any divergence in return values, contents, rank, or select is
//! a bug in the strategy's repair logic; the seed in the failure message
//! reproduces it.

use std::collections::BTreeSet;

use balance_forest::{AvlTree, Interval, IntervalTree, RbTree, SplayTree, Treap};
use balance_forest_util::{Fuzzer, TreeOp};

const SEEDS: [u8; 4] = [1, 17, 99, 200];
const OPS_PER_SEED: usize = 2000;

fn workload(seed: u8) -> Vec<TreeOp> {
    let fuzzer = Fuzzer::new(Some([seed; 32]));
    fuzzer.ops(OPS_PER_SEED, -100, 100)
}

fn check_against_oracle(tree_keys: Vec<i64>, oracle: &BTreeSet<i64>, seed: u8) {
    let expected: Vec<i64> = oracle.iter().copied().collect();
    assert_eq!(tree_keys, expected, "contents diverged, seed={seed}");
}

#[test]
fn differential_avl_matches_btreeset() {
    for seed in SEEDS {
        let mut tree = AvlTree::new();
        let mut oracle = BTreeSet::new();
        for (step, op) in workload(seed).into_iter().enumerate() {
            match op {
                TreeOp::Insert(k) => {
                    assert_eq!(tree.insert(k), oracle.insert(k), "seed={seed} step={step}");
                }
                TreeOp::Erase(k) => {
                    assert_eq!(tree.erase(&k), oracle.remove(&k), "seed={seed} step={step}");
                }
                TreeOp::Find(k) => {
                    assert_eq!(
                        tree.contains(&k),
                        oracle.contains(&k),
                        "seed={seed} step={step}"
                    );
                }
            }
            if step % 100 == 0 {
                tree.validate().unwrap();
            }
        }
        tree.validate().unwrap();
        check_against_oracle(tree.iter().copied().collect(), &oracle, seed);
    }
}

#[test]
fn differential_red_black_matches_btreeset() {
    for seed in SEEDS {
        let mut tree = RbTree::new();
        let mut oracle = BTreeSet::new();
        for (step, op) in workload(seed).into_iter().enumerate() {
            match op {
                TreeOp::Insert(k) => {
                    assert_eq!(tree.insert(k), oracle.insert(k), "seed={seed} step={step}");
                }
                TreeOp::Erase(k) => {
                    assert_eq!(tree.erase(&k), oracle.remove(&k), "seed={seed} step={step}");
                }
                TreeOp::Find(k) => {
                    assert_eq!(
                        tree.contains(&k),
                        oracle.contains(&k),
                        "seed={seed} step={step}"
                    );
                }
            }
            if step % 100 == 0 {
                tree.validate().unwrap();
            }
        }
        tree.validate().unwrap();
        check_against_oracle(tree.iter().copied().collect(), &oracle, seed);
    }
}

#[test]
fn differential_splay_matches_btreeset() {
    for seed in SEEDS {
        let mut tree = SplayTree::new();
        let mut oracle = BTreeSet::new();
        for (step, op) in workload(seed).into_iter().enumerate() {
            match op {
                TreeOp::Insert(k) => {
                    assert_eq!(tree.insert(k), oracle.insert(k), "seed={seed} step={step}");
                }
                TreeOp::Erase(k) => {
                    assert_eq!(tree.erase(&k), oracle.remove(&k), "seed={seed} step={step}");
                }
                TreeOp::Find(k) => {
                    assert_eq!(
                        tree.contains(&k),
                        oracle.contains(&k),
                        "seed={seed} step={step}"
                    );
                }
            }
            if step % 100 == 0 {
                tree.validate().unwrap();
            }
        }
        tree.validate().unwrap();
        check_against_oracle(tree.iter().copied().collect(), &oracle, seed);
    }
}

#[test]
fn differential_treap_matches_btreeset() {
    for seed in SEEDS {
        let mut tree = Treap::with_seed(seed as u64);
        let mut oracle = BTreeSet::new();
        for (step, op) in workload(seed).into_iter().enumerate() {
            match op {
                TreeOp::Insert(k) => {
                    assert_eq!(tree.insert(k), oracle.insert(k), "seed={seed} step={step}");
                }
                TreeOp::Erase(k) => {
                    assert_eq!(tree.erase(&k), oracle.remove(&k), "seed={seed} step={step}");
                }
                TreeOp::Find(k) => {
                    assert_eq!(
                        tree.contains(&k),
                        oracle.contains(&k),
                        "seed={seed} step={step}"
                    );
                }
            }
            if step % 100 == 0 {
                tree.validate().unwrap();
            }
        }
        tree.validate().unwrap();
        check_against_oracle(tree.iter().copied().collect(), &oracle, seed);
    }
}

#[test]
fn differential_rank_select_agree_across_strategies() {
    let fuzzer = Fuzzer::new(Some([55u8; 32]));
    let keys = fuzzer.random_keys(500, -1000, 1000);

    let mut avl = AvlTree::new();
    let mut rb = RbTree::new();
    let mut treap = Treap::with_seed(55);
    let mut oracle = BTreeSet::new();
    for k in keys {
        avl.insert(k);
        rb.insert(k);
        treap.insert(k);
        oracle.insert(k);
    }

    for (i, k) in oracle.iter().enumerate() {
        assert_eq!(avl.rank(k), i);
        assert_eq!(rb.rank(k), i);
        assert_eq!(treap.rank(k), i);
        assert_eq!(avl.select(i), Ok(k));
        assert_eq!(rb.select(i), Ok(k));
        assert_eq!(treap.select(i), Ok(k));
    }
}

#[test]
fn differential_interval_overlaps_vs_scan() {
    let fuzzer = Fuzzer::new(Some([77u8; 32]));
    let mut tree = IntervalTree::new();
    let mut stored: Vec<Interval<i64>> = Vec::new();

    for _ in 0..300 {
        let (lo, hi) = fuzzer.random_interval(-200, 200);
        let iv = Interval::new(lo, hi).expect("fuzzer intervals are ordered");
        if tree.insert(iv) {
            stored.push(iv);
        }
    }
    tree.validate().unwrap();

    for _ in 0..200 {
        let (lo, hi) = fuzzer.random_interval(-250, 250);
        let q = Interval::new(lo, hi).expect("fuzzer intervals are ordered");

        let mut expected: Vec<Interval<i64>> =
            stored.iter().copied().filter(|s| s.overlaps(&q)).collect();
        expected.sort_by(|a, b| a.partial_cmp(b).expect("total order on i64 intervals"));

        assert_eq!(tree.all_overlaps(&q), expected);
        assert_eq!(tree.overlaps_any(&q), !expected.is_empty());
        if let Some(hit) = tree.find_overlap(&q) {
            assert!(hit.overlaps(&q));
        }
    }
}
