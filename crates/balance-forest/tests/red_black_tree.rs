use balance_forest::RbTree;

#[test]
fn rb_smoke() {
    let mut tree = RbTree::new();
    assert!(tree.insert(10));
    assert!(tree.insert(20));
    assert!(tree.insert(30));
    assert!(!tree.insert(20));
    assert_eq!(tree.len(), 3);

    assert_eq!(tree.find(&30), Some(&30));
    assert!(!tree.contains(&25));
    let keys: Vec<i64> = tree.iter().copied().collect();
    assert_eq!(keys, vec![10, 20, 30]);
    tree.validate().unwrap();
}

#[test]
fn rb_erase_from_small_range() {
    let mut tree = RbTree::new();
    for k in 0..=13 {
        assert!(tree.insert(k));
    }
    assert!(tree.erase(&3));
    tree.validate().unwrap();
    assert_eq!(tree.len(), 13);
    assert_eq!(tree.find(&3), None);
}

#[test]
fn rb_ladder_insert_delete() {
    let mut tree = RbTree::new();

    for i in 0..300 {
        assert!(tree.insert(i));
        tree.validate().unwrap();
    }
    for i in (0..300).step_by(3) {
        assert!(tree.erase(&i));
        tree.validate().unwrap();
    }
    assert_eq!(tree.len(), 200);

    for i in 0..300 {
        assert_eq!(tree.contains(&i), i % 3 != 0);
    }
}

#[test]
fn rb_descending_and_zigzag_inserts() {
    let mut tree = RbTree::new();
    for i in (0..200).rev() {
        tree.insert(i);
        tree.validate().unwrap();
    }
    // interleave from both ends around the existing range
    for i in 0..100 {
        tree.insert(1000 - i);
        tree.insert(-1000 + i);
        tree.validate().unwrap();
    }
    assert_eq!(tree.len(), 400);
    assert_eq!(tree.first(), Some(&-1000));
    assert_eq!(tree.last(), Some(&1000));
}

#[test]
fn rb_erase_every_node_in_insertion_order() {
    let keys = [41, 38, 31, 12, 19, 8, 45, 60, 55, 70, 1, 33];
    let mut tree = RbTree::new();
    for k in keys {
        tree.insert(k);
        tree.validate().unwrap();
    }
    for k in keys {
        assert!(tree.erase(&k));
        tree.validate().unwrap();
    }
    assert!(tree.is_empty());
}

#[test]
fn rb_erase_absent_and_duplicate_insert() {
    let mut tree = RbTree::new();
    tree.insert(7);
    assert!(!tree.erase(&8));
    assert!(!tree.insert(7));
    assert_eq!(tree.len(), 1);
    tree.validate().unwrap();
}

#[test]
fn rb_matches_sorted_reference_on_mixed_workload() {
    let mut tree = RbTree::new();
    let mut reference: Vec<i64> = Vec::new();

    // deterministic pseudo-random walk over a small key space
    let mut x: i64 = 1;
    for _ in 0..2000 {
        x = (x * 48271) % 0x7fff_ffff;
        let key = x % 128;
        if x % 3 == 0 {
            let erased = tree.erase(&key);
            let had = reference.binary_search(&key).is_ok();
            assert_eq!(erased, had);
            if let Ok(pos) = reference.binary_search(&key) {
                reference.remove(pos);
            }
        } else {
            let inserted = tree.insert(key);
            let had = reference.binary_search(&key).is_ok();
            assert_eq!(inserted, !had);
            if let Err(pos) = reference.binary_search(&key) {
                reference.insert(pos, key);
            }
        }
    }
    tree.validate().unwrap();
    let keys: Vec<i64> = tree.iter().copied().collect();
    assert_eq!(keys, reference);
}

#[test]
fn rb_sketch_shows_black_root() {
    let mut tree = RbTree::new();
    for k in [2, 1, 3] {
        tree.insert(k);
    }
    let sketch = tree.sketch();
    assert!(sketch.contains("2 (B)"));
}
