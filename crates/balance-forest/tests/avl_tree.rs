use balance_forest::AvlTree;

#[test]
fn avl_smoke() {
    let mut tree = AvlTree::new();
    assert!(tree.is_empty());
    assert!(tree.insert(5));
    assert!(tree.insert(3));
    assert!(tree.insert(8));
    assert!(!tree.insert(3));
    assert_eq!(tree.len(), 3);

    assert_eq!(tree.find(&8), Some(&8));
    assert_eq!(tree.find(&7), None);
    assert!(tree.contains(&5));

    let keys: Vec<i64> = tree.iter().copied().collect();
    assert_eq!(keys, vec![3, 5, 8]);
    tree.validate().unwrap();
}

#[test]
fn avl_small_insert_sequence_balances() {
    let mut tree = AvlTree::new();
    for k in [2, 1, 3, 0] {
        assert!(tree.insert(k));
    }
    tree.validate().unwrap();
    let keys: Vec<i64> = tree.iter().copied().collect();
    assert_eq!(keys, vec![0, 1, 2, 3]);
    assert!(tree.height() <= 3);
}

#[test]
fn avl_ladder_insert_delete() {
    let mut tree = AvlTree::new();

    for i in 0..300 {
        assert!(tree.insert(i));
        tree.validate().unwrap();
    }
    assert_eq!(tree.len(), 300);

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
fn avl_ascending_inserts_stay_shallow() {
    let mut tree = AvlTree::new();
    for i in 0..1024 {
        tree.insert(i);
    }
    tree.validate().unwrap();
    // A degenerate chain would be 1024 deep; AVL keeps it near log2(n).
    assert!(tree.height() <= 15, "height {} too large", tree.height());
}

#[test]
fn avl_erase_cases() {
    let mut tree = AvlTree::new();
    for k in [50, 25, 75, 10, 30, 60, 90, 5, 28, 55] {
        tree.insert(k);
    }

    // leaf
    assert!(tree.erase(&5));
    tree.validate().unwrap();
    // one child
    assert!(tree.erase(&10));
    tree.validate().unwrap();
    // two children, successor not adjacent
    assert!(tree.erase(&50));
    tree.validate().unwrap();
    assert!(!tree.contains(&50));
    // root until empty
    while let Some(&k) = tree.first() {
        assert!(tree.erase(&k));
        tree.validate().unwrap();
    }
    assert!(tree.is_empty());

    assert!(!tree.erase(&50));
}

#[test]
fn avl_erase_absent_leaves_tree_alone() {
    let mut tree = AvlTree::new();
    tree.insert(1);
    tree.insert(2);
    assert!(!tree.erase(&3));
    assert_eq!(tree.len(), 2);
    tree.validate().unwrap();
}

#[test]
fn avl_custom_comparator_reverses_order() {
    let mut tree = AvlTree::with_comparator(|a: &i64, b: &i64| if a == b {
        0
    } else if a > b {
        -1
    } else {
        1
    });
    for k in [1, 5, 3, 4, 2] {
        tree.insert(k);
    }
    let keys: Vec<i64> = tree.iter().copied().collect();
    assert_eq!(keys, vec![5, 4, 3, 2, 1]);
    assert_eq!(tree.first(), Some(&5));
    assert_eq!(tree.last(), Some(&1));
    tree.validate().unwrap();
}

#[test]
fn avl_first_last_and_clear() {
    let mut tree = AvlTree::new();
    assert_eq!(tree.first(), None);
    assert_eq!(tree.last(), None);

    for k in [7, 2, 9, 4] {
        tree.insert(k);
    }
    assert_eq!(tree.first(), Some(&2));
    assert_eq!(tree.last(), Some(&9));

    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.iter().count(), 0);
    tree.validate().unwrap();

    // reusable after clear
    assert!(tree.insert(1));
    assert_eq!(tree.len(), 1);
}

#[test]
fn avl_slot_reuse_after_erase() {
    let mut tree = AvlTree::new();
    for i in 0..64 {
        tree.insert(i);
    }
    for i in 0..64 {
        tree.erase(&i);
    }
    for i in 64..128 {
        tree.insert(i);
    }
    tree.validate().unwrap();
    assert_eq!(tree.len(), 64);
    let keys: Vec<i64> = tree.iter().copied().collect();
    assert_eq!(keys, (64..128).collect::<Vec<_>>());
}

#[test]
fn avl_sketch_renders_keys() {
    let mut tree = AvlTree::new();
    for k in [2, 1, 3] {
        tree.insert(k);
    }
    let sketch = tree.sketch();
    assert!(sketch.contains("2 (h=2)"));
    assert!(sketch.contains("1 (h=1)"));
}
