// Integration tests for the AVL index: balance and ordering invariants
// across insert/delete sequences, exercised through the public API only.

use taskstore::{AvlTree, Priority, Task};

fn task(id: u32) -> Task {
    Task::new(
        id,
        format!("task {}", id),
        Priority::Medium,
        "2025-02-01".parse().unwrap(),
    )
}

// Worst case for an unbalanced BST: strictly ascending insertion. A
// balanced tree over 15 nodes must not exceed height 5 (the AVL bound;
// a perfectly balanced tree would be height 4).
#[test]
fn test_ascending_insertion_stays_balanced() {
    let mut tree = AvlTree::new();
    for id in 1..=15 {
        tree.insert(task(id));
        assert!(tree.is_balanced(), "unbalanced after inserting {}", id);
    }
    assert_eq!(tree.size(), 15);
    assert!(tree.height() <= 5, "height {} too large for 15 nodes", tree.height());

    for id in 1..=15 {
        assert!(tree.search(id).is_some(), "id {} missing after build", id);
    }
}

#[test]
fn test_descending_insertion_stays_balanced() {
    let mut tree = AvlTree::new();
    for id in (1..=15).rev() {
        tree.insert(task(id));
        assert!(tree.is_balanced());
    }
    assert!(tree.height() <= 5);
    assert!(tree.is_inorder_sorted());
}

// Mixed build followed by targeted deletes: every deleted id becomes
// unfindable, every surviving id stays findable, and the tree keeps both
// the balance and the ordering invariant.
#[test]
fn test_delete_and_rebalance() {
    let ids = [50, 25, 75, 10, 30, 60, 80, 5, 15, 27, 55, 65, 77, 85];
    let mut tree = AvlTree::new();
    for id in ids {
        tree.insert(task(id));
    }
    assert_eq!(tree.size(), ids.len());

    let deleted = [10, 30, 60, 80];
    for id in deleted {
        assert!(tree.delete(id));
        assert!(tree.is_balanced(), "unbalanced after deleting {}", id);
        assert!(tree.is_inorder_sorted());
    }

    for id in deleted {
        assert!(tree.search(id).is_none(), "id {} should be gone", id);
    }
    for id in ids.iter().filter(|id| !deleted.contains(id)) {
        assert!(tree.search(*id).is_some(), "id {} should remain", id);
    }
    assert_eq!(tree.size(), 10);
}

#[test]
fn test_inorder_is_strictly_ascending() {
    let mut tree = AvlTree::new();
    for id in [42, 7, 99, 1, 63, 28, 14, 85, 56, 70] {
        tree.insert(task(id));
    }

    let inorder = tree.inorder();
    for pair in inorder.windows(2) {
        assert!(
            pair[0].id < pair[1].id,
            "in-order ids not ascending: {} before {}",
            pair[0].id,
            pair[1].id
        );
    }
    assert!(tree.is_inorder_sorted());
}

#[test]
fn test_insert_search_round_trip() {
    let mut tree = AvlTree::new();
    for id in 1..=50 {
        let mut t = task(id);
        t.description = format!("original {}", id);
        tree.insert(t);
    }
    for id in 1..=50 {
        let found = tree.search(id).expect("inserted id must be found");
        assert_eq!(found.id, id);
        assert_eq!(found.description, format!("original {}", id));
    }

    assert!(tree.delete(25));
    assert!(tree.search(25).is_none());
    assert_eq!(tree.size(), 49);
}

#[test]
fn test_duplicate_insert_keeps_size() {
    let mut tree = AvlTree::new();
    for id in 1..=10 {
        tree.insert(task(id));
    }

    let mut replacement = task(5);
    replacement.description = "replaced".to_string();
    replacement.priority = Priority::High;
    tree.insert(replacement);

    assert_eq!(tree.size(), 10);
    let found = tree.search(5).unwrap();
    assert_eq!(found.description, "replaced");
    assert_eq!(found.priority, Priority::High);
    assert!(tree.is_balanced());
}

#[test]
fn test_delete_root_repeatedly_until_empty() {
    let mut tree = AvlTree::new();
    for id in [8, 4, 12, 2, 6, 10, 14] {
        tree.insert(task(id));
    }

    // Delete whatever sits at the front of the pre-order (the root) each
    // round; the tree must stay consistent all the way down to empty.
    while let Some(root) = tree.preorder().first().cloned() {
        assert!(tree.delete(root.id));
        assert!(tree.is_balanced());
        assert!(tree.is_inorder_sorted());
    }
    assert!(tree.is_empty());
    assert_eq!(tree.height(), 0);
}

#[test]
fn test_empty_tree_queries() {
    let tree = AvlTree::new();
    assert!(tree.is_empty());
    assert_eq!(tree.size(), 0);
    assert_eq!(tree.height(), 0);
    assert!(tree.search(1).is_none());
    assert!(tree.inorder().is_empty());
    assert!(tree.is_balanced());
    assert!(tree.is_inorder_sorted());
}
