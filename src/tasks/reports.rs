//! Reporting queries for TaskStore
//!
//! Read-only aggregate and diagnostic views over the store, consumed by
//! the presentation layer. These are separated from the main store.rs to
//! keep the write path small; none of them touch either structure's
//! internals beyond the public read operations.

use super::avl::TreeOp;
use super::store::TaskStore;
use super::task::{Priority, Task};
use serde::Serialize;

/// Per-priority counts plus the current front of the queue
#[derive(Debug, Clone, Default, Serialize)]
pub struct Statistics {
    pub total: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub highest_priority: Option<Task>,
}

/// The three tree traversals plus the in-order ordering self-check
#[derive(Debug, Clone, Serialize)]
pub struct Traversals {
    pub preorder: Vec<Task>,
    pub inorder: Vec<Task>,
    pub postorder: Vec<Task>,
    /// True when the in-order ids are strictly ascending; a false value
    /// would mean the index itself is broken
    pub is_sorted: bool,
}

/// Shape summary of the by-id index
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TreeStats {
    pub height: u32,
    pub nodes: usize,
    pub balanced: bool,
}

impl TaskStore {
    /// Count tasks per priority and report the current queue front
    pub fn statistics(&self) -> Statistics {
        let mut stats = Statistics::default();
        for task in self.tasks_by_id() {
            stats.total += 1;
            match task.priority {
                Priority::High => stats.high += 1,
                Priority::Medium => stats.medium += 1,
                Priority::Low => stats.low += 1,
            }
        }
        stats.highest_priority = self.peek_highest_priority();
        stats
    }

    /// The three traversal sequences of the by-id index
    pub fn traversals(&self) -> Traversals {
        Traversals {
            preorder: self.index.preorder(),
            inorder: self.index.inorder(),
            postorder: self.index.postorder(),
            is_sorted: self.index.is_inorder_sorted(),
        }
    }

    /// Height, node count, and balance state of the by-id index
    pub fn tree_stats(&self) -> TreeStats {
        TreeStats {
            height: self.index.height(),
            nodes: self.index.size(),
            balanced: self.index.is_balanced(),
        }
    }

    /// Array-order snapshot of the priority queue
    pub fn heap_snapshot(&self) -> Vec<Task> {
        self.heap.tasks()
    }

    /// The most recent `count` structural events on the index
    pub fn recent_tree_operations(&self, count: usize) -> Vec<TreeOp> {
        self.index.recent_operations(count)
    }
}
