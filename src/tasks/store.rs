//! Task store: the single owner of both data structures
//!
//! `TaskStore` holds one [`AvlTree`] (by-id index) and one [`TaskHeap`]
//! (priority queue) over the same logical set of tasks, plus the id
//! counter. It is the only component that writes to either structure, and
//! every write touches both in the same call so the two views never
//! diverge. Reads are routed to whichever structure answers the query
//! efficiently: the tree for by-id lookups, the heap for "what's next".

use crate::tasks::avl::AvlTree;
use crate::tasks::heap::TaskHeap;
use crate::tasks::task::{Priority, Task};
use anyhow::{Result, bail};
use chrono::NaiveDate;

/// Coordinated collection of tasks with two synchronized access paths
#[derive(Debug)]
pub struct TaskStore {
    /// Priority queue: O(1) peek of the highest-ranked task
    pub(crate) heap: TaskHeap,
    /// By-id index: O(log n) point lookup, ordered dumps
    pub(crate) index: AvlTree,
    /// Next id to hand out; never reset, ids are never reused
    next_id: u32,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self {
            heap: TaskHeap::new(),
            index: AvlTree::new(),
            next_id: 1,
        }
    }
}

impl TaskStore {
    /// Create a new empty store; the first task gets id 1
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new task to both structures and return it
    ///
    /// The description is trimmed and must be non-empty. Priority arrives
    /// already typed; the string-level whitelist lives in
    /// [`crate::validation`].
    pub fn add(&mut self, description: &str, priority: Priority, due_date: NaiveDate) -> Result<Task> {
        let description = description.trim();
        if description.is_empty() {
            bail!("Task description cannot be empty");
        }

        let task = Task::new(self.next_id, description.to_string(), priority, due_date);
        self.next_id += 1;

        self.index.insert(task.clone());
        self.heap.insert(task.clone());
        Ok(task)
    }

    /// Remove and return the highest-ranked task, if any
    ///
    /// Extracts from the heap, then deletes the same id from the index so
    /// both structures stay in step.
    pub fn complete_highest_priority(&mut self) -> Option<Task> {
        let task = self.heap.extract_max()?;
        self.index.delete(task.id);
        Some(task)
    }

    /// Remove the task with the given id from both structures
    ///
    /// The index is the source of truth for existence: if the id is
    /// absent, neither structure is touched and false is returned.
    pub fn delete_by_id(&mut self, id: u32) -> bool {
        if self.index.search(id).is_none() {
            return false;
        }
        self.heap.remove(id);
        self.index.delete(id);
        true
    }

    /// The highest-ranked task without removing it
    pub fn peek_highest_priority(&self) -> Option<Task> {
        self.heap.peek().cloned()
    }

    /// Look up a task by id
    pub fn find_by_id(&self, id: u32) -> Option<Task> {
        self.index.search(id)
    }

    /// All tasks in heap-array order (no ordering guarantee beyond heap
    /// shape)
    pub fn tasks_by_priority(&self) -> Vec<Task> {
        self.heap.tasks()
    }

    /// All tasks sorted ascending by id
    pub fn tasks_by_id(&self) -> Vec<Task> {
        self.index.inorder()
    }

    /// Number of tasks in the store
    pub fn task_count(&self) -> usize {
        self.heap.size()
    }

    /// True if the store holds no tasks
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Discard all tasks
    ///
    /// Both structures are recreated; the id counter is NOT reset, so ids
    /// stay unique for the lifetime of the store.
    pub fn clear(&mut self) {
        self.heap = TaskHeap::new();
        self.index = AvlTree::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_assigns_sequential_ids_from_one() {
        let mut store = TaskStore::new();
        let a = store
            .add("first", Priority::Low, "2025-01-01".parse().unwrap())
            .unwrap();
        let b = store
            .add("second", Priority::High, "2025-01-02".parse().unwrap())
            .unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[test]
    fn test_add_rejects_blank_description() {
        let mut store = TaskStore::new();
        assert!(store.add("", Priority::Low, "2025-01-01".parse().unwrap()).is_err());
        assert!(store.add("   ", Priority::Low, "2025-01-01".parse().unwrap()).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_trims_description() {
        let mut store = TaskStore::new();
        let task = store
            .add("  buy milk  ", Priority::Medium, "2025-01-01".parse().unwrap())
            .unwrap();
        assert_eq!(task.description, "buy milk");
    }

    #[test]
    fn test_ids_not_reused_after_clear() {
        let mut store = TaskStore::new();
        store.add("a", Priority::Low, "2025-01-01".parse().unwrap()).unwrap();
        store.add("b", Priority::Low, "2025-01-01".parse().unwrap()).unwrap();
        store.clear();
        assert!(store.is_empty());
        let c = store.add("c", Priority::Low, "2025-01-01".parse().unwrap()).unwrap();
        assert_eq!(c.id, 3);
    }
}
