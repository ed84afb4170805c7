//! Binary max-heap over tasks, ordered by composite rank
//!
//! `TaskHeap` is the "what's next" access path of the store: the task with
//! the highest priority (earliest due date breaking ties) is always at the
//! root. The heap is a dense `Vec<Task>` read as a complete binary tree:
//! children of index `i` live at `2i+1` and `2i+2`, its parent at
//! `(i-1)/2`. Ranking is [`Task::outranks`], never raw priority alone.

use crate::tasks::task::Task;

/// Binary max-heap keyed by priority, then due date
#[derive(Debug, Default)]
pub struct TaskHeap {
    heap: Vec<Task>,
}

impl TaskHeap {
    /// Create a new empty heap
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a task, restoring heap order upward from the new slot
    pub fn insert(&mut self, task: Task) {
        self.heap.push(task);
        self.sift_up(self.heap.len() - 1);
    }

    /// The highest-ranked task, without removing it
    pub fn peek(&self) -> Option<&Task> {
        self.heap.first()
    }

    /// Remove and return the highest-ranked task
    pub fn extract_max(&mut self) -> Option<Task> {
        if self.heap.len() <= 1 {
            return self.heap.pop();
        }
        // Move the last element into the root slot, then repair downward
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let max = self.heap.pop();
        self.sift_down(0);
        max
    }

    /// Remove the task with the given id, wherever it sits in the array
    ///
    /// The scan is O(n); the repair after the swap is local to the one
    /// position that changed. Returns false if no task has that id.
    pub fn remove(&mut self, id: u32) -> bool {
        let Some(index) = self.heap.iter().position(|t| t.id == id) else {
            return false;
        };
        let last = self.heap.len() - 1;
        if index == last {
            self.heap.pop();
            return true;
        }
        self.heap.swap(index, last);
        self.heap.pop();
        // The moved-in element may rank above its parent or below a child
        let parent = (index.saturating_sub(1)) / 2;
        if index > 0 && self.heap[index].outranks(&self.heap[parent]) {
            self.sift_up(index);
        } else {
            self.sift_down(index);
        }
        true
    }

    /// Number of tasks in the heap
    pub fn size(&self) -> usize {
        self.heap.len()
    }

    /// True if the heap holds no tasks
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Snapshot of the backing array, in heap order (not sorted)
    pub fn tasks(&self) -> Vec<Task> {
        self.heap.clone()
    }

    /// Walk a task toward the root while it outranks its parent
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.heap[index].outranks(&self.heap[parent]) {
                break;
            }
            self.heap.swap(index, parent);
            index = parent;
        }
    }

    /// Walk a task toward the leaves while a child outranks it
    ///
    /// The left child is compared first, so when both children carry equal
    /// rank the lower index wins. A position with only a left child (no
    /// right index in range) is still compared against that child.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let mut largest = index;
            let left = 2 * index + 1;
            let right = 2 * index + 2;

            if left < len && self.heap[left].outranks(&self.heap[largest]) {
                largest = left;
            }
            if right < len && self.heap[right].outranks(&self.heap[largest]) {
                largest = right;
            }
            if largest == index {
                break;
            }
            self.heap.swap(index, largest);
            index = largest;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::task::Priority;

    fn task(id: u32, priority: Priority, due: &str) -> Task {
        Task::new(id, format!("task {}", id), priority, due.parse().unwrap())
    }

    fn assert_heap_order(heap: &TaskHeap) {
        let snapshot = heap.tasks();
        for i in 1..snapshot.len() {
            let parent = (i - 1) / 2;
            assert!(
                !snapshot[i].outranks(&snapshot[parent]),
                "task #{} at {} outranks its parent #{}",
                snapshot[i].id,
                i,
                snapshot[parent].id
            );
        }
    }

    #[test]
    fn test_peek_and_extract_follow_composite_order() {
        let mut heap = TaskHeap::new();
        heap.insert(task(1, Priority::Low, "2024-12-20"));
        heap.insert(task(2, Priority::High, "2024-12-10"));
        heap.insert(task(3, Priority::Medium, "2024-12-15"));
        heap.insert(task(4, Priority::High, "2024-12-08"));

        assert_eq!(heap.peek().map(|t| t.id), Some(4));
        let extracted: Vec<u32> = std::iter::from_fn(|| heap.extract_max())
            .map(|t| t.id)
            .collect();
        assert_eq!(extracted, vec![4, 2, 3, 1]);
        assert!(heap.is_empty());
    }

    #[test]
    fn test_extract_from_empty_and_single() {
        let mut heap = TaskHeap::new();
        assert!(heap.extract_max().is_none());
        assert!(heap.peek().is_none());

        heap.insert(task(1, Priority::Low, "2024-12-01"));
        assert_eq!(heap.extract_max().map(|t| t.id), Some(1));
        assert!(heap.extract_max().is_none());
    }

    #[test]
    fn test_remove_middle_element_repairs_locally() {
        let mut heap = TaskHeap::new();
        heap.insert(task(1, Priority::High, "2024-12-01"));
        heap.insert(task(2, Priority::Medium, "2024-12-02"));
        heap.insert(task(3, Priority::Low, "2024-12-03"));
        heap.insert(task(4, Priority::Medium, "2024-12-04"));

        assert!(heap.remove(2));
        assert_eq!(heap.size(), 3);
        assert!(heap.tasks().iter().all(|t| t.id != 2));
        assert_heap_order(&heap);
    }

    #[test]
    fn test_remove_last_and_missing() {
        let mut heap = TaskHeap::new();
        heap.insert(task(1, Priority::High, "2024-12-01"));
        heap.insert(task(2, Priority::Low, "2024-12-02"));

        assert!(heap.remove(2));
        assert_eq!(heap.size(), 1);
        assert!(!heap.remove(99));
        assert_eq!(heap.size(), 1);
    }

    #[test]
    fn test_remove_can_sift_up() {
        // Shape the heap so the element moved into the hole outranks its
        // new parent and must travel upward, not downward. The last element
        // (#6, MEDIUM) sits under another MEDIUM, so insertion left it at
        // the bottom; removing #4 drops it under a LOW parent.
        let mut heap = TaskHeap::new();
        heap.insert(task(1, Priority::High, "2024-01-01"));
        heap.insert(task(2, Priority::Low, "2024-01-02"));
        heap.insert(task(3, Priority::Medium, "2024-01-03"));
        heap.insert(task(4, Priority::Low, "2024-01-04"));
        heap.insert(task(5, Priority::Low, "2024-01-05"));
        heap.insert(task(6, Priority::Medium, "2024-06-01"));

        assert!(heap.remove(4));
        assert_heap_order(&heap);
        assert_eq!(heap.size(), 5);
        assert!(heap.tasks().iter().all(|t| t.id != 4));
    }

    #[test]
    fn test_sift_down_with_only_left_child() {
        let mut heap = TaskHeap::new();
        heap.insert(task(1, Priority::High, "2024-12-01"));
        heap.insert(task(2, Priority::Medium, "2024-12-02"));
        heap.insert(task(3, Priority::Medium, "2024-12-03"));
        heap.insert(task(4, Priority::Low, "2024-12-04"));
        heap.insert(task(5, Priority::Low, "2024-12-05"));

        // Repeated extraction exercises sift-down over shrinking arrays,
        // including the two-element state where only a left child exists.
        let extracted: Vec<u32> = std::iter::from_fn(|| heap.extract_max())
            .map(|t| t.id)
            .collect();
        assert_eq!(extracted, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_snapshot_is_a_copy() {
        let mut heap = TaskHeap::new();
        heap.insert(task(1, Priority::High, "2024-12-01"));
        let mut snapshot = heap.tasks();
        snapshot.clear();
        assert_eq!(heap.size(), 1);
    }
}
