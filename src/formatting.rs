//! Formatting helper functions for task output
//!
//! This module contains rendering logic for the presentation layer: task
//! listings, the statistics block, index diagnostics, and the TOML export.
//! Everything here consumes cloned report values only.

use crate::tasks::{Statistics, Task, Traversals, TreeOp, TreeStats};
use anyhow::{Context, Result};
use serde::Serialize;

/// Format a list of tasks, one line per task
///
/// # Arguments
/// * `tasks` - Tasks to format, in whatever order the caller chose
///
/// # Returns
/// Formatted string representation of the tasks
pub fn format_task_list(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "No tasks found".to_string();
    }

    let mut result = format!("Found {} task(s):\n", tasks.len());
    for task in tasks {
        result.push_str(&format!("- {}\n", task));
    }
    result
}

/// Format the statistics block
pub fn format_statistics(stats: &Statistics) -> String {
    let mut result = format!(
        "Total: {} | high: {} | medium: {} | low: {}\n",
        stats.total, stats.high, stats.medium, stats.low
    );
    match &stats.highest_priority {
        Some(task) => result.push_str(&format!("Next up: {}\n", task)),
        None => result.push_str("Next up: (none)\n"),
    }
    result
}

/// Format the heap's backing array in index order
///
/// The output shows heap positions, not a sorted listing; position 0 is
/// always the front of the queue.
pub fn format_heap_snapshot(snapshot: &[Task]) -> String {
    if snapshot.is_empty() {
        return "Heap is empty".to_string();
    }

    let mut result = format!("Heap array ({} task(s)):\n", snapshot.len());
    for (position, task) in snapshot.iter().enumerate() {
        result.push_str(&format!("  [{}] {}\n", position, task));
    }
    result
}

/// Format the three index traversals and the ordering self-check
pub fn format_traversals(traversals: &Traversals) -> String {
    let ids = |tasks: &[Task]| {
        tasks
            .iter()
            .map(|t| format!("#{}", t.id))
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        "Pre-order:  {}\nIn-order:   {}\nPost-order: {}\nIn-order sorted: {}\n",
        ids(&traversals.preorder),
        ids(&traversals.inorder),
        ids(&traversals.postorder),
        if traversals.is_sorted { "yes" } else { "NO (index corrupted)" }
    )
}

/// Format the index shape summary
pub fn format_tree_stats(stats: &TreeStats) -> String {
    format!(
        "Index: {} node(s), height {}, balanced: {}\n",
        stats.nodes,
        stats.height,
        if stats.balanced { "yes" } else { "NO" }
    )
}

/// Format the recent structural events on the index, oldest first
pub fn format_operations(operations: &[TreeOp]) -> String {
    if operations.is_empty() {
        return "No operations recorded".to_string();
    }

    let mut result = format!("Last {} operation(s):\n", operations.len());
    for op in operations {
        result.push_str(&format!("  {}\n", op));
    }
    result
}

#[derive(Serialize)]
struct Export<'a> {
    task: &'a [Task],
}

/// Render tasks as a TOML document with one `[[task]]` table per task
///
/// # Arguments
/// * `tasks` - Tasks to export, typically in ascending id order
pub fn export_toml(tasks: &[Task]) -> Result<String> {
    toml::to_string(&Export { task: tasks }).context("Failed to render TOML export")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::Priority;

    fn task(id: u32, priority: Priority, due: &str) -> Task {
        Task::new(id, format!("task {}", id), priority, due.parse().unwrap())
    }

    #[test]
    fn test_format_task_list_empty_and_nonempty() {
        assert_eq!(format_task_list(&[]), "No tasks found");

        let rendered = format_task_list(&[task(1, Priority::High, "2025-01-01")]);
        assert!(rendered.contains("Found 1 task(s)"));
        assert!(rendered.contains("[#1] task 1"));
        assert!(rendered.contains("HIGH"));
    }

    #[test]
    fn test_export_toml_round_trips_fields() {
        let tasks = vec![
            task(1, Priority::High, "2025-01-01"),
            task(2, Priority::Low, "2025-06-30"),
        ];
        let rendered = export_toml(&tasks).unwrap();
        assert!(rendered.contains("[[task]]"));
        assert!(rendered.contains("id = 1"));
        assert!(rendered.contains("priority = \"high\""));
        assert!(rendered.contains("due_date = \"2025-06-30\""));
    }

    #[test]
    fn test_format_operations_empty() {
        assert_eq!(format_operations(&[]), "No operations recorded");
    }
}
