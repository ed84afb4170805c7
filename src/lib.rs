//! Taskstore Library
//!
//! This library provides a priority task tracker whose collection is held
//! in two synchronized data structures: an AVL tree indexing tasks by id,
//! and a binary max-heap ordering them by priority and due date. Every
//! write goes through [`TaskStore`], which updates both structures in the
//! same call; reads are answered by whichever structure is efficient for
//! the query.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **Presentation Layer**: the `taskstore` binary - interactive command
//!   loop, rendering via the `formatting` module
//! - **Domain Layer**: `tasks` module - the task record, both data
//!   structures, the coordinating store, and reporting queries
//! - **Input Boundary**: `validation` module - string-level parsing of
//!   priorities, dates, and descriptions
//!
//! # Example
//!
//! ```
//! use taskstore::{Priority, TaskStore};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let mut store = TaskStore::new();
//!     store.add("ship release", Priority::High, "2025-09-15".parse()?)?;
//!     store.add("tidy backlog", Priority::Low, "2025-09-01".parse()?)?;
//!
//!     let next = store.peek_highest_priority().map(|t| t.description);
//!     assert_eq!(next.as_deref(), Some("ship release"));
//!     Ok(())
//! }
//! ```

mod tasks;

pub mod formatting;
pub mod validation;

// Re-export commonly used types
pub use tasks::{
    AvlTree, Priority, Statistics, Task, TaskHeap, TaskStore, Traversals, TreeOp, TreeStats,
    local_date_today,
};
