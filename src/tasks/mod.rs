//! Task domain: the record entity, the two data structures, and the store
//!
//! This module contains the core collection and its implementations. It is
//! split into submodules for better organization:
//! - `task`: the task record and its composite priority ordering
//! - `avl`: self-balancing by-id index (AVL tree) with an operation log
//! - `heap`: binary max-heap priority queue
//! - `store`: the coordinator that keeps both structures in step
//! - `reports`: read-only statistics and diagnostic views

mod avl;
mod heap;
mod reports;
mod store;
mod task;

// Re-export all public types
pub use avl::{AvlTree, TreeOp};
pub use heap::TaskHeap;
pub use reports::{Statistics, Traversals, TreeStats};
pub use store::TaskStore;
pub use task::{Priority, Task, local_date_today};
