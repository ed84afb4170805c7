use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Task priority level
///
/// The numeric values (1-3) define the primary sort key for the priority
/// queue: a higher value always outranks a lower one. The derived `Ord`
/// follows the declaration order, so `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can wait (value 1)
    Low = 1,
    /// Normal urgency (value 2)
    Medium = 2,
    /// Do first (value 3)
    High = 3,
}

impl Priority {
    /// Numeric priority value (1 = low, 2 = medium, 3 = high)
    pub fn value(self) -> u8 {
        self as u8
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(format!(
                "Invalid priority '{}'. Valid options are: low, medium, high",
                s
            )),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
        };
        write!(f, "{}", name)
    }
}

/// A single task in the store
///
/// Tasks are identified by a numeric `id` assigned by [`TaskStore`] from a
/// monotonically increasing counter; ids are never reused, even after the
/// task is deleted. All other fields are set once at creation and only
/// change through a full replace (insert with an existing id).
///
/// [`TaskStore`]: crate::TaskStore
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, assigned by the store
    pub id: u32,
    /// Non-empty description of the work
    pub description: String,
    /// Priority level (primary queue ordering)
    pub priority: Priority,
    /// Due date (secondary queue ordering; earlier dates rank higher)
    pub due_date: NaiveDate,
    /// Date the task was created (informational only)
    pub created_at: NaiveDate,
}

impl Task {
    /// Create a new task dated today
    pub fn new(id: u32, description: String, priority: Priority, due_date: NaiveDate) -> Self {
        Self {
            id,
            description,
            priority,
            due_date,
            created_at: local_date_today(),
        }
    }

    /// Composite ranking used by the priority queue
    ///
    /// Returns true if this task ranks strictly above `other`: higher
    /// priority wins, and within the same priority the earlier due date
    /// wins. Tasks with equal priority and equal due date do not outrank
    /// each other in either direction.
    pub fn outranks(&self, other: &Task) -> bool {
        match self.priority.cmp(&other.priority) {
            Ordering::Equal => self.due_date < other.due_date,
            ordering => ordering == Ordering::Greater,
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[#{}] {} | priority: {} | due: {}",
            self.id, self.description, self.priority, self.due_date
        )
    }
}
