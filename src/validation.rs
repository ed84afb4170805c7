//! Validation helper functions for task input
//!
//! This module contains the input boundary: raw strings from the
//! presentation layer are parsed and validated here before they ever reach
//! the store. The store itself only re-checks the description; priority
//! and date arrive already typed.

use crate::tasks::Priority;
use anyhow::{Result, anyhow, bail};
use chrono::NaiveDate;

/// Parse and validate a priority name
///
/// # Arguments
/// * `priority_str` - Priority name, case-insensitive
///
/// # Returns
/// Result containing the parsed Priority or a descriptive error
pub fn parse_priority(priority_str: &str) -> Result<Priority> {
    priority_str
        .parse::<Priority>()
        .map_err(|message| anyhow!(message))
}

/// Parse and validate a due date
///
/// # Arguments
/// * `date_str` - Date string in YYYY-MM-DD format
///
/// # Returns
/// Result containing the parsed NaiveDate or a descriptive error
pub fn parse_due_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").map_err(|_| {
        anyhow!(
            "Invalid date format '{}'. Use YYYY-MM-DD (e.g., '2025-03-15')",
            date_str
        )
    })
}

/// Validate a task description
///
/// # Arguments
/// * `description` - Raw description text
///
/// # Returns
/// The trimmed description, or an error if nothing remains after trimming
pub fn validate_description(description: &str) -> Result<&str> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        bail!("Task description cannot be empty");
    }
    Ok(trimmed)
}
