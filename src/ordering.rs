//! Task ordering
//!
//! Derives the composite key that gives tasks a total order: priority
//! first, then effective due date, then name. The same key drives the
//! store's internal order, the default listing, and next-task selection.

use chrono::NaiveDate;

use crate::models::Task;

/// Composite sort key for a task
///
/// Field order is the comparison order: priority, then effective due date
/// (undated tasks carry the maximal sentinel), then name as the final
/// deterministic tiebreak.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct OrderingKey {
    /// Task priority; lower = more important
    pub priority: i32,

    /// Effective due date (sentinel when the task has none)
    pub due_date: NaiveDate,

    /// Task name
    pub name: String,
}

impl OrderingKey {
    /// Derive the key for a task
    #[must_use]
    pub fn of(task: &Task) -> Self {
        Self {
            priority: task.priority,
            due_date: task.effective_due_date(),
            name: task.name.clone(),
        }
    }
}

/// Sort criterion for listing tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Sort by (priority, effective due date)
    #[default]
    Priority,
    /// Sort by (effective due date, priority)
    Date,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Priority => write!(f, "priority"),
            Self::Date => write!(f, "date"),
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "priority" | "prio" | "p" => Ok(Self::Priority),
            "date" | "due" | "d" => Ok(Self::Date),
            _ => Err(format!("Invalid sort order: {s}. Use: priority, date")),
        }
    }
}
