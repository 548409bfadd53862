//! Task model
//!
//! A task is what gets ranked and persisted: a name, an integer priority
//! (lower = more important), the names of tasks it depends on, and an
//! optional due date. Dependencies are by name, not by reference - a
//! dependency may name a task that no longer exists, or never did.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A task - one unit of work to be ranked and eventually completed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Display name; also how other tasks' dependencies refer to this one
    pub name: String,

    /// Priority; lower value = more important
    pub priority: i32,

    /// Names of tasks this one depends on
    #[serde(default)]
    pub dependencies: Vec<String>,

    /// Optional due date; tasks without one sort after all dated tasks
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

impl Task {
    /// Create a task with no dependencies and no due date
    #[must_use]
    pub fn new(name: impl Into<String>, priority: i32) -> Self {
        Self {
            name: name.into(),
            priority,
            dependencies: Vec::new(),
            due_date: None,
        }
    }

    /// Create a task with all fields
    #[must_use]
    pub fn with_details(
        name: impl Into<String>,
        priority: i32,
        dependencies: Vec<String>,
        due_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            name: name.into(),
            priority,
            dependencies,
            due_date,
        }
    }

    /// Check the task may enter the store: the trimmed name must be non-empty
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// The due date used for ordering: the task's own, or the maximal
    /// sentinel when absent
    #[must_use]
    pub fn effective_due_date(&self) -> NaiveDate {
        self.due_date.unwrap_or(NaiveDate::MAX)
    }

    /// Whether every dependency is satisfied
    ///
    /// A dependency is satisfied once no task with that name remains in
    /// `all_tasks` - completed tasks and names that were never tracked both
    /// count. A task with no dependencies is always eligible.
    #[must_use]
    pub fn is_eligible(&self, all_tasks: &[Self]) -> bool {
        self.dependencies
            .iter()
            .all(|dep| !all_tasks.iter().any(|t| t.name == *dep))
    }
}
