//! Task store
//!
//! Holds the live task list in memory, sorted by [`OrderingKey`], and
//! mirrors it to a JSON file after every successful mutation. The file is
//! rewritten whole; there is no incremental update.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use crate::models::Task;
use crate::ordering::{OrderingKey, SortOrder};

/// Default task file name, used when neither flag nor config names one
pub const DEFAULT_TASKS_FILE: &str = "tasks.json";

/// Errors from task store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// Task failed validation and was not added
    #[error("invalid task: name must not be empty")]
    InvalidTask,

    /// IO error reading or writing the task file
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Task file exists but does not parse as a task list
    #[error("malformed task file: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// File-backed task store
///
/// Tasks are kept sorted by [`OrderingKey`] at all times: inserts go in at
/// the key's sort position and removals preserve the remaining order.
/// Names are not unique - several tasks may share one.
#[derive(Debug)]
pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Open the store at `path`, loading tasks if the file exists
    ///
    /// A missing file yields an empty store. File contents are trusted:
    /// records are not re-validated on load.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let mut tasks: Vec<Task> = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            Vec::new()
        };
        tasks.sort_by_cached_key(OrderingKey::of);
        debug!("loaded {} task(s) from {}", tasks.len(), path.display());
        Ok(Self { path, tasks })
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All tasks, in ordering-key order
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks in the store
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the store holds no tasks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Add a task and persist the store
    ///
    /// Fails with [`StoreError::InvalidTask`] before touching memory or
    /// disk if the task does not validate. No duplicate-name check is made.
    pub fn add(&mut self, task: Task) -> Result<(), StoreError> {
        if !task.is_valid() {
            return Err(StoreError::InvalidTask);
        }
        let key = OrderingKey::of(&task);
        let pos = self.tasks.partition_point(|t| OrderingKey::of(t) <= key);
        self.tasks.insert(pos, task);
        self.save()
    }

    /// List tasks sorted by the requested criterion; does not mutate
    #[must_use]
    pub fn list(&self, order: SortOrder) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self.tasks.iter().collect();
        match order {
            // Internal order already is (priority, due date, name)
            SortOrder::Priority => {},
            SortOrder::Date => tasks.sort_by(|a, b| {
                (a.effective_due_date(), a.priority, a.name.as_str())
                    .cmp(&(b.effective_due_date(), b.priority, b.name.as_str()))
            }),
        }
        tasks
    }

    /// Remove every task named `name` and persist; returns the removed count
    ///
    /// A count of zero means nothing matched; the store and the file are
    /// left untouched.
    pub fn complete(&mut self, name: &str) -> Result<usize, StoreError> {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.name != name);
        let removed = before - self.tasks.len();
        if removed > 0 {
            self.save()?;
        }
        Ok(removed)
    }

    /// First task in ordering-key order whose dependencies are all satisfied
    ///
    /// A dependency is satisfied once no task with that name remains in the
    /// store - completed tasks and names that were never tracked both count.
    #[must_use]
    pub fn next_eligible(&self) -> Option<&Task> {
        self.tasks.iter().find(|t| t.is_eligible(&self.tasks))
    }

    /// Rewrite the backing file with the current task list
    fn save(&self) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(&self.tasks)?;
        fs::write(&self.path, content)?;
        debug!("saved {} task(s) to {}", self.tasks.len(), self.path.display());
        Ok(())
    }
}
