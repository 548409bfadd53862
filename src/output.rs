//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

use crate::models::Task;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// One task as shown to the user
#[derive(Debug, Serialize)]
pub struct TaskInfo {
    /// Task name
    pub name: String,
    /// Priority (lower = more important)
    pub priority: i32,
    /// Due date in ISO form, if any
    pub due_date: Option<String>,
    /// Names of tasks this one depends on
    pub dependencies: Vec<String>,
    /// Whether the task is currently eligible to be worked on
    pub eligible: bool,
}

impl TaskInfo {
    /// Build display info for `task`, deciding eligibility against the
    /// whole store
    #[must_use]
    pub fn for_task(task: &Task, all_tasks: &[Task]) -> Self {
        Self {
            name: task.name.clone(),
            priority: task.priority,
            due_date: task.due_date.map(|d| d.to_string()),
            dependencies: task.dependencies.clone(),
            eligible: task.is_eligible(all_tasks),
        }
    }
}

/// Result of a list operation
#[derive(Debug, Serialize)]
pub struct TaskListResult {
    /// Sort criterion used
    pub order: String,
    /// Number of tasks listed
    pub total: usize,
    /// The tasks, already sorted
    pub tasks: Vec<TaskInfo>,
}

/// Result of a next-task query
#[derive(Debug, Serialize)]
pub struct NextTaskResult {
    /// Whether any task is eligible
    pub found: bool,
    /// The next eligible task, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<TaskInfo>,
}

impl TaskListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.tasks.is_empty() {
            println!("No tasks.");
            return;
        }

        println!("{} task(s), sorted by {}:\n", self.total, self.order);
        for t in &self.tasks {
            print!("  [{}] {}", t.priority, t.name);
            if let Some(due) = &t.due_date {
                print!("  due {due}");
            }
            if !t.dependencies.is_empty() {
                print!("  depends on: {}", t.dependencies.join(", "));
            }
            if !t.eligible {
                print!("  (blocked)");
            }
            println!();
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl NextTaskResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        match &self.task {
            Some(t) => {
                print!("Next up: {} (priority {}", t.name, t.priority);
                if let Some(due) = &t.due_date {
                    print!(", due {due}");
                }
                println!(")");
            },
            None => println!("No eligible task: the list is empty or everything is blocked."),
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
