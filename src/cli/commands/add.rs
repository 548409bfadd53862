//! Add command - create a task

use std::path::Path;

use chrono::NaiveDate;

use nextup::models::Task;
use nextup::output::OutputMode;
use nextup::storage::TaskStore;

/// Add a task to the store
pub fn add(
    file: &Path,
    name: &str,
    priority: i32,
    depends_on: Vec<String>,
    due: Option<NaiveDate>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let name = name.trim();
    let mut store = TaskStore::open(file)?;
    store.add(Task::with_details(name, priority, normalize_deps(&depends_on), due))?;

    if mode == OutputMode::Json {
        println!(
            "{}",
            serde_json::json!({
                "success": true,
                "name": name,
                "priority": priority,
                "due_date": due.map(|d| d.to_string()),
            })
        );
    } else {
        println!("Added task: {name}");
        println!("  Priority: {priority}");
        if let Some(due) = due {
            println!("  Due:      {due}");
        }
    }

    Ok(())
}

/// Trim dependency names and drop empties
fn normalize_deps(deps: &[String]) -> Vec<String> {
    deps.iter()
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
        .collect()
}
