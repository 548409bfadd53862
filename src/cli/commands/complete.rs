//! Complete command - remove every task with a given name

use std::path::Path;

use nextup::output::OutputMode;
use nextup::storage::TaskStore;

/// Complete (remove) all tasks named `name`
pub fn complete(file: &Path, name: &str, mode: OutputMode) -> anyhow::Result<()> {
    let name = name.trim();
    let mut store = TaskStore::open(file)?;
    let removed = store.complete(name)?;

    if mode == OutputMode::Json {
        println!(
            "{}",
            serde_json::json!({
                "success": removed > 0,
                "name": name,
                "removed": removed,
            })
        );
    } else if removed > 0 {
        println!("Completed: {name} ({removed} task(s) removed)");
    } else {
        println!("Task not found: {name}");
    }

    Ok(())
}
