//! Next command - show the next eligible task

use std::path::Path;

use nextup::output::{NextTaskResult, OutputMode, TaskInfo};
use nextup::storage::TaskStore;

/// Show the first task in ranking order whose dependencies are satisfied
pub fn next(file: &Path, mode: OutputMode) -> anyhow::Result<()> {
    let store = TaskStore::open(file)?;
    let task = store.next_eligible();

    let result = NextTaskResult {
        found: task.is_some(),
        task: task.map(|t| TaskInfo::for_task(t, store.tasks())),
    };

    result.render(mode);
    Ok(())
}
