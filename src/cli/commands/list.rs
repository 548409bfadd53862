//! List command - show tasks sorted

use std::path::Path;

use anyhow::anyhow;

use nextup::config::Config;
use nextup::ordering::SortOrder;
use nextup::output::{OutputMode, TaskInfo, TaskListResult};
use nextup::storage::TaskStore;

/// List tasks sorted by the requested criterion
///
/// An explicit `--order` must parse; with no flag, the config default
/// applies (falling back to priority if the config value is unrecognized).
pub fn list(file: &Path, order: Option<&str>, config: &Config, mode: OutputMode) -> anyhow::Result<()> {
    let order: SortOrder = match order {
        Some(s) => s.parse().map_err(|e: String| anyhow!(e))?,
        None => config.display.order.parse().unwrap_or_default(),
    };

    let store = TaskStore::open(file)?;
    let tasks: Vec<TaskInfo> = store
        .list(order)
        .into_iter()
        .map(|t| TaskInfo::for_task(t, store.tasks()))
        .collect();

    let result = TaskListResult {
        order: order.to_string(),
        total: tasks.len(),
        tasks,
    };

    result.render(mode);
    Ok(())
}
