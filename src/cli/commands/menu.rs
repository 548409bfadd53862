//! Interactive menu - the numbered shell over the task store
//!
//! Runs when the binary is invoked without a subcommand. Parse failures
//! abort the single operation with a message and return to the menu; the
//! store is only touched with valid input.

use std::io::{self, BufRead, Write};
use std::path::Path;

use chrono::NaiveDate;

use nextup::models::Task;
use nextup::ordering::SortOrder;
use nextup::output::{NextTaskResult, OutputMode, TaskInfo, TaskListResult};
use nextup::storage::{StoreError, TaskStore};

/// Run the interactive menu loop until the user exits
pub fn menu(file: &Path) -> anyhow::Result<()> {
    let mut store = TaskStore::open(file)?;
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        println!();
        println!("--- TASK MANAGER ---");
        println!("1. Add task");
        println!("2. List tasks");
        println!("3. Complete task");
        println!("4. Next eligible task");
        println!("5. Exit");

        let Some(choice) = prompt(&mut input, "Choose an option: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => add_task(&mut input, &mut store)?,
            "2" => list_tasks(&mut input, &store)?,
            "3" => complete_task(&mut input, &mut store)?,
            "4" => show_next(&store),
            "5" => break,
            _ => println!("Invalid option."),
        }
    }

    Ok(())
}

/// Print a prompt and read one trimmed line; `None` on end of input
fn prompt(input: &mut impl BufRead, label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn add_task(input: &mut impl BufRead, store: &mut TaskStore) -> anyhow::Result<()> {
    let Some(name) = prompt(input, "Task name: ")? else {
        return Ok(());
    };

    let Some(priority_raw) = prompt(input, "Priority (integer, lower = more important): ")? else {
        return Ok(());
    };
    let Ok(priority) = priority_raw.parse::<i32>() else {
        println!("Invalid priority.");
        return Ok(());
    };

    let Some(deps_raw) = prompt(input, "Dependencies (comma-separated, empty for none): ")? else {
        return Ok(());
    };
    let dependencies: Vec<String> = deps_raw
        .split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(String::from)
        .collect();

    let Some(due_raw) = prompt(input, "Due date (YYYY-MM-DD, empty for none): ")? else {
        return Ok(());
    };
    let due_date = if due_raw.is_empty() {
        None
    } else {
        match NaiveDate::parse_from_str(&due_raw, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                println!("Invalid date format.");
                return Ok(());
            },
        }
    };

    match store.add(Task::with_details(name, priority, dependencies, due_date)) {
        Ok(()) => println!("Task added."),
        Err(StoreError::InvalidTask) => println!("Invalid task: name must not be empty."),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

fn list_tasks(input: &mut impl BufRead, store: &TaskStore) -> anyhow::Result<()> {
    let Some(order_raw) = prompt(input, "Sort by (priority/date): ")? else {
        return Ok(());
    };
    // Unrecognized criterion falls back to priority
    let order: SortOrder = order_raw.parse().unwrap_or_default();

    let tasks: Vec<TaskInfo> = store
        .list(order)
        .into_iter()
        .map(|t| TaskInfo::for_task(t, store.tasks()))
        .collect();

    TaskListResult {
        order: order.to_string(),
        total: tasks.len(),
        tasks,
    }
    .render(OutputMode::Human);
    Ok(())
}

fn complete_task(input: &mut impl BufRead, store: &mut TaskStore) -> anyhow::Result<()> {
    let Some(name) = prompt(input, "Task name to complete: ")? else {
        return Ok(());
    };

    let removed = store.complete(&name)?;
    if removed > 0 {
        println!("Task '{name}' completed.");
    } else {
        println!("Task not found.");
    }
    Ok(())
}

fn show_next(store: &TaskStore) {
    let task = store.next_eligible();
    NextTaskResult {
        found: task.is_some(),
        task: task.map(|t| TaskInfo::for_task(t, store.tasks())),
    }
    .render(OutputMode::Human);
}
