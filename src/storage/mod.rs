//! Storage for tasks
//!
//! A single JSON file holds the whole task list; every mutation rewrites
//! it in full. There is no locking and no partial-write protection - the
//! file is owned by one process at a time.

pub mod task;

pub use task::{DEFAULT_TASKS_FILE, StoreError, TaskStore};
