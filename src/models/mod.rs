//! Data models for nextup
//!
//! One core abstraction: [`Task`] - a named unit of work with a priority,
//! an optional due date, and the names of tasks it depends on.

pub mod task;

pub use task::Task;
