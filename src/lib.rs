//! nextup - A CLI personal task manager with priority ordering and
//! dependency-aware next-task selection
//!
//! This library provides the core functionality: the task model, the
//! ordering key that ranks tasks, and the file-backed task store that
//! answers the "what should I work on next?" question.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod models;
pub mod ordering;
pub mod output;
pub mod storage;
