//! Task domain module.
//!
//! This module contains the backlog's task-related domain models, the task
//! identifier allocator, the text-to-task extraction heuristic, and the
//! backlog repository trait.
//!
//! # Module Structure
//!
//! - `model`: Core task domain models (`Task`, `Backlog`, dependency refs)
//! - `id`: Sequential `TXXXX` identifier allocation and detection
//! - `extract`: Line-prefix text extraction producing draft tasks
//! - `repository`: Backlog repository trait for persistence

pub mod extract;
pub mod id;
mod model;
pub mod repository;

// Re-export public API
pub use model::{
    Backlog, DependencyRef, HumanDependency, Task, TaskDependencies, DEFAULT_TASK_KIND,
    STATUS_DONE, STATUS_IN_PROGRESS, STATUS_OPEN, STATUS_TODO,
};

pub use repository::BacklogRepository;
