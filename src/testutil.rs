//! Shared fixtures for unit tests.

use crate::types::{Task, TaskId, TaskState};
use chrono::Utc;

/// Minimal valid task with the given blockers.
pub(crate) fn task(id: TaskId, state: TaskState, blockers: &[TaskId]) -> Task {
    let now = Utc::now();
    Task {
        id,
        title: format!("Task {}", id),
        description: String::new(),
        state,
        blockers: blockers.to_vec(),
        dependents: Vec::new(),
        due_date: None,
        completed_at: None,
        created_at: now,
        updated_at: now,
    }
}
