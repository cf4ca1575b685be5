//! Core types for the dependency-aware task engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Stable integer task identifier.
pub type TaskId = i64;

/// Lifecycle state of a task.
///
/// `Blocked` is derived: the engine assigns it when a blocker is unfinished
/// and clears it back to `Todo` when every blocker completes. Callers never
/// set it directly (see `validate::can_transition_to`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskState {
    Backlog,
    Todo,
    InProgress,
    Done,
    Blocked,
}

impl TaskState {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskState::Backlog => "BACKLOG",
            TaskState::Todo => "TODO",
            TaskState::InProgress => "IN_PROGRESS",
            TaskState::Done => "DONE",
            TaskState::Blocked => "BLOCKED",
        }
    }
}

impl std::str::FromStr for TaskState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "BACKLOG" => Ok(TaskState::Backlog),
            "TODO" => Ok(TaskState::Todo),
            "IN_PROGRESS" => Ok(TaskState::InProgress),
            "DONE" => Ok(TaskState::Done),
            "BLOCKED" => Ok(TaskState::Blocked),
            other => Err(format!("unknown task state: {}", other)),
        }
    }
}

impl std::fmt::Display for TaskState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A task in the dependency graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub state: TaskState,

    /// Tasks that must reach `Done` before this one is actionable.
    /// System of record for the dependency graph.
    #[serde(default)]
    pub blockers: Vec<TaskId>,

    /// Reverse edges as stored by the service. Redundant with `blockers`
    /// and possibly stale; the engine recomputes forward edges from
    /// `blockers` and never reads this field.
    #[serde(default)]
    pub dependents: Vec<TaskId>,

    pub due_date: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Id-indexed view of a task collection.
pub type TaskMap = HashMap<TaskId, Task>;

/// Forward edges: blocker id -> ids of the tasks it unblocks.
pub type DependencyGraph = HashMap<TaskId, Vec<TaskId>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_round_trips_through_wire_form() {
        for state in [
            TaskState::Backlog,
            TaskState::Todo,
            TaskState::InProgress,
            TaskState::Done,
            TaskState::Blocked,
        ] {
            let parsed: TaskState = state.as_str().parse().unwrap();
            assert_eq!(parsed, state);
        }
    }

    #[test]
    fn state_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&TaskState::InProgress).unwrap();
        assert_eq!(json, "\"IN_PROGRESS\"");
    }

    #[test]
    fn from_str_rejects_unknown_state() {
        assert!("WAITING".parse::<TaskState>().is_err());
    }
}
