//! Transition validation and collection consistency checks.

use crate::cycles::has_cycle;
use crate::error::IngestError;
use crate::readiness::is_actionable;
use crate::types::{Task, TaskId, TaskMap, TaskState};
use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

/// Reason a manual state change was refused.
///
/// A stable enumerated set: callers branch on the variant, the `Display`
/// text is for presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransitionDenied {
    #[error("tasks enter the blocked state automatically when blockers are unfinished")]
    BlockedIsAutomatic,

    #[error("blocked tasks cannot be edited until their blockers complete")]
    TaskBlocked,

    #[error("task has incomplete blockers and cannot be modified")]
    UnmetDependencies,
}

/// Decide whether a caller-requested state change is permitted.
///
/// Checks run in a fixed order: the target may not be `Blocked` (that state
/// is engine-derived), a currently-blocked task accepts no edits, and the
/// task must be actionable. Advisory only — an approved change is applied
/// through `propagation::propagate_state_change`.
pub fn can_transition_to(
    task: &Task,
    target: TaskState,
    map: &TaskMap,
) -> Result<(), TransitionDenied> {
    if target == TaskState::Blocked {
        return Err(TransitionDenied::BlockedIsAutomatic);
    }

    if task.state == TaskState::Blocked {
        return Err(TransitionDenied::TaskBlocked);
    }

    if !is_actionable(task, map) {
        return Err(TransitionDenied::UnmetDependencies);
    }

    Ok(())
}

/// A data defect found by `check_consistency`.
///
/// Defects, not errors: the engine tolerates both (dangling blockers are
/// ignored by graph edges, `Done` state is never revoked), but a reporting
/// pass lets callers surface them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ConsistencyIssue {
    /// A blocker id that names no task in the collection.
    UnknownBlocker { task: TaskId, blocker: TaskId },

    /// A `Done` task with blockers that are not themselves `Done`.
    DoneWithUnfinishedBlockers { task: TaskId, blockers: Vec<TaskId> },
}

impl std::fmt::Display for ConsistencyIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConsistencyIssue::UnknownBlocker { task, blocker } => {
                write!(f, "task {} depends on non-existent task {}", task, blocker)
            }
            ConsistencyIssue::DoneWithUnfinishedBlockers { task, blockers } => {
                let ids: Vec<String> = blockers.iter().map(|b| b.to_string()).collect();
                write!(
                    f,
                    "task {} is done but has unfinished blockers: {}",
                    task,
                    ids.join(", ")
                )
            }
        }
    }
}

/// Enumerate referential defects in a task collection.
pub fn check_consistency(tasks: &[Task]) -> Vec<ConsistencyIssue> {
    let map = crate::graph::build_task_map(tasks);
    let mut issues = Vec::new();

    for task in tasks {
        for &blocker_id in &task.blockers {
            if !map.contains_key(&blocker_id) {
                issues.push(ConsistencyIssue::UnknownBlocker {
                    task: task.id,
                    blocker: blocker_id,
                });
            }
        }

        if task.state == TaskState::Done {
            let unfinished: Vec<TaskId> = task
                .blockers
                .iter()
                .copied()
                .filter(|id| map.get(id).is_some_and(|dep| dep.state != TaskState::Done))
                .collect();

            if !unfinished.is_empty() {
                issues.push(ConsistencyIssue::DoneWithUnfinishedBlockers {
                    task: task.id,
                    blockers: unfinished,
                });
            }
        }
    }

    issues
}

/// Reject collections propagation cannot safely run over.
///
/// Duplicate ids would silently drop a task in map construction, a
/// self-blocker can never become actionable, and a cycle breaks the
/// fixed-point guarantee of the cascade. Dangling blocker references are
/// deliberately *not* rejected here; they are tolerated structurally and
/// reported by `check_consistency`.
pub fn validate_for_ingest(tasks: &[Task]) -> Result<(), IngestError> {
    let mut seen: HashSet<TaskId> = HashSet::new();
    for task in tasks {
        if !seen.insert(task.id) {
            return Err(IngestError::DuplicateId(task.id));
        }
        if task.blockers.contains(&task.id) {
            return Err(IngestError::SelfBlocker(task.id));
        }
    }

    if has_cycle(tasks) {
        return Err(IngestError::Cycle);
    }

    Ok(())
}
