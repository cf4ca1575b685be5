//! Blocked/actionable predicates over a task and its map.
//!
//! The two predicates are deliberately asymmetric around unresolved blocker
//! ids: a blocker that names no task in the map never *blocks*, but it does
//! prevent *actionable* (it cannot be verified `Done`). A task with no
//! blockers is actionable and never blocked.

use crate::types::{Task, TaskMap, TaskState};

/// True iff some blocker resolves to a task that is not `Done`.
pub fn is_blocked(task: &Task, map: &TaskMap) -> bool {
    task.blockers
        .iter()
        .any(|id| map.get(id).is_some_and(|dep| dep.state != TaskState::Done))
}

/// True iff every blocker resolves to a task that is `Done`.
pub fn is_actionable(task: &Task, map: &TaskMap) -> bool {
    task.blockers
        .iter()
        .all(|id| map.get(id).is_some_and(|dep| dep.state == TaskState::Done))
}

/// The state a task's dependency situation implies for it.
///
/// `Blocked` while a blocker is unfinished; `Todo` when a currently-blocked
/// task has no unfinished blockers left; otherwise the stored state stands.
pub fn derived_state(task: &Task, map: &TaskMap) -> TaskState {
    if is_blocked(task, map) {
        TaskState::Blocked
    } else if task.state == TaskState::Blocked {
        TaskState::Todo
    } else {
        task.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_task_map;
    use crate::testutil::task;

    #[test]
    fn no_blockers_is_actionable_and_never_blocked() {
        let t = task(1, TaskState::Todo, &[]);
        let map = build_task_map(std::slice::from_ref(&t));
        assert!(!is_blocked(&t, &map));
        assert!(is_actionable(&t, &map));
    }

    #[test]
    fn unfinished_blocker_blocks() {
        let tasks = vec![task(1, TaskState::Todo, &[]), task(2, TaskState::Todo, &[1])];
        let map = build_task_map(&tasks);
        assert!(is_blocked(&tasks[1], &map));
        assert!(!is_actionable(&tasks[1], &map));
    }

    #[test]
    fn all_blockers_done_is_actionable() {
        let tasks = vec![task(1, TaskState::Done, &[]), task(2, TaskState::Todo, &[1])];
        let map = build_task_map(&tasks);
        assert!(!is_blocked(&tasks[1], &map));
        assert!(is_actionable(&tasks[1], &map));
    }

    #[test]
    fn one_unfinished_blocker_among_done_blocks() {
        let tasks = vec![
            task(1, TaskState::Done, &[]),
            task(2, TaskState::InProgress, &[]),
            task(3, TaskState::Todo, &[1, 2]),
        ];
        let map = build_task_map(&tasks);
        assert!(is_blocked(&tasks[2], &map));
        assert!(!is_actionable(&tasks[2], &map));
    }

    // The unresolved-blocker asymmetry: a dangling id neither blocks
    // nor allows actionability.
    #[test]
    fn unresolved_blocker_does_not_block_but_prevents_actionable() {
        let t = task(1, TaskState::Todo, &[99]);
        let map = build_task_map(std::slice::from_ref(&t));
        assert!(!is_blocked(&t, &map));
        assert!(!is_actionable(&t, &map));
    }

    #[test]
    fn derived_state_blocks_and_unblocks() {
        let tasks = vec![
            task(1, TaskState::Todo, &[]),
            task(2, TaskState::Todo, &[1]),
        ];
        let map = build_task_map(&tasks);
        assert_eq!(derived_state(&tasks[1], &map), TaskState::Blocked);

        let tasks = vec![
            task(1, TaskState::Done, &[]),
            task(2, TaskState::Blocked, &[1]),
        ];
        let map = build_task_map(&tasks);
        assert_eq!(derived_state(&tasks[1], &map), TaskState::Todo);
    }

    #[test]
    fn derived_state_preserves_consistent_states() {
        let tasks = vec![
            task(1, TaskState::Done, &[]),
            task(2, TaskState::InProgress, &[1]),
        ];
        let map = build_task_map(&tasks);
        assert_eq!(derived_state(&tasks[1], &map), TaskState::InProgress);
    }
}
