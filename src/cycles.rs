//! Cycle detection over the blocker relation.
//!
//! Propagation assumes the blocker relation is a DAG; its visited set keeps
//! it from looping on cyclic data but cannot make the results meaningful.
//! Callers run this check at ingestion time (see `validate::validate_for_ingest`)
//! rather than on every propagation.

use crate::graph::build_task_map;
use crate::types::{Task, TaskId, TaskMap};
use std::collections::HashSet;

/// True iff the `blockers` relation contains a directed cycle.
///
/// Three-color depth-first search: unvisited, on the current path, finished.
/// An edge reaching a node on the current path closes a cycle. Blocker ids
/// that resolve to no task are dead ends, not cycles. Empty input is acyclic.
pub fn has_cycle(tasks: &[Task]) -> bool {
    let map = build_task_map(tasks);
    let mut visited: HashSet<TaskId> = HashSet::new();
    let mut on_path: HashSet<TaskId> = HashSet::new();

    for task in tasks {
        if !visited.contains(&task.id) && dfs(task.id, &map, &mut visited, &mut on_path) {
            return true;
        }
    }

    false
}

fn dfs(
    task_id: TaskId,
    map: &TaskMap,
    visited: &mut HashSet<TaskId>,
    on_path: &mut HashSet<TaskId>,
) -> bool {
    visited.insert(task_id);
    on_path.insert(task_id);

    if let Some(task) = map.get(&task_id) {
        for &blocker_id in &task.blockers {
            if !visited.contains(&blocker_id) {
                if dfs(blocker_id, map, visited, on_path) {
                    return true;
                }
            } else if on_path.contains(&blocker_id) {
                return true;
            }
        }
    }

    on_path.remove(&task_id);
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::task;
    use crate::types::TaskState;

    #[test]
    fn empty_collection_has_no_cycle() {
        assert!(!has_cycle(&[]));
    }

    #[test]
    fn linear_chain_has_no_cycle() {
        let tasks = vec![
            task(1, TaskState::Done, &[]),
            task(2, TaskState::Todo, &[1]),
            task(3, TaskState::Todo, &[2]),
        ];
        assert!(!has_cycle(&tasks));
    }

    #[test]
    fn diamond_is_acyclic() {
        let tasks = vec![
            task(1, TaskState::Todo, &[]),
            task(2, TaskState::Todo, &[1]),
            task(3, TaskState::Todo, &[1]),
            task(4, TaskState::Todo, &[2, 3]),
        ];
        assert!(!has_cycle(&tasks));
    }

    #[test]
    fn two_node_cycle_is_detected() {
        let tasks = vec![task(1, TaskState::Todo, &[2]), task(2, TaskState::Todo, &[1])];
        assert!(has_cycle(&tasks));
    }

    #[test]
    fn longer_cycle_behind_a_chain_is_detected() {
        let tasks = vec![
            task(1, TaskState::Todo, &[]),
            task(2, TaskState::Todo, &[1, 5]),
            task(3, TaskState::Todo, &[2]),
            task(4, TaskState::Todo, &[3]),
            task(5, TaskState::Todo, &[4]),
        ];
        assert!(has_cycle(&tasks));
    }

    #[test]
    fn self_loop_is_a_cycle() {
        let tasks = vec![task(1, TaskState::Todo, &[1])];
        assert!(has_cycle(&tasks));
    }

    #[test]
    fn dangling_blocker_is_not_a_cycle() {
        let tasks = vec![task(1, TaskState::Todo, &[99])];
        assert!(!has_cycle(&tasks));
    }
}
