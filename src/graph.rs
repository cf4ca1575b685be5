//! Task map and dependency graph construction.
//!
//! `blockers` lists are the system of record. The forward edge set
//! ("this task unblocks these others") is always rebuilt from them here;
//! the stored `dependents` field on each task is never consulted.

use crate::types::{DependencyGraph, Task, TaskId, TaskMap};

/// Index a task collection by id. O(n).
///
/// Duplicate ids resolve last-write-wins; `validate::validate_for_ingest`
/// is where duplicates are rejected.
pub fn build_task_map(tasks: &[Task]) -> TaskMap {
    tasks.iter().map(|t| (t.id, t.clone())).collect()
}

/// Build the forward edge set from blocker lists. O(n + e).
///
/// Every input task id gets an entry, possibly empty. Blocker ids that do
/// not name a task in the collection contribute no edge.
pub fn build_dependency_graph(tasks: &[Task]) -> DependencyGraph {
    let mut graph: DependencyGraph = tasks.iter().map(|t| (t.id, Vec::new())).collect();

    for task in tasks {
        for &blocker_id in &task.blockers {
            if let Some(dependents) = graph.get_mut(&blocker_id) {
                dependents.push(task.id);
            }
        }
    }

    graph
}

/// Ids of the tasks that list `task_id` as a blocker.
pub fn downstream(task_id: TaskId, graph: &DependencyGraph) -> &[TaskId] {
    graph.get(&task_id).map(Vec::as_slice).unwrap_or(&[])
}
