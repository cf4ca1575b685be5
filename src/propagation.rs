//! Cascading state propagation through the dependency graph.
//!
//! A state change on one task can flip the derived blocked/unblocked status
//! of everything downstream of it. This module applies one such change and
//! walks the forward edges once, producing a new collection whose stored
//! states agree with their dependency situation.

use crate::graph::{build_dependency_graph, build_task_map, downstream};
use crate::readiness::is_blocked;
use crate::types::{DependencyGraph, Task, TaskId, TaskMap, TaskState};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Apply `new_state` to `task_id` and cascade automatic blocked/unblocked
/// transitions to all transitively downstream tasks.
///
/// Pure: returns a new collection in the input's order, leaving the input
/// untouched. An id absent from the collection is a no-op and returns the
/// input unchanged. Automatic transitions only ever set `Blocked` (when a
/// blocker became unfinished) or `Todo` (when the last unfinished blocker
/// completed); a task is never auto-advanced to `InProgress` or `Done`.
///
/// Single pass, O(n + e): each task is entered at most once per call, and a
/// downstream task whose stored state already matches its derived readiness
/// ends the cascade along that branch. Precondition: the blocker relation is
/// acyclic (`validate::validate_for_ingest`). On cyclic data the visited set
/// still guarantees termination, but nodes on the cycle may be left short of
/// their true fixed point.
pub fn propagate_state_change(task_id: TaskId, new_state: TaskState, tasks: &[Task]) -> Vec<Task> {
    let Some(position) = tasks.iter().position(|t| t.id == task_id) else {
        return tasks.to_vec();
    };

    // Topology never changes mid-propagation; edges come from the input's
    // blocker structure.
    let graph = build_dependency_graph(tasks);

    let mut updated: Vec<Task> = tasks.to_vec();
    updated[position].state = new_state;

    let map = build_task_map(&updated);
    let index: HashMap<TaskId, usize> = updated
        .iter()
        .enumerate()
        .map(|(i, t)| (t.id, i))
        .collect();

    let mut cascade = Cascade {
        graph: &graph,
        index: &index,
        tasks: &mut updated,
        map,
        visited: HashSet::new(),
    };
    cascade.run(task_id);

    updated
}

/// One propagation pass: the working collection plus the bookkeeping that
/// keeps it consistent while the walk mutates states.
struct Cascade<'a> {
    graph: &'a DependencyGraph,
    index: &'a HashMap<TaskId, usize>,
    tasks: &'a mut Vec<Task>,
    map: TaskMap,
    visited: HashSet<TaskId>,
}

impl Cascade<'_> {
    fn run(&mut self, current: TaskId) {
        // Sole termination guard; entered nodes are never re-entered even
        // when their state did not change.
        if !self.visited.insert(current) {
            return;
        }

        let graph = self.graph;
        for &downstream_id in downstream(current, graph) {
            let (currently, should_block) = match self.map.get(&downstream_id) {
                Some(task) => (task.state, is_blocked(task, &self.map)),
                None => continue,
            };

            let transition = if should_block && currently != TaskState::Blocked {
                Some(TaskState::Blocked)
            } else if !should_block && currently == TaskState::Blocked {
                Some(TaskState::Todo)
            } else {
                // Stored state already matches derived readiness; nothing
                // changed here, so nothing downstream needs re-evaluation
                // from this cause.
                None
            };

            if let Some(next_state) = transition {
                debug!(task_id = downstream_id, from = %currently, to = %next_state, "cascade transition");
                self.set_state(downstream_id, next_state);
                self.run(downstream_id);
            }
        }
    }

    fn set_state(&mut self, task_id: TaskId, state: TaskState) {
        if let Some(&i) = self.index.get(&task_id) {
            self.tasks[i].state = state;
        }
        if let Some(task) = self.map.get_mut(&task_id) {
            task.state = state;
        }
    }
}
