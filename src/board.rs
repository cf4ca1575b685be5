//! Snapshot coordinator over a `TaskClient`.
//!
//! Holds the authoritative task collection in an `ArcSwap` so readers grab
//! a consistent snapshot without locking, and every propagation result is
//! published atomically: no reader ever observes a half-cascaded collection.
//!
//! State changes are applied optimistically. The propagated collection is
//! published first, then the originating change is submitted to the remote
//! service; if the service refuses, the previous snapshot is swapped back.
//! Propagation is pure, so the rollback is just restoring the old `Arc`.

use crate::client::TaskClient;
use crate::error::UpdateError;
use crate::graph::build_task_map;
use crate::propagation::propagate_state_change;
use crate::types::{Task, TaskId, TaskState};
use crate::validate::can_transition_to;
use arc_swap::ArcSwap;
use std::sync::Arc;
use tracing::{info, warn};

pub struct TaskBoard<C> {
    client: C,
    snapshot: ArcSwap<Vec<Task>>,
}

impl<C: TaskClient> TaskBoard<C> {
    /// Create a board with an empty snapshot; call `refresh` to populate it.
    pub fn new(client: C) -> Self {
        Self {
            client,
            snapshot: ArcSwap::from_pointee(Vec::new()),
        }
    }

    /// Current snapshot. Cheap; the returned `Arc` stays consistent even if
    /// the board publishes a newer collection afterwards.
    pub fn tasks(&self) -> Arc<Vec<Task>> {
        self.snapshot.load_full()
    }

    /// Replace the snapshot with the service's current collection.
    pub async fn refresh(&self) -> Result<(), UpdateError> {
        let tasks = self.client.fetch_tasks().await?;
        info!(count = tasks.len(), "refreshed task snapshot");
        self.snapshot.store(Arc::new(tasks));
        Ok(())
    }

    /// Validate, propagate, and submit a manual state change.
    ///
    /// The propagated collection is published before the remote submission
    /// so readers see the change immediately; a remote failure rolls the
    /// snapshot back to the pre-propagation collection and surfaces the
    /// client error.
    pub async fn update_task_state(
        &self,
        task_id: TaskId,
        state: TaskState,
    ) -> Result<(), UpdateError> {
        let previous = self.snapshot.load_full();

        let task = previous
            .iter()
            .find(|t| t.id == task_id)
            .ok_or(UpdateError::UnknownTask(task_id))?;

        let map = build_task_map(&previous);
        can_transition_to(task, state, &map)?;

        let propagated = propagate_state_change(task_id, state, &previous);
        info!(task_id, state = %state, "applying state change optimistically");
        self.snapshot.store(Arc::new(propagated));

        match self.client.submit_state(task_id, state).await {
            Ok(_) => {
                // Re-fetch so derived transitions the service computed on
                // its side replace our speculative ones.
                self.refresh().await
            }
            Err(err) => {
                warn!(task_id, error = %err, "remote submission failed, rolling back");
                self.snapshot.store(previous);
                Err(UpdateError::Client(err))
            }
        }
    }
}
