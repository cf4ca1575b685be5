//! Interface to the remote task service.
//!
//! The engine owns no persistence and no transport. Whatever stores the
//! tasks (an HTTP service, a local database, a fixture in tests) plugs in
//! behind this trait; the board only needs to fetch the full collection and
//! submit single state changes.

use crate::error::ClientError;
use crate::types::{Task, TaskId, TaskState};
use async_trait::async_trait;

/// Remote source of truth for the task collection.
#[async_trait]
pub trait TaskClient: Send + Sync {
    /// Fetch the full current task collection.
    async fn fetch_tasks(&self) -> Result<Vec<Task>, ClientError>;

    /// Submit one task's state change, returning the authoritative updated
    /// task on success.
    async fn submit_state(&self, task_id: TaskId, state: TaskState) -> Result<Task, ClientError>;
}
