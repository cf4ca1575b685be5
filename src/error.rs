//! Error types crossing the crate boundary.
//!
//! The engine itself never fails: predicates return booleans, validation
//! returns reason codes, and propagating a missing id is a no-op. Errors
//! only arise at the edges — the remote client, snapshot files, and the
//! ingestion guard.

use crate::types::TaskId;
use crate::validate::TransitionDenied;
use thiserror::Error;

/// Failure talking to the remote task service.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("task service unavailable: {0}")]
    Unavailable(String),

    /// The service refused the change (e.g. its own validation fired).
    #[error("task service rejected the request: {detail}")]
    Rejected { detail: String },

    #[error("malformed response from task service: {0}")]
    Protocol(String),
}

/// Failure applying a state change through the board.
#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("no task with id {0} in the current snapshot")]
    UnknownTask(TaskId),

    #[error("transition denied: {0}")]
    Denied(#[from] TransitionDenied),

    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Rejection from the ingestion guard.
///
/// These are the defects propagation cannot tolerate (or that hide data
/// loss): the guard rejects them up front instead of letting the engine
/// inherit undefined behavior.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IngestError {
    #[error("duplicate task id {0} in collection")]
    DuplicateId(TaskId),

    #[error("task {0} lists itself as a blocker")]
    SelfBlocker(TaskId),

    #[error("blocker relation contains a cycle")]
    Cycle,
}

/// Failure reading or writing a snapshot file.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to write snapshot {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid snapshot {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}
