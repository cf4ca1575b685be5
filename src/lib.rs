//! Dependency-aware task state engine.
//!
//! Tasks carry blocker lists; the engine keeps every task's stored state
//! consistent with its dependency graph. The `Blocked` state is fully
//! derived: `propagation` recomputes it in one cascading pass whenever a
//! state changes, `validate` gates the manual edits, and `cycles` guards
//! ingestion against the cyclic data propagation cannot fix.

pub mod board;
pub mod cli;
pub mod client;
pub mod cycles;
pub mod error;
pub mod graph;
pub mod propagation;
pub mod readiness;
pub mod snapshot;
pub mod types;
pub mod validate;

#[cfg(test)]
pub(crate) mod testutil;

pub use types::{DependencyGraph, Task, TaskId, TaskMap, TaskState};
