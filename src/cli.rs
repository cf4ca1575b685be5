//! Command-line interface definitions.

use crate::types::{TaskId, TaskState};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "task-deps", version, about = "Dependency-aware task state engine")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check a snapshot for cycles, self-blockers, duplicate ids, and
    /// referential defects.
    Check {
        /// Path to a JSON task snapshot.
        file: PathBuf,
    },

    /// Apply a state change with cascading propagation and write the
    /// resulting snapshot.
    SetState {
        /// Path to a JSON task snapshot.
        file: PathBuf,

        /// Id of the task to change.
        id: TaskId,

        /// Target state (BACKLOG, TODO, IN_PROGRESS, DONE).
        state: TaskState,

        /// Where to write the result; defaults to rewriting the input file.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
