//! task-deps CLI
//!
//! Offline front end for the dependency engine: inspect a JSON task
//! snapshot for structural defects, or apply a state change with full
//! cascading propagation and write the result back.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::Path;
use task_deps::cli::{Cli, Command};
use task_deps::graph::build_task_map;
use task_deps::propagation::propagate_state_change;
use task_deps::snapshot::{load_tasks, write_tasks};
use task_deps::types::{TaskId, TaskState};
use task_deps::validate::{can_transition_to, check_consistency, validate_for_ingest};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    match cli.command {
        Command::Check { file } => check(&file),
        Command::SetState {
            file,
            id,
            state,
            output,
        } => set_state(&file, id, state, output.as_deref()),
    }
}

fn check(file: &Path) -> Result<()> {
    let tasks = load_tasks(file)?;
    info!(count = tasks.len(), path = %file.display(), "loaded snapshot");

    let mut defective = false;

    if let Err(err) = validate_for_ingest(&tasks) {
        eprintln!("ingest: {}", err);
        defective = true;
    }

    for issue in check_consistency(&tasks) {
        eprintln!("consistency: {}", issue);
        defective = true;
    }

    if defective {
        bail!("snapshot has defects");
    }

    println!("ok: {} tasks, no defects", tasks.len());
    Ok(())
}

fn set_state(file: &Path, id: TaskId, state: TaskState, output: Option<&Path>) -> Result<()> {
    let tasks = load_tasks(file)?;
    validate_for_ingest(&tasks)?;

    let Some(task) = tasks.iter().find(|t| t.id == id) else {
        bail!("no task with id {} in {}", id, file.display());
    };

    let map = build_task_map(&tasks);
    can_transition_to(task, state, &map)?;

    let updated = propagate_state_change(id, state, &tasks);

    for (before, after) in tasks.iter().zip(&updated) {
        if before.state != after.state {
            println!("{}: {} -> {}", after.id, before.state, after.state);
        }
    }

    let target = output.unwrap_or(file);
    write_tasks(target, &updated)?;
    info!(path = %target.display(), "wrote snapshot");
    Ok(())
}
