//! Task collections as JSON snapshot files.
//!
//! The CLI operates on a plain JSON array of tasks, the same shape the
//! remote service serves. Nothing here interprets the tasks; parsing and
//! validation are separate steps.

use crate::error::SnapshotError;
use crate::types::Task;
use std::fs;
use std::path::Path;

/// Read a task collection from a JSON file.
pub fn load_tasks(path: &Path) -> Result<Vec<Task>, SnapshotError> {
    let text = fs::read_to_string(path).map_err(|source| SnapshotError::Read {
        path: path.display().to_string(),
        source,
    })?;

    serde_json::from_str(&text).map_err(|source| SnapshotError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Write a task collection as pretty-printed JSON.
pub fn write_tasks(path: &Path, tasks: &[Task]) -> Result<(), SnapshotError> {
    // Serializing a slice of owned values cannot fail; I/O can.
    let mut text = serde_json::to_string_pretty(tasks).map_err(|source| SnapshotError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    text.push('\n');

    fs::write(path, text).map_err(|source| SnapshotError::Write {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::task;
    use crate::types::TaskState;

    #[test]
    fn round_trips_a_collection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");

        let tasks = vec![task(1, TaskState::Done, &[]), task(2, TaskState::Todo, &[1])];
        write_tasks(&path, &tasks).unwrap();

        let loaded = load_tasks(&path).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[1].blockers, vec![1]);
        assert_eq!(loaded[1].state, TaskState::Todo);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_tasks(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, SnapshotError::Read { .. }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{not json").unwrap();
        let err = load_tasks(&path).unwrap_err();
        assert!(matches!(err, SnapshotError::Parse { .. }));
    }
}
