use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::task::TaskCollection;
use crate::parse::{DecodeError, parse_tasks, serialize_tasks};

/// Error type for task file I/O
#[derive(Debug, thiserror::Error)]
pub enum TaskIoError {
    #[error("could not read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("could not write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("{path}: {source}")]
    Decode { path: PathBuf, source: DecodeError },
}

impl TaskIoError {
    /// True when the file simply does not exist yet
    pub fn is_not_found(&self) -> bool {
        matches!(self, TaskIoError::Read { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }

    /// True when the file exists but has no content
    pub fn is_empty_input(&self) -> bool {
        matches!(
            self,
            TaskIoError::Decode {
                source: DecodeError::EmptyInput,
                ..
            }
        )
    }
}

/// Load a task file. Fails on a missing, unreadable, empty, or malformed file.
pub fn load_tasks(path: &Path) -> Result<TaskCollection, TaskIoError> {
    let text = fs::read_to_string(path).map_err(|e| TaskIoError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let tasks = parse_tasks(&text).map_err(|e| TaskIoError::Decode {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!(path = %path.display(), count = tasks.len(), "loaded tasks");
    Ok(tasks)
}

/// Save tasks, replacing the file atomically.
pub fn save_tasks(path: &Path, tasks: &TaskCollection) -> Result<(), TaskIoError> {
    let content = serialize_tasks(tasks);
    atomic_write(path, content.as_bytes()).map_err(|e| TaskIoError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::debug!(path = %path.display(), count = tasks.len(), "saved tasks");
    Ok(())
}

/// Write `content` to `path` atomically using a temp file + rename.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::Task;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn sample() -> TaskCollection {
        let mut tasks = TaskCollection::new();
        tasks.add(Task::new(
            "Task 1",
            "Description 1",
            NaiveDate::from_ymd_opt(2026, 3, 6).unwrap(),
        ));
        tasks.add(Task::new(
            "Task 2",
            "Description 2",
            NaiveDate::from_ymd_opt(2026, 4, 10).unwrap(),
        ));
        tasks
    }

    #[test]
    fn test_save_then_load() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("tasks.csv");
        save_tasks(&path, &sample()).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "Task 1,Description 1,2026-03-06\nTask 2,Description 2,2026-04-10\n"
        );

        let loaded = load_tasks(&path).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.all()[0].name, "Task 1");
        assert_eq!(loaded.all()[1].id, 2);
    }

    #[test]
    fn test_save_overwrites() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("tasks.csv");
        fs::write(&path, "old content that is much longer than the new one\n").unwrap();
        let mut tasks = sample();
        tasks.clear();
        tasks.add(Task::new("x", "", NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()));
        save_tasks(&path, &tasks).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "x,,2026-01-01\n");
    }

    #[test]
    fn test_load_missing() {
        let tmp = TempDir::new().unwrap();
        let err = load_tasks(&tmp.path().join("nope.csv")).unwrap_err();
        assert!(err.is_not_found());
        assert!(!err.is_empty_input());
    }

    #[test]
    fn test_load_empty() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("empty.csv");
        fs::write(&path, "").unwrap();
        let err = load_tasks(&path).unwrap_err();
        assert!(err.is_empty_input());
        assert!(err.to_string().contains("empty file"));
    }

    #[test]
    fn test_load_malformed() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.csv");
        fs::write(&path, "Task 1,Description 1\n").unwrap();
        match load_tasks(&path) {
            Err(TaskIoError::Decode {
                source: DecodeError::Format { line, .. },
                ..
            }) => assert_eq!(line, 1),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_save_to_missing_dir_fails() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("no/such/dir/tasks.csv");
        let err = save_tasks(&path, &sample()).unwrap_err();
        assert!(matches!(err, TaskIoError::Write { .. }));
    }
}
