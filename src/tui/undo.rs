use std::path::PathBuf;

use crate::model::task::TaskCollection;

/// State saved before a mutation
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub tasks: TaskCollection,
    /// The file the list belonged to, set only when the mutation switched files
    pub path: Option<PathBuf>,
}

impl Snapshot {
    pub fn new(tasks: TaskCollection) -> Self {
        Snapshot { tasks, path: None }
    }

    pub fn with_path(tasks: TaskCollection, path: PathBuf) -> Self {
        Snapshot {
            tasks,
            path: Some(path),
        }
    }
}

/// Bounded history of snapshots, most recent last.
///
/// Callers push a copy of the list before every mutation and restore the
/// popped snapshot wholesale on undo.
pub struct UndoStack {
    snapshots: Vec<Snapshot>,
    limit: usize,
}

impl UndoStack {
    pub fn new(limit: usize) -> Self {
        UndoStack {
            snapshots: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Save a snapshot, dropping the oldest ones beyond the limit.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push(snapshot);
        if self.snapshots.len() > self.limit {
            self.snapshots.drain(..self.snapshots.len() - self.limit);
        }
    }

    /// Take the most recently saved snapshot
    pub fn pop(&mut self) -> Option<Snapshot> {
        self.snapshots.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }
}
