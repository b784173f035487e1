//! Persisted, ordered task list.
//!
//! The whole sequence lives in memory and is written back to a single YAML
//! document after every mutation. Writes go through a sibling temp file that
//! is renamed over the target, so a crash mid-write leaves the previous
//! snapshot intact.

use std::path::{Path, PathBuf};

use chrono::Local;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::task::Task;

/// Errors that can occur while writing the task file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize tasks: {0}")]
    Serialize(#[from] serde_yaml::Error),
}

/// Negative outcomes of completing a task.
#[derive(Debug, Error)]
pub enum CompleteError {
    #[error("'{0}' is not a valid task id")]
    InvalidId(String),

    #[error("no task with id {0}")]
    NotFound(u32),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    path: PathBuf,
}

impl TaskStore {
    /// Create an empty store that will persist to `path`.
    pub fn new(path: PathBuf) -> Self {
        Self {
            tasks: Vec::new(),
            path,
        }
    }

    /// Load the store from `path`.
    ///
    /// A missing file is the normal first-run case. An unreadable or
    /// malformed file (including one whose ids are not `1..=n` in order) is logged and
    /// treated as empty; the next mutation overwrites it.
    pub fn load(path: PathBuf) -> Self {
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no task file yet");
                return Self::new(path);
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read task file, starting empty");
                return Self::new(path);
            }
        };

        match parse_tasks(&content) {
            Ok(tasks) => {
                info!(path = %path.display(), count = tasks.len(), "loaded tasks");
                Self { tasks, path }
            }
            Err(reason) => {
                warn!(path = %path.display(), %reason, "malformed task file, starting empty");
                Self::new(path)
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Tasks in insertion order.
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Append a new task and persist the full list.
    ///
    /// Ids are `count + 1`; tasks are never deleted so ids are never reused.
    /// If the write fails the task is dropped again and the error returned.
    pub fn add(&mut self, description: &str) -> Result<Task, StoreError> {
        let id = self.tasks.len() as u32 + 1;
        let task = Task::new(id, description, Local::now());
        self.tasks.push(task.clone());

        if let Err(e) = self.save() {
            self.tasks.pop();
            return Err(e);
        }

        debug!(id, "added task");
        Ok(task)
    }

    /// Mark the task whose id is `raw_id` as completed and persist.
    ///
    /// Completing an already completed task succeeds again.
    pub fn complete(&mut self, raw_id: &str) -> Result<Task, CompleteError> {
        let raw_id = raw_id.trim();
        let id: u32 = raw_id
            .parse()
            .map_err(|_| CompleteError::InvalidId(raw_id.to_string()))?;

        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(CompleteError::NotFound(id))?;

        let was_complete = self.tasks[index].completed;
        self.tasks[index].completed = true;

        if let Err(e) = self.save() {
            self.tasks[index].completed = was_complete;
            return Err(e.into());
        }

        debug!(id, "completed task");
        Ok(self.tasks[index].clone())
    }

    /// Overwrite the task file with the full in-memory list.
    fn save(&self) -> Result<(), StoreError> {
        let content = serde_yaml::to_string(&self.tasks)?;
        write_atomic(&self.path, &content).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), count = self.tasks.len(), "saved tasks");
        Ok(())
    }
}

fn parse_tasks(content: &str) -> Result<Vec<Task>, String> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let tasks: Vec<Task> = serde_yaml::from_str(content).map_err(|e| e.to_string())?;

    // `add` assigns `len + 1`, so ids must run 1..=n in file order.
    for (position, task) in tasks.iter().enumerate() {
        let expected = position as u32 + 1;
        if task.id != expected {
            return Err(format!("expected task id {}, found {}", expected, task.id));
        }
    }

    Ok(tasks)
}

fn write_atomic(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = PathBuf::from(temp_name);

    std::fs::write(&temp_path, content)?;
    std::fs::rename(&temp_path, path)
}
