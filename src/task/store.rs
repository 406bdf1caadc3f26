//! Task store - JSON file persistence and CRUD operations

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::error::{Result, TaskError};
use super::model::{Status, Task};

/// Owner of the task collection and its persistence.
///
/// Every operation is a full load-mutate-save cycle against a single JSON
/// file. There is no locking: concurrent invocations against the same file
/// race, and the last writer wins. A write that fails midway can truncate
/// the file; the previous content survives best-effort in `.json.bak`.
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full collection in stored order.
    ///
    /// An absent file is initialized to the empty collection first, then
    /// read back. A whitespace-only file counts as empty; anything else
    /// that fails to parse is fatal.
    pub fn load(&self) -> Result<Vec<Task>> {
        if !self.path.exists() {
            self.save(&[])?;
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let tasks: Vec<Task> = serde_json::from_str(&content).map_err(TaskError::Corrupt)?;
        debug!("loaded {} tasks from {}", tasks.len(), self.path.display());
        Ok(tasks)
    }

    /// Persist the full collection, replacing prior content.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Keep a copy of the previous content; losing the backup is not fatal
        if self.path.exists() {
            let backup_path = self.path.with_extension("json.bak");
            if let Err(e) = fs::copy(&self.path, &backup_path) {
                warn!("Failed to create backup: {}", e);
            }
        }

        let content = serde_json::to_string_pretty(tasks).map_err(TaskError::Corrupt)?;
        fs::write(&self.path, content)?;
        debug!("saved {} tasks to {}", tasks.len(), self.path.display());
        Ok(())
    }

    /// Add a task with the given description, initially todo.
    ///
    /// The new ID is max(existing IDs)+1, or 1 for an empty collection, so
    /// IDs are never reused after a delete.
    pub fn add(&self, description: &str) -> Result<Task> {
        let description = description.trim();
        if description.is_empty() {
            return Err(TaskError::EmptyDescription);
        }

        let mut tasks = self.load()?;
        let id = tasks
            .iter()
            .map(|t| t.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or(TaskError::IdsExhausted)?;
        let task = Task::new(id, description);
        tasks.push(task.clone());
        self.save(&tasks)?;
        Ok(task)
    }

    /// Replace the description of the task with the given ID.
    pub fn update(&self, id: u64, description: &str) -> Result<Task> {
        let description = description.trim();
        if description.is_empty() {
            return Err(TaskError::EmptyDescription);
        }

        let mut tasks = self.load()?;
        let task = Self::find_mut(&mut tasks, id)?;
        task.description = description.to_string();
        let task = task.clone();
        self.save(&tasks)?;
        Ok(task)
    }

    /// Remove the task with the given ID, preserving the order of the rest.
    pub fn delete(&self, id: u64) -> Result<()> {
        let mut tasks = self.load()?;
        let idx = tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(TaskError::NotFound(id))?;
        tasks.remove(idx);
        self.save(&tasks)?;
        Ok(())
    }

    /// Set the status of the task with the given ID.
    pub fn mark(&self, id: u64, status: Status) -> Result<Task> {
        let mut tasks = self.load()?;
        let task = Self::find_mut(&mut tasks, id)?;
        task.status = status;
        let task = task.clone();
        self.save(&tasks)?;
        Ok(task)
    }

    /// All tasks, or only those with the given status, in stored order.
    pub fn list(&self, filter: Option<Status>) -> Result<Vec<Task>> {
        let tasks = self.load()?;
        Ok(match filter {
            Some(status) => tasks.into_iter().filter(|t| t.status == status).collect(),
            None => tasks,
        })
    }

    fn find_mut(tasks: &mut [Task], id: u64) -> Result<&mut Task> {
        tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TaskError::NotFound(id))
    }
}
