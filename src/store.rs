use std::fs;
use std::path::PathBuf;

use crate::error::{Result, StoreError};
use crate::task::{Status, Task, TaskFields};

/// The task list and its backing file. The whole list is read on `open`
/// and written back in one piece on `save`.
#[derive(Debug)]
pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Opens the store at `path`. A missing file is an empty list; a file
    /// with malformed contents is a parse error for the caller to handle.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let tasks = if path.exists() {
            let data = fs::read_to_string(&path)?;
            serde_json::from_str(&data)?
        } else {
            Vec::new()
        };
        Ok(Self { path, tasks })
    }

    /// Overwrites the backing file with the full list, pretty-printed.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let data = serde_json::to_string_pretty(&self.tasks)?;
        fs::write(&self.path, data)?;
        Ok(())
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Appends a new task. Fields not supplied are empty; status always
    /// starts out Pending.
    pub fn add_task(&mut self, fields: TaskFields) -> &Task {
        self.tasks.push(fields.into_task());
        &self.tasks[self.tasks.len() - 1]
    }

    /// Replaces the supplied fields of the task at `index`, leaving the
    /// rest untouched.
    pub fn edit_task(&mut self, index: usize, fields: TaskFields) -> Result<&Task> {
        self.check_index(index)?;
        fields.apply_to(&mut self.tasks[index]);
        Ok(&self.tasks[index])
    }

    /// Sets the status at `index`. Any status may follow any other.
    pub fn set_status(&mut self, index: usize, status: Status) -> Result<()> {
        self.check_index(index)?;
        self.tasks[index].status = status;
        Ok(())
    }

    /// Removes and returns the task at `index`; later tasks shift down.
    pub fn delete_task(&mut self, index: usize) -> Result<Task> {
        self.check_index(index)?;
        Ok(self.tasks.remove(index))
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.tasks.len() {
            return Err(StoreError::OutOfBounds {
                index,
                len: self.tasks.len(),
            });
        }
        Ok(())
    }
}
