use std::io;
use std::path::Path;

use crate::error::Result;
use crate::store::TaskStore;
use crate::task::{Status, Task, TaskFields};

/// One menu selection per loop iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    View,
    Add,
    Edit,
    UpdateStatus,
    Delete,
    Exit,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::View,
        Action::Add,
        Action::Edit,
        Action::UpdateStatus,
        Action::Delete,
        Action::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Action::View => "View Tasks",
            Action::Add => "Add Task",
            Action::Edit => "Edit Task",
            Action::UpdateStatus => "Update Task Status",
            Action::Delete => "Delete Task",
            Action::Exit => "Exit",
        }
    }
}

/// The interactive collaborator. The controller performs all of its I/O
/// through this trait, so it never touches the terminal itself.
pub trait Prompter {
    fn choose_action(&mut self) -> io::Result<Action>;
    /// Picks a task from a non-empty list; `verb` names the pending
    /// operation for the prompt text.
    fn choose_task(&mut self, verb: &str, tasks: &[Task]) -> io::Result<usize>;
    fn choose_status(&mut self) -> io::Result<Status>;
    /// Collects the six text fields, pre-filled from `current` when
    /// editing.
    fn collect_fields(&mut self, current: Option<&Task>) -> io::Result<TaskFields>;
    fn show_tasks(&mut self, tasks: &[Task]);
    fn notify(&mut self, message: &str);
}

/// Drives the menu loop until Exit. Each iteration reloads the store,
/// performs exactly one operation, and persists if it mutated the list.
pub fn run<P: Prompter>(prompter: &mut P, path: &Path) -> Result<()> {
    loop {
        let mut store = TaskStore::open(path)?;
        match prompter.choose_action()? {
            Action::View => prompter.show_tasks(store.tasks()),
            Action::Add => {
                let fields = prompter.collect_fields(None)?;
                let name = store.add_task(fields).task_name.clone();
                store.save()?;
                prompter.notify(&format!("Added \"{name}\"."));
            }
            Action::Edit => {
                if store.tasks().is_empty() {
                    prompter.notify("No tasks to edit.");
                    continue;
                }
                let index = prompter.choose_task("edit", store.tasks())?;
                let fields = prompter.collect_fields(Some(&store.tasks()[index]))?;
                let name = store.edit_task(index, fields)?.task_name.clone();
                store.save()?;
                prompter.notify(&format!("Updated \"{name}\"."));
            }
            Action::UpdateStatus => {
                if store.tasks().is_empty() {
                    prompter.notify("No tasks to update.");
                    continue;
                }
                let index = prompter.choose_task("update", store.tasks())?;
                let status = prompter.choose_status()?;
                store.set_status(index, status)?;
                store.save()?;
                prompter.notify(&format!("Status set to {status}."));
            }
            Action::Delete => {
                if store.tasks().is_empty() {
                    prompter.notify("No tasks to delete.");
                    continue;
                }
                let index = prompter.choose_task("delete", store.tasks())?;
                let removed = store.delete_task(index)?;
                store.save()?;
                prompter.notify(&format!("Deleted \"{}\".", removed.task_name));
            }
            Action::Exit => {
                prompter.notify("Goodbye!");
                return Ok(());
            }
        }
    }
}
