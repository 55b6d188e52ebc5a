use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub date: String,
    pub project_name: String,
    pub task_name: String,
    pub tl_name: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub status: Status,
}

/// Task status. Records written without the field load as Pending.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Pending,
    Working,
    Complete,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Pending, Status::Working, Status::Complete];
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Pending => "Pending",
            Status::Working => "Working",
            Status::Complete => "Complete",
        })
    }
}

impl FromStr for Status {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Status::Pending),
            "Working" => Ok(Status::Working),
            "Complete" => Ok(Status::Complete),
            other => Err(StoreError::InvalidStatus(other.to_string())),
        }
    }
}

/// Partial task update. `None` leaves the field untouched on edit and
/// empty on add.
#[derive(Debug, Default, Clone)]
pub struct TaskFields {
    pub date: Option<String>,
    pub project_name: Option<String>,
    pub task_name: Option<String>,
    pub tl_name: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

impl TaskFields {
    pub fn into_task(self) -> Task {
        Task {
            date: self.date.unwrap_or_default(),
            project_name: self.project_name.unwrap_or_default(),
            task_name: self.task_name.unwrap_or_default(),
            tl_name: self.tl_name.unwrap_or_default(),
            start_time: self.start_time.unwrap_or_default(),
            end_time: self.end_time.unwrap_or_default(),
            status: Status::Pending,
        }
    }

    pub fn apply_to(self, task: &mut Task) {
        if let Some(date) = self.date {
            task.date = date;
        }
        if let Some(project_name) = self.project_name {
            task.project_name = project_name;
        }
        if let Some(task_name) = self.task_name {
            task.task_name = task_name;
        }
        if let Some(tl_name) = self.tl_name {
            task.tl_name = tl_name;
        }
        if let Some(start_time) = self.start_time {
            task.start_time = start_time;
        }
        if let Some(end_time) = self.end_time {
            task.end_time = end_time;
        }
    }
}
