//! Asynchronous task model.
//!
//! Long running operations (deleting a server, restoring a backup, ...) answer
//! with a task that the caller can poll through the tasks endpoint.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::de::nullable;

/// Status of a task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Waiting to be queued
    #[default]
    Pending,
    /// Queued for a worker
    Queued,
    /// Running
    Running,
    /// Finished successfully
    Done,
    /// Finished with an error
    Failed,
    /// Canceled before finishing
    Canceled,
    /// Any status this client does not know about
    #[serde(other)]
    Unknown,
}

impl TaskStatus {
    /// Returns true once the task will not change anymore.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self, Self::Done | Self::Failed | Self::Canceled)
    }

    /// Wire name of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Queued => "queued",
            Self::Running => "running",
            Self::Done => "done",
            Self::Failed => "failed",
            Self::Canceled => "canceled",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Known virtual server task actions, usable with task filters.
pub mod actions {
    /// Create a virtual server
    pub const SERVER_CREATE: &str = "vm-create";
    /// Reinstall a virtual server
    pub const SERVER_REINSTALL: &str = "vm-reinstall";
    /// Delete a virtual server
    pub const SERVER_DELETE: &str = "vm-delete";
    /// Update a virtual server
    pub const SERVER_UPDATE: &str = "vm-update";
    /// Change a virtual server password
    pub const SERVER_PASSWORD_CHANGE: &str = "vm-password-change";
    /// Start a virtual server
    pub const SERVER_START: &str = "vm-start";
    /// Stop a virtual server
    pub const SERVER_STOP: &str = "vm-stop";
    /// Restart a virtual server
    pub const SERVER_RESTART: &str = "vm-restart";
    /// Suspend a virtual server
    pub const SERVER_SUSPEND: &str = "vm-suspend";
    /// Resume a virtual server
    pub const SERVER_RESUME: &str = "vm-resume";
}

/// An asynchronous operation tracked by the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    /// Task ID. Zero means the server did not create a task.
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
    /// Compute resource running the task
    #[serde(deserialize_with = "nullable")]
    pub compute_resource_id: u64,
    /// Queue name
    #[serde(deserialize_with = "nullable")]
    pub queue: String,
    /// Action, see [`actions`]
    #[serde(deserialize_with = "nullable")]
    pub action: String,
    /// Current status
    #[serde(deserialize_with = "nullable")]
    pub status: TaskStatus,
    /// Output collected so far
    #[serde(deserialize_with = "nullable")]
    pub output: String,
    /// Progress in percent
    #[serde(deserialize_with = "nullable")]
    pub progress: u32,
    /// Duration in seconds
    #[serde(deserialize_with = "nullable")]
    pub duration: u64,
}

impl Task {
    /// Returns true once the task will not change anymore.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.status.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_task_deserialize() {
        let task: Task = serde_json::from_value(json!({
            "id": 7,
            "compute_resource_id": 1,
            "queue": "compute_resource_1",
            "action": "vm-delete",
            "status": "running",
            "output": "",
            "progress": 40,
            "duration": 3
        }))
        .unwrap();

        assert_eq!(task.id, 7);
        assert_eq!(task.action, actions::SERVER_DELETE);
        assert_eq!(task.status, TaskStatus::Running);
        assert_eq!(task.progress, 40);
        assert!(!task.is_finished());
    }

    #[test]
    fn test_empty_task_has_zero_id() {
        let task: Task = serde_json::from_str("{}").unwrap();
        assert_eq!(task.id, 0);
        assert_eq!(task.status, TaskStatus::Pending);
    }

    #[test]
    fn test_task_status_finished() {
        assert!(TaskStatus::Done.is_finished());
        assert!(TaskStatus::Failed.is_finished());
        assert!(TaskStatus::Canceled.is_finished());
        assert!(!TaskStatus::Queued.is_finished());
        assert!(!TaskStatus::Unknown.is_finished());
    }

    #[test]
    fn test_unknown_task_status() {
        let status: TaskStatus = serde_json::from_str(r#""paused""#).unwrap();
        assert_eq!(status, TaskStatus::Unknown);
        assert_eq!(TaskStatus::Canceled.to_string(), "canceled");
    }
}
