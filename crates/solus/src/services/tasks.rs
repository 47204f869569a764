//! Tasks tracking asynchronous operations.

use crate::Result;
use solus_core::{ApiClient, Filter, Paginated, RequestOptions, Task, TaskStatus};

/// Filter for [`TasksService::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TasksFilter {
    filter: Filter,
}

impl TasksFilter {
    /// Create an empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Only tasks performing `action`, see [`task_actions`](crate::task_actions).
    #[must_use]
    pub fn by_action(self, action: &str) -> Self {
        Self {
            filter: self.filter.add("action", action),
        }
    }

    /// Only tasks in `status`.
    #[must_use]
    pub fn by_status(self, status: &TaskStatus) -> Self {
        Self {
            filter: self.filter.add("status", status.as_str()),
        }
    }

    /// Only tasks running on a compute resource.
    #[must_use]
    pub fn by_compute_resource_id(self, id: u64) -> Self {
        Self {
            filter: self.filter.add("compute_resource_id", id.to_string()),
        }
    }

    /// Only tasks of a virtual server.
    #[must_use]
    pub fn by_compute_resource_vm_id(self, id: u64) -> Self {
        Self {
            filter: self.filter.add("compute_resource_vm_id", id.to_string()),
        }
    }

    /// The underlying filter.
    #[must_use]
    pub const fn as_filter(&self) -> &Filter {
        &self.filter
    }
}

/// Operations on tasks.
#[derive(Debug, Clone, Copy)]
pub struct TasksService<'a> {
    client: &'a ApiClient,
}

impl<'a> TasksService<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// List tasks.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the page does not decode.
    pub async fn list(&self, filter: &TasksFilter) -> Result<Paginated<Task>> {
        self.client
            .list("tasks", RequestOptions::new().with_filter(filter.as_filter()))
            .await
    }

    /// Fetch a task.
    ///
    /// # Errors
    ///
    /// Fails when the request fails or the returned task has no id.
    pub async fn get(&self, id: u64) -> Result<Task> {
        self.client
            .get(&format!("tasks/{id}"), RequestOptions::new())
            .await
    }
}
