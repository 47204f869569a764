//! Virtual servers.

use crate::models::{
    Backup, BootMode, Snapshot, SnapshotRequest, VirtualServer, VirtualServerCreateRequest,
    VirtualServerDisk, VirtualServerResizeRequest, VirtualServerSettingsUpdateRequest,
    VirtualServerStatus, VirtualServerUpdateRequest, VirtualizationType,
};
use crate::Result;
use solus_core::{ApiClient, Filter, Paginated, RequestOptions, Task};

/// Filter for [`VirtualServersService::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VirtualServersFilter {
    filter: Filter,
}

impl VirtualServersFilter {
    /// Create an empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Only servers owned by the user.
    #[must_use]
    pub fn by_user_id(self, id: u64) -> Self {
        Self {
            filter: self.filter.add("user_id", id.to_string()),
        }
    }

    /// Only servers on the compute resource.
    #[must_use]
    pub fn by_compute_resource_id(self, id: u64) -> Self {
        Self {
            filter: self.filter.add("compute_resource_id", id.to_string()),
        }
    }

    /// Only servers with the given status.
    #[must_use]
    pub fn by_status(self, status: VirtualServerStatus) -> Self {
        Self {
            filter: self.filter.add("status", status.as_str()),
        }
    }

    /// Only servers of the given virtualization type.
    #[must_use]
    pub fn by_virtualization_type(self, kind: VirtualizationType) -> Self {
        Self {
            filter: self.filter.add("virtualization_type", kind.as_str()),
        }
    }

    /// The underlying filter.
    #[must_use]
    pub const fn as_filter(&self) -> &Filter {
        &self.filter
    }
}

/// Operations on virtual servers.
///
/// Power actions, resizing and deletion run in the background; they return
/// the [`Task`] to poll through [`TasksService`](crate::TasksService).
#[derive(Debug, Clone, Copy)]
pub struct VirtualServersService<'a> {
    client: &'a ApiClient,
}

impl<'a> VirtualServersService<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Create a server. Boots from disk unless the request says otherwise.
    ///
    /// # Errors
    ///
    /// Fails on validation errors (422) or any answer other than 201.
    pub async fn create(&self, request: &VirtualServerCreateRequest) -> Result<VirtualServer> {
        let mut request = request.clone();
        request.boot_mode = request.boot_mode.or(Some(BootMode::Disk));

        self.client
            .create("servers", RequestOptions::new().with_body(&request))
            .await
    }

    /// List servers.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the page does not decode.
    pub async fn list(&self, filter: &VirtualServersFilter) -> Result<Paginated<VirtualServer>> {
        self.client
            .list("servers", RequestOptions::new().with_filter(filter.as_filter()))
            .await
    }

    /// Fetch a server.
    ///
    /// # Errors
    ///
    /// Fails on any non-200 answer or an undecodable body.
    pub async fn get(&self, id: u64) -> Result<VirtualServer> {
        self.client
            .get(&format!("servers/{id}"), RequestOptions::new())
            .await
    }

    /// Update a server. Unset fields are left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not decode.
    pub async fn patch(
        &self,
        id: u64,
        request: &VirtualServerUpdateRequest,
    ) -> Result<VirtualServer> {
        self.client
            .patch(&format!("servers/{id}"), RequestOptions::new().with_body(request))
            .await
    }

    /// Update the hypervisor settings of a server.
    ///
    /// # Errors
    ///
    /// Fails on any non-200 answer or an undecodable body.
    pub async fn update_settings(
        &self,
        id: u64,
        request: &VirtualServerSettingsUpdateRequest,
    ) -> Result<VirtualServer> {
        self.client
            .patch(
                &format!("servers/{id}/settings"),
                RequestOptions::new().with_body(request),
            )
            .await
    }

    /// Start a server.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TaskWithoutId`](crate::Error::TaskWithoutId) when the answer names no task, or the request error.
    pub async fn start(&self, id: u64) -> Result<Task> {
        self.action(id, "start").await
    }

    /// Stop a server.
    ///
    /// # Errors
    ///
    /// Fails when the request fails or the returned task has no id.
    pub async fn stop(&self, id: u64) -> Result<Task> {
        self.action(id, "stop").await
    }

    /// Restart a server.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TaskWithoutId`](crate::Error::TaskWithoutId) when the answer names no task, or the request error.
    pub async fn restart(&self, id: u64) -> Result<Task> {
        self.action(id, "restart").await
    }

    async fn action(&self, id: u64, action: &str) -> Result<Task> {
        self.client
            .async_post(&format!("servers/{id}/{action}"), RequestOptions::new())
            .await
    }

    /// Start a manual backup.
    ///
    /// # Errors
    ///
    /// Fails on any non-200 answer or an undecodable body.
    pub async fn backup(&self, id: u64) -> Result<Backup> {
        self.client
            .create(&format!("servers/{id}/backups"), RequestOptions::new())
            .await
    }

    /// Move a server to another plan.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TaskWithoutId`](crate::Error::TaskWithoutId) when the answer names no task, or the request error.
    pub async fn resize(&self, id: u64, request: &VirtualServerResizeRequest) -> Result<Task> {
        self.client
            .async_post(
                &format!("servers/{id}/resize"),
                RequestOptions::new().with_body(request),
            )
            .await
    }

    /// Delete a server.
    ///
    /// # Errors
    ///
    /// Fails when the request fails or the returned task has no id.
    pub async fn delete(&self, id: u64) -> Result<Task> {
        self.client
            .async_delete(&format!("servers/{id}"), RequestOptions::new())
            .await
    }

    /// Take a snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 201 with the created resource.
    pub async fn snapshots_create(&self, id: u64, request: &SnapshotRequest) -> Result<Snapshot> {
        self.client
            .create(
                &format!("servers/{id}/snapshots"),
                RequestOptions::new().with_body(request),
            )
            .await
    }

    /// Disks of a server.
    ///
    /// # Errors
    ///
    /// Fails on any non-200 answer or an undecodable body.
    pub async fn disks(&self, id: u64) -> Result<Vec<VirtualServerDisk>> {
        self.client
            .get(&format!("servers/{id}/disks"), RequestOptions::new())
            .await
    }
}
