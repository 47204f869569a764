//! Compute resources and the things attached to them.

use crate::models::{
    ComputeResource, ComputeResourceCreateRequest, ComputeResourceInstallStep,
    ComputeResourceServerCreateRequest, ComputeResourceSettings, Storage, StorageCreateRequest,
    VirtualServer,
};
use crate::Result;
use solus_core::{ApiClient, Paginated, RequestOptions, Task};

/// Operations on compute resources.
#[derive(Debug, Clone, Copy)]
pub struct ComputeResourcesService<'a> {
    client: &'a ApiClient,
}

impl<'a> ComputeResourcesService<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// List compute resources.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-200 answers or an undecodable page.
    pub async fn list(&self) -> Result<Paginated<ComputeResource>> {
        self.client
            .list("compute_resources", RequestOptions::new())
            .await
    }

    /// Fetch a compute resource.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not decode.
    pub async fn get(&self, id: u64) -> Result<ComputeResource> {
        self.client
            .get(&format!("compute_resources/{id}"), RequestOptions::new())
            .await
    }

    /// Add a compute resource. The agent installation starts right away;
    /// follow it with [`install_steps`](Self::install_steps).
    ///
    /// # Errors
    ///
    /// Fails on validation errors (422) or any answer other than 201.
    pub async fn create(&self, request: &ComputeResourceCreateRequest) -> Result<ComputeResource> {
        self.client
            .create("compute_resources", RequestOptions::new().with_body(request))
            .await
    }

    /// Remove a compute resource.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TaskWithoutId`](crate::Error::TaskWithoutId) when the answer names no task, or the request error.
    pub async fn delete(&self, id: u64) -> Result<Task> {
        self.client
            .async_delete(&format!("compute_resources/{id}"), RequestOptions::new())
            .await
    }

    /// Progress of the agent installation.
    ///
    /// # Errors
    ///
    /// Fails on any non-200 answer or an undecodable body.
    pub async fn install_steps(&self, id: u64) -> Result<Vec<ComputeResourceInstallStep>> {
        self.client
            .get(
                &format!("compute_resources/{id}/install_steps"),
                RequestOptions::new(),
            )
            .await
    }

    /// Create a server on this compute resource.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 201 with the created resource.
    pub async fn servers_create(
        &self,
        id: u64,
        request: &ComputeResourceServerCreateRequest,
    ) -> Result<VirtualServer> {
        self.client
            .create(
                &format!("compute_resources/{id}/servers"),
                RequestOptions::new().with_body(request),
            )
            .await
    }

    /// Replace the settings of a compute resource.
    ///
    /// # Errors
    ///
    /// Fails on any non-200 answer or an undecodable body.
    pub async fn settings_update(
        &self,
        id: u64,
        settings: &ComputeResourceSettings,
    ) -> Result<ComputeResourceSettings> {
        self.client
            .update(
                &format!("compute_resources/{id}/settings"),
                RequestOptions::new().with_body(settings),
            )
            .await
    }

    /// Attach a storage.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 201 with the created resource.
    pub async fn storage_create(&self, id: u64, request: &StorageCreateRequest) -> Result<Storage> {
        self.client
            .create(
                &format!("compute_resources/{id}/storages"),
                RequestOptions::new().with_body(request),
            )
            .await
    }

    /// Storages attached to a compute resource.
    ///
    /// # Errors
    ///
    /// Fails on any non-200 answer or an undecodable body.
    pub async fn storage_list(&self, id: u64) -> Result<Vec<Storage>> {
        self.client
            .get(&format!("compute_resources/{id}/storages"), RequestOptions::new())
            .await
    }
}
