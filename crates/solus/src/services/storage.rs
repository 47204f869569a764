//! Storages. Storages are added through
//! [`ComputeResourcesService::storage_create`](crate::ComputeResourcesService::storage_create).

use crate::models::Storage;
use crate::Result;
use solus_core::{ApiClient, RequestOptions};

/// Operations on storages.
#[derive(Debug, Clone, Copy)]
pub struct StorageService<'a> {
    client: &'a ApiClient,
}

impl<'a> StorageService<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Fetch a storage.
    ///
    /// # Errors
    ///
    /// Fails on any non-200 answer or an undecodable body.
    pub async fn get(&self, id: u64) -> Result<Storage> {
        self.client
            .get(&format!("storages/{id}"), RequestOptions::new())
            .await
    }

    /// Delete a storage.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 204.
    pub async fn delete(&self, id: u64) -> Result<()> {
        self.client
            .delete(&format!("storages/{id}"), RequestOptions::new())
            .await
    }
}
