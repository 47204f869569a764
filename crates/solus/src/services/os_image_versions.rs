//! OS image versions. Versions are created through
//! [`OsImagesService::version_create`](crate::OsImagesService::version_create).

use crate::models::{OsImageVersion, OsImageVersionRequest};
use crate::Result;
use solus_core::{ApiClient, RequestOptions};

/// Operations on OS image versions.
#[derive(Debug, Clone, Copy)]
pub struct OsImageVersionsService<'a> {
    client: &'a ApiClient,
}

impl<'a> OsImageVersionsService<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Fetch a version.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not decode.
    pub async fn get(&self, id: u64) -> Result<OsImageVersion> {
        self.client
            .get(&format!("os_image_versions/{id}"), RequestOptions::new())
            .await
    }

    /// Update a version.
    ///
    /// # Errors
    ///
    /// Fails on any non-200 answer or an undecodable body.
    pub async fn update(&self, id: u64, request: &OsImageVersionRequest) -> Result<OsImageVersion> {
        self.client
            .update(
                &format!("os_image_versions/{id}"),
                RequestOptions::new().with_body(request),
            )
            .await
    }

    /// Delete a version.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 204.
    pub async fn delete(&self, id: u64) -> Result<()> {
        self.client
            .delete(&format!("os_image_versions/{id}"), RequestOptions::new())
            .await
    }
}
