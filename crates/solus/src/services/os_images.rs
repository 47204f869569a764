//! OS images.

use crate::models::{OsImage, OsImageRequest, OsImageVersion, OsImageVersionRequest};
use crate::Result;
use solus_core::{ApiClient, Filter, Paginated, RequestOptions};

/// Filter for [`OsImagesService::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OsImagesFilter {
    filter: Filter,
}

impl OsImagesFilter {
    /// Create an empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Only images whose name contains `name`.
    #[must_use]
    pub fn by_name(self, name: &str) -> Self {
        Self {
            filter: self.filter.add("search", name),
        }
    }

    /// The underlying filter.
    #[must_use]
    pub const fn as_filter(&self) -> &Filter {
        &self.filter
    }
}

/// Operations on OS images.
#[derive(Debug, Clone, Copy)]
pub struct OsImagesService<'a> {
    client: &'a ApiClient,
}

impl<'a> OsImagesService<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// List OS images.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-200 answers or an undecodable page.
    pub async fn list(&self, filter: &OsImagesFilter) -> Result<Paginated<OsImage>> {
        self.client
            .list("os_images", RequestOptions::new().with_filter(filter.as_filter()))
            .await
    }

    /// Fetch an OS image.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not decode.
    pub async fn get(&self, id: u64) -> Result<OsImage> {
        self.client
            .get(&format!("os_images/{id}"), RequestOptions::new())
            .await
    }

    /// Create an OS image.
    ///
    /// # Errors
    ///
    /// Fails on validation errors (422) or any answer other than 201.
    pub async fn create(&self, request: &OsImageRequest) -> Result<OsImage> {
        self.client
            .create("os_images", RequestOptions::new().with_body(request))
            .await
    }

    /// Update an OS image.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not decode.
    pub async fn update(&self, id: u64, request: &OsImageRequest) -> Result<OsImage> {
        self.client
            .update(
                &format!("os_images/{id}"),
                RequestOptions::new().with_body(request),
            )
            .await
    }

    /// Delete an OS image.
    ///
    /// # Errors
    ///
    /// Fails when the server does not confirm the deletion with 204.
    pub async fn delete(&self, id: u64) -> Result<()> {
        self.client
            .delete(&format!("os_images/{id}"), RequestOptions::new())
            .await
    }

    /// Add a version to an OS image.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 201 with the created resource.
    pub async fn version_create(
        &self,
        os_image_id: u64,
        request: &OsImageVersionRequest,
    ) -> Result<OsImageVersion> {
        self.client
            .create(
                &format!("os_images/{os_image_id}/versions"),
                RequestOptions::new().with_body(request),
            )
            .await
    }

    /// Versions of an OS image.
    ///
    /// # Errors
    ///
    /// Fails on any non-200 answer or an undecodable body.
    pub async fn versions(&self, os_image_id: u64) -> Result<Vec<OsImageVersion>> {
        self.client
            .get(&format!("os_images/{os_image_id}/versions"), RequestOptions::new())
            .await
    }
}
