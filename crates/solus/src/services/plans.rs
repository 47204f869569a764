//! Plans.

use crate::models::{ImageFormat, Plan, PlanRequest, StorageTypeName};
use crate::Result;
use solus_core::{ApiClient, Filter, Paginated, RequestOptions};

/// Filter for [`PlansService::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlansFilter {
    filter: Filter,
}

impl PlansFilter {
    /// Create an empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Only plans whose name contains `name`.
    #[must_use]
    pub fn by_name(self, name: &str) -> Self {
        Self {
            filter: self.filter.add("search", name),
        }
    }

    /// Only plans placing servers on a storage type.
    #[must_use]
    pub fn by_storage_type(self, storage_type: StorageTypeName) -> Self {
        Self {
            filter: self.filter.add("storage_type", storage_type.as_str()),
        }
    }

    /// Only plans using an image format.
    #[must_use]
    pub fn by_image_format(self, format: ImageFormat) -> Self {
        Self {
            filter: self.filter.add("image_format", format.as_str()),
        }
    }

    /// Only plans with a disk of `size` GiB.
    #[must_use]
    pub fn by_disk_size(self, size: u64) -> Self {
        Self {
            filter: self.filter.add("disk", size.to_string()),
        }
    }

    /// The underlying filter.
    #[must_use]
    pub const fn as_filter(&self) -> &Filter {
        &self.filter
    }
}

/// Operations on plans.
#[derive(Debug, Clone, Copy)]
pub struct PlansService<'a> {
    client: &'a ApiClient,
}

impl<'a> PlansService<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// List plans.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the page does not decode.
    pub async fn list(&self, filter: &PlansFilter) -> Result<Paginated<Plan>> {
        self.client
            .list("plans", RequestOptions::new().with_filter(filter.as_filter()))
            .await
    }

    /// Fetch a plan.
    ///
    /// # Errors
    ///
    /// Fails on any non-200 answer or an undecodable body.
    pub async fn get(&self, id: u64) -> Result<Plan> {
        self.client
            .get(&format!("plans/{id}"), RequestOptions::new())
            .await
    }

    /// Create a plan.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 201 with the created resource.
    pub async fn create(&self, request: &PlanRequest) -> Result<Plan> {
        self.client
            .create("plans", RequestOptions::new().with_body(request))
            .await
    }

    /// Update a plan.
    ///
    /// # Errors
    ///
    /// Fails on any non-200 answer or an undecodable body.
    pub async fn update(&self, id: u64, request: &PlanRequest) -> Result<Plan> {
        self.client
            .update(&format!("plans/{id}"), RequestOptions::new().with_body(request))
            .await
    }

    /// Delete a plan.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 204.
    pub async fn delete(&self, id: u64) -> Result<()> {
        self.client
            .delete(&format!("plans/{id}"), RequestOptions::new())
            .await
    }
}
