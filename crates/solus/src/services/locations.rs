//! Locations.

use crate::models::{Location, LocationRequest};
use crate::Result;
use solus_core::{ApiClient, Filter, Paginated, RequestOptions};

/// Filter for [`LocationsService::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationsFilter {
    filter: Filter,
}

impl LocationsFilter {
    /// Create an empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Only locations whose name contains `name`.
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

/// Operations on locations.
#[derive(Debug, Clone, Copy)]
pub struct LocationsService<'a> {
    client: &'a ApiClient,
}

impl<'a> LocationsService<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// List locations.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-200 answers or an undecodable page.
    pub async fn list(&self, filter: &LocationsFilter) -> Result<Paginated<Location>> {
        self.client
            .list("locations", RequestOptions::new().with_filter(filter.as_filter()))
            .await
    }

    /// Fetch a location.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not decode.
    pub async fn get(&self, id: u64) -> Result<Location> {
        self.client
            .get(&format!("locations/{id}"), RequestOptions::new())
            .await
    }

    /// Create a location.
    ///
    /// # Errors
    ///
    /// Fails on validation errors (422) or any answer other than 201.
    pub async fn create(&self, request: &LocationRequest) -> Result<Location> {
        self.client
            .create("locations", RequestOptions::new().with_body(request))
            .await
    }

    /// Update a location.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not decode.
    pub async fn update(&self, id: u64, request: &LocationRequest) -> Result<Location> {
        self.client
            .update(
                &format!("locations/{id}"),
                RequestOptions::new().with_body(request),
            )
            .await
    }

    /// Delete a location.
    ///
    /// # Errors
    ///
    /// Fails when the server does not confirm the deletion with 204.
    pub async fn delete(&self, id: u64) -> Result<()> {
        self.client
            .delete(&format!("locations/{id}"), RequestOptions::new())
            .await
    }
}
