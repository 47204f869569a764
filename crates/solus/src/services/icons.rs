//! Icons.

use crate::models::{Icon, IconType};
use crate::Result;
use solus_core::{ApiClient, Filter, Paginated, RequestOptions};

/// Filter for [`IconsService::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconsFilter {
    filter: Filter,
}

impl IconsFilter {
    /// Create an empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Only icons whose name contains `name`.
    #[must_use]
    pub fn by_name(self, name: &str) -> Self {
        Self {
            filter: self.filter.add("search", name),
        }
    }

    /// Only icons of a type.
    #[must_use]
    pub fn by_type(self, kind: IconType) -> Self {
        Self {
            filter: self.filter.add("type", kind.as_str()),
        }
    }

    /// The underlying filter.
    #[must_use]
    pub const fn as_filter(&self) -> &Filter {
        &self.filter
    }
}

/// Operations on icons.
#[derive(Debug, Clone, Copy)]
pub struct IconsService<'a> {
    client: &'a ApiClient,
}

impl<'a> IconsService<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// List icons.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the page does not decode.
    pub async fn list(&self, filter: &IconsFilter) -> Result<Paginated<Icon>> {
        self.client
            .list("icons", RequestOptions::new().with_filter(filter.as_filter()))
            .await
    }

    /// Fetch an icon.
    ///
    /// # Errors
    ///
    /// Fails on any non-200 answer or an undecodable body.
    pub async fn get(&self, id: u64) -> Result<Icon> {
        self.client
            .get(&format!("icons/{id}"), RequestOptions::new())
            .await
    }
}
