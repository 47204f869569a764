//! IP blocks.

use crate::models::{IpBlock, IpBlockIpAddress, IpBlockRequest};
use crate::Result;
use solus_core::{ApiClient, Filter, Paginated, RequestOptions};

/// Filter for [`IpBlocksService::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IpBlocksFilter {
    filter: Filter,
}

impl IpBlocksFilter {
    /// Create an empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Only blocks whose name contains `name`.
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

/// Operations on IP blocks and their addresses.
#[derive(Debug, Clone, Copy)]
pub struct IpBlocksService<'a> {
    client: &'a ApiClient,
}

impl<'a> IpBlocksService<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// List IP blocks.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the page does not decode.
    pub async fn list(&self, filter: &IpBlocksFilter) -> Result<Paginated<IpBlock>> {
        self.client
            .list("ip_blocks", RequestOptions::new().with_filter(filter.as_filter()))
            .await
    }

    /// Fetch an IP block.
    ///
    /// # Errors
    ///
    /// Fails on any non-200 answer or an undecodable body.
    pub async fn get(&self, id: u64) -> Result<IpBlock> {
        self.client
            .get(&format!("ip_blocks/{id}"), RequestOptions::new())
            .await
    }

    /// Create an IP block.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 201 with the created resource.
    pub async fn create(&self, request: &IpBlockRequest) -> Result<IpBlock> {
        self.client
            .create("ip_blocks", RequestOptions::new().with_body(request))
            .await
    }

    /// Update an IP block.
    ///
    /// # Errors
    ///
    /// Fails on any non-200 answer or an undecodable body.
    pub async fn update(&self, id: u64, request: &IpBlockRequest) -> Result<IpBlock> {
        self.client
            .update(
                &format!("ip_blocks/{id}"),
                RequestOptions::new().with_body(request),
            )
            .await
    }

    /// Delete an IP block.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 204.
    pub async fn delete(&self, id: u64) -> Result<()> {
        self.client
            .delete(&format!("ip_blocks/{id}"), RequestOptions::new())
            .await
    }

    /// Reserve the next free address of a block.
    ///
    /// # Errors
    ///
    /// Fails on validation errors (422) or any answer other than 201.
    pub async fn ip_address_create(&self, ip_block_id: u64) -> Result<IpBlockIpAddress> {
        self.client
            .create(&format!("ip_blocks/{ip_block_id}/ips"), RequestOptions::new())
            .await
    }

    /// Release a reserved address.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 204.
    pub async fn ip_address_delete(&self, ip_id: u64) -> Result<()> {
        self.client
            .delete(&format!("ips/{ip_id}"), RequestOptions::new())
            .await
    }
}
