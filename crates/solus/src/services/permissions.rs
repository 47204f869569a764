//! Permissions.

use crate::models::Permission;
use crate::Result;
use solus_core::{ApiClient, Paginated, RequestOptions};

/// Read access to permissions.
#[derive(Debug, Clone, Copy)]
pub struct PermissionsService<'a> {
    client: &'a ApiClient,
}

impl<'a> PermissionsService<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// List permissions.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-200 answers or an undecodable page.
    pub async fn list(&self) -> Result<Paginated<Permission>> {
        self.client.list("permissions", RequestOptions::new()).await
    }
}
