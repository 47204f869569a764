//! Server migrations.

use crate::models::{ServersMigration, ServersMigrationRequest};
use crate::Result;
use solus_core::{ApiClient, RequestOptions};

/// Starts migrations of servers to another compute resource.
#[derive(Debug, Clone, Copy)]
pub struct ServersMigrationsService<'a> {
    client: &'a ApiClient,
}

impl<'a> ServersMigrationsService<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Start migrating the servers. Progress is tracked through the
    /// returned tasks.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 201 with the migration.
    pub async fn create(&self, request: &ServersMigrationRequest) -> Result<ServersMigration> {
        self.client
            .create("servers_migrations", RequestOptions::new().with_body(request))
            .await
    }
}
