//! Backups.

use crate::models::Backup;
use crate::Result;
use solus_core::{ApiClient, RequestOptions, Task};

/// Operations on backups.
#[derive(Debug, Clone, Copy)]
pub struct BackupsService<'a> {
    client: &'a ApiClient,
}

impl<'a> BackupsService<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Fetch a backup.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not decode.
    pub async fn get(&self, id: u64) -> Result<Backup> {
        self.client
            .get(&format!("backups/{id}"), RequestOptions::new())
            .await
    }

    /// Delete a backup.
    ///
    /// # Errors
    ///
    /// Fails when the server does not confirm the deletion with 204.
    pub async fn delete(&self, id: u64) -> Result<()> {
        self.client
            .delete(&format!("backups/{id}"), RequestOptions::new())
            .await
    }

    /// Restore the server from a backup.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TaskWithoutId`](crate::Error::TaskWithoutId) when the answer names no task, or the request error.
    pub async fn restore(&self, id: u64) -> Result<Task> {
        self.client
            .async_post(&format!("backups/{id}/restore"), RequestOptions::new())
            .await
    }
}
