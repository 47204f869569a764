//! The authenticated account.

use crate::models::{User, UserUpdateRequest};
use crate::Result;
use solus_core::{ApiClient, RequestOptions};

/// Operations on the account the client is authenticated as.
#[derive(Debug, Clone, Copy)]
pub struct AccountService<'a> {
    client: &'a ApiClient,
}

impl<'a> AccountService<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Fetch the account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not decode.
    pub async fn get(&self) -> Result<User> {
        self.client.get("account", RequestOptions::new()).await
    }

    /// Update the account.
    ///
    /// # Errors
    ///
    /// Fails on any non-200 answer or an undecodable body.
    pub async fn update(&self, request: &UserUpdateRequest) -> Result<User> {
        self.client
            .update("account", RequestOptions::new().with_body(request))
            .await
    }
}
