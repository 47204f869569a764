//! Roles.

use crate::models::{Role, RoleRequest};
use crate::Result;
use solus_core::{ApiClient, Error, Paginated, RequestOptions};

/// Operations on roles.
#[derive(Debug, Clone, Copy)]
pub struct RolesService<'a> {
    client: &'a ApiClient,
}

impl<'a> RolesService<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// List roles.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-200 answers or an undecodable page.
    pub async fn list(&self) -> Result<Paginated<Role>> {
        self.client.list("roles", RequestOptions::new()).await
    }

    /// Fetch a role.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not decode.
    pub async fn get(&self, id: u64) -> Result<Role> {
        self.client
            .get(&format!("roles/{id}"), RequestOptions::new())
            .await
    }

    /// Find a role by its exact name.
    ///
    /// Only the first page of roles is searched.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when no role has that name.
    pub async fn get_by_name(&self, name: &str) -> Result<Role> {
        self.list()
            .await?
            .into_data()
            .into_iter()
            .find(|role| role.name == name)
            .ok_or_else(|| {
                Error::NotFound(format!("failed to get role by name \"{name}\": role not found"))
            })
    }

    /// Create a role.
    ///
    /// # Errors
    ///
    /// Fails on validation errors (422) or any answer other than 201.
    pub async fn create(&self, request: &RoleRequest) -> Result<Role> {
        self.client
            .create("roles", RequestOptions::new().with_body(request))
            .await
    }

    /// Update a role.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not decode.
    pub async fn update(&self, id: u64, request: &RoleRequest) -> Result<Role> {
        self.client
            .update(&format!("roles/{id}"), RequestOptions::new().with_body(request))
            .await
    }

    /// Delete a role.
    ///
    /// # Errors
    ///
    /// Fails when the server does not confirm the deletion with 204.
    pub async fn delete(&self, id: u64) -> Result<()> {
        self.client
            .delete(&format!("roles/{id}"), RequestOptions::new())
            .await
    }
}
