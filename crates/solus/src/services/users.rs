//! Users.

use crate::models::{User, UserCreateRequest, UserStatus, UserUpdateRequest};
use crate::Result;
use solus_core::{ApiClient, Filter, Paginated, RequestOptions};

/// Filter for [`UsersService::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsersFilter {
    filter: Filter,
}

impl UsersFilter {
    /// Create an empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Only users with the given status.
    #[must_use]
    pub fn by_status(self, status: UserStatus) -> Self {
        Self {
            filter: self.filter.add("status", status.as_str()),
        }
    }

    /// The underlying filter.
    #[must_use]
    pub const fn as_filter(&self) -> &Filter {
        &self.filter
    }
}

/// Operations on users.
#[derive(Debug, Clone, Copy)]
pub struct UsersService<'a> {
    client: &'a ApiClient,
}

impl<'a> UsersService<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// List users.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the page does not decode.
    pub async fn list(&self, filter: &UsersFilter) -> Result<Paginated<User>> {
        self.client
            .list("users", RequestOptions::new().with_filter(filter.as_filter()))
            .await
    }

    /// Fetch a user.
    ///
    /// # Errors
    ///
    /// Fails on any non-200 answer or an undecodable body.
    pub async fn get(&self, id: u64) -> Result<User> {
        self.client
            .get(&format!("users/{id}"), RequestOptions::new())
            .await
    }

    /// Create a user.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 201 with the created resource.
    pub async fn create(&self, request: &UserCreateRequest) -> Result<User> {
        self.client
            .create("users", RequestOptions::new().with_body(request))
            .await
    }

    /// Update a user. Unset fields are left untouched.
    ///
    /// # Errors
    ///
    /// Fails on any non-200 answer or an undecodable body.
    pub async fn update(&self, id: u64, request: &UserUpdateRequest) -> Result<User> {
        self.client
            .update(&format!("users/{id}"), RequestOptions::new().with_body(request))
            .await
    }

    /// Delete a user.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 204.
    pub async fn delete(&self, id: u64) -> Result<()> {
        self.client
            .delete(&format!("users/{id}"), RequestOptions::new())
            .await
    }
}
