//! Users and roles.

use serde::{Deserialize, Serialize};
use solus_core::de::nullable;

wire_enum! {
    /// User status.
    UserStatus {
        /// Can log in
        Active => "active",
        /// Locked by an administrator
        Locked => "locked",
        /// Suspended, servers are stopped
        Suspended => "suspended",
    }
}

/// A role granting permissions to users.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Role {
    /// Role ID.
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
    /// Role name.
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    /// Assigned to new users.
    #[serde(deserialize_with = "nullable")]
    pub is_default: bool,
    /// Number of users with the role.
    #[serde(deserialize_with = "nullable")]
    pub users_count: u64,
}

/// Payload for creating or updating a role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRequest {
    /// Role name.
    pub name: String,
    /// Permission IDs.
    pub permissions: Vec<u64>,
}

/// A user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    /// User ID.
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
    /// Email address.
    #[serde(deserialize_with = "nullable")]
    pub email: String,
    /// Creation time.
    #[serde(deserialize_with = "nullable")]
    pub created_at: String,
    /// Status.
    #[serde(deserialize_with = "nullable")]
    pub status: UserStatus,
    /// Roles.
    #[serde(deserialize_with = "nullable")]
    pub roles: Vec<Role>,
}

/// Payload for creating a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCreateRequest {
    /// Password.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub password: String,
    /// Email address.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,
    /// Status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
    /// Language ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_id: Option<u64>,
    /// Role IDs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<u64>,
}

/// Payload for updating a user or the current account. Unset fields are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdateRequest {
    /// New password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// New email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
    /// New language ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_id: Option<u64>,
    /// New role IDs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<u64>>,
}
