//! Projects group servers owned by a user and shared with members.

use crate::models::users::User;
use serde::{Deserialize, Serialize};
use solus_core::de::nullable;

/// A project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    /// Project ID.
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
    /// Project name.
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    /// Description.
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    /// Number of members.
    #[serde(deserialize_with = "nullable")]
    pub members: u64,
    /// Whether the current user owns the project.
    #[serde(deserialize_with = "nullable")]
    pub is_owner: bool,
    /// Whether this is the user's default project.
    #[serde(deserialize_with = "nullable")]
    pub is_default: bool,
    /// Project owner.
    #[serde(deserialize_with = "nullable")]
    pub owner: User,
    /// Number of servers.
    #[serde(deserialize_with = "nullable")]
    pub servers: u64,
}

/// Payload for creating or updating a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRequest {
    /// Project name.
    pub name: String,
    /// Description.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// Payload for creating a server inside a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectServersCreateRequest {
    /// Server name.
    pub name: String,
    /// Plan ID.
    pub plan_id: u64,
    /// Location ID.
    pub location_id: u64,
    /// OS image version ID.
    pub os_image_version_id: u64,
    /// IDs of SSH keys to install.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ssh_keys: Vec<u64>,
    /// Cloud-init user data.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub user_data: String,
}
