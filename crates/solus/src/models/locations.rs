//! Locations group compute resources, usually by data center.

use crate::models::applications::Icon;
use crate::models::compute_resources::ComputeResource;
use serde::{Deserialize, Serialize};
use solus_core::de::nullable;

/// A location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    /// Location ID.
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
    /// Location name.
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    /// Flag icon.
    #[serde(deserialize_with = "nullable")]
    pub icon: Icon,
    /// Description.
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    /// Selected by default.
    #[serde(deserialize_with = "nullable")]
    pub is_default: bool,
    /// Visible to end users.
    #[serde(deserialize_with = "nullable")]
    pub is_visible: bool,
    /// Compute resources in the location.
    #[serde(deserialize_with = "nullable")]
    pub compute_resources: Vec<ComputeResource>,
}

/// Payload for creating or updating a location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRequest {
    /// Location name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Flag icon ID, `null` to clear it.
    pub icon_id: Option<u64>,
    /// Selected by default.
    pub is_default: bool,
    /// Visible to end users.
    pub is_visible: bool,
    /// IDs of compute resources in the location.
    pub compute_resources: Vec<u64>,
}
