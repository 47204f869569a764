//! OS images and their versions.

use crate::models::applications::Icon;
use crate::models::common::{CloudInitVersion, VirtualizationType};
use serde::{Deserialize, Serialize};
use solus_core::de::nullable;

/// An OS image, e.g. "Ubuntu".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OsImage {
    /// OS image ID.
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
    /// OS image name.
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    /// Icon.
    #[serde(deserialize_with = "nullable")]
    pub icon: Icon,
    /// Available versions.
    #[serde(deserialize_with = "nullable")]
    pub versions: Vec<OsImageVersion>,
    /// Selected by default.
    #[serde(deserialize_with = "nullable")]
    pub is_default: bool,
}

/// Payload for creating or updating an OS image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsImageRequest {
    /// OS image name.
    pub name: String,
    /// Icon ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_id: Option<u64>,
    /// Visible to end users.
    pub is_visible: bool,
}

/// A version of an OS image, e.g. "22.04".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OsImageVersion {
    /// Version ID.
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
    /// Sort position.
    #[serde(deserialize_with = "nullable")]
    pub position: f64,
    /// Version label.
    #[serde(deserialize_with = "nullable")]
    pub version: String,
    /// Virtualization type the image runs on.
    #[serde(deserialize_with = "nullable")]
    pub virtualization_type: VirtualizationType,
    /// Image URL, or template name for containers.
    #[serde(deserialize_with = "nullable")]
    pub url: String,
    /// Cloud-init flavour.
    #[serde(deserialize_with = "nullable")]
    pub cloud_init_version: CloudInitVersion,
    /// Parent OS image ID.
    #[serde(deserialize_with = "nullable")]
    pub os_image_id: u64,
    /// Visible to end users.
    #[serde(deserialize_with = "nullable")]
    pub is_visible: bool,
    /// Whether SSH keys can be installed.
    #[serde(deserialize_with = "nullable")]
    pub is_ssh_keys_supported: bool,
}

/// Payload for creating or updating an OS image version.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OsImageVersionRequest {
    /// Sort position.
    pub position: f64,
    /// Version label.
    pub version: String,
    /// Virtualization type the image runs on.
    pub virtualization_type: VirtualizationType,
    /// Image URL, or template name for containers.
    pub url: String,
    /// Cloud-init flavour.
    pub cloud_init_version: CloudInitVersion,
    /// Visible to end users.
    pub is_visible: bool,
}
