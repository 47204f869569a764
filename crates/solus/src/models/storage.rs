//! Storages attached to compute resources.

use crate::models::common::ImageFormat;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use solus_core::de::nullable;

wire_enum! {
    /// Storage backend.
    StorageTypeName {
        /// Local file based storage
        Fb => "fb",
        /// LVM
        Lvm => "lvm",
        /// Thin provisioned LVM
        ThinLvm => "thinlvm",
        /// NFS share
        Nfs => "nfs",
        /// Virtuozzo storage
        Vz => "vz",
    }
}

/// A storage type and the image formats it supports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageType {
    /// Storage type ID.
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
    /// Storage backend.
    #[serde(deserialize_with = "nullable")]
    pub name: StorageTypeName,
    /// Supported image formats.
    #[serde(deserialize_with = "nullable")]
    pub formats: Vec<ImageFormat>,
}

/// A storage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Storage {
    /// Storage ID.
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
    /// Storage name.
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    /// Storage type.
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub kind: StorageType,
    /// Path on the compute resource.
    #[serde(deserialize_with = "nullable")]
    pub path: String,
    /// Mount point.
    #[serde(deserialize_with = "nullable")]
    pub mount: String,
    /// LVM thin pool.
    #[serde(deserialize_with = "nullable")]
    pub thin_pool: String,
    /// Whether new servers may be placed here.
    #[serde(deserialize_with = "nullable")]
    pub is_available_for_balancing: bool,
    /// Number of servers.
    #[serde(deserialize_with = "nullable")]
    pub servers_count: u64,
    /// Number of compute resources using the storage.
    #[serde(deserialize_with = "nullable")]
    pub compute_resources_count: u64,
    /// Free space in GiB.
    #[serde(deserialize_with = "nullable")]
    pub free_space: f64,
    /// Backend specific credentials.
    #[serde(deserialize_with = "nullable")]
    pub credentials: Map<String, Value>,
}

/// Payload for adding a storage to a compute resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageCreateRequest {
    /// Storage type ID.
    pub type_id: u64,
    /// Path on the compute resource.
    pub path: String,
    /// LVM thin pool.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub thin_pool: String,
    /// Whether new servers may be placed here.
    pub is_available_for_balancing: bool,
}
