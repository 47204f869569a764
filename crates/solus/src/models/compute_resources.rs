//! Compute resources, the hypervisor hosts servers run on.

use crate::models::ip_blocks::IpVersion;
use crate::models::locations::Location;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use solus_core::de::nullable;

wire_enum! {
    /// Compute resource status.
    ComputeResourceStatus {
        /// Ready to host servers
        Active => "active",
        /// Agent is being installed
        Commissioning => "commissioning",
        /// Network is being configured
        ConfigureNetwork => "configure_network",
        /// Installation failed
        Failed => "failed",
        /// Agent is unreachable
        Unavailable => "unavailable",
    }
}

/// A compute resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComputeResource {
    /// Compute resource ID.
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
    /// Compute resource name.
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    /// Host name or IP address.
    #[serde(deserialize_with = "nullable")]
    pub host: String,
    /// Agent port.
    #[serde(deserialize_with = "nullable")]
    pub agent_port: u16,
    /// Status.
    #[serde(deserialize_with = "nullable")]
    pub status: ComputeResourceStatus,
    /// Locations the compute resource belongs to.
    #[serde(deserialize_with = "nullable")]
    pub locations: Vec<Location>,
}

wire_enum! {
    /// SSH authentication used while commissioning a compute resource.
    LoginType {
        /// Password
        Password => "lpass",
        /// Private key
        Key => "lkey",
    }
}

/// Payload for adding a compute resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputeResourceCreateRequest {
    /// Compute resource name.
    pub name: String,
    /// Host name or IP address.
    pub host: String,
    /// SSH login.
    pub login: String,
    /// SSH port.
    pub port: u16,
    /// SSH authentication type.
    #[serde(rename = "type")]
    pub login_type: LoginType,
    /// SSH password, for [`LoginType::Password`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// SSH private key, for [`LoginType::Key`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Agent port.
    pub agent_port: u16,
    /// IDs of IP blocks to attach.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ip_blocks: Vec<u64>,
    /// IDs of locations to join.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<u64>,
}

wire_enum! {
    /// Status of an installation step.
    InstallStepStatus {
        /// Running
        Running => "running",
        /// Finished
        Done => "done",
        /// Failed
        Error => "error",
    }
}

/// A step of the agent installation on a compute resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComputeResourceInstallStep {
    /// Step ID.
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
    /// Compute resource ID.
    #[serde(deserialize_with = "nullable")]
    pub compute_resource_id: u64,
    /// Step title.
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    /// Step status.
    #[serde(deserialize_with = "nullable")]
    pub status: InstallStepStatus,
    /// Status details.
    #[serde(deserialize_with = "nullable")]
    pub status_text: String,
    /// Progress in percent.
    #[serde(deserialize_with = "nullable")]
    pub progress: u32,
}

/// Payload for creating a server directly on a compute resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComputeResourceServerCreateRequest {
    /// Server name.
    pub name: String,
    /// Description.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Root password.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub password: String,
    /// Plan ID.
    pub plan_id: u64,
    /// OS image version ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os_image_version_id: Option<u64>,
    /// Application ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_id: Option<u64>,
    /// Application form values.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub application_data: Map<String, Value>,
    /// IDs of SSH keys to install.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ssh_keys: Vec<u64>,
    /// Cloud-init user data.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub user_data: String,
    /// Fully qualified domain names.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fqdns: Vec<String>,
    /// Owner ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    /// Project ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,
    /// IP versions to assign.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ip_types: Vec<IpVersion>,
}

wire_enum! {
    /// How new servers are placed on storages.
    BalanceStrategy {
        /// Cycle through storages
        RoundRobin => "round-robin",
        /// Pick a random storage
        Random => "random",
        /// Pick the storage with the most free space
        MostStorageSpaceAvailable => "most-storage-space-available",
    }
}

/// Resource limits of a compute resource, passed through as sent.
pub type ComputeResourceSettingsLimits = Map<String, Value>;

/// Network settings of a compute resource, passed through as sent.
pub type ComputeResourceSettingsNetwork = Map<String, Value>;

/// Settings of a compute resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComputeResourceSettings {
    /// Image cache directory.
    #[serde(deserialize_with = "nullable")]
    pub cache_path: String,
    /// ISO image directory.
    #[serde(deserialize_with = "nullable")]
    pub iso_path: String,
    /// Scratch directory for backups.
    #[serde(deserialize_with = "nullable")]
    pub backup_tmp_path: String,
    /// VNC proxy port.
    #[serde(deserialize_with = "nullable")]
    pub vnc_proxy_port: u16,
    /// Resource limits.
    #[serde(deserialize_with = "nullable")]
    pub limits: ComputeResourceSettingsLimits,
    /// Network settings.
    #[serde(deserialize_with = "nullable")]
    pub network: ComputeResourceSettingsNetwork,
    /// Storage balancing strategy.
    #[serde(deserialize_with = "nullable")]
    pub balance_strategy: BalanceStrategy,
}
