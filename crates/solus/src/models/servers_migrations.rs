//! Moving servers between compute resources.

use crate::models::compute_resources::ComputeResource;
use serde::{Deserialize, Serialize};
use solus_core::de::nullable;
use solus_core::Task;

/// A batch migration and the tasks carrying it out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServersMigration {
    /// Migration ID.
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
    /// Where the servers are moved to.
    #[serde(deserialize_with = "nullable")]
    pub destination_compute_resource: ComputeResource,
    /// Parent task of the whole batch.
    #[serde(deserialize_with = "nullable")]
    pub task: Task,
    /// One task per migrated server.
    #[serde(deserialize_with = "nullable")]
    pub children: Vec<Task>,
}

/// Payload for starting a migration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServersMigrationRequest {
    /// Migrate without stopping the servers.
    pub is_live: bool,
    /// Keep the servers' IP addresses.
    pub preserve_ips: bool,
    /// Target compute resource ID.
    pub destination_compute_resource_id: u64,
    /// IDs of the servers to move.
    pub servers: Vec<u64>,
}
