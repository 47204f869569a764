//! Server snapshots.

use serde::{Deserialize, Serialize};
use solus_core::de::nullable;

wire_enum! {
    /// Snapshot status.
    SnapshotStatus {
        /// Ready to revert to
        Available => "available",
        /// Being created or reverted
        Processing => "processing",
        /// Creation failed
        Failed => "failed",
    }
}

/// A snapshot of a server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    /// Snapshot ID.
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
    /// Snapshot name.
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    /// Size in GiB.
    #[serde(deserialize_with = "nullable")]
    pub size: f64,
    /// Status.
    #[serde(deserialize_with = "nullable")]
    pub status: SnapshotStatus,
    /// Creation time.
    #[serde(deserialize_with = "nullable")]
    pub created_at: String,
}

/// Payload for taking a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotRequest {
    /// Snapshot name.
    pub name: String,
}
