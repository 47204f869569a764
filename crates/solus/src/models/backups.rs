//! Backups and backup nodes.

use crate::models::compute_resources::ComputeResource;
use crate::models::users::User;
use crate::models::virtual_servers::VirtualServer;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use solus_core::de::nullable;

wire_enum! {
    /// Backup type.
    BackupType {
        /// Full copy of the disk
        Full => "full",
        /// Changes since the previous backup
        Incremental => "incremental",
    }
}

wire_enum! {
    /// How a backup was started.
    BackupCreationMethod {
        /// By the backup schedule
        Auto => "auto",
        /// By a user
        Manual => "manual",
    }
}

wire_enum! {
    /// Backup status.
    BackupStatus {
        /// Waiting to start
        Pending => "pending",
        /// Running
        InProgress => "in_progress",
        /// Finished successfully
        Created => "created",
        /// Finished with an error
        Failed => "failed",
    }
}

impl BackupStatus {
    /// Returns true once the backup will not change anymore.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self, Self::Created | Self::Failed)
    }
}

/// A server backup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Backup {
    /// Backup ID.
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
    /// Backup type.
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub kind: BackupType,
    /// How the backup was started.
    #[serde(deserialize_with = "nullable")]
    pub creation_method: BackupCreationMethod,
    /// Backup status.
    #[serde(deserialize_with = "nullable")]
    pub status: BackupStatus,
    /// Size in GiB.
    #[serde(deserialize_with = "nullable")]
    pub size: f64,
    /// Backed up server.
    #[serde(deserialize_with = "nullable")]
    pub compute_resource_vm: VirtualServer,
    /// Node storing the backup.
    #[serde(deserialize_with = "nullable")]
    pub backup_node: BackupNode,
    /// User who started the backup.
    #[serde(deserialize_with = "nullable")]
    pub creator: User,
    /// Creation time.
    #[serde(deserialize_with = "nullable")]
    pub created_at: String,
    /// Progress in percent.
    #[serde(deserialize_with = "nullable")]
    pub backup_progress: f64,
    /// Why the backup failed.
    #[serde(deserialize_with = "nullable")]
    pub backup_fail_reason: String,
    /// Disk size in GiB.
    #[serde(deserialize_with = "nullable")]
    pub disk: u64,
}

impl Backup {
    /// Returns true once the backup will not change anymore.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.status.is_finished()
    }
}

wire_enum! {
    /// How a backup node is reached.
    BackupNodeType {
        /// rsync over SSH
        SshRsync => "ssh-rsync",
        /// Hetzner storage box
        HetznerStorageBox => "hetzner-storage-box",
    }
}

/// A node storing backups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackupNode {
    /// Node ID.
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
    /// Node name.
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    /// Node type.
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub kind: BackupNodeType,
    /// Type-specific connection credentials.
    #[serde(deserialize_with = "nullable")]
    pub credentials: Map<String, Value>,
    /// Number of compute resources backing up to this node.
    #[serde(deserialize_with = "nullable")]
    pub compute_resources_count: u64,
    /// Number of stored backups.
    #[serde(deserialize_with = "nullable")]
    pub backups_count: u64,
    /// Total size of stored backups in GiB.
    #[serde(deserialize_with = "nullable")]
    pub total_backups_size: f64,
    /// Compute resources backing up to this node.
    #[serde(deserialize_with = "nullable")]
    pub compute_resources: Vec<ComputeResource>,
}

/// Payload for creating or updating a backup node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackupNodeRequest {
    /// Node name.
    pub name: String,
    /// Node type.
    #[serde(rename = "type")]
    pub kind: BackupNodeType,
    /// IDs of compute resources backing up to this node.
    pub compute_resources: Vec<u64>,
    /// Type-specific connection credentials.
    pub credentials: Map<String, Value>,
}
