//! Plans describe the resources of a server.

use crate::models::common::{ImageFormat, VirtualizationType};
use crate::models::storage::StorageTypeName;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use solus_core::de::nullable;

/// Resources granted by a plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanParams {
    /// Disk size in GiB.
    #[serde(deserialize_with = "nullable")]
    pub disk: u64,
    /// RAM in bytes.
    #[serde(deserialize_with = "nullable")]
    pub ram: u64,
    /// Virtual CPUs.
    #[serde(deserialize_with = "nullable")]
    pub vcpu: u64,
}

/// A limit with an on/off switch and a unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnitLimit {
    /// Whether the limit applies.
    #[serde(deserialize_with = "nullable")]
    pub is_enabled: bool,
    /// Limit value.
    #[serde(deserialize_with = "nullable")]
    pub limit: u64,
    /// Unit of the value, e.g. `Bps` or `iops`.
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub unit: String,
}

/// Disk limits of a plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanLimits {
    /// Disk bandwidth.
    #[serde(deserialize_with = "nullable")]
    pub disk_bandwidth: UnitLimit,
    /// Disk operations per second.
    #[serde(deserialize_with = "nullable")]
    pub disk_iops: UnitLimit,
}

/// Backup settings of a plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanBackupSettings {
    /// Whether incremental backups are allowed.
    #[serde(deserialize_with = "nullable")]
    pub is_incremental_backup_enabled: bool,
    /// Incremental backups kept per full backup.
    #[serde(deserialize_with = "nullable")]
    pub incremental_backups_limit: u32,
}

/// Price of a plan, formatted by the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanPrice {
    /// Price per hour.
    #[serde(deserialize_with = "nullable")]
    pub per_hour: String,
    /// Price per month.
    #[serde(deserialize_with = "nullable")]
    pub per_month: String,
    /// ISO currency code.
    #[serde(deserialize_with = "nullable")]
    pub currency_code: String,
    /// Whether the prices include taxes.
    #[serde(deserialize_with = "nullable")]
    pub taxes_inclusive: bool,
    /// Applied taxes.
    #[serde(deserialize_with = "nullable")]
    pub taxes: Vec<Value>,
    /// Total price.
    #[serde(deserialize_with = "nullable")]
    pub total_price: String,
    /// Backup price.
    #[serde(deserialize_with = "nullable")]
    pub backup_price: String,
}

/// A plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Plan {
    /// Plan ID.
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
    /// Plan name.
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    /// Virtualization type.
    #[serde(deserialize_with = "nullable")]
    pub virtualization_type: VirtualizationType,
    /// Granted resources.
    #[serde(deserialize_with = "nullable")]
    pub params: PlanParams,
    /// Storage type servers are placed on.
    #[serde(deserialize_with = "nullable")]
    pub storage_type: StorageTypeName,
    /// Disk image format.
    #[serde(deserialize_with = "nullable")]
    pub image_format: ImageFormat,
    /// Selected by default.
    #[serde(deserialize_with = "nullable")]
    pub is_default: bool,
    /// Whether snapshots can be taken.
    #[serde(deserialize_with = "nullable")]
    pub is_snapshot_available: bool,
    /// Whether snapshots are enabled.
    #[serde(deserialize_with = "nullable")]
    pub is_snapshots_enabled: bool,
    /// Whether backups can be taken.
    #[serde(deserialize_with = "nullable")]
    pub is_backup_available: bool,
    /// Backup price in percent of the plan price.
    #[serde(deserialize_with = "nullable")]
    pub backup_price: f64,
    /// Backup settings.
    #[serde(deserialize_with = "nullable")]
    pub backup_settings: PlanBackupSettings,
    /// Visible to end users.
    #[serde(deserialize_with = "nullable")]
    pub is_visible: bool,
    /// Disk limits.
    #[serde(deserialize_with = "nullable")]
    pub limits: PlanLimits,
    /// Billing tokens per hour.
    #[serde(deserialize_with = "nullable")]
    pub tokens_per_hour: f64,
    /// Billing tokens per month.
    #[serde(deserialize_with = "nullable")]
    pub tokens_per_month: f64,
    /// Sort position.
    #[serde(deserialize_with = "nullable")]
    pub position: f64,
    /// Price.
    #[serde(deserialize_with = "nullable")]
    pub price: PlanPrice,
}

/// Payload for creating or updating a plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    /// Plan name.
    pub name: String,
    /// Virtualization type.
    pub virtualization_type: VirtualizationType,
    /// Granted resources.
    pub params: PlanParams,
    /// Storage type servers are placed on.
    pub storage_type: StorageTypeName,
    /// Disk image format.
    pub image_format: ImageFormat,
    /// Visible to end users.
    pub is_visible: bool,
    /// Whether snapshots are enabled.
    pub is_snapshots_enabled: bool,
    /// Whether backups can be taken.
    pub is_backup_available: bool,
    /// Backup price in percent of the plan price.
    pub backup_price: f64,
    /// Disk limits.
    pub limits: PlanLimits,
    /// Billing tokens per hour.
    pub token_per_hour: f64,
    /// Billing tokens per month.
    pub token_per_month: f64,
    /// Sort position.
    pub position: f64,
}
