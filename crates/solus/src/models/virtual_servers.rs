//! Virtual servers.

use crate::models::common::VirtualizationType;
use crate::models::ip_blocks::{IpBlockIpAddress, IpVersion};
use crate::models::locations::Location;
use crate::models::plans::{Plan, UnitLimit};
use crate::models::projects::Project;
use crate::models::ssh_keys::SshKey;
use crate::models::storage::Storage;
use crate::models::users::User;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use solus_core::de::nullable;
use uuid::Uuid;

wire_enum! {
    /// Virtual server status.
    VirtualServerStatus {
        /// Not created on the compute resource yet
        NotExists => "not exists",
        /// An action is running
        Processing => "processing",
        /// Running
        Started => "started",
        /// Stopped
        Stopped => "stopped",
        /// Paused
        Paused => "paused",
        /// The compute resource cannot report the status
        Unavailable => "unavailable",
    }
}

wire_enum! {
    /// Device a server boots from.
    BootMode {
        /// Its own disk
        Disk => "disk",
        /// The rescue image
        Rescue => "rescue",
    }
}

wire_enum! {
    /// Firmware of a KVM server.
    Firmware {
        /// Legacy BIOS
        Bios => "bios",
        /// UEFI
        Efi => "efi",
    }
}

wire_enum! {
    /// Disk cache mode of a KVM server.
    DiskCacheMode {
        /// No cache
        None => "none",
        /// Hypervisor default
        Default => "default",
        /// Direct synchronous I/O
        DirectSync => "directsync",
        /// Write-back cache
        Writeback => "writeback",
        /// Write-through cache
        Writethrough => "writethrough",
        /// Ignore flush requests
        Unsafe => "unsafe",
    }
}

wire_enum! {
    /// Disk bus of a KVM server.
    DiskDriver {
        /// SATA
        Sata => "sata",
        /// SCSI
        Scsi => "scsi",
        /// IDE
        Ide => "ide",
        /// VirtIO
        VirtIo => "virtio",
    }
}

wire_enum! {
    /// How often scheduled backups run.
    BackupScheduleType {
        /// Every month
        Monthly => "monthly",
        /// Every week
        Weekly => "weekly",
        /// Every day
        Daily => "daily",
    }
}

/// Resources of a virtual server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VirtualServerSpecifications {
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

/// Resource usage of a virtual server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VirtualServerUsage {
    /// CPU usage in percent.
    #[serde(deserialize_with = "nullable")]
    pub cpu: f64,
}

/// Time of day a scheduled backup starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackupScheduleTime {
    /// Hour, 0 to 23.
    #[serde(deserialize_with = "nullable")]
    pub hour: u8,
    /// Minutes, 0 to 59.
    #[serde(deserialize_with = "nullable")]
    pub minutes: u8,
}

/// Backup schedule of a virtual server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackupSchedule {
    /// Frequency.
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub kind: BackupScheduleType,
    /// Start time.
    #[serde(deserialize_with = "nullable")]
    pub time: BackupScheduleTime,
    /// Days of the week or month, depending on the frequency.
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "nullable")]
    pub days: Vec<u8>,
}

/// Backup settings of a virtual server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VirtualServerBackupSettings {
    /// Whether scheduled backups run.
    #[serde(deserialize_with = "nullable")]
    pub enabled: bool,
    /// Schedule.
    #[serde(deserialize_with = "nullable")]
    pub schedule: BackupSchedule,
    /// Number of backups kept.
    #[serde(deserialize_with = "nullable")]
    pub limit: UnitLimit,
}

/// A virtual server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VirtualServer {
    /// Server ID.
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
    /// Server name, also its host name.
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    /// Description.
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    /// Virtualization type.
    #[serde(deserialize_with = "nullable")]
    pub virtualization_type: VirtualizationType,
    /// UUID on the compute resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<Uuid>,
    /// Resources.
    #[serde(deserialize_with = "nullable")]
    pub specifications: VirtualServerSpecifications,
    /// Status.
    #[serde(deserialize_with = "nullable")]
    pub status: VirtualServerStatus,
    /// Assigned IP addresses.
    #[serde(deserialize_with = "nullable")]
    pub ips: Vec<IpBlockIpAddress>,
    /// Location.
    #[serde(deserialize_with = "nullable")]
    pub location: Location,
    /// Plan.
    #[serde(deserialize_with = "nullable")]
    pub plan: Plan,
    /// Fully qualified domain names.
    #[serde(deserialize_with = "nullable")]
    pub fqdns: Vec<String>,
    /// Boot device.
    #[serde(deserialize_with = "nullable")]
    pub boot_mode: BootMode,
    /// Whether the server is suspended.
    #[serde(deserialize_with = "nullable")]
    pub is_suspended: bool,
    /// Whether an action is running.
    #[serde(deserialize_with = "nullable")]
    pub is_processing: bool,
    /// Owner.
    #[serde(deserialize_with = "nullable")]
    pub user: User,
    /// Project.
    #[serde(deserialize_with = "nullable")]
    pub project: Project,
    /// Resource usage.
    #[serde(deserialize_with = "nullable")]
    pub usage: VirtualServerUsage,
    /// Backup settings.
    #[serde(deserialize_with = "nullable")]
    pub backup_settings: VirtualServerBackupSettings,
    /// Time of the next scheduled backup.
    #[serde(deserialize_with = "nullable")]
    pub next_scheduled_backup_at: String,
    /// Installed SSH keys.
    #[serde(deserialize_with = "nullable")]
    pub ssh_keys: Vec<SshKey>,
    /// Creation time.
    #[serde(deserialize_with = "nullable")]
    pub created_at: String,
}

/// Payload for creating a virtual server.
///
/// `boot_mode` defaults to [`BootMode::Disk`] when left unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VirtualServerCreateRequest {
    /// Server name.
    pub name: String,
    /// Boot device.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boot_mode: Option<BootMode>,
    /// Description.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Cloud-init user data.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub user_data: String,
    /// Fully qualified domain names.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fqdns: Vec<String>,
    /// Root password.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub password: String,
    /// IDs of SSH keys to install.
    #[serde(default)]
    pub ssh_keys: Vec<u64>,
    /// Plan ID.
    #[serde(default, rename = "plan", skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<u64>,
    /// Project ID.
    #[serde(default, rename = "project", skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,
    /// Location ID.
    #[serde(default, rename = "location", skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u64>,
    /// Compute resource to place the server on.
    #[serde(default, rename = "compute_resource", skip_serializing_if = "Option::is_none")]
    pub compute_resource_id: Option<u64>,
    /// OS image version ID.
    #[serde(default, rename = "os", skip_serializing_if = "Option::is_none")]
    pub os_image_version_id: Option<u64>,
    /// Application ID.
    #[serde(default, rename = "application", skip_serializing_if = "Option::is_none")]
    pub application_id: Option<u64>,
    /// Application form values.
    #[serde(default, rename = "applicationData", skip_serializing_if = "Map::is_empty")]
    pub application_data: Map<String, Value>,
    /// Primary IP address to assign.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_ip: Option<String>,
    /// IP versions to assign.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ip_types: Vec<IpVersion>,
    /// Number of additional IPv4 addresses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_ip_count: Option<u32>,
    /// Number of additional IPv6 addresses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_ipv6_count: Option<u32>,
    /// MAC address of the primary interface.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
    /// Firmware.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firmware: Option<Firmware>,
}

/// Payload for updating a virtual server. Unset fields are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualServerUpdateRequest {
    /// New name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New boot device.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boot_mode: Option<BootMode>,
    /// New description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New cloud-init user data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,
    /// New domain names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fqdns: Option<Vec<String>>,
    /// New backup settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_settings: Option<VirtualServerBackupSettings>,
}

/// Payload for changing hypervisor settings of a virtual server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualServerSettingsUpdateRequest {
    /// Disk cache mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk_cache_mode: Option<DiskCacheMode>,
    /// Disk bus.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk_driver: Option<DiskDriver>,
    /// Firmware.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firmware: Option<Firmware>,
}

/// Payload for moving a virtual server to another plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualServerResizeRequest {
    /// Keep the disk size, resizing only CPU and RAM.
    pub preserve_disk: bool,
    /// Target plan ID.
    pub plan_id: u64,
    /// Backup settings under the new plan.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_settings: Option<VirtualServerBackupSettings>,
}

/// A disk of a virtual server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VirtualServerDisk {
    /// Disk ID.
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
    /// Whether this is the boot disk.
    #[serde(deserialize_with = "nullable")]
    pub is_primary: bool,
    /// Disk name.
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    /// Provisioned size in GiB.
    #[serde(deserialize_with = "nullable")]
    pub size: u64,
    /// Used size in GiB.
    #[serde(deserialize_with = "nullable")]
    pub actual_size: u64,
    /// Path relative to the storage.
    #[serde(deserialize_with = "nullable")]
    pub path: String,
    /// Absolute path on the compute resource.
    #[serde(deserialize_with = "nullable")]
    pub full_path: String,
    /// Storage holding the disk.
    #[serde(deserialize_with = "nullable")]
    pub storage: Storage,
}
