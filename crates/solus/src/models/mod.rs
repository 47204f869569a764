//! Resource models exchanged with the SOLUS IO API.
//!
//! Response models default every missing field, so partial payloads decode.
//! Request models skip unset optional fields when serialized.

/// Generate a string enum with fixed wire names.
///
/// Values this client does not know decode to `Unknown` instead of failing,
/// which is also the default.
macro_rules! wire_enum {
    ($(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $wire)]
                $variant,
            )+
            /// A value this client does not know about.
            #[default]
            #[serde(other, rename = "unknown")]
            Unknown,
        }

        impl $name {
            /// Wire name of the value.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                    Self::Unknown => "unknown",
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

mod activity_logs;
mod applications;
mod backups;
mod common;
mod compute_resources;
mod ip_blocks;
mod license;
mod locations;
mod os_images;
mod permissions;
mod plans;
mod projects;
mod servers_migrations;
mod settings;
mod snapshots;
mod ssh_keys;
mod storage;
mod users;
mod virtual_servers;

pub use activity_logs::ActivityLog;
pub use applications::{Application, ApplicationRequest, Icon, IconType, LoginLink, LoginLinkType};
pub use backups::{
    Backup, BackupCreationMethod, BackupNode, BackupNodeRequest, BackupNodeType, BackupStatus,
    BackupType,
};
pub use common::{CloudInitVersion, ImageFormat, VirtualizationType};
pub use compute_resources::{
    BalanceStrategy, ComputeResource, ComputeResourceCreateRequest, ComputeResourceInstallStep,
    ComputeResourceServerCreateRequest, ComputeResourceSettings, ComputeResourceSettingsLimits,
    ComputeResourceSettingsNetwork, ComputeResourceStatus, InstallStepStatus, LoginType,
};
pub use ip_blocks::{IpBlock, IpBlockIpAddress, IpBlockRequest, IpVersion};
pub use license::{License, LicenseActivateRequest};
pub use locations::{Location, LocationRequest};
pub use os_images::{OsImage, OsImageRequest, OsImageVersion, OsImageVersionRequest};
pub use permissions::Permission;
pub use plans::{
    Plan, PlanBackupSettings, PlanLimits, PlanParams, PlanPrice, PlanRequest, UnitLimit,
};
pub use projects::{Project, ProjectRequest, ProjectServersCreateRequest};
pub use servers_migrations::{ServersMigration, ServersMigrationRequest};
pub use settings::{
    Settings, SettingsComputeResource, SettingsFeatures, SettingsMail, SettingsNetworkRules,
    SettingsNonExistentVmsRemover, SettingsRegistration, SettingsTheme, SettingsTokenApi,
    SettingsUpdate, SettingsUpdateRequest, SettingsUpdateSchedule,
};
pub use snapshots::{Snapshot, SnapshotRequest, SnapshotStatus};
pub use ssh_keys::{SshKey, SshKeyCreateRequest};
pub use storage::{Storage, StorageCreateRequest, StorageType, StorageTypeName};
pub use users::{Role, RoleRequest, User, UserCreateRequest, UserStatus, UserUpdateRequest};
pub use virtual_servers::{
    BackupSchedule, BackupScheduleTime, BackupScheduleType, BootMode, DiskCacheMode, DiskDriver,
    Firmware, VirtualServer, VirtualServerBackupSettings, VirtualServerCreateRequest,
    VirtualServerDisk, VirtualServerResizeRequest, VirtualServerSettingsUpdateRequest,
    VirtualServerSpecifications, VirtualServerStatus, VirtualServerUpdateRequest,
    VirtualServerUsage,
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde::de::DeserializeOwned;
    use serde::Serialize;
    use serde_json::{json, Map, Value};
    use std::fmt::Debug;

    #[track_caller]
    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + Debug,
    {
        let encoded = serde_json::to_value(value).unwrap();
        let decoded: T = serde_json::from_value(encoded.clone()).unwrap();
        assert_eq!(&decoded, value, "decoded from {encoded}");
    }

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    fn backup_settings() -> VirtualServerBackupSettings {
        VirtualServerBackupSettings {
            enabled: true,
            schedule: BackupSchedule {
                kind: BackupScheduleType::Weekly,
                time: BackupScheduleTime { hour: 3, minutes: 30 },
                days: vec![1, 4],
            },
            limit: UnitLimit {
                is_enabled: true,
                limit: 7,
                unit: "units".to_string(),
            },
        }
    }

    #[test]
    fn test_wire_enum_known_and_unknown_values() {
        let status: VirtualServerStatus = serde_json::from_str(r#""not exists""#).unwrap();
        assert_eq!(status, VirtualServerStatus::NotExists);
        assert_eq!(status.to_string(), "not exists");

        let status: VirtualServerStatus = serde_json::from_str(r#""migrating""#).unwrap();
        assert_eq!(status, VirtualServerStatus::Unknown);
        assert_eq!(VirtualServerStatus::default(), VirtualServerStatus::Unknown);

        assert_eq!(
            serde_json::to_string(&CloudInitVersion::V2Debian10).unwrap(),
            r#""v2-debian10""#
        );
    }

    #[test]
    fn test_null_fields_decode_as_defaults() {
        let server: VirtualServer = serde_json::from_value(json!({
            "id": 1,
            "name": "vm",
            "description": null,
            "uuid": null,
            "status": null,
            "ips": null,
            "plan": null,
            "fqdns": null,
            "is_suspended": null,
            "usage": null,
            "backup_settings": {"enabled": null, "schedule": null},
            "next_scheduled_backup_at": null,
            "ssh_keys": [{"id": 2, "name": null, "body": null}]
        }))
        .unwrap();

        assert_eq!(server.id, 1);
        assert_eq!(server.description, "");
        assert_eq!(server.uuid, None);
        assert_eq!(server.status, VirtualServerStatus::Unknown);
        assert!(server.ips.is_empty());
        assert_eq!(server.plan, Plan::default());
        assert!(!server.is_suspended);
        assert_eq!(server.backup_settings, VirtualServerBackupSettings::default());
        assert_eq!(server.ssh_keys[0].id, 2);
        assert_eq!(server.ssh_keys[0].name, "");
    }

    #[test]
    fn test_request_payloads_survive_round_trip() {
        assert_round_trip(&ApplicationRequest {
            name: "WordPress".to_string(),
            url: "https://example.com/wp.qcow2".to_string(),
            icon_id: Some(4),
            cloud_init_version: CloudInitVersion::V0Centos6,
            user_data_template: "#cloud-config".to_string(),
            json_schema: "{}".to_string(),
            is_visible: true,
            login_link: LoginLink {
                kind: LoginLinkType::Url,
                content: "https://{{ ip }}/wp-admin".to_string(),
            },
        });
        assert_round_trip(&BackupNodeRequest {
            name: "rsync".to_string(),
            kind: BackupNodeType::SshRsync,
            compute_resources: vec![1, 2],
            credentials: object(json!({"host": "backup.example.com", "port": 22})),
        });
        assert_round_trip(&ComputeResourceCreateRequest {
            name: "cr".to_string(),
            host: "cr.example.com".to_string(),
            login: "root".to_string(),
            port: 22,
            login_type: LoginType::Key,
            password: Some("secret".to_string()),
            key: Some("-----BEGIN KEY-----".to_string()),
            agent_port: 8443,
            ip_blocks: vec![3],
            locations: vec![5],
        });
        assert_round_trip(&ComputeResourceServerCreateRequest {
            name: "vm".to_string(),
            description: "test vm".to_string(),
            password: "secret".to_string(),
            plan_id: 1,
            os_image_version_id: Some(2),
            application_id: Some(3),
            application_data: object(json!({"domain": "example.com"})),
            ssh_keys: vec![4],
            user_data: "#cloud-config".to_string(),
            fqdns: vec!["vm.example.com".to_string()],
            user_id: Some(5),
            project_id: Some(6),
            ip_types: vec![IpVersion::V4, IpVersion::V6],
        });
        assert_round_trip(&IpBlockRequest {
            compute_resources: vec![1],
            name: "block".to_string(),
            version: IpVersion::V4,
            gateway: "192.0.2.1".to_string(),
            ns_1: "192.0.2.53".to_string(),
            ns_2: "192.0.2.54".to_string(),
            netmask: "255.255.255.0".to_string(),
            from: "192.0.2.10".to_string(),
            to: "192.0.2.20".to_string(),
            range: "2001:db8::/32".to_string(),
            subnet: Some(64),
        });
        assert_round_trip(&LicenseActivateRequest {
            activation_code: "A1B2-C3D4".to_string(),
        });
        assert_round_trip(&LocationRequest {
            name: "Amsterdam".to_string(),
            description: "NL".to_string(),
            icon_id: Some(2),
            is_default: true,
            is_visible: true,
            compute_resources: vec![1, 2],
        });
        assert_round_trip(&OsImageRequest {
            name: "Debian".to_string(),
            icon_id: Some(1),
            is_visible: true,
        });
        assert_round_trip(&OsImageVersionRequest {
            position: 1.5,
            version: "12".to_string(),
            virtualization_type: VirtualizationType::Kvm,
            url: "https://example.com/debian-12.qcow2".to_string(),
            cloud_init_version: CloudInitVersion::V0,
            is_visible: true,
        });
        assert_round_trip(&PlanRequest {
            name: "small".to_string(),
            virtualization_type: VirtualizationType::Vz,
            params: PlanParams {
                disk: 10,
                ram: 1_073_741_824,
                vcpu: 1,
            },
            storage_type: StorageTypeName::Lvm,
            image_format: ImageFormat::Qcow2,
            is_visible: true,
            is_snapshots_enabled: true,
            is_backup_available: true,
            backup_price: 0.5,
            limits: PlanLimits {
                disk_bandwidth: UnitLimit {
                    is_enabled: true,
                    limit: 100,
                    unit: "Bps".to_string(),
                },
                disk_iops: UnitLimit::default(),
            },
            token_per_hour: 0.25,
            token_per_month: 2.5,
            position: 3.0,
        });
        assert_round_trip(&ProjectRequest {
            name: "project".to_string(),
            description: "described".to_string(),
        });
        assert_round_trip(&ProjectServersCreateRequest {
            name: "vm".to_string(),
            plan_id: 1,
            location_id: 2,
            os_image_version_id: 3,
            ssh_keys: vec![4],
            user_data: "#cloud-config".to_string(),
        });
        assert_round_trip(&RoleRequest {
            name: "admin".to_string(),
            permissions: vec![1, 2, 3],
        });
        assert_round_trip(&ServersMigrationRequest {
            is_live: true,
            preserve_ips: false,
            destination_compute_resource_id: 1,
            servers: vec![2, 3],
        });
        assert_round_trip(&SettingsUpdateRequest {
            hostname: Some("new-hostname.tld".to_string()),
            force_autoupdate: Some(false),
            send_statistic: Some(true),
            update: Some(SettingsUpdate {
                method: "auto".to_string(),
                channel: "stable".to_string(),
            }),
            network_rules: Some(SettingsNetworkRules {
                dhcp: true,
                smtp: true,
                ..SettingsNetworkRules::default()
            }),
            features: Some(SettingsFeatures {
                allow_registration: true,
                ..SettingsFeatures::default()
            }),
            theme: Some(SettingsTheme {
                brand_name: "Cloud".to_string(),
                ..SettingsTheme::default()
            }),
        });
        assert_round_trip(&SnapshotRequest {
            name: "before upgrade".to_string(),
        });
        assert_round_trip(&SshKeyCreateRequest {
            name: "laptop".to_string(),
            body: "ssh-ed25519 AAAA".to_string(),
            user_id: 1,
        });
        assert_round_trip(&StorageCreateRequest {
            type_id: 2,
            path: "/var/lib/vz".to_string(),
            thin_pool: "pool0".to_string(),
            is_available_for_balancing: true,
        });
        assert_round_trip(&UserCreateRequest {
            password: "secret".to_string(),
            email: "user@example.com".to_string(),
            status: Some(UserStatus::Locked),
            language_id: Some(1),
            roles: vec![2],
        });
        assert_round_trip(&UserUpdateRequest {
            password: Some("secret".to_string()),
            email: Some("user@example.com".to_string()),
            status: Some(UserStatus::Active),
            language_id: Some(1),
            roles: Some(vec![]),
        });
        assert_round_trip(&VirtualServerCreateRequest {
            name: "vm".to_string(),
            boot_mode: Some(BootMode::Rescue),
            description: "test vm".to_string(),
            user_data: "#cloud-config".to_string(),
            fqdns: vec!["vm.example.com".to_string()],
            password: "secret".to_string(),
            ssh_keys: vec![1],
            plan_id: Some(2),
            project_id: Some(3),
            location_id: Some(4),
            compute_resource_id: Some(5),
            os_image_version_id: Some(6),
            application_id: Some(7),
            application_data: object(json!({"domain": "example.com"})),
            primary_ip: Some("192.0.2.10".to_string()),
            ip_types: vec![IpVersion::V4],
            additional_ip_count: Some(1),
            additional_ipv6_count: Some(2),
            mac_address: Some("52:54:00:12:34:56".to_string()),
            firmware: Some(Firmware::Efi),
        });
        assert_round_trip(&VirtualServerUpdateRequest {
            name: Some("renamed".to_string()),
            boot_mode: Some(BootMode::Disk),
            description: Some(String::new()),
            user_data: Some("#cloud-config".to_string()),
            fqdns: Some(vec!["vm.example.com".to_string()]),
            backup_settings: Some(backup_settings()),
        });
        assert_round_trip(&VirtualServerSettingsUpdateRequest {
            disk_cache_mode: Some(DiskCacheMode::None),
            disk_driver: Some(DiskDriver::Scsi),
            firmware: Some(Firmware::Bios),
        });
        assert_round_trip(&VirtualServerResizeRequest {
            preserve_disk: true,
            plan_id: 9,
            backup_settings: Some(backup_settings()),
        });
    }

    #[test]
    fn test_default_requests_survive_round_trip() {
        assert_round_trip(&ComputeResourceServerCreateRequest::default());
        assert_round_trip(&UserUpdateRequest::default());
        assert_round_trip(&VirtualServerCreateRequest::default());
        assert_round_trip(&SettingsUpdateRequest::default());
    }
}
