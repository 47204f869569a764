//! Integration tests for decoding SOLUS IO list responses.
//!
//! The fixtures are list pages as the API sends them, envelope included.

use solus::{
    BackupScheduleType, BootMode, IconType, IpVersion, Page, StorageTypeName, Task, TaskStatus,
    VirtualServer, VirtualServerStatus, VirtualizationType,
};
use std::fs;
use std::path::PathBuf;

/// Get the path to the test fixtures directory.
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_fixture(name: &str) -> String {
    let fixture_path = fixtures_dir().join(name);
    fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read fixture at {}: {}",
            fixture_path.display(),
            e
        )
    })
}

fn servers_page() -> Page<VirtualServer> {
    let json_data = load_fixture("servers_page.json");
    serde_json::from_str(&json_data)
        .unwrap_or_else(|e| panic!("Failed to decode servers page: {e}\nJSON: {json_data}"))
}

#[test]
fn test_servers_page_envelope() {
    let page = servers_page();

    assert_eq!(page.data.len(), 2);
    assert_eq!(page.meta.current_page, 1);
    assert_eq!(page.meta.last_page, 3);
    assert_eq!(page.meta.total, 6);
    assert_eq!(
        page.links.next,
        "https://solus.example.com/api/v1/servers?page=2"
    );
    // null links decode as empty
    assert!(page.links.prev.is_empty());
}

#[test]
fn test_full_server() {
    let page = servers_page();
    let server = &page.data[0];

    assert_eq!(server.id, 101);
    assert_eq!(server.virtualization_type, VirtualizationType::Kvm);
    assert_eq!(server.status, VirtualServerStatus::Started);
    assert_eq!(server.boot_mode, BootMode::Disk);
    assert_eq!(
        server.uuid.map(|uuid| uuid.to_string()).as_deref(),
        Some("5c1d6f0e-4a8c-4f0e-9d6a-1f2b3c4d5e6f")
    );
    assert_eq!(server.specifications.vcpu, 2);

    // Network
    let ip = &server.ips[0];
    assert_eq!(ip.ip, "203.0.113.10");
    assert_eq!(ip.ip_block.version, IpVersion::V4);
    assert_eq!(ip.ip_block.ns_2, "8.8.8.8");

    // Placement
    assert_eq!(server.location.icon.kind, IconType::Flags);
    assert_eq!(server.plan.storage_type, StorageTypeName::Fb);
    assert!(server.plan.limits.disk_iops.is_enabled);
    assert_eq!(server.plan.price.currency_code, "USD");

    // Ownership
    assert_eq!(server.user.roles[0].name, "Admin");
    assert_eq!(server.project.owner.email, "admin@example.com");
    assert_eq!(server.ssh_keys[0].name, "laptop");

    // Backups
    let backups = &server.backup_settings;
    assert!(backups.enabled);
    assert_eq!(backups.schedule.kind, BackupScheduleType::Daily);
    assert_eq!(backups.schedule.time.minutes, 30);
    assert_eq!(backups.limit.limit, 7);
}

#[test]
fn test_sparse_server() {
    let page = servers_page();
    let server = &page.data[1];

    assert_eq!(server.id, 102);
    assert_eq!(server.virtualization_type, VirtualizationType::Vz);
    assert_eq!(server.status, VirtualServerStatus::NotExists);
    assert_eq!(server.boot_mode, BootMode::Rescue);
    assert!(server.uuid.is_none());
    assert!(server.is_processing);
    assert!(server.ips.is_empty());
    assert_eq!(server.plan.id, 0);
}

#[test]
fn test_tasks_page() {
    let json_data = load_fixture("tasks_page.json");
    let page: Page<Task> = serde_json::from_str(&json_data).unwrap();

    assert_eq!(page.data.len(), 3);
    assert!(page.links.next.is_empty());

    let finished: Vec<u64> = page
        .data
        .iter()
        .filter(|task| task.is_finished())
        .map(|task| task.id)
        .collect();
    assert_eq!(finished, vec![31, 33]);

    assert_eq!(page.data[1].status, TaskStatus::Running);
    assert_eq!(page.data[1].action, solus::task_actions::SERVER_RESTART);
}
