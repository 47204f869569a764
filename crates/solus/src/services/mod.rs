//! Resource services.
//!
//! Each service borrows the [`ApiClient`](solus_core::ApiClient) of a
//! [`SolusClient`](crate::SolusClient) and maps its operations onto the
//! generic verbs: `get`, `list`, `create`, `update`, `patch`, `post`,
//! `delete`, `async_delete` and `async_post`.

pub mod account;
pub mod activity_logs;
pub mod applications;
pub mod backup_nodes;
pub mod backups;
pub mod compute_resources;
pub mod icons;
pub mod ip_blocks;
pub mod license;
pub mod locations;
pub mod os_image_versions;
pub mod os_images;
pub mod permissions;
pub mod plans;
pub mod projects;
pub mod roles;
pub mod servers_migrations;
pub mod settings;
pub mod snapshots;
pub mod ssh_keys;
pub mod storage;
pub mod storage_types;
pub mod tasks;
pub mod users;
pub mod virtual_servers;

pub use account::AccountService;
pub use activity_logs::{ActivityLogsFilter, ActivityLogsService};
pub use applications::ApplicationsService;
pub use backup_nodes::BackupNodesService;
pub use backups::BackupsService;
pub use compute_resources::ComputeResourcesService;
pub use icons::{IconsFilter, IconsService};
pub use ip_blocks::{IpBlocksFilter, IpBlocksService};
pub use license::LicenseService;
pub use locations::{LocationsFilter, LocationsService};
pub use os_image_versions::OsImageVersionsService;
pub use os_images::{OsImagesFilter, OsImagesService};
pub use permissions::PermissionsService;
pub use plans::{PlansFilter, PlansService};
pub use projects::{ProjectsFilter, ProjectsService};
pub use roles::RolesService;
pub use servers_migrations::ServersMigrationsService;
pub use settings::SettingsService;
pub use snapshots::SnapshotsService;
pub use ssh_keys::{SshKeysFilter, SshKeysService};
pub use storage::StorageService;
pub use storage_types::StorageTypesService;
pub use tasks::{TasksFilter, TasksService};
pub use users::{UsersFilter, UsersService};
pub use virtual_servers::{VirtualServersFilter, VirtualServersService};

#[cfg(test)]
pub(crate) mod testing {
    use serde_json::{json, Value};
    use solus_core::{ApiClient, ApiClientBuilder, ApiTokenAuthenticator, RetryPolicy};
    use wiremock::MockServer;

    /// Authenticated client without retries pointing at `server`.
    pub(crate) async fn client(server: &MockServer) -> ApiClient {
        ApiClientBuilder::new(server.uri())
            .unwrap()
            .with_retry_policy(RetryPolicy::no_retry())
            .build(&ApiTokenAuthenticator::new("token"))
            .await
            .unwrap()
    }

    /// Wrap `data` in the response envelope.
    pub(crate) fn envelope(data: Value) -> Value {
        json!({ "data": data })
    }

    /// Enveloped task as answered by asynchronous endpoints.
    pub(crate) fn task(id: u64) -> Value {
        envelope(json!({
            "id": id,
            "compute_resource_id": 1,
            "queue": "compute_resource_1",
            "action": "vm-start",
            "status": "pending",
            "progress": 0
        }))
    }
}
