//! Top-level SOLUS IO client.

use crate::services::{
    AccountService, ActivityLogsService, ApplicationsService, BackupNodesService, BackupsService,
    ComputeResourcesService, IconsService, IpBlocksService, LicenseService, LocationsService,
    OsImageVersionsService, OsImagesService, PermissionsService, PlansService, ProjectsService,
    RolesService, ServersMigrationsService, SettingsService, SnapshotsService, SshKeysService,
    StorageService, StorageTypesService, TasksService, UsersService, VirtualServersService,
};
use crate::Result;
use solus_core::{ApiClient, ApiClientBuilder, Authenticator, ClientConfig, RetryPolicy, SolusClientConfig};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Builder for [`SolusClient`].
#[derive(Debug, Clone)]
pub struct SolusClientBuilder {
    inner: ApiClientBuilder,
}

impl SolusClientBuilder {
    /// Create a builder for the given API base URL, e.g.
    /// `https://solus.example.com/api/v1/`.
    ///
    /// # Errors
    ///
    /// Fails when `base_url` is not a valid URL.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let inner = ApiClientBuilder::new(base_url)?;
        Ok(Self { inner })
    }

    /// Create a builder from loaded settings.
    ///
    /// # Errors
    ///
    /// Fails when the settings do not validate.
    pub fn from_config(config: &SolusClientConfig) -> Result<Self> {
        let inner = ApiClientBuilder::from_config(config)?;
        Ok(Self { inner })
    }

    /// Override the HTTP client configuration.
    #[must_use]
    pub fn with_http_config(mut self, config: ClientConfig) -> Self {
        self.inner = self.inner.with_http_config(config);
        self
    }

    /// Override the retry policy.
    #[must_use]
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.inner = self.inner.with_retry_policy(retry);
        self
    }

    /// Bound every call, retries included.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.inner = self.inner.with_deadline(deadline);
        self
    }

    /// Override the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.inner = self.inner.with_user_agent(user_agent);
        self
    }

    /// Send an extra header with every request.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.inner = self.inner.with_header(name, value);
        self
    }

    /// Skip TLS certificate verification.
    #[must_use]
    pub fn allow_insecure(mut self) -> Self {
        self.inner = self.inner.allow_insecure();
        self
    }

    /// Authenticate and build the client.
    ///
    /// # Errors
    ///
    /// Returns the authenticator's error, or a build error when the HTTP
    /// client cannot be set up.
    pub async fn build(self, authenticator: &dyn Authenticator) -> Result<SolusClient> {
        let api = self.inner.build(authenticator).await?;
        debug!(base_url = %api.base_url(), "SOLUS IO client ready");
        Ok(SolusClient { api })
    }
}

/// Asynchronous SOLUS IO client.
///
/// Cloning is cheap; clones share the connection pool and credentials.
#[derive(Debug, Clone)]
pub struct SolusClient {
    api: ApiClient,
}

impl SolusClient {
    /// Wrap an already built [`ApiClient`].
    #[must_use]
    pub const fn from_api_client(api: ApiClient) -> Self {
        Self { api }
    }

    /// Return the base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        self.api.base_url()
    }

    /// Underlying API client, for endpoints without a dedicated service.
    #[must_use]
    pub const fn api(&self) -> &ApiClient {
        &self.api
    }

    /// The authenticated account.
    #[must_use]
    pub const fn account(&self) -> AccountService<'_> {
        AccountService::new(&self.api)
    }

    /// Activity log.
    #[must_use]
    pub const fn activity_logs(&self) -> ActivityLogsService<'_> {
        ActivityLogsService::new(&self.api)
    }

    /// Applications.
    #[must_use]
    pub const fn applications(&self) -> ApplicationsService<'_> {
        ApplicationsService::new(&self.api)
    }

    /// Backup nodes.
    #[must_use]
    pub const fn backup_nodes(&self) -> BackupNodesService<'_> {
        BackupNodesService::new(&self.api)
    }

    /// Backups.
    #[must_use]
    pub const fn backups(&self) -> BackupsService<'_> {
        BackupsService::new(&self.api)
    }

    /// Compute resources.
    #[must_use]
    pub const fn compute_resources(&self) -> ComputeResourcesService<'_> {
        ComputeResourcesService::new(&self.api)
    }

    /// Icons.
    #[must_use]
    pub const fn icons(&self) -> IconsService<'_> {
        IconsService::new(&self.api)
    }

    /// IP blocks.
    #[must_use]
    pub const fn ip_blocks(&self) -> IpBlocksService<'_> {
        IpBlocksService::new(&self.api)
    }

    /// License.
    #[must_use]
    pub const fn license(&self) -> LicenseService<'_> {
        LicenseService::new(&self.api)
    }

    /// Locations.
    #[must_use]
    pub const fn locations(&self) -> LocationsService<'_> {
        LocationsService::new(&self.api)
    }

    /// OS images.
    #[must_use]
    pub const fn os_images(&self) -> OsImagesService<'_> {
        OsImagesService::new(&self.api)
    }

    /// OS image versions.
    #[must_use]
    pub const fn os_image_versions(&self) -> OsImageVersionsService<'_> {
        OsImageVersionsService::new(&self.api)
    }

    /// Permissions.
    #[must_use]
    pub const fn permissions(&self) -> PermissionsService<'_> {
        PermissionsService::new(&self.api)
    }

    /// Plans.
    #[must_use]
    pub const fn plans(&self) -> PlansService<'_> {
        PlansService::new(&self.api)
    }

    /// Projects.
    #[must_use]
    pub const fn projects(&self) -> ProjectsService<'_> {
        ProjectsService::new(&self.api)
    }

    /// Roles.
    #[must_use]
    pub const fn roles(&self) -> RolesService<'_> {
        RolesService::new(&self.api)
    }

    /// Server migrations.
    #[must_use]
    pub const fn servers_migrations(&self) -> ServersMigrationsService<'_> {
        ServersMigrationsService::new(&self.api)
    }

    /// Global settings.
    #[must_use]
    pub const fn settings(&self) -> SettingsService<'_> {
        SettingsService::new(&self.api)
    }

    /// Snapshots.
    #[must_use]
    pub const fn snapshots(&self) -> SnapshotsService<'_> {
        SnapshotsService::new(&self.api)
    }

    /// SSH keys.
    #[must_use]
    pub const fn ssh_keys(&self) -> SshKeysService<'_> {
        SshKeysService::new(&self.api)
    }

    /// Storages.
    #[must_use]
    pub const fn storage(&self) -> StorageService<'_> {
        StorageService::new(&self.api)
    }

    /// Storage types.
    #[must_use]
    pub const fn storage_types(&self) -> StorageTypesService<'_> {
        StorageTypesService::new(&self.api)
    }

    /// Tasks.
    #[must_use]
    pub const fn tasks(&self) -> TasksService<'_> {
        TasksService::new(&self.api)
    }

    /// Users.
    #[must_use]
    pub const fn users(&self) -> UsersService<'_> {
        UsersService::new(&self.api)
    }

    /// Virtual servers.
    #[must_use]
    pub const fn virtual_servers(&self) -> VirtualServersService<'_> {
        VirtualServersService::new(&self.api)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solus_core::client::DEFAULT_USER_AGENT;
    use solus_core::ApiTokenAuthenticator;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_builder_sets_user_agent_and_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/account"))
            .and(header("User-Agent", DEFAULT_USER_AGENT))
            .and(header("Authorization", "Bearer token"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"data": {"id": 1, "email": "a@b.c"}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = SolusClientBuilder::new(server.uri())
            .unwrap()
            .build(&ApiTokenAuthenticator::new("token"))
            .await
            .unwrap();

        let user = client.account().get().await.unwrap();
        assert_eq!(user.email, "a@b.c");
    }

    #[tokio::test]
    async fn test_from_config() {
        let config = SolusClientConfig::new("https://solus.example.com/api/v1")
            .unwrap()
            .with_max_retries(0);

        let client = SolusClientBuilder::from_config(&config)
            .unwrap()
            .build(&ApiTokenAuthenticator::new("token"))
            .await
            .unwrap();

        assert_eq!(client.base_url().as_str(), "https://solus.example.com/api/v1/");
        assert!(!client.api().retry_policy().has_retries());
    }
}
