//! Projects and the servers inside them.

use crate::models::{Project, ProjectRequest, ProjectServersCreateRequest, VirtualServer};
use crate::Result;
use solus_core::{ApiClient, Filter, Paginated, RequestOptions};

/// Filter for [`ProjectsService::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectsFilter {
    filter: Filter,
}

impl ProjectsFilter {
    /// Create an empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Only projects whose name contains `name`.
    #[must_use]
    pub fn by_name(self, name: &str) -> Self {
        Self {
            filter: self.filter.add("search", name),
        }
    }

    /// The underlying filter.
    #[must_use]
    pub const fn as_filter(&self) -> &Filter {
        &self.filter
    }
}

/// Operations on projects.
#[derive(Debug, Clone, Copy)]
pub struct ProjectsService<'a> {
    client: &'a ApiClient,
}

impl<'a> ProjectsService<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// List projects.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-200 answers or an undecodable page.
    pub async fn list(&self, filter: &ProjectsFilter) -> Result<Paginated<Project>> {
        self.client
            .list("projects", RequestOptions::new().with_filter(filter.as_filter()))
            .await
    }

    /// Fetch a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not decode.
    pub async fn get(&self, id: u64) -> Result<Project> {
        self.client
            .get(&format!("projects/{id}"), RequestOptions::new())
            .await
    }

    /// Create a project.
    ///
    /// # Errors
    ///
    /// Fails on validation errors (422) or any answer other than 201.
    pub async fn create(&self, request: &ProjectRequest) -> Result<Project> {
        self.client
            .create("projects", RequestOptions::new().with_body(request))
            .await
    }

    /// Update a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not decode.
    pub async fn update(&self, id: u64, request: &ProjectRequest) -> Result<Project> {
        self.client
            .update(
                &format!("projects/{id}"),
                RequestOptions::new().with_body(request),
            )
            .await
    }

    /// Delete a project.
    ///
    /// # Errors
    ///
    /// Fails when the server does not confirm the deletion with 204.
    pub async fn delete(&self, id: u64) -> Result<()> {
        self.client
            .delete(&format!("projects/{id}"), RequestOptions::new())
            .await
    }

    /// First page of the servers in a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the page does not decode.
    pub async fn servers(&self, project_id: u64) -> Result<Paginated<VirtualServer>> {
        self.client
            .list(&format!("projects/{project_id}/servers"), RequestOptions::new())
            .await
    }

    /// Create a server in a project.
    ///
    /// # Errors
    ///
    /// Fails on validation errors (422) or any answer other than 201.
    pub async fn servers_create(
        &self,
        project_id: u64,
        request: &ProjectServersCreateRequest,
    ) -> Result<VirtualServer> {
        self.client
            .create(
                &format!("projects/{project_id}/servers"),
                RequestOptions::new().with_body(request),
            )
            .await
    }

    /// Every server in a project, following the pages until the last one.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not decode.
    pub async fn servers_list_all(&self, project_id: u64) -> Result<Vec<VirtualServer>> {
        self.servers(project_id).await?.collect_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{client, envelope};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_servers_create() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/projects/42/servers"))
            .and(body_json(json!({
                "name": "name",
                "plan_id": 1,
                "location_id": 2,
                "os_image_version_id": 3,
                "ssh_keys": [4, 5],
                "user_data": "user data"
            })))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(envelope(json!({"id": 7, "name": "name"}))),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server).await;
        let request = ProjectServersCreateRequest {
            name: "name".to_string(),
            plan_id: 1,
            location_id: 2,
            os_image_version_id: 3,
            ssh_keys: vec![4, 5],
            user_data: "user data".to_string(),
        };
        let created = ProjectsService::new(&client)
            .servers_create(42, &request)
            .await
            .unwrap();
        assert_eq!(created.id, 7);
    }

    #[tokio::test]
    async fn test_servers_list_all_follows_pages() {
        let server = MockServer::start().await;
        let base = server.uri();

        Mock::given(method("GET"))
            .and(path("/projects/1/servers"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"id": 1}],
                "links": {"next": format!("{base}/projects/1/servers?page=2")}
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/projects/1/servers"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"id": 2}],
                "links": {"next": null}
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/projects/1/servers"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"id": 0}],
                "links": {"next": format!("{base}/projects/1/servers?page=1")}
            })))
            .mount(&server)
            .await;

        let client = client(&server).await;
        let servers = ProjectsService::new(&client)
            .servers_list_all(1)
            .await
            .unwrap();

        let ids: Vec<u64> = servers.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn test_list_and_create_projects() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/projects"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{
                    "id": 1,
                    "name": "default",
                    "is_default": true,
                    "owner": {"id": 1, "email": "admin@example.com"},
                    "servers": 3
                }]
            })))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/projects"))
            .and(body_json(json!({"name": "staging"})))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(envelope(json!({"id": 2, "name": "staging"}))),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server).await;
        let service = ProjectsService::new(&client);

        let projects = service.list(&ProjectsFilter::new()).await.unwrap();
        assert_eq!(projects.data()[0].owner.email, "admin@example.com");
        assert_eq!(projects.data()[0].servers, 3);

        let request = ProjectRequest {
            name: "staging".to_string(),
            ..ProjectRequest::default()
        };
        assert_eq!(service.create(&request).await.unwrap().id, 2);
    }
}
