//! Applications.

use crate::models::{Application, ApplicationRequest};
use crate::Result;
use solus_core::{ApiClient, Paginated, RequestOptions};

/// Operations on applications.
#[derive(Debug, Clone, Copy)]
pub struct ApplicationsService<'a> {
    client: &'a ApiClient,
}

impl<'a> ApplicationsService<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// List applications.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the page does not decode.
    pub async fn list(&self) -> Result<Paginated<Application>> {
        self.client.list("applications", RequestOptions::new()).await
    }

    /// Fetch an application.
    ///
    /// # Errors
    ///
    /// Fails on any non-200 answer or an undecodable body.
    pub async fn get(&self, id: u64) -> Result<Application> {
        self.client
            .get(&format!("applications/{id}"), RequestOptions::new())
            .await
    }

    /// Create an application.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 201 with the created resource.
    pub async fn create(&self, request: &ApplicationRequest) -> Result<Application> {
        self.client
            .create("applications", RequestOptions::new().with_body(request))
            .await
    }

    /// Update an application.
    ///
    /// # Errors
    ///
    /// Fails on any non-200 answer or an undecodable body.
    pub async fn update(&self, id: u64, request: &ApplicationRequest) -> Result<Application> {
        self.client
            .update(
                &format!("applications/{id}"),
                RequestOptions::new().with_body(request),
            )
            .await
    }

    /// Delete an application.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 204.
    pub async fn delete(&self, id: u64) -> Result<()> {
        self.client
            .delete(&format!("applications/{id}"), RequestOptions::new())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CloudInitVersion, LoginLink, LoginLinkType};
    use crate::services::testing::{client, envelope};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_create_application() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/applications"))
            .and(body_json(json!({
                "name": "WordPress",
                "url": "http://example.com/wordpress.qcow2",
                "icon_id": 1,
                "cloud_init_version": "v2",
                "user_data_template": "#cloud-config",
                "json_schema": "{}",
                "is_visible": true,
                "login_link": {"type": "url", "content": "http://{{ ip }}/wp-admin"}
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(envelope(json!({
                "id": 7,
                "name": "WordPress",
                "login_link": {"type": "url", "content": "http://{{ ip }}/wp-admin"}
            }))))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server).await;
        let request = ApplicationRequest {
            name: "WordPress".to_string(),
            url: "http://example.com/wordpress.qcow2".to_string(),
            icon_id: Some(1),
            cloud_init_version: CloudInitVersion::V2,
            user_data_template: "#cloud-config".to_string(),
            json_schema: "{}".to_string(),
            is_visible: true,
            login_link: LoginLink {
                kind: LoginLinkType::Url,
                content: "http://{{ ip }}/wp-admin".to_string(),
            },
        };

        let application = ApplicationsService::new(&client)
            .create(&request)
            .await
            .unwrap();
        assert_eq!(application.id, 7);
        assert_eq!(application.login_link.kind, LoginLinkType::Url);
    }

    #[tokio::test]
    async fn test_list_and_delete_applications() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/applications"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"id": 1, "name": "WordPress"}, {"id": 2, "name": "GitLab"}],
                "links": {"next": null},
                "meta": {"current_page": 1, "last_page": 1, "total": 2}
            })))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/applications/2"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server).await;
        let service = ApplicationsService::new(&client);

        let applications = service.list().await.unwrap();
        assert_eq!(applications.data().len(), 2);
        assert_eq!(applications.meta().total, 2);
        assert!(!applications.has_next());

        service.delete(2).await.unwrap();
    }
}
