//! Backup nodes.

use crate::models::{BackupNode, BackupNodeRequest};
use crate::Result;
use solus_core::{ApiClient, Paginated, RequestOptions};

/// Operations on backup nodes.
#[derive(Debug, Clone, Copy)]
pub struct BackupNodesService<'a> {
    client: &'a ApiClient,
}

impl<'a> BackupNodesService<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// List backup nodes.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-200 answers or an undecodable page.
    pub async fn list(&self) -> Result<Paginated<BackupNode>> {
        self.client.list("backup_nodes", RequestOptions::new()).await
    }

    /// Fetch a backup node.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not decode.
    pub async fn get(&self, id: u64) -> Result<BackupNode> {
        self.client
            .get(&format!("backup_nodes/{id}"), RequestOptions::new())
            .await
    }

    /// Create a backup node.
    ///
    /// # Errors
    ///
    /// Fails on validation errors (422) or any answer other than 201.
    pub async fn create(&self, request: &BackupNodeRequest) -> Result<BackupNode> {
        self.client
            .create("backup_nodes", RequestOptions::new().with_body(request))
            .await
    }

    /// Update a backup node.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not decode.
    pub async fn update(&self, id: u64, request: &BackupNodeRequest) -> Result<BackupNode> {
        self.client
            .update(
                &format!("backup_nodes/{id}"),
                RequestOptions::new().with_body(request),
            )
            .await
    }

    /// Delete a backup node.
    ///
    /// # Errors
    ///
    /// Fails when the server does not confirm the deletion with 204.
    pub async fn delete(&self, id: u64) -> Result<()> {
        self.client
            .delete(&format!("backup_nodes/{id}"), RequestOptions::new())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BackupNodeType;
    use crate::services::testing::{client, envelope};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request() -> BackupNodeRequest {
        BackupNodeRequest {
            name: "backups".to_string(),
            kind: BackupNodeType::SshRsync,
            compute_resources: vec![1, 2],
            credentials: json!({"host": "192.0.2.10"})
                .as_object()
                .cloned()
                .unwrap_or_default(),
        }
    }

    fn request_json() -> serde_json::Value {
        json!({
            "name": "backups",
            "type": "ssh-rsync",
            "compute_resources": [1, 2],
            "credentials": {"host": "192.0.2.10"}
        })
    }

    #[tokio::test]
    async fn test_create_backup_node() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/backup_nodes"))
            .and(body_json(request_json()))
            .respond_with(ResponseTemplate::new(201).set_body_json(envelope(json!({
                "id": 1,
                "name": "backups",
                "type": "ssh-rsync",
                "backups_count": 0
            }))))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server).await;
        let node = BackupNodesService::new(&client)
            .create(&request())
            .await
            .unwrap();
        assert_eq!(node.kind, BackupNodeType::SshRsync);
    }

    #[tokio::test]
    async fn test_update_backup_node() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/backup_nodes/10"))
            .and(body_json(request_json()))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(envelope(json!({"id": 10, "name": "backups"}))),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server).await;
        let node = BackupNodesService::new(&client)
            .update(10, &request())
            .await
            .unwrap();
        assert_eq!(node.id, 10);
    }

    #[tokio::test]
    async fn test_delete_backup_node_expects_no_content() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/backup_nodes/10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({}))))
            .mount(&server)
            .await;

        let client = client(&server).await;
        let err = BackupNodesService::new(&client)
            .delete(10)
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), Some(200));
    }
}
