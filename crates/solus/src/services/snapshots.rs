//! Snapshots.

use crate::models::Snapshot;
use crate::Result;
use solus_core::{ApiClient, RequestOptions, Task};

/// Operations on snapshots. Snapshots are taken through
/// [`VirtualServersService::snapshots_create`](crate::VirtualServersService::snapshots_create).
#[derive(Debug, Clone, Copy)]
pub struct SnapshotsService<'a> {
    client: &'a ApiClient,
}

impl<'a> SnapshotsService<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Fetch a snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not decode.
    pub async fn get(&self, id: u64) -> Result<Snapshot> {
        self.client
            .get(&format!("snapshots/{id}"), RequestOptions::new())
            .await
    }

    /// Revert the server to a snapshot.
    ///
    /// # Errors
    ///
    /// Fails when the request fails or the returned task has no id.
    pub async fn revert(&self, id: u64) -> Result<Task> {
        self.client
            .async_post(&format!("snapshots/{id}/revert"), RequestOptions::new())
            .await
    }

    /// Delete a snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TaskWithoutId`](crate::Error::TaskWithoutId) when the answer names no task, or the request error.
    pub async fn delete(&self, id: u64) -> Result<Task> {
        self.client
            .async_delete(&format!("snapshots/{id}"), RequestOptions::new())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SnapshotStatus;
    use crate::services::testing::{client, envelope, task};
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_snapshot() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/snapshots/10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
                "id": 10,
                "name": "before upgrade",
                "size": 2.25,
                "status": "available",
                "created_at": "2021-03-04T05:06:07.000000Z"
            }))))
            .mount(&server)
            .await;

        let client = client(&server).await;
        let snapshot = SnapshotsService::new(&client).get(10).await.unwrap();
        assert_eq!(snapshot.name, "before upgrade");
        assert_eq!(snapshot.status, SnapshotStatus::Available);
    }

    #[tokio::test]
    async fn test_revert_and_delete_snapshot() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/snapshots/10/revert"))
            .respond_with(ResponseTemplate::new(200).set_body_json(task(1)))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/snapshots/10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(task(2)))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server).await;
        let service = SnapshotsService::new(&client);
        assert_eq!(service.revert(10).await.unwrap().id, 1);
        assert_eq!(service.delete(10).await.unwrap().id, 2);
    }
}
