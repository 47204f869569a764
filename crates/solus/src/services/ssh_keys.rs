//! SSH keys.

use crate::models::{SshKey, SshKeyCreateRequest};
use crate::Result;
use solus_core::{ApiClient, Filter, Paginated, RequestOptions};

/// Filter for [`SshKeysService::list`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SshKeysFilter {
    filter: Filter,
}

impl SshKeysFilter {
    /// Create an empty filter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Only keys whose name contains `name`.
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

/// Operations on SSH keys.
#[derive(Debug, Clone, Copy)]
pub struct SshKeysService<'a> {
    client: &'a ApiClient,
}

impl<'a> SshKeysService<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// List SSH keys.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-200 answers or an undecodable page.
    pub async fn list(&self, filter: &SshKeysFilter) -> Result<Paginated<SshKey>> {
        self.client
            .list("ssh_keys", RequestOptions::new().with_filter(filter.as_filter()))
            .await
    }

    /// Fetch an SSH key.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not decode.
    pub async fn get(&self, id: u64) -> Result<SshKey> {
        self.client
            .get(&format!("ssh_keys/{id}"), RequestOptions::new())
            .await
    }

    /// Upload an SSH key for a user.
    ///
    /// # Errors
    ///
    /// Fails on validation errors (422) or any answer other than 201.
    pub async fn create(&self, request: &SshKeyCreateRequest) -> Result<SshKey> {
        self.client
            .create("ssh_keys", RequestOptions::new().with_body(request))
            .await
    }

    /// Delete an SSH key.
    ///
    /// # Errors
    ///
    /// Returns an error unless the server answers 204.
    pub async fn delete(&self, id: u64) -> Result<()> {
        self.client
            .delete(&format!("ssh_keys/{id}"), RequestOptions::new())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{client, envelope};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_filter() {
        let filter = SshKeysFilter::new().by_name("laptop");
        assert_eq!(filter.as_filter().get()["filter[search]"], "laptop");
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/ssh_keys"))
            .and(body_json(json!({"name": "laptop", "body": "ssh-rsa AAAA", "user_id": 3})))
            .respond_with(ResponseTemplate::new(201).set_body_json(envelope(json!({
                "id": 9,
                "name": "laptop",
                "body": "ssh-rsa AAAA"
            }))))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/ssh_keys"))
            .and(query_param("filter[search]", "laptop"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"id": 9, "name": "laptop"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server).await;
        let service = SshKeysService::new(&client);

        let request = SshKeyCreateRequest {
            name: "laptop".to_string(),
            body: "ssh-rsa AAAA".to_string(),
            user_id: 3,
        };
        assert_eq!(service.create(&request).await.unwrap().id, 9);

        let keys = service
            .list(&SshKeysFilter::new().by_name("laptop"))
            .await
            .unwrap();
        assert_eq!(keys.data().len(), 1);
    }

    #[tokio::test]
    async fn test_delete() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/ssh_keys/9"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server).await;
        SshKeysService::new(&client).delete(9).await.unwrap();
    }
}
