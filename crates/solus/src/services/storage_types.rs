//! Storage types.

use crate::models::StorageType;
use crate::Result;
use solus_core::{ApiClient, Paginated, RequestOptions};

/// Operations on storage types.
#[derive(Debug, Clone, Copy)]
pub struct StorageTypesService<'a> {
    client: &'a ApiClient,
}

impl<'a> StorageTypesService<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// List storage types.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-200 answers or an undecodable page.
    pub async fn list(&self) -> Result<Paginated<StorageType>> {
        self.client.list("storage_types", RequestOptions::new()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ImageFormat, StorageTypeName};
    use crate::services::testing::client;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_list_unpaginated_storage_types() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/storage_types"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [
                    {"id": 1, "name": "fb", "formats": ["qcow2"]},
                    {"id": 2, "name": "lvm", "formats": ["raw"]}
                ]
            })))
            .mount(&server)
            .await;

        let client = client(&server).await;
        let types = StorageTypesService::new(&client)
            .list()
            .await
            .unwrap()
            .into_data();

        assert_eq!(
            types,
            vec![
                StorageType {
                    id: 1,
                    name: StorageTypeName::Fb,
                    formats: vec![ImageFormat::Qcow2],
                },
                StorageType {
                    id: 2,
                    name: StorageTypeName::Lvm,
                    formats: vec![ImageFormat::Raw],
                },
            ]
        );
    }
}
