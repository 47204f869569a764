//! License.

use crate::models::{License, LicenseActivateRequest};
use crate::Result;
use solus_core::{ApiClient, RequestOptions};

/// Operations on the SOLUS IO license.
#[derive(Debug, Clone, Copy)]
pub struct LicenseService<'a> {
    client: &'a ApiClient,
}

impl<'a> LicenseService<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Fetch the installed license.
    ///
    /// # Errors
    ///
    /// Fails on any non-200 answer or an undecodable body.
    pub async fn get(&self) -> Result<License> {
        self.client.get("license", RequestOptions::new()).await
    }

    /// Activate a license.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not decode.
    pub async fn activate(&self, request: &LicenseActivateRequest) -> Result<License> {
        self.client
            .post("license/activate", RequestOptions::new().with_body(request))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{client, envelope};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_activate_license() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/license/activate"))
            .and(body_json(json!({"activation_code": "activation code"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
                "cpu_cores": 16,
                "cpu_cores_in_use": 4,
                "is_active": true,
                "product": "SOLUS IO"
            }))))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server).await;
        let request = LicenseActivateRequest {
            activation_code: "activation code".to_string(),
        };
        let license = LicenseService::new(&client)
            .activate(&request)
            .await
            .unwrap();

        assert!(license.is_active);
        assert_eq!(license.cpu_cores, 16);
    }

    #[tokio::test]
    async fn test_get_license() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/license"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(envelope(json!({"key": "SOLUS.0001"}))),
            )
            .mount(&server)
            .await;

        let client = client(&server).await;
        let license = LicenseService::new(&client).get().await.unwrap();
        assert_eq!(license.key, "SOLUS.0001");
        assert!(!license.is_active);
    }
}
