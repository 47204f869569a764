//! Installation settings.

use crate::models::{Settings, SettingsUpdateRequest};
use crate::Result;
use solus_core::{ApiClient, RequestOptions};

/// Operations on the global settings.
#[derive(Debug, Clone, Copy)]
pub struct SettingsService<'a> {
    client: &'a ApiClient,
}

impl<'a> SettingsService<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Fetch the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not decode.
    pub async fn get(&self) -> Result<Settings> {
        self.client.get("settings", RequestOptions::new()).await
    }

    /// Change the fields set in `request`, leaving the rest untouched.
    ///
    /// # Errors
    ///
    /// Fails on validation errors or any answer other than 200.
    pub async fn patch(&self, request: &SettingsUpdateRequest) -> Result<Settings> {
        self.client
            .patch("settings", RequestOptions::new().with_body(request))
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

    fn settings_body(hostname: &str) -> serde_json::Value {
        envelope(json!({
            "uuid": "00000000-0000-0000-0000-000000000000",
            "hostname": hostname,
            "send_statistic": true,
            "features": {"allow_registration": true, "allow_password_recovery": true},
            "theme": {"brand_name": "SOLUS IO", "favicon": null},
            "mail": {"host": "hostname.tld", "port": "25", "encryption": false}
        }))
    }

    #[tokio::test]
    async fn test_get() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/settings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(settings_body("hostname.tld")))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server).await;
        let settings = SettingsService::new(&client).get().await.unwrap();
        assert_eq!(settings.hostname, "hostname.tld");
        assert!(settings.send_statistic);
        assert!(settings.features.allow_registration);
        assert!(!settings.features.hide_plan_name);
        assert_eq!(settings.theme.favicon, "");
        assert_eq!(settings.mail.port, "25");
    }

    #[tokio::test]
    async fn test_patch_hostname() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/settings"))
            .and(body_json(json!({"hostname": "new-hostname.tld"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(settings_body("new-hostname.tld")))
            .expect(1)
            .mount(&server)
            .await;

        let client = client(&server).await;
        let request = SettingsUpdateRequest {
            hostname: Some("new-hostname.tld".to_string()),
            ..SettingsUpdateRequest::default()
        };
        let settings = SettingsService::new(&client).patch(&request).await.unwrap();
        assert_eq!(settings.hostname, "new-hostname.tld");
    }

    #[tokio::test]
    async fn test_patch_rejects_created() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/settings"))
            .respond_with(ResponseTemplate::new(201).set_body_json(settings_body("hostname.tld")))
            .mount(&server)
            .await;

        let client = client(&server).await;
        let err = SettingsService::new(&client)
            .patch(&SettingsUpdateRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), Some(201));
    }
}
