//! Authentication strategies.
//!
//! An [`Authenticator`] runs once while the client is built. The resulting
//! [`Credentials`] are attached as the `Authorization` header of every
//! following request.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::api::ApiClient;
use crate::request::RequestOptions;
use crate::Result;

/// Token obtained from SOLUS IO.
#[derive(Debug)]
pub struct Credentials {
    access_token: SecretString,
    token_type: String,
    expires_at: String,
}

impl Credentials {
    /// Create credentials from their parts. `expires_at` may be empty.
    pub fn new(
        access_token: impl Into<String>,
        token_type: impl Into<String>,
        expires_at: impl Into<String>,
    ) -> Self {
        Self {
            access_token: SecretString::from(access_token.into()),
            token_type: token_type.into(),
            expires_at: expires_at.into(),
        }
    }

    /// The access token.
    #[must_use]
    pub const fn access_token(&self) -> &SecretString {
        &self.access_token
    }

    /// The token type, e.g. `Bearer`.
    #[must_use]
    pub fn token_type(&self) -> &str {
        &self.token_type
    }

    /// The expiry as sent by the server.
    #[must_use]
    pub fn expires_at_raw(&self) -> &str {
        &self.expires_at
    }

    /// The expiry, when the server sent one this client can parse.
    ///
    /// Accepts RFC 3339 as well as `YYYY-MM-DD HH:MM:SS` in UTC.
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        if self.expires_at.is_empty() {
            return None;
        }
        DateTime::parse_from_rfc3339(&self.expires_at)
            .map(|at| at.with_timezone(&Utc))
            .or_else(|_| {
                NaiveDateTime::parse_from_str(&self.expires_at, "%Y-%m-%d %H:%M:%S")
                    .map(|at| at.and_utc())
            })
            .ok()
    }

    /// Value of the `Authorization` header.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("{} {}", self.token_type, self.access_token.expose_secret())
    }
}

/// Strategy producing [`Credentials`] for a new client.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Authenticate against SOLUS IO.
    ///
    /// `client` is fully configured but carries no credentials yet, so only
    /// endpoints that need no authentication may be called.
    async fn authenticate(&self, client: &ApiClient) -> Result<Credentials>;
}

/// Authenticates with a pre-issued API token. Performs no I/O.
#[derive(Debug)]
pub struct ApiTokenAuthenticator {
    token: SecretString,
}

impl ApiTokenAuthenticator {
    /// Wrap an API token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: SecretString::from(token.into()),
        }
    }
}

#[async_trait]
impl Authenticator for ApiTokenAuthenticator {
    async fn authenticate(&self, _client: &ApiClient) -> Result<Credentials> {
        Ok(Credentials::new(self.token.expose_secret(), "Bearer", ""))
    }
}

/// Authenticates by logging in with an email and a password.
#[derive(Debug)]
pub struct EmailAndPasswordAuthenticator {
    email: String,
    password: SecretString,
}

impl EmailAndPasswordAuthenticator {
    /// Create the authenticator.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
        }
    }
}

#[derive(Serialize)]
struct AuthLoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct AuthLoginResponse {
    credentials: CredentialsPayload,
}

#[derive(Deserialize)]
struct CredentialsPayload {
    #[serde(default)]
    access_token: String,
    #[serde(default)]
    token_type: String,
    #[serde(default)]
    expires_at: Option<String>,
}

#[async_trait]
impl Authenticator for EmailAndPasswordAuthenticator {
    async fn authenticate(&self, client: &ApiClient) -> Result<Credentials> {
        let request = AuthLoginRequest {
            email: &self.email,
            password: self.password.expose_secret(),
        };
        let response: AuthLoginResponse = client
            .post("auth/login", RequestOptions::new().with_body(&request))
            .await?;

        let payload = response.credentials;
        Ok(Credentials::new(
            payload.access_token,
            payload.token_type,
            payload.expires_at.unwrap_or_default(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiClientBuilder;
    use crate::client::RetryPolicy;
    use crate::Error;
    use chrono::TimeZone;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_credentials_authorization_header() {
        let credentials = Credentials::new("secret", "Bearer", "");
        assert_eq!(credentials.authorization_header(), "Bearer secret");
        assert_eq!(credentials.token_type(), "Bearer");
        assert!(credentials.expires_at().is_none());
    }

    #[test]
    fn test_credentials_debug_hides_token() {
        let credentials = Credentials::new("secret", "Bearer", "");
        assert!(!format!("{credentials:?}").contains("secret"));
    }

    #[test]
    fn test_credentials_expires_at() {
        let expected = Utc.with_ymd_and_hms(2021, 3, 4, 5, 6, 7).unwrap();

        let credentials = Credentials::new("t", "Bearer", "2021-03-04T05:06:07+00:00");
        assert_eq!(credentials.expires_at(), Some(expected));

        let credentials = Credentials::new("t", "Bearer", "2021-03-04 05:06:07");
        assert_eq!(credentials.expires_at(), Some(expected));

        let credentials = Credentials::new("t", "Bearer", "tomorrow");
        assert_eq!(credentials.expires_at(), None);
        assert_eq!(credentials.expires_at_raw(), "tomorrow");
    }

    #[tokio::test]
    async fn test_api_token_authenticator() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/account"))
            .and(header("Authorization", "Bearer api-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClientBuilder::new(server.uri())
            .unwrap()
            .build(&ApiTokenAuthenticator::new("api-token"))
            .await
            .unwrap();

        let credentials = client.credentials().unwrap();
        assert_eq!(credentials.token_type(), "Bearer");
        assert_eq!(credentials.expires_at_raw(), "");

        let _: serde_json::Value = client.get("account", RequestOptions::new()).await.unwrap();
    }

    #[tokio::test]
    async fn test_email_and_password_authenticator() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .and(body_json(json!({"email": "test@example.com", "password": "test"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {
                    "credentials": {
                        "access_token": "access token",
                        "token_type": "Bearer",
                        "expires_at": "2021-03-04T05:06:07+00:00"
                    }
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClientBuilder::new(server.uri())
            .unwrap()
            .build(&EmailAndPasswordAuthenticator::new("test@example.com", "test"))
            .await
            .unwrap();

        let credentials = client.credentials().unwrap();
        assert_eq!(credentials.authorization_header(), "Bearer access token");
        assert!(credentials.expires_at().is_some());
    }

    #[tokio::test]
    async fn test_email_and_password_authenticator_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/login"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"message": "Unauthenticated."})),
            )
            .mount(&server)
            .await;

        let err = ApiClientBuilder::new(server.uri())
            .unwrap()
            .with_retry_policy(RetryPolicy::no_retry())
            .build(&EmailAndPasswordAuthenticator::new("test@example.com", "wrong"))
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), Some(401));
        assert_eq!(
            err.to_string(),
            "HTTP POST auth/login returns 401 status code: Unauthenticated."
        );
    }

    #[tokio::test]
    async fn test_mock_authenticator_error_aborts_build() {
        let mut authenticator = MockAuthenticator::new();
        authenticator
            .expect_authenticate()
            .times(1)
            .returning(|_| Err(Error::ConfigError("no credentials".to_string())));

        let err = ApiClientBuilder::new("http://127.0.0.1:1")
            .unwrap()
            .build(&authenticator)
            .await
            .unwrap_err();
        assert_eq!(err, Error::ConfigError("no credentials".to_string()));
    }
}
