//! Low-level API client shared by every resource service.
//!
//! [`ApiClient`] builds requests against the configured base URL, executes them
//! with bounded retries and decodes the responses. The verbs (`get`, `list`,
//! `create`, ...) pin the status code each kind of call expects.

use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT,
};
use reqwest::Method;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use crate::auth::{Authenticator, Credentials};
use crate::client::{retry, Attempt, ClientConfig, RetryPolicy};
use crate::config::{parse_base_url, SolusClientConfig};
use crate::error::{Error, HttpError, Result};
use crate::pagination::{Page, Paginated};
use crate::request::RequestOptions;
use crate::response::{Envelope, RawResponse};
use crate::task::Task;

const APPLICATION_JSON: &str = "application/json";

/// Builder for [`ApiClient`].
#[derive(Debug, Clone)]
pub struct ApiClientBuilder {
    base_url: Url,
    config: ClientConfig,
}

impl ApiClientBuilder {
    /// Create a builder for the specified base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            base_url: parse_base_url(base_url.as_ref())?,
            config: ClientConfig::new(),
        })
    }

    /// Create a builder from loadable settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings do not validate.
    pub fn from_config(config: &SolusClientConfig) -> Result<Self> {
        Ok(Self {
            base_url: config.parse_base_url()?,
            config: config.client_config()?,
        })
    }

    /// Override the HTTP client configuration.
    #[must_use]
    pub fn with_http_config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Override the retry policy.
    #[must_use]
    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.config = self.config.with_retry_policy(policy);
        self
    }

    /// Bound every call, retries included.
    #[must_use]
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.config = self.config.with_deadline(deadline);
        self
    }

    /// Override the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config = self.config.with_user_agent(user_agent);
        self
    }

    /// Add a static header sent with every request.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config = self.config.with_header(name, value);
        self
    }

    /// Skip TLS certificate verification.
    #[must_use]
    pub fn allow_insecure(mut self) -> Self {
        self.config = self.config.allow_insecure();
        self
    }

    /// Build the client and authenticate it.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created or authentication fails.
    pub async fn build(self, authenticator: &dyn Authenticator) -> Result<ApiClient> {
        let inner = self.build_inner()?;
        let unauthenticated = ApiClient {
            inner: Arc::new(inner.clone()),
        };

        let credentials = authenticator.authenticate(&unauthenticated).await?;
        let mut authorization = HeaderValue::from_str(&credentials.authorization_header())
            .map_err(|_| Error::ConfigError("credentials are not a valid header value".into()))?;
        authorization.set_sensitive(true);

        let mut inner = inner;
        inner.headers.insert(AUTHORIZATION, authorization);
        inner.credentials = Some(Arc::new(credentials));

        Ok(ApiClient {
            inner: Arc::new(inner),
        })
    }

    fn build_inner(self) -> Result<Inner> {
        let config = self.config;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        for (name, value) in &config.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| Error::ConfigError(format!("invalid header name {name}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| Error::ConfigError(format!("invalid value for header {name}: {e}")))?;
            headers.append(name, value);
        }

        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|e| Error::ConfigError(format!("invalid user agent: {e}")))?;

        if !config.tls_verify {
            warn!(base_url = %self.base_url, "TLS certificate verification is disabled");
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .danger_accept_invalid_certs(!config.tls_verify)
            .build()
            .map_err(|e| Error::ConfigError(format!("failed to create HTTP client: {e}")))?;

        Ok(Inner {
            http,
            base_url: self.base_url,
            user_agent,
            headers,
            retry_policy: config.retry_policy,
            deadline: config.deadline,
            credentials: None,
        })
    }
}

#[derive(Debug, Clone)]
struct Inner {
    http: reqwest::Client,
    base_url: Url,
    user_agent: HeaderValue,
    headers: HeaderMap,
    retry_policy: RetryPolicy,
    deadline: Option<Duration>,
    credentials: Option<Arc<Credentials>>,
}

/// Authenticated SOLUS IO API client. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    inner: Arc<Inner>,
}

impl ApiClient {
    /// Return the base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Credentials obtained while building the client.
    #[must_use]
    pub fn credentials(&self) -> Option<&Credentials> {
        self.inner.credentials.as_deref()
    }

    /// Retry policy applied to every call.
    #[must_use]
    pub fn retry_policy(&self) -> RetryPolicy {
        self.inner.retry_policy
    }

    /// Assemble a request without sending it.
    ///
    /// `path` is resolved against the base URL, so an absolute URL is used as is.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Build`] for an invalid method, an unresolvable path or
    /// a body that failed to serialize.
    pub fn build_request(
        &self,
        method: &str,
        path: &str,
        opts: &RequestOptions,
    ) -> Result<reqwest::Request> {
        let build_error = |message: String| Error::Build {
            method: method.to_string(),
            path: path.to_string(),
            message,
        };

        let http_method =
            Method::from_bytes(method.as_bytes()).map_err(|e| build_error(e.to_string()))?;
        let mut url = self
            .inner
            .base_url
            .join(path)
            .map_err(|e| build_error(e.to_string()))?;

        let params = opts.params();
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params.pairs());
        }

        let body = opts.body().map_err(|message| build_error(message.to_string()))?;

        let mut request = reqwest::Request::new(http_method, url);
        let headers = request.headers_mut();
        for (name, value) in &self.inner.headers {
            headers.append(name, value.clone());
        }
        headers.insert(USER_AGENT, self.inner.user_agent.clone());

        if let Some(body) = body {
            *request.body_mut() = Some(body.to_vec().into());
        }

        Ok(request)
    }

    /// Send a request and read its whole response, retrying transient failures.
    ///
    /// Transport errors and `502 Bad Gateway` are retried within the retry
    /// policy. Any other response is returned as is.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Build`] before any I/O, [`Error::Transport`] once retries
    /// are exhausted, [`Error::RetryLimitExceeded`] at the hard attempt ceiling
    /// and [`Error::DeadlineExceeded`] when the call outlives its deadline.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        opts: &RequestOptions,
    ) -> Result<RawResponse> {
        let request = self.build_request(method, path, opts)?;

        match opts.deadline().or(self.inner.deadline) {
            Some(deadline) => tokio::time::timeout(deadline, self.execute(request, method, path))
                .await
                .map_err(|_| Error::DeadlineExceeded {
                    method: method.to_string(),
                    path: path.to_string(),
                })?,
            None => self.execute(request, method, path).await,
        }
    }

    async fn execute(
        &self,
        request: reqwest::Request,
        method: &str,
        path: &str,
    ) -> Result<RawResponse> {
        let policy = self.inner.retry_policy;
        let http = &self.inner.http;

        retry(move |attempt| {
            let request = request.try_clone();
            async move {
                let Some(request) = request else {
                    return Attempt::Fail(Error::Build {
                        method: method.to_string(),
                        path: path.to_string(),
                        message: "request body cannot be replayed".to_string(),
                    });
                };
                let can_retry = policy.allows_retry_after(attempt);
                debug!(method, url = %request.url(), attempt, "sending request");

                let response = match http.execute(request).await {
                    Ok(response) => response,
                    Err(err) => {
                        let err = Error::Transport {
                            method: method.to_string(),
                            path: path.to_string(),
                            message: err.to_string(),
                        };
                        if !can_retry {
                            return Attempt::Fail(err);
                        }
                        tokio::time::sleep(policy.delay_for_attempt(attempt)).await;
                        return Attempt::Retry(err);
                    }
                };

                let status = response.status().as_u16();
                if status == 502 && can_retry {
                    if let Err(err) = response.bytes().await {
                        debug!(method, path, error = %err, "failed to drain response body");
                    }
                    return Attempt::Retry(HttpError::new(method, path, status, b"").into());
                }

                match response.bytes().await {
                    Ok(body) => Attempt::Done(RawResponse {
                        status,
                        body: body.to_vec(),
                    }),
                    Err(err) => {
                        let err = Error::Transport {
                            method: method.to_string(),
                            path: path.to_string(),
                            message: err.to_string(),
                        };
                        if !can_retry {
                            return Attempt::Fail(err);
                        }
                        debug!(method, path, attempt, "response body cut short, retrying");
                        tokio::time::sleep(policy.delay_for_attempt(attempt)).await;
                        Attempt::Retry(err)
                    }
                }
            }
        })
        .await
    }

    /// GET a single resource, expecting 200 and `{"data": T}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the response does not decode.
    pub async fn get<T>(&self, path: &str, opts: RequestOptions) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.data(Method::GET, path, opts, 200).await
    }

    /// GET the first page of a collection, expecting 200.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the response does not decode.
    pub async fn list<T>(&self, path: &str, opts: RequestOptions) -> Result<Paginated<T>>
    where
        T: DeserializeOwned,
    {
        let page = self.fetch_page(path, &opts).await?;
        Ok(Paginated::new(page, self.clone()))
    }

    pub(crate) async fn fetch_page<T>(&self, path: &str, opts: &RequestOptions) -> Result<Page<T>>
    where
        T: DeserializeOwned,
    {
        let method = Method::GET.as_str();
        self.request(method, path, opts)
            .await?
            .decode(method, path, 200)
    }

    /// POST a new resource, expecting 201 and `{"data": T}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the response does not decode.
    pub async fn create<T>(&self, path: &str, opts: RequestOptions) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.data(Method::POST, path, opts, 201).await
    }

    /// PUT a resource, expecting 200 and `{"data": T}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the response does not decode.
    pub async fn update<T>(&self, path: &str, opts: RequestOptions) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.data(Method::PUT, path, opts, 200).await
    }

    /// PATCH a resource, expecting 200 and `{"data": T}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the response does not decode.
    pub async fn patch<T>(&self, path: &str, opts: RequestOptions) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.data(Method::PATCH, path, opts, 200).await
    }

    /// POST an action, expecting 200 and `{"data": T}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the response does not decode.
    pub async fn post<T>(&self, path: &str, opts: RequestOptions) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.data(Method::POST, path, opts, 200).await
    }

    /// DELETE a resource synchronously, expecting 204.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the status code differs.
    pub async fn delete(&self, path: &str, opts: RequestOptions) -> Result<()> {
        let method = Method::DELETE.as_str();
        self.request(method, path, &opts)
            .await?
            .expect_status(method, path, 204)
    }

    /// DELETE a resource asynchronously, expecting 200 and a task.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TaskWithoutId`] when the task has no id.
    pub async fn async_delete(&self, path: &str, opts: RequestOptions) -> Result<Task> {
        self.task(Method::DELETE, path, opts).await
    }

    /// POST an action asynchronously, expecting 200 and a task.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TaskWithoutId`] when the task has no id.
    pub async fn async_post(&self, path: &str, opts: RequestOptions) -> Result<Task> {
        self.task(Method::POST, path, opts).await
    }

    async fn task(&self, method: Method, path: &str, opts: RequestOptions) -> Result<Task> {
        let task: Task = self.data(method, path, opts, 200).await?;
        if task.id == 0 {
            return Err(Error::TaskWithoutId);
        }
        Ok(task)
    }

    async fn data<T>(
        &self,
        method: Method,
        path: &str,
        opts: RequestOptions,
        expected: u16,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let method = method.as_str();
        let envelope: Envelope<T> = self
            .request(method, path, &opts)
            .await?
            .decode(method, path, expected)?;
        Ok(envelope.data)
    }
}
