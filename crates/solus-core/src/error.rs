//! Error types for SOLUS IO operations.
//!
//! Every layer of the client reports failures through [`Error`]. Responses with
//! an unexpected status code are normalized into [`HttpError`], which keeps the
//! server's message and field-level validation errors.

use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Main error type for SOLUS IO operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The request could not be built, so nothing was sent.
    #[error("failed to build request {method} {path}: {message}")]
    Build {
        /// HTTP method of the request
        method: String,
        /// Request path as given by the caller
        path: String,
        /// Cause of the failure
        message: String,
    },

    /// The server could not be reached.
    #[error("HTTP {method} {path} failed: {message}")]
    Transport {
        /// HTTP method of the request
        method: String,
        /// Request path as given by the caller
        path: String,
        /// Underlying transport error
        message: String,
    },

    /// The executor reached its hard ceiling of attempts.
    #[error("exceeded retry limit")]
    RetryLimitExceeded,

    /// The server answered with an unexpected status code.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The server answered with the expected status code but an unreadable body.
    #[error("failed to decode '{body}': {message}")]
    Decode {
        /// Raw response body
        body: String,
        /// Underlying parse error
        message: String,
    },

    /// An asynchronous operation answered with a task lacking an id.
    #[error("task doesn't have an id")]
    TaskWithoutId,

    /// The call did not complete before its deadline.
    #[error("HTTP {method} {path} exceeded its deadline")]
    DeadlineExceeded {
        /// HTTP method of the request
        method: String,
        /// Request path as given by the caller
        path: String,
    },

    /// A client-side lookup found nothing.
    #[error("{0}")]
    NotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Specialized result type for SOLUS IO operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the error code for this error type.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Build { .. } => "BUILD_ERROR",
            Self::Transport { .. } => "TRANSPORT_ERROR",
            Self::RetryLimitExceeded => "RETRY_LIMIT_EXCEEDED",
            Self::Http(_) => "HTTP_ERROR",
            Self::Decode { .. } => "DECODE_ERROR",
            Self::TaskWithoutId => "TASK_WITHOUT_ID",
            Self::DeadlineExceeded { .. } => "DEADLINE_EXCEEDED",
            Self::NotFound(_) => "NOT_FOUND",
            Self::ConfigError(_) => "CONFIG_ERROR",
        }
    }

    /// Returns true if the executor retries a call failing with this error.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport { .. } => true,
            Self::Http(err) => err.code == 502,
            _ => false,
        }
    }

    /// Returns true if this is an [`HttpError`] with a 404 status code.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Http(err) if err.is_not_found())
    }

    /// Returns the HTTP status code when the server answered.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http(err) => Some(err.code),
            _ => None,
        }
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::ConfigError(err.to_string())
    }
}

/// Reports whether `err`, or any error in its source chain, is a 404 [`HttpError`].
#[must_use]
pub fn is_not_found(err: &(dyn std::error::Error + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(err) = current {
        if let Some(http) = err.downcast_ref::<HttpError>() {
            return http.is_not_found();
        }
        if let Some(Error::Http(http)) = err.downcast_ref::<Error>() {
            return http.is_not_found();
        }
        current = err.source();
    }
    false
}

/// A response whose status code did not match the one expected for its verb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpError {
    /// HTTP method of the request
    pub method: String,
    /// Request path as given by the caller
    pub path: String,
    /// Status code of the response
    pub code: u16,
    /// Server message, or the raw body when it is not a JSON error document
    pub message: String,
    /// Field-level validation errors
    pub errors: Option<HashMap<String, Vec<String>>>,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Option<HashMap<String, Vec<String>>>,
}

impl HttpError {
    /// Normalize a response body into an error.
    #[must_use]
    pub fn new(method: impl Into<String>, path: impl Into<String>, code: u16, body: &[u8]) -> Self {
        let (message, errors) = match serde_json::from_slice::<ErrorBody>(body) {
            Ok(parsed) => (parsed.message.unwrap_or_default(), parsed.errors),
            Err(_) => (String::from_utf8_lossy(body).into_owned(), None),
        };

        Self {
            method: method.into(),
            path: path.into(),
            code,
            message,
            errors,
        }
    }

    /// Returns true for a 404 status code.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        self.code == 404
    }

    fn has_errors(&self) -> bool {
        self.errors.as_ref().is_some_and(|errors| !errors.is_empty())
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HTTP {} {} returns {} status code",
            self.method, self.path, self.code
        )?;
        if self.has_errors() {
            f.write_str(" with errors")?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for HttpError {}
