//! # solus-core
//!
//! Request, retry, decoding and pagination core of the SOLUS IO API client.
//!
//! Every resource service of the `solus` crate is a thin layer over the verbs
//! of [`ApiClient`]; this crate holds everything those verbs rely on.
//!
//! ## Modules
//!
//! - [`api`] - The API client, its builder and the generic verbs
//! - [`auth`] - Credentials and authentication strategies
//! - [`client`] - HTTP settings, retry policy and the bounded retry loop
//! - [`config`] - Loadable, validated client configuration
//! - [`de`] - Deserialization helpers for API payloads
//! - [`error`] - Error types and HTTP error normalization
//! - [`pagination`] - Paginated collections and the page cursor
//! - [`query`] - Query parameters and filters
//! - [`request`] - Per-call request options
//! - [`response`] - Response envelope and decoding
//! - [`task`] - Asynchronous task model

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod de;
pub mod error;
pub mod pagination;
pub mod query;
pub mod request;
pub mod response;
pub mod task;

// Re-export commonly used types
pub use api::{ApiClient, ApiClientBuilder};
pub use auth::{ApiTokenAuthenticator, Authenticator, Credentials, EmailAndPasswordAuthenticator};
pub use client::{ClientConfig, RetryPolicy};
pub use config::SolusClientConfig;
pub use error::{is_not_found, Error, HttpError, Result};
pub use pagination::{Page, Paginated, ResponseLinks, ResponseMeta};
pub use query::{Filter, QueryParams};
pub use request::RequestOptions;
pub use task::{Task, TaskStatus};
