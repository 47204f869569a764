//! Typed asynchronous client for the SOLUS IO API.
//!
//! [`SolusClient`] hands out one service per resource group. Services borrow
//! the client, so they are cheap to create and drop:
//!
//! ```no_run
//! use solus::{
//!     ApiTokenAuthenticator, SolusClientBuilder, VirtualServerStatus, VirtualServersFilter,
//! };
//!
//! # async fn run() -> solus::Result<()> {
//! let client = SolusClientBuilder::new("https://solus.example.com/api/v1/")?
//!     .build(&ApiTokenAuthenticator::new("token"))
//!     .await?;
//!
//! let servers = client
//!     .virtual_servers()
//!     .list(&VirtualServersFilter::new().by_status(VirtualServerStatus::Started))
//!     .await?
//!     .collect_all()
//!     .await?;
//! println!("{} servers running", servers.len());
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod models;
pub mod services;

pub use client::{SolusClient, SolusClientBuilder};
pub use models::*;
pub use services::*;

pub use solus_core::task::actions as task_actions;
pub use solus_core::{
    is_not_found, ApiTokenAuthenticator, Authenticator, ClientConfig, Credentials,
    EmailAndPasswordAuthenticator, Error, HttpError, Page, Paginated, RequestOptions,
    ResponseLinks, ResponseMeta, RetryPolicy, SolusClientConfig, Task, TaskStatus,
};

/// Result alias over the shared SOLUS error type.
pub type Result<T> = solus_core::Result<T>;
