//! Audit trail of actions taken through the API.

use serde::{Deserialize, Serialize};
use solus_core::de::nullable;

/// One recorded event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivityLog {
    /// Entry ID.
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
    /// Event name, e.g. `additional_ip_created`.
    #[serde(deserialize_with = "nullable")]
    pub event: String,
    /// Email of the user who triggered the event.
    #[serde(deserialize_with = "nullable")]
    pub user_email: String,
    /// Time the event was recorded, as sent by the server.
    #[serde(deserialize_with = "nullable")]
    pub created_at: String,
}
