//! Permissions grantable to roles.

use serde::{Deserialize, Serialize};
use solus_core::de::nullable;

/// A named permission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Permission {
    /// Permission ID.
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
    /// Permission name.
    #[serde(deserialize_with = "nullable")]
    pub name: String,
}
