//! SSH keys installable on new servers.

use serde::{Deserialize, Serialize};
use solus_core::de::nullable;

/// A stored SSH public key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SshKey {
    /// Key ID.
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
    /// Key name.
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    /// Public key in OpenSSH format.
    #[serde(deserialize_with = "nullable")]
    pub body: String,
}

/// Payload for storing an SSH key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SshKeyCreateRequest {
    /// Key name.
    pub name: String,
    /// Public key in OpenSSH format.
    pub body: String,
    /// Owner ID.
    pub user_id: u64,
}
