//! SOLUS IO license.

use serde::{Deserialize, Serialize};
use solus_core::de::nullable;

/// The installed license.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct License {
    /// Licensed CPU cores.
    #[serde(deserialize_with = "nullable")]
    pub cpu_cores: u32,
    /// CPU cores in use.
    #[serde(deserialize_with = "nullable")]
    pub cpu_cores_in_use: u32,
    /// Whether the license is active.
    #[serde(deserialize_with = "nullable")]
    pub is_active: bool,
    /// License key.
    #[serde(deserialize_with = "nullable")]
    pub key: String,
    /// License key type.
    #[serde(deserialize_with = "nullable")]
    pub key_type: String,
    /// Product name.
    #[serde(deserialize_with = "nullable")]
    pub product: String,
    /// Expiration date.
    #[serde(deserialize_with = "nullable")]
    pub expiration_date: String,
    /// Date of the last update.
    #[serde(deserialize_with = "nullable")]
    pub update_date: String,
}

/// Payload for activating a license.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseActivateRequest {
    /// Activation code.
    pub activation_code: String,
}
