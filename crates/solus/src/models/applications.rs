//! Applications and icons.

use crate::models::common::CloudInitVersion;
use serde::{Deserialize, Serialize};
use solus_core::de::nullable;

wire_enum! {
    /// What an icon is used for.
    IconType {
        /// OS image icon
        Os => "os",
        /// Application icon
        Application => "application",
        /// Location flag
        Flags => "flags",
    }
}

/// An icon shown next to OS images, applications and locations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Icon {
    /// Icon ID.
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
    /// Icon name.
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    /// Image URL.
    #[serde(deserialize_with = "nullable")]
    pub url: String,
    /// Icon type.
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub kind: IconType,
}

wire_enum! {
    /// How the login link of an application is rendered.
    LoginLinkType {
        /// No login link
        None => "none",
        /// Plain URL
        Url => "url",
        /// JavaScript snippet producing the URL
        JsCode => "js_code",
        /// Informational text
        Info => "info",
    }
}

/// Login link of an application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginLink {
    /// Link type.
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub kind: LoginLinkType,
    /// Link content, interpreted according to the type.
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "nullable")]
    pub content: String,
}

/// An application installable on new servers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Application {
    /// Application ID.
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
    /// Application name.
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    /// Icon.
    #[serde(deserialize_with = "nullable")]
    pub icon: Icon,
    /// Image URL.
    #[serde(deserialize_with = "nullable")]
    pub url: String,
    /// Cloud-init flavour.
    #[serde(deserialize_with = "nullable")]
    pub cloud_init_version: CloudInitVersion,
    /// Cloud-init user data template.
    #[serde(deserialize_with = "nullable")]
    pub user_data_template: String,
    /// How to log into a deployed application.
    #[serde(deserialize_with = "nullable")]
    pub login_link: LoginLink,
    /// JSON schema of the application data form.
    #[serde(deserialize_with = "nullable")]
    pub json_schema: String,
    /// Selected by default.
    #[serde(deserialize_with = "nullable")]
    pub is_default: bool,
    /// Visible to end users.
    #[serde(deserialize_with = "nullable")]
    pub is_visible: bool,
    /// Shipped with SOLUS IO.
    #[serde(deserialize_with = "nullable")]
    pub is_buildin: bool,
}

/// Payload for creating or updating an application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRequest {
    /// Application name.
    pub name: String,
    /// Image URL.
    pub url: String,
    /// Icon ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_id: Option<u64>,
    /// Cloud-init flavour.
    pub cloud_init_version: CloudInitVersion,
    /// Cloud-init user data template.
    pub user_data_template: String,
    /// JSON schema of the application data form.
    pub json_schema: String,
    /// Visible to end users.
    pub is_visible: bool,
    /// How to log into a deployed application.
    pub login_link: LoginLink,
}
