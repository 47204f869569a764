//! Global settings of a SOLUS IO installation.
//!
//! Commonly used sections are typed. Driver configurations, notification
//! templates and limit groups are kept as raw JSON.

use crate::models::compute_resources::BalanceStrategy;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use solus_core::de::nullable;
use uuid::Uuid;

/// Installation-wide settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Installation UUID.
    pub uuid: Option<Uuid>,
    /// Public hostname of the management node.
    #[serde(deserialize_with = "nullable")]
    pub hostname: String,
    /// Install updates without asking.
    #[serde(deserialize_with = "nullable")]
    pub force_autoupdate: bool,
    /// Send anonymous usage statistics.
    #[serde(deserialize_with = "nullable")]
    pub send_statistic: bool,
    /// Update channels the installation may follow.
    #[serde(deserialize_with = "nullable")]
    pub update_channels: Vec<String>,
    /// Automatic update window.
    #[serde(deserialize_with = "nullable")]
    pub update_schedule: SettingsUpdateSchedule,
    /// Update method and channel.
    #[serde(deserialize_with = "nullable")]
    pub update: SettingsUpdate,
    /// API token endpoint.
    #[serde(deserialize_with = "nullable")]
    pub token_api: SettingsTokenApi,
    /// Cleanup of vanished servers.
    #[serde(deserialize_with = "nullable")]
    pub non_existent_vms_remover: SettingsNonExistentVmsRemover,
    /// Default network rules.
    #[serde(deserialize_with = "nullable")]
    pub network_rules: SettingsNetworkRules,
    /// Outgoing mail server.
    #[serde(deserialize_with = "nullable")]
    pub mail: SettingsMail,
    /// Self registration.
    #[serde(deserialize_with = "nullable")]
    pub registration: SettingsRegistration,
    /// Compute resource defaults.
    #[serde(deserialize_with = "nullable")]
    pub compute_resource: SettingsComputeResource,
    /// End-user panel features.
    #[serde(deserialize_with = "nullable")]
    pub features: SettingsFeatures,
    /// Branding.
    #[serde(deserialize_with = "nullable")]
    pub theme: SettingsTheme,
    /// DNS integration, driver specific.
    #[serde(deserialize_with = "nullable")]
    pub dns: Map<String, Value>,
    /// Billing integration, driver specific.
    #[serde(deserialize_with = "nullable")]
    pub billing_integration: Map<String, Value>,
    /// Limits applied to users without a limit group.
    #[serde(deserialize_with = "nullable")]
    pub limit_group: Map<String, Value>,
    /// Email notification templates keyed by notification name.
    #[serde(deserialize_with = "nullable")]
    pub notifications: Map<String, Value>,
    /// Newest released version.
    #[serde(deserialize_with = "nullable")]
    pub latest_version: String,
}

/// When automatic updates may run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsUpdateSchedule {
    /// Days of the week, 1 is Monday.
    #[serde(deserialize_with = "nullable")]
    pub scheduled_days: Vec<u8>,
    /// Time of day as `HH:MM`.
    #[serde(deserialize_with = "nullable")]
    pub scheduled_time: String,
}

/// Update method and channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsUpdate {
    /// `auto` or `manual`.
    #[serde(deserialize_with = "nullable")]
    pub method: String,
    /// Update channel.
    #[serde(deserialize_with = "nullable")]
    pub channel: String,
}

/// API token endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsTokenApi {
    /// Endpoint URL.
    #[serde(deserialize_with = "nullable")]
    pub url: String,
    /// Whether the endpoint is enabled.
    #[serde(deserialize_with = "nullable")]
    pub is_enabled: bool,
}

/// Cleanup of servers missing from their compute resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsNonExistentVmsRemover {
    /// Whether cleanup runs.
    #[serde(deserialize_with = "nullable")]
    pub enabled: bool,
    /// Check interval in hours.
    #[serde(deserialize_with = "nullable")]
    pub interval: u64,
}

/// Traffic allowed out of servers by default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsNetworkRules {
    /// Allow ARP.
    #[serde(deserialize_with = "nullable")]
    pub arp: bool,
    /// Allow DHCP.
    #[serde(deserialize_with = "nullable")]
    pub dhcp: bool,
    /// Allow cloud-init metadata.
    #[serde(deserialize_with = "nullable")]
    pub cloud_init: bool,
    /// Allow SMTP.
    #[serde(deserialize_with = "nullable")]
    pub smtp: bool,
    /// Allow ICMP.
    #[serde(deserialize_with = "nullable")]
    pub icmp: bool,
    /// Allow ICMP replies.
    #[serde(deserialize_with = "nullable")]
    pub icmp_reply: bool,
    /// Allow portmapper.
    #[serde(deserialize_with = "nullable")]
    pub portmapper: bool,
}

/// Outgoing mail server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsMail {
    /// Server host.
    #[serde(deserialize_with = "nullable")]
    pub host: String,
    /// Port, sent as a string.
    #[serde(deserialize_with = "nullable")]
    pub port: String,
    /// Login.
    #[serde(deserialize_with = "nullable")]
    pub username: String,
    /// Password.
    #[serde(deserialize_with = "nullable")]
    pub password: String,
    /// Use TLS.
    #[serde(deserialize_with = "nullable")]
    pub encryption: bool,
    /// Sender address.
    #[serde(deserialize_with = "nullable")]
    pub from_email: String,
    /// Sender name.
    #[serde(deserialize_with = "nullable")]
    pub from_name: String,
    /// Recipient of test mails.
    #[serde(deserialize_with = "nullable")]
    pub test_mail: String,
}

/// Self registration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsRegistration {
    /// Role given to registered users.
    #[serde(deserialize_with = "nullable")]
    pub role: String,
}

/// Defaults for compute resources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsComputeResource {
    /// Rescue ISO location.
    #[serde(deserialize_with = "nullable")]
    pub rescue_iso_url: String,
    /// Storage placement strategy.
    #[serde(deserialize_with = "nullable")]
    pub balance_strategy: BalanceStrategy,
}

/// What the end-user panel shows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsFeatures {
    /// Hide plan names.
    #[serde(deserialize_with = "nullable")]
    pub hide_plan_name: bool,
    /// Hide the plan section.
    #[serde(deserialize_with = "nullable")]
    pub hide_plan_section: bool,
    /// Hide the user data field.
    #[serde(deserialize_with = "nullable")]
    pub hide_user_data: bool,
    /// Hide the location section.
    #[serde(deserialize_with = "nullable")]
    pub hide_location_section: bool,
    /// Allow self registration.
    #[serde(deserialize_with = "nullable")]
    pub allow_registration: bool,
    /// Allow password recovery.
    #[serde(deserialize_with = "nullable")]
    pub allow_password_recovery: bool,
}

/// Branding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsTheme {
    /// Product name shown to users.
    #[serde(deserialize_with = "nullable")]
    pub brand_name: String,
    /// Primary color, `#RRGGBB`.
    #[serde(deserialize_with = "nullable")]
    pub primary_color: String,
    /// Secondary color, `#RRGGBB`.
    #[serde(deserialize_with = "nullable")]
    pub secondary_color: String,
    /// Logo URL.
    #[serde(deserialize_with = "nullable")]
    pub logo: String,
    /// Favicon URL, empty when unset.
    #[serde(deserialize_with = "nullable")]
    pub favicon: String,
    /// Terms and conditions link.
    #[serde(deserialize_with = "nullable")]
    pub terms_and_conditions_url: String,
}

/// Partial settings update. Only set fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsUpdateRequest {
    /// New hostname.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    /// Install updates without asking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_autoupdate: Option<bool>,
    /// Send usage statistics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_statistic: Option<bool>,
    /// Update method and channel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update: Option<SettingsUpdate>,
    /// Default network rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_rules: Option<SettingsNetworkRules>,
    /// End-user panel features.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<SettingsFeatures>,
    /// Branding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<SettingsTheme>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_settings_decode() {
        let settings: Settings = serde_json::from_value(json!({
            "uuid": "00000000-0000-0000-0000-000000000000",
            "hostname": "hostname.tld",
            "update_channels": ["stable", "mainline", "testing"],
            "update_schedule": {"scheduled_days": [6, 1, 3], "scheduled_time": "06:00"},
            "compute_resource": {
                "rescue_iso_url": "http://images.prod.solus.io/rescue/rescue-latest.iso",
                "balance_strategy": "round-robin"
            },
            "dns": {"type": "powerdns", "ttl": 60},
            "theme": {"brand_name": "SOLUS IO", "favicon": null},
            "latest-version": "1.1.19040",
            "latest_version": "1.1.20873",
            "notifications": null
        }))
        .unwrap();

        assert_eq!(settings.uuid, Some(Uuid::nil()));
        assert_eq!(settings.hostname, "hostname.tld");
        assert_eq!(settings.update_channels.len(), 3);
        assert_eq!(settings.update_schedule.scheduled_time, "06:00");
        assert_eq!(
            settings.compute_resource.balance_strategy,
            BalanceStrategy::RoundRobin
        );
        assert_eq!(settings.dns["ttl"], 60);
        assert_eq!(settings.theme.brand_name, "SOLUS IO");
        assert_eq!(settings.theme.favicon, "");
        assert_eq!(settings.latest_version, "1.1.20873");
        assert!(settings.notifications.is_empty());
    }

    #[test]
    fn test_update_request_sends_only_set_fields() {
        let request = SettingsUpdateRequest {
            hostname: Some("new-hostname.tld".to_string()),
            ..SettingsUpdateRequest::default()
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"hostname": "new-hostname.tld"})
        );
    }
}
