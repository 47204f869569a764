//! IP blocks and the addresses allocated from them.

use crate::models::compute_resources::ComputeResource;
use serde::{Deserialize, Serialize};
use solus_core::de::nullable;

wire_enum! {
    /// IP protocol version.
    IpVersion {
        /// IPv4
        V4 => "IPv4",
        /// IPv6
        V6 => "IPv6",
    }
}

/// A range of IP addresses servers get their addresses from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IpBlock {
    /// IP block ID.
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
    /// IP block name.
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    /// IP version.
    #[serde(rename = "type", deserialize_with = "nullable")]
    pub version: IpVersion,
    /// Gateway.
    #[serde(deserialize_with = "nullable")]
    pub gateway: String,
    /// Netmask, IPv4 only.
    #[serde(deserialize_with = "nullable")]
    pub netmask: String,
    /// Primary name server.
    #[serde(deserialize_with = "nullable")]
    pub ns_1: String,
    /// Secondary name server.
    #[serde(deserialize_with = "nullable")]
    pub ns_2: String,
    /// First address of the range, IPv4 only.
    #[serde(deserialize_with = "nullable")]
    pub from: String,
    /// Last address of the range, IPv4 only.
    #[serde(deserialize_with = "nullable")]
    pub to: String,
    /// Subnet prefix length.
    #[serde(deserialize_with = "nullable")]
    pub subnet: u8,
    /// Compute resources using the block.
    #[serde(deserialize_with = "nullable")]
    pub compute_resources: Vec<ComputeResource>,
    /// Allocated addresses.
    #[serde(deserialize_with = "nullable")]
    pub ips: Vec<IpBlockIpAddress>,
}

/// An address allocated from an IP block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IpBlockIpAddress {
    /// Address ID.
    #[serde(deserialize_with = "nullable")]
    pub id: u64,
    /// The address.
    #[serde(deserialize_with = "nullable")]
    pub ip: String,
    /// Block the address belongs to.
    #[serde(deserialize_with = "nullable")]
    pub ip_block: IpBlock,
}

/// Payload for creating or updating an IP block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpBlockRequest {
    /// IDs of compute resources using the block.
    pub compute_resources: Vec<u64>,
    /// IP block name.
    pub name: String,
    /// IP version.
    #[serde(rename = "type")]
    pub version: IpVersion,
    /// Gateway.
    pub gateway: String,
    /// Primary name server.
    pub ns_1: String,
    /// Secondary name server.
    pub ns_2: String,
    /// Netmask, IPv4 only.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub netmask: String,
    /// First address of the range, IPv4 only.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub from: String,
    /// Last address of the range, IPv4 only.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub to: String,
    /// Address range, IPv6 only.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub range: String,
    /// Subnet prefix length.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet: Option<u8>,
}
