//! Database firewall (trusted source) models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A trusted source allowed to connect to a database cluster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FirewallRule {
    /// Rule ID (assigned by the API)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,

    /// Cluster the rule belongs to (assigned by the API)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_uuid: Option<String>,

    /// Source kind: ip_addr, droplet, k8s, tag or app
    #[serde(rename = "type")]
    pub rule_type: String,

    /// Source identifier, interpreted according to `rule_type`
    pub value: String,

    /// Creation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Rule as sent in an update request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirewallRuleSpec {
    #[serde(rename = "type")]
    pub rule_type: String,
    pub value: String,
}

/// Body of `PUT /v2/databases/{id}/firewall`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirewallRulesRequest {
    pub rules: Vec<FirewallRuleSpec>,
}

/// Response of the firewall endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirewallRulesResponse {
    #[serde(default)]
    pub rules: Vec<FirewallRule>,
}
