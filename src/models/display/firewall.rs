//! Firewall rule display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::FirewallRule;
use crate::output::formatters::format_created_at;

/// Firewall rule display model for table output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct FirewallRuleDisplay {
    #[tabled(rename = "UUID")]
    pub uuid: String,

    #[tabled(rename = "ClusterUUID")]
    pub cluster_uuid: String,

    #[tabled(rename = "Type")]
    pub rule_type: String,

    #[tabled(rename = "Value")]
    pub value: String,

    /// Creation time, e.g. `2021-02-01 20:07:53 +0000 UTC`
    #[tabled(rename = "Created At")]
    pub created_at: String,
}

impl From<FirewallRule> for FirewallRuleDisplay {
    fn from(rule: FirewallRule) -> Self {
        Self {
            uuid: rule.uuid.unwrap_or_default(),
            cluster_uuid: rule.cluster_uuid.unwrap_or_default(),
            rule_type: rule.rule_type,
            value: rule.value,
            created_at: format_created_at(rule.created_at.as_ref()),
        }
    }
}
