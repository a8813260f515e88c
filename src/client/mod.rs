//! Cloud provider database API client

use async_trait::async_trait;

use crate::error::Result;

pub mod cloud;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use cloud::CloudClient;
#[cfg(test)]
pub use mock::MockDatabasesClient;
pub use models::{FirewallRule, FirewallRuleSpec, FirewallRulesRequest, FirewallRulesResponse};

/// Managed database operations used by the CLI
#[async_trait]
pub trait DatabasesApi: Send + Sync {
    /// List the firewall rules (trusted sources) of a cluster
    async fn list_firewall_rules(&self, cluster_id: &str) -> Result<Vec<FirewallRule>>;

    /// Replace the firewall rules of a cluster.
    ///
    /// Returns the rules as stored by the API, with IDs and timestamps filled in.
    async fn update_firewall_rules(
        &self,
        cluster_id: &str,
        request: &FirewallRulesRequest,
    ) -> Result<Vec<FirewallRule>>;
}

/// API path of a cluster's firewall resource
pub fn firewall_path(cluster_id: &str) -> String {
    format!("/v2/databases/{}/firewall", cluster_id)
}
