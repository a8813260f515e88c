//! Mock database API client for testing
//!
//! Provides an in-memory implementation of [`DatabasesApi`] so command handlers
//! can be tested without a network.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::{DatabasesApi, FirewallRule, FirewallRulesRequest};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// # Example
/// ```ignore
/// let mock = MockDatabasesClient::new().with_rules(vec![rule]);
/// let rules = mock.list_firewall_rules("cluster").await?;
/// ```
#[derive(Default)]
pub struct MockDatabasesClient {
    /// Rules stored per the last update (or seeded with `with_rules`)
    rules: Arc<Mutex<Vec<FirewallRule>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Update requests received, with their cluster ID
    updates: Arc<Mutex<Vec<(String, FirewallRulesRequest)>>>,
    /// Clusters passed to list calls
    listed: Arc<Mutex<Vec<String>>>,
}

impl MockDatabasesClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the rules returned by `list_firewall_rules`
    pub fn with_rules(self, rules: Vec<FirewallRule>) -> Self {
        self.rules.try_lock().expect("mock not shared yet").extend(rules);
        self
    }

    /// Fail the next call with `error`
    pub fn with_error(self, error: ApiError) -> Self {
        *self.error.try_lock().expect("mock not shared yet") = Some(error);
        self
    }

    /// Update requests captured so far
    pub async fn updates(&self) -> Vec<(String, FirewallRulesRequest)> {
        self.updates.lock().await.clone()
    }

    /// Cluster IDs passed to list calls so far
    pub async fn listed(&self) -> Vec<String> {
        self.listed.lock().await.clone()
    }

    async fn take_error(&self) -> Result<()> {
        match self.error.lock().await.take() {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl DatabasesApi for MockDatabasesClient {
    async fn list_firewall_rules(&self, cluster_id: &str) -> Result<Vec<FirewallRule>> {
        self.take_error().await?;
        self.listed.lock().await.push(cluster_id.to_string());
        Ok(self.rules.lock().await.clone())
    }

    async fn update_firewall_rules(
        &self,
        cluster_id: &str,
        request: &FirewallRulesRequest,
    ) -> Result<Vec<FirewallRule>> {
        self.take_error().await?;
        self.updates
            .lock()
            .await
            .push((cluster_id.to_string(), request.clone()));

        let created_at = Utc.with_ymd_and_hms(2021, 2, 1, 20, 7, 53).single();
        let stored: Vec<FirewallRule> = request
            .rules
            .iter()
            .enumerate()
            .map(|(i, spec)| FirewallRule {
                uuid: Some(format!("rule-{}", i + 1)),
                cluster_uuid: Some(cluster_id.to_string()),
                rule_type: spec.rule_type.clone(),
                value: spec.value.clone(),
                created_at,
            })
            .collect();

        *self.rules.lock().await = stored.clone();
        Ok(stored)
    }
}
