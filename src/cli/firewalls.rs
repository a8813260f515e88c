//! Database firewall command implementations

use crate::cli::CommandContext;
use crate::client::{FirewallRuleSpec, FirewallRulesRequest};
use crate::error::{Error, Result};
use crate::models::display::FirewallRuleDisplay;
use crate::output;

/// Parse a `type:value` rule argument.
///
/// Splits on the first `:` so values such as IPv6 addresses keep theirs.
pub fn parse_rule(raw: &str) -> std::result::Result<FirewallRuleSpec, String> {
    match raw.split_once(':') {
        Some((rule_type, value)) if !rule_type.is_empty() && !value.is_empty() => {
            Ok(FirewallRuleSpec {
                rule_type: rule_type.to_string(),
                value: value.to_string(),
            })
        }
        _ => Err(format!(
            "invalid rule '{}': expected <type>:<value>, e.g. tag:backend",
            raw
        )),
    }
}

/// Reject cluster IDs that would escape the firewall path
fn validate_cluster_id(cluster_id: &str) -> Result<()> {
    if cluster_id.trim().is_empty() {
        return Err(Error::Usage("cluster ID must not be empty".to_string()));
    }
    if matches!(cluster_id, "." | "..") || cluster_id.contains(['/', '?', '#']) {
        return Err(Error::Usage(format!(
            "invalid cluster ID '{}'",
            cluster_id
        )));
    }
    Ok(())
}

/// Run `databases firewalls list`, returning the rendered output
pub async fn list(ctx: &CommandContext, cluster_id: &str) -> Result<String> {
    validate_cluster_id(cluster_id)?;

    let rules = ctx.client.list_firewall_rules(cluster_id).await?;
    log::debug!("Fetched {} firewall rules for {}", rules.len(), cluster_id);

    let rows: Vec<FirewallRuleDisplay> = rules.iter().cloned().map(Into::into).collect();
    output::render(ctx.format, &rows, &rules)
}

/// Run `databases firewalls add`, returning the rendered output
pub async fn add(
    ctx: &CommandContext,
    cluster_id: &str,
    rules: Vec<FirewallRuleSpec>,
) -> Result<String> {
    validate_cluster_id(cluster_id)?;
    if rules.is_empty() {
        return Err(Error::Usage("at least one --rule is required".to_string()));
    }

    let request = FirewallRulesRequest { rules };
    let stored = ctx
        .client
        .update_firewall_rules(cluster_id, &request)
        .await?;
    log::debug!("Cluster {} now has {} firewall rules", cluster_id, stored.len());

    let rows: Vec<FirewallRuleDisplay> = stored.iter().cloned().map(Into::into).collect();
    output::render(ctx.format, &rows, &stored)
}
