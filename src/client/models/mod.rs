//! Database API data models

mod firewall;

pub use firewall::{FirewallRule, FirewallRuleSpec, FirewallRulesRequest, FirewallRulesResponse};
