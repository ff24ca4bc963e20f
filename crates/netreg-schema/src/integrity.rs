//! Cross-record consistency checks.
//!
//! Parsing only checks each value's shape. These checks cover properties
//! that span records: id uniqueness, relation targets and alias collisions.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::model::{NetworksRegistry, ServiceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub severity: Severity,
    /// Id of the network the finding is about.
    pub network: String,
    pub message: String,
}

impl Finding {
    fn error(network: &str, message: String) -> Self {
        Self {
            severity: Severity::Error,
            network: network.to_string(),
            message,
        }
    }

    fn warning(network: &str, message: String) -> Self {
        Self {
            severity: Severity::Warning,
            network: network.to_string(),
            message,
        }
    }
}

/// Run all checks, in document order.
pub fn check(registry: &NetworksRegistry) -> Vec<Finding> {
    let mut findings = Vec::new();
    duplicate_ids(registry, &mut findings);
    dangling_relations(registry, &mut findings);
    alias_collisions(registry, &mut findings);
    blank_endpoints(registry, &mut findings);
    findings
}

pub fn has_errors(findings: &[Finding]) -> bool {
    findings.iter().any(|f| f.severity == Severity::Error)
}

fn duplicate_ids(registry: &NetworksRegistry, findings: &mut Vec<Finding>) {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for network in &registry.networks {
        *counts.entry(network.id.as_str()).or_default() += 1;
    }

    let mut reported = HashSet::new();
    for network in &registry.networks {
        let id = network.id.as_str();
        let count = counts[id];
        if count > 1 && reported.insert(id) {
            findings.push(Finding::error(
                id,
                format!("id is used by {count} networks"),
            ));
        }
    }
}

fn dangling_relations(registry: &NetworksRegistry, findings: &mut Vec<Finding>) {
    let ids: HashSet<&str> = registry.networks.iter().map(|n| n.id.as_str()).collect();

    for network in &registry.networks {
        for relation in network.relations() {
            if !ids.contains(relation.network.as_str()) {
                findings.push(Finding::warning(
                    &network.id,
                    format!(
                        "{} relation points at unknown network {:?}",
                        relation.kind, relation.network
                    ),
                ));
            }
        }
    }
}

fn alias_collisions(registry: &NetworksRegistry, findings: &mut Vec<Finding>) {
    let ids: HashSet<&str> = registry.networks.iter().map(|n| n.id.as_str()).collect();
    let mut owners: HashMap<&str, &str> = HashMap::new();

    for network in &registry.networks {
        for alias in network.aliases() {
            if alias != &network.id && ids.contains(alias.as_str()) {
                findings.push(Finding::warning(
                    &network.id,
                    format!("alias {alias:?} is also a network id"),
                ));
            }
            match owners.get(alias.as_str()) {
                Some(owner) if *owner != network.id => findings.push(Finding::warning(
                    &network.id,
                    format!("alias {alias:?} is already used by {owner}"),
                )),
                Some(_) => {}
                None => {
                    owners.insert(alias.as_str(), network.id.as_str());
                }
            }
        }
    }
}

fn blank_endpoints(registry: &NetworksRegistry, findings: &mut Vec<Finding>) {
    for network in &registry.networks {
        for kind in ServiceKind::ALL {
            let blanks = network
                .services
                .endpoints(kind)
                .iter()
                .filter(|url| url.trim().is_empty())
                .count();
            if blanks > 0 {
                findings.push(Finding::warning(
                    &network.id,
                    format!("{kind} lists {blanks} blank endpoint(s)"),
                ));
            }
        }
    }
}
