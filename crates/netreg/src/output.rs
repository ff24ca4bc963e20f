use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use netreg_schema::{Network, ServiceKind};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

/// Print `value` as a single JSON line.
pub fn print_json<T: Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
    );
}

/// The JSON spelling of a unit enum value, e.g. `0xhex` or `testnetOf`.
pub fn wire_name<T: Serialize>(value: &T) -> String {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::String(name)) => name,
        _ => "unknown".to_string(),
    }
}

/// Names of the services a network supports.
pub fn supported_services(network: &Network) -> Vec<&'static str> {
    ServiceKind::ALL
        .into_iter()
        .filter(|kind| network.supports(*kind))
        .map(ServiceKind::as_str)
        .collect()
}

pub fn network_table(networks: &[&Network]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["ID", "NAME", "TYPE", "CAIP-2", "SERVICES"]);

    for network in networks {
        let services = supported_services(network);
        table.add_row(vec![
            network.id.clone(),
            network.full_name.clone(),
            network.network_type.to_string(),
            network.caip2_id.clone(),
            if services.is_empty() {
                "-".to_string()
            } else {
                services.join(", ")
            },
        ]);
    }
    table
}
