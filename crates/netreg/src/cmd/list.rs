use netreg_filter::{supported_service_count, NetworksView, ToggleControl, ToggleTarget};
use netreg_schema::{Network, ServiceKind};
use serde::Serialize;

use crate::cmd::ListArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{network_table, print_json, supported_services, OutputFormat};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NetworkRow<'a> {
    id: &'a str,
    full_name: &'a str,
    short_name: &'a str,
    network_type: String,
    caip2_id: &'a str,
    services: Vec<&'static str>,
    service_count: usize,
}

#[derive(Serialize)]
struct FilterState<'a> {
    id: &'a str,
    label: &'a str,
    checked: bool,
}

#[derive(Serialize)]
struct ListOutput<'a> {
    search: &'a str,
    filters: Vec<FilterState<'a>>,
    count: usize,
    networks: Vec<NetworkRow<'a>>,
}

pub fn run(args: ListArgs, format: OutputFormat) -> CliResult<i32> {
    let registry = args.registry.load()?;

    let mut view = NetworksView::from_registry(registry);
    view.set_search(args.search.as_str());
    view.set_toggle(ToggleTarget::Testnets, args.testnets);
    for (kind, on) in [
        (ServiceKind::Subgraphs, args.subgraphs),
        (ServiceKind::Sps, args.sps),
        (ServiceKind::Firehose, args.firehose),
        (ServiceKind::Substreams, args.substreams),
    ] {
        view.set_service_filter(kind, on);
    }

    let toggles = view.toggles();
    let visible = view.visible();
    print_list(&args.search, &toggles, &visible, format);
    Ok(SUCCESS)
}

fn row(network: &Network) -> NetworkRow<'_> {
    NetworkRow {
        id: &network.id,
        full_name: &network.full_name,
        short_name: &network.short_name,
        network_type: network.network_type.to_string(),
        caip2_id: &network.caip2_id,
        services: supported_services(network),
        service_count: supported_service_count(network),
    }
}

fn print_list(search: &str, toggles: &[ToggleControl], networks: &[&Network], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = ListOutput {
                search,
                filters: toggles
                    .iter()
                    .map(|t| FilterState {
                        id: t.id,
                        label: t.label,
                        checked: t.checked,
                    })
                    .collect(),
                count: networks.len(),
                networks: networks.iter().map(|n| row(n)).collect(),
            };
            print_json(&out);
        }
        OutputFormat::Table => {
            println!("{}", network_table(networks));
            println!("{} network(s)", networks.len());
        }
        OutputFormat::Pretty => {
            let header = toggles
                .iter()
                .map(|t| format!("[{}] {}", if t.checked { "x" } else { " " }, t.label))
                .collect::<Vec<_>>()
                .join("  ");
            println!("{header}");
            if !search.is_empty() {
                println!("search: {search:?}");
            }
            println!();
            for network in networks {
                let services = supported_services(network);
                println!(
                    "{:<28} {:<8} {:<36} {}",
                    network.id,
                    network.network_type.as_str(),
                    network.full_name,
                    if services.is_empty() {
                        "-".to_string()
                    } else {
                        services.join(",")
                    }
                );
            }
        }
        OutputFormat::Raw => {
            for network in networks {
                println!("{}", network.id);
            }
        }
    }
}
