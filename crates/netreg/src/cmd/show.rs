use netreg_schema::{Network, ServiceKind};

use crate::cmd::ShowArgs;
use crate::exit::{CliError, CliResult, FAILURE, SUCCESS};
use crate::output::{print_json, wire_name, OutputFormat};

pub fn run(args: ShowArgs, format: OutputFormat) -> CliResult<i32> {
    let registry = args.registry.load()?;
    let network = registry
        .network(&args.network)
        .ok_or_else(|| CliError::new(FAILURE, format!("network not found: {}", args.network)))?;

    match format {
        OutputFormat::Json => print_json(network),
        OutputFormat::Table | OutputFormat::Pretty => print_details(network),
        OutputFormat::Raw => println!("{}", network.id),
    }
    Ok(SUCCESS)
}

fn print_details(network: &Network) {
    match &network.second_name {
        Some(second) => println!("{} ({second})", network.full_name),
        None => println!("{}", network.full_name),
    }
    line("Id", &network.id);
    line("Short name", &network.short_name);
    line("CAIP-2", &network.caip2_id);
    line("Type", network.network_type.as_str());
    line(
        "Issuance rewards",
        if network.issuance_rewards { "yes" } else { "no" },
    );
    if !network.aliases().is_empty() {
        line("Aliases", &network.aliases().join(", "));
    }
    if let Some(token) = &network.native_token {
        line("Native token", token);
    }

    println!("  Services:");
    for kind in ServiceKind::ALL {
        let endpoints = network.services.endpoints(kind);
        if endpoints.is_empty() {
            println!("    {:<12} unsupported", kind.label());
        } else {
            println!("    {:<12} {}", kind.label(), endpoints.join(", "));
        }
    }

    list("Explorers", network.explorer_urls.as_deref());
    list("RPC", network.rpc_urls.as_deref());
    if let Some(apis) = &network.api_urls {
        let apis: Vec<String> = apis
            .iter()
            .map(|api| format!("{} ({})", api.url, wire_name(&api.kind)))
            .collect();
        list("APIs", Some(apis.as_slice()));
    }
    if let Some(docs) = &network.docs_url {
        line("Docs", docs);
    }
    if let Some(docs) = &network.indexer_docs_urls {
        let docs: Vec<String> = docs
            .iter()
            .map(|doc| match &doc.description {
                Some(description) => format!("{} ({description})", doc.url),
                None => doc.url.clone(),
            })
            .collect();
        list("Indexer docs", Some(docs.as_slice()));
    }
    if let Some(genesis) = &network.genesis {
        line(
            "Genesis",
            &format!("{} at height {}", genesis.hash, genesis.height),
        );
    }
    if let Some(firehose) = &network.firehose {
        line(
            "Firehose",
            &format!(
                "{} ({}, {})",
                firehose.block_type,
                wire_name(&firehose.bytes_encoding),
                firehose.buf_url
            ),
        );
        if firehose.evm_extended_model == Some(true) {
            line("EVM model", "extended");
        }
    }
    if let Some(protocol) = network.graph_node.as_ref().and_then(|g| g.protocol) {
        line("Graph Node", &wire_name(&protocol));
    }
    if let Some(icon) = network.icon.as_ref().and_then(|i| i.web3_icons.as_ref()) {
        line("Icon", &icon.name);
    }
    for relation in network.relations() {
        line("Relation", &format!("{} {}", relation.kind, relation.network));
    }
}

fn line(label: &str, value: &str) {
    println!("  {:<18}{value}", format!("{label}:"));
}

fn list(label: &str, values: Option<&[String]>) {
    if let Some(values) = values.filter(|v| !v.is_empty()) {
        line(label, &values.join(", "));
    }
}
