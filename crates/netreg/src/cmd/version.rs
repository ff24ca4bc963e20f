use netreg_schema::descriptor::{NETWORK_TYPE, RELATION_KIND};
use netreg_schema::{LoadConfig, ServiceKind};
use serde::Serialize;

use crate::cmd::VersionArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_json, OutputFormat};

/// What this build accepts, beyond the bare version.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VersionInfo {
    name: &'static str,
    version: &'static str,
    os: &'static str,
    arch: &'static str,
    json_schema: bool,
    network_types: &'static [&'static str],
    relation_kinds: &'static [&'static str],
    services: Vec<&'static str>,
    max_document_size: usize,
}

impl VersionInfo {
    fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            os: std::env::consts::OS,
            arch: std::env::consts::ARCH,
            json_schema: cfg!(feature = "json-schema"),
            network_types: NETWORK_TYPE.values,
            relation_kinds: RELATION_KIND.values,
            services: ServiceKind::ALL.into_iter().map(ServiceKind::as_str).collect(),
            max_document_size: LoadConfig::default().max_document_size,
        }
    }
}

pub fn run(args: VersionArgs, format: OutputFormat) -> CliResult<i32> {
    if !args.extended {
        println!("netreg {}", env!("CARGO_PKG_VERSION"));
        return Ok(SUCCESS);
    }

    let info = VersionInfo::current();
    match format {
        OutputFormat::Json => print_json(&info),
        OutputFormat::Raw => println!("{}", info.version),
        OutputFormat::Table | OutputFormat::Pretty => {
            println!("{} {} ({}/{})", info.name, info.version, info.os, info.arch);
            println!("  network types:  {}", info.network_types.join(", "));
            println!("  relation kinds: {}", info.relation_kinds.join(", "));
            println!("  services:       {}", info.services.join(", "));
            println!(
                "  JSON Schema:    {}",
                if info.json_schema { "enabled" } else { "disabled" }
            );
            println!("  max file size:  {} bytes", info.max_document_size);
        }
    }
    Ok(SUCCESS)
}
