use netreg_schema::{JsonSchemaCheck, NetworkType, SchemaCheckConfig};
use serde::Serialize;
use tracing::info;

use crate::cmd::ValidateArgs;
use crate::exit::{schema_error, CliError, CliResult, DATA_INVALID, SUCCESS};
use crate::output::{print_json, OutputFormat};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ValidateOutput {
    valid: bool,
    title: String,
    version: String,
    updated_at: String,
    networks: usize,
    mainnets: usize,
    testnets: usize,
    devnets: usize,
    json_schema_checked: bool,
}

pub fn run(args: ValidateArgs, format: OutputFormat) -> CliResult<i32> {
    let text = args.registry.read()?;
    let registry = netreg_schema::parse_registry(&text)
        .map_err(|err| schema_error("validation failed", err))?;

    if let Some(schema_path) = &args.schema {
        let config = SchemaCheckConfig {
            strict_mode: args.strict,
            ..SchemaCheckConfig::default()
        };
        let check = JsonSchemaCheck::from_path(schema_path, config)
            .map_err(|err| schema_error("schema load failed", err))?;
        check
            .check_json(&text)
            .map_err(|err| CliError::new(DATA_INVALID, format!("schema check failed: {err}")))?;
        info!(schema = %schema_path.display(), "registry matches JSON Schema");
    }

    let count = |kind: NetworkType| {
        registry
            .networks
            .iter()
            .filter(|n| n.network_type == kind)
            .count()
    };

    let out = ValidateOutput {
        valid: true,
        title: registry.title.clone(),
        version: registry.version.clone(),
        updated_at: registry.updated_at.to_rfc3339(),
        networks: registry.networks.len(),
        mainnets: count(NetworkType::Mainnet),
        testnets: count(NetworkType::Testnet),
        devnets: count(NetworkType::Devnet),
        json_schema_checked: args.schema.is_some(),
    };

    print_validate(&out, format);
    Ok(SUCCESS)
}

fn print_validate(out: &ValidateOutput, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(out),
        OutputFormat::Table | OutputFormat::Pretty => {
            println!("Registry is valid:");
            println!("  Title:       {}", out.title);
            println!("  Version:     {}", out.version);
            println!("  Updated at:  {}", out.updated_at);
            println!(
                "  Networks:    {} ({} mainnet, {} testnet, {} devnet)",
                out.networks, out.mainnets, out.testnets, out.devnets
            );
            if out.json_schema_checked {
                println!("  JSON Schema: passed");
            }
        }
        OutputFormat::Raw => println!("valid"),
    }
}
