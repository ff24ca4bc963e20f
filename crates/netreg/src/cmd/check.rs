use netreg_schema::integrity::{self, Finding, Severity};
use serde::Serialize;

use crate::cmd::CheckArgs;
use crate::exit::{CliResult, CHECK_FAILED, SUCCESS};
use crate::output::{print_json, OutputFormat};

#[derive(Debug, Serialize)]
struct CheckOutput {
    networks: usize,
    errors: usize,
    warnings: usize,
    findings: Vec<Finding>,
    overall: &'static str,
}

pub fn run(args: CheckArgs, format: OutputFormat) -> CliResult<i32> {
    let registry = args.registry.load()?;
    let findings = integrity::check(&registry);

    let errors = count(&findings, Severity::Error);
    let warnings = count(&findings, Severity::Warning);
    let failed = errors > 0 || (args.deny_warnings && warnings > 0);

    let output = CheckOutput {
        networks: registry.networks.len(),
        errors,
        warnings,
        findings,
        overall: if failed { "fail" } else { "pass" },
    };
    print_check(&output, format);

    if failed {
        Ok(CHECK_FAILED)
    } else {
        Ok(SUCCESS)
    }
}

fn count(findings: &[Finding], severity: Severity) -> usize {
    findings.iter().filter(|f| f.severity == severity).count()
}

fn print_check(output: &CheckOutput, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(output),
        OutputFormat::Table | OutputFormat::Pretty => {
            println!("netreg check ({} networks)\n", output.networks);
            for f in &output.findings {
                println!(
                    "  [{:>4}] {:<24} {}",
                    severity_text(f.severity),
                    f.network,
                    f.message
                );
            }
            if output.findings.is_empty() {
                println!("  no findings");
            }
            println!(
                "\n  Result: {} ({} error(s), {} warning(s))",
                output.overall, output.errors, output.warnings
            );
        }
        OutputFormat::Raw => println!("{}", output.overall),
    }
}

fn severity_text(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "FAIL",
        Severity::Warning => "WARN",
    }
}
