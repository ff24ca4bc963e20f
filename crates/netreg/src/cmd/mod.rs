use clap::{Args, Subcommand};
use std::path::PathBuf;

use netreg_schema::{LoadConfig, NetworksRegistry};

use crate::exit::{schema_error, CliResult};
use crate::output::OutputFormat;

pub mod check;
pub mod fmt;
pub mod list;
pub mod show;
pub mod validate;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a registry file and print a summary.
    Validate(ValidateArgs),
    /// Rewrite a registry file in canonical form.
    Fmt(FmtArgs),
    /// List networks, filtered and ordered by service coverage.
    List(ListArgs),
    /// Show every detail of one network.
    Show(ShowArgs),
    /// Report duplicate ids, dangling relations and other data problems.
    Check(CheckArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Validate(args) => validate::run(args, format),
        Command::Fmt(args) => fmt::run(args),
        Command::List(args) => list::run(args, format),
        Command::Show(args) => show::run(args, format),
        Command::Check(args) => check::run(args, format),
        Command::Version(args) => version::run(args, format),
    }
}

#[derive(Args, Debug)]
pub struct RegistryArgs {
    /// Registry JSON file.
    #[arg(env = "NETREG_REGISTRY", value_name = "FILE")]
    pub registry: PathBuf,
    /// Maximum registry file size in bytes.
    #[arg(long, value_name = "BYTES", default_value_t = LoadConfig::default().max_document_size)]
    pub max_size: usize,
    /// Refuse to read the registry through a symlink.
    #[arg(long)]
    pub no_symlinks: bool,
}

impl RegistryArgs {
    pub fn load_config(&self) -> LoadConfig {
        LoadConfig {
            max_document_size: self.max_size,
            allow_symlinks: !self.no_symlinks,
        }
    }

    pub fn read(&self) -> CliResult<String> {
        netreg_schema::read_document(&self.registry, &self.load_config())
            .map_err(|err| schema_error("load failed", err))
    }

    pub fn load(&self) -> CliResult<NetworksRegistry> {
        netreg_schema::load_registry_with_config(&self.registry, &self.load_config())
            .map_err(|err| schema_error("load failed", err))
    }
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub registry: RegistryArgs,
    /// Also validate against this JSON Schema file.
    #[arg(long, value_name = "FILE")]
    pub schema: Option<PathBuf>,
    /// Treat objects in the JSON Schema as closed.
    #[arg(long, requires = "schema")]
    pub strict: bool,
}

#[derive(Args, Debug)]
pub struct FmtArgs {
    #[command(flatten)]
    pub registry: RegistryArgs,
    /// Write to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", conflicts_with = "check")]
    pub output: Option<PathBuf>,
    /// Exit non-zero if the file is not already canonical.
    #[arg(long)]
    pub check: bool,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub registry: RegistryArgs,
    /// Case-insensitive text matched against full name, short name and id.
    #[arg(long, short = 's', default_value = "")]
    pub search: String,
    /// Include testnets.
    #[arg(long)]
    pub testnets: bool,
    /// Only networks with subgraph deployment endpoints.
    #[arg(long)]
    pub subgraphs: bool,
    /// Only networks with SPS deployment endpoints.
    #[arg(long)]
    pub sps: bool,
    /// Only networks with firehose endpoints.
    #[arg(long)]
    pub firehose: bool,
    /// Only networks with substreams endpoints.
    #[arg(long)]
    pub substreams: bool,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub registry: RegistryArgs,
    /// Network id or alias.
    pub network: String,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub registry: RegistryArgs,
    /// Fail on warnings as well as errors.
    #[arg(long)]
    pub deny_warnings: bool,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Also show the network types, relations and services this build accepts.
    #[arg(long)]
    pub extended: bool,
}
