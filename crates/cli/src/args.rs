//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Turn metadata flags into `EntryMetadata` for the identity provider.
//!
//! Non-responsibilities:
//! - Does not resolve paths (see `main`).
//! - Does not render output (see `formatters`).

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use config_paths::EntryMetadata;

#[derive(Parser, Debug)]
#[command(name = "config-paths")]
#[command(about = "Show where an application's config files live", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  config-paths\n  config-paths --company Contoso --product Widgets --product-version 2.0.0.0\n  config-paths --exe /opt/widgets/widgets --output json\n  APP_CONFIG_FILE=conf/app.config config-paths --no-user\n"
)]
pub struct Cli {
    /// Resolve for this executable instead of the running one.
    ///
    /// Pinned executables never get roaming/local user config paths.
    #[arg(long, env = "CONFIG_PATHS_EXE", value_name = "PATH")]
    pub exe: Option<PathBuf>,

    /// Skip roaming/local user config resolution
    #[arg(long)]
    pub no_user: bool,

    /// Company name of the application (defaults to the namespace's first segment)
    #[arg(long)]
    pub company: Option<String>,

    /// Product name of the application (defaults to this binary's package name)
    #[arg(long)]
    pub product: Option<String>,

    /// Product version of the application (defaults to this binary's version)
    #[arg(long)]
    pub product_version: Option<String>,

    /// Namespace of the application's entry point, `.` or `::` separated
    #[arg(long)]
    pub namespace: Option<String>,

    /// Treat the application as a single-file bundle
    #[arg(long)]
    pub single_file: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

impl Cli {
    /// Entry metadata for the identity provider: flags override the metadata
    /// built into this binary.
    pub fn entry_metadata(&self) -> EntryMetadata {
        let mut metadata = config_paths::entry_metadata!().single_file(self.single_file);
        if let Some(company) = &self.company {
            metadata = metadata.with_company(company.clone());
        }
        if let Some(product) = &self.product {
            metadata = metadata.with_product(product.clone());
        }
        if let Some(version) = &self.product_version {
            metadata = metadata.with_version(version.clone());
        }
        if let Some(namespace) = &self.namespace {
            metadata = metadata.with_namespace(namespace);
        }
        metadata
    }
}
