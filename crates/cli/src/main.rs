//! config-paths - Show where an application's config files live.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Resolve application, roaming and local config paths.
//! - Print them as a table or JSON.
//!
//! Does NOT handle:
//! - Reading or creating any of the config files it reports.
//!
//! Invariants:
//! - Logs go to stderr; stdout carries only the rendered paths.

mod args;
mod error;
mod formatters;

use std::io::Write;

use anyhow::{Context, Result};
use args::Cli;
use clap::Parser;
use config_paths::{ConfigPathResolver, ProcessIdentityProvider};
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let code = match run(&cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code()
        }
    };
    std::process::exit(code.as_i32());
}

fn run(cli: &Cli) -> Result<()> {
    let resolver = ConfigPathResolver::new(ProcessIdentityProvider::new(cli.entry_metadata()));
    let include_user_config = !cli.no_user;

    let paths = resolver
        .paths(cli.exe.as_deref(), include_user_config)
        .context("Failed to resolve config paths")?;

    tracing::debug!(
        application_uri = paths.application_uri(),
        includes_user_config = paths.includes_user_config(),
        "Resolved config paths"
    );

    let rendered = formatters::format_paths(&paths, cli.output)?;
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .context("Failed to write output")?;
    if !rendered.ends_with('\n') {
        writeln!(stdout).context("Failed to write output")?;
    }
    Ok(())
}
