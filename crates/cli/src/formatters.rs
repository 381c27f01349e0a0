//! Output formatters for resolved config paths.
//!
//! Provides table and JSON output. Absent paths render as `-` in tables and
//! `null` in JSON.

use std::path::Path;

use anyhow::Result;
use config_paths::ResolvedPaths;
use serde::Serialize;

use crate::args::OutputFormat;

/// JSON view: the resolved paths plus the derived has-config flags.
#[derive(Serialize)]
struct PathsReport<'a> {
    #[serde(flatten)]
    paths: &'a ResolvedPaths,
    has_roaming_config: bool,
    has_local_config: bool,
}

pub fn format_paths(paths: &ResolvedPaths, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(format_table(paths)),
        OutputFormat::Json => format_json(paths),
    }
}

fn format_json(paths: &ResolvedPaths) -> Result<String> {
    let report = PathsReport {
        paths,
        has_roaming_config: paths.has_roaming_config(),
        has_local_config: paths.has_local_config(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

fn text_or_dash(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

fn path_or_dash(value: Option<&Path>) -> String {
    value.map_or_else(|| "-".to_string(), |p| p.display().to_string())
}

fn format_table(paths: &ResolvedPaths) -> String {
    let rows = [
        ("Application", text_or_dash(paths.application_uri())),
        (
            "Application config",
            text_or_dash(paths.application_config_uri().unwrap_or_default()),
        ),
        ("Company", text_or_dash(paths.company_name())),
        ("Product", text_or_dash(paths.product_name())),
        ("Version", text_or_dash(paths.product_version())),
        (
            "Roaming directory",
            path_or_dash(paths.roaming_config_directory()),
        ),
        ("Roaming config", path_or_dash(paths.roaming_config_file())),
        ("Local directory", path_or_dash(paths.local_config_directory())),
        ("Local config", path_or_dash(paths.local_config_file())),
    ];

    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let mut output = String::new();
    for (label, value) in rows {
        output.push_str(&format!("{label:<width$}  {value}\n"));
    }
    output
}
