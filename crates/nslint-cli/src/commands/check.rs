//! Check command implementation.

use anyhow::{Context, Result};
use nslint_core::{Analyzer, Config};
use std::path::Path;

use crate::OutputFormat;

/// Config file names to search for, in priority order.
const CONFIG_CANDIDATES: &[&str] = &["nslint.toml", ".nslint.toml"];

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    exclude: Vec<String>,
    fail_on_parse_error: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = load_config(path, config_path)?;

    let mut builder = Analyzer::builder()
        .root(path)
        .config(config)
        .fail_on_parse_error(fail_on_parse_error);

    for pattern in exclude {
        builder = builder.exclude(pattern);
    }

    let analyzer = builder.build().context("Failed to build analyzer")?;

    tracing::info!("Analyzing {:?}", path);

    let result = analyzer.analyze().context("Analysis failed")?;

    super::output::print(&result, format)?;

    // Findings are warnings, but a CI front end must be able to fail the build.
    if result.has_findings() {
        std::process::exit(1);
    }

    Ok(())
}

/// Loads the config: explicit path first, then candidates in the analyzed root.
fn load_config(root: &Path, explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return Config::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()));
    }

    for candidate in CONFIG_CANDIDATES {
        let path = root.join(candidate);
        if path.exists() {
            tracing::info!("Using config: {}", path.display());
            return Config::from_file(&path)
                .with_context(|| format!("Failed to load config: {}", path.display()));
        }
    }

    Ok(Config::default())
}
