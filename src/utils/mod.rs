use std::path::Path;

use alloy_primitives::{U256, utils::format_ether};
use anyhow::{Context, Result};
use tracing::info;

use crate::models::common::Config;

const ENV_PREFIX: &str = "EXPORTER";

pub fn load_config<P: AsRef<Path>>(file_name: P) -> Result<Config> {
    // Build the path to the config file
    let manifest_dir = env!("CARGO_MANIFEST_DIR").to_string();
    let config_path = Path::new(&manifest_dir).join(file_name);
    info!("Config path: {}", config_path.to_string_lossy());

    // YAML file first, then EXPORTER_* environment variables on top
    let settings = config::Config::builder()
        .add_source(config::File::from(config_path.as_path()))
        .add_source(config::Environment::with_prefix(ENV_PREFIX))
        .build()
        .context("failed to read config file")?;

    settings
        .try_deserialize::<Config>()
        .context("failed to parse config")
}

/// Convert an 18-decimal fixed-point token amount into a float for display.
pub fn wei_to_ether(amount: U256) -> f64 {
    // `format_ether` always yields `<digits>.<18 digits>`, which every f64 parser accepts
    format_ether(amount).parse::<f64>().unwrap_or(f64::NAN)
}

pub(crate) fn strip_html(error: &str) -> String {
    // If the error contains HTML tags, extract just the text content
    if error.contains("<!doctype html>") || error.contains("<html>") {
        // Remove all HTML tags and return the first non-empty line of text
        error
            .lines()
            .map(|line| line.trim())
            .find(|line| {
                !line.starts_with('<')
                    && !line.ends_with('>')
                    && !line.is_empty()
                    && *line != "html"
                    && *line != "body"
            })
            .unwrap_or(error)
            .to_string()
    } else {
        error.to_string()
    }
}
