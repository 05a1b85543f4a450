//! `popx config`: dump the resolved configuration as YAML or JSON.

use std::fs;
use std::path::Path;

use anyhow::{Result, bail};
use shared::config::Config;

/// Serializes `config` as YAML or JSON, to `output` or stdout.
///
/// # Errors
/// Returns an error if the format is unsupported or if writing the file fails.
pub fn generate_config(config: &Config, format: &str, output: Option<&Path>) -> Result<()> {
    let serialized = match format {
        "yaml" | "yml" => serde_yml::to_string(config)?,
        "json" => serde_json::to_string_pretty(config)?,
        _ => bail!("Unsupported format. Use 'yaml' or 'json'."),
    };

    match output {
        Some(path) => {
            fs::write(path, serialized)?;
            println!("Configuration file '{}' generated successfully.", path.display());
        }
        None => print!("{serialized}"),
    }
    Ok(())
}
