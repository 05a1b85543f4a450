//! `popx users`: list stored accounts without their passwords.

use anyhow::Result;
use shared::config::Config;

use super::open_directory;

/// Prints one line per stored account.
pub fn run(config: &Config) -> Result<()> {
    let records = open_directory(config).all()?;
    if records.is_empty() {
        println!("No accounts stored in {}", config.store_path.display());
        return Ok(());
    }

    for record in records {
        let agency = if record.is_agency { " (agency)" } else { "" };
        println!("{} <{}>{agency}", record.full_name, record.email);
    }
    Ok(())
}
