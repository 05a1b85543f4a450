//! Subcommand implementations and the helpers they share.

pub mod check;
pub mod completion;
pub mod config;
pub mod login;
pub mod signup;
pub mod users;

use std::io::{self, Write};

use anyhow::Result;
use shared::{JsonFileStore, UserDirectory, config::Config};

/// Opens the user directory described by `config`.
pub fn open_directory(config: &Config) -> UserDirectory<JsonFileStore> {
    UserDirectory::with_key(
        JsonFileStore::new(config.store_path.clone()),
        config.users_key.clone(),
    )
}

/// Reads one line from stdin after printing `label`.
pub fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim_end_matches(['\r', '\n']).to_string())
}

/// Prints the account settings view for a signed-in or new user.
pub fn print_summary(summary: &shared::models::AccountSummary) {
    use colored::Colorize;

    println!("{}", summary.full_name.bold());
    println!("  email:   {}", summary.email);
    if let Some(company) = &summary.company_name {
        println!("  company: {company}");
    }
    println!("  agency:  {}", if summary.is_agency { "yes" } else { "no" });
}
