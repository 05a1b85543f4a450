#![cfg_attr(not(test), forbid(unsafe_code))]
#![deny(warnings, clippy::pedantic)]

//! Main entry point for the `popx` command-line client.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use shared::config::Config;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

/// Command-line arguments for `popx`.
#[derive(Parser, Debug)]
#[command(name = "popx")]
#[command(about = "Check form fields and manage PopX accounts", long_about = None)]
struct Cli {
    /// Path to the configuration file (YAML or JSON)
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Directory holding stored records; overrides the configuration
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Subcommands for `popx`
#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a single value against an input kind
    Check(commands::check::CheckArgs),

    /// Create a new account
    Signup(commands::signup::SignupArgs),

    /// Log in and show the account summary
    Login(commands::login::LoginArgs),

    /// List stored accounts
    Users,

    /// Print or write a configuration file
    Config {
        /// Format of the configuration file (yaml or json). Defaults to yaml.
        #[arg(long, short)]
        format: Option<String>,

        /// Write to this path instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Generate shell completion scripts for the CLI
    Completion {
        /// The shell type (bash, zsh, fish, powershell, elvish)
        #[arg(long, short)]
        shell: clap_complete::Shell,
    },
}

fn init_tracing(level: &str) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();
}

fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();

    if let Commands::Completion { shell } = cli.command {
        commands::completion::generate_completion(shell);
        return Ok(());
    }

    let mut config = Config::load_config(cli.config)?;
    if let Some(store) = cli.store {
        config.store_path = store;
    }
    init_tracing(&config.log_level);
    debug!(store = %config.store_path.display(), key = %config.users_key, "configuration loaded");

    match cli.command {
        Commands::Check(args) => commands::check::run(&args),
        Commands::Signup(args) => commands::signup::run(&config, args),
        Commands::Login(args) => commands::login::run(&config, args),
        Commands::Users => commands::users::run(&config),
        Commands::Config { format, output } => {
            let format = format.as_deref().unwrap_or("yaml");
            commands::config::generate_config(&config, format, output.as_deref())
        }
        Commands::Completion { .. } => Ok(()),
    }
}
