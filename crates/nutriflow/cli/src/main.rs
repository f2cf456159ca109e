//! NutriFlow CLI - terminal front-end for diet and fitness tracking
//!
//! - Search the food catalog
//! - Log a session of meals, filters and activity against a fresh store
//! - Show the effective configuration

use clap::{Parser, Subcommand};
use nutriflow_client::NutriflowClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

use commands::{log, search};
use config::CliConfig;
use error::CliResult;

/// NutriFlow CLI application
#[derive(Parser)]
#[command(name = "nutriflow")]
#[command(about = "NutriFlow - food search and session tracking", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "NUTRIFLOW_CONFIG")]
    config: Option<String>,

    /// Backend endpoint (overrides the config file)
    #[arg(short, long, env = "NUTRIFLOW_ENDPOINT")]
    endpoint: Option<String>,

    /// Output format (table, json, yaml)
    #[arg(short, long, default_value = "table")]
    output: output::OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Search foods by name
    Search {
        /// Search text
        query: String,
    },

    /// Log search results into a fresh session and print it
    Log(log::LogArgs),

    /// Show configuration
    Config,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run() -> CliResult<()> {
    let cli = Cli::parse();

    // Logs go to stderr so structured output on stdout stays parseable
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let mut config = CliConfig::load(cli.config.as_deref())?;
    if let Some(endpoint) = cli.endpoint {
        config.client.base_url = endpoint;
    }

    match cli.command {
        Commands::Search { query } => {
            let client = NutriflowClient::new(&config.client)?;
            search::execute(&query, &client, cli.output).await
        }
        Commands::Log(args) => {
            let client = NutriflowClient::new(&config.client)?;
            log::execute(args, &client, config.store, cli.output).await
        }
        Commands::Config => match cli.output {
            output::OutputFormat::Table => {
                print!("{}", config.to_toml()?);
                Ok(())
            }
            format => output::print_single(&config, format),
        },
    }
}
