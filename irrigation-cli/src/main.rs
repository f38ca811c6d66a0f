//! Smart Irrigation CLI
//!
//! Command-line client for a running irrigation prediction server: submit
//! sensor readings and check service health.

use anyhow::Result;
use clap::Parser;

mod cli;
mod client;
mod commands;

use cli::{Cli, Commands};
use client::{ApiClient, ApiConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("irrigation=info".parse()?)
                .add_directive("warn".parse()?),
        )
        .with_target(false)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Create the API client from global flags
    let config = ApiConfig::new(&cli.api_url, cli.timeout_secs)?;
    let client = ApiClient::new(config)?;

    // Execute command
    match cli.command {
        Commands::Predict(args) => commands::predict::execute(&client, args).await,
        Commands::Health => commands::health::execute(&client).await,
    }
}
