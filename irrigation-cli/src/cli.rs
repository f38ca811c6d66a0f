//! CLI argument parsing

use clap::{Parser, Subcommand};

use crate::commands::predict::PredictArgs;

/// Smart Irrigation CLI
///
/// A command-line client for the irrigation prediction service: submit
/// sensor readings and check service health.
#[derive(Parser, Debug)]
#[command(name = "irrigation")]
#[command(version)]
#[command(about = "CLI for the Smart Irrigation prediction service", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Prediction service base URL
    #[arg(
        long,
        global = true,
        env = "IRRIGATION_API_URL",
        default_value = "http://localhost:5000"
    )]
    pub api_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    pub timeout_secs: u64,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Request irrigation decisions for a sensor reading
    #[command(alias = "pred")]
    Predict(PredictArgs),

    /// Check service health and model load status
    Health,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_inline_values() {
        let cli = Cli::try_parse_from(["irrigation", "predict", "--values", "0.1,0.2,0.3"])
            .expect("valid invocation");
        assert!(matches!(cli.command, Commands::Predict(_)));
        assert_eq!(cli.api_url, "http://localhost:5000");
    }

    #[test]
    fn test_cli_accepts_global_api_url_after_subcommand() {
        let cli = Cli::try_parse_from(["irrigation", "health", "--api-url", "http://farm:8080"])
            .expect("valid invocation");
        assert_eq!(cli.api_url, "http://farm:8080");
    }
}
