//! Weir CLI
//!
//! Command-line host for the Weir pipeline editor workflow. Saves pipeline
//! definitions against a platform backend and inspects the reference data
//! the editor works with (edge nodes, categories, datatypes).

mod commands;
mod config;
mod surfaces;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "weir")]
#[command(about = "Weir pipeline editor CLI", long_about = None)]
struct Cli {
    /// Backend URL
    #[arg(
        long,
        env = "WEIR_BACKEND_URL",
        default_value = "http://localhost:8030"
    )]
    backend_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weir_editor=warn,weir_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = Config {
        backend_url: cli.backend_url,
    };

    handle_command(cli.command, &config).await
}
