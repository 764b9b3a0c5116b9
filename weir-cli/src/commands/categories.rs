//! Pipeline category command handlers

use anyhow::Result;
use clap::Subcommand;
use colored::*;

use weir_client::BackendClient;

use crate::config::Config;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List the categories pipelines can be filed under
    List,
}

/// Handle category commands
///
/// # Arguments
/// * `command` - The category command to execute
/// * `config` - The CLI configuration
pub async fn handle_category_command(command: CategoryCommands, config: &Config) -> Result<()> {
    let client = BackendClient::new(&config.backend_url);

    match command {
        CategoryCommands::List => list_categories(&client).await,
    }
}

/// List all pipeline categories
async fn list_categories(client: &BackendClient) -> Result<()> {
    let categories = client.list_pipeline_categories().await?;

    if categories.is_empty() {
        println!("{}", "No pipeline categories defined.".yellow());
        return Ok(());
    }

    println!(
        "{}",
        format!("Found {} category(ies):", categories.len()).bold()
    );
    println!();

    for category in categories {
        println!("  {} {}", "▸".cyan(), category.category_name.bold());
        if let Some(description) = category.category_description {
            println!("    {}", description.dimmed());
        }
    }

    Ok(())
}
