//! Edge node command handlers

use anyhow::Result;
use clap::Subcommand;
use colored::*;

use weir_client::BackendClient;

use crate::config::Config;

/// Edge node subcommands
#[derive(Subcommand)]
pub enum NodeCommands {
    /// List the edge nodes registered with the backend
    List,
}

/// Handle node commands
///
/// # Arguments
/// * `command` - The node command to execute
/// * `config` - The CLI configuration
pub async fn handle_node_command(command: NodeCommands, config: &Config) -> Result<()> {
    let client = BackendClient::new(&config.backend_url);

    match command {
        NodeCommands::List => list_nodes(&client).await,
    }
}

/// List all registered edge nodes
async fn list_nodes(client: &BackendClient) -> Result<()> {
    let nodes = client.list_edge_nodes().await?;

    if nodes.is_empty() {
        println!("{}", "No edge nodes registered.".yellow());
        return Ok(());
    }

    println!("{}", format!("Found {} edge node(s):", nodes.len()).bold());
    println!();

    for node in nodes {
        println!("  {} {}", "▸".cyan(), node.node_metadata.node_model.bold());
        println!("    Controller: {}", node.node_controller_id.dimmed());
        println!(
            "    Address:    {}:{}",
            node.node_metadata.node_address, node.node_controller_port
        );
        if !node.supported_pipeline_element_app_ids.is_empty() {
            println!(
                "    Supports:   {}",
                node.supported_pipeline_element_app_ids.join(", ").dimmed()
            );
        }
        println!();
    }

    Ok(())
}
