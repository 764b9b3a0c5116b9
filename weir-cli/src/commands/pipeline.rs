//! Pipeline command handlers
//!
//! Handles the pipeline-related CLI commands: running a pipeline definition
//! through the save workflow and inspecting its deployment options.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use tracing::debug;

use weir_client::BackendClient;
use weir_core::domain::pipeline::Pipeline;
use weir_editor::deployment::DeploymentOptions;
use weir_editor::store::HttpPipelineStore;
use weir_editor::surface::{NoopAssembly, NoopGuidedTour};
use weir_editor::workflow::{SaveDialog, SaveMode, SaveOutcome, SaveRequest};

use crate::config::Config;
use crate::surfaces::{TerminalNavigation, TerminalNotifications};

/// Pipeline subcommands
#[derive(Subcommand)]
pub enum PipelineCommands {
    /// Save a pipeline definition through the editor workflow
    Save {
        /// Path to the pipeline JSON file
        #[arg(short, long)]
        file: String,

        /// Update an existing pipeline instead of creating a new one
        #[arg(long)]
        update: bool,

        /// Ask the backend to start the pipeline right after storing it
        #[arg(long)]
        start: bool,

        /// Skip switching to the pipeline overview after saving
        #[arg(long)]
        stay: bool,
    },
    /// Show per-element deployment options for a pipeline definition
    Options {
        /// Path to the pipeline JSON file
        #[arg(short, long)]
        file: String,
    },
}

/// Handle pipeline commands
///
/// Routes pipeline subcommands to their respective handlers.
///
/// # Arguments
/// * `command` - The pipeline command to execute
/// * `config` - The CLI configuration
pub async fn handle_pipeline_command(command: PipelineCommands, config: &Config) -> Result<()> {
    match command {
        PipelineCommands::Save {
            file,
            update,
            start,
            stay,
        } => save_pipeline(config, &file, update, start, stay).await,
        PipelineCommands::Options { file } => show_options(config, &file).await,
    }
}

/// Load a pipeline definition from a JSON file
fn load_pipeline(path: &str) -> Result<Pipeline> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read pipeline file: {}", path))?;

    let pipeline: Pipeline = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse pipeline file: {}", path))?;

    debug!(
        "loaded pipeline '{}' with {} element(s) and {} action(s)",
        pipeline.name,
        pipeline.sepas.len(),
        pipeline.actions.len()
    );

    Ok(pipeline)
}

/// Run a pipeline definition through the save workflow
async fn save_pipeline(
    config: &Config,
    file: &str,
    update: bool,
    start: bool,
    stay: bool,
) -> Result<()> {
    let pipeline = load_pipeline(file)?;
    let mode = if update {
        SaveMode::Update
    } else {
        SaveMode::Create
    };

    let dialog = SaveDialog::new(
        pipeline,
        mode,
        Arc::new(HttpPipelineStore::new(&config.backend_url)),
        Arc::new(TerminalNotifications),
        Arc::new(TerminalNavigation),
        Arc::new(NoopAssembly),
        Arc::new(NoopGuidedTour),
    );

    dialog.open().await;
    dialog.content_ready();

    let outcome = dialog
        .save(SaveRequest {
            switch_tab: !stay,
            start_after_save: start,
        })
        .await?;

    match outcome {
        SaveOutcome::Succeeded {
            started_pipeline_id,
        } => {
            println!("{}", "✓ Pipeline saved successfully!".green().bold());
            if let Some(id) = started_pipeline_id {
                println!("  Started: {}", id.cyan());
            }
            Ok(())
        }
        SaveOutcome::Failed { .. } => anyhow::bail!("Pipeline was not saved"),
        SaveOutcome::TransportError => {
            anyhow::bail!("Could not reach the backend at {}", config.backend_url)
        }
    }
}

/// Show the deployment options each element of a definition would get
async fn show_options(config: &Config, file: &str) -> Result<()> {
    let pipeline = load_pipeline(file)?;

    let client = BackendClient::new(&config.backend_url);
    let nodes = client.list_edge_nodes().await?;

    let mut options = DeploymentOptions::new();
    options.add_elements(&pipeline.sepas, &nodes);
    options.add_elements(&pipeline.actions, &nodes);

    if options.is_empty() {
        println!("{}", "The pipeline has no elements.".yellow());
        return Ok(());
    }

    println!(
        "{}",
        format!("Deployment options for '{}':", pipeline.name).bold()
    );
    println!();

    for (app_id, candidates) in options.iter() {
        println!("  {} {}", "▸".cyan(), app_id.bold());
        for node in candidates {
            println!(
                "    - {} ({})",
                node.node_metadata.node_model,
                node.node_metadata.node_address.dimmed()
            );
        }
        println!();
    }

    Ok(())
}
