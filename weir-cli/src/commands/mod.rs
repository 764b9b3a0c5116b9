//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod categories;
mod datatypes;
mod nodes;
mod pipeline;

pub use categories::CategoryCommands;
pub use datatypes::DatatypeCommands;
pub use nodes::NodeCommands;
pub use pipeline::PipelineCommands;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Pipeline saving and deployment options
    Pipeline {
        #[command(subcommand)]
        command: PipelineCommands,
    },
    /// Edge node inventory
    Nodes {
        #[command(subcommand)]
        command: NodeCommands,
    },
    /// Pipeline categories
    Categories {
        #[command(subcommand)]
        command: CategoryCommands,
    },
    /// Primitive datatype catalog
    Datatypes {
        #[command(subcommand)]
        command: DatatypeCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
///
/// # Returns
/// Result indicating success or failure
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Pipeline { command } => pipeline::handle_pipeline_command(command, config).await,
        Commands::Nodes { command } => nodes::handle_node_command(command, config).await,
        Commands::Categories { command } => {
            categories::handle_category_command(command, config).await
        }
        Commands::Datatypes { command } => datatypes::handle_datatype_command(command).await,
    }
}
