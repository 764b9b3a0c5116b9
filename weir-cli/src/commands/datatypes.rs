//! Primitive datatype command handlers

use anyhow::Result;
use clap::Subcommand;
use colored::*;

use weir_core::domain::datatype::{DatatypeMode, primitive_datatypes};

/// Datatype subcommands
#[derive(Subcommand)]
pub enum DatatypeCommands {
    /// List the primitive datatypes offered in property forms
    List {
        /// Show the catalog for value restrictions instead of plain properties
        #[arg(long)]
        restriction: bool,
    },
}

/// Handle datatype commands
///
/// # Arguments
/// * `command` - The datatype command to execute
pub async fn handle_datatype_command(command: DatatypeCommands) -> Result<()> {
    match command {
        DatatypeCommands::List { restriction } => list_datatypes(restriction),
    }
}

/// Print the datatype catalog for the selected mode
fn list_datatypes(restriction: bool) -> Result<()> {
    let mode = if restriction {
        DatatypeMode::Restriction
    } else {
        DatatypeMode::Property
    };

    for datatype in primitive_datatypes(mode) {
        println!("  {} {}", "▸".cyan(), datatype.title.bold());
        println!("    {}", datatype.description);
        println!("    {}", datatype.id.dimmed());
        println!();
    }

    Ok(())
}
