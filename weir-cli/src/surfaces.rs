//! Terminal implementations of the editor surfaces
//!
//! The save dialog reports to its host through surface traits; here they are
//! rendered as colored terminal lines.

use colored::*;
use weir_editor::surface::{NavigationSurface, NavigationTarget, NotificationSurface, Severity};

/// Renders editor notifications as terminal lines
pub struct TerminalNotifications;

impl NotificationSurface for TerminalNotifications {
    fn notify(&self, severity: Severity, title: &str, description: Option<&str>) {
        let line = match severity {
            Severity::Success => format!("✓ {}", title).green().bold(),
            Severity::Error => format!("✗ {}", title).red().bold(),
        };
        println!("{}", line);

        if let Some(description) = description {
            println!("  {}", description.dimmed());
        }
    }
}

/// Prints route changes instead of navigating
pub struct TerminalNavigation;

impl NavigationSurface for TerminalNavigation {
    fn go(&self, target: NavigationTarget) {
        match target {
            NavigationTarget::PipelineList { pipeline: Some(id) } => {
                println!("{}", format!("→ pipeline overview (started: {})", id).dimmed())
            }
            NavigationTarget::PipelineList { pipeline: None } => {
                println!("{}", "→ pipeline overview".dimmed())
            }
        }
    }
}
