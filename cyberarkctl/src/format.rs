//! Output formatting utilities for the CLI
//!
//! Usage text, the workflow table, and colored status lines.

use colored::*;
use cyberark_core::DEFAULT_CONFIG_PATH;
use tabled::{settings::Style, Table, Tabled};

use crate::workflow::{Workflow, WorkflowRegistry};

/// Placeholder printed wherever the API secret would appear.
pub const REDACTED: &str = "[REDACTED]";

/// Format a success line with a green check mark
pub fn format_success(message: &str) -> String {
    format!("{} {}", "✓".green(), message)
}

/// Format an error line with a red `Error:` prefix
pub fn format_error(message: &str) -> String {
    format!("{} {}", "Error:".red().bold(), message)
}

/// Table of registered workflow names and their summaries, indented two spaces
pub fn format_workflows(registry: &WorkflowRegistry) -> String {
    #[derive(Tabled)]
    struct WorkflowRow {
        #[tabled(rename = "Workflow")]
        name: String,
        #[tabled(rename = "Description")]
        description: String,
    }

    if registry.is_empty() {
        return "  (none registered)".to_string();
    }

    let rows = registry.iter().map(|(name, workflow)| WorkflowRow {
        name: name.to_string(),
        description: workflow.help().to_string(),
    });

    Table::new(rows)
        .with(Style::blank())
        .to_string()
        .lines()
        .map(|line| format!("  {}", line.trim_end()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Global usage text listing every registered workflow
pub fn format_usage(registry: &WorkflowRegistry) -> String {
    let mut output = String::new();
    output.push_str(&"CyberArk API Command Harness".bold().to_string());
    output.push_str("\n\nUsage:\n");
    output.push_str("  cyberark [--global-options] workflow_name [--workflow-options]\n");
    output.push_str("\nGlobal Options:\n");
    output.push_str(&format!(
        "  -c, --config PATH    Path to configuration file (default: {})\n",
        DEFAULT_CONFIG_PATH
    ));
    output.push_str("  -v, --verbose        Enable debug logging\n");
    output.push_str("  -V, --version        Print version\n");
    output.push_str("  -h, --help           Show this help message\n");
    output.push_str("\nWorkflows:\n");
    output.push_str(&format_workflows(registry));
    output.push('\n');
    output.push_str("\nFor workflow-specific help:\n");
    output.push_str("  cyberark workflow_name --help\n");
    output
}
