//! Global command-line flags

use clap::Parser;
use cyberark_core::default_config_path;

/// CyberArk API Command Harness
///
/// Everything from the first positional argument on is kept verbatim for
/// the workflow, which parses its own flags.
#[derive(Parser, Debug)]
#[command(name = "cyberark")]
#[command(version, about = "CyberArk API Command Harness", long_about = None)]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Path to configuration file (default: ~/.cyberark_api)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<String>,

    /// Show this help message
    #[arg(short, long)]
    pub help: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Workflow name followed by its own arguments
    #[arg(value_name = "WORKFLOW", trailing_var_arg = true)]
    pub args: Vec<String>,
}

impl Cli {
    /// Workflow name and the arguments that follow it.
    pub fn workflow(&self) -> Option<(&str, &[String])> {
        self.args
            .split_first()
            .map(|(name, rest)| (name.as_str(), rest))
    }

    /// Config path from `--config`, falling back to `CYBERARK_CONFIG` and then
    /// `~/.cyberark_api`.
    pub fn config_path(&self) -> String {
        self.config.clone().unwrap_or_else(default_config_path)
    }
}
