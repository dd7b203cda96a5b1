//! Built-in `verify` workflow

use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use cyberark_core::Config;
use std::io::Write;

use super::{parse_args, Workflow, WorkflowRegistry};
use crate::format::{format_success, REDACTED};

pub const NAME: &str = "verify";

#[derive(Parser, Debug)]
#[command(name = "verify", disable_help_flag = true)]
struct VerifyArgs {
    /// Show this help message
    #[arg(short, long)]
    help: bool,
}

/// Prints a summary of the loaded configuration with the secret redacted.
///
/// No request is sent; a successful run means the config file passed
/// permission and field validation.
#[derive(Debug, Default)]
pub struct VerifyWorkflow;

#[async_trait]
impl Workflow for VerifyWorkflow {
    async fn execute(
        &self,
        config: &Config,
        args: &[String],
        out: &mut (dyn Write + Send),
    ) -> Result<()> {
        let args: VerifyArgs = parse_args(NAME, args)?;
        if args.help {
            print_help(out)?;
            return Ok(());
        }

        writeln!(out, "Verifying CyberArk API connectivity...")?;
        writeln!(out, "Base URL: {}", config.base_url)?;
        writeln!(out, "API Secret: {}", REDACTED)?;
        if let Some(username) = &config.username {
            writeln!(out, "Username: {}", username)?;
        }
        writeln!(out, "Timeout: {}s", config.timeout().as_secs())?;

        writeln!(out)?;
        writeln!(out, "{}", format_success("Configuration loaded successfully"))?;
        writeln!(out, "{}", format_success("API credentials present"))?;
        writeln!(out)?;
        writeln!(out, "Note: Actual API connectivity test not yet implemented")?;

        Ok(())
    }

    fn help(&self) -> &str {
        "Verify API connectivity"
    }
}

fn print_help(out: &mut (dyn Write + Send)) -> std::io::Result<()> {
    writeln!(out, "Verify Workflow - Test CyberArk API connectivity")?;
    writeln!(out)?;
    writeln!(out, "Usage:")?;
    writeln!(out, "  cyberark verify [options]")?;
    writeln!(out)?;
    writeln!(out, "Options:")?;
    writeln!(out, "  -h, --help    Show this help message")
}

pub fn register(registry: &mut WorkflowRegistry) {
    registry.register(NAME, VerifyWorkflow);
}
