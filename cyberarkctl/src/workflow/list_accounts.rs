//! `list-accounts` workflow

use anyhow::Result;
use async_trait::async_trait;
use clap::Parser;
use cyberark_core::Config;
use std::io::Write;

use super::{parse_args, Workflow, WorkflowRegistry};

pub const NAME: &str = "list-accounts";

#[derive(Parser, Debug)]
#[command(name = "list-accounts", disable_help_flag = true)]
struct ListAccountsArgs {
    /// Show this help message
    #[arg(short, long)]
    help: bool,

    /// Filter accounts by safe name
    #[arg(long, value_name = "NAME")]
    safe: Option<String>,

    /// Maximum number of accounts to return
    #[arg(long, value_name = "N", default_value_t = 50)]
    limit: u32,
}

/// Lists accounts stored in the vault.
#[derive(Debug, Default)]
pub struct ListAccountsWorkflow;

#[async_trait]
impl Workflow for ListAccountsWorkflow {
    async fn execute(
        &self,
        config: &Config,
        args: &[String],
        out: &mut (dyn Write + Send),
    ) -> Result<()> {
        let args: ListAccountsArgs = parse_args(NAME, args)?;
        if args.help {
            print_help(out)?;
            return Ok(());
        }

        writeln!(out, "Listing CyberArk accounts...")?;
        writeln!(out, "Base URL: {}", config.base_url)?;
        if let Some(safe) = args.safe.as_deref().filter(|s| !s.is_empty()) {
            writeln!(out, "Filtering by safe: {}", safe)?;
        }
        writeln!(out, "Limit: {}", args.limit)?;

        // TODO: call the Accounts endpoint through ApiClient::get_json once
        // the response schema is pinned down.
        writeln!(out)?;
        writeln!(out, "[This would make an API call to list accounts]")?;

        Ok(())
    }

    fn help(&self) -> &str {
        "List accounts from CyberArk"
    }
}

fn print_help(out: &mut (dyn Write + Send)) -> std::io::Result<()> {
    writeln!(out, "List Accounts Workflow - Retrieve accounts from CyberArk")?;
    writeln!(out)?;
    writeln!(out, "Usage:")?;
    writeln!(out, "  cyberark list-accounts [options]")?;
    writeln!(out)?;
    writeln!(out, "Options:")?;
    writeln!(out, "  -h, --help       Show this help message")?;
    writeln!(out, "  --safe NAME      Filter accounts by safe name")?;
    writeln!(
        out,
        "  --limit N        Maximum number of accounts to return (default: 50)"
    )?;
    writeln!(out)?;
    writeln!(out, "Examples:")?;
    writeln!(out, "  cyberark list-accounts")?;
    writeln!(out, "  cyberark list-accounts --safe ProductionSafe")?;
    writeln!(out, "  cyberark list-accounts --safe DevSafe --limit 100")
}

pub fn register(registry: &mut WorkflowRegistry) {
    registry.register(NAME, ListAccountsWorkflow);
}
