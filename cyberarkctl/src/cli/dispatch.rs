//! Route a command line to a registered workflow

use clap::error::ErrorKind;
use clap::Parser;
use cyberark_core::load_config;
use std::ffi::OsString;
use std::io::Write;
use tracing::{debug, info};

use super::commands::Cli;
use crate::error::DispatchError;
use crate::format::{format_error, format_usage};
use crate::workflow::{Workflow, WorkflowRegistry};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Parse `argv`, load the config, and run the matching workflow.
///
/// Normal output and usage go to `out`; errors go to `err`. Returns the
/// process exit status: 0 on success, help, or version, and 1 on any error.
pub async fn run<I, T>(
    argv: I,
    registry: &WorkflowRegistry,
    out: &mut (dyn Write + Send),
    err: &mut (dyn Write + Send),
) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let code = match dispatch(argv, registry, out).await {
        Ok(()) => EXIT_SUCCESS,
        Err(DispatchError::Args(e)) if e.kind() == ErrorKind::DisplayVersion => {
            let _ = write!(out, "{}", e.render());
            EXIT_SUCCESS
        }
        Err(e) => {
            report(&e, registry, out, err);
            EXIT_FAILURE
        }
    };

    let _ = out.flush();
    let _ = err.flush();
    code
}

async fn dispatch<I, T>(
    argv: I,
    registry: &WorkflowRegistry,
    out: &mut (dyn Write + Send),
) -> Result<(), DispatchError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(argv)?;
    init_tracing(cli.verbose);

    if cli.help {
        write!(out, "{}", format_usage(registry))?;
        return Ok(());
    }

    let (name, args) = cli.workflow().ok_or(DispatchError::MissingWorkflow)?;

    let config_path = cli.config_path();
    debug!(path = %config_path, "resolved config path");
    let config = load_config(&config_path)?;

    let workflow = registry
        .lookup(name)
        .ok_or_else(|| DispatchError::UnknownWorkflow(name.to_string()))?;

    info!(workflow = name, args = args.len(), "executing workflow");
    workflow
        .execute(&config, args, out)
        .await
        .map_err(|cause| DispatchError::Workflow {
            name: name.to_string(),
            cause,
        })
}

/// Print `error` once on `err`, followed by usage on `out` for routing errors.
///
/// Write failures are ignored here: there is nowhere left to report them.
fn report(
    error: &DispatchError,
    registry: &WorkflowRegistry,
    out: &mut (dyn Write + Send),
    err: &mut (dyn Write + Send),
) {
    let _ = match error {
        DispatchError::Args(e) => write!(err, "{}", e.render()),
        _ => writeln!(err, "{}", format_error(&error.to_string())),
    };

    if error.shows_usage() {
        let _ = write!(out, "{}", format_usage(registry));
    }
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins; otherwise `--verbose` selects `debug` and the default is
/// `warn`. Repeated calls keep the first subscriber.
pub fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
