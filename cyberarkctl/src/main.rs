//! CyberArk CLI
//!
//! Loads the JSON config and runs the workflow named on the command line.

use cyberarkctl::cli::run;
use cyberarkctl::workflow::default_registry;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // The registry is complete before any dispatch happens.
    let registry = default_registry();

    let code = run(
        std::env::args_os(),
        &registry,
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    )
    .await;

    std::process::exit(code);
}
