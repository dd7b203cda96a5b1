//! CyberArk API Command Harness Library
//!
//! This library provides the pieces behind the `cyberark` binary: a thin
//! HTTP client for the Password Vault REST API, the workflow registry, and
//! the dispatcher that routes a command line to a workflow.
//!
//! ```no_run
//! use cyberark_core::load_config;
//! use cyberarkctl::client::ApiClient;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = load_config("~/.cyberark_api")?;
//! let client = ApiClient::new(&config)?;
//! let body = client.get("Safes").await?;
//! println!("{}", String::from_utf8_lossy(&body));
//! # Ok(())
//! # }
//! ```

/// Global flags and the dispatcher.
pub mod cli;

/// HTTP client for communicating with the CyberArk REST API.
pub mod client;

/// Client and dispatch error types.
pub mod error;

// Internal formatting functions - not part of public API
#[doc(hidden)]
pub mod format;

/// Workflow trait, registry, and built-in workflows.
pub mod workflow;

#[cfg(test)]
pub mod test_utils;
