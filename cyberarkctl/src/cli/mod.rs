//! Command-line entry point
//!
//! This module organizes the CLI into logical submodules:
//! - [`commands`] - Global flag definitions
//! - [`dispatch`] - Flag parsing, config loading, and workflow routing

mod commands;
mod dispatch;

pub use commands::*;
pub use dispatch::*;
