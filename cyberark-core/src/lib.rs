//! CyberArk Core Library
//!
//! Configuration types and loading for the CyberArk API command harness.
//! The CLI crate builds on these to dispatch workflows.

pub mod config;
pub mod error;

// Re-export commonly used types
pub use config::{
    default_config_path, expand_home, load_config, Config, CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH,
    DEFAULT_TIMEOUT_SECS,
};
pub use error::*;
