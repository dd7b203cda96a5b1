//! Configuration module
//!
//! - [`api_config`] - The JSON config record, its validation, and the loader
//! - [`paths`] - Default path resolution and `~` expansion

mod api_config;
mod paths;

pub use api_config::{load_config, Config, DEFAULT_TIMEOUT_SECS, REQUIRED_MODE};
pub use paths::{
    default_config_path, expand_home, expand_home_with, CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH,
};
