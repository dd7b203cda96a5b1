//! Error types for configuration loading

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving, reading, or validating the config file
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The home directory could not be determined for `~` expansion
    #[error("failed to get home directory")]
    HomeDir,

    /// The config file does not exist
    #[error("config file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The config file exists but could not be stat'ed
    #[error("failed to stat config file {}: {source}", path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is readable by someone other than its owner
    #[error("config file {} must have 0600 permissions, has {mode:o}", path.display())]
    Permissions { path: PathBuf, mode: u32 },

    /// The config file could not be read
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON for the expected shape
    #[error("failed to parse config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("api_secret is required in config file")]
    MissingApiSecret,

    #[error("base_url is required in config file")]
    MissingBaseUrl,
}

/// Result type alias for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_error_names_octal_mode() {
        let err = ConfigError::Permissions {
            path: PathBuf::from("/tmp/cfg"),
            mode: 0o644,
        };
        assert_eq!(
            err.to_string(),
            "config file /tmp/cfg must have 0600 permissions, has 644"
        );
    }

    #[test]
    fn test_missing_field_messages_name_the_field() {
        assert!(ConfigError::MissingApiSecret
            .to_string()
            .contains("api_secret"));
        assert!(ConfigError::MissingBaseUrl.to_string().contains("base_url"));
    }
}
