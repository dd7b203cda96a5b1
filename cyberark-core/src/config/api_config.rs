//! API configuration loaded once at startup
//!
//! The file is JSON and must be readable by its owner only. Once loaded,
//! the configuration is read-only for the rest of the process.

use serde::{Deserialize, Deserializer};
use std::fmt;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

use super::paths::expand_home;
use crate::error::{ConfigError, Result};

/// Request timeout used when the file omits `timeout` or sets it to zero or less.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Permission bits the config file must carry exactly.
pub const REQUIRED_MODE: u32 = 0o600;

/// Connection settings for the CyberArk REST API.
///
/// Load-only. The secret leaves the process solely through the
/// `Authorization` header:
///
/// ```compile_fail
/// fn writable<T: serde::Serialize>() {}
/// writable::<cyberark_core::Config>();
/// ```
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Value sent verbatim in the `Authorization` header
    #[serde(default, deserialize_with = "null_as_empty")]
    pub api_secret: String,

    /// Root address every endpoint is appended to
    #[serde(default, deserialize_with = "null_as_empty")]
    pub base_url: String,

    /// Optional API username
    #[serde(default)]
    pub username: Option<String>,

    /// Request timeout in seconds
    #[serde(default)]
    pub timeout: Option<i64>,
}

/// Read `null` as an empty string so validation reports the missing field.
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Config {
    /// Effective request timeout.
    pub fn timeout(&self) -> Duration {
        match self.timeout {
            Some(secs) if secs > 0 => Duration::from_secs(secs as u64),
            _ => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Check that both required fields are present.
    pub fn validate(&self) -> Result<()> {
        if self.api_secret.is_empty() {
            return Err(ConfigError::MissingApiSecret);
        }
        if self.base_url.is_empty() {
            return Err(ConfigError::MissingBaseUrl);
        }
        Ok(())
    }

    /// Parse and validate a JSON document.
    pub fn from_json(data: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(data)?;
        config.validate()?;
        Ok(config)
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_secret", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Load the configuration file at `path`.
///
/// A leading `~` is expanded to the home directory before any file access.
///
/// On Unix the file's permission bits must be exactly `0600`. Platforms
/// without Unix permission bits skip that check and log a warning saying so.
///
/// # Errors
///
/// Each failure maps to its own [`ConfigError`] variant: missing file,
/// wrong permissions, unreadable file, invalid JSON, or a missing
/// `api_secret` / `base_url`.
pub fn load_config(path: &str) -> Result<Config> {
    let path = expand_home(path)?;
    debug!(path = %path.display(), "loading configuration");

    check_permissions(&path)?;

    let data = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;

    let config = Config::from_json(&data)?;
    debug!(
        base_url = %config.base_url,
        username = config.username.as_deref().unwrap_or(""),
        timeout_secs = config.timeout().as_secs(),
        "configuration loaded"
    );
    Ok(config)
}

fn stat(path: &Path) -> Result<std::fs::Metadata> {
    std::fs::metadata(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Stat {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

#[cfg(unix)]
fn check_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mode = stat(path)?.permissions().mode() & 0o777;
    if mode != REQUIRED_MODE {
        return Err(ConfigError::Permissions {
            path: path.to_path_buf(),
            mode,
        });
    }
    Ok(())
}

#[cfg(not(unix))]
fn check_permissions(path: &Path) -> Result<()> {
    stat(path)?;
    tracing::warn!(
        path = %path.display(),
        "skipping 0600 permission check: not supported on this platform"
    );
    Ok(())
}
