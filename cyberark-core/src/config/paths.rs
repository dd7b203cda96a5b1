//! Default path resolution and home-directory expansion

use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Config file used when neither `--config` nor `CYBERARK_CONFIG` is set.
pub const DEFAULT_CONFIG_PATH: &str = "~/.cyberark_api";

/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
pub const CONFIG_PATH_ENV: &str = "CYBERARK_CONFIG";

/// Returns the config path to use when no `--config` flag was given.
///
/// `CYBERARK_CONFIG` wins over the built-in default. The returned string
/// is not yet expanded; [`expand_home`] runs at load time.
pub fn default_config_path() -> String {
    std::env::var(CONFIG_PATH_ENV)
        .ok()
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string())
}

/// Expand a leading `~` to the invoking user's home directory.
///
/// Paths without a leading `~` are returned unchanged.
pub fn expand_home(path: &str) -> Result<PathBuf> {
    if !path.starts_with('~') {
        return Ok(PathBuf::from(path));
    }
    let home = dirs::home_dir().ok_or(ConfigError::HomeDir)?;
    Ok(expand_home_with(path, &home))
}

/// Expand a leading `~` against an explicit home directory.
pub fn expand_home_with(path: &str, home: &Path) -> PathBuf {
    match path.strip_prefix('~') {
        Some(rest) => home.join(rest.trim_start_matches(['/', '\\'])),
        None => PathBuf::from(path),
    }
}
