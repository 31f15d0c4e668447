//! Centralized path definitions for pmtask
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.pmtask/
//! └── config.toml               # Client defaults (environment, app name, key)
//! ```
//!
//! The config file location can be overridden with `PMTASK_CONFIG`.

use std::path::PathBuf;

/// Environment variable overriding the config file location
pub const CONFIG_PATH_VAR: &str = "PMTASK_CONFIG";

/// Global config directory name
const GLOBAL_DIR: &str = ".pmtask";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global pmtask directory.
///
/// Returns `~/.pmtask/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `$PMTASK_CONFIG` when set, otherwise `~/.pmtask/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    match std::env::var_os(CONFIG_PATH_VAR) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => global_config_dir().join(GLOBAL_CONFIG_FILE),
    }
}
