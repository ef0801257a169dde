//! Config file location and loading.
//!
//! The file lives at `$XDG_CONFIG_HOME/irkeyd/irkeyd.conf` (falling
//! back to `~/.config/irkeyd/irkeyd.conf`). Parsing is delegated to
//! `irkey_core::config`; this module only resolves the path and reads
//! the text.
//!
//! Unlike services that synthesize a default config on first run, a
//! missing file here is an error: without a device path and key table
//! the daemon has nothing to do.

use std::path::{Path, PathBuf};

use irkey_core::config::{parse_config, Config, ConfigError};
use thiserror::Error;

const CONFIG_FILE: &str = "irkeyd.conf";

/// Errors that can occur while loading the config file.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// Neither `XDG_CONFIG_HOME` nor `HOME` is set.
    #[error("could not determine the user config directory")]
    NoConfigDir,

    /// The file could not be read.
    #[error("unable to read config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but its content is invalid.
    #[error("invalid config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },
}

/// Resolves the full path to the config file.
///
/// # Errors
///
/// Returns [`ConfigLoadError::NoConfigDir`] when the base directory
/// cannot be determined from the environment.
pub fn config_file_path() -> Result<PathBuf, ConfigLoadError> {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok_or(ConfigLoadError::NoConfigDir)?;
    Ok(base.join("irkeyd").join(CONFIG_FILE))
}

/// Loads and parses the config from the default location.
///
/// # Errors
///
/// Any failure — unresolvable directory, unreadable file, syntax error —
/// is returned and treated as fatal by the caller.
pub fn load_config() -> Result<Config, ConfigLoadError> {
    load_config_from(&config_file_path()?)
}

/// Loads and parses the config from an explicit path.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigLoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&content).map_err(|source| ConfigLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
