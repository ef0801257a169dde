//! Parser for the irkeyd config file.
//!
//! The format is line-oriented text:
//!
//! ```text
//! # Living-room remote → media shortcuts
//! /dev/ttyUSB0
//!
//! 12: space          # play/pause
//! 7: XF86AudioMute
//! 5: Escape
//! ```
//!
//! - Blank lines and lines starting with `#` are skipped.
//! - Exactly one line names the serial device (starts with `/dev/`);
//!   a second device line is an error.
//! - Every other line is a mapping `<code>: <shortcut> [# comment]`.
//!   Later definitions of the same code overwrite earlier ones.
//!
//! This parser is pure text → [`Config`]; reading the file and
//! validating that the device path is a character device happen in the
//! daemon's infrastructure layer.

use thiserror::Error;
use tracing::debug;

use crate::domain::keytable::{KeyAction, KeyTable};

/// Errors produced while parsing the config text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A second device line was found after one was already set.
    #[error("device is already defined as {existing:?} (line {line})")]
    DuplicateDevicePath { existing: String, line: usize },

    /// A mapping line has no `:` separator.
    #[error("missing ':' separator (line {line})")]
    MissingSeparator { line: usize },

    /// The part before `:` is not a non-negative integer.
    #[error("invalid command code {raw:?} (line {line})")]
    InvalidCode { raw: String, line: usize },

    /// The part after `:` is empty (nothing to inject).
    #[error("empty shortcut for code {code} (line {line})")]
    EmptyShortcut { code: u32, line: usize },

    /// No device line was found anywhere in the file.
    #[error("no serial device defined in config")]
    NoDevicePath,
}

/// Parsed configuration: the serial device to read and the key table.
#[derive(Debug, Clone)]
pub struct Config {
    pub device_path: String,
    pub table: KeyTable,
}

/// Parses the config text into a [`Config`].
///
/// # Errors
///
/// Returns a [`ConfigError`] carrying the offending line number on the
/// first syntax problem; the daemon treats any of them as fatal.
pub fn parse_config(text: &str) -> Result<Config, ConfigError> {
    let mut device_path = String::new();
    let mut table = KeyTable::new();

    for (index, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        let lineno = index + 1;

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with("/dev/") {
            if !device_path.is_empty() {
                return Err(ConfigError::DuplicateDevicePath {
                    existing: device_path,
                    line: lineno,
                });
            }
            device_path = line.to_string();
            continue;
        }

        let (code_part, action_part) = line
            .split_once(':')
            .ok_or(ConfigError::MissingSeparator { line: lineno })?;

        let code: u32 =
            code_part
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidCode {
                    raw: code_part.trim().to_string(),
                    line: lineno,
                })?;

        let (shortcut, comment) = match action_part.split_once('#') {
            Some((s, c)) => (s.trim(), c.trim()),
            None => (action_part.trim(), ""),
        };
        if shortcut.is_empty() {
            return Err(ConfigError::EmptyShortcut { code, line: lineno });
        }

        if table
            .insert(code, KeyAction::new(shortcut, comment))
            .is_some()
        {
            debug!(code, line = lineno, "code redefined; later mapping wins");
        }
    }

    if device_path.is_empty() {
        return Err(ConfigError::NoDevicePath);
    }

    Ok(Config { device_path, table })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
