//! Shortcut injection implementations.
//!
//! The production injector shells out to `xdotool`; the mock in
//! [`mock`] records calls for tests.

pub mod mock;

use std::process::Command;

use tracing::debug;

use crate::application::dispatch::{InjectionError, ShortcutInjector};

/// Default injection tool.
const DEFAULT_PROGRAM: &str = "xdotool";

/// Injects shortcuts by spawning `xdotool key <shortcut>` and waiting
/// for it to exit.
///
/// One subprocess is spawned per accepted, mapped code; the worker
/// blocks until it finishes. A launch failure or non-zero exit is
/// fatal to the daemon.
pub struct XdotoolInjector {
    program: String,
}

impl XdotoolInjector {
    /// Creates an injector using the `xdotool` binary from `$PATH`.
    pub fn new() -> Self {
        Self::with_program(DEFAULT_PROGRAM)
    }

    /// Creates an injector running an arbitrary program. Used by tests
    /// to substitute `true`/`false` for the real tool.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for XdotoolInjector {
    fn default() -> Self {
        Self::new()
    }
}

impl ShortcutInjector for XdotoolInjector {
    fn inject(&self, shortcut: &str) -> Result<(), InjectionError> {
        debug!(program = %self.program, shortcut, "spawning injector");

        let status = Command::new(&self.program)
            .arg("key")
            .arg(shortcut)
            .status()
            .map_err(|e| InjectionError::Launch {
                shortcut: shortcut.to_string(),
                reason: e.to_string(),
            })?;

        if !status.success() {
            return Err(InjectionError::Failed {
                shortcut: shortcut.to_string(),
                status: status.to_string(),
            });
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
