//! Dispatch use case: debounce → table lookup → shortcut injection.
//!
//! The OS-level injection is delegated to a [`ShortcutInjector`] trait
//! object; the production implementation (spawning `xdotool`) lives in
//! the infrastructure layer, and tests substitute a recording mock.

use std::sync::Arc;
use std::time::Instant;

use irkey_core::domain::debounce::DebounceGate;
use irkey_core::domain::keytable::KeyTable;
use thiserror::Error;

/// Error type for shortcut injection.
#[derive(Debug, Error)]
pub enum InjectionError {
    /// The injection tool could not be spawned at all.
    #[error("unable to launch injector for shortcut {shortcut:?}: {reason}")]
    Launch { shortcut: String, reason: String },

    /// The injection tool ran but reported failure.
    #[error("injector failed for shortcut {shortcut:?}: {status}")]
    Failed { shortcut: String, status: String },
}

/// Capability to synthesize a keyboard shortcut as real input.
///
/// The daemon treats the injection mechanism as an opaque external
/// action; irkeyd itself never touches the input stack.
pub trait ShortcutInjector: Send + Sync {
    /// Injects `shortcut` as a keyboard event, blocking until done.
    fn inject(&self, shortcut: &str) -> Result<(), InjectionError>;
}

/// What happened to one received code. The three variants are
/// exhaustive and mutually exclusive per read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Rejected by the debounce gate; nothing else was done.
    Suppressed,
    /// Accepted but not present in the key table; no action taken.
    Unmapped,
    /// Accepted, mapped, and injected.
    Dispatched { shortcut: String },
}

/// The live-mode dispatcher.
///
/// Owns the key table and the debounce gate outright — both are
/// confined to the single worker, so no locking is involved.
pub struct Dispatcher {
    table: KeyTable,
    gate: DebounceGate,
    injector: Arc<dyn ShortcutInjector>,
}

impl Dispatcher {
    /// Creates a dispatcher over an already-built key table.
    pub fn new(table: KeyTable, gate: DebounceGate, injector: Arc<dyn ShortcutInjector>) -> Self {
        Self {
            table,
            gate,
            injector,
        }
    }

    /// Processes one received code.
    ///
    /// The gate runs first and on every code, so repeats of an unmapped
    /// code debounce exactly like mapped ones.
    ///
    /// # Errors
    ///
    /// Returns [`InjectionError`] when the external action fails; the
    /// caller treats this as fatal.
    pub fn handle(&mut self, code: u32, now: Instant) -> Result<Outcome, InjectionError> {
        if !self.gate.accept(now) {
            return Ok(Outcome::Suppressed);
        }
        let Some(action) = self.table.get(code) else {
            return Ok(Outcome::Unmapped);
        };
        self.injector.inject(&action.shortcut)?;
        Ok(Outcome::Dispatched {
            shortcut: action.shortcut.clone(),
        })
    }
}

/// Formats the debug-mode line for one received code.
///
/// Mapped codes print as `"<code>: <shortcut>"`, with `  # <comment>`
/// appended only when the comment is non-empty. Unmapped codes print as
/// `"<code>: ?  # ?"`.
pub fn describe_code(code: u32, table: &KeyTable) -> String {
    match table.get(code) {
        None => format!("{code}: ?  # ?"),
        Some(action) if action.comment.is_empty() => format!("{code}: {}", action.shortcut),
        Some(action) => format!("{code}: {}  # {}", action.shortcut, action.comment),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
