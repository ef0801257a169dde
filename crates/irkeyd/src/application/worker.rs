//! The worker loops: one blocking loop per process, either live
//! (debounce + dispatch) or debug (print every code).
//!
//! Each iteration fully completes — read, decode, debounce, lookup,
//! dispatch — before the next read is issued. Remote button presses
//! arrive far slower than an iteration costs, and the debounce window
//! already floors inter-event spacing at 300 ms, so there is no need
//! for any parallelism here.
//!
//! Every error is fatal: the loop returns it, `main` logs one line and
//! exits non-zero, and the service manager restarts the process.

use std::io::Write;
use std::sync::atomic::AtomicBool;
use std::time::Instant;

use irkey_core::domain::keytable::KeyTable;
use irkey_core::protocol::codec::{decode_code, ProtocolError};
use thiserror::Error;
use tracing::debug;

use crate::application::dispatch::{describe_code, Dispatcher, InjectionError, Outcome};

/// Error type for reading lines from the device.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The device read failed.
    #[error("device read failed: {0}")]
    Read(String),

    /// The device reached end-of-stream (unplugged USB adapter).
    #[error("device closed the connection")]
    Disconnected,
}

/// Blocking source of whole lines from the receiver.
///
/// The production implementation is the serial port channel in the
/// infrastructure layer; tests substitute a scripted source so shutdown
/// and disconnection can be simulated without hardware.
pub trait CodeSource: Send {
    /// Blocks until a whole line is available.
    ///
    /// Returns `Ok(None)` when `running` has been cleared (shutdown
    /// requested) or the source has no more scripted input.
    fn next_line(&mut self, running: &AtomicBool) -> Result<Option<Vec<u8>>, SourceError>;
}

/// Error type for a worker loop run. All variants are fatal.
#[derive(Debug, Error)]
pub enum WorkerError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Decode(#[from] ProtocolError),

    #[error(transparent)]
    Injection(#[from] InjectionError),

    #[error("unable to write to output: {0}")]
    Output(#[from] std::io::Error),
}

/// Live loop: read → decode → debounce → lookup → inject, until the
/// running flag clears.
///
/// # Errors
///
/// Returns the first [`WorkerError`]; the process terminates on it.
pub fn run_live<S>(
    source: &mut S,
    dispatcher: &mut Dispatcher,
    running: &AtomicBool,
) -> Result<(), WorkerError>
where
    S: CodeSource + ?Sized,
{
    loop {
        let Some(line) = source.next_line(running)? else {
            return Ok(());
        };
        let code = decode_code(&line)?;

        match dispatcher.handle(code, Instant::now())? {
            Outcome::Dispatched { shortcut } => {
                debug!(code, shortcut = %shortcut, "shortcut dispatched");
            }
            Outcome::Suppressed => debug!(code, "suppressed by debounce"),
            Outcome::Unmapped => debug!(code, "no mapping; ignored"),
        }
    }
}

/// Debug loop: print one line per received code, unfiltered.
///
/// Debounce deliberately does not apply here — when discovering which
/// code a button sends, the user wants to see every repeat.
///
/// # Errors
///
/// Returns the first [`WorkerError`]; the process terminates on it.
pub fn run_debug<S, W>(
    source: &mut S,
    table: &KeyTable,
    out: &mut W,
    running: &AtomicBool,
) -> Result<(), WorkerError>
where
    S: CodeSource + ?Sized,
    W: Write,
{
    loop {
        let Some(line) = source.next_line(running)? else {
            return Ok(());
        };
        let code = decode_code(&line)?;
        writeln!(out, "{}", describe_code(code, table))?;
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
