//! irkeyd library entry point.
//!
//! Re-exports the module tree so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same code.
//!
//! irkeyd reads IR remote key codes from a microcontroller on a serial
//! port and injects the configured keyboard shortcut for each one:
//!
//! 1. The receiver firmware decodes IR pulses and prints one decimal
//!    command code per line at 9600 baud.
//! 2. The daemon reassembles lines, parses codes, and debounces the
//!    bursts a held-down button produces.
//! 3. Each accepted, mapped code spawns the external injection tool
//!    (`xdotool key <shortcut>`) to synthesize the keyboard input.
//!
//! With `--debug` the daemon instead prints every received code so the
//! user can discover which code each remote button sends.

/// Application layer: dispatch use case and the worker loops.
pub mod application;

/// Infrastructure layer: serial port, subprocess injector, readiness
/// notification, and config file loading.
pub mod infrastructure;
