//! # irkey-core
//!
//! Shared library for irkeyd containing the wire decoder for the IR
//! receiver's serial stream, the domain entities (key table, debounce
//! gate), and the config file parser.
//!
//! This crate is pure logic: it has zero dependencies on OS APIs,
//! serial I/O, or subprocesses, so everything in it can be unit-tested
//! without hardware.
//!
//! - **`protocol`** – How bytes from the receiver become command codes.
//!   The firmware prints one ASCII decimal code per line; `LineFramer`
//!   reassembles lines from arbitrary read chunks and `decode_code`
//!   parses them.
//!
//! - **`domain`** – The key table (code → shortcut mapping) and the
//!   debounce gate that suppresses rapid repeats of a held-down remote
//!   button.
//!
//! - **`config`** – Parser for the line-oriented config file that
//!   defines the serial device path and the code-to-shortcut table.

pub mod config;
pub mod domain;
pub mod protocol;

// Re-export the most-used types at the crate root so callers can write
// `irkey_core::KeyTable` instead of `irkey_core::domain::keytable::KeyTable`.
pub use config::{parse_config, Config, ConfigError};
pub use domain::debounce::{DebounceGate, QUIET_INTERVAL};
pub use domain::keytable::{KeyAction, KeyTable};
pub use protocol::codec::{decode_code, ProtocolError};
pub use protocol::framer::LineFramer;
