//! Infrastructure layer for the daemon.
//!
//! Contains the OS-facing adapters. **Dependency rule**: this layer may
//! depend on `application` and `irkey_core`, but must not be imported
//! by them.
//!
//! - **`serial`** – The serial port channel: opens the receiver's
//!   character device at the fixed baud rate and implements
//!   [`crate::application::worker::CodeSource`] over raw reads plus the
//!   core line framer.
//!
//! - **`injection`** – `ShortcutInjector` implementations: the real
//!   `xdotool` subprocess invoker and a recording mock for tests.
//!
//! - **`notify`** – One-shot service-manager readiness notification
//!   over the `NOTIFY_SOCKET` datagram socket.
//!
//! - **`storage`** – Config file location and loading; the text parser
//!   itself lives in `irkey_core::config`.

pub mod injection;
pub mod notify;
pub mod serial;
pub mod storage;
