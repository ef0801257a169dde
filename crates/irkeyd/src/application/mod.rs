//! Application layer use cases for the daemon.
//!
//! - **`dispatch`** – Turns one received command code into one of three
//!   outcomes (suppressed, unmapped, dispatched) behind the injectable
//!   [`dispatch::ShortcutInjector`] seam, so tests can record
//!   injections instead of spawning real subprocesses.
//!
//! - **`worker`** – The two run loops (live and debug) driven by a
//!   [`worker::CodeSource`]. Exactly one of them runs per process, on a
//!   single blocking worker task.

pub mod dispatch;
pub mod worker;
