//! Serial port channel for the IR receiver.
//!
//! Opens the configured character device at the fixed symbol rate the
//! firmware uses and turns its byte stream into whole lines for the
//! worker. The short read timeout is the worker's cancellation point:
//! between timeouts the channel checks the running flag, so shutdown is
//! prompt between iterations without interrupting an in-flight read.

use std::collections::VecDeque;
use std::io::Read;
use std::os::unix::fs::FileTypeExt;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use irkey_core::protocol::framer::LineFramer;
use serialport::{DataBits, FlowControl, Parity, SerialPort, StopBits};
use thiserror::Error;
use tracing::info;

use crate::application::worker::{CodeSource, SourceError};

/// Symbol rate shared with the receiver firmware (`Serial.begin(9600)`).
/// Not negotiable at runtime.
pub const PORT_BAUD: u32 = 9_600;

/// How long one raw read may block before the running flag is re-checked.
const READ_TIMEOUT: Duration = Duration::from_millis(200);

/// Errors that can occur while opening the port.
#[derive(Debug, Error)]
pub enum PortError {
    /// The device path could not be inspected at all.
    #[error("unable to stat device {path}: {source}")]
    Stat {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The path exists but is not a character special device.
    #[error("{path} is not a character device")]
    NotCharDevice { path: PathBuf },

    /// The serial driver refused to open or configure the device.
    #[error("unable to open port {path}: {source}")]
    Open {
        path: PathBuf,
        source: serialport::Error,
    },
}

/// Exclusive handle on the receiver's serial device.
///
/// Exactly one exists per process. The descriptor is released exactly
/// once when the channel is dropped, on every exit path.
pub struct PortChannel {
    port: Box<dyn SerialPort>,
    framer: LineFramer,
    ready: VecDeque<Vec<u8>>,
}

impl PortChannel {
    /// Opens `path` in 8N1 framing at [`PORT_BAUD`].
    ///
    /// # Errors
    ///
    /// Fails with [`PortError::NotCharDevice`] before any serial
    /// configuration when the path does not refer to a character
    /// special device (e.g. a regular file), and with
    /// [`PortError::Open`] when the driver rejects the device.
    pub fn open(path: &Path) -> Result<Self, PortError> {
        let meta = std::fs::metadata(path).map_err(|source| PortError::Stat {
            path: path.to_path_buf(),
            source,
        })?;
        if !meta.file_type().is_char_device() {
            return Err(PortError::NotCharDevice {
                path: path.to_path_buf(),
            });
        }

        let port = serialport::new(path.to_string_lossy(), PORT_BAUD)
            .data_bits(DataBits::Eight)
            .stop_bits(StopBits::One)
            .parity(Parity::None)
            .flow_control(FlowControl::None)
            .timeout(READ_TIMEOUT)
            .open()
            .map_err(|source| PortError::Open {
                path: path.to_path_buf(),
                source,
            })?;

        info!(path = %path.display(), baud = PORT_BAUD, "serial port opened");

        Ok(Self {
            port,
            framer: LineFramer::new(),
            ready: VecDeque::new(),
        })
    }
}

impl CodeSource for PortChannel {
    fn next_line(&mut self, running: &AtomicBool) -> Result<Option<Vec<u8>>, SourceError> {
        loop {
            if let Some(line) = self.ready.pop_front() {
                return Ok(Some(line));
            }
            if !running.load(Ordering::Relaxed) {
                return Ok(None);
            }

            let mut buf = [0u8; 64];
            match self.port.read(&mut buf) {
                Ok(0) => return Err(SourceError::Disconnected),
                Ok(n) => self.ready.extend(self.framer.push(&buf[..n])),
                Err(e) if e.kind() == std::io::ErrorKind::TimedOut => continue,
                Err(e) => return Err(SourceError::Read(e.to_string())),
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
