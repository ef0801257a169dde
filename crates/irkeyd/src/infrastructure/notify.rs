//! Service-manager readiness notification.
//!
//! systemd (with `Type=notify`) passes the address of a datagram socket
//! in `NOTIFY_SOCKET`; the daemon sends a single `READY=1` datagram
//! once initialization is done. An absent or empty variable means no
//! supervisor is listening and notification is skipped silently; an
//! actual send failure is fatal, like every other operational error.

use std::os::unix::net::UnixDatagram;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

const READY_MESSAGE: &[u8] = b"READY=1";

/// Errors that can occur while notifying the service manager.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Creating the local datagram socket failed.
    #[error("unable to create notification socket: {0}")]
    Socket(#[source] std::io::Error),

    /// Sending the datagram to the supervisor's socket failed.
    #[error("unable to send readiness notification to {path:?}: {source}")]
    Send {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Sends the one-shot readiness datagram when `NOTIFY_SOCKET` is set.
///
/// Returns `Ok(false)` when no notification socket is configured.
///
/// # Errors
///
/// Returns [`NotifyError`] when the socket exists but the send fails.
pub fn notify_ready() -> Result<bool, NotifyError> {
    let Some(value) = std::env::var_os("NOTIFY_SOCKET") else {
        debug!("NOTIFY_SOCKET not set; skipping readiness notification");
        return Ok(false);
    };
    let address = value.to_string_lossy().into_owned();
    if address.is_empty() {
        return Ok(false);
    }
    send_ready(&address)?;
    Ok(true)
}

/// Sends `READY=1` to the given socket path.
///
/// Abstract-namespace addresses (leading `@`) are not supported; the
/// daemon is started with a filesystem socket path under systemd.
pub fn send_ready(address: &str) -> Result<(), NotifyError> {
    let socket = UnixDatagram::unbound().map_err(NotifyError::Socket)?;

    socket
        .send_to(READY_MESSAGE, PathBuf::from(address))
        .map_err(|source| NotifyError::Send {
            path: address.to_string(),
            source,
        })?;

    debug!(socket = address, "readiness notification sent");
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_ready_delivers_the_datagram() {
        // Arrange – a listening datagram socket standing in for systemd
        let dir = tempfile::tempdir().unwrap();
        let sock_path = dir.path().join("notify.sock");
        let receiver = UnixDatagram::bind(&sock_path).unwrap();

        // Act
        send_ready(sock_path.to_str().unwrap()).unwrap();

        // Assert
        let mut buf = [0u8; 16];
        let n = receiver.recv(&mut buf).unwrap();
        assert_eq!(&buf[..n], b"READY=1");
    }

    #[test]
    fn test_send_ready_to_missing_socket_fails() {
        let result = send_ready("/nonexistent/notify.sock");
        assert!(matches!(result, Err(NotifyError::Send { .. })));
    }
}
