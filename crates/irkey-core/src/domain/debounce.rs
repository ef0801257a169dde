//! Debounce gate: suppresses codes arriving within a quiet interval of
//! the previously accepted one.
//!
//! IR remotes retransmit the button code for as long as the button is
//! held, so a single press arrives as a burst of identical codes a few
//! tens of milliseconds apart. The gate turns a burst into one event.
//!
//! The gate runs on *every* received code before table lookup, so a
//! rapid repeat of an unmapped code resets the quiet window exactly
//! like a mapped one would.

use std::time::{Duration, Instant};

/// Minimum spacing between two accepted codes. Shared contract with the
/// firmware, which itself waits 250 ms between transmissions.
pub const QUIET_INTERVAL: Duration = Duration::from_millis(300);

/// Stateful repeat filter over a single "last accepted" timestamp.
///
/// Owned exclusively by the worker loop; the caller supplies `now` so
/// tests can drive the gate with synthetic instants.
#[derive(Debug)]
pub struct DebounceGate {
    quiet: Duration,
    last_accepted: Instant,
}

impl DebounceGate {
    /// Creates a gate whose window starts at `now`: codes arriving
    /// within the first quiet interval after construction are
    /// suppressed, matching the daemon's startup behaviour.
    pub fn new(quiet: Duration, now: Instant) -> Self {
        Self {
            quiet,
            last_accepted: now,
        }
    }

    /// Returns `true` and moves the window forward when at least the
    /// quiet interval has elapsed since the last accepted code.
    /// Suppressed calls leave the window untouched, so a held button
    /// does not push the window forever.
    pub fn accept(&mut self, now: Instant) -> bool {
        if now.duration_since(self.last_accepted) < self.quiet {
            return false;
        }
        self.last_accepted = now;
        true
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn gate_with_open_window() -> (DebounceGate, Instant) {
        // Start the gate far enough in the past that the first code is
        // accepted.
        let start = Instant::now();
        let gate = DebounceGate::new(QUIET_INTERVAL, start);
        (gate, start + QUIET_INTERVAL)
    }

    #[test]
    fn test_code_within_quiet_interval_is_suppressed() {
        // Arrange
        let (mut gate, t0) = gate_with_open_window();
        assert!(gate.accept(t0));

        // Act / Assert – 50 ms later is inside the 300 ms window
        assert!(!gate.accept(t0 + Duration::from_millis(50)));
    }

    #[test]
    fn test_code_after_quiet_interval_is_accepted() {
        // Arrange
        let (mut gate, t0) = gate_with_open_window();
        assert!(gate.accept(t0));

        // Act / Assert
        assert!(gate.accept(t0 + Duration::from_millis(400)));
    }

    #[test]
    fn test_boundary_exactly_at_quiet_interval_is_accepted() {
        let (mut gate, t0) = gate_with_open_window();
        assert!(gate.accept(t0));
        assert!(gate.accept(t0 + QUIET_INTERVAL));
    }

    #[test]
    fn test_suppressed_code_does_not_move_the_window() {
        // Arrange
        let (mut gate, t0) = gate_with_open_window();
        assert!(gate.accept(t0));

        // Act – a suppressed repeat at +200 ms must not reset the window,
        // so +350 ms (>= 300 ms after t0) is accepted.
        assert!(!gate.accept(t0 + Duration::from_millis(200)));

        // Assert
        assert!(gate.accept(t0 + Duration::from_millis(350)));
    }

    #[test]
    fn test_held_button_yields_exactly_one_event_per_window() {
        // Arrange – a held button retransmitting every 100 ms for 1 s
        let (mut gate, t0) = gate_with_open_window();

        // Act
        let accepted = (0..10)
            .filter(|i| gate.accept(t0 + Duration::from_millis(100 * i)))
            .count();

        // Assert – t0, t0+300, t0+600, t0+900
        assert_eq!(accepted, 4);
    }

    #[test]
    fn test_window_starts_closed_at_construction() {
        // Codes arriving right after startup fall inside the first window.
        let start = Instant::now();
        let mut gate = DebounceGate::new(QUIET_INTERVAL, start);
        assert!(!gate.accept(start + Duration::from_millis(100)));
        assert!(gate.accept(start + QUIET_INTERVAL));
    }

    #[test]
    fn test_out_of_order_instant_is_suppressed_not_panicking() {
        // Instant::duration_since saturates, so a now earlier than the
        // window start reads as zero elapsed and is suppressed.
        let start = Instant::now();
        let mut gate = DebounceGate::new(QUIET_INTERVAL, start + QUIET_INTERVAL);
        assert!(!gate.accept(start));
    }
}
