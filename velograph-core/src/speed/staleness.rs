//! No-motion detection
//!
//! A wheel that stopped must not keep reporting its last nonzero speed: once
//! no edge has been accepted within the timeout window, the estimate is
//! forced to zero regardless of the stored interval.

use crate::capture::TrackerSnapshot;

/// Staleness detector over the tracker's last-accept timestamp
#[derive(Debug, Clone, Copy)]
pub struct StalenessDetector {
    timeout_us: u32,
}

impl StalenessDetector {
    /// Create a detector with the given window in milliseconds
    pub const fn new(timeout_ms: u32) -> Self {
        Self {
            timeout_us: timeout_ms.saturating_mul(1000),
        }
    }

    /// True if the snapshot must be reported as zero speed
    ///
    /// The never-fired startup state is always stale: `last_accept_us` is
    /// the sentinel, the elapsed time is effectively unbounded, and it must
    /// read as "no motion", never as "infinitely fast". Otherwise the
    /// elapsed time uses wrapping subtraction, matching the capture side.
    pub fn is_stale(&self, snap: &TrackerSnapshot, now_us: u32) -> bool {
        if snap.never_fired() {
            return true;
        }
        now_us.wrapping_sub(snap.last_accept_us) > self.timeout_us
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(last_accept_us: u32, last_interval_us: u32, accepted_count: u32) -> TrackerSnapshot {
        TrackerSnapshot {
            last_accept_us,
            last_interval_us,
            accepted_count,
        }
    }

    #[test]
    fn test_never_fired_is_stale() {
        let det = StalenessDetector::new(600);
        assert!(det.is_stale(&snap(0, 0, 0), 0));
        assert!(det.is_stale(&snap(0, 0, 0), u32::MAX));
    }

    #[test]
    fn test_fresh_edge_not_stale() {
        let det = StalenessDetector::new(600);
        assert!(!det.is_stale(&snap(1_000_000, 500_000, 3), 1_200_000));
    }

    #[test]
    fn test_elapsed_beyond_window_is_stale() {
        // Edge at t=1s, 700 ms later with a 600 ms window
        let det = StalenessDetector::new(600);
        assert!(det.is_stale(&snap(1_000_000, 500_000, 3), 1_700_000));
    }

    #[test]
    fn test_exact_window_boundary_not_stale() {
        let det = StalenessDetector::new(600);
        assert!(!det.is_stale(&snap(1_000_000, 500_000, 3), 1_600_000));
    }

    #[test]
    fn test_elapsed_across_counter_wrap() {
        let det = StalenessDetector::new(600);
        // Edge just before wrap, checked just after: elapsed is small
        assert!(!det.is_stale(&snap(u32::MAX - 100_000, 500_000, 3), 100_000));
    }

    #[test]
    fn test_zero_window_goes_stale_immediately() {
        let det = StalenessDetector::new(0);
        assert!(det.is_stale(&snap(1_000_000, 500_000, 3), 1_000_001));
        assert!(!det.is_stale(&snap(1_000_000, 500_000, 3), 1_000_000));
    }
}
