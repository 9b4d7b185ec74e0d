//! Edge debouncer and interval state writer
//!
//! `record_edge` is the hot path: it runs in the asynchronous edge context,
//! does no allocation or I/O, and completes in bounded time. Rejections are
//! silent (a diagnostic counter, never an error).

use super::tracker::TrackerSnapshot;

/// Outcome of feeding one raw edge to the capture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EdgeDecision {
    /// First edge since startup: establishes the timestamp, no valid interval
    First,
    /// Edge accepted, interval updated
    Accepted,
    /// Gap below the debounce floor, edge dropped as bounce
    Rejected,
}

/// Debouncing edge capture
///
/// Owns the interval state triple. Single writer (the edge context); the
/// sampler reads through [`EdgeCapture::snapshot`] under the firmware's
/// critical section.
#[derive(Debug, Clone)]
pub struct EdgeCapture {
    debounce_floor_us: u32,
    last_accept_us: u32,
    last_interval_us: u32,
    accepted_count: u32,
    rejected_count: u32,
}

impl EdgeCapture {
    /// Create a capture in the never-fired state
    pub const fn new(debounce_floor_us: u32) -> Self {
        Self {
            debounce_floor_us,
            last_accept_us: 0,
            last_interval_us: 0,
            accepted_count: 0,
            rejected_count: 0,
        }
    }

    /// Fold one raw edge at `now_us` into the tracker state
    ///
    /// The gap is computed with wrapping subtraction, so it stays correct
    /// across a wrap of the microsecond counter. The very first edge only
    /// establishes `last_accept_us`: its gap is against the startup sentinel
    /// and is not a valid interval.
    pub fn record_edge(&mut self, now_us: u32) -> EdgeDecision {
        if self.accepted_count == 0 {
            self.last_accept_us = now_us;
            self.accepted_count = 1;
            return EdgeDecision::First;
        }

        let gap = now_us.wrapping_sub(self.last_accept_us);
        if gap < self.debounce_floor_us {
            self.rejected_count = self.rejected_count.wrapping_add(1);
            return EdgeDecision::Rejected;
        }

        self.last_interval_us = gap;
        self.last_accept_us = now_us;
        self.accepted_count = self.accepted_count.wrapping_add(1);
        EdgeDecision::Accepted
    }

    /// Read the state triple
    ///
    /// Consistency with respect to the writer is the caller's concern: the
    /// firmware takes its critical section around this call only, keeping
    /// the writer suspended for the minimum duration.
    pub fn snapshot(&self) -> TrackerSnapshot {
        TrackerSnapshot {
            last_accept_us: self.last_accept_us,
            last_interval_us: self.last_interval_us,
            accepted_count: self.accepted_count,
        }
    }

    /// Edges dropped by the debounce floor (diagnostics only)
    pub fn rejected_count(&self) -> u32 {
        self.rejected_count
    }
}
