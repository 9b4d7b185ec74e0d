//! Consistent snapshot of the pulse interval tracker

/// A consistent read of the tracker's state triple
///
/// `last_interval_us` is always the duration between the two most recently
/// *accepted* edges, never between raw edges. `accepted_count == 0` marks
/// the never-fired startup state; `last_accept_us` is meaningless then and
/// consumers must treat the tracker as stale, never as "infinitely fast".
///
/// All timestamps are a free-running u32 microsecond counter; durations are
/// formed with wrapping subtraction so a counter wrap does not corrupt them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TrackerSnapshot {
    /// Timestamp of the most recently accepted edge (µs)
    pub last_accept_us: u32,
    /// Duration between the two most recently accepted edges (µs)
    pub last_interval_us: u32,
    /// Total accepted edges since startup
    pub accepted_count: u32,
}

impl TrackerSnapshot {
    /// True if no edge has ever been accepted
    pub const fn never_fired(&self) -> bool {
        self.accepted_count == 0
    }
}
