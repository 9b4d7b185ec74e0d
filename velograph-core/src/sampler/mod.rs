//! Telemetry sample assembly
//!
//! The pure half of the sampling tick: one tracker snapshot plus one
//! auxiliary analog reading in, one [`TelemetryRecord`] out. The cadence,
//! the critical section around the snapshot, the ADC read, and the
//! fire-and-forget broadcast all live in the firmware.

use velograph_protocol::TelemetryRecord;

use crate::capture::TrackerSnapshot;
use crate::config::CalibrationConfig;
use crate::speed::{estimate, SpeedEstimate, StalenessDetector};

/// Kilometers-per-hour per meter-per-second
const MPS_TO_KPH: f32 = 3.6;

/// Build one telemetry record from a tracker snapshot
///
/// The staleness override runs after estimation: a stale snapshot yields
/// exactly zero rpm and speed no matter what interval is stored.
/// `speed_kph` is derived at packaging time, never stored independently.
pub fn assemble(
    cal: &CalibrationConfig,
    snap: TrackerSnapshot,
    now_us: u32,
    now_ms: u32,
    auxiliary_raw: u16,
) -> TelemetryRecord {
    let detector = StalenessDetector::new(cal.staleness_timeout_ms);

    let est = if detector.is_stale(&snap, now_us) {
        SpeedEstimate::ZERO
    } else {
        estimate(
            snap.last_interval_us,
            cal.pulses_per_revolution,
            cal.wheel_circumference_m,
        )
    };

    TelemetryRecord {
        speed_mps: est.speed_mps,
        speed_kph: est.speed_mps * MPS_TO_KPH,
        rpm: est.rpm,
        auxiliary_raw,
        timestamp_ms: now_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAL: CalibrationConfig = CalibrationConfig::new(0.210, 1, 5000, 600);

    fn snap(last_accept_us: u32, last_interval_us: u32, accepted_count: u32) -> TrackerSnapshot {
        TrackerSnapshot {
            last_accept_us,
            last_interval_us,
            accepted_count,
        }
    }

    #[test]
    fn test_fresh_sample_reference_values() {
        // Edge at t=1s with a 500 ms interval, sampled 100 ms later
        let rec = assemble(&CAL, snap(1_000_000, 500_000, 4), 1_100_000, 1100, 2048);

        assert!((rec.rpm - 120.0).abs() < 1e-3);
        assert!((rec.speed_mps - 0.42).abs() < 1e-5);
        assert!((rec.speed_kph - 1.512).abs() < 1e-5);
        assert_eq!(rec.auxiliary_raw, 2048);
        assert_eq!(rec.timestamp_ms, 1100);
    }

    #[test]
    fn test_kph_is_derived_from_mps() {
        for interval_us in [40_000u32, 250_000, 500_000, 2_000_000] {
            let rec = assemble(&CAL, snap(1_000_000, interval_us, 4), 1_050_000, 1050, 0);
            assert_eq!(rec.speed_kph, rec.speed_mps * 3.6);
        }
    }

    #[test]
    fn test_stale_overrides_nonzero_interval() {
        // Edge at t=1s, sampled 700 ms later with a 600 ms window: the
        // stored interval still says 120 RPM but the wheel has stopped.
        let rec = assemble(&CAL, snap(1_000_000, 500_000, 4), 1_700_000, 1700, 0);

        assert_eq!(rec.rpm, 0.0);
        assert_eq!(rec.speed_mps, 0.0);
        assert_eq!(rec.speed_kph, 0.0);
    }

    #[test]
    fn test_never_fired_samples_zero() {
        let rec = assemble(&CAL, snap(0, 0, 0), u32::MAX, 4_294_967, 123);

        assert_eq!(rec.rpm, 0.0);
        assert_eq!(rec.speed_mps, 0.0);
        assert_eq!(rec.auxiliary_raw, 123);
    }

    #[test]
    fn test_single_edge_has_no_interval_yet() {
        // One accepted edge: not stale, but the interval is still the
        // sentinel zero, so the estimate is zero without a divide fault.
        let rec = assemble(&CAL, snap(1_000_000, 0, 1), 1_100_000, 1100, 0);

        assert_eq!(rec.rpm, 0.0);
        assert_eq!(rec.speed_mps, 0.0);
    }
}
