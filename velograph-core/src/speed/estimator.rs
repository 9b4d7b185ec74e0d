//! Pulse interval to angular and linear velocity conversion

/// Angular and linear velocity derived from one pulse interval
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpeedEstimate {
    /// Wheel revolutions per minute
    pub rpm: f32,
    /// Linear speed in meters per second
    pub speed_mps: f32,
}

impl SpeedEstimate {
    /// No valid measurement (or no motion)
    pub const ZERO: Self = Self {
        rpm: 0.0,
        speed_mps: 0.0,
    };
}

/// Convert a pulse interval into RPM and linear speed
///
/// A zero interval or zero pulses-per-revolution means "no valid measurement
/// yet" and yields [`SpeedEstimate::ZERO`] - it is not an error and never a
/// divide fault. The division runs in f64 so quantization at short intervals
/// is not magnified, then narrows to f32.
pub fn estimate(interval_us: u32, pulses_per_revolution: u8, circumference_m: f64) -> SpeedEstimate {
    if interval_us == 0 || pulses_per_revolution == 0 {
        return SpeedEstimate::ZERO;
    }

    let interval_s = interval_us as f64 / 1_000_000.0;
    let revs_per_second = 1.0 / (interval_s * pulses_per_revolution as f64);
    let rpm = revs_per_second * 60.0;
    let speed_mps = rpm * circumference_m / 60.0;

    SpeedEstimate {
        rpm: rpm as f32,
        speed_mps: speed_mps as f32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() <= b.abs() * 1e-5 + 1e-6
    }

    #[test]
    fn test_zero_interval_is_zero_estimate() {
        assert_eq!(estimate(0, 1, 2.105), SpeedEstimate::ZERO);
    }

    #[test]
    fn test_zero_pulses_is_zero_estimate() {
        assert_eq!(estimate(500_000, 0, 2.105), SpeedEstimate::ZERO);
    }

    #[test]
    fn test_reference_scenario() {
        // 0.210 m circumference, 1 pulse/rev, 500 ms interval
        let est = estimate(500_000, 1, 0.210);
        assert!(close(est.rpm, 120.0));
        assert!(close(est.speed_mps, 0.42));
    }

    #[test]
    fn test_multiple_pulses_per_revolution() {
        // Two magnets halve the per-pulse interval for the same wheel speed
        let one = estimate(500_000, 1, 0.210);
        let two = estimate(250_000, 2, 0.210);
        assert!(close(one.rpm, two.rpm));
        assert!(close(one.speed_mps, two.speed_mps));
    }

    proptest! {
        #[test]
        fn prop_rpm_formula(interval_us in 1u32..=60_000_000, ppr in 1u8..=8) {
            let est = estimate(interval_us, ppr, 2.105);
            let expected = 6e7 / (interval_us as f64 * ppr as f64);
            prop_assert!(close(est.rpm, expected as f32));
        }

        #[test]
        fn prop_speed_scales_with_circumference(interval_us in 1u32..=10_000_000) {
            let est = estimate(interval_us, 1, 2.105);
            let expected = est.rpm as f64 * 2.105 / 60.0;
            prop_assert!(close(est.speed_mps, expected as f32));
        }
    }
}
