//! Calibration type definitions
//!
//! Calibration is fixed at startup (the firmware embeds it as a constant)
//! and immutable afterwards.

/// Errors detected when validating a calibration at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Wheel circumference must be positive
    ZeroCircumference,
    /// Pulses per revolution must be nonzero
    ZeroPulsesPerRevolution,
}

/// Static sensor calibration
///
/// `debounce_floor_us` and `staleness_timeout_ms` may be zero (debouncing
/// and the staleness override are then effectively disabled and immediate,
/// respectively); the two divisors must not be.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationConfig {
    /// Wheel circumference in meters
    pub wheel_circumference_m: f64,
    /// Magnet pulses per wheel revolution
    pub pulses_per_revolution: u8,
    /// Minimum accepted time between edges (µs); shorter gaps are bounce
    pub debounce_floor_us: u32,
    /// Maximum time since the last accepted edge before speed reads zero (ms)
    pub staleness_timeout_ms: u32,
}

impl CalibrationConfig {
    /// Create a calibration (usable in `const` context for firmware embedding)
    pub const fn new(
        wheel_circumference_m: f64,
        pulses_per_revolution: u8,
        debounce_floor_us: u32,
        staleness_timeout_ms: u32,
    ) -> Self {
        Self {
            wheel_circumference_m,
            pulses_per_revolution,
            debounce_floor_us,
            staleness_timeout_ms,
        }
    }

    /// Check the calibration invariants
    ///
    /// Run once at startup, before any task is spawned.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.wheel_circumference_m <= 0.0 {
            return Err(ConfigError::ZeroCircumference);
        }
        if self.pulses_per_revolution == 0 {
            return Err(ConfigError::ZeroPulsesPerRevolution);
        }
        Ok(())
    }
}
