//! Build-time node configuration
//!
//! Calibration is fixed at startup and immutable afterwards. Edit these
//! constants and rebuild to match the installed sensor hardware; there is
//! no runtime configuration path.

use velograph_core::config::CalibrationConfig;

/// Which transition of the sensor line counts as a pulse edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum EdgePolarity {
    Rising,
    Falling,
    Any,
}

/// Sensor calibration: 700c wheel (2.105 m), single spoke magnet,
/// 5 ms debounce floor, 3 s no-motion window
pub const CALIBRATION: CalibrationConfig = CalibrationConfig::new(2.105, 1, 5000, 3000);

/// Hall sensor is open-drain and pulls the line low on each magnet pass
pub const SENSOR_POLARITY: EdgePolarity = EdgePolarity::Falling;

/// Fixed sampling cadence in milliseconds
pub const SAMPLE_PERIOD_MS: u64 = 100;
