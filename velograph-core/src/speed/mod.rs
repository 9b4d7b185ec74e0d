//! Velocity derivation: interval-to-RPM/speed estimation and staleness

pub mod estimator;
pub mod staleness;

pub use estimator::{estimate, SpeedEstimate};
pub use staleness::StalenessDetector;
