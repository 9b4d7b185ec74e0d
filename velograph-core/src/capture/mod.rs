//! Edge capture: debouncing and pulse interval tracking
//!
//! [`EdgeCapture`] is the shared-state contract between the asynchronous
//! edge-handling context and the fixed-cadence sampler. The edge handler is
//! the only writer ([`EdgeCapture::record_edge`]); the sampler reads via
//! [`EdgeCapture::snapshot`] under whatever critical section the firmware
//! wraps around it.

pub mod debounce;
pub mod tracker;

pub use debounce::{EdgeCapture, EdgeDecision};
pub use tracker::TrackerSnapshot;
