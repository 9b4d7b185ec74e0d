//! Board-agnostic core logic for the Velograph wheel speed sensor firmware
//!
//! This crate contains all derivation logic that does not depend on
//! specific hardware implementations:
//!
//! - Edge debouncing and pulse interval tracking
//! - Interval-to-RPM/speed estimation
//! - Staleness (no-motion) detection
//! - Telemetry sample assembly
//! - Calibration type definitions
//!
//! Edges arrive asynchronously and are folded into a [`capture::EdgeCapture`]
//! by the capture context; the sampler pulls a consistent snapshot on a fixed
//! cadence and never blocks on edge arrival. Locking around the snapshot is
//! the firmware's concern - everything in this crate is plain, host-testable
//! code.

// no_std on target; host unit tests need std for float asserts
#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod capture;
pub mod config;
pub mod sampler;
pub mod speed;
