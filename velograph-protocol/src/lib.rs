//! Velograph Broadcast Telemetry Record
//!
//! This crate defines the fixed-layout binary record handed to the radio
//! broadcast collaborator each sampling tick. Delivery is best-effort to
//! zero or more subscribed consumers; no acknowledgement is observed.
//!
//! # Record Layout
//!
//! All fields little-endian, no padding, 18 bytes total:
//! ```text
//! ┌───────────┬───────────┬──────┬───────────────┬──────────────┐
//! │ speed_mps │ speed_kph │ rpm  │ auxiliary_raw │ timestamp_ms │
//! │ f32 @0    │ f32 @4    │ f32  │ u16 @12       │ u32 @14      │
//! │           │           │ @8   │               │              │
//! └───────────┴───────────┴──────┴───────────────┴──────────────┘
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod record;

pub use record::{RecordError, TelemetryRecord, RECORD_SIZE};
