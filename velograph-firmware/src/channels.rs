//! Shared state and inter-task handoff
//!
//! Uses embassy-sync primitives. The tracker lives behind a blocking mutex
//! with a critical-section raw mutex: the edge task's write and the sampler's
//! snapshot read each hold it only for the duration of the field copies.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::signal::Signal;

use velograph_core::capture::EdgeCapture;
use velograph_protocol::TelemetryRecord;

use crate::config::CALIBRATION;

/// Pulse interval tracker, written by the edge task, snapshotted by the sampler
pub static TRACKER: Mutex<CriticalSectionRawMutex, RefCell<EdgeCapture>> =
    Mutex::new(RefCell::new(EdgeCapture::new(CALIBRATION.debounce_floor_us)));

/// Latest assembled sample, handed from sampler to broadcaster
///
/// A `Signal` holds only the newest value: if the broadcaster is slow, an
/// unconsumed sample is superseded rather than queued, and the sampler's
/// signal never blocks.
pub static SAMPLE_READY: Signal<CriticalSectionRawMutex, TelemetryRecord> = Signal::new();
