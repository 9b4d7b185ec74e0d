//! Sensor edge capture task
//!
//! Waits on the configured transition of the sensor line, timestamps it
//! against the monotonic microsecond clock, and folds it into the shared
//! tracker. A pulse event is just that timestamp - it is never stored. All
//! filtering (debounce floor, first-edge sentinel) happens inside
//! `EdgeCapture::record_edge`.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::Instant;

use velograph_core::capture::EdgeDecision;

use crate::channels::TRACKER;
use crate::config::EdgePolarity;

/// Edge capture task
#[embassy_executor::task]
pub async fn edge_task(mut sensor: Input<'static>, polarity: EdgePolarity) {
    info!("Edge capture task started (polarity: {:?})", polarity);

    loop {
        match polarity {
            EdgePolarity::Rising => sensor.wait_for_rising_edge().await,
            EdgePolarity::Falling => sensor.wait_for_falling_edge().await,
            EdgePolarity::Any => sensor.wait_for_any_edge().await,
        }

        let now_us = Instant::now().as_micros() as u32;

        // Lock held only for the record_edge state update
        let decision = TRACKER.lock(|t| t.borrow_mut().record_edge(now_us));

        match decision {
            EdgeDecision::First => debug!("First edge accepted at {} us", now_us),
            EdgeDecision::Accepted => trace!("Edge accepted at {} us", now_us),
            EdgeDecision::Rejected => trace!("Edge rejected as bounce"),
        }
    }
}
