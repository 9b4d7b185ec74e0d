//! Fixed-cadence telemetry sampler task
//!
//! Every tick: one tracker snapshot, one auxiliary ADC read, one assembled
//! record, one broadcast attempt. The tick period is independent of edge
//! arrival; the sampler pulls a snapshot rather than being pushed to.

use defmt::*;
use embassy_rp::adc::{Adc, Async, Channel};
use embassy_time::{Duration, Instant, Ticker};

use velograph_core::sampler;

use crate::channels::{SAMPLE_READY, TRACKER};
use crate::config::{CALIBRATION, SAMPLE_PERIOD_MS};

/// Sampler task
#[embassy_executor::task]
pub async fn sampler_task(mut adc: Adc<'static, Async>, mut aux_channel: Channel<'static>) {
    info!("Sampler task started ({} ms period)", SAMPLE_PERIOD_MS);

    let mut ticker = Ticker::every(Duration::from_millis(SAMPLE_PERIOD_MS));

    loop {
        ticker.next().await;

        // Critical section covers only the three-field snapshot copy; the
        // edge context is suspended for nothing else in this tick.
        let snap = TRACKER.lock(|t| t.borrow().snapshot());

        // One auxiliary reading per tick; a failed read degrades to zero
        // rather than skipping the tick.
        let auxiliary_raw = match adc.read(&mut aux_channel).await {
            Ok(value) => value,
            Err(_) => {
                warn!("Auxiliary ADC read failed");
                0
            }
        };

        let now = Instant::now();
        let record = sampler::assemble(
            &CALIBRATION,
            snap,
            now.as_micros() as u32,
            now.as_millis() as u32,
            auxiliary_raw,
        );

        trace!(
            "Sample: {} rpm, {} m/s, aux {}",
            record.rpm,
            record.speed_mps,
            record.auxiliary_raw
        );

        // Exactly one broadcast attempt per tick, fire-and-forget: if the
        // broadcaster has not consumed the previous sample, this one
        // supersedes it.
        SAMPLE_READY.signal(record);
    }
}
