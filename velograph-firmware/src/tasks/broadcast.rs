//! Broadcast transmit task
//!
//! Drains the latest telemetry sample and writes the encoded 18-byte record
//! to the radio co-processor link. Delivery is best-effort: a failed write
//! is logged and dropped, and the next tick's sample supersedes it. The
//! radio stack itself lives on the co-processor.

use defmt::*;
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::BufferedUartTx;
use embedded_io_async::Write;

use crate::channels::SAMPLE_READY;

/// Broadcast task - sends records to the radio link
#[embassy_executor::task]
pub async fn broadcast_task(mut tx: BufferedUartTx<'static, UART0>) {
    info!("Broadcast task started");

    loop {
        let record = SAMPLE_READY.wait().await;
        let buf = record.encode();

        if let Err(e) = tx.write_all(&buf).await {
            warn!("Broadcast write failed: {:?}", e);
        } else {
            trace!("Broadcast record at {} ms", record.timestamp_ms);
        }
    }
}
