//! Velograph - Wheel Speed Telemetry Firmware
//!
//! Main firmware binary for RP2040-based wheel speed sensor nodes. A hall
//! sensor on the fork delivers one edge per magnet pass; the firmware
//! derives RPM and linear speed from the pulse intervals and broadcasts an
//! 18-byte telemetry record every 100 ms over the radio co-processor link.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, InterruptHandler as AdcInterruptHandler};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::peripherals::UART0;
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use crate::config::{CALIBRATION, SENSOR_POLARITY};

mod channels;
mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    ADC_IRQ_FIFO => AdcInterruptHandler;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Velograph firmware starting...");

    // Reject a broken build-time calibration before any task runs. This is
    // the only fatal path in the firmware.
    if let Err(e) = CALIBRATION.validate() {
        error!("Invalid calibration: {:?}", e);
        defmt::panic!("invalid build-time calibration");
    }
    info!(
        "Calibration: {} m circumference, {} pulse(s)/rev, {} us debounce, {} ms staleness",
        CALIBRATION.wheel_circumference_m,
        CALIBRATION.pulses_per_revolution,
        CALIBRATION.debounce_floor_us,
        CALIBRATION.staleness_timeout_ms
    );

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Hall sensor input: open-drain line, pulled up, driven low per pulse
    let sensor = Input::new(p.PIN_22, Pull::Up);

    // Setup ADC for the auxiliary analog input (field magnitude on GPIO26)
    let adc = Adc::new(p.ADC, Irqs, embassy_rp::adc::Config::default());
    let aux_channel = Channel::new_pin(p.PIN_26, Pull::None);
    info!("Sensor pin and ADC initialized");

    // Setup UART for the radio co-processor link (TX only)
    let uart_config = UartConfig::default(); // 115200 baud default

    let tx_buf = TX_BUF.init([0u8; 64]);
    let rx_buf = RX_BUF.init([0u8; 64]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, _rx) = uart.split();
    info!("Radio link UART initialized");

    // Spawn tasks
    spawner.spawn(tasks::edge_task(sensor, SENSOR_POLARITY)).unwrap();
    spawner.spawn(tasks::sampler_task(adc, aux_channel)).unwrap();
    spawner.spawn(tasks::broadcast_task(tx)).unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        let rejected = channels::TRACKER.lock(|t| t.borrow().rejected_count());
        trace!("Main loop heartbeat ({} edges debounced)", rejected);
    }
}
