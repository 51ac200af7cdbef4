//! ThermoDial Firmware — Main Entry Point
//!
//! Hexagonal architecture around a single cooperative control loop.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     Adapters (outer ring)                    │
//! │                                                              │
//! │  HardwareAdapter             LogEventSink    MonotonicClock  │
//! │  (Sensor+Dial+Relay+Display) (EventSink)     (time source)   │
//! │                                                              │
//! │  ──────────────── Port Trait Boundary ───────────────────    │
//! │                                                              │
//! │  ┌────────────────────────────────────────────────────────┐  │
//! │  │              AppService (pure logic)                   │  │
//! │  │  Mode FSM · Hysteresis · Setpoint · Presenter          │  │
//! │  └────────────────────────────────────────────────────────┘  │
//! │                                                              │
//! │  Encoder ISR (atomics only) ──▶ dial counter                 │
//! └──────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

// ── Module declarations ───────────────────────────────────────
pub mod config;
pub mod error;
mod pins;

pub mod app;
mod adapters;
mod control;
mod drivers;
pub mod fsm;
pub mod presenter;
mod sensors;

// ── Imports ───────────────────────────────────────────────────
use std::thread;
use std::time::Duration;

use anyhow::Result;
use log::{info, warn};

use adapters::hardware::HardwareAdapter;
use adapters::log_sink::LogEventSink;
use adapters::time::MonotonicClock;
use app::service::AppService;
use config::SystemConfig;
use drivers::display::{SerialDisplay, UartTransport};
use drivers::encoder;
use drivers::relay::RelayDriver;
use sensors::thermistor::ThermistorSensor;

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  ThermoDial v{}                     ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration ──────────────────────────────────────
    let config = SystemConfig::default();
    config.validate()?;

    // ── 3. Peripherals ────────────────────────────────────────
    // The relay pin is driven low inside init_peripherals() before
    // anything else happens.
    if let Err(e) = drivers::hw_init::init_peripherals() {
        // Peripheral init failure is critical — log and halt with the
        // relay de-energized.
        log::error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }
    if let Err(e) = drivers::hw_init::init_isr_service() {
        log::error!("ISR service init failed: {} — dial will be inert", e);
    }

    // Restart resets the setpoint: seed the dial counter fresh.
    encoder::seed_counter(config.startup_counter);

    // ── 4. Sensor settle ──────────────────────────────────────
    // One bounded wait before the first reading; the divider and ADC
    // reference need a moment after power-on.
    info!("settling {} ms before first reading", config.startup_settle_ms);
    thread::sleep(Duration::from_millis(u64::from(config.startup_settle_ms)));

    // ── 5. Construct adapters ─────────────────────────────────
    let mut hw = HardwareAdapter::new(
        ThermistorSensor::new(pins::TEMP_ADC_GPIO),
        RelayDriver::new(),
        SerialDisplay::new(UartTransport::new()),
    );
    if let Err(e) = hw.init_display(config.display_brightness) {
        // Display is write-only; a dead link degrades the UI but never
        // relay control.
        warn!("display init failed ({}), continuing", e);
    }

    let clock = MonotonicClock::new();
    let mut sink = LogEventSink::new();

    // ── 6. Construct app service ──────────────────────────────
    let mut app = AppService::new(config.clone());
    app.start(&mut hw, &mut sink);

    info!("System ready. Entering control loop.");

    // ── 7. Control loop ───────────────────────────────────────
    let pace = Duration::from_millis(u64::from(config.control_loop_interval_ms));
    loop {
        app.tick(&mut hw, &mut sink, clock.uptime_ms());
        // Cooperative pacing — well under the display refresh interval,
        // and yields to the IDLE task so the TWDT stays fed.
        thread::sleep(pace);
    }
}
