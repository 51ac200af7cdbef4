//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the thermistor, relay, and display drivers, exposing them
//! through [`SensorPort`], [`DialPort`], [`ActuatorPort`], and
//! [`DisplayPort`]. This is the only module in the system that touches
//! actual hardware. On non-espidf targets, the underlying drivers use
//! cfg-gated simulation stubs.
//!
//! Display transport failures are logged and swallowed here: a dead
//! display link must never stall relay control.

use log::warn;

use crate::app::ports::{ActuatorPort, DialPort, DisplayPort, SensorPort};
use crate::drivers::display::{DisplayTransport, SerialDisplay};
use crate::drivers::encoder;
use crate::drivers::hw_init;
use crate::drivers::relay::RelayDriver;
use crate::error::DisplayError;
use crate::fsm::context::SensorReading;
use crate::pins;
use crate::sensors::thermistor::ThermistorSensor;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<T: DisplayTransport> {
    thermistor: ThermistorSensor,
    relay: RelayDriver,
    display: SerialDisplay<T>,
}

impl<T: DisplayTransport> HardwareAdapter<T> {
    pub fn new(
        thermistor: ThermistorSensor,
        relay: RelayDriver,
        display: SerialDisplay<T>,
    ) -> Self {
        Self {
            thermistor,
            relay,
            display,
        }
    }

    /// Startup display sequence: clear, then apply the configured
    /// brightness. Fails loudly — called once from main where a broken
    /// display link is worth reporting.
    pub fn init_display(&mut self, brightness: u8) -> Result<(), DisplayError> {
        self.display.clear()?;
        self.display.set_brightness(brightness)
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl<T: DisplayTransport> SensorPort for HardwareAdapter<T> {
    fn read_temperature(&mut self) -> SensorReading {
        self.thermistor.read()
    }

    fn button_pressed(&mut self) -> bool {
        // Active-low with pull-up: pressed reads LOW.
        !hw_init::gpio_read(pins::BUTTON_GPIO)
    }
}

// ── DialPort implementation ───────────────────────────────────

impl<T: DisplayTransport> DialPort for HardwareAdapter<T> {
    fn counter(&self) -> i32 {
        encoder::counter()
    }

    fn set_adjust_enabled(&mut self, enabled: bool) {
        encoder::set_adjust_enabled(enabled);
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl<T: DisplayTransport> ActuatorPort for HardwareAdapter<T> {
    fn set_relay(&mut self, energized: bool) {
        self.relay.set(energized);
    }

    fn relay_energized(&self) -> bool {
        self.relay.is_energized()
    }
}

// ── DisplayPort implementation ────────────────────────────────

impl<T: DisplayTransport> DisplayPort for HardwareAdapter<T> {
    fn set_decimals(&mut self, mask: u8) {
        if let Err(e) = self.display.set_decimals(mask) {
            warn!("display decimals write failed: {e}");
        }
    }

    fn write_payload(&mut self, payload: &str) {
        if let Err(e) = self.display.write_payload(payload) {
            warn!("display payload write failed: {e}");
        }
    }
}
