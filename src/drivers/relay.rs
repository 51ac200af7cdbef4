//! Heater relay driver.
//!
//! Single digital output, HIGH = energized (heating element on).
//!
//! The driver keeps an explicit `energized` field as the authoritative
//! state rather than reading the pin back, so the hysteresis dead-band
//! reference works identically on targets without GPIO readback (host
//! simulation, tests).
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the relay GPIO via hw_init helpers.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;
use crate::pins;

pub struct RelayDriver {
    energized: bool,
}

impl RelayDriver {
    /// Construct with the relay forced de-energized.
    pub fn new() -> Self {
        hw_init::gpio_write(pins::RELAY_GPIO, false);
        Self { energized: false }
    }

    /// Command the relay. The pin is rewritten even when the state is
    /// unchanged; the GPIO write is idempotent.
    pub fn set(&mut self, energized: bool) {
        hw_init::gpio_write(pins::RELAY_GPIO, energized);
        self.energized = energized;
    }

    pub fn de_energize(&mut self) {
        self.set(false);
    }

    pub fn is_energized(&self) -> bool {
        self.energized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_de_energized() {
        let relay = RelayDriver::new();
        assert!(!relay.is_energized());
    }

    #[test]
    fn set_and_readback() {
        let mut relay = RelayDriver::new();
        relay.set(true);
        assert!(relay.is_energized());
        relay.de_energize();
        assert!(!relay.is_energized());
    }
}
