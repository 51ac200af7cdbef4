//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (sensor, dial, relay, display, event sinks) implement
//! these traits. The [`AppService`](super::service::AppService) consumes
//! them via generics, so the domain core never touches hardware directly.

use crate::fsm::context::SensorReading;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this to obtain input state.
pub trait SensorPort {
    /// Take one ambient-temperature sample. An invalid reading is
    /// reported in-band (`valid == false`), never as a panic or error.
    fn read_temperature(&mut self) -> SensorReading;

    /// Current button state, active-low already translated:
    /// `true` = pressed.
    fn button_pressed(&mut self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Dial port (driven adapter: encoder ↔ domain)
// ───────────────────────────────────────────────────────────────

/// The rotary dial: a detent counter mutated asynchronously by the
/// decoder ISR, plus the gate that routes the dial to the setpoint.
pub trait DialPort {
    /// Current detent counter. May change between any two reads — the
    /// ISR preempts the main loop.
    fn counter(&self) -> i32;

    /// Open (`true`, Setup mode) or close (`false`, Run mode) the
    /// decoder gate. While closed, dial edges are dropped entirely.
    fn set_adjust_enabled(&mut self, enabled: bool);
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → relay)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command the heater relay.
pub trait ActuatorPort {
    /// Command the relay coil. `true` = energized (heating).
    fn set_relay(&mut self, energized: bool);

    /// The relay's commanded state, read back by the hysteresis
    /// controller as the dead-band reference.
    fn relay_energized(&self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Display port (driven adapter: domain → seven-segment display)
// ───────────────────────────────────────────────────────────────

/// Write-side port for display repaints. Implementations absorb
/// transport failures (a dead display must not stop relay control).
pub trait DisplayPort {
    /// Set the decimal-point / indicator mask for the next payload.
    fn set_decimals(&mut self, mask: u8);

    /// Write a 4-character ASCII payload.
    fn write_payload(&mut self, payload: &str);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → diagnostics)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port. Adapters decide where they go (serial log in
/// production); the channel is diagnostic only and never required for
/// correctness.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
