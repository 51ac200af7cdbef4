//! Shared mutable context threaded through every FSM handler.
//!
//! `ControlContext` is the single struct that mode handlers read from
//! and write to: the latest sensor reading, the derived target, the
//! pending toggle request, display-refresh forcing, and the decoder's
//! Setup gate. Think of it as the "blackboard" between the service and
//! the mode state machine.

use crate::config::SystemConfig;

// ---------------------------------------------------------------------------
// Sensor reading
// ---------------------------------------------------------------------------

/// One ambient-temperature sample. An invalid reading carries the NaN
/// marker the sensor protocol uses; consumers must check `valid` before
/// trusting `celsius`.
#[derive(Debug, Clone, Copy)]
pub struct SensorReading {
    pub celsius: f32,
    pub valid: bool,
}

impl SensorReading {
    /// The in-band invalid marker.
    pub fn invalid() -> Self {
        Self {
            celsius: f32::NAN,
            valid: false,
        }
    }
}

impl Default for SensorReading {
    fn default() -> Self {
        Self::invalid()
    }
}

// ---------------------------------------------------------------------------
// ControlContext
// ---------------------------------------------------------------------------

/// The shared context passed to every mode handler function.
pub struct ControlContext {
    // -- Timing --
    /// Ticks elapsed since the current mode was entered.
    pub ticks_in_state: u64,
    /// Monotonic total tick count.
    pub total_ticks: u64,

    // -- Sensor data --
    /// Latest reading. Refreshed once per Run-mode iteration.
    pub sensor: SensorReading,
    /// True while the latest Run-mode reading was invalid.
    pub sensor_fault: bool,

    // -- Setpoint --
    /// Target temperature derived from the dial counter, refreshed
    /// every tick before the handlers run.
    pub target_c: f32,

    // -- Mode machinery --
    /// A debounced button press was seen this tick; consumed by the
    /// mode handlers to request a transition.
    pub toggle_pending: bool,
    /// Repaint the display this tick regardless of the refresh cadence.
    /// Set by mode transitions, consumed by the service.
    pub refresh_forced: bool,
    /// Whether the quadrature decoder should accept edges. Written by
    /// the mode on_enter hooks, pushed to the dial port by the service.
    pub setup_gate: bool,

    // -- Configuration --
    /// System configuration (tunable parameters).
    pub config: SystemConfig,
}

impl ControlContext {
    /// Create a new context with the given configuration.
    pub fn new(config: SystemConfig) -> Self {
        let target_c = config.startup_counter as f32 * config.setpoint_sensitivity_c;
        Self {
            ticks_in_state: 0,
            total_ticks: 0,
            sensor: SensorReading::invalid(),
            sensor_fault: false,
            target_c,
            toggle_pending: false,
            refresh_forced: false,
            setup_gate: false,
            config,
        }
    }
}
