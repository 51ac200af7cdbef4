//! System configuration parameters
//!
//! All tunable parameters for the ThermoDial controller. Values are
//! compiled-in defaults; nothing is persisted across restarts.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Setpoint ---
    /// Degrees Celsius per encoder count.
    pub setpoint_sensitivity_c: f32,
    /// Encoder counter value seeded at startup (restart resets to this).
    pub startup_counter: i32,

    // --- Relay control ---
    /// Total dead-band span (°C), split evenly above and below the target.
    pub cushion_c: f32,

    // --- Display ---
    /// Minimum time between display repaints (milliseconds).
    pub display_refresh_ms: u32,
    /// Display brightness, 0–255, applied once at startup.
    pub display_brightness: u8,

    // --- Timing ---
    /// Guard interval after a mode toggle during which further button
    /// presses are ignored (milliseconds).
    pub mode_toggle_guard_ms: u32,
    /// One-shot settle delay before the control loop starts (milliseconds).
    pub startup_settle_ms: u32,
    /// Main loop pacing interval (milliseconds).
    pub control_loop_interval_ms: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Setpoint: 0.25 °C per detent, seeded at 100 counts = 25.0 °C
            setpoint_sensitivity_c: 0.25,
            startup_counter: 100,

            // Relay: ±1.0 °C around the target
            cushion_c: 2.0,

            // Display
            display_refresh_ms: 100,
            display_brightness: 255,

            // Timing
            mode_toggle_guard_ms: 1000,
            startup_settle_ms: 3000,
            control_loop_interval_ms: 10,
        }
    }
}

impl SystemConfig {
    /// Validate parameter ranges before the service is constructed.
    /// Rejects values that would wedge the control loop rather than
    /// silently clamping them.
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.setpoint_sensitivity_c.is_finite() && self.setpoint_sensitivity_c > 0.0) {
            return Err(Error::Config("setpoint sensitivity must be positive"));
        }
        if !(self.cushion_c.is_finite() && self.cushion_c > 0.0) {
            return Err(Error::Config("cushion must be positive"));
        }
        if self.display_refresh_ms == 0 {
            return Err(Error::Config("display refresh interval must be non-zero"));
        }
        if self.mode_toggle_guard_ms == 0 {
            return Err(Error::Config("mode toggle guard must be non-zero"));
        }
        if self.control_loop_interval_ms == 0
            || self.control_loop_interval_ms > self.display_refresh_ms
        {
            return Err(Error::Config(
                "loop interval must be non-zero and no slower than the refresh cadence",
            ));
        }
        Ok(())
    }
}
