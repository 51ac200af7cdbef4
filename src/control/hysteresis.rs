//! Bang-bang relay controller with hysteresis
//!
//! Simple on/off control with a dead-band for temperature regulation.
//! The switching threshold depends on the relay's current state, so the
//! relay state itself is the controller's memory — no separate
//! "last decision" field exists.

/// Hysteresis relay controller.
///
/// With the relay energized the cut-off threshold sits at
/// `target + cushion/2`; de-energized, the cut-in threshold sits at
/// `target - cushion/2`. Temperatures strictly inside the band never
/// change the relay state on their own, which prevents relay chatter
/// around the setpoint.
pub struct HysteresisController {
    half_cushion_c: f32,
}

impl HysteresisController {
    /// `cushion_c` is the total dead-band span, split evenly above and
    /// below the target.
    pub fn new(cushion_c: f32) -> Self {
        Self {
            half_cushion_c: cushion_c / 2.0,
        }
    }

    /// Decide the next relay state.
    ///
    /// `energized` is the relay's current state, read back from the
    /// actuator — it selects which of the two thresholds applies.
    pub fn decide(&self, current_c: f32, target_c: f32, energized: bool) -> bool {
        let threshold_c = if energized {
            // Keep heating until overshoot past the cushion.
            target_c + self.half_cushion_c
        } else {
            // Stay off until the temperature has dropped below the cushion.
            target_c - self.half_cushion_c
        };
        current_c <= threshold_c
    }
}
