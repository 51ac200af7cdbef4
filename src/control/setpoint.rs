//! Setpoint model — encoder counts to target temperature.
//!
//! The target is derived lazily on every read rather than stored as a
//! shared float: the encoder ISR only ever touches an atomic integer
//! counter, and this model converts it in the main-loop context.

/// Maps the encoder counter to a target temperature using a fixed
/// sensitivity scale.
pub struct SetpointModel {
    sensitivity_c: f32,
}

impl SetpointModel {
    /// `sensitivity_c` is degrees Celsius per encoder count.
    pub fn new(sensitivity_c: f32) -> Self {
        Self { sensitivity_c }
    }

    /// Target temperature for the given counter value.
    pub fn target_celsius(&self, counter: i32) -> f32 {
        counter as f32 * self.sensitivity_c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_counter_is_zero_degrees() {
        let m = SetpointModel::new(0.25);
        assert_eq!(m.target_celsius(0), 0.0);
    }

    #[test]
    fn startup_default_counter_is_25_degrees() {
        let m = SetpointModel::new(0.25);
        assert_eq!(m.target_celsius(100), 25.0);
    }

    #[test]
    fn counter_scales_linearly_in_both_directions() {
        let m = SetpointModel::new(0.25);
        assert_eq!(m.target_celsius(1), 0.25);
        assert_eq!(m.target_celsius(-4), -1.0);
        assert_eq!(m.target_celsius(88), 22.0);
    }
}
