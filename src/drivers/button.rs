//! Guarded debounce for the mode-toggle push-button.
//!
//! ## Hardware
//!
//! Active-low momentary switch with a pull-up, sampled from the main loop
//! every iteration (the level arrives through `SensorPort`).
//!
//! ## Behaviour
//!
//! A sampled press fires one [`ButtonEvent::ModeToggle`], then opens a
//! guard interval during which further samples are ignored — mechanical
//! bounce and an over-long thumb both collapse into a single toggle. A
//! button still held when the guard expires fires again, matching the
//! panel's original feel (hold to cycle modes once per second).
//!
//! The guard is a deadline against the injected monotonic clock, not a
//! sleep, so the control loop keeps running and tests can drive time.

/// Events emitted after debounce classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    ModeToggle,
}

pub struct ButtonDebouncer {
    guard_ms: u32,
    guard_active: bool,
    guard_started_ms: u32,
}

impl ButtonDebouncer {
    pub fn new(guard_ms: u32) -> Self {
        Self {
            guard_ms,
            guard_active: false,
            guard_started_ms: 0,
        }
    }

    /// Feed one sample. `pressed` is the debounce-raw button level
    /// (already translated from active-low), `now_ms` the current
    /// monotonic time.
    pub fn poll(&mut self, pressed: bool, now_ms: u32) -> Option<ButtonEvent> {
        if !pressed {
            return None;
        }
        if self.guard_active && now_ms.wrapping_sub(self.guard_started_ms) < self.guard_ms {
            return None;
        }
        self.guard_active = true;
        self.guard_started_ms = now_ms;
        Some(ButtonEvent::ModeToggle)
    }
}
