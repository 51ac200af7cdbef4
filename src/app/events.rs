//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) mirrors its key state
//! transitions through the [`EventSink`](super::ports::EventSink) port.
//! This is the diagnostic channel: human-readable when routed to the
//! serial log, absent in normal operation, never load-bearing.

use crate::fsm::ModeId;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppEvent {
    /// The service has started (carries the initial mode).
    Started(ModeId),

    /// The operating mode toggled on a button press.
    ModeChanged { from: ModeId, to: ModeId },

    /// The dial moved: new counter and the target derived from it.
    SetpointChanged { counter: i32, target_c: f32 },

    /// The relay switched state.
    RelayChanged {
        energized: bool,
        current_c: f32,
        target_c: f32,
    },

    /// The sensor returned an invalid reading; relay control is
    /// suspended until it recovers.
    SensorFault,

    /// The sensor recovered after one or more invalid readings.
    SensorRecovered,
}
