//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the logger (which goes to UART / USB-CDC in production). This is the
//! whole of the diagnostic channel: enable the logger and every key
//! state transition is mirrored as human-readable text; leave it off
//! and the controller runs identically.

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started(mode) => {
                info!("START | initial_mode={:?}", mode);
            }
            AppEvent::ModeChanged { from, to } => {
                info!("MODE  | {:?} -> {:?}", from, to);
            }
            AppEvent::SetpointChanged { counter, target_c } => {
                info!("DIAL  | counter={} target={:.2}C", counter, target_c);
            }
            AppEvent::RelayChanged {
                energized,
                current_c,
                target_c,
            } => {
                info!(
                    "RELAY | {} | T={:.2}C target={:.2}C",
                    if *energized { "ON" } else { "OFF" },
                    current_c,
                    target_c,
                );
            }
            AppEvent::SensorFault => {
                info!("FAULT | sensor reading invalid");
            }
            AppEvent::SensorRecovered => {
                info!("FAULT | sensor recovered");
            }
        }
    }
}
