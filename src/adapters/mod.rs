//! Adapters — concrete implementations of the domain port traits.
//!
//! The outer ring of the hexagon: [`hardware`] bridges the real
//! peripherals to the ports, [`log_sink`] renders the diagnostic event
//! stream, [`time`] provides the injectable monotonic clock.

pub mod hardware;
pub mod log_sink;
pub mod time;
