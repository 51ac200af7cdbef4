//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the business rules for the ThermoDial system:
//! mode orchestration, hysteresis relay control, setpoint derivation,
//! and display-refresh cadence. All interaction with hardware happens
//! through **port traits** defined in [`ports`], keeping this layer
//! fully testable without real peripherals.

pub mod events;
pub mod ports;
pub mod service;
