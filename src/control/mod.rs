//! Control algorithms — the pure decision logic of the thermostat.
//!
//! Nothing in here touches hardware: [`hysteresis`] decides the relay
//! state from temperatures, [`setpoint`] maps encoder counts to a target
//! temperature. Both are exercised every control tick by the app service.

pub mod hysteresis;
pub mod setpoint;
