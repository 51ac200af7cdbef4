//! GPIO / peripheral pin assignments for the ThermoDial main board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers. Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Heater relay
// ---------------------------------------------------------------------------

/// Digital output driving the heater relay coil. HIGH = energized (heating).
/// Driven LOW before anything else during peripheral init.
pub const RELAY_GPIO: i32 = 2;

// ---------------------------------------------------------------------------
// Rotary encoder + push-button
// ---------------------------------------------------------------------------

/// Encoder channel A — input with pull-up, any-edge interrupt source.
pub const ENCODER_A_GPIO: i32 = 5;
/// Encoder channel B — input with pull-up, any-edge interrupt source.
pub const ENCODER_B_GPIO: i32 = 6;

/// Momentary push-button on the encoder shaft, active-low with pull-up.
/// Polled from the main loop (not interrupt-driven).
pub const BUTTON_GPIO: i32 = 7;

// ---------------------------------------------------------------------------
// Temperature sensor — Analog (ADC1)
// ---------------------------------------------------------------------------

/// NTC thermistor — 10 kΩ @ 25 °C, voltage-divider to ADC.
/// ADC1 channel 8 (GPIO 9 on ESP32-S3).
pub const TEMP_ADC_GPIO: i32 = 9;

// ---------------------------------------------------------------------------
// Seven-segment serial display (UART, TX-only)
// ---------------------------------------------------------------------------

/// UART TX line into the display's RX pin. The display never talks back.
pub const DISPLAY_UART_TX_GPIO: i32 = 17;

/// UART controller number used for the display link.
pub const DISPLAY_UART_NUM: u8 = 1;

/// Display link baud rate (the display's factory default).
pub const DISPLAY_UART_BAUD: u32 = 9600;
