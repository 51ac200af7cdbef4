//! Serial seven-segment display driver (4 digits, byte-command protocol).
//!
//! The display listens on a one-way serial link and understands three
//! command sequences plus raw ASCII digit payloads:
//!
//! | Sequence            | Effect                              |
//! |---------------------|-------------------------------------|
//! | `0x76`              | clear display, cursor to digit 1    |
//! | `0x7A` `level`      | brightness, 0–255                   |
//! | `0x77` `mask`       | decimal/indicator bitmask           |
//! | 4 ASCII chars       | digit payload, written left to right|
//!
//! The exact byte values are fixed by the hardware — see the unit tests,
//! which pin them down against a capture transport.
//!
//! The driver is generic over [`DisplayTransport`] so the same code runs
//! against the real UART on target and a capture buffer in tests.

use crate::error::DisplayError;

pub const CMD_CLEAR: u8 = 0x76;
pub const CMD_BRIGHTNESS: u8 = 0x7A;
pub const CMD_DECIMALS: u8 = 0x77;

/// One-way byte stream into the display.
pub trait DisplayTransport {
    fn write(&mut self, bytes: &[u8]) -> Result<(), DisplayError>;
}

/// UART transport — TX-only link on the pin configured in `pins`.
///
/// ## Dual-target design
///
/// On ESP-IDF: writes through the UART driver installed by hw_init.
/// On host/test: writes are discarded.
pub struct UartTransport;

impl UartTransport {
    pub fn new() -> Self {
        Self
    }
}

impl DisplayTransport for UartTransport {
    fn write(&mut self, bytes: &[u8]) -> Result<(), DisplayError> {
        if crate::drivers::hw_init::uart_write(crate::pins::DISPLAY_UART_NUM, bytes) {
            Ok(())
        } else {
            Err(DisplayError::TransportWriteFailed)
        }
    }
}

/// Driver for the serial seven-segment display.
pub struct SerialDisplay<T: DisplayTransport> {
    transport: T,
}

impl<T: DisplayTransport> SerialDisplay<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Clear all digits and reset the cursor.
    pub fn clear(&mut self) -> Result<(), DisplayError> {
        self.transport.write(&[CMD_CLEAR])
    }

    /// Set display brightness (0 = dimmest, 255 = brightest).
    pub fn set_brightness(&mut self, level: u8) -> Result<(), DisplayError> {
        self.transport.write(&[CMD_BRIGHTNESS, level])
    }

    /// Set the decimal-point / indicator mask.
    ///
    /// Bit layout: bit 5 apostrophe, bit 4 colon, bits 3..0 the decimal
    /// points after digits 4, 3, 2, 1 respectively.
    pub fn set_decimals(&mut self, mask: u8) -> Result<(), DisplayError> {
        self.transport.write(&[CMD_DECIMALS, mask])
    }

    /// Write a 4-character ASCII payload.
    pub fn write_payload(&mut self, payload: &str) -> Result<(), DisplayError> {
        debug_assert_eq!(payload.len(), 4, "display payload must be 4 chars");
        self.transport.write(payload.as_bytes())
    }
}
