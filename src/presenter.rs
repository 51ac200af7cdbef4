//! Display presenter — formats controller state into display frames.
//!
//! Pure logic: a [`DisplayFrame`] is rebuilt from scratch on every
//! refresh tick and handed to the display driver; nothing here touches
//! the transport. Payloads are fixed at 4 ASCII characters (the display
//! width) in a heapless buffer.

use core::fmt::Write;

use heapless::String;

/// Decimal mask for Run mode: point after digit 2, giving the
/// centi-degree payload two implied decimal places ("23.45").
pub const DECIMALS_RUN: u8 = 0b0000_0010;

/// Decimal mask for Setup mode: point after digit 4, marking the units
/// position of the whole-degree target ("T 24.").
pub const DECIMALS_SETUP: u8 = 0b0000_1000;

/// No indicators lit.
pub const DECIMALS_NONE: u8 = 0;

/// Fixed token shown while the sensor reading is invalid.
pub const FAULT_TOKEN: &str = " Err";

/// One formatted repaint: payload plus the indicator mask that goes with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayFrame {
    pub payload: String<4>,
    pub decimals: u8,
}

/// Run mode: current temperature as a right-justified 4-digit
/// centi-degree integer (23.456 °C → "2345").
pub fn run_frame(temp_c: f32) -> DisplayFrame {
    // Clamp to the displayable range; out-of-range temperatures pin to
    // the field limits rather than corrupting the payload width.
    let centi = ((temp_c * 100.0) as i32).clamp(-999, 9999);
    let mut payload = String::new();
    let _ = write!(payload, "{:>4}", centi); // cannot overflow after clamp
    DisplayFrame {
        payload,
        decimals: DECIMALS_RUN,
    }
}

/// Setup mode: literal "T " plus the integer-truncated target
/// right-justified in 2 characters (24.0 °C → "T 24").
pub fn setup_frame(target_c: f32) -> DisplayFrame {
    let whole = (target_c as i32).clamp(-9, 99);
    let mut payload = String::new();
    let _ = write!(payload, "T {:>2}", whole); // cannot overflow after clamp
    DisplayFrame {
        payload,
        decimals: DECIMALS_SETUP,
    }
}

/// Sensor-fault token, shown in Run mode until the sensor recovers.
pub fn fault_frame() -> DisplayFrame {
    let mut payload = String::new();
    let _ = payload.push_str(FAULT_TOKEN);
    DisplayFrame {
        payload,
        decimals: DECIMALS_NONE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_payload_is_centi_degrees() {
        assert_eq!(run_frame(23.456).payload, "2345");
        assert_eq!(run_frame(23.456).decimals, DECIMALS_RUN);
    }

    #[test]
    fn run_payload_is_right_justified() {
        assert_eq!(run_frame(5.0).payload, " 500");
        assert_eq!(run_frame(0.04).payload, "   4");
    }

    #[test]
    fn run_payload_handles_negative_and_clamps() {
        assert_eq!(run_frame(-5.0).payload, "-500");
        assert_eq!(run_frame(-42.0).payload, "-999");
        assert_eq!(run_frame(123.0).payload, "9999");
    }

    #[test]
    fn setup_payload_is_prefixed_whole_degrees() {
        assert_eq!(setup_frame(24.0).payload, "T 24");
        assert_eq!(setup_frame(24.0).decimals, DECIMALS_SETUP);
    }

    #[test]
    fn setup_payload_truncates_toward_zero() {
        assert_eq!(setup_frame(24.75).payload, "T 24");
        assert_eq!(setup_frame(-1.5).payload, "T -1");
    }

    #[test]
    fn setup_payload_clamps_to_field() {
        assert_eq!(setup_frame(150.0).payload, "T 99");
        assert_eq!(setup_frame(-40.0).payload, "T -9");
    }

    #[test]
    fn fault_frame_is_fixed_token_without_decimals() {
        let f = fault_frame();
        assert_eq!(f.payload, FAULT_TOKEN);
        assert_eq!(f.decimals, DECIMALS_NONE);
    }

    #[test]
    fn every_frame_is_exactly_display_width() {
        for f in [
            run_frame(23.456),
            run_frame(-42.0),
            setup_frame(24.0),
            setup_frame(-40.0),
            fault_frame(),
        ] {
            assert_eq!(f.payload.len(), 4);
        }
    }
}
