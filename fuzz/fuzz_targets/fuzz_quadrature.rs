//! Fuzz target: quadrature decoder ISR path.
//!
//! Drives arbitrary pin-edge streams (including gate flips mid-stream)
//! into the decoder and asserts that the counter never moves by more
//! than one detent per edge and never moves at all while the gate is
//! closed.
//!
//! cargo fuzz run fuzz_quadrature

#![no_main]

use libfuzzer_sys::fuzz_target;
use thermodial::drivers::encoder;

fuzz_target!(|data: &[u8]| {
    encoder::set_adjust_enabled(true);
    encoder::seed_counter(0);

    let mut prev = encoder::counter();
    for byte in data {
        // Bits 0/1: pin levels. Bit 2: flip the Setup gate first.
        if byte & 0b100 != 0 {
            encoder::set_adjust_enabled(!encoder::adjust_enabled());
        }
        let gate_open = encoder::adjust_enabled();

        encoder::isr_update(byte & 0b10 != 0, byte & 0b01 != 0);

        let now = encoder::counter();
        let step = (now - prev).abs();
        assert!(step <= 1, "counter jumped by {step}");
        if !gate_open {
            assert_eq!(step, 0, "counter moved while the gate was closed");
        }
        prev = now;
    }
});
