//! ISR-driven quadrature decoder for the setpoint dial.
//!
//! ## Hardware
//!
//! Two out-of-phase encoder channels with pull-ups, both configured as
//! any-edge interrupt sources. The ISR samples both pin levels, packs
//! them into a 2-bit pair, and classifies the transition from the
//! previous pair against a fixed quadrature table.
//!
//! ## Decode table
//!
//! Transition code = `(previous_pair << 2) | current_pair`, channel A in
//! the high bit of each pair.
//!
//! | Codes                    | Effect      |
//! |--------------------------|-------------|
//! | 1101, 0100, 0010, 1011   | counter + 1 |
//! | 1110, 0111, 0001, 1000   | counter − 1 |
//! | anything else            | ignored     |
//!
//! Non-table codes are contact bounce or a skipped sample and never move
//! the counter, so a detent can change it by exactly ±1 and nothing more.
//!
//! ## Setup gate
//!
//! The decoder only performs work while setpoint adjustment is enabled
//! (Setup mode). Outside Setup the edge is ignored entirely — including
//! the previous-pair bookkeeping — so dial movement in Run mode is lost
//! rather than accumulated. The first edge after re-entering Setup may
//! therefore form a non-table code against the stale pair; it is dropped
//! like any other invalid transition and decode resumes on the next edge.
//!
//! All shared state is atomic and lock-free; everything here is safe to
//! call from interrupt context.

use core::sync::atomic::{AtomicBool, AtomicI32, AtomicU8, Ordering};

/// Valid clockwise transition codes.
const FORWARD_CODES: [u8; 4] = [0b1101, 0b0100, 0b0010, 0b1011];
/// Valid counter-clockwise transition codes.
const BACKWARD_CODES: [u8; 4] = [0b1110, 0b0111, 0b0001, 0b1000];

/// Previous 2-bit pin pair. Written only by the ISR.
static PREV_PAIR: AtomicU8 = AtomicU8::new(0);
/// Signed detent counter. Written by the ISR, read by the main loop.
static COUNTER: AtomicI32 = AtomicI32::new(0);
/// Setup-mode gate. Written by the main loop, read by the ISR.
static ADJUST_ENABLED: AtomicBool = AtomicBool::new(false);

/// ISR entry point — call on every edge of either encoder channel with
/// the sampled pin levels.
pub fn isr_update(pin_a_high: bool, pin_b_high: bool) {
    if !ADJUST_ENABLED.load(Ordering::Acquire) {
        // Run mode: the edge is dropped, previous-pair state untouched.
        return;
    }

    let current = (u8::from(pin_a_high) << 1) | u8::from(pin_b_high);
    let code = (PREV_PAIR.load(Ordering::Relaxed) << 2) | current;

    if FORWARD_CODES.contains(&code) {
        COUNTER.fetch_add(1, Ordering::Release);
    } else if BACKWARD_CODES.contains(&code) {
        COUNTER.fetch_sub(1, Ordering::Release);
    }

    PREV_PAIR.store(current, Ordering::Relaxed);
}

/// Current detent counter. Safe to read from the main loop at any time;
/// the ISR may run between any two reads.
pub fn counter() -> i32 {
    COUNTER.load(Ordering::Acquire)
}

/// Seed the counter (startup default). Main-loop context only.
pub fn seed_counter(value: i32) {
    COUNTER.store(value, Ordering::Release);
}

/// Enable or disable setpoint adjustment (the Setup-mode gate).
pub fn set_adjust_enabled(enabled: bool) {
    ADJUST_ENABLED.store(enabled, Ordering::Release);
}

/// Whether the decoder currently accepts edges.
pub fn adjust_enabled() -> bool {
    ADJUST_ENABLED.load(Ordering::Acquire)
}
