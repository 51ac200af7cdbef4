//! Concrete mode handler functions and table builder.
//!
//! Each mode is defined by plain `fn` pointers — no closures, no dynamic
//! dispatch, no heap. This is the classic embedded C FSM pattern
//! expressed in safe Rust.
//!
//! ```text
//!  RUN ──[button press]──▶ SETUP
//!   ▲                        │
//!   └─────[button press]─────┘
//! ```
//!
//! Entering a mode forces an immediate display repaint and routes the
//! dial: the decoder gate opens in Setup and closes in Run. While the
//! gate is closed, dial edges are dropped, so the setpoint cannot
//! drift from stray rotation while the user is viewing the temperature.

use super::context::ControlContext;
use super::{ModeId, StateDescriptor};
use log::info;

// ═══════════════════════════════════════════════════════════════════════════
//  Table builder
// ═══════════════════════════════════════════════════════════════════════════

/// Build the static state table. Called once at startup.
pub fn build_state_table() -> [StateDescriptor; ModeId::COUNT] {
    [
        // Index 0 — Run
        StateDescriptor {
            id: ModeId::Run,
            name: "Run",
            on_enter: Some(run_enter),
            on_exit: None,
            on_update: run_update,
        },
        // Index 1 — Setup
        StateDescriptor {
            id: ModeId::Setup,
            name: "Setup",
            on_enter: Some(setup_enter),
            on_exit: Some(setup_exit),
            on_update: setup_update,
        },
    ]
}

// ═══════════════════════════════════════════════════════════════════════════
//  RUN mode — display measured temperature, drive the relay
// ═══════════════════════════════════════════════════════════════════════════

fn run_enter(ctx: &mut ControlContext) {
    ctx.setup_gate = false;
    ctx.refresh_forced = true;
    info!("RUN: showing measured temperature, relay control active");
}

fn run_update(ctx: &mut ControlContext) -> Option<ModeId> {
    if ctx.toggle_pending {
        ctx.toggle_pending = false;
        return Some(ModeId::Setup);
    }
    None
}

// ═══════════════════════════════════════════════════════════════════════════
//  SETUP mode — display the target, route the dial to the setpoint
// ═══════════════════════════════════════════════════════════════════════════

fn setup_enter(ctx: &mut ControlContext) {
    ctx.setup_gate = true;
    ctx.refresh_forced = true;
    info!("SETUP: adjusting target, currently {:.2} C", ctx.target_c);
}

fn setup_exit(ctx: &mut ControlContext) {
    info!("SETUP: target locked at {:.2} C", ctx.target_c);
}

fn setup_update(ctx: &mut ControlContext) -> Option<ModeId> {
    if ctx.toggle_pending {
        ctx.toggle_pending = false;
        return Some(ModeId::Run);
    }
    None
}
