//! Function-pointer finite state machine engine for the operating mode.
//!
//! Classic embedded FSM pattern:
//!
//! ```text
//! ┌────────────────────────────────────────────────────┐
//! │  StateTable                                        │
//! │  ┌────────┬──────────┬──────────┬────────────────┐ │
//! │  │ ModeId │ on_enter │ on_exit  │ on_update      │ │
//! │  ├────────┼──────────┼──────────┼────────────────┤ │
//! │  │ Run    │ fn(ctx)  │ fn(ctx)  │ fn(ctx)->Opt<> │ │
//! │  │ Setup  │ fn(ctx)  │ fn(ctx)  │ fn(ctx)->Opt<> │ │
//! │  └────────┴──────────┴──────────┴────────────────┘ │
//! └────────────────────────────────────────────────────┘
//! ```
//!
//! Each tick the engine calls `on_update` for the **current** mode.
//! If it returns `Some(next_id)`, the engine runs `on_exit` for the
//! current mode, then `on_enter` for the next, and updates the current
//! pointer. All functions receive `&mut ControlContext`.

pub mod context;
pub mod states;

use context::ControlContext;
use log::info;

// ---------------------------------------------------------------------------
// Mode identity
// ---------------------------------------------------------------------------

/// The two operating modes. `Run` displays the measured temperature and
/// drives the relay; `Setup` displays the target and routes the dial to
/// the setpoint.
/// Must stay in sync with the state table built in [`states::build_state_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ModeId {
    Run = 0,
    Setup = 1,
}

impl ModeId {
    /// Total number of modes — used to size the table array.
    pub const COUNT: usize = 2;

    /// Convert a `u8` index back to `ModeId`. Panics on out-of-range in
    /// debug builds; returns `Run` in release (safe fallback: relay
    /// control keeps operating).
    pub fn from_index(idx: usize) -> Self {
        match idx {
            0 => Self::Run,
            1 => Self::Setup,
            _ => {
                debug_assert!(false, "invalid mode index: {idx}");
                Self::Run
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Function-pointer type aliases
// ---------------------------------------------------------------------------

/// Signature for `on_enter` and `on_exit` actions.
/// These run exactly once on each mode transition.
pub type StateActionFn = fn(&mut ControlContext);

/// Signature for the per-tick update handler.
/// Returns `Some(next)` to trigger a transition, or `None` to stay.
pub type StateUpdateFn = fn(&mut ControlContext) -> Option<ModeId>;

// ---------------------------------------------------------------------------
// State descriptor (one row in the table)
// ---------------------------------------------------------------------------

/// Static descriptor for a single mode.
/// Stored in a fixed-size array — no heap, no `dyn`.
pub struct StateDescriptor {
    pub id: ModeId,
    pub name: &'static str,
    pub on_enter: Option<StateActionFn>,
    pub on_exit: Option<StateActionFn>,
    pub on_update: StateUpdateFn,
}

// ---------------------------------------------------------------------------
// FSM engine
// ---------------------------------------------------------------------------

/// The mode state machine engine.
///
/// Owns the state table (array of [`StateDescriptor`]) and is driven
/// with a mutable [`ControlContext`] threaded through every handler.
pub struct Fsm {
    /// Fixed-size table indexed by `ModeId as usize`.
    table: [StateDescriptor; ModeId::COUNT],
    /// Index of the currently active mode.
    current: usize,
    /// Monotonically increasing tick counter (wraps at u64::MAX).
    tick_count: u64,
    /// Tick at which the current mode was entered.
    state_entry_tick: u64,
}

impl Fsm {
    /// Construct a new FSM with the given state table, starting in `initial`.
    pub fn new(table: [StateDescriptor; ModeId::COUNT], initial: ModeId) -> Self {
        Self {
            table,
            current: initial as usize,
            tick_count: 0,
            state_entry_tick: 0,
        }
    }

    /// Run the initial `on_enter` for the starting mode.
    /// Call once after construction, before the first `tick()`.
    pub fn start(&mut self, ctx: &mut ControlContext) {
        info!("FSM starting in mode: {}", self.table[self.current].name);
        if let Some(enter) = self.table[self.current].on_enter {
            enter(ctx);
        }
    }

    /// Advance the FSM by one tick.
    ///
    /// 1. Call `on_update` for the current mode.
    /// 2. If it returns `Some(next)`, execute the transition:
    ///    `on_exit(current)` → update pointer → `on_enter(next)`.
    pub fn tick(&mut self, ctx: &mut ControlContext) {
        self.tick_count += 1;
        ctx.ticks_in_state = self.tick_count - self.state_entry_tick;
        ctx.total_ticks = self.tick_count;

        let next = (self.table[self.current].on_update)(ctx);

        if let Some(next_id) = next {
            self.transition(next_id, ctx);
        }
    }

    /// The current mode's identity.
    pub fn current_state(&self) -> ModeId {
        ModeId::from_index(self.current)
    }

    /// How many ticks the FSM has been in the current mode.
    pub fn ticks_in_current_state(&self) -> u64 {
        self.tick_count - self.state_entry_tick
    }

    // -----------------------------------------------------------------------
    // Internal
    // -----------------------------------------------------------------------

    fn transition(&mut self, next_id: ModeId, ctx: &mut ControlContext) {
        let next_idx = next_id as usize;

        info!(
            "FSM transition: {} -> {}",
            self.table[self.current].name, self.table[next_idx].name
        );

        // Exit current mode
        if let Some(exit) = self.table[self.current].on_exit {
            exit(ctx);
        }

        // Update pointer and timing
        self.current = next_idx;
        self.state_entry_tick = self.tick_count;
        ctx.ticks_in_state = 0;

        // Enter new mode
        if let Some(enter) = self.table[self.current].on_enter {
            enter(ctx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::context::ControlContext;
    use super::*;
    use crate::config::SystemConfig;

    fn make_ctx() -> ControlContext {
        ControlContext::new(SystemConfig::default())
    }

    fn make_fsm() -> Fsm {
        Fsm::new(states::build_state_table(), ModeId::Run)
    }

    #[test]
    fn starts_in_run() {
        let fsm = make_fsm();
        assert_eq!(fsm.current_state(), ModeId::Run);
    }

    #[test]
    fn start_closes_setup_gate_and_forces_refresh() {
        let mut fsm = make_fsm();
        let mut ctx = make_ctx();
        ctx.setup_gate = true;
        fsm.start(&mut ctx);
        assert!(!ctx.setup_gate);
        assert!(ctx.refresh_forced);
    }

    #[test]
    fn tick_increments_counter() {
        let mut fsm = make_fsm();
        let mut ctx = make_ctx();
        fsm.start(&mut ctx);
        fsm.tick(&mut ctx);
        assert_eq!(fsm.ticks_in_current_state(), 1);
        fsm.tick(&mut ctx);
        assert_eq!(fsm.ticks_in_current_state(), 2);
    }

    #[test]
    fn toggle_moves_run_to_setup_and_opens_gate() {
        let mut fsm = make_fsm();
        let mut ctx = make_ctx();
        fsm.start(&mut ctx);

        ctx.toggle_pending = true;
        fsm.tick(&mut ctx);
        assert_eq!(fsm.current_state(), ModeId::Setup);
        assert!(ctx.setup_gate);
        assert!(!ctx.toggle_pending, "toggle request must be consumed");
    }

    #[test]
    fn toggle_moves_setup_back_to_run() {
        let mut fsm = make_fsm();
        let mut ctx = make_ctx();
        fsm.start(&mut ctx);

        ctx.toggle_pending = true;
        fsm.tick(&mut ctx);
        assert_eq!(fsm.current_state(), ModeId::Setup);

        ctx.toggle_pending = true;
        fsm.tick(&mut ctx);
        assert_eq!(fsm.current_state(), ModeId::Run);
        assert!(!ctx.setup_gate);
    }

    #[test]
    fn no_transition_without_toggle() {
        let mut fsm = make_fsm();
        let mut ctx = make_ctx();
        fsm.start(&mut ctx);
        for _ in 0..10 {
            fsm.tick(&mut ctx);
        }
        assert_eq!(fsm.current_state(), ModeId::Run);
    }

    #[test]
    fn transition_forces_display_refresh() {
        let mut fsm = make_fsm();
        let mut ctx = make_ctx();
        fsm.start(&mut ctx);
        ctx.refresh_forced = false;

        ctx.toggle_pending = true;
        fsm.tick(&mut ctx);
        assert!(ctx.refresh_forced);
    }

    #[test]
    fn ticks_in_state_reset_on_transition() {
        let mut fsm = make_fsm();
        let mut ctx = make_ctx();
        fsm.start(&mut ctx);
        fsm.tick(&mut ctx);
        fsm.tick(&mut ctx);

        ctx.toggle_pending = true;
        fsm.tick(&mut ctx);
        assert_eq!(fsm.ticks_in_current_state(), 0);
    }

    #[test]
    fn mode_id_from_index_roundtrip() {
        for i in 0..ModeId::COUNT {
            let id = ModeId::from_index(i);
            assert_eq!(id as usize, i);
        }
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn mode_id_from_invalid_index_returns_run() {
        let id = ModeId::from_index(99);
        assert_eq!(id, ModeId::Run);
    }
}
