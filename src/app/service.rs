//! Application service — the hexagonal core.
//!
//! [`AppService`] owns the mode FSM, the hysteresis controller, the
//! setpoint model, the button debouncer, and the display-refresh
//! cadence. It exposes a clean, hardware-agnostic API. All I/O flows
//! through port traits injected at call sites, making the entire
//! control loop testable with mock adapters.
//!
//! ```text
//!  SensorPort ──▶ ┌────────────────────────────┐ ──▶ EventSink
//!  DialPort   ──▶ │         AppService         │ ──▶ ActuatorPort
//!                 │  FSM · Hysteresis · Dial   │ ──▶ DisplayPort
//!                 └────────────────────────────┘
//! ```

use crate::config::SystemConfig;
use crate::control::hysteresis::HysteresisController;
use crate::control::setpoint::SetpointModel;
use crate::drivers::button::ButtonDebouncer;
use crate::fsm::context::ControlContext;
use crate::fsm::states::build_state_table;
use crate::fsm::{Fsm, ModeId};
use crate::presenter;

use super::events::AppEvent;
use super::ports::{ActuatorPort, DialPort, DisplayPort, EventSink, SensorPort};

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates one full control iteration per
/// [`tick`](Self::tick): button → mode FSM → setpoint → sensor → relay
/// → display refresh.
pub struct AppService {
    fsm: Fsm,
    ctx: ControlContext,
    /// Relay on/off decision with dead-band.
    controller: HysteresisController,
    /// Counter-to-temperature mapping.
    setpoint: SetpointModel,
    /// Mode-toggle debounce with guard interval.
    button: ButtonDebouncer,
    /// Timestamp of the last display repaint.
    last_refresh_ms: u32,
    /// Dial counter seen on the previous tick (for change events).
    last_counter: i32,
    tick_count: u64,
}

impl AppService {
    /// Construct the service from configuration.
    ///
    /// Does **not** start the FSM — call [`start`](Self::start) next.
    pub fn new(config: SystemConfig) -> Self {
        let controller = HysteresisController::new(config.cushion_c);
        let setpoint = SetpointModel::new(config.setpoint_sensitivity_c);
        let button = ButtonDebouncer::new(config.mode_toggle_guard_ms);
        let last_counter = config.startup_counter;
        let ctx = ControlContext::new(config);
        let fsm = Fsm::new(build_state_table(), ModeId::Run);

        Self {
            fsm,
            ctx,
            controller,
            setpoint,
            button,
            last_refresh_ms: 0,
            last_counter,
            tick_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Start the FSM in Run mode and push the closed decoder gate to
    /// the dial. The first tick repaints immediately (run_enter forces
    /// a refresh).
    pub fn start(&mut self, hw: &mut impl DialPort, sink: &mut impl EventSink) {
        self.fsm.start(&mut self.ctx);
        hw.set_adjust_enabled(self.ctx.setup_gate);
        sink.emit(&AppEvent::Started(self.fsm.current_state()));
        log::info!("AppService started in {:?}", self.fsm.current_state());
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one full control iteration.
    ///
    /// The `hw` parameter satisfies **all four** hardware ports — this
    /// avoids multiple mutable borrows while keeping the port boundary
    /// explicit. `now_ms` is monotonic milliseconds from the injected
    /// clock; all cadence arithmetic is wrapping.
    pub fn tick(
        &mut self,
        hw: &mut (impl SensorPort + DialPort + ActuatorPort + DisplayPort),
        sink: &mut impl EventSink,
        now_ms: u32,
    ) {
        self.tick_count += 1;

        // 1. Button → mode FSM. A guarded press requests one toggle;
        //    the mode handlers consume it and re-route dial + display.
        let prev_mode = self.fsm.current_state();
        if self.button.poll(hw.button_pressed(), now_ms).is_some() {
            self.ctx.toggle_pending = true;
        }
        self.fsm.tick(&mut self.ctx);
        let mode = self.fsm.current_state();
        if mode != prev_mode {
            hw.set_adjust_enabled(self.ctx.setup_gate);
            sink.emit(&AppEvent::ModeChanged {
                from: prev_mode,
                to: mode,
            });
        }

        // 2. Derive the target from the dial counter. The ISR may move
        //    the counter between any two reads; one read per tick keeps
        //    the iteration self-consistent.
        let counter = hw.counter();
        self.ctx.target_c = self.setpoint.target_celsius(counter);
        if counter != self.last_counter {
            self.last_counter = counter;
            sink.emit(&AppEvent::SetpointChanged {
                counter,
                target_c: self.ctx.target_c,
            });
        }

        // 3. Run mode: sample the sensor and drive the relay. An
        //    invalid reading suspends the relay decision (state holds)
        //    and routes the fault token to the display path.
        if mode == ModeId::Run {
            let reading = hw.read_temperature();
            let was_fault = self.ctx.sensor_fault;
            self.ctx.sensor = reading;
            self.ctx.sensor_fault = !reading.valid;

            if !reading.valid {
                if !was_fault {
                    sink.emit(&AppEvent::SensorFault);
                    log::warn!("sensor reading invalid, relay holds state");
                }
            } else {
                if was_fault {
                    sink.emit(&AppEvent::SensorRecovered);
                    log::info!("sensor recovered at {:.2} C", reading.celsius);
                }
                let energized =
                    self.controller
                        .decide(reading.celsius, self.ctx.target_c, hw.relay_energized());
                if energized != hw.relay_energized() {
                    sink.emit(&AppEvent::RelayChanged {
                        energized,
                        current_c: reading.celsius,
                        target_c: self.ctx.target_c,
                    });
                }
                hw.set_relay(energized);
            }
        }

        // 4. Display refresh cadence. Evaluated every iteration — also
        //    on a sensor fault, so the error token appears promptly.
        let refresh_due = self.ctx.refresh_forced
            || now_ms.wrapping_sub(self.last_refresh_ms) >= self.ctx.config.display_refresh_ms;
        if refresh_due {
            self.last_refresh_ms = now_ms;
            self.ctx.refresh_forced = false;
            let frame = match mode {
                ModeId::Setup => presenter::setup_frame(self.ctx.target_c),
                ModeId::Run if self.ctx.sensor_fault => presenter::fault_frame(),
                ModeId::Run => presenter::run_frame(self.ctx.sensor.celsius),
            };
            hw.set_decimals(frame.decimals);
            hw.write_payload(frame.payload.as_str());
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Current operating mode.
    pub fn mode(&self) -> ModeId {
        self.fsm.current_state()
    }

    /// Target temperature as of the last tick.
    pub fn target_celsius(&self) -> f32 {
        self.ctx.target_c
    }

    /// Whether the last Run-mode reading was invalid.
    pub fn sensor_faulted(&self) -> bool {
        self.ctx.sensor_fault
    }

    /// Total control ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}
