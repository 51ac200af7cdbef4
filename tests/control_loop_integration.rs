//! Integration tests: AppService → FSM → relay/display through mock ports.

use thermodial::app::events::AppEvent;
use thermodial::app::ports::{ActuatorPort, DialPort, DisplayPort, EventSink, SensorPort};
use thermodial::app::service::AppService;
use thermodial::config::SystemConfig;
use thermodial::fsm::ModeId;
use thermodial::fsm::context::SensorReading;
use thermodial::presenter::{DECIMALS_NONE, DECIMALS_RUN, DECIMALS_SETUP};

// ── Mock implementations ──────────────────────────────────────

struct MockHw {
    temp: SensorReading,
    pressed: bool,
    counter: i32,
    adjust_enabled: bool,
    relay: bool,
    relay_writes: usize,
    decimals: Vec<u8>,
    payloads: Vec<String>,
}

impl MockHw {
    fn new() -> Self {
        Self {
            temp: SensorReading {
                celsius: 25.0,
                valid: true,
            },
            pressed: false,
            counter: 100,
            adjust_enabled: false,
            relay: false,
            relay_writes: 0,
            decimals: Vec::new(),
            payloads: Vec::new(),
        }
    }

    fn set_temp(&mut self, celsius: f32) {
        self.temp = SensorReading {
            celsius,
            valid: true,
        };
    }

    fn set_invalid(&mut self) {
        self.temp = SensorReading::invalid();
    }
}

impl SensorPort for MockHw {
    fn read_temperature(&mut self) -> SensorReading {
        self.temp
    }
    fn button_pressed(&mut self) -> bool {
        self.pressed
    }
}

impl DialPort for MockHw {
    fn counter(&self) -> i32 {
        self.counter
    }
    fn set_adjust_enabled(&mut self, enabled: bool) {
        self.adjust_enabled = enabled;
    }
}

impl ActuatorPort for MockHw {
    fn set_relay(&mut self, energized: bool) {
        self.relay = energized;
        self.relay_writes += 1;
    }
    fn relay_energized(&self) -> bool {
        self.relay
    }
}

impl DisplayPort for MockHw {
    fn set_decimals(&mut self, mask: u8) {
        self.decimals.push(mask);
    }
    fn write_payload(&mut self, payload: &str) {
        self.payloads.push(payload.to_string());
    }
}

struct VecSink {
    events: Vec<AppEvent>,
}

impl VecSink {
    fn new() -> Self {
        Self { events: Vec::new() }
    }

    fn mode_changes(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, AppEvent::ModeChanged { .. }))
            .count()
    }
}

impl EventSink for VecSink {
    fn emit(&mut self, e: &AppEvent) {
        self.events.push(*e);
    }
}

fn make_app() -> (AppService, MockHw, VecSink) {
    let mut app = AppService::new(SystemConfig::default());
    let mut hw = MockHw::new();
    let mut sink = VecSink::new();
    app.start(&mut hw, &mut sink);
    (app, hw, sink)
}

// ── Startup ───────────────────────────────────────────────────

#[test]
fn starts_in_run_mode_with_closed_dial_gate() {
    let (app, hw, sink) = make_app();
    assert_eq!(app.mode(), ModeId::Run);
    assert!(!hw.adjust_enabled, "dial gate must be closed in Run mode");
    assert_eq!(sink.events, [AppEvent::Started(ModeId::Run)]);
}

#[test]
fn first_tick_paints_current_temperature_immediately() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.set_temp(23.456);
    app.tick(&mut hw, &mut sink, 0);
    assert_eq!(hw.payloads, ["2345"], "centi-degree payload expected");
    assert_eq!(hw.decimals, [DECIMALS_RUN]);
}

#[test]
fn warm_startup_leaves_relay_de_energized() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.set_temp(30.0); // well above the 25.0 default target
    app.tick(&mut hw, &mut sink, 0);
    assert!(!hw.relay);
}

// ── Hysteresis through the full loop ──────────────────────────
// Default target 25.0, cushion 2.0: cut-in at/below 24.0, cut-off
// above 26.0, no self-transition strictly inside (24.0, 26.0).

#[test]
fn relay_engages_at_cut_in_threshold() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.set_temp(24.5);
    app.tick(&mut hw, &mut sink, 0);
    assert!(!hw.relay, "inside the band from off: must stay off");

    hw.set_temp(24.0);
    app.tick(&mut hw, &mut sink, 10);
    assert!(hw.relay, "at the cut-in threshold: must engage");
}

#[test]
fn relay_holds_through_the_band_and_cuts_off_past_cushion() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.set_temp(20.0);
    app.tick(&mut hw, &mut sink, 0);
    assert!(hw.relay);

    for (t, temp) in [(10, 24.5), (20, 25.5), (30, 26.0)] {
        hw.set_temp(temp);
        app.tick(&mut hw, &mut sink, t);
        assert!(hw.relay, "{temp} is not past the cushion: must keep heating");
    }

    hw.set_temp(26.01);
    app.tick(&mut hw, &mut sink, 40);
    assert!(!hw.relay, "past target + cushion/2: must cut off");
}

#[test]
fn full_heating_cycle_switches_on_off_on() {
    let (mut app, mut hw, mut sink) = make_app();
    // Cold start → heat → overshoot → cool → re-engage.
    let profile = [18.0, 22.0, 24.5, 25.5, 26.5, 25.0, 24.2, 24.0];
    for (i, temp) in profile.iter().enumerate() {
        hw.set_temp(*temp);
        app.tick(&mut hw, &mut sink, (i as u32) * 10);
    }
    let switches: Vec<bool> = sink
        .events
        .iter()
        .filter_map(|e| match e {
            AppEvent::RelayChanged { energized, .. } => Some(*energized),
            _ => None,
        })
        .collect();
    assert_eq!(switches, [true, false, true]);
}

// ── Invalid sensor readings ───────────────────────────────────

#[test]
fn nan_reading_leaves_relay_unchanged() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.set_temp(20.0);
    app.tick(&mut hw, &mut sink, 0);
    assert!(hw.relay);
    let writes_before = hw.relay_writes;

    hw.set_invalid();
    app.tick(&mut hw, &mut sink, 10);
    assert!(hw.relay, "relay must retain its pre-read state");
    assert_eq!(
        hw.relay_writes, writes_before,
        "no relay command may be issued on an invalid reading"
    );
    assert!(app.sensor_faulted());
}

#[test]
fn fault_token_is_shown_on_the_next_refresh() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.set_temp(20.0);
    app.tick(&mut hw, &mut sink, 0);

    hw.set_invalid();
    // The fault lands mid-cadence; the refresh check still runs every
    // iteration, so the token appears at the next due repaint.
    app.tick(&mut hw, &mut sink, 50);
    app.tick(&mut hw, &mut sink, 100);
    assert_eq!(hw.payloads.last().unwrap(), " Err");
    assert_eq!(*hw.decimals.last().unwrap(), DECIMALS_NONE);
}

#[test]
fn sensor_fault_and_recovery_emit_single_events() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.set_invalid();
    for t in [0, 10, 20, 30] {
        app.tick(&mut hw, &mut sink, t);
    }
    let faults = sink
        .events
        .iter()
        .filter(|e| matches!(e, AppEvent::SensorFault))
        .count();
    assert_eq!(faults, 1, "fault must be edge-reported, not per-iteration");

    hw.set_temp(22.0);
    app.tick(&mut hw, &mut sink, 40);
    assert!(!app.sensor_faulted());
    assert!(sink.events.contains(&AppEvent::SensorRecovered));
    app.tick(&mut hw, &mut sink, 140);
    assert_eq!(hw.payloads.last().unwrap(), "2200");
}

// ── Mode toggling ─────────────────────────────────────────────

#[test]
fn button_press_toggles_once_per_guard_interval() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.pressed = true;

    app.tick(&mut hw, &mut sink, 0);
    assert_eq!(app.mode(), ModeId::Setup);
    assert_eq!(sink.mode_changes(), 1);

    // Held / bouncing through the whole 1 s guard: no further toggles.
    for t in (10..1000).step_by(10) {
        app.tick(&mut hw, &mut sink, t);
    }
    assert_eq!(app.mode(), ModeId::Setup);
    assert_eq!(sink.mode_changes(), 1);

    // Guard expired, still held: toggles back.
    app.tick(&mut hw, &mut sink, 1000);
    assert_eq!(app.mode(), ModeId::Run);
    assert_eq!(sink.mode_changes(), 2);
}

#[test]
fn mode_toggle_forces_an_immediate_repaint() {
    let (mut app, mut hw, mut sink) = make_app();
    app.tick(&mut hw, &mut sink, 0);
    let paints_before = hw.payloads.len();

    // Mid-cadence press: the repaint must not wait for the 100 ms tick.
    hw.pressed = true;
    app.tick(&mut hw, &mut sink, 30);
    assert_eq!(hw.payloads.len(), paints_before + 1);
    assert_eq!(hw.payloads.last().unwrap(), "T 25");
    assert_eq!(*hw.decimals.last().unwrap(), DECIMALS_SETUP);
}

#[test]
fn setup_mode_routes_dial_and_displays_target() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.pressed = true;
    app.tick(&mut hw, &mut sink, 0);
    assert!(hw.adjust_enabled, "dial gate must open in Setup");
    hw.pressed = false;

    // Dial turned four detents up: 100 → 104 counts = 26.0 °C.
    hw.counter = 104;
    app.tick(&mut hw, &mut sink, 100);
    assert_eq!(app.target_celsius(), 26.0);
    assert_eq!(hw.payloads.last().unwrap(), "T 26");
    assert!(sink.events.contains(&AppEvent::SetpointChanged {
        counter: 104,
        target_c: 26.0
    }));

    // Back to Run: gate closes, relay follows the new target.
    hw.pressed = true;
    app.tick(&mut hw, &mut sink, 1200);
    assert_eq!(app.mode(), ModeId::Run);
    assert!(!hw.adjust_enabled);
}

#[test]
fn sensor_is_not_read_in_setup_mode() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.pressed = true;
    app.tick(&mut hw, &mut sink, 0);
    assert_eq!(app.mode(), ModeId::Setup);
    hw.pressed = false;

    // A failing sensor in Setup must not surface: no read, no fault.
    hw.set_invalid();
    app.tick(&mut hw, &mut sink, 100);
    assert!(!app.sensor_faulted());
    assert_eq!(hw.payloads.last().unwrap(), "T 25");
}

// ── Refresh cadence ───────────────────────────────────────────

#[test]
fn display_repaints_on_the_refresh_interval_not_every_tick() {
    let (mut app, mut hw, mut sink) = make_app();
    app.tick(&mut hw, &mut sink, 0); // forced by start
    for t in (10..100).step_by(10) {
        app.tick(&mut hw, &mut sink, t);
    }
    assert_eq!(hw.payloads.len(), 1, "mid-cadence ticks must not repaint");

    app.tick(&mut hw, &mut sink, 100);
    assert_eq!(hw.payloads.len(), 2);
    app.tick(&mut hw, &mut sink, 150);
    assert_eq!(hw.payloads.len(), 2);
    app.tick(&mut hw, &mut sink, 200);
    assert_eq!(hw.payloads.len(), 3);
}

// ── Setpoint round-trip ───────────────────────────────────────

#[test]
fn counter_to_target_round_trip() {
    let (mut app, mut hw, mut sink) = make_app();
    hw.counter = 0;
    app.tick(&mut hw, &mut sink, 0);
    assert_eq!(app.target_celsius(), 0.0);

    hw.counter = 100;
    app.tick(&mut hw, &mut sink, 10);
    assert_eq!(app.target_celsius(), 25.0);
}
