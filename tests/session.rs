mod common;

use autopilot_sim::protocol::Telemetry;
use autopilot_sim::session::ButtonId;
use common::Rig;

#[test]
fn distance_countdown_scenario() {
    let mut rig = Rig::new();
    rig.send(b"$GOO03E8#");
    rig.send(b"$SPD000A#");
    assert!(rig.board.ticks_enabled);

    rig.ticks(10);

    let frames = rig.telemetry();
    assert_eq!(frames.len(), 10);
    for (i, frame) in frames.iter().enumerate() {
        assert_eq!(*frame, Telemetry::Distance(1000 - 10 * (i as u16 + 1)));
    }
    assert!(rig.board.sent().ends_with(b"$DST0384#"));
    assert!(!rig.board.overflowed());
}

#[test]
fn distance_never_underflows() {
    let cases = [(1000u16, 7u16, 5u32), (100, 7, 20), (5, 5, 3), (0, 1, 4), (65535, 65535, 2)];
    for (distance, speed, n) in cases {
        let mut rig = Rig::new();
        rig.send(format!("$GOO{:04X}#$SPD{:04X}#", distance, speed).as_bytes());
        rig.ticks(n as usize);

        let expected = (i64::from(distance) - i64::from(n) * i64::from(speed)).max(0) as u16;
        assert_eq!(rig.engine.session(|s| s.vehicle.remaining_distance), expected);
        assert_eq!(rig.telemetry().last(), Some(&Telemetry::Distance(expected)));
    }
}

#[test]
fn one_frame_per_tick() {
    let mut rig = Rig::new();
    rig.send(b"$GOO0100#$SPD0001#$ALT00C8#$MAN01#$LED01#$LED02#");
    rig.engine
        .dispatch(autopilot_sim::engine::Event::SampleReady(300), &mut rig.board);

    for _ in 0..12 {
        rig.buttons([true, true, false, false]);
        rig.buttons([false, false, false, false]);
    }
    rig.ticks(12);

    assert_eq!(rig.telemetry().len(), 12);
}

#[test]
fn altitude_beats_pending_button() {
    let mut rig = Rig::new();
    rig.send(b"$GOO0064#$ALT00C8#$MAN01#$LED03#");
    rig.engine
        .dispatch(autopilot_sim::engine::Event::SampleReady(900), &mut rig.board);

    rig.ticks(1);
    rig.buttons([false, false, true, false]);
    rig.buttons([false, false, false, false]);
    rig.ticks(3);

    assert_eq!(
        rig.telemetry(),
        vec![
            Telemetry::Distance(100),
            Telemetry::Altitude(12000),
            Telemetry::ButtonPress(ButtonId::B2),
            Telemetry::Altitude(12000),
        ]
    );
    assert!(rig.board.sent().ends_with(b"$PRS06#$ALT2EE0#"));
}

#[test]
fn button_reports_need_manual_mode_and_indicator() {
    let mut rig = Rig::new();
    rig.send(b"$GOO0010#$LED01#");

    // Manual mode off: samples are not observed.
    rig.buttons([true, false, false, false]);
    rig.buttons([false, false, false, false]);
    rig.ticks(1);

    rig.send(b"$MAN01#");
    assert!(rig.board.button_events);
    assert_eq!(rig.board.indicators, [true, false, false, false]);

    // Button 1 has no indicator enabled.
    rig.buttons([false, true, false, false]);
    rig.buttons([false, false, false, false]);
    rig.ticks(1);

    rig.buttons([true, false, false, false]);
    rig.buttons([false, false, false, false]);
    rig.ticks(2);

    assert_eq!(
        rig.telemetry(),
        vec![
            Telemetry::Distance(16),
            Telemetry::Distance(16),
            Telemetry::ButtonPress(ButtonId::B0),
            Telemetry::Distance(16),
        ]
    );
}

#[test]
fn end_resets_everything() {
    let mut rig = Rig::new();
    rig.send(b"$GOO0200#$SPD0002#$ALT0190#$MAN01#$LED04#");
    rig.ticks(3);
    assert!(rig.engine.session(|s| s.is_running()));

    rig.send(b"$END#$SPD0009#");

    assert!(!rig.board.ticks_enabled);
    assert!(!rig.board.button_events);
    assert_eq!(rig.board.indicators, [false; 4]);
    assert!(rig.foreground.parser_idle());
    rig.engine.session(|s| {
        assert!(!s.is_running());
        assert_eq!(s.vehicle.remaining_distance, 0);
        assert_eq!(s.vehicle.speed, 0);
        assert!(s.vehicle.altitude_period.is_off());
        assert!(!s.vehicle.manual_mode);
        assert!(!s.buttons.state(ButtonId::B3).enabled);
    });

    // Ticks after END are ignored.
    rig.board.clear_sent();
    rig.ticks(2);
    assert!(rig.board.sent().is_empty());
}

#[test]
fn new_session_after_end() {
    let mut rig = Rig::new();
    rig.send(b"$GOO0010#$SPD0003#");
    rig.ticks(2);
    rig.send(b"$END#");
    rig.send(b"$GOO0005#$SPD0001#");
    rig.board.clear_sent();
    rig.ticks(2);
    assert_eq!(
        rig.telemetry(),
        vec![Telemetry::Distance(4), Telemetry::Distance(3)]
    );
}

#[test]
fn sample_requests_follow_altitude_period() {
    let mut rig = Rig::new();
    rig.send(b"$GOO0010#");
    assert_eq!(rig.board.sample_requests, 0);

    rig.send(b"$ALT0258#");
    rig.send(b"");
    assert_eq!(rig.board.sample_requests, 2);

    rig.send(b"$ALT0000#");
    let before = rig.board.sample_requests;
    rig.send(b"");
    assert_eq!(rig.board.sample_requests, before);
}
