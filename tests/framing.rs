mod common;

use autopilot_sim::protocol::{Command, CommandParser, Frame, Telemetry, TelemetryParser};
use autopilot_sim::session::ButtonId;
use common::Rig;

fn decode_all<F: Frame>(bytes: &[u8]) -> Vec<F> {
    let mut parser = autopilot_sim::protocol::Parser::<F>::new();
    bytes
        .iter()
        .filter_map(|&b| parser.push(b).ok().flatten())
        .collect()
}

#[test]
fn commands_survive_encoding() {
    let commands = [
        Command::Go { distance: 0xFFFF },
        Command::End,
        Command::Speed(0x00A0),
        Command::Altitude { period_ms: 600 },
        Command::Manual(1),
        Command::Led(4),
    ];
    let mut parser = CommandParser::new();
    for cmd in commands {
        let frame = cmd.encode();
        let mut got = None;
        for &b in frame.iter() {
            if let Ok(Some(c)) = parser.push(b) {
                got = Some(c);
            }
        }
        assert_eq!(got, Some(cmd), "frame {:?}", core::str::from_utf8(&frame));
    }
}

#[test]
fn telemetry_survives_encoding() {
    let messages = [
        Telemetry::Distance(0),
        Telemetry::Distance(0xABCD),
        Telemetry::Altitude(9000),
        Telemetry::Altitude(12000),
        Telemetry::ButtonPress(ButtonId::B0),
        Telemetry::ButtonPress(ButtonId::B3),
    ];
    let mut wire = Vec::new();
    for msg in messages {
        wire.extend_from_slice(&msg.encode());
    }
    assert_eq!(decode_all::<Telemetry>(&wire), messages.to_vec());
}

#[test]
fn lowercase_hex_bodies_are_accepted() {
    assert_eq!(
        decode_all::<Command>(b"$GOO03e8#$SPD00ff#"),
        vec![Command::Go { distance: 1000 }, Command::Speed(255)]
    );
}

#[test]
fn garbage_then_end_resets() {
    let streams: [&[u8]; 7] = [
        b"$XYZ0001#",
        b"$GOO12#",
        b"$SPD00001#",
        b"$MAN0G#",
        b"$ALT#",
        b"$GOO12",
        b"$GO",
    ];
    for garbage in streams {
        let mut rig = Rig::new();
        rig.send(b"$GOO0100#$SPD0004#$LED02#");
        rig.send(garbage);
        rig.send(b"$END#");

        assert!(rig.foreground.parser_idle());
        assert!(!rig.board.ticks_enabled);
        assert_eq!(rig.engine.session(|s| s.vehicle.speed), 0);
        assert_eq!(rig.board.indicators, [false; 4]);
    }
}

#[test]
fn end_interrupting_a_frame_still_resets() {
    for stream in [&b"$GOO12$END#"[..], b"$GO$END#", b"$LED0$END#"] {
        let mut rig = Rig::new();
        rig.send(b"$GOO0100#$SPD0004#$LED02#");
        rig.send(stream);

        assert!(!rig.board.ticks_enabled);
        assert_eq!(rig.engine.session(|s| s.vehicle.speed), 0);
        assert!(rig.foreground.parser_idle());
    }
}

#[test]
fn malformed_frames_leave_state_untouched() {
    let mut rig = Rig::new();
    rig.send(b"$SPD0003#");
    rig.send(b"$SPD03#$SPDzz00#$spd0009#$SPD000009#");
    assert_eq!(rig.engine.session(|s| s.vehicle.speed), 3);
    assert!(rig.foreground.parser_idle());
}

#[test]
fn frames_split_across_polls() {
    let mut rig = Rig::new();
    rig.send(b"$GO");
    rig.send(b"O00");
    assert!(!rig.board.ticks_enabled);
    rig.send(b"2A#");
    assert!(rig.board.ticks_enabled);
    assert_eq!(rig.engine.session(|s| s.vehicle.remaining_distance), 42);
}

#[test]
fn telemetry_parser_ignores_commands() {
    let mut parser = TelemetryParser::new();
    for &b in b"$GOO0001#" {
        assert_eq!(parser.push(b).ok().flatten(), None);
    }
    assert!(parser.is_idle());
}
