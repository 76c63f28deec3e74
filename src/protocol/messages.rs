// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Frame families exchanged with the autopilot.
//!
//! Every frame is ASCII: `$`, a three-letter header, a fixed number of hex digits and `#`.
//! Commands flow in (`GOO`, `END`, `SPD`, `ALT`, `MAN`, `LED`), telemetry flows out (`DST`,
//! `ALT`, `PRS`).

use heapless::Vec;

use crate::config::MAX_FRAME_LEN;
use crate::protocol::hex;
use crate::protocol::parser::FrameError;
use crate::session::ButtonId;

/// Frame start marker.
pub const START_BYTE: u8 = b'$';
/// Frame end marker.
pub const END_BYTE: u8 = b'#';

/// Bytes of one encoded frame.
pub type FrameBuf = Vec<u8, MAX_FRAME_LEN>;

/// One row of a header table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Header<K> {
    pub name: [u8; 3],
    pub digits: u8,
    pub kind: K,
}

/// A family of frames sharing the `$HDR<digits>#` layout.
pub trait Frame: Sized {
    type Kind: Copy + PartialEq + 'static;

    /// Every header this family understands.
    const HEADERS: &'static [Header<Self::Kind>];

    fn kind(&self) -> Self::Kind;

    /// Numeric body carried by the frame (0 for bodiless frames).
    fn value(&self) -> u16;

    /// Build a record from a matched header and its accumulated body.
    fn decode(kind: Self::Kind, value: u16) -> Result<Self, FrameError>;

    fn header(&self) -> &'static Header<Self::Kind> {
        let kind = self.kind();
        Self::HEADERS
            .iter()
            .find(|h| h.kind == kind)
            .unwrap_or(&Self::HEADERS[0])
    }

    /// Encode as `$HDR<digits>#`, digits uppercase and most significant first.
    fn encode(&self) -> FrameBuf {
        let header = self.header();
        let hex = hex::write_hex::<4>(self.value());
        let body = &hex[4 - header.digits as usize..];

        let mut buf = FrameBuf::new();
        let bytes = core::iter::once(&START_BYTE)
            .chain(header.name.iter())
            .chain(body.iter())
            .chain(core::iter::once(&END_BYTE));
        for &b in bytes {
            // At most 1 + 3 + 4 + 1 bytes, which is exactly MAX_FRAME_LEN.
            let _ = buf.push(b);
        }
        buf
    }
}

// ---------------------------------------------------------------------------
// Commands (autopilot -> simulator)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Go,
    End,
    Speed,
    Altitude,
    Manual,
    Led,
}

/// Commands received over the link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `$GOOxxxx#`: start the session with an initial distance.
    Go { distance: u16 },
    /// `$END#`: end the session and reset everything.
    End,
    /// `$SPDxxxx#`: distance covered per tick.
    Speed(u16),
    /// `$ALTxxxx#`: altitude report period in milliseconds.
    Altitude { period_ms: u16 },
    /// `$MANxx#`: nonzero enables manual mode.
    Manual(u8),
    /// `$LEDxx#`: 0 clears every indicator, 1..=4 enables one.
    Led(u8),
}

impl Frame for Command {
    type Kind = CommandKind;

    const HEADERS: &'static [Header<CommandKind>] = &[
        Header { name: *b"GOO", digits: 4, kind: CommandKind::Go },
        Header { name: *b"END", digits: 0, kind: CommandKind::End },
        Header { name: *b"SPD", digits: 4, kind: CommandKind::Speed },
        Header { name: *b"ALT", digits: 4, kind: CommandKind::Altitude },
        Header { name: *b"MAN", digits: 2, kind: CommandKind::Manual },
        Header { name: *b"LED", digits: 2, kind: CommandKind::Led },
    ];

    fn kind(&self) -> CommandKind {
        match self {
            Command::Go { .. } => CommandKind::Go,
            Command::End => CommandKind::End,
            Command::Speed(_) => CommandKind::Speed,
            Command::Altitude { .. } => CommandKind::Altitude,
            Command::Manual(_) => CommandKind::Manual,
            Command::Led(_) => CommandKind::Led,
        }
    }

    fn value(&self) -> u16 {
        match *self {
            Command::Go { distance } => distance,
            Command::End => 0,
            Command::Speed(speed) => speed,
            Command::Altitude { period_ms } => period_ms,
            Command::Manual(flag) => u16::from(flag),
            Command::Led(id) => u16::from(id),
        }
    }

    fn decode(kind: CommandKind, value: u16) -> Result<Self, FrameError> {
        Ok(match kind {
            CommandKind::Go => Command::Go { distance: value },
            CommandKind::End => Command::End,
            CommandKind::Speed => Command::Speed(value),
            CommandKind::Altitude => Command::Altitude { period_ms: value },
            CommandKind::Manual => Command::Manual((value & 0xFF) as u8),
            CommandKind::Led => Command::Led((value & 0xFF) as u8),
        })
    }
}

// ---------------------------------------------------------------------------
// Telemetry (simulator -> autopilot)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TelemetryKind {
    Distance,
    Altitude,
    ButtonPress,
}

/// Messages emitted by the telemetry scheduler, one per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Telemetry {
    /// `$DSTxxxx#`: remaining distance.
    Distance(u16),
    /// `$ALTxxxx#`: altitude class (9000, 10000, 11000 or 12000).
    Altitude(u16),
    /// `$PRSxx#`: a completed press-and-release of one button.
    ButtonPress(ButtonId),
}

impl Frame for Telemetry {
    type Kind = TelemetryKind;

    const HEADERS: &'static [Header<TelemetryKind>] = &[
        Header { name: *b"DST", digits: 4, kind: TelemetryKind::Distance },
        Header { name: *b"ALT", digits: 4, kind: TelemetryKind::Altitude },
        Header { name: *b"PRS", digits: 2, kind: TelemetryKind::ButtonPress },
    ];

    fn kind(&self) -> TelemetryKind {
        match self {
            Telemetry::Distance(_) => TelemetryKind::Distance,
            Telemetry::Altitude(_) => TelemetryKind::Altitude,
            Telemetry::ButtonPress(_) => TelemetryKind::ButtonPress,
        }
    }

    fn value(&self) -> u16 {
        match *self {
            Telemetry::Distance(d) => d,
            Telemetry::Altitude(a) => a,
            Telemetry::ButtonPress(button) => u16::from(button.report_id()),
        }
    }

    fn decode(kind: TelemetryKind, value: u16) -> Result<Self, FrameError> {
        match kind {
            TelemetryKind::Distance => Ok(Telemetry::Distance(value)),
            TelemetryKind::Altitude => Ok(Telemetry::Altitude(value)),
            TelemetryKind::ButtonPress => ButtonId::from_report_id((value & 0xFF) as u8)
                .map(Telemetry::ButtonPress)
                .ok_or(FrameError::OutOfRange(value)),
        }
    }
}
