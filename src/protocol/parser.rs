// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Byte-at-a-time frame parser.
//!
//! The parser never blocks and never buffers more than one header. Anything malformed
//! sends it back to idle, where it waits for the next `$`. A `$` inside a frame drops that
//! frame and starts the next one.

use crate::protocol::hex;
use crate::protocol::messages::{Command, Frame, Telemetry, END_BYTE, START_BYTE};

/// Why a frame was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    /// Header not present in the family's table.
    UnknownHeader([u8; 3]),
    /// Body byte that is neither a hex digit nor `#`.
    InvalidByte(u8),
    /// More digits than the header allows.
    TooManyDigits,
    /// `#` arrived before the body was complete.
    DigitCountMismatch { expected: u8, got: u8 },
    /// Body parsed but the value is not meaningful for the header.
    OutOfRange(u16),
}

enum State<K> {
    Idle,
    Header {
        name: [u8; 3],
        pos: usize,
    },
    Body {
        kind: K,
        expected: u8,
        read: u8,
        value: u16,
    },
}

/// Frame parser for one frame family.
pub struct Parser<F: Frame> {
    state: State<F::Kind>,
}

/// Parser for frames arriving from the autopilot.
pub type CommandParser = Parser<Command>;

/// Parser for frames the simulator emits.
pub type TelemetryParser = Parser<Telemetry>;

impl<F: Frame> Parser<F> {
    pub const fn new() -> Self {
        Self { state: State::Idle }
    }

    /// Drop any partial frame.
    pub fn reset(&mut self) {
        self.state = State::Idle;
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, State::Idle)
    }

    /// Process a single incoming byte. Returns `Ok(Some(frame))` when a complete frame is
    /// received and `Err` when the current frame is dropped.
    pub fn push(&mut self, byte: u8) -> Result<Option<F>, FrameError> {
        if byte == START_BYTE {
            let interrupted = !self.is_idle();
            self.state = State::Header {
                name: [0; 3],
                pos: 0,
            };
            return if interrupted {
                Err(FrameError::InvalidByte(byte))
            } else {
                Ok(None)
            };
        }

        match self.state {
            State::Idle => Ok(None),
            State::Header { mut name, pos } => {
                name[pos] = byte;
                if pos + 1 < name.len() {
                    self.state = State::Header { name, pos: pos + 1 };
                    return Ok(None);
                }

                match F::HEADERS.iter().find(|h| h.name == name) {
                    Some(header) => {
                        self.state = State::Body {
                            kind: header.kind,
                            expected: header.digits,
                            read: 0,
                            value: 0,
                        };
                        Ok(None)
                    }
                    None => {
                        self.state = State::Idle;
                        Err(FrameError::UnknownHeader(name))
                    }
                }
            }
            State::Body {
                kind,
                expected,
                read,
                value,
            } => {
                if byte == END_BYTE {
                    self.state = State::Idle;
                    if read != expected {
                        return Err(FrameError::DigitCountMismatch {
                            expected,
                            got: read,
                        });
                    }
                    return F::decode(kind, value).map(Some);
                }

                let Some(nibble) = hex::to_nibble(byte) else {
                    self.state = State::Idle;
                    return Err(FrameError::InvalidByte(byte));
                };

                if read == expected {
                    self.state = State::Idle;
                    return Err(FrameError::TooManyDigits);
                }

                self.state = State::Body {
                    kind,
                    expected,
                    read: read + 1,
                    value: (value << 4) | u16::from(nibble),
                };
                Ok(None)
            }
        }
    }
}

impl<F: Frame> Default for Parser<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::ButtonId;

    fn feed<F: Frame>(parser: &mut Parser<F>, bytes: &[u8]) -> Option<F> {
        let mut last = None;
        for &b in bytes {
            if let Ok(Some(frame)) = parser.push(b) {
                last = Some(frame);
            }
        }
        last
    }

    #[test]
    fn parses_every_command() {
        let mut p = CommandParser::new();
        assert_eq!(feed(&mut p, b"$GOO03E8#"), Some(Command::Go { distance: 1000 }));
        assert_eq!(feed(&mut p, b"$END#"), Some(Command::End));
        assert_eq!(feed(&mut p, b"$SPD000A#"), Some(Command::Speed(10)));
        assert_eq!(
            feed(&mut p, b"$ALT00c8#"),
            Some(Command::Altitude { period_ms: 200 })
        );
        assert_eq!(feed(&mut p, b"$MAN01#"), Some(Command::Manual(1)));
        assert_eq!(feed(&mut p, b"$LED03#"), Some(Command::Led(3)));
        assert!(p.is_idle());
    }

    #[test]
    fn ignores_noise_between_frames() {
        let mut p = CommandParser::new();
        assert_eq!(feed(&mut p, b"xx\r\n#12$SPD00fF#junk"), Some(Command::Speed(0xFF)));
        assert!(p.is_idle());
    }

    #[test]
    fn unknown_header_returns_to_idle() {
        let mut p = CommandParser::new();
        for &b in b"$FO" {
            assert_eq!(p.push(b), Ok(None));
        }
        assert_eq!(p.push(b'O'), Err(FrameError::UnknownHeader(*b"FOO")));
        assert!(p.is_idle());
        // The body of the dropped frame is discarded as noise.
        assert_eq!(feed(&mut p, b"1234#"), None);
    }

    #[test]
    fn header_is_case_sensitive() {
        let mut p = CommandParser::new();
        assert_eq!(feed(&mut p, b"$goo03E8#"), None);
        assert!(p.is_idle());
    }

    #[test]
    fn rejects_wrong_digit_counts() {
        let mut p = CommandParser::new();
        let mut last = Ok(None);
        for &b in b"$SPD00A#" {
            last = p.push(b);
        }
        assert_eq!(
            last,
            Err(FrameError::DigitCountMismatch {
                expected: 4,
                got: 3
            })
        );

        let mut last = Ok(None);
        for &b in b"$MAN001" {
            last = p.push(b);
        }
        assert_eq!(last, Err(FrameError::TooManyDigits));
        assert!(p.is_idle());

        assert_eq!(feed(&mut p, b"$END00#"), None);
    }

    #[test]
    fn invalid_body_byte_drops_frame() {
        let mut p = CommandParser::new();
        for &b in b"$GOO0" {
            let _ = p.push(b);
        }
        assert_eq!(p.push(b'z'), Err(FrameError::InvalidByte(b'z')));
        assert!(p.is_idle());
    }

    #[test]
    fn start_marker_restarts_the_frame() {
        let mut p = CommandParser::new();
        for &b in b"$GOO01" {
            assert_eq!(p.push(b), Ok(None));
        }
        assert_eq!(p.push(b'$'), Err(FrameError::InvalidByte(b'$')));
        assert!(!p.is_idle());
        assert_eq!(feed(&mut p, b"SPD0002#"), Some(Command::Speed(2)));

        // Same inside a header.
        assert_eq!(feed(&mut p, b"$GO$END#"), Some(Command::End));
        assert_eq!(feed(&mut p, b"$$$MAN01#"), Some(Command::Manual(1)));
        assert!(p.is_idle());
    }

    #[test]
    fn reset_discards_partial_frame() {
        let mut p = CommandParser::new();
        for &b in b"$SPD00" {
            let _ = p.push(b);
        }
        p.reset();
        assert!(p.is_idle());
        assert_eq!(feed(&mut p, b"0A#"), None);
    }

    #[test]
    fn parses_telemetry_family() {
        let mut p = TelemetryParser::new();
        assert_eq!(feed(&mut p, b"$DST0384#"), Some(Telemetry::Distance(900)));
        assert_eq!(feed(&mut p, b"$ALT2EE0#"), Some(Telemetry::Altitude(12000)));
        assert_eq!(
            feed(&mut p, b"$PRS05#"),
            Some(Telemetry::ButtonPress(ButtonId::B1))
        );
        // Command headers mean nothing to the telemetry family.
        assert_eq!(feed(&mut p, b"$GOO0001#"), None);
    }
}
