// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Recording [`Board`] for host tests.
//!
//! ```
//! use autopilot_sim::board::MockBoard;
//! use autopilot_sim::engine::{Engine, Event};
//! use autopilot_sim::protocol::Telemetry;
//!
//! let engine = Engine::new();
//! let mut board = MockBoard::new();
//! engine.dispatch(Event::Tick, &mut board); // ignored, no session yet
//! board.pump(&engine);
//! assert_eq!(board.telemetry().next(), None::<Telemetry>);
//! ```

use heapless::Vec;

use super::Board;
use crate::config::BUTTON_COUNT;
use crate::engine::{Engine, Event};
use crate::protocol::{Telemetry, TelemetryParser};
use crate::session::ButtonId;

/// Bytes of transmitted history kept by the mock.
pub const SENT_CAPACITY: usize = 4096;

#[derive(Default)]
pub struct MockBoard {
    pub ticks_enabled: bool,
    pub indicators: [bool; BUTTON_COUNT],
    pub button_events: bool,
    pub transmitting: bool,
    pub sample_requests: u32,
    sent: Vec<u8, SENT_CAPACITY>,
    overflowed: bool,
}

impl MockBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Act as the transmit interrupt: pull bytes until the engine reports the
    /// outbound channel empty.
    pub fn pump(&mut self, engine: &Engine) {
        while self.transmitting {
            engine.dispatch(Event::TransmitReady, self);
        }
    }

    /// Everything put on the wire so far.
    pub fn sent(&self) -> &[u8] {
        &self.sent
    }

    /// True if the transmit history ran out of room and bytes were dropped.
    pub fn overflowed(&self) -> bool {
        self.overflowed
    }

    pub fn clear_sent(&mut self) {
        self.sent.clear();
    }

    /// Decode the transmitted bytes as telemetry frames.
    pub fn telemetry(&self) -> impl Iterator<Item = Telemetry> + '_ {
        let mut parser = TelemetryParser::new();
        self.sent
            .iter()
            .filter_map(move |&b| parser.push(b).ok().flatten())
    }
}

impl Board for MockBoard {
    fn set_ticks_enabled(&mut self, enabled: bool) {
        self.ticks_enabled = enabled;
    }

    fn set_indicator(&mut self, button: ButtonId, on: bool) {
        self.indicators[button.index()] = on;
    }

    fn set_button_events(&mut self, enabled: bool) {
        self.button_events = enabled;
    }

    fn start_transmit(&mut self) {
        self.transmitting = true;
    }

    fn transmit(&mut self, byte: u8) {
        if self.sent.push(byte).is_err() {
            self.overflowed = true;
        }
    }

    fn stop_transmit(&mut self) {
        self.transmitting = false;
    }

    fn request_sample(&mut self) {
        self.sample_requests += 1;
    }
}
