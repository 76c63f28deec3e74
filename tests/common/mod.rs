#![allow(dead_code)]

use autopilot_sim::board::MockBoard;
use autopilot_sim::engine::{Engine, Event, Foreground};
use autopilot_sim::protocol::Telemetry;

/// Engine, foreground loop and mock board wired together.
pub struct Rig {
    pub engine: Engine,
    pub foreground: Foreground,
    pub board: MockBoard,
}

impl Rig {
    pub fn new() -> Self {
        Self {
            engine: Engine::new(),
            foreground: Foreground::new(),
            board: MockBoard::new(),
        }
    }

    /// Deliver bytes as the receive interrupt would, then run one foreground iteration.
    pub fn send(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.engine.dispatch(Event::ByteReceived(b), &mut self.board);
        }
        self.foreground.poll(&self.engine, &mut self.board);
    }

    /// Fire `n` ticks, draining the link after each one.
    pub fn ticks(&mut self, n: usize) {
        for _ in 0..n {
            self.engine.dispatch(Event::Tick, &mut self.board);
            self.board.pump(&self.engine);
        }
    }

    pub fn buttons(&mut self, levels: [bool; 4]) {
        self.engine
            .dispatch(Event::ButtonSample(levels), &mut self.board);
    }

    pub fn telemetry(&self) -> Vec<Telemetry> {
        self.board.telemetry().collect()
    }
}
