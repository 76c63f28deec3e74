// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Interrupt-driven protocol engine.
//!
//! [`Engine`] is the single handle on all shared state: both byte channels and the
//! [`Session`]. It is meant to live in a `static` and be reached from two contexts:
//!
//! - interrupt handlers, which translate peripheral flags into an [`Event`] and call
//!   [`Engine::dispatch`];
//! - the foreground loop, which owns a [`Foreground`] and calls [`Foreground::poll`]
//!   forever.
//!
//! Every access to the shared state happens inside `critical_section::with`, so the
//! exclusion window closes on every exit path. Windows are kept to a single buffer or
//! state operation: the foreground drops exclusion between inbound bytes so reception
//! keeps running while a command is handled.

use core::cell::RefCell;

use critical_section::Mutex;
use log::{debug, info, warn};

use crate::board::Board;
use crate::channel::ByteChannel;
use crate::config::BUTTON_COUNT;
use crate::protocol::{Command, CommandParser, Frame};
use crate::session::{Action, AltitudePeriod, Session};

/// Everything an interrupt handler can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A byte arrived on the link.
    ByteReceived(u8),
    /// The link can take the next outbound byte.
    TransmitReady,
    /// The 100 ms tick fired.
    Tick,
    /// Debounced levels of the four buttons (`true` = pressed).
    ButtonSample([bool; BUTTON_COUNT]),
    /// An analog conversion finished.
    SampleReady(u16),
}

struct Shared {
    inbound: ByteChannel,
    outbound: ByteChannel,
    session: Session,
}

impl Shared {
    const fn new() -> Self {
        Self {
            inbound: ByteChannel::new(),
            outbound: ByteChannel::new(),
            session: Session::new(),
        }
    }
}

pub struct Engine {
    shared: Mutex<RefCell<Shared>>,
}

impl Engine {
    pub const fn new() -> Self {
        Self {
            shared: Mutex::new(RefCell::new(Shared::new())),
        }
    }

    fn with<R>(&self, f: impl FnOnce(&mut Shared) -> R) -> R {
        critical_section::with(|cs| f(&mut self.shared.borrow_ref_mut(cs)))
    }

    /// Handle one interrupt event. Interrupts do not nest, so each event runs to
    /// completion before the next.
    pub fn dispatch<B: Board>(&self, event: Event, board: &mut B) {
        match event {
            Event::ByteReceived(byte) => self.with(|s| s.inbound.push(byte)),
            Event::TransmitReady => match self.with(|s| s.outbound.pop()) {
                Some(byte) => board.transmit(byte),
                None => board.stop_transmit(),
            },
            Event::Tick => self.tick(board),
            Event::ButtonSample(levels) => self.with(|s| s.session.record_buttons(levels)),
            Event::SampleReady(raw) => self.with(|s| s.session.record_sample(raw)),
        }
    }

    fn tick<B: Board>(&self, board: &mut B) {
        let queued = self.with(|s| {
            if !s.session.is_running() {
                return false;
            }
            let msg = s.session.tick();
            s.outbound.extend(&msg.encode());
            true
        });
        if queued {
            board.start_transmit();
        }
    }

    /// Pop one inbound byte in a single exclusion window.
    pub fn pop_inbound(&self) -> Option<u8> {
        self.with(|s| s.inbound.pop())
    }

    /// Run the command handler and carry out its board action.
    pub fn apply<B: Board>(&self, cmd: Command, board: &mut B) -> Action {
        let action = self.with(|s| s.session.apply(cmd));
        match action {
            Action::None => {}
            Action::StartTicks => board.set_ticks_enabled(true),
            Action::Reset => self.reset(board),
            Action::ButtonEvents(enabled) => board.set_button_events(enabled),
            Action::IndicatorOn(button) => board.set_indicator(button, true),
            Action::IndicatorsOff => board.clear_indicators(),
        }
        action
    }

    /// Stop the tick source and return every piece of shared state, and the board
    /// outputs the engine drives, to power-on values.
    pub fn reset<B: Board>(&self, board: &mut B) {
        board.set_ticks_enabled(false);
        self.with(|s| *s = Shared::new());
        board.set_button_events(false);
        board.clear_indicators();
        board.stop_transmit();
    }

    /// Read-only view of the session.
    pub fn session<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
        self.with(|s| f(&s.session))
    }

    /// Bytes waiting in the outbound channel.
    pub fn outbound_len(&self) -> usize {
        self.with(|s| s.outbound.len())
    }

    /// Bytes waiting in the inbound channel.
    pub fn inbound_len(&self) -> usize {
        self.with(|s| s.inbound.len())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Foreground half of the engine: owns the command parser.
pub struct Foreground {
    parser: CommandParser,
}

impl Foreground {
    pub const fn new() -> Self {
        Self {
            parser: CommandParser::new(),
        }
    }

    /// One iteration of the main loop.
    pub fn poll<B: Board>(&mut self, engine: &Engine, board: &mut B) {
        self.drain(engine, board);
        if engine.session(Session::wants_samples) {
            board.request_sample();
        }
    }

    /// Parse every byte currently in the inbound channel. Returns the number of
    /// commands handled.
    pub fn drain<B: Board>(&mut self, engine: &Engine, board: &mut B) -> usize {
        let mut handled = 0;
        while let Some(byte) = engine.pop_inbound() {
            match self.parser.push(byte) {
                Ok(Some(cmd)) => {
                    log_command(&cmd);
                    if engine.apply(cmd, board) == Action::Reset {
                        self.parser.reset();
                    }
                    handled += 1;
                }
                Ok(None) => {}
                Err(e) => debug!("dropped frame: {:?}", e),
            }
        }
        handled
    }

    pub fn parser_idle(&self) -> bool {
        self.parser.is_idle()
    }
}

impl Default for Foreground {
    fn default() -> Self {
        Self::new()
    }
}

fn log_command(cmd: &Command) {
    match *cmd {
        Command::Go { distance } => info!("session start, distance {}", distance),
        Command::End => info!("session end, resetting"),
        Command::Altitude { period_ms } if !AltitudePeriod::from_millis(period_ms).is_supported() => {
            warn!("unsupported altitude period {} ms", period_ms)
        }
        other => debug!("command {:?}", other),
    }
}
