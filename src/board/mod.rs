// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Peripheral seam between the engine and the hardware.
//!
//! The engine never touches registers. Everything it needs from the outside world goes
//! through [`Board`]: the STM32 implementation lives in `hw::board`, and [`MockBoard`]
//! records calls for host tests.

pub mod mock;

pub use mock::MockBoard;

use crate::session::ButtonId;

/// External collaborators driven by the engine.
pub trait Board {
    /// Enable or disable the periodic tick source.
    fn set_ticks_enabled(&mut self, enabled: bool);

    /// Drive one indicator.
    fn set_indicator(&mut self, button: ButtonId, on: bool);

    /// Enable or disable delivery of button level samples.
    fn set_button_events(&mut self, enabled: bool);

    /// New bytes are queued in the outbound channel; begin pulling them.
    fn start_transmit(&mut self);

    /// Put one byte on the wire.
    fn transmit(&mut self, byte: u8);

    /// The outbound channel ran dry.
    fn stop_transmit(&mut self);

    /// Start one analog conversion; the result arrives as a sample-ready event.
    fn request_sample(&mut self);

    /// Switch every indicator off.
    fn clear_indicators(&mut self) {
        for id in ButtonId::ALL {
            self.set_indicator(id, false);
        }
    }
}
