// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Command handlers.
//!
//! Each handler only touches [`Session`] and runs inside the engine's critical section, so
//! nothing here logs or blocks. Anything that has to reach the hardware is returned as an
//! [`Action`] and carried out by the engine once the critical section is released.

use super::{AltitudePeriod, ButtonId, Session};
use crate::protocol::Command;

/// Board-side follow-up of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    /// Enable the tick source.
    StartTicks,
    /// Stop the tick source and restore every piece of state to power-on values.
    Reset,
    /// Enable or disable button sampling.
    ButtonEvents(bool),
    /// Switch one indicator on.
    IndicatorOn(ButtonId),
    /// Switch all indicators off.
    IndicatorsOff,
}

impl Session {
    /// Apply a parsed command.
    pub fn apply(&mut self, cmd: Command) -> Action {
        match cmd {
            Command::Go { distance } => {
                self.vehicle.remaining_distance = distance;
                self.running = true;
                Action::StartTicks
            }
            Command::End => {
                self.vehicle.remaining_distance = 0;
                self.running = false;
                Action::Reset
            }
            Command::Speed(speed) => {
                self.vehicle.speed = speed;
                Action::None
            }
            Command::Altitude { period_ms } => {
                self.vehicle.altitude_period = AltitudePeriod::from_millis(period_ms);
                self.vehicle.tick_counter = 0;
                Action::None
            }
            Command::Manual(flag) => {
                let manual = flag != 0;
                self.vehicle.manual_mode = manual;
                Action::ButtonEvents(manual)
            }
            Command::Led(0) => {
                self.buttons.disable_all();
                Action::IndicatorsOff
            }
            Command::Led(id) => match ButtonId::from_indicator(id) {
                Some(button) => {
                    self.buttons.enable(button);
                    Action::IndicatorOn(button)
                }
                None => Action::None,
            },
        }
    }
}
