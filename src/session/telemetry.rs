// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Telemetry scheduler.
//!
//! One call per tick. The distance always moves first, then exactly one message is chosen:
//! a due altitude report, else the lowest pending button, else the distance.

use super::Session;
use crate::protocol::Telemetry;

/// Map a 10-bit analog reading to one of four altitude classes.
pub fn adc_to_alt(value: u16) -> u16 {
    match value {
        0..=255 => 9000,
        256..=511 => 10000,
        512..=767 => 11000,
        _ => 12000,
    }
}

impl Session {
    /// Advance the simulation by one tick and pick the message to send.
    pub fn tick(&mut self) -> Telemetry {
        let v = &mut self.vehicle;

        v.remaining_distance = v.remaining_distance.saturating_sub(v.speed);
        v.tick_counter = v.tick_counter.wrapping_add(1);

        let period = v.altitude_period;
        let msg = if !period.is_off() && u16::from(v.tick_counter) == period.ticks() {
            v.tick_counter = 0;
            Telemetry::Altitude(adc_to_alt(v.latest_adc_sample))
        } else if let Some(button) = self.buttons.take_pending() {
            Telemetry::ButtonPress(button)
        } else {
            Telemetry::Distance(v.remaining_distance)
        };

        // The equality above is never reached while off; keep the counter from wrapping.
        if period.is_off() {
            v.tick_counter = 0;
        }

        msg
    }
}
