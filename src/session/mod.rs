// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Session
//!
//! Everything the simulator remembers between frames: the vehicle state and the button
//! latch. A `Session` is plain data; [`Engine`](crate::engine::Engine) owns the only
//! instance and guards it with a critical section.
//!
//! ## Modules
//!
//! - [`state`] - Vehicle state and altitude period conversion.
//! - [`latch`] - Button press-and-release latch.
//! - [`commands`] - State transitions for received commands.
//! - [`telemetry`] - Per-tick telemetry selection.

pub mod commands;
pub mod latch;
pub mod state;
pub mod telemetry;

pub use commands::Action;
pub use latch::{ButtonId, ButtonLatch, ButtonState};
pub use state::{AltitudePeriod, VehicleState};
pub use telemetry::adc_to_alt;

/// Vehicle state plus button latch, reset together on `END`.
pub struct Session {
    pub vehicle: VehicleState,
    pub buttons: ButtonLatch,
    running: bool,
}

impl Session {
    pub const fn new() -> Self {
        Self {
            vehicle: VehicleState::new(),
            buttons: ButtonLatch::new(),
            running: false,
        }
    }

    /// True between `GOO` and `END`.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Latch a new analog reading, masked to the 10-bit domain.
    pub fn record_sample(&mut self, raw: u16) {
        self.vehicle.latest_adc_sample = raw & crate::config::ADC_MAX;
    }

    /// Feed button levels; ignored outside manual mode.
    pub fn record_buttons(&mut self, levels: [bool; crate::config::BUTTON_COUNT]) {
        if self.vehicle.manual_mode {
            self.buttons.sample(levels);
        }
    }

    /// Whether the foreground loop should keep the analog source busy.
    pub fn wants_samples(&self) -> bool {
        !self.vehicle.altitude_period.is_off()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
