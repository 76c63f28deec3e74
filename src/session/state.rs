// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Simulated vehicle state.

/// How often an altitude report replaces the distance report.
///
/// The autopilot only ever sends 0, 200, 400 or 600 ms. The period is stored in ticks
/// (`ms / 100`), so other multiples of 100 ms still yield a tick count; those are kept as
/// [`AltitudePeriod::Unsupported`] so callers can flag them. Anything below 100 ms is
/// `Off`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AltitudePeriod {
    Off,
    Ms200,
    Ms400,
    Ms600,
    /// Nonstandard period, in ticks.
    Unsupported(u16),
}

impl AltitudePeriod {
    pub fn from_millis(ms: u16) -> Self {
        match ms / 100 {
            0 => AltitudePeriod::Off,
            2 => AltitudePeriod::Ms200,
            4 => AltitudePeriod::Ms400,
            6 => AltitudePeriod::Ms600,
            ticks => AltitudePeriod::Unsupported(ticks),
        }
    }

    /// Period length in ticks; 0 when off.
    pub fn ticks(self) -> u16 {
        match self {
            AltitudePeriod::Off => 0,
            AltitudePeriod::Ms200 => 2,
            AltitudePeriod::Ms400 => 4,
            AltitudePeriod::Ms600 => 6,
            AltitudePeriod::Unsupported(ticks) => ticks,
        }
    }

    #[inline]
    pub fn is_off(self) -> bool {
        self == AltitudePeriod::Off
    }

    #[inline]
    pub fn is_supported(self) -> bool {
        !matches!(self, AltitudePeriod::Unsupported(_))
    }
}

/// Distance, speed and reporting configuration of the simulated vehicle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleState {
    /// Counts down by `speed` every tick, floored at 0.
    pub remaining_distance: u16,
    pub speed: u16,
    pub altitude_period: AltitudePeriod,
    /// Ticks since the last altitude report.
    pub tick_counter: u8,
    /// Button edges are only observed in manual mode.
    pub manual_mode: bool,
    /// Last raw analog reading, 0..=1023.
    pub latest_adc_sample: u16,
}

impl VehicleState {
    pub const fn new() -> Self {
        Self {
            remaining_distance: 0,
            speed: 0,
            altitude_period: AltitudePeriod::Off,
            tick_counter: 0,
            manual_mode: false,
            latest_adc_sample: 0,
        }
    }
}

impl Default for VehicleState {
    fn default() -> Self {
        Self::new()
    }
}
