// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Indicator LEDs, one per button.

use embedded_hal::digital::v2::OutputPin;

use crate::hw::pins::{Indicator0, Indicator1, Indicator2, Indicator3, IndicatorPins};
use crate::session::ButtonId;

/// Whether the LED is driven active-high or active-low on the board wiring.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ActiveLevel {
    High,
    Low,
}

/// LED abstraction that remembers its active level and last known state.
pub struct Led<PIN: OutputPin> {
    pin: PIN,
    active: ActiveLevel,
    is_on: bool,
}

impl<PIN: OutputPin> Led<PIN> {
    /// Create an LED wrapper, initializing it to OFF.
    pub fn new(pin: PIN, active: ActiveLevel) -> Self {
        let mut led = Self {
            pin,
            active,
            is_on: true,
        };
        led.off();
        led
    }

    pub fn active_high(pin: PIN) -> Self {
        Self::new(pin, ActiveLevel::High)
    }

    /// Drive the LED logically ON (true) or OFF (false).
    pub fn set(&mut self, on: bool) {
        let drive_high = match self.active {
            ActiveLevel::High => on,
            ActiveLevel::Low => !on,
        };
        if drive_high {
            self.pin.set_high().ok();
        } else {
            self.pin.set_low().ok();
        }
        self.is_on = on;
    }

    #[inline]
    pub fn off(&mut self) {
        self.set(false);
    }

    #[inline]
    pub fn is_on(&self) -> bool {
        self.is_on
    }
}

/// The four indicators, addressed by the button they belong to.
pub struct Indicators {
    d0: Led<Indicator0>,
    d1: Led<Indicator1>,
    d2: Led<Indicator2>,
    d3: Led<Indicator3>,
}

impl Indicators {
    pub fn new(pins: IndicatorPins) -> Self {
        Self {
            d0: Led::active_high(pins.d0),
            d1: Led::active_high(pins.d1),
            d2: Led::active_high(pins.d2),
            d3: Led::active_high(pins.d3),
        }
    }

    pub fn set(&mut self, id: ButtonId, on: bool) {
        match id {
            ButtonId::B0 => self.d0.set(on),
            ButtonId::B1 => self.d1.set(on),
            ButtonId::B2 => self.d2.set(on),
            ButtonId::B3 => self.d3.set(on),
        }
    }

    pub fn is_on(&self, id: ButtonId) -> bool {
        match id {
            ButtonId::B0 => self.d0.is_on(),
            ButtonId::B1 => self.d1.is_on(),
            ButtonId::B2 => self.d2.is_on(),
            ButtonId::B3 => self.d3.is_on(),
        }
    }
}
