// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! [`Board`] implementation for the STM32F777 simulator board.

use crate::board::Board;
use crate::hw::{
    adc::Adc, buttons::ButtonInputs, led::Indicators, link::SerialLink, pins::LinkPins,
    timer::{SettleTimer, TickTimer},
};
use crate::session::ButtonId;

use stm32f7xx_hal::pac;

/// Every peripheral the engine drives.
pub struct Stm32Board {
    pub link: SerialLink<LinkPins>,
    pub ticks: TickTimer,
    pub adc: Adc<pac::ADC1>,
    pub indicators: Indicators,
    pub buttons: ButtonInputs,
    pub settle: SettleTimer,
}

impl Board for Stm32Board {
    fn set_ticks_enabled(&mut self, enabled: bool) {
        if enabled {
            // A repeated GOO must not restart the tick phase.
            if !self.ticks.is_running() {
                self.ticks.start();
            }
        } else {
            self.ticks.stop();
        }
    }

    fn set_indicator(&mut self, button: ButtonId, on: bool) {
        self.indicators.set(button, on);
    }

    fn set_button_events(&mut self, enabled: bool) {
        self.buttons.set_listening(enabled);
    }

    fn start_transmit(&mut self) {
        self.link.start();
    }

    fn transmit(&mut self, byte: u8) {
        self.link.write_byte(byte);
    }

    fn stop_transmit(&mut self) {
        self.link.stop();
    }

    fn request_sample(&mut self) {
        self.adc.start();
    }
}
