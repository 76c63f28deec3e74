// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Button inputs on EXTI lines 5..8.
//!
//! Both edges interrupt. The handler acknowledges the lines and arms the settle timer;
//! the levels are sampled all at once when it expires.

use embedded_hal::digital::v2::InputPin;
use stm32f7xx_hal::{
    gpio::{Edge, ExtiPin},
    pac,
    rcc::APB2,
};

use crate::config::BUTTON_COUNT;
use crate::hw::pins::ButtonPins;

pub struct ButtonInputs {
    pins: ButtonPins,
    exti: pac::EXTI,
}

impl ButtonInputs {
    /// Route the four pins to EXTI, both edges. Interrupts start disabled.
    pub fn new(
        mut pins: ButtonPins,
        mut exti: pac::EXTI,
        syscfg: &mut pac::SYSCFG,
        apb2: &mut APB2,
    ) -> Self {
        pins.b0.make_interrupt_source(syscfg, apb2);
        pins.b1.make_interrupt_source(syscfg, apb2);
        pins.b2.make_interrupt_source(syscfg, apb2);
        pins.b3.make_interrupt_source(syscfg, apb2);

        pins.b0.trigger_on_edge(&mut exti, Edge::RisingFalling);
        pins.b1.trigger_on_edge(&mut exti, Edge::RisingFalling);
        pins.b2.trigger_on_edge(&mut exti, Edge::RisingFalling);
        pins.b3.trigger_on_edge(&mut exti, Edge::RisingFalling);

        Self { pins, exti }
    }

    pub fn set_listening(&mut self, enabled: bool) {
        let exti = &mut self.exti;
        if enabled {
            self.pins.b0.enable_interrupt(exti);
            self.pins.b1.enable_interrupt(exti);
            self.pins.b2.enable_interrupt(exti);
            self.pins.b3.enable_interrupt(exti);
        } else {
            self.pins.b0.disable_interrupt(exti);
            self.pins.b1.disable_interrupt(exti);
            self.pins.b2.disable_interrupt(exti);
            self.pins.b3.disable_interrupt(exti);
        }
    }

    /// Acknowledge every pending button line.
    pub fn clear_pending(&mut self) {
        self.pins.b0.clear_interrupt_pending_bit();
        self.pins.b1.clear_interrupt_pending_bit();
        self.pins.b2.clear_interrupt_pending_bit();
        self.pins.b3.clear_interrupt_pending_bit();
    }

    /// Current levels of all four buttons (`true` = pressed).
    pub fn levels(&self) -> [bool; BUTTON_COUNT] {
        [
            InputPin::is_high(&self.pins.b0).unwrap_or(false),
            InputPin::is_high(&self.pins.b1).unwrap_or(false),
            InputPin::is_high(&self.pins.b2).unwrap_or(false),
            InputPin::is_high(&self.pins.b3).unwrap_or(false),
        ]
    }
}
