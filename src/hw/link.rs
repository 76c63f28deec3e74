// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Interrupt-driven serial link to the autopilot.
//!
//! RXNE stays enabled for the whole run. TXE is only enabled while the outbound channel
//! has data: enabling it fires the interrupt right away, and the handler feeds one byte
//! per interrupt until the engine reports the channel empty.

use stm32f7xx_hal::{
    pac::{self, USART2},
    prelude::*,
    serial::{Event, Pins, Serial},
};

/// The autopilot link on USART2.
pub struct SerialLink<PINS> {
    serial: Serial<USART2, PINS>,
    sending: bool,
}

impl<PINS: Pins<USART2>> SerialLink<PINS> {
    pub fn new(mut serial: Serial<USART2, PINS>) -> Self {
        serial.listen(Event::Rxne);
        Self {
            serial,
            sending: false,
        }
    }

    /// Take the received byte, if any.
    ///
    /// Overrun, framing, noise and parity errors are cleared by the failed read; the
    /// affected byte is discarded.
    pub fn read_byte(&mut self) -> Option<u8> {
        self.serial.read().ok()
    }

    /// True while transmission is enabled and the data register can take a byte.
    pub fn ready_to_send(&self) -> bool {
        let regs = unsafe { &*pac::USART2::ptr() };
        self.sending && regs.isr.read().txe().bit_is_set()
    }

    pub fn write_byte(&mut self, b: u8) {
        let _ = self.serial.write(b);
    }

    pub fn start(&mut self) {
        self.sending = true;
        self.serial.listen(Event::Txe);
    }

    pub fn stop(&mut self) {
        self.sending = false;
        self.serial.unlisten(Event::Txe);
    }
}
