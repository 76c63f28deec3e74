// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Interrupt-driven ADC1 using direct PAC register access.
//!
//! One channel, 10-bit, software-started. `start()` kicks off a conversion and the
//! end-of-conversion interrupt hands the result to [`Adc::take_result`].
//!
//! Example:
//! ```ignore
//! let mut adc = Adc::adc1(dp.ADC1, ADC_CHANNEL);
//! adc.start();
//! // in the ADC interrupt:
//! if let Some(raw) = adc.take_result() { /* 0..=1023 */ }
//! ```

use stm32f7xx_hal::pac;

pub struct Adc<ADC> {
    adc: ADC,
    busy: bool,
}

fn configure_common() {
    let common = unsafe { &*pac::ADC_COMMON::ptr() };

    // ADC prescaler: PCLK2 / 4
    common.ccr.modify(|_, w| w.adcpre().div4());
}

fn init_adc(adc: &pac::adc1::RegisterBlock, channel: u8) {
    // Power off to configure
    adc.cr2.modify(|_, w| w.adon().clear_bit());

    // 10-bit, end-of-conversion interrupt
    adc.cr1.modify(|_, w| {
        w.res().bits(0b01);
        w.eocie().set_bit()
    });
    adc.cr2.modify(|_, w| {
        w.cont().clear_bit();
        w.align().right();
        w.exten().disabled();
        w
    });

    // Long sample time, the altitude input is a slow potentiometer
    if channel <= 9 {
        adc.smpr2
            .modify(|r, w| unsafe { w.bits(r.bits() | (0b111 << (3 * channel as u32))) });
    } else {
        adc.smpr1
            .modify(|r, w| unsafe { w.bits(r.bits() | (0b111 << (3 * (channel as u32 - 10)))) });
    }

    // Sequence length = 1 conversion on `channel`
    adc.sqr1.modify(|_, w| w.l().bits(0));
    adc.sqr3.modify(|_, w| unsafe { w.sq1().bits(channel & 0x1F) });

    // Power on
    adc.cr2.modify(|_, w| w.adon().set_bit());
}

impl Adc<pac::ADC1> {
    /// Create and initialize ADC1 on a single channel.
    pub fn adc1(adc1: pac::ADC1, channel: u8) -> Self {
        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb2enr.modify(|_, w| w.adc1en().set_bit());

        configure_common();
        init_adc(&adc1, channel);

        Self {
            adc: adc1,
            busy: false,
        }
    }

    /// Start a conversion unless one is already running.
    pub fn start(&mut self) {
        if self.busy {
            return;
        }
        self.busy = true;
        self.adc.cr2.modify(|_, w| w.swstart().set_bit());
    }

    /// Result of a finished conversion. Reading the data register clears EOC.
    pub fn take_result(&mut self) -> Option<u16> {
        if self.adc.sr.read().eoc().bit_is_clear() {
            return None;
        }
        self.busy = false;
        Some(self.adc.dr.read().data().bits())
    }
}
