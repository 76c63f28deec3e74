// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Basic-timer wrappers: the telemetry tick and the button settle delay.
//!
//! TIM6 and TIM7 are basic timers: count up to ARR, raise the update interrupt. The
//! prescaler brings the timer clock down to 10 kHz so ARR is simply the period in tenths of
//! a millisecond. TIM6 runs free for the tick; TIM7 runs in one-pulse mode so a button
//! edge can be sampled later without blocking in the EXTI handler.

use stm32f7xx_hal::pac;

use crate::config::{BUTTON_SETTLE_MS, TICK_PERIOD_MS};

const COUNTER_HZ: u32 = 10_000;

/// Program PSC/ARR for one update every `period_ms` and enable the update interrupt.
/// The counter is left stopped.
fn configure(tim: &pac::tim6::RegisterBlock, timer_clock_hz: u32, period_ms: u32, one_pulse: bool) {
    // Disable counter while configuring
    tim.cr1.modify(|_, w| w.cen().clear_bit());

    let psc = timer_clock_hz / COUNTER_HZ - 1;
    let arr = period_ms * (COUNTER_HZ / 1000) - 1;
    tim.psc.write(|w| unsafe { w.bits(psc) });
    tim.arr.write(|w| unsafe { w.bits(arr) });

    // Only counter overflow raises an update, not the UG below
    tim.cr1.modify(|_, w| w.urs().set_bit().opm().bit(one_pulse));
    // Latch PSC/ARR
    tim.egr.write(|w| w.ug().set_bit());
    tim.sr.modify(|_, w| w.uif().clear_bit());

    tim.dier.modify(|_, w| w.uie().set_bit());
}

/// Acknowledge the update interrupt. Returns whether it was pending.
fn clear_update(tim: &pac::tim6::RegisterBlock) -> bool {
    let pending = tim.sr.read().uif().bit_is_set();
    if pending {
        tim.sr.modify(|_, w| w.uif().clear_bit());
    }
    pending
}

/// Restart counting from zero.
fn restart(tim: &pac::tim6::RegisterBlock) {
    tim.cnt.write(|w| unsafe { w.bits(0) });
    tim.sr.modify(|_, w| w.uif().clear_bit());
    tim.cr1.modify(|_, w| w.cen().set_bit());
}

pub struct TickTimer {
    tim: pac::TIM6,
}

impl TickTimer {
    /// Configure TIM6 for one update every `TICK_PERIOD_MS`. The counter is left stopped.
    ///
    /// `timer_clock_hz` is the APB1 timer clock.
    pub fn tim6(tim6: pac::TIM6, timer_clock_hz: u32) -> Self {
        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb1enr.modify(|_, w| w.tim6en().set_bit());

        configure(&tim6, timer_clock_hz, TICK_PERIOD_MS, false);
        Self { tim: tim6 }
    }

    pub fn start(&mut self) {
        restart(&self.tim);
    }

    pub fn stop(&mut self) {
        self.tim.cr1.modify(|_, w| w.cen().clear_bit());
        self.tim.sr.modify(|_, w| w.uif().clear_bit());
    }

    pub fn clear_update(&mut self) -> bool {
        clear_update(&self.tim)
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.tim.cr1.read().cen().bit_is_set()
    }
}

/// One-shot delay between a button edge and sampling the levels.
pub struct SettleTimer {
    tim: pac::TIM7,
}

impl SettleTimer {
    /// Configure TIM7 for a single update `BUTTON_SETTLE_MS` after [`arm`](Self::arm).
    pub fn tim7(tim7: pac::TIM7, timer_clock_hz: u32) -> Self {
        let rcc = unsafe { &*pac::RCC::ptr() };
        rcc.apb1enr.modify(|_, w| w.tim7en().set_bit());

        configure(&tim7, timer_clock_hz, BUTTON_SETTLE_MS, true);
        Self { tim: tim7 }
    }

    /// Start (or restart) the delay. Another edge while armed pushes the sample back.
    pub fn arm(&mut self) {
        restart(&self.tim);
    }

    /// True once when the delay has elapsed.
    pub fn clear_update(&mut self) -> bool {
        clear_update(&self.tim)
    }
}
