// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for the STM32F777 simulator board.

use stm32f7xx_hal::{
    gpio::{gpioa, gpioc, gpiod, gpioe, Alternate, Analog, Input, Output, PullDown, PushPull},
    pac,
    prelude::*,
};

pub type Indicator0 = gpiod::PD8<Output<PushPull>>;
pub type Indicator1 = gpiod::PD9<Output<PushPull>>;
pub type Indicator2 = gpiod::PD10<Output<PushPull>>;
pub type Indicator3 = gpiod::PD11<Output<PushPull>>;

pub type Button0 = gpioe::PE5<Input<PullDown>>;
pub type Button1 = gpioe::PE6<Input<PullDown>>;
pub type Button2 = gpioe::PE7<Input<PullDown>>;
pub type Button3 = gpioe::PE8<Input<PullDown>>;

pub type LinkPins = (gpiod::PD5<Alternate<7>>, gpiod::PD6<Alternate<7>>);

/// All board pins. Construct this once at startup using:
///
/// ```ignore
/// let pins = BoardPins::new(dp.GPIOA, dp.GPIOC, dp.GPIOD, dp.GPIOE);
/// ```
pub struct BoardPins {
    pub indicators: IndicatorPins,
    pub buttons: ButtonPins,
    pub link: LinkPins,
    pub usart1: Usart1Pins,
    pub altitude: gpioc::PC0<Analog>, // ADC1_IN10
}

/// Indicator outputs, one per button, active high.
pub struct IndicatorPins {
    pub d0: Indicator0,
    pub d1: Indicator1,
    pub d2: Indicator2,
    pub d3: Indicator3,
}

/// Button inputs, pressed = high. All four share the EXTI9_5 line group.
pub struct ButtonPins {
    pub b0: Button0,
    pub b1: Button1,
    pub b2: Button2,
    pub b3: Button3,
}

/// USART1 (DBG)
pub struct Usart1Pins {
    pub tx: gpioa::PA9<Alternate<7>>,
    pub rx: gpioa::PA10<Alternate<7>>,
}

impl BoardPins {
    /// Create all named pins from raw GPIO peripherals.
    pub fn new(gpioa: pac::GPIOA, gpioc: pac::GPIOC, gpiod: pac::GPIOD, gpioe: pac::GPIOE) -> Self {
        let gpioa = gpioa.split();
        let gpioc = gpioc.split();
        let gpiod = gpiod.split();
        let gpioe = gpioe.split();

        Self {
            indicators: IndicatorPins {
                d0: gpiod.pd8.into_push_pull_output(),
                d1: gpiod.pd9.into_push_pull_output(),
                d2: gpiod.pd10.into_push_pull_output(),
                d3: gpiod.pd11.into_push_pull_output(),
            },

            buttons: ButtonPins {
                b0: gpioe.pe5.into_pull_down_input(),
                b1: gpioe.pe6.into_pull_down_input(),
                b2: gpioe.pe7.into_pull_down_input(),
                b3: gpioe.pe8.into_pull_down_input(),
            },

            // USART2 TX/RX
            link: (gpiod.pd5.into_alternate::<7>(), gpiod.pd6.into_alternate::<7>()),

            usart1: Usart1Pins {
                tx: gpioa.pa9.into_alternate::<7>(),
                rx: gpioa.pa10.into_alternate::<7>(),
            },

            altitude: gpioc.pc0.into_analog(),
        }
    }
}
