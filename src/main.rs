#![no_main]
#![no_std]

use core::cell::RefCell;

use cortex_m_rt::entry;
use critical_section::Mutex;
use log::{info, LevelFilter};
use panic_halt as _;

use hal::{
    pac::{self, interrupt, Interrupt, NVIC},
    prelude::*,
    serial::{Config, Serial},
};
use stm32f7xx_hal as hal;

use autopilot_sim::{
    board::Board,
    config::{ADC_CHANNEL, DEBUG_BAUD, LINK_BAUD},
    engine::{Engine, Event, Foreground},
    hw::{
        logger, Adc, BoardPins, ButtonInputs, Indicators, SerialLink, SettleTimer, Stm32Board,
        TickTimer, Usart,
    },
    session::ButtonId,
};

static ENGINE: Engine = Engine::new();
static BOARD: Mutex<RefCell<Option<Stm32Board>>> = Mutex::new(RefCell::new(None));

/// Run `f` on the board inside a critical section.
fn with_board(f: impl FnOnce(&mut Stm32Board)) {
    critical_section::with(|cs| {
        if let Some(board) = BOARD.borrow_ref_mut(cs).as_mut() {
            f(board);
        }
    });
}

/// Board handle for the foreground loop. Each call takes its own short critical section,
/// so interrupts keep running between board operations.
struct ForegroundBoard;

impl Board for ForegroundBoard {
    fn set_ticks_enabled(&mut self, enabled: bool) {
        with_board(|b| b.set_ticks_enabled(enabled));
    }

    fn set_indicator(&mut self, button: ButtonId, on: bool) {
        with_board(|b| b.set_indicator(button, on));
    }

    fn set_button_events(&mut self, enabled: bool) {
        with_board(|b| b.set_button_events(enabled));
    }

    fn start_transmit(&mut self) {
        with_board(|b| b.start_transmit());
    }

    fn transmit(&mut self, byte: u8) {
        with_board(|b| b.transmit(byte));
    }

    fn stop_transmit(&mut self) {
        with_board(|b| b.stop_transmit());
    }

    fn request_sample(&mut self) {
        with_board(|b| b.request_sample());
    }
}

#[entry]
fn main() -> ! {
    // Peripherals
    let dp = pac::Peripherals::take().unwrap();

    // Clocks
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze();
    let mut apb2 = rcc.apb2;
    let mut syscfg = dp.SYSCFG;

    // GPIO
    let pins = BoardPins::new(dp.GPIOA, dp.GPIOC, dp.GPIOD, dp.GPIOE);

    // USART1 (DBG)
    let debug_cfg = Config {
        baud_rate: DEBUG_BAUD.bps(),
        ..Default::default()
    };
    let debug = Serial::new(dp.USART1, (pins.usart1.tx, pins.usart1.rx), &clocks, debug_cfg);
    // Only fails if a logger is already installed; carry on without one then.
    logger::init(Usart::new(debug), LevelFilter::Info).ok();

    // USART2 (autopilot link)
    let link_cfg = Config {
        baud_rate: LINK_BAUD.bps(),
        ..Default::default()
    };
    let link = Serial::new(dp.USART2, pins.link, &clocks, link_cfg);

    let _altitude_pin = pins.altitude;
    let board = Stm32Board {
        link: SerialLink::new(link),
        ticks: TickTimer::tim6(dp.TIM6, clocks.timclk1().raw()),
        adc: Adc::adc1(dp.ADC1, ADC_CHANNEL),
        indicators: Indicators::new(pins.indicators),
        buttons: ButtonInputs::new(pins.buttons, dp.EXTI, &mut syscfg, &mut apb2),
        settle: SettleTimer::tim7(dp.TIM7, clocks.timclk1().raw()),
    };
    critical_section::with(|cs| BOARD.borrow_ref_mut(cs).replace(board));

    unsafe {
        NVIC::unmask(Interrupt::USART2);
        NVIC::unmask(Interrupt::TIM6_DAC);
        NVIC::unmask(Interrupt::ADC);
        NVIC::unmask(Interrupt::EXTI9_5);
        NVIC::unmask(Interrupt::TIM7);
    }

    info!("autopilot simulator ready");

    let mut foreground = Foreground::new();
    let mut board = ForegroundBoard;
    loop {
        foreground.poll(&ENGINE, &mut board);
    }
}

#[interrupt]
fn USART2() {
    with_board(|board| {
        if let Some(byte) = board.link.read_byte() {
            ENGINE.dispatch(Event::ByteReceived(byte), board);
        }
        if board.link.ready_to_send() {
            ENGINE.dispatch(Event::TransmitReady, board);
        }
    });
}

#[interrupt]
fn TIM6_DAC() {
    with_board(|board| {
        if board.ticks.clear_update() {
            ENGINE.dispatch(Event::Tick, board);
        }
    });
}

#[interrupt]
fn ADC() {
    with_board(|board| {
        if let Some(raw) = board.adc.take_result() {
            ENGINE.dispatch(Event::SampleReady(raw), board);
        }
    });
}

#[interrupt]
fn EXTI9_5() {
    with_board(|board| {
        board.buttons.clear_pending();
        board.settle.arm();
    });
}

#[interrupt]
fn TIM7() {
    with_board(|board| {
        if board.settle.clear_update() {
            let levels = board.buttons.levels();
            ENGINE.dispatch(Event::ButtonSample(levels), board);
        }
    });
}
