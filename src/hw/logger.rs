// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! `log` backend printing to the debug USART.
//!
//! Each record is formatted into a line buffer first, then written one byte per critical
//! section so a long line never holds off the link or tick interrupts for more than one
//! character time.

use core::cell::RefCell;
use core::fmt::Write as _;

use critical_section::Mutex;
use heapless::String;
use log::{LevelFilter, Metadata, Record, SetLoggerError};
use stm32f7xx_hal::pac::USART1;

use crate::hw::usart::Usart;

/// Longest line printed; anything past it is cut.
const LINE_LEN: usize = 128;

static DEBUG_PORT: Mutex<RefCell<Option<Usart<USART1>>>> = Mutex::new(RefCell::new(None));

static LOGGER: UsartLogger = UsartLogger;

pub struct UsartLogger;

/// Install the logger on `usart`.
pub fn init(usart: Usart<USART1>, level: LevelFilter) -> Result<(), SetLoggerError> {
    critical_section::with(|cs| DEBUG_PORT.borrow_ref_mut(cs).replace(usart));
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

impl log::Log for UsartLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let mut line: String<LINE_LEN> = String::new();
        // A full buffer just truncates the line.
        let _ = write!(line, "[{}] {}", record.level(), record.args());

        for &b in line.as_bytes().iter().chain(b"\r\n") {
            critical_section::with(|cs| {
                if let Some(port) = DEBUG_PORT.borrow_ref_mut(cs).as_mut() {
                    port.write_byte(b);
                }
            });
        }
    }

    fn flush(&self) {
        critical_section::with(|cs| {
            if let Some(port) = DEBUG_PORT.borrow_ref_mut(cs).as_mut() {
                port.flush();
            }
        });
    }
}
