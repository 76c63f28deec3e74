// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Compile-time configuration for the simulator firmware.

/// Slots in each byte channel. One slot is always left unused so that
/// `head == tail` can mean "empty".
pub const CHANNEL_CAPACITY: usize = 255;

/// Period of the telemetry tick.
pub const TICK_PERIOD_MS: u32 = 100;

/// Number of physical buttons / indicators.
pub const BUTTON_COUNT: usize = 4;

/// External identifier reported for button 0 (`$PRS04#`); button `i` reports `4 + i`.
pub const FIRST_BUTTON_REPORT_ID: u8 = 4;

/// Largest raw reading produced by the analog sample source (10-bit).
pub const ADC_MAX: u16 = 1023;

/// ADC1 input the altitude potentiometer is wired to (PC0).
pub const ADC_CHANNEL: u8 = 10;

/// Baud rate of the autopilot command link.
pub const LINK_BAUD: u32 = 115_200;

/// Baud rate of the debug terminal.
pub const DEBUG_BAUD: u32 = 115_200;

/// Delay between a button edge and sampling the levels, for contact bounce.
pub const BUTTON_SETTLE_MS: u32 = 1;

/// Longest frame on the wire: `$` + 3 header bytes + 4 digits + `#`.
pub const MAX_FRAME_LEN: usize = 9;
