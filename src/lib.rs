// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Autopilot Simulator Firmware
//!
//! This crate contains the firmware for a vehicle simulator board used to exercise an
//! autopilot over a serial link. The autopilot sends textual commands (`$GOO03E8#`,
//! `$SPD000A#`, ...); the board answers with one telemetry frame every 100 ms (remaining
//! distance, altitude class or a button press). Written in Rust, targeting an STM32F777
//! MCU.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`config`] | Compile-time constants (capacities, tick period, baud rates) |
//! | [`channel`] | Ring buffers shared between interrupts and the main loop |
//! | [`protocol`] | Frame parser and encoder for commands and telemetry |
//! | [`session`] | Vehicle state, command handlers, telemetry scheduler, button latch |
//! | [`engine`] | Shared-state handle, interrupt event dispatch, foreground loop |
//! | [`board`] | Peripheral seam used by the engine, plus a recording mock |
//! | `hw` | MCU-level wrappers around USART, ADC, timers, GPIO (feature `stm32`) |
//!
//! ## Getting Started
//!
//! Run the host tests:
//!
//! ```bash
//! cargo test
//! ```
//!
//! Flash the board:
//!
//! ```bash
//! cargo run --release --features stm32 --target thumbv7em-none-eabihf
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod board;
pub mod channel;
pub mod config;
pub mod engine;
pub mod protocol;
pub mod session;

#[cfg(feature = "stm32")]
pub mod hw;
