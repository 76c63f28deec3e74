// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

pub mod hex;
pub mod messages;
pub mod parser;

pub use messages::{Command, Frame, FrameBuf, Telemetry};
pub use parser::{CommandParser, FrameError, Parser, TelemetryParser};
