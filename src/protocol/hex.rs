// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! ASCII hex helpers for frame bodies.

const HEX: &[u8; 16] = b"0123456789ABCDEF";

/// Uppercase hex digit for the low nibble of `nibble`.
#[inline]
pub fn to_hex(nibble: u8) -> u8 {
    HEX[(nibble & 0xF) as usize]
}

/// Value of a hex digit, either case. `None` for anything else.
pub fn to_nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Write `value` as `N` uppercase hex digits, most significant nibble first.
pub fn write_hex<const N: usize>(value: u16) -> [u8; N] {
    let mut out = [0u8; N];
    for (i, slot) in out.iter_mut().enumerate() {
        let shift = 4 * (N - 1 - i);
        *slot = to_hex((value >> shift) as u8);
    }
    out
}
