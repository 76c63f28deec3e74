// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Fixed-capacity circular byte buffer shared between interrupt handlers and the
//! foreground loop.
//!
//! A `ByteChannel` itself is not synchronized. Both instances live inside the
//! [`Engine`](crate::engine::Engine) critical-section mutex, so every push/pop happens in
//! an exclusion window.

use crate::config::CHANNEL_CAPACITY;

/// Ring buffer with `head` (next write slot) and `tail` (next read slot).
///
/// `head == tail` means empty. There is no separate "full" state: pushing into a
/// channel that already holds `CHANNEL_CAPACITY - 1` bytes wraps `head` onto `tail` and
/// the contents are lost. Callers keep traffic bounded so this never happens.
pub struct ByteChannel {
    buf: [u8; CHANNEL_CAPACITY],
    head: usize,
    tail: usize,
}

impl ByteChannel {
    pub const fn new() -> Self {
        Self {
            buf: [0; CHANNEL_CAPACITY],
            head: 0,
            tail: 0,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// Number of bytes waiting to be popped.
    pub fn len(&self) -> usize {
        if self.head >= self.tail {
            self.head - self.tail
        } else {
            CHANNEL_CAPACITY - self.tail + self.head
        }
    }

    /// Append one byte at `head`.
    pub fn push(&mut self, byte: u8) {
        self.buf[self.head] = byte;
        self.head = (self.head + 1) % CHANNEL_CAPACITY;
    }

    /// Append every byte of `bytes` in order.
    pub fn extend(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.push(b);
        }
    }

    /// Take the byte at `tail`, or `None` when the channel is empty.
    pub fn pop(&mut self) -> Option<u8> {
        if self.is_empty() {
            return None;
        }
        let byte = self.buf[self.tail];
        self.tail = (self.tail + 1) % CHANNEL_CAPACITY;
        Some(byte)
    }

    /// Drop all pending bytes.
    pub fn clear(&mut self) {
        self.head = 0;
        self.tail = 0;
    }
}

impl Default for ByteChannel {
    fn default() -> Self {
        Self::new()
    }
}
