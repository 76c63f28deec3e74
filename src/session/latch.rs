// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Button edge latch.
//!
//! A button report is a completed press-and-release: the level must be seen asserted on
//! one sample and de-asserted on the next, while the button is enabled.

use crate::config::{BUTTON_COUNT, FIRST_BUTTON_REPORT_ID};

/// One of the four physical buttons, in reporting priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonId {
    B0 = 0,
    B1 = 1,
    B2 = 2,
    B3 = 3,
}

impl ButtonId {
    pub const ALL: [ButtonId; BUTTON_COUNT] =
        [ButtonId::B0, ButtonId::B1, ButtonId::B2, ButtonId::B3];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Identifier sent in `$PRSxx#` (4..=7).
    #[inline]
    pub fn report_id(self) -> u8 {
        FIRST_BUTTON_REPORT_ID + self as u8
    }

    pub fn from_report_id(id: u8) -> Option<Self> {
        Self::from_index(usize::from(id.checked_sub(FIRST_BUTTON_REPORT_ID)?))
    }

    /// Indicator numbering used by `$LEDxx#` (1..=4).
    pub fn from_indicator(id: u8) -> Option<Self> {
        Self::from_index(usize::from(id.checked_sub(1)?))
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Self::ALL.get(i).copied()
    }
}

/// Latch state of one button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    pub enabled: bool,
    pub previous_level: bool,
    pub current_level: bool,
    pub pending_send: bool,
}

impl ButtonState {
    const RELEASED: Self = Self {
        enabled: false,
        previous_level: false,
        current_level: false,
        pending_send: false,
    };
}

pub struct ButtonLatch {
    buttons: [ButtonState; BUTTON_COUNT],
}

impl ButtonLatch {
    pub const fn new() -> Self {
        Self {
            buttons: [ButtonState::RELEASED; BUTTON_COUNT],
        }
    }

    /// Feed one sample of all button levels (`true` = asserted).
    pub fn sample(&mut self, levels: [bool; BUTTON_COUNT]) {
        for (button, level) in self.buttons.iter_mut().zip(levels) {
            button.current_level = level;
            if button.enabled && button.previous_level && !button.current_level {
                button.pending_send = true;
            }
            button.previous_level = button.current_level;
        }
    }

    pub fn enable(&mut self, id: ButtonId) {
        self.buttons[id.index()].enabled = true;
    }

    /// Disable every button. Pending reports already latched are kept.
    pub fn disable_all(&mut self) {
        for button in self.buttons.iter_mut() {
            button.enabled = false;
        }
    }

    /// Clear and return the first pending button in `ButtonId` order.
    pub fn take_pending(&mut self) -> Option<ButtonId> {
        let id = ButtonId::ALL
            .into_iter()
            .find(|id| self.buttons[id.index()].pending_send)?;
        self.buttons[id.index()].pending_send = false;
        Some(id)
    }

    #[inline]
    pub fn state(&self, id: ButtonId) -> &ButtonState {
        &self.buttons[id.index()]
    }

    pub fn any_pending(&self) -> bool {
        self.buttons.iter().any(|b| b.pending_send)
    }
}

impl Default for ButtonLatch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn levels(id: ButtonId, level: bool) -> [bool; BUTTON_COUNT] {
        let mut l = [false; BUTTON_COUNT];
        l[id.index()] = level;
        l
    }

    #[test]
    fn press_then_release_latches_once() {
        let mut latch = ButtonLatch::new();
        latch.enable(ButtonId::B1);
        for level in [true, true, false] {
            latch.sample(levels(ButtonId::B1, level));
        }
        assert!(latch.state(ButtonId::B1).pending_send);
        assert_eq!(latch.take_pending(), Some(ButtonId::B1));
        assert_eq!(latch.take_pending(), None);
    }

    #[test]
    fn press_without_release_latches_nothing() {
        let mut latch = ButtonLatch::new();
        latch.enable(ButtonId::B0);
        for level in [false, true, true] {
            latch.sample(levels(ButtonId::B0, level));
        }
        assert!(!latch.any_pending());
    }

    #[test]
    fn disabled_button_never_latches() {
        let mut latch = ButtonLatch::new();
        latch.enable(ButtonId::B2);
        latch.sample(levels(ButtonId::B2, true));
        latch.sample(levels(ButtonId::B2, true));
        latch.disable_all();
        latch.sample(levels(ButtonId::B2, false));
        assert!(!latch.any_pending());
    }

    #[test]
    fn previous_level_tracks_disabled_buttons() {
        let mut latch = ButtonLatch::new();
        latch.sample(levels(ButtonId::B3, true));
        assert!(latch.state(ButtonId::B3).previous_level);

        // Enabling after the press: the release still completes an edge.
        latch.enable(ButtonId::B3);
        latch.sample(levels(ButtonId::B3, false));
        assert_eq!(latch.take_pending(), Some(ButtonId::B3));
    }

    #[test]
    fn pending_buttons_drain_in_order() {
        let mut latch = ButtonLatch::new();
        for id in ButtonId::ALL {
            latch.enable(id);
        }
        latch.sample([true; BUTTON_COUNT]);
        latch.sample([false; BUTTON_COUNT]);
        assert_eq!(latch.take_pending(), Some(ButtonId::B0));
        assert_eq!(latch.take_pending(), Some(ButtonId::B1));
        assert_eq!(latch.take_pending(), Some(ButtonId::B2));
        assert_eq!(latch.take_pending(), Some(ButtonId::B3));
        assert_eq!(latch.take_pending(), None);
    }

    #[test]
    fn identifiers() {
        assert_eq!(ButtonId::B0.report_id(), 4);
        assert_eq!(ButtonId::B3.report_id(), 7);
        assert_eq!(ButtonId::from_report_id(6), Some(ButtonId::B2));
        assert_eq!(ButtonId::from_report_id(8), None);
        assert_eq!(ButtonId::from_report_id(0), None);
        assert_eq!(ButtonId::from_indicator(1), Some(ButtonId::B0));
        assert_eq!(ButtonId::from_indicator(0), None);
        assert_eq!(ButtonId::from_indicator(5), None);
    }
}
