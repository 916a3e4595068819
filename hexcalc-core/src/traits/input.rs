//! Operator input traits
//!
//! Each source is sampled, never buffered: a call reports what the hardware
//! shows at that instant.

use crate::keypad::KeyCode;

/// Source of keypad presses
pub trait KeySource {
    /// Take a single instantaneous sample of the keypad
    ///
    /// Returns [`KeyCode::NONE`] when nothing (or an unmapped combination)
    /// is pressed.
    fn scan(&mut self) -> KeyCode;
}

/// Push button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Button {
    Btn0 = 0,
    Btn1 = 1,
    Btn2 = 2,
    Btn3 = 3,
}

impl Button {
    /// The console's enter key
    pub const CONFIRM: Button = Button::Btn3;

    pub const ALL: [Button; 4] = [Button::Btn0, Button::Btn1, Button::Btn2, Button::Btn3];

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn mask(self) -> u8 {
        1 << (self as u8)
    }
}

/// Snapshot of the four push buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonState(u8);

impl ButtonState {
    pub const MASK: u8 = 0b1111;

    /// Build from raw bits; bits above BTN3 are ignored
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::MASK)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_pressed(self, button: Button) -> bool {
        self.0 & button.mask() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The pressed button, if exactly one is down
    pub fn single(self) -> Option<Button> {
        Button::ALL.into_iter().find(|b| b.mask() == self.0)
    }
}

/// Source of push button state
pub trait ButtonSource {
    fn buttons(&mut self) -> ButtonState;

    fn is_pressed(&mut self, button: Button) -> bool {
        self.buttons().is_pressed(button)
    }
}

/// Source of slide switch state
pub trait SwitchSource {
    /// Switch positions, switch 0 in bit 0 (12 switches)
    fn switches(&mut self) -> u16;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_masks() {
        assert_eq!(Button::Btn0.mask(), 0b0001);
        assert_eq!(Button::CONFIRM.mask(), 0b1000);
    }

    #[test]
    fn test_button_state() {
        let state = ButtonState::from_bits(0b1111_1000);
        assert_eq!(state.bits(), 0b1000);
        assert!(state.is_pressed(Button::Btn3));
        assert!(!state.is_pressed(Button::Btn0));
        assert!(!state.is_empty());
    }

    #[test]
    fn test_single_button() {
        assert_eq!(ButtonState::from_bits(0b0001).single(), Some(Button::Btn0));
        assert_eq!(ButtonState::from_bits(0b0100).single(), Some(Button::Btn2));
        // Chords and nothing are not a single press
        assert_eq!(ButtonState::from_bits(0b0011).single(), None);
        assert_eq!(ButtonState::from_bits(0).single(), None);
    }
}
