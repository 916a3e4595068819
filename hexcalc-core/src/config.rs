//! Console configuration
//!
//! Timing and entry limits for the operator console. The defaults match the
//! lab board and are what the firmware uses.

use crate::traits::Button;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Longest operand, in hex digits
pub const MAX_OPERAND_DIGITS: u8 = 4;

/// Pause after each accepted key or confirm press, in milliseconds
///
/// The keypad and buttons are sampled without any debounce of their own;
/// this pause is what keeps a single press from registering twice.
pub const KEY_DELAY_MS: u32 = 250;

/// Console configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConsoleConfig {
    /// Pause after an accepted key or confirm press (ms)
    pub key_delay_ms: u32,
    /// Digits accepted per operand; extra keys are ignored
    pub max_operand_digits: u8,
    /// Button that ends opcode and operand entry
    #[cfg_attr(feature = "serde", serde(skip, default = "confirm_button"))]
    pub confirm: Button,
}

#[cfg(feature = "serde")]
fn confirm_button() -> Button {
    Button::CONFIRM
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            key_delay_ms: KEY_DELAY_MS,
            max_operand_digits: MAX_OPERAND_DIGITS,
            confirm: Button::CONFIRM,
        }
    }
}

impl ConsoleConfig {
    /// Operand width in digits, clamped to what fits in 32 bits
    pub fn operand_digits(&self) -> u8 {
        self.max_operand_digits.min(8)
    }
}
