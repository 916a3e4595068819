//! Operand entry
//!
//! Operands are typed one hex digit at a time, most significant first.

use crate::keypad::KeyCode;

/// Value of an operand confirmed without any digits
pub const EMPTY_OPERAND: u32 = u32::MAX;

/// Operand being typed on the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OperandEntry {
    value: u32,
    digits: u8,
    max_digits: u8,
}

impl OperandEntry {
    pub fn new(max_digits: u8) -> Self {
        Self {
            value: 0,
            digits: 0,
            max_digits: max_digits.min(8),
        }
    }

    /// Shift in one key
    ///
    /// Returns the accepted digit, or `None` if the key is not a hex digit
    /// or the operand is already full.
    pub fn push(&mut self, key: KeyCode) -> Option<u8> {
        let digit = key.digit()?;
        if self.is_full() {
            return None;
        }
        self.value = (self.value << 4) | digit as u32;
        self.digits += 1;
        Some(digit)
    }

    pub fn is_full(&self) -> bool {
        self.digits >= self.max_digits
    }

    pub fn is_empty(&self) -> bool {
        self.digits == 0
    }

    pub fn digits(&self) -> u8 {
        self.digits
    }

    /// Entered value, `None` if no digit was typed
    pub fn value(&self) -> Option<u32> {
        if self.is_empty() {
            None
        } else {
            Some(self.value)
        }
    }

    /// Entered value, with an empty entry reading as all ones
    pub fn finish(&self) -> u32 {
        self.value().unwrap_or(EMPTY_OPERAND)
    }
}
