//! 32-bit calculator
//!
//! Arithmetic wraps on overflow. The 16-bit operations (bit clear, not,
//! count zeros) only look at and produce the low half-word.

pub mod opcode;
pub mod operand;

pub use opcode::{Arity, Opcode};
pub use operand::{OperandEntry, EMPTY_OPERAND};

/// Mask applied by the 16-bit operations
const HALF_WORD: u32 = 0xFFFF;

/// Calculator with a single storage register
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Calculator {
    storage: u32,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value saved by the last STORE
    pub fn storage(&self) -> u32 {
        self.storage
    }

    /// Run one operation
    ///
    /// Operands an opcode does not use are ignored. Returns `None` for
    /// STORE, which updates the storage register and produces no result.
    pub fn execute(&mut self, opcode: Opcode, lhs: u32, rhs: u32) -> Option<u32> {
        use Opcode::*;

        let result = match opcode {
            Add => lhs.wrapping_add(rhs),
            Subtract => lhs.wrapping_sub(rhs),
            ReverseSubtract => rhs.wrapping_sub(lhs),
            Multiply => lhs.wrapping_mul(rhs),
            MultiplyAccumulate => lhs.wrapping_mul(rhs).wrapping_add(self.storage),
            TestEqual => (lhs == rhs) as u32,
            ShiftLeft => lhs.checked_shl(rhs).unwrap_or(0),
            ShiftRight => lhs.checked_shr(rhs).unwrap_or(0),
            And => lhs & rhs,
            Or => lhs | rhs,
            Xor => lhs ^ rhs,
            BitClear => (lhs & !rhs) & HALF_WORD,
            Not => !lhs & HALF_WORD,
            CountZeros => count_zeros(lhs),
            Store => {
                self.storage = lhs;
                return None;
            }
            Load => self.storage,
        };

        Some(result)
    }
}

/// Leading zeros of the low 16 bits
///
/// Counting starts at bit 15 and stops at the first set bit, so the result
/// is in `0..=16`.
pub fn count_zeros(value: u32) -> u32 {
    ((value & HALF_WORD) as u16).leading_zeros()
}
