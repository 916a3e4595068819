//! Calculator opcodes
//!
//! The opcode is read from the low four slide switches, so every 4-bit value
//! is a valid opcode.

/// Calculator operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Opcode {
    Add = 0,
    Subtract = 1,
    ReverseSubtract = 2,
    Multiply = 3,
    /// Multiply, then add the stored value
    MultiplyAccumulate = 4,
    /// 1 if the operands are equal, else 0
    TestEqual = 5,
    ShiftLeft = 6,
    ShiftRight = 7,
    And = 8,
    Or = 9,
    Xor = 10,
    /// Clear the bits of the first operand set in the second (16-bit)
    BitClear = 11,
    /// Invert the first operand (16-bit)
    Not = 12,
    /// Leading zeros of the first operand (16-bit)
    CountZeros = 13,
    /// Save the first operand
    Store = 14,
    /// Recall the saved value
    Load = 15,
}

/// Number of operands an opcode consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Arity {
    Nullary,
    Unary,
    Binary,
}

impl Opcode {
    /// Decode the low nibble of a switch reading
    pub fn from_bits(bits: u16) -> Self {
        use Opcode::*;

        match bits & 0xF {
            0 => Add,
            1 => Subtract,
            2 => ReverseSubtract,
            3 => Multiply,
            4 => MultiplyAccumulate,
            5 => TestEqual,
            6 => ShiftLeft,
            7 => ShiftRight,
            8 => And,
            9 => Or,
            10 => Xor,
            11 => BitClear,
            12 => Not,
            13 => CountZeros,
            14 => Store,
            _ => Load,
        }
    }

    pub const fn bits(self) -> u8 {
        self as u8
    }

    pub fn arity(self) -> Arity {
        match self as u8 {
            0..=11 => Arity::Binary,
            12..=14 => Arity::Unary,
            _ => Arity::Nullary,
        }
    }

    /// Whether a result line is printed after execution
    pub fn prints_result(self) -> bool {
        self != Opcode::Store
    }

    /// Operator text echoed on the console
    pub fn label(self) -> &'static str {
        use Opcode::*;

        match self {
            Add => "+",
            Subtract => "-",
            ReverseSubtract => " - (REVERSE SUBTRACT)",
            Multiply => "x",
            MultiplyAccumulate => "x (MULTIPLY + STORED)",
            TestEqual => "== (TEST EQUAL)",
            ShiftLeft => "<<",
            ShiftRight => ">>",
            And => "AND",
            Or => "OR",
            Xor => "XOR",
            BitClear => "BIT CLEAR",
            Not => "NOT",
            CountZeros => "COUNT ZEROS",
            Store => "STORE",
            Load => "LOAD",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bits_round_trips_every_nibble() {
        for bits in 0u16..16 {
            assert_eq!(Opcode::from_bits(bits).bits() as u16, bits);
        }
    }

    #[test]
    fn test_from_bits_ignores_upper_switches() {
        assert_eq!(Opcode::from_bits(0xFF3), Opcode::Multiply);
        assert_eq!(Opcode::from_bits(0x010), Opcode::Add);
    }

    #[test]
    fn test_arity() {
        assert_eq!(Opcode::Add.arity(), Arity::Binary);
        assert_eq!(Opcode::BitClear.arity(), Arity::Binary);
        assert_eq!(Opcode::Not.arity(), Arity::Unary);
        assert_eq!(Opcode::CountZeros.arity(), Arity::Unary);
        assert_eq!(Opcode::Store.arity(), Arity::Unary);
        assert_eq!(Opcode::Load.arity(), Arity::Nullary);
    }

    #[test]
    fn test_only_store_is_silent() {
        for bits in 0u16..16 {
            let op = Opcode::from_bits(bits);
            assert_eq!(op.prints_result(), op != Opcode::Store);
        }
    }
}
