//! Keypad decoding
//!
//! Turns a matrix position into a key code. The layout matches the PMOD
//! keypad silkscreen:
//!
//! ```text
//!          col 1  col 2  col 3  col 4
//! row 1      1      2      3      A
//! row 2      4      5      6      B
//! row 3      7      8      9      C
//! row 4      0      F      E      D
//! ```
//!
//! The decode rules are evaluated in a fixed order and that order is part of
//! the mapping: the column-4 rule is checked before the row-4 special cases.

/// Number of rows and columns on the matrix
pub const MATRIX_SIZE: u8 = 4;

/// Logical key code
///
/// `-1` means no key (or an unmapped combination). `0..=15` are the hex
/// digits. Larger values are reserved for extended keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyCode(i8);

impl KeyCode {
    /// No key pressed, or the pressed combination has no mapping
    pub const NONE: KeyCode = KeyCode(-1);

    /// Highest code the scanner may produce
    pub const MAX: i8 = 18;

    /// Build a key code from its raw value
    ///
    /// Values outside `-1..=18` collapse to [`KeyCode::NONE`].
    pub const fn from_raw(raw: i8) -> Self {
        if raw < -1 || raw > Self::MAX {
            Self::NONE
        } else {
            KeyCode(raw)
        }
    }

    pub const fn raw(self) -> i8 {
        self.0
    }

    pub const fn is_none(self) -> bool {
        self.0 < 0
    }

    pub const fn is_key(self) -> bool {
        self.0 >= 0
    }

    /// Hex digit value for codes `0..=15`
    pub const fn digit(self) -> Option<u8> {
        if self.0 >= 0 && self.0 <= 15 {
            Some(self.0 as u8)
        } else {
            None
        }
    }

    /// Extended control key (codes `16..=18`)
    pub const fn is_extended(self) -> bool {
        self.0 > 15
    }
}

impl Default for KeyCode {
    fn default() -> Self {
        Self::NONE
    }
}

/// A matrix position, both coordinates in `1..=4`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyPosition {
    row: u8,
    column: u8,
}

impl KeyPosition {
    pub fn new(row: u8, column: u8) -> Option<Self> {
        let valid = 1..=MATRIX_SIZE;
        if valid.contains(&row) && valid.contains(&column) {
            Some(Self { row, column })
        } else {
            None
        }
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn column(&self) -> u8 {
        self.column
    }

    /// Key code printed at this position
    pub fn code(&self) -> KeyCode {
        decode(self.row, self.column)
    }
}

/// Map a (row, column) pair to a key code
///
/// Pure function. Coordinates outside `1..=4` decode to
/// [`KeyCode::NONE`].
pub fn decode(row: u8, column: u8) -> KeyCode {
    if KeyPosition::new(row, column).is_none() {
        return KeyCode::NONE;
    }

    let (row, column) = (row as i8, column as i8);

    let raw = if row < 4 && column < 4 {
        // 3x3 digit block
        column + (row - 1) * 3
    } else if column == 4 {
        // Letter column A-D
        row + 9
    } else if row == 4 && column == 1 {
        0
    } else if row == 4 && column < 4 {
        17 - column
    } else {
        -1
    };

    KeyCode::from_raw(raw)
}
