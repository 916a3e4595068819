//! GPIO port abstractions
//!
//! The keypad sits on an 8-pin PMOD header. Pins are numbered 1..=8 as
//! printed on the header, not by register bit.

/// Pin on an 8-pin PMOD header
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PmodPin {
    P1 = 1,
    P2 = 2,
    P3 = 3,
    P4 = 4,
    P5 = 5,
    P6 = 6,
    P7 = 7,
    P8 = 8,
}

impl PmodPin {
    /// All pins in header order
    pub const ALL: [PmodPin; 8] = [
        PmodPin::P1,
        PmodPin::P2,
        PmodPin::P3,
        PmodPin::P4,
        PmodPin::P5,
        PmodPin::P6,
        PmodPin::P7,
        PmodPin::P8,
    ];

    /// Look up a pin by its header number (1..=8)
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1..=8 => Some(Self::ALL[number as usize - 1]),
            _ => None,
        }
    }

    /// Header number (1..=8)
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Bit of this pin inside an 8-bit port value
    pub const fn mask(self) -> u8 {
        1 << (self as u8 - 1)
    }
}

/// Pin direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    #[default]
    Input,
    Output,
}

/// Eight bidirectional pins addressed as one port
///
/// Port values are 8-bit with pin 1 in bit 0. A set direction bit means
/// output.
pub trait PinBank {
    /// Configure the direction of all eight pins at once
    fn set_directions(&mut self, outputs: u8);

    /// Configure the direction of a single pin
    fn set_direction(&mut self, pin: PmodPin, direction: Direction);

    /// Sample all eight pins
    fn read_pins(&self) -> u8;

    /// Drive all eight output latches
    fn write_pins(&mut self, value: u8);

    /// Drive a single pin high or low
    fn write_pin(&mut self, pin: PmodPin, high: bool);

    /// Check if a pin reads high
    fn is_high(&self, pin: PmodPin) -> bool {
        self.read_pins() & pin.mask() != 0
    }

    /// Check if a pin reads low
    fn is_low(&self, pin: PmodPin) -> bool {
        !self.is_high(pin)
    }
}
