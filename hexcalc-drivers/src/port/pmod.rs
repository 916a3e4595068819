//! PMOD header port
//!
//! The eight header pins occupy bits 7..=14 of a 32-bit GPIO bank that is
//! shared with other board functions. Every access is a read-modify-write
//! restricted to that window; bits outside it are never changed.

use hexcalc_hal::{Direction, PinBank, PmodPin, Register};

/// Position of header pin 1 inside the bank registers
pub const PMOD_SHIFT: u32 = 7;

/// Bits of the bank owned by the PMOD header
pub const PMOD_MASK: u32 = 0xFF << PMOD_SHIFT;

/// GPIO bank registers used by the port
pub struct PmodRegisters<R> {
    /// Direction mode (1 = output)
    pub direction: R,
    /// Output enable (1 = driven)
    pub output_enable: R,
    /// Sampled pin levels (read-only)
    pub input: R,
    /// Output latch
    pub output: R,
}

/// 8-pin PMOD port on a shared GPIO bank
pub struct PmodPort<R> {
    regs: PmodRegisters<R>,
}

impl<R: Register> PmodPort<R> {
    /// Wrap the bank registers
    ///
    /// No register is touched until a direction or level is set.
    pub fn new(regs: PmodRegisters<R>) -> Self {
        Self { regs }
    }

    /// Give the registers back
    pub fn release(self) -> PmodRegisters<R> {
        self.regs
    }

    /// Bank bit of a header pin
    fn bank_bit(pin: PmodPin) -> u32 {
        (pin.mask() as u32) << PMOD_SHIFT
    }

    /// Current output latch value of the window
    pub fn output_latch(&self) -> u8 {
        ((self.regs.output.read() & PMOD_MASK) >> PMOD_SHIFT) as u8
    }
}

impl<R: Register> PinBank for PmodPort<R> {
    fn set_directions(&mut self, outputs: u8) {
        let bits = (outputs as u32) << PMOD_SHIFT;
        self.regs.direction.write_field(PMOD_MASK, bits);
        self.regs.output_enable.write_field(PMOD_MASK, bits);
    }

    fn set_direction(&mut self, pin: PmodPin, direction: Direction) {
        let bit = Self::bank_bit(pin);
        match direction {
            Direction::Output => {
                self.regs.direction.set_bits(bit);
                self.regs.output_enable.set_bits(bit);
            }
            Direction::Input => {
                self.regs.direction.clear_bits(bit);
                self.regs.output_enable.clear_bits(bit);
            }
        }
    }

    fn read_pins(&self) -> u8 {
        ((self.regs.input.read() & PMOD_MASK) >> PMOD_SHIFT) as u8
    }

    fn write_pins(&mut self, value: u8) {
        self.regs
            .output
            .write_field(PMOD_MASK, (value as u32) << PMOD_SHIFT);
    }

    fn write_pin(&mut self, pin: PmodPin, high: bool) {
        let bit = Self::bank_bit(pin);
        if high {
            self.regs.output.set_bits(bit);
        } else {
            self.regs.output.clear_bits(bit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SimRegister;
    use core::cell::Cell;

    struct Bank {
        direction: Cell<u32>,
        output_enable: Cell<u32>,
        input: Cell<u32>,
        output: Cell<u32>,
    }

    impl Bank {
        fn new(initial: u32) -> Self {
            Self {
                direction: Cell::new(initial),
                output_enable: Cell::new(initial),
                input: Cell::new(initial),
                output: Cell::new(initial),
            }
        }

        fn port(&self) -> PmodPort<SimRegister<'_>> {
            PmodPort::new(PmodRegisters {
                direction: SimRegister::new(&self.direction),
                output_enable: SimRegister::new(&self.output_enable),
                input: SimRegister::new(&self.input),
                output: SimRegister::new(&self.output),
            })
        }
    }

    #[test]
    fn test_mask_covers_bits_7_to_14() {
        assert_eq!(PMOD_MASK, 0x7F80);
    }

    #[test]
    fn test_set_directions_preserves_other_bits() {
        let bank = Bank::new(0xFFFF_FFFF);
        let mut port = bank.port();

        port.set_directions(0b0000_1111);

        assert_eq!(bank.direction.get(), 0xFFFF_87FF);
        assert_eq!(bank.output_enable.get(), 0xFFFF_87FF);
    }

    #[test]
    fn test_set_single_direction() {
        let bank = Bank::new(0);
        let mut port = bank.port();

        port.set_directions(0b0000_0011);
        port.set_direction(PmodPin::P8, Direction::Output);
        port.set_direction(PmodPin::P1, Direction::Input);

        // Pin 2 keeps its direction
        assert_eq!(bank.direction.get(), (0b1000_0010) << 7);
        assert_eq!(bank.output_enable.get(), (0b1000_0010) << 7);
    }

    #[test]
    fn test_read_pins_extracts_window() {
        let bank = Bank::new(0);
        bank.input.set(0xFFFF_807F | (0b1010_0101 << 7));
        let port = bank.port();

        assert_eq!(port.read_pins(), 0b1010_0101);
        assert!(port.is_high(PmodPin::P1));
        assert!(port.is_low(PmodPin::P2));
        assert!(port.is_high(PmodPin::P8));
    }

    #[test]
    fn test_write_pins_sets_and_clears() {
        let bank = Bank::new(0x0000_0001);
        let mut port = bank.port();

        port.write_pins(0b0000_1111);
        assert_eq!(bank.output.get(), 0x0000_0001 | (0b1111 << 7));

        port.write_pins(0b0000_0101);
        assert_eq!(bank.output.get(), 0x0000_0001 | (0b0101 << 7));
        assert_eq!(port.output_latch(), 0b0101);
    }

    #[test]
    fn test_write_pin_maps_to_bank_bit() {
        let bank = Bank::new(0);
        let mut port = bank.port();

        port.write_pin(PmodPin::P1, true);
        assert_eq!(bank.output.get(), 1 << 7);

        port.write_pin(PmodPin::P4, true);
        assert_eq!(bank.output.get(), (1 << 7) | (1 << 10));

        port.write_pin(PmodPin::P1, false);
        assert_eq!(bank.output.get(), 1 << 10);
    }
}
