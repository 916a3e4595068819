//! Slide switches

use hexcalc_core::traits::SwitchSource;
use hexcalc_hal::Register;

/// Register bits wired to the 12 slide switches
pub const SWITCH_MASK: u32 = 0xFFF;

/// Slide switch bank
pub struct SwitchBank<R> {
    reg: R,
}

impl<R: Register> SwitchBank<R> {
    pub fn new(reg: R) -> Self {
        Self { reg }
    }

    /// Switch positions, switch 0 in bit 0
    pub fn read(&self) -> u16 {
        (self.reg.read() & SWITCH_MASK) as u16
    }

    pub fn release(self) -> R {
        self.reg
    }
}

impl<R: Register> SwitchSource for SwitchBank<R> {
    fn switches(&mut self) -> u16 {
        self.read()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SimRegister;
    use core::cell::Cell;

    #[test]
    fn test_unused_bits_masked() {
        let reg = Cell::new(0xFFFF_F5A3);
        let mut switches = SwitchBank::new(SimRegister::new(&reg));

        assert_eq!(switches.read(), 0x5A3);
        assert_eq!(switches.switches(), 0x5A3);
    }

    #[test]
    fn test_reads_live_value() {
        let reg = Cell::new(0);
        let switches = SwitchBank::new(SimRegister::new(&reg));
        assert_eq!(switches.read(), 0);

        reg.set(0b1110);
        assert_eq!(switches.read(), 0b1110);
    }
}
