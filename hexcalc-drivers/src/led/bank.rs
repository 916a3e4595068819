//! Green LED bank

use hexcalc_hal::Register;

/// Number of green LEDs
pub const LED_COUNT: u8 = 10;

/// Register bits driving the green LEDs
pub const LED_MASK: u32 = 0x3FF;

/// Ten green LEDs on one output register, LED0 in bit 0
pub struct LedBank<R> {
    reg: R,
}

impl<R: Register> LedBank<R> {
    pub fn new(reg: R) -> Self {
        Self { reg }
    }

    /// Show a 10-bit value; higher bits are dropped
    pub fn set_all(&mut self, value: u16) {
        self.reg.write(value as u32 & LED_MASK);
    }

    /// Switch one LED, leaving the others as they are
    ///
    /// Indices past LED9 are ignored.
    pub fn set(&mut self, index: u8, on: bool) {
        if index >= LED_COUNT {
            return;
        }

        let bit = 1 << index;
        if on {
            self.reg.set_bits(bit);
        } else {
            self.reg.clear_bits(bit);
        }
    }

    /// Currently lit LEDs
    pub fn value(&self) -> u16 {
        (self.reg.read() & LED_MASK) as u16
    }

    pub fn release(self) -> R {
        self.reg
    }
}
