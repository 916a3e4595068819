//! Register access abstraction
//!
//! Every peripheral on the board is driven through 32-bit registers whose
//! contents can change independently of program order. Implementations must
//! perform a real access on every call: no caching, no merging, no reordering
//! across calls.

/// A single 32-bit hardware register
///
/// Reads take `&self` because hardware status registers are sampled, not
/// consumed; implementations backed by simulated state use interior
/// mutability.
pub trait Register {
    /// Read the current register value
    fn read(&self) -> u32;

    /// Write a new register value
    fn write(&mut self, value: u32);

    /// Read-modify-write the register
    fn modify<F>(&mut self, f: F)
    where
        F: FnOnce(u32) -> u32,
    {
        let value = self.read();
        self.write(f(value));
    }

    /// Set every bit in `mask`, leaving the rest untouched
    fn set_bits(&mut self, mask: u32) {
        self.modify(|v| v | mask);
    }

    /// Clear every bit in `mask`, leaving the rest untouched
    fn clear_bits(&mut self, mask: u32) {
        self.modify(|v| v & !mask);
    }

    /// Replace the bits selected by `mask` with the matching bits of `value`
    fn write_field(&mut self, mask: u32, value: u32) {
        self.modify(|v| (v & !mask) | (value & mask));
    }

    /// Check whether any bit in `mask` is set
    fn any_set(&self, mask: u32) -> bool {
        self.read() & mask != 0
    }
}

impl<R: Register + ?Sized> Register for &mut R {
    fn read(&self) -> u32 {
        (**self).read()
    }

    fn write(&mut self, value: u32) {
        (**self).write(value)
    }
}
