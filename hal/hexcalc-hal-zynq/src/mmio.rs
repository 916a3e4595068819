//! Memory-mapped register handles

use core::ptr;

use hexcalc_hal::Register;

/// One 32-bit device register at a fixed address
///
/// Every read and write is a volatile access, so the compiler never caches,
/// merges or reorders them.
#[derive(Debug)]
pub struct Mmio {
    addr: *mut u32,
}

impl Mmio {
    /// Create a handle for the register at `addr`
    ///
    /// # Safety
    ///
    /// `addr` must be the 4-byte aligned address of a device register that
    /// is mapped for the lifetime of the program, and the caller must not
    /// create a second handle to the same register.
    pub unsafe fn new(addr: usize) -> Self {
        Self {
            addr: addr as *mut u32,
        }
    }

    pub fn address(&self) -> usize {
        self.addr as usize
    }
}

impl Register for Mmio {
    fn read(&self) -> u32 {
        // SAFETY: `new` requires a mapped, aligned register address
        unsafe { ptr::read_volatile(self.addr) }
    }

    fn write(&mut self, value: u32) {
        // SAFETY: as above; `&mut self` makes this handle the only writer
        unsafe { ptr::write_volatile(self.addr, value) }
    }
}
