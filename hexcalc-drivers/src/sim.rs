//! Simulated registers for driver tests

use core::cell::Cell;

use hexcalc_hal::Register;

/// Register backed by a shared memory cell
///
/// Several handles may point at the same cell, which lets a test inspect
/// a register after handing it to a driver.
#[derive(Clone, Copy)]
pub struct SimRegister<'a> {
    cell: &'a Cell<u32>,
}

impl<'a> SimRegister<'a> {
    pub fn new(cell: &'a Cell<u32>) -> Self {
        Self { cell }
    }
}

impl Register for SimRegister<'_> {
    fn read(&self) -> u32 {
        self.cell.get()
    }

    fn write(&mut self, value: u32) {
        self.cell.set(value);
    }
}

/// Delay that only records how long it was asked to wait
#[derive(Debug, Default)]
pub struct SimDelay {
    total_ns: u64,
    calls: u32,
}

impl SimDelay {
    pub fn elapsed_ms(&self) -> u64 {
        self.total_ns / 1_000_000
    }

    pub fn elapsed_us(&self) -> u64 {
        self.total_ns / 1_000
    }

    pub fn calls(&self) -> u32 {
        self.calls
    }
}

impl embedded_hal::delay::DelayNs for SimDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
        self.calls += 1;
    }
}
