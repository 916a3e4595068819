//! Cortex-A9 global timer and blocking delays
//!
//! The global timer is a 64-bit up-counter clocked at half the CPU clock.
//! It is split over two 32-bit registers, so a read takes the high word,
//! the low word, then the high word again and retries if a carry landed in
//! between.

use embedded_hal::delay::DelayNs;
use hexcalc_hal::Register;

/// Timer counts per microsecond at the default 666.67 MHz CPU clock
pub const COUNTS_PER_US: u32 = 333;

/// Timer enable bit in the control register
const CONTROL_ENABLE: u32 = 1 << 0;

/// Global timer registers
pub struct GlobalTimerRegisters<R> {
    pub counter_lo: R,
    pub counter_hi: R,
    pub control: R,
}

/// Running global timer
///
/// Reading the counter needs only `&self`, so any number of
/// [`GlobalTimerDelay`] handles can share one timer.
pub struct GlobalTimer<R> {
    regs: GlobalTimerRegisters<R>,
    counts_per_us: u32,
}

impl<R: Register> GlobalTimer<R> {
    /// Take the timer, starting it if it is stopped
    pub fn new(mut regs: GlobalTimerRegisters<R>, counts_per_us: u32) -> Self {
        if !regs.control.any_set(CONTROL_ENABLE) {
            regs.control.set_bits(CONTROL_ENABLE);
        }

        Self {
            regs,
            counts_per_us,
        }
    }

    /// Current counter value
    pub fn now(&self) -> u64 {
        loop {
            let hi = self.regs.counter_hi.read();
            let lo = self.regs.counter_lo.read();
            if self.regs.counter_hi.read() == hi {
                return ((hi as u64) << 32) | lo as u64;
            }
        }
    }

    /// Counter ticks covering `ns` nanoseconds, rounded up
    fn ticks_for_ns(&self, ns: u32) -> u64 {
        (ns as u64 * self.counts_per_us as u64).div_ceil(1_000)
    }

    /// A delay handle borrowing this timer
    pub fn delay(&self) -> GlobalTimerDelay<'_, R> {
        GlobalTimerDelay { timer: self }
    }

    pub fn release(self) -> GlobalTimerRegisters<R> {
        self.regs
    }
}

/// Busy-wait delay on a shared [`GlobalTimer`]
pub struct GlobalTimerDelay<'a, R> {
    timer: &'a GlobalTimer<R>,
}

impl<R> Clone for GlobalTimerDelay<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for GlobalTimerDelay<'_, R> {}

impl<R: Register> DelayNs for GlobalTimerDelay<'_, R> {
    fn delay_ns(&mut self, ns: u32) {
        let ticks = self.timer.ticks_for_ns(ns);
        let start = self.timer.now();
        while self.timer.now().wrapping_sub(start) < ticks {}
    }
}
