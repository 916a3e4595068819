//! Push buttons

use embedded_hal::delay::DelayNs;
use hexcalc_core::traits::{Button, ButtonSource, ButtonState};
use hexcalc_hal::Register;

/// Register bits wired to BTN0..BTN3
pub const BUTTON_MASK: u32 = 0xF;

/// Sleep between samples in [`ButtonBank::wait_for_button`]
pub const BUTTON_POLL_INTERVAL_US: u32 = 100;

/// Polls per millisecond of timeout
const POLLS_PER_MS: u32 = 1_000 / BUTTON_POLL_INTERVAL_US;

/// Push button bank
pub struct ButtonBank<R> {
    reg: R,
}

impl<R: Register> ButtonBank<R> {
    pub fn new(reg: R) -> Self {
        Self { reg }
    }

    pub fn read(&self) -> ButtonState {
        ButtonState::from_bits((self.reg.read() & BUTTON_MASK) as u8)
    }

    /// Wait for exactly one button to be down
    ///
    /// Samples every 100 µs for `timeout_ms` milliseconds. Chords are
    /// ignored. Returns `None` once the timeout passes.
    pub fn wait_for_button<D: DelayNs>(&self, delay: &mut D, timeout_ms: u32) -> Option<Button> {
        for _ in 0..timeout_ms.saturating_mul(POLLS_PER_MS) {
            if let Some(button) = self.read().single() {
                return Some(button);
            }
            delay.delay_us(BUTTON_POLL_INTERVAL_US);
        }

        None
    }

    pub fn release(self) -> R {
        self.reg
    }
}

impl<R: Register> ButtonSource for ButtonBank<R> {
    fn buttons(&mut self) -> ButtonState {
        self.read()
    }
}
