//! Board register set
//!
//! [`Board`] owns one [`Mmio`] handle for every register the firmware
//! touches. Handing it out once keeps two drivers from ever sharing a
//! register.

use core::sync::atomic::{AtomicBool, Ordering};

use crate::map::{axi, global_timer, gpio, uart1};
use crate::timer::GlobalTimerRegisters;
use crate::Mmio;

static TAKEN: AtomicBool = AtomicBool::new(false);

/// GPIO bank 2 registers
pub struct GpioBank {
    pub data: Mmio,
    pub data_ro: Mmio,
    pub dirm: Mmio,
    pub oen: Mmio,
}

/// PS UART registers used for transmit
pub struct UartBlock {
    pub control: Mmio,
    pub mode: Mmio,
    pub irq_enable: Mmio,
    pub irq_status: Mmio,
    pub baud_gen: Mmio,
    pub fifo: Mmio,
    pub baud_div: Mmio,
}

/// One PWM channel
pub struct PwmChannel {
    pub enable: Mmio,
    pub period: Mmio,
    pub width: Mmio,
}

/// Three PWM channels of one RGB LED
pub struct RgbBlock {
    pub blue: PwmChannel,
    pub green: PwmChannel,
    pub red: PwmChannel,
}

/// Every register the firmware uses
pub struct Board {
    /// PMOD B header
    pub gpio_bank2: GpioBank,
    pub uart1: UartBlock,
    pub buttons: Mmio,
    pub switches: Mmio,
    pub leds: Mmio,
    pub rgb10: RgbBlock,
    pub rgb11: RgbBlock,
    pub global_timer: GlobalTimerRegisters<Mmio>,
}

impl Board {
    /// Take the board registers
    ///
    /// Returns `None` on every call after the first.
    pub fn take() -> Option<Self> {
        if TAKEN.swap(true, Ordering::AcqRel) {
            return None;
        }

        // SAFETY: the flag guarantees this is the only set of handles
        Some(unsafe { Self::steal() })
    }

    /// Build the register set without checking whether it was taken
    ///
    /// # Safety
    ///
    /// Must run on the Zynq board, and the caller must make sure no other
    /// `Board` is in use.
    pub unsafe fn steal() -> Self {
        // SAFETY: every address below is a mapped register from `map`
        unsafe {
            Self {
                gpio_bank2: GpioBank {
                    data: Mmio::new(gpio::BANK2_DATA),
                    data_ro: Mmio::new(gpio::BANK2_DATA_RO),
                    dirm: Mmio::new(gpio::BANK2_DIRM),
                    oen: Mmio::new(gpio::BANK2_OEN),
                },
                uart1: UartBlock {
                    control: Mmio::new(uart1::CONTROL),
                    mode: Mmio::new(uart1::MODE),
                    irq_enable: Mmio::new(uart1::IRQ_ENABLE),
                    irq_status: Mmio::new(uart1::IRQ_STATUS),
                    baud_gen: Mmio::new(uart1::BAUD_GEN),
                    fifo: Mmio::new(uart1::FIFO),
                    baud_div: Mmio::new(uart1::BAUD_DIV),
                },
                buttons: Mmio::new(axi::BUTTONS),
                switches: Mmio::new(axi::SWITCHES),
                leds: Mmio::new(axi::LEDS),
                rgb10: RgbBlock::at(axi::RGB10),
                rgb11: RgbBlock::at(axi::RGB11),
                global_timer: GlobalTimerRegisters {
                    counter_lo: Mmio::new(global_timer::COUNTER_LO),
                    counter_hi: Mmio::new(global_timer::COUNTER_HI),
                    control: Mmio::new(global_timer::CONTROL),
                },
            }
        }
    }
}

impl PwmChannel {
    /// # Safety
    ///
    /// `base` must be a mapped PWM channel.
    unsafe fn at(base: usize) -> Self {
        unsafe {
            Self {
                enable: Mmio::new(base + axi::PWM_ENABLE),
                period: Mmio::new(base + axi::PWM_PERIOD),
                width: Mmio::new(base + axi::PWM_WIDTH),
            }
        }
    }
}

impl RgbBlock {
    /// # Safety
    ///
    /// `base` must be a mapped RGB PWM block.
    unsafe fn at(base: usize) -> Self {
        unsafe {
            Self {
                blue: PwmChannel::at(base + axi::RGB_BLUE),
                green: PwmChannel::at(base + axi::RGB_GREEN),
                red: PwmChannel::at(base + axi::RGB_RED),
            }
        }
    }
}
