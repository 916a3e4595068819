//! Zynq-7000 address map used by the board
//!
//! PS peripherals are at their fixed Zynq addresses; the button, switch, LED
//! and RGB PWM blocks are AXI IP in the programmable logic at the addresses
//! of the reference hardware design.

/// GPIO bank 2 (EMIO), carrying the PMOD B header on bits 7..=14
pub mod gpio {
    /// Output data
    pub const BANK2_DATA: usize = 0xE000_A048;
    /// Input data (read-only)
    pub const BANK2_DATA_RO: usize = 0xE000_A068;
    /// Direction mode
    pub const BANK2_DIRM: usize = 0xE000_A284;
    /// Output enable
    pub const BANK2_OEN: usize = 0xE000_A288;
}

/// PS UART1
pub mod uart1 {
    pub const BASE: usize = 0xE000_1000;

    pub const CONTROL: usize = BASE;
    pub const MODE: usize = BASE + 0x04;
    pub const IRQ_ENABLE: usize = BASE + 0x08;
    pub const IRQ_STATUS: usize = BASE + 0x14;
    pub const BAUD_GEN: usize = BASE + 0x18;
    pub const FIFO: usize = BASE + 0x30;
    pub const BAUD_DIV: usize = BASE + 0x34;

    /// UART reference clock
    pub const REF_CLK_HZ: u32 = 100_000_000;
}

/// AXI GPIO and PWM blocks in the PL
pub mod axi {
    pub const BUTTONS: usize = 0x4120_0000;
    pub const LEDS: usize = 0x4121_0000;
    pub const SWITCHES: usize = 0x4122_0000;

    /// RGB PWM block for LED10
    pub const RGB10: usize = 0x43C0_0000;
    /// RGB PWM block for LED11
    pub const RGB11: usize = 0x43C0_0030;

    /// Channel offsets inside an RGB block
    pub const RGB_BLUE: usize = 0x00;
    pub const RGB_GREEN: usize = 0x10;
    pub const RGB_RED: usize = 0x20;

    /// Register offsets inside a channel
    pub const PWM_ENABLE: usize = 0x0;
    pub const PWM_PERIOD: usize = 0x4;
    pub const PWM_WIDTH: usize = 0x8;
}

/// Cortex-A9 private global timer
pub mod global_timer {
    pub const COUNTER_LO: usize = 0xF8F0_0200;
    pub const COUNTER_HI: usize = 0xF8F0_0204;
    pub const CONTROL: usize = 0xF8F0_0208;
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexcalc_hal::BaudDivisor;

    #[test]
    fn test_console_baud_from_ref_clock() {
        // 100 MHz / (124 * 7)
        let rate = BaudDivisor::BAUD_115200.actual_baud(uart1::REF_CLK_HZ);
        assert_eq!(rate, Some(115_207));
    }
}
