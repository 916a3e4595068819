//! Hexcalc - Keypad Calculator Firmware
//!
//! Main firmware binary for Zynq-7000 lab boards. A 4x4 hex keypad on the
//! PMOD B header, the slide switches and BTN3 drive a 32-bit calculator
//! whose transcript is printed on UART1 at 115200 8N1.
//!
//! The Xilinx standalone boot code sets up the CPU and calls `main`.

#![no_std]
#![no_main]

#[cfg(feature = "defmt")]
use defmt_rtt as _;
use panic_halt as _;

use hexcalc_core::config::ConsoleConfig;
use hexcalc_core::console::Console;
use hexcalc_core::Timeout;
use hexcalc_drivers::input::{ButtonBank, SwitchBank};
use hexcalc_drivers::keypad::HexKeypad;
use hexcalc_drivers::led::{ChannelRegs, LedBank, LedPanel, RgbLed};
use hexcalc_drivers::port::{PmodPort, PmodRegisters};
use hexcalc_drivers::serial::{default_drain_timeout, SerialTx, UartRegisters};
use hexcalc_hal::SerialConfig;
#[cfg(feature = "defmt")]
use hexcalc_hal_zynq::map;
use hexcalc_hal_zynq::{
    Board, GlobalTimer, GpioBank, Mmio, PwmChannel, RgbBlock, UartBlock, COUNTS_PER_US,
};

mod critical;
#[cfg(feature = "self-test")]
mod diagnostics;

/// Firmware entry point, called by the BSP boot code
#[no_mangle]
pub extern "C" fn main() -> ! {
    #[cfg(feature = "defmt")]
    defmt::info!("Hexcalc firmware starting...");

    let Some(board) = Board::take() else {
        halt();
    };

    let timer = GlobalTimer::new(board.global_timer, COUNTS_PER_US);
    let mut leds = led_panel(board.leds, board.rgb10, board.rgb11);
    leds.clear();

    let config = SerialConfig::default();
    #[cfg(feature = "defmt")]
    defmt::info!(
        "UART1 at {} baud",
        config.baud.actual_baud(map::uart1::REF_CLK_HZ)
    );

    let serial = match SerialTx::configure(
        uart_registers(board.uart1),
        timer.delay(),
        &config,
        Timeout::Infinite,
    ) {
        Ok(serial) => serial.with_drain_timeout(default_drain_timeout()),
        Err(_e) => {
            #[cfg(feature = "defmt")]
            defmt::error!("UART setup failed: {}", _e);
            // No console to report on; light everything and stop
            leds.set_leds_12bit(0xFFF);
            halt();
        }
    };

    let keypad = HexKeypad::new(pmod_port(board.gpio_bank2));
    let switches = SwitchBank::new(board.switches);
    let buttons = ButtonBank::new(board.buttons);

    #[cfg(feature = "self-test")]
    let (keypad, serial) = {
        let (mut keypad, mut serial) = (keypad, serial);
        diagnostics::run(
            &mut leds,
            &switches,
            &buttons,
            &mut keypad,
            &mut serial,
            &mut timer.delay(),
        );
        (keypad, serial)
    };

    #[cfg(feature = "defmt")]
    defmt::info!("Peripherals initialized, starting console");

    let mut console = Console::new(
        keypad,
        buttons,
        switches,
        serial,
        timer.delay(),
        ConsoleConfig::default(),
    );
    console.run()
}

fn pmod_port(bank: GpioBank) -> PmodPort<Mmio> {
    PmodPort::new(PmodRegisters {
        direction: bank.dirm,
        output_enable: bank.oen,
        input: bank.data_ro,
        output: bank.data,
    })
}

fn uart_registers(uart: UartBlock) -> UartRegisters<Mmio> {
    UartRegisters {
        control: uart.control,
        mode: uart.mode,
        irq_enable: uart.irq_enable,
        irq_status: uart.irq_status,
        baud_gen: uart.baud_gen,
        fifo: uart.fifo,
        baud_div: uart.baud_div,
    }
}

fn led_panel(leds: Mmio, rgb10: RgbBlock, rgb11: RgbBlock) -> LedPanel<Mmio> {
    LedPanel::new(LedBank::new(leds), rgb_led(rgb10), rgb_led(rgb11))
}

fn rgb_led(block: RgbBlock) -> RgbLed<Mmio> {
    RgbLed {
        blue: channel(block.blue),
        green: channel(block.green),
        red: channel(block.red),
    }
}

fn channel(pwm: PwmChannel) -> ChannelRegs<Mmio> {
    ChannelRegs {
        enable: pwm.enable,
        period: pwm.period,
        width: pwm.width,
    }
}

fn halt() -> ! {
    loop {
        core::hint::spin_loop();
    }
}
