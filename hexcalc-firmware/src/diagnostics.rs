//! Board self-test
//!
//! Walks every LED, mirrors the switches and buttons onto the LEDs and echoes
//! keypad presses over serial. Built with the `self-test` feature and run
//! once before the console starts.

use embedded_hal::delay::DelayNs;
use hexcalc_core::traits::ConsoleOutput;
use hexcalc_drivers::input::{ButtonBank, SwitchBank};
use hexcalc_drivers::keypad::HexKeypad;
use hexcalc_drivers::led::{LedPanel, Rgb, RgbLedId};
use hexcalc_hal::{PinBank, Register};

/// Pause between LED test steps
const STEP_MS: u32 = 250;

/// Iterations of the mirror loops, 1 ms each
const MIRROR_ITERATIONS: u32 = 10_000;

/// How long a button test waits for each press
const BUTTON_TIMEOUT_MS: u32 = 5_000;

/// Keypad presses echoed before the test ends
const KEYPAD_PRESSES: u32 = 16;

/// Run all board tests in order
pub fn run<R, P, O, D>(
    leds: &mut LedPanel<R>,
    switches: &SwitchBank<R>,
    buttons: &ButtonBank<R>,
    keypad: &mut HexKeypad<P>,
    out: &mut O,
    delay: &mut D,
) where
    R: Register,
    P: PinBank,
    O: ConsoleOutput,
    D: DelayNs,
{
    #[cfg(feature = "defmt")]
    defmt::info!("self-test: leds");
    led_test(leds, delay);

    #[cfg(feature = "defmt")]
    defmt::info!("self-test: switches");
    switch_test(leds, switches, delay);

    #[cfg(feature = "defmt")]
    defmt::info!("self-test: buttons");
    button_test(leds, buttons, delay);

    #[cfg(feature = "defmt")]
    defmt::info!("self-test: keypad");
    if keypad_test(keypad, out, delay).is_err() {
        #[cfg(feature = "defmt")]
        defmt::warn!("self-test: keypad echo failed");
    }
}

/// Cycle the RGB colours, then walk single LEDs and bit patterns
pub fn led_test<R: Register, D: DelayNs>(leds: &mut LedPanel<R>, delay: &mut D) {
    for id in RgbLedId::ALL {
        leds.set_led(id.index(), true);
        for color in [Rgb::RED, Rgb::GREEN, Rgb::BLUE] {
            leds.set_rgb_color(id, color);
            delay.delay_ms(STEP_MS);
        }
        leds.set_rgb_color(id, Rgb::WHITE);
        leds.set_led(id.index(), false);
    }

    for index in 0..12 {
        leds.set_led(index, true);
        delay.delay_ms(STEP_MS);
        leds.set_led(index, false);
    }

    leds.set_leds_10bit(0x1FF);
    delay.delay_ms(STEP_MS);
    leds.set_leds_10bit(0);
    delay.delay_ms(STEP_MS);

    for bit in 0..10 {
        leds.set_leds_10bit(1 << bit);
        delay.delay_ms(STEP_MS);
    }

    leds.set_leds_12bit(0xFFF);
    delay.delay_ms(STEP_MS);
    leds.set_leds_12bit(0);
    delay.delay_ms(STEP_MS);

    for bit in 0..12 {
        leds.set_leds_12bit(1 << bit);
        delay.delay_ms(STEP_MS);
    }

    leds.clear();
}

/// Mirror the switches onto all twelve LEDs for ten seconds
pub fn switch_test<R: Register, D: DelayNs>(
    leds: &mut LedPanel<R>,
    switches: &SwitchBank<R>,
    delay: &mut D,
) {
    for _ in 0..MIRROR_ITERATIONS {
        leds.set_leds_12bit(switches.read());
        delay.delay_ms(1);
    }
    leds.clear();
}

/// Show four single presses, then mirror the buttons for ten seconds
pub fn button_test<R: Register, D: DelayNs>(
    leds: &mut LedPanel<R>,
    buttons: &ButtonBank<R>,
    delay: &mut D,
) {
    for _ in 0..4 {
        if let Some(button) = buttons.wait_for_button(delay, BUTTON_TIMEOUT_MS) {
            leds.set_led(button.index(), true);
            delay.delay_ms(2_000);
            leds.set_led(button.index(), false);
        }
    }

    leds.set_leds_12bit(0xFFF);
    delay.delay_ms(2_000);
    leds.set_leds_12bit(0);
    delay.delay_ms(2_000);

    for _ in 0..MIRROR_ITERATIONS {
        leds.set_leds_10bit(buttons.read().bits() as u16);
        delay.delay_ms(1);
    }
    leds.clear();
}

/// Echo keypad presses as hex digits
pub fn keypad_test<P, O, D>(
    keypad: &mut HexKeypad<P>,
    out: &mut O,
    delay: &mut D,
) -> Result<(), O::Error>
where
    P: PinBank,
    O: ConsoleOutput,
    D: DelayNs,
{
    out.print_str("Keypad test: press keys\n")?;

    for _ in 0..KEYPAD_PRESSES {
        let key = keypad.wait_for_key();
        out.print(format_args!("{:x}\n", key.raw()))?;
        // One report per press
        delay.delay_ms(STEP_MS);
    }

    Ok(())
}
