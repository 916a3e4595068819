//! All twelve board LEDs behind one numbering

use hexcalc_hal::Register;

use super::{LedBank, Rgb, RgbLed, LED_COUNT};

/// Bit of a 12-bit LED value shown on LED10
const LED10_BIT: u16 = 1 << 10;
/// Bit of a 12-bit LED value shown on LED11
const LED11_BIT: u16 = 1 << 11;

/// Selects one of the RGB LEDs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RgbLedId {
    Led10,
    Led11,
}

impl RgbLedId {
    pub const ALL: [RgbLedId; 2] = [RgbLedId::Led10, RgbLedId::Led11];

    /// Map a board LED number (10 or 11)
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            10 => Some(RgbLedId::Led10),
            11 => Some(RgbLedId::Led11),
            _ => None,
        }
    }

    pub fn index(self) -> u8 {
        match self {
            RgbLedId::Led10 => 10,
            RgbLedId::Led11 => 11,
        }
    }
}

/// LED0..LED9 plus the two RGB LEDs
pub struct LedPanel<R> {
    leds: LedBank<R>,
    rgb10: RgbLed<R>,
    rgb11: RgbLed<R>,
}

impl<R: Register> LedPanel<R> {
    pub fn new(leds: LedBank<R>, rgb10: RgbLed<R>, rgb11: RgbLed<R>) -> Self {
        Self { leds, rgb10, rgb11 }
    }

    pub fn rgb(&mut self, id: RgbLedId) -> &mut RgbLed<R> {
        match id {
            RgbLedId::Led10 => &mut self.rgb10,
            RgbLedId::Led11 => &mut self.rgb11,
        }
    }

    /// Switch one LED by board number
    ///
    /// 0..=9 are the green LEDs, 10 and 11 enable the RGB LEDs in their
    /// current colour. Other numbers are ignored.
    pub fn set_led(&mut self, index: u8, on: bool) {
        if index < LED_COUNT {
            self.leds.set(index, on);
        } else if let Some(id) = RgbLedId::from_index(index) {
            self.rgb(id).set_enabled(on);
        }
    }

    /// Show a value on the green LEDs
    pub fn set_leds_10bit(&mut self, value: u16) {
        self.leds.set_all(value);
    }

    /// Show a value on all twelve LEDs, bit 10 on LED10 and bit 11 on LED11
    pub fn set_leds_12bit(&mut self, value: u16) {
        self.leds.set_all(value);
        self.rgb10.set_enabled(value & LED10_BIT != 0);
        self.rgb11.set_enabled(value & LED11_BIT != 0);
    }

    pub fn set_rgb_color(&mut self, id: RgbLedId, color: Rgb) {
        self.rgb(id).set_color(color);
    }

    /// Everything off
    pub fn clear(&mut self) {
        self.set_leds_12bit(0);
    }

    pub fn leds(&self) -> &LedBank<R> {
        &self.leds
    }
}
