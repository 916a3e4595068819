//! PWM driven RGB LED

use hexcalc_hal::Register;

/// PWM period written to every channel, in controller ticks
pub const PWM_PERIOD: u32 = 1024;

/// Registers of one PWM colour channel
pub struct ChannelRegs<R> {
    /// Output enable
    pub enable: R,
    /// PWM period
    pub period: R,
    /// Pulse width (brightness)
    pub width: R,
}

impl<R: Register> ChannelRegs<R> {
    fn set_width(&mut self, width: u16) {
        self.period.write(PWM_PERIOD);
        self.width.write((width as u32).min(PWM_PERIOD));
    }
}

/// Colour as per-channel pulse widths, `0..=1024`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub red: u16,
    pub green: u16,
    pub blue: u16,
}

impl Rgb {
    pub const OFF: Rgb = Rgb::new(0, 0, 0);
    pub const RED: Rgb = Rgb::new(100, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 100, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 100);
    pub const WHITE: Rgb = Rgb::new(100, 100, 100);

    pub const fn new(red: u16, green: u16, blue: u16) -> Self {
        Self { red, green, blue }
    }
}

/// One RGB LED: three PWM channels
pub struct RgbLed<R> {
    pub blue: ChannelRegs<R>,
    pub green: ChannelRegs<R>,
    pub red: ChannelRegs<R>,
}

impl<R: Register> RgbLed<R> {
    /// Set the colour
    ///
    /// Widths above the PWM period saturate at full brightness. The colour
    /// shows only while the LED is enabled.
    pub fn set_color(&mut self, color: Rgb) {
        self.red.set_width(color.red);
        self.green.set_width(color.green);
        self.blue.set_width(color.blue);
    }

    /// Switch all three channels on or off
    pub fn set_enabled(&mut self, on: bool) {
        let value = on as u32;
        self.red.enable.write(value);
        self.blue.enable.write(value);
        self.green.enable.write(value);
    }

    pub fn is_enabled(&self) -> bool {
        self.red.enable.read() & 1 != 0
    }

    /// Current colour as programmed in the width registers
    pub fn color(&self) -> Rgb {
        Rgb {
            red: self.red.width.read() as u16,
            green: self.green.width.read() as u16,
            blue: self.blue.width.read() as u16,
        }
    }
}
