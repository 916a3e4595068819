//! LED drivers
//!
//! The board has ten green LEDs on one output register (LED0..LED9) and two
//! RGB LEDs (LED10, LED11) driven by a PWM controller with one
//! enable/period/width register triple per colour channel.
//!
//! [`LedPanel`] numbers all twelve LEDs the way the board silkscreen does.

pub mod bank;
pub mod panel;
pub mod rgb;

pub use bank::{LedBank, LED_COUNT, LED_MASK};
pub use panel::{LedPanel, RgbLedId};
pub use rgb::{ChannelRegs, Rgb, RgbLed, PWM_PERIOD};
