//! Keypad drivers

pub mod hexpad;

pub use hexpad::{HexKeypad, SCAN_ORDER, SENSE_ORDER};
