//! Board-agnostic core logic for the keypad calculator
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Keypad position decoding and key codes
//! - Bounded and unbounded polling (timeouts)
//! - Calculator opcodes, arithmetic and operand entry
//! - The console session that drives a calculation end to end
//! - Traits implemented by the board drivers

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod calculator;
pub mod config;
pub mod console;
pub mod error;
pub mod keypad;
pub mod timeout;
pub mod traits;

pub use error::DriverError;
pub use keypad::{decode, KeyCode, KeyPosition};
pub use timeout::{PollBudget, Timeout};
