//! Hardware driver implementations
//!
//! This crate provides register-level drivers for the board peripherals,
//! written against the `hexcalc-hal` register traits so they run equally on
//! memory-mapped hardware and on simulated register files:
//!
//! - PMOD port (8 bidirectional pins on a shared GPIO bank)
//! - Hex keypad matrix scanner
//! - Polled UART transmitter with FIFO backpressure
//! - Slide switches and push buttons
//! - Green LEDs and PWM RGB LEDs

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod input;
pub mod keypad;
pub mod led;
pub mod port;
pub mod serial;

#[cfg(test)]
mod sim;
