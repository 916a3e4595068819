//! Hexcalc Hardware Abstraction Layer
//!
//! This crate defines the register and peripheral traits that the drivers
//! are written against. A chip crate supplies memory-mapped implementations;
//! tests supply simulated register files.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (hexcalc-firmware)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  hexcalc-drivers (keypad, serial, leds) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  hexcalc-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ hexcalc-hal-  │       │  simulated    │
//! │     zynq      │       │  registers    │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`register::Register`] - A single 32-bit hardware register
//! - [`gpio::PinBank`] - An 8-pin bidirectional port
//! - [`uart::UartTx`] - Serial transmission

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod register;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use gpio::{Direction, PinBank, PmodPin};
pub use register::Register;
pub use uart::{BaudDivisor, DataBits, Parity, SerialConfig, StopBits, UartTx};
