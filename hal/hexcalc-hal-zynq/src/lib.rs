//! Zynq-7000 HAL for the Hexcalc firmware
//!
//! This crate provides the Zynq-specific pieces behind the `hexcalc-hal`
//! traits:
//!
//! - Volatile memory-mapped register handles ([`Mmio`])
//! - The fixed address map of the PS peripherals and PL IP used by the board
//! - A blocking delay on the Cortex-A9 global timer
//! - [`Board`], which hands out every register exactly once
//!
//! # Features
//!
//! - `defmt` - Enable debug formatting support
//!
//! # Usage
//!
//! The firmware calls [`Board::take`] once at start-up and moves the
//! register handles into the drivers from `hexcalc-drivers`.

#![no_std]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod board;
pub mod map;
pub mod mmio;
pub mod timer;

pub use board::{Board, GpioBank, PwmChannel, RgbBlock, UartBlock};
pub use mmio::Mmio;
pub use timer::{GlobalTimer, GlobalTimerDelay, GlobalTimerRegisters, COUNTS_PER_US};

// Re-export shared traits from hexcalc-hal for convenience
pub use hexcalc_hal::Register;
