//! Digital I/O ports

pub mod pmod;

pub use pmod::{PmodPort, PmodRegisters, PMOD_MASK, PMOD_SHIFT};
