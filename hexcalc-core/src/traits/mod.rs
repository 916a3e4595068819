//! Hardware abstraction traits
//!
//! These traits define the interface between the console logic
//! and the board drivers.

pub mod input;
pub mod output;

pub use input::{Button, ButtonSource, ButtonState, KeySource, SwitchSource};
pub use output::ConsoleOutput;
