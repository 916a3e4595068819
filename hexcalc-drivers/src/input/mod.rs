//! Operator input drivers
//!
//! Slide switches and push buttons are plain memory-mapped input registers
//! (AXI GPIO); reading them is a masked register read with no state.

pub mod buttons;
pub mod switches;

pub use buttons::{ButtonBank, BUTTON_MASK, BUTTON_POLL_INTERVAL_US};
pub use switches::{SwitchBank, SWITCH_MASK};
