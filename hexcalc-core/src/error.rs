//! Driver error types

use crate::timeout::Expired;

/// Errors reported by the board drivers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverError {
    /// Hardware never released a busy, reset or full flag within the
    /// allowed number of polls
    HardwareTimeout,
}

impl From<Expired> for DriverError {
    fn from(_: Expired) -> Self {
        DriverError::HardwareTimeout
    }
}
