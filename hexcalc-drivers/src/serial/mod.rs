//! Serial transmit driver
//!
//! Polled transmitter for the Cadence UART in the Zynq processing system.
//! Messages are rendered into a bounded buffer and pushed into the
//! hardware FIFO one byte at a time. When the FIFO reports full, the driver
//! clears the flag and waits for the FIFO to drain before writing again.
//!
//! ```text
//! IDLE -> DRAIN_IF_FULL -> WRITE_BYTE -> (more bytes? DRAIN_IF_FULL : IDLE)
//! ```

pub mod buffer;
pub mod uart;

pub use buffer::MessageBuffer;
pub use uart::{SerialTx, UartRegisters};

use hexcalc_core::{DriverError, Timeout};

/// Control register value that resets both directions and the FIFOs
pub const CTRL_RESET: u32 = 0b11;
/// Control register value that enables TX and RX
pub const CTRL_ENABLE: u32 = 0b1_0100;

/// Interrupt status: TX FIFO full (write one to clear)
pub const IRQ_FIFO_FULL: u32 = 0x10;
/// Interrupt status: TX FIFO empty
pub const IRQ_FIFO_EMPTY: u32 = 0x08;
/// Status sources enabled at configuration
pub const IRQ_ENABLE_MASK: u32 = IRQ_FIFO_FULL | IRQ_FIFO_EMPTY;

/// Render buffer size, including the terminator slot
pub const TX_BUFFER_SIZE: usize = 64;

/// Sleep between FIFO empty polls
pub const DRAIN_POLL_INTERVAL_MS: u32 = 10;
/// Suggested bound on one FIFO drain
pub const DEFAULT_DRAIN_TIMEOUT_MS: u32 = 100;

/// Drain bound matching [`DEFAULT_DRAIN_TIMEOUT_MS`]
///
/// Pass to [`SerialTx::with_drain_timeout`] to fail a transmit instead of
/// hanging on a stuck FIFO.
pub fn default_drain_timeout() -> Timeout {
    Timeout::from_millis(DEFAULT_DRAIN_TIMEOUT_MS, DRAIN_POLL_INTERVAL_MS)
}

/// Outcome of one transmit call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transmission {
    /// Bytes pushed into the FIFO
    pub written: usize,
    /// The rendered message did not fit the buffer
    pub truncated: bool,
}

/// Serial driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SerialError {
    /// Reset bits never cleared during configuration
    ResetTimeout,
    /// FIFO never reported empty after filling up
    DrainTimeout,
}

impl From<SerialError> for DriverError {
    fn from(_: SerialError) -> Self {
        DriverError::HardwareTimeout
    }
}

impl embedded_io::Error for SerialError {
    fn kind(&self) -> embedded_io::ErrorKind {
        embedded_io::ErrorKind::TimedOut
    }
}

/// Format and transmit a message
///
/// Expands to `tx.transmit(format_args!(...))` and returns its result.
///
/// ```ignore
/// serial_print!(tx, "{:x}\n\n", result)?;
/// ```
#[macro_export]
macro_rules! serial_print {
    ($tx:expr, $($arg:tt)*) => {
        $tx.transmit(::core::format_args!($($arg)*))
    };
}
