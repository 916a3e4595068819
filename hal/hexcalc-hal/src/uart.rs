//! UART serial communication abstractions
//!
//! Provides the transmit trait and the line configuration shared by the
//! serial driver and the board setup. Field encodings follow the Cadence
//! UART found in the Zynq-7000 processing system.

/// UART transmitter
pub trait UartTx {
    /// Error type for transmit operations
    type Error;

    /// Write data to the UART
    ///
    /// Blocks until all data has been written or an error occurs.
    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Flush any buffered data
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// UART line configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SerialConfig {
    /// Number of stop bits
    pub stop_bits: StopBits,
    /// Number of data bits
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Baud generator settings
    pub baud: BaudDivisor,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            stop_bits: StopBits::One,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            baud: BaudDivisor::BAUD_115200,
        }
    }
}

impl SerialConfig {
    /// Mode register value for this configuration
    ///
    /// Layout: stop bits at 7:6, parity at 5:3, character length at 2:1.
    pub const fn mode_bits(&self) -> u32 {
        ((self.stop_bits as u32 & 0b11) << 6)
            | ((self.parity as u32 & 0b111) << 3)
            | ((self.data_bits as u32 & 0b11) << 1)
    }
}

/// Two-stage baud rate setting
///
/// The generator divides the reference clock into the sample clock, the
/// divisor then sets how many sample clocks make one bit (`divisor + 1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BaudDivisor {
    /// Baud rate generator value (CD)
    pub generator: u16,
    /// Bit period divisor (BDIV)
    pub divisor: u8,
}

impl BaudDivisor {
    /// 9600 baud from a 100 MHz reference
    pub const BAUD_9600: Self = Self::new(0x7C, 83);

    /// 115200 baud from a 100 MHz reference
    pub const BAUD_115200: Self = Self::new(0x7C, 6);

    pub const fn new(generator: u16, divisor: u8) -> Self {
        Self { generator, divisor }
    }

    /// Baud rate produced from the given reference clock
    ///
    /// Returns `None` for a zero generator, which disables the baud clock.
    pub fn actual_baud(&self, ref_clk_hz: u32) -> Option<u32> {
        let ticks = self.generator as u32 * (self.divisor as u32 + 1);
        if ticks == 0 {
            return None;
        }
        Some(ref_clk_hz / ticks)
    }
}

/// Number of data bits per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DataBits {
    Eight = 0b00,
    Seven = 0b10,
    Six = 0b11,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Parity {
    Even = 0b000,
    Odd = 0b001,
    /// Forced to 0
    Space = 0b010,
    /// Forced to 1
    Mark = 0b011,
    None = 0b100,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum StopBits {
    One = 0b00,
    OneAndHalf = 0b01,
    Two = 0b10,
}
