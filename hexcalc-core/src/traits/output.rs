//! Console output trait

use core::fmt;

/// Text sink for the operator console
///
/// Implementations render `args` into a bounded buffer; output longer than
/// the buffer is truncated, not an error.
pub trait ConsoleOutput {
    type Error;

    fn print(&mut self, args: fmt::Arguments<'_>) -> Result<(), Self::Error>;

    fn print_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.print(format_args!("{}", s))
    }
}
