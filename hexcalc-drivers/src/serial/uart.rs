//! Polled UART transmitter

use core::fmt;

use embedded_hal::delay::DelayNs;
use hexcalc_core::traits::ConsoleOutput;
use hexcalc_core::Timeout;
use hexcalc_hal::{Register, SerialConfig, UartTx};

use super::{
    MessageBuffer, SerialError, Transmission, CTRL_ENABLE, CTRL_RESET, DRAIN_POLL_INTERVAL_MS,
    IRQ_ENABLE_MASK, IRQ_FIFO_EMPTY, IRQ_FIFO_FULL, TX_BUFFER_SIZE,
};

/// UART registers used by the transmitter
pub struct UartRegisters<R> {
    /// Control (reset and enable)
    pub control: R,
    /// Mode (stop bits, parity, character length)
    pub mode: R,
    /// Interrupt enable
    pub irq_enable: R,
    /// Interrupt status (full flag is write-one-to-clear)
    pub irq_status: R,
    /// Baud rate generator
    pub baud_gen: R,
    /// TX/RX FIFO
    pub fifo: R,
    /// Baud rate divisor
    pub baud_div: R,
}

/// Configured UART transmitter
///
/// Only [`configure`](Self::configure) creates one, so a `SerialTx` always
/// talks to an initialised device.
pub struct SerialTx<R, D> {
    regs: UartRegisters<R>,
    delay: D,
    drain_timeout: Timeout,
}

impl<R: Register, D: DelayNs> SerialTx<R, D> {
    /// Reset and configure the UART
    ///
    /// After the reset request the control register is polled until the
    /// device clears its reset bits, spending one poll of `reset_timeout`
    /// per re-check. Then TX/RX are enabled, the line format and baud rate
    /// are written and the FIFO status sources are enabled.
    pub fn configure(
        mut regs: UartRegisters<R>,
        delay: D,
        config: &SerialConfig,
        reset_timeout: Timeout,
    ) -> Result<Self, SerialError> {
        regs.control.write(CTRL_RESET);

        let mut budget = reset_timeout.budget();
        while regs.control.any_set(CTRL_RESET) {
            if budget.consume().is_err() {
                #[cfg(feature = "defmt")]
                defmt::warn!("uart reset never completed");
                return Err(SerialError::ResetTimeout);
            }
        }

        regs.control.write(CTRL_ENABLE);
        regs.mode.write(config.mode_bits());
        regs.baud_gen.write(config.baud.generator as u32);
        regs.baud_div.write(config.baud.divisor as u32);
        regs.irq_enable.write(IRQ_ENABLE_MASK);

        #[cfg(feature = "defmt")]
        defmt::debug!("uart configured: {}", config);

        Ok(Self {
            regs,
            delay,
            drain_timeout: Timeout::Infinite,
        })
    }

    /// Bound every FIFO drain to `timeout` empty polls
    ///
    /// The default is [`Timeout::Infinite`].
    pub fn with_drain_timeout(mut self, timeout: Timeout) -> Self {
        self.drain_timeout = timeout;
        self
    }

    pub fn drain_timeout(&self) -> Timeout {
        self.drain_timeout
    }

    /// Render and send a formatted message
    ///
    /// Output beyond the buffer limit is dropped and reported through
    /// [`Transmission::truncated`]. The terminator slot is never sent.
    pub fn transmit(&mut self, args: fmt::Arguments<'_>) -> Result<Transmission, SerialError> {
        let message = MessageBuffer::<TX_BUFFER_SIZE>::render(args);

        #[cfg(feature = "defmt")]
        if message.is_truncated() {
            defmt::warn!("serial message truncated to {} bytes", message.len());
        }

        self.write_bytes(message.as_bytes())?;

        Ok(Transmission {
            written: message.len(),
            truncated: message.is_truncated(),
        })
    }

    /// Push raw bytes into the FIFO
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), SerialError> {
        for &byte in bytes {
            self.drain_if_full()?;
            self.regs.fifo.write(byte as u32);
        }
        Ok(())
    }

    /// Wait out a full FIFO
    ///
    /// Nothing is written while the full flag is up. The flag is cleared by
    /// writing it back, then the empty flag is polled with a short sleep
    /// between checks.
    fn drain_if_full(&mut self) -> Result<(), SerialError> {
        let status = self.regs.irq_status.read();
        if status & IRQ_FIFO_FULL == 0 {
            return Ok(());
        }

        self.regs.irq_status.write(status | IRQ_FIFO_FULL);

        let mut budget = self.drain_timeout.budget();
        while !self.regs.irq_status.any_set(IRQ_FIFO_EMPTY) {
            if budget.consume().is_err() {
                #[cfg(feature = "defmt")]
                defmt::warn!("uart fifo did not drain");
                return Err(SerialError::DrainTimeout);
            }
            self.delay.delay_ms(DRAIN_POLL_INTERVAL_MS);
        }

        Ok(())
    }

    /// Give the registers and delay back
    pub fn release(self) -> (UartRegisters<R>, D) {
        (self.regs, self.delay)
    }
}

impl<R: Register, D: DelayNs> UartTx for SerialTx<R, D> {
    type Error = SerialError;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.write_bytes(data)
    }

    /// Bytes are in the hardware FIFO once written; there is nothing to flush
    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<R, D> embedded_io::ErrorType for SerialTx<R, D> {
    type Error = SerialError;
}

impl<R: Register, D: DelayNs> embedded_io::Write for SerialTx<R, D> {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.write_bytes(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<R: Register, D: DelayNs> ConsoleOutput for SerialTx<R, D> {
    type Error = SerialError;

    fn print(&mut self, args: fmt::Arguments<'_>) -> Result<(), Self::Error> {
        self.transmit(args).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SimDelay;
    use core::cell::RefCell;
    use hexcalc_hal::{BaudDivisor, DataBits, Parity, StopBits};
    use std::vec;
    use std::vec::Vec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Reg {
        Control,
        Mode,
        IrqEnable,
        IrqStatus,
        BaudGen,
        Fifo,
        BaudDiv,
    }

    struct State {
        values: [u32; 7],
        writes: Vec<(Reg, u32)>,
        /// Control reads before the reset bits clear, `None` = never
        reset_polls: Option<u32>,
        /// Bytes sitting in the hardware FIFO
        pending: Vec<u8>,
        /// Bytes already shifted out
        sent: Vec<u8>,
        capacity: usize,
        /// Status polls after the full flag clears before the FIFO empties,
        /// `None` = never
        drain_polls: Option<u32>,
        drain_count: u32,
        /// A FIFO write happened with the full flag up
        overrun: bool,
    }

    /// Simulated UART with a byte FIFO behind the status flags
    struct SimUart {
        state: RefCell<State>,
    }

    impl SimUart {
        fn new() -> Self {
            let mut values = [0; 7];
            values[Reg::IrqStatus as usize] = IRQ_FIFO_EMPTY;
            Self {
                state: RefCell::new(State {
                    values,
                    writes: Vec::new(),
                    reset_polls: Some(0),
                    pending: Vec::new(),
                    sent: Vec::new(),
                    capacity: 64,
                    drain_polls: Some(1),
                    drain_count: 0,
                    overrun: false,
                }),
            }
        }

        /// FIFO already full of earlier output
        fn prefilled(self, byte: u8) -> Self {
            {
                let mut state = self.state.borrow_mut();
                let capacity = state.capacity;
                state.pending = vec![byte; capacity];
                state.values[Reg::IrqStatus as usize] = IRQ_FIFO_FULL;
            }
            self
        }

        fn with(self, f: impl FnOnce(&mut State)) -> Self {
            f(&mut self.state.borrow_mut());
            self
        }

        fn reg(&self, reg: Reg) -> SimReg<'_> {
            SimReg { sim: self, reg }
        }

        fn regs(&self) -> UartRegisters<SimReg<'_>> {
            UartRegisters {
                control: self.reg(Reg::Control),
                mode: self.reg(Reg::Mode),
                irq_enable: self.reg(Reg::IrqEnable),
                irq_status: self.reg(Reg::IrqStatus),
                baud_gen: self.reg(Reg::BaudGen),
                fifo: self.reg(Reg::Fifo),
                baud_div: self.reg(Reg::BaudDiv),
            }
        }

        fn tx(&self) -> SerialTx<SimReg<'_>, SimDelay> {
            SerialTx::configure(
                self.regs(),
                SimDelay::default(),
                &SerialConfig::default(),
                Timeout::Infinite,
            )
            .unwrap()
        }

        /// Everything written to the FIFO, in order
        fn transmitted(&self) -> Vec<u8> {
            let state = self.state.borrow();
            let mut bytes = state.sent.clone();
            bytes.extend_from_slice(&state.pending);
            bytes
        }

        fn writes_to(&self, reg: Reg) -> Vec<u32> {
            self.state
                .borrow()
                .writes
                .iter()
                .filter(|(r, _)| *r == reg)
                .map(|(_, v)| *v)
                .collect()
        }
    }

    struct SimReg<'a> {
        sim: &'a SimUart,
        reg: Reg,
    }

    impl Register for SimReg<'_> {
        fn read(&self) -> u32 {
            let mut state = self.sim.state.borrow_mut();
            let state = &mut *state;

            match self.reg {
                Reg::Control => {
                    if let Some(polls) = state.reset_polls {
                        if polls == 0 {
                            state.values[Reg::Control as usize] &= !CTRL_RESET;
                        } else {
                            state.reset_polls = Some(polls - 1);
                        }
                    }
                }
                Reg::IrqStatus => {
                    let status = state.values[Reg::IrqStatus as usize];
                    if status & IRQ_FIFO_FULL == 0 && !state.pending.is_empty() {
                        if let Some(limit) = state.drain_polls {
                            state.drain_count += 1;
                            if state.drain_count >= limit {
                                let drained: Vec<u8> = state.pending.drain(..).collect();
                                state.sent.extend(drained);
                                state.values[Reg::IrqStatus as usize] |= IRQ_FIFO_EMPTY;
                                state.drain_count = 0;
                            }
                        }
                    }
                }
                _ => {}
            }

            state.values[self.reg as usize]
        }

        fn write(&mut self, value: u32) {
            let mut state = self.sim.state.borrow_mut();
            state.writes.push((self.reg, value));

            match self.reg {
                Reg::IrqStatus => state.values[Reg::IrqStatus as usize] &= !value,
                Reg::Fifo => {
                    if state.values[Reg::IrqStatus as usize] & IRQ_FIFO_FULL != 0 {
                        state.overrun = true;
                    }
                    state.pending.push(value as u8);
                    state.values[Reg::IrqStatus as usize] &= !IRQ_FIFO_EMPTY;
                    if state.pending.len() >= state.capacity {
                        state.values[Reg::IrqStatus as usize] |= IRQ_FIFO_FULL;
                    }
                }
                reg => state.values[reg as usize] = value,
            }
        }
    }

    #[test]
    fn test_configure_sequence() {
        let sim = SimUart::new();
        let _tx = sim.tx();

        assert_eq!(
            sim.state.borrow().writes,
            vec![
                (Reg::Control, 0b11),
                (Reg::Control, 0b1_0100),
                (Reg::Mode, 0x20),
                (Reg::BaudGen, 0x7C),
                (Reg::BaudDiv, 6),
                (Reg::IrqEnable, 0b1_1000),
            ]
        );
    }

    #[test]
    fn test_baud_pair_written_exactly() {
        let sim = SimUart::new();
        let config = SerialConfig {
            stop_bits: StopBits::Two,
            data_bits: DataBits::Seven,
            parity: Parity::Odd,
            baud: BaudDivisor::new(0x7C, 6),
        };

        let result =
            SerialTx::configure(sim.regs(), SimDelay::default(), &config, Timeout::Infinite);
        assert!(result.is_ok());

        assert_eq!(sim.writes_to(Reg::BaudGen), vec![0x7C]);
        assert_eq!(sim.writes_to(Reg::BaudDiv), vec![6]);
        assert_eq!(sim.writes_to(Reg::Mode), vec![0b10_001_10_0]);
    }

    #[test]
    fn test_configure_waits_for_reset() {
        let sim = SimUart::new().with(|s| s.reset_polls = Some(5));
        let result = SerialTx::configure(
            sim.regs(),
            SimDelay::default(),
            &SerialConfig::default(),
            Timeout::Polls(5),
        );
        assert!(result.is_ok());
        assert_eq!(sim.state.borrow().values[Reg::Control as usize], CTRL_ENABLE);
    }

    #[test]
    fn test_configure_reset_timeout() {
        let sim = SimUart::new().with(|s| s.reset_polls = None);
        let result = SerialTx::configure(
            sim.regs(),
            SimDelay::default(),
            &SerialConfig::default(),
            Timeout::Polls(4),
        );

        assert_eq!(result.err(), Some(SerialError::ResetTimeout));
        // Nothing past the reset request was written
        assert_eq!(sim.state.borrow().writes, vec![(Reg::Control, CTRL_RESET)]);
    }

    #[test]
    fn test_transmit_message() {
        let sim = SimUart::new();
        let mut tx = sim.tx();

        let sent = tx.transmit(format_args!("{}\t{}\n", 0x12, "+")).unwrap();
        assert_eq!(
            sent,
            Transmission {
                written: 5,
                truncated: false
            }
        );
        assert_eq!(sim.transmitted(), b"18\t+\n");
    }

    #[test]
    fn test_transmit_truncates_to_buffer() {
        let sim = SimUart::new().with(|s| s.capacity = 1024);
        let mut tx = sim.tx();
        let text = "0123456789".repeat(10);

        let sent = tx.transmit(format_args!("{}", text)).unwrap();
        assert_eq!(sent.written, 63);
        assert!(sent.truncated);
        assert_eq!(sim.transmitted(), &text.as_bytes()[..63]);
    }

    #[test]
    fn test_full_fifo_drains_before_write() {
        let sim = SimUart::new()
            .prefilled(b'.')
            .with(|s| s.drain_polls = Some(3));
        let mut tx = sim.tx();

        tx.transmit(format_args!("A")).unwrap();

        let state = sim.state.borrow();
        assert!(!state.overrun);
        assert_eq!(state.sent.len(), 64);
        assert_eq!(state.pending, b"A");

        // Full flag cleared before the byte went out
        let clear = state
            .writes
            .iter()
            .position(|w| *w == (Reg::IrqStatus, IRQ_FIFO_FULL))
            .unwrap();
        let write = state.writes.iter().position(|w| w.0 == Reg::Fifo).unwrap();
        assert!(clear < write);
        drop(state);

        // Two failed empty polls, each followed by a sleep
        let (_, delay) = tx.release();
        assert_eq!(delay.elapsed_ms(), 20);
        assert_eq!(delay.calls(), 2);
    }

    #[test]
    fn test_drain_timeout() {
        let sim = SimUart::new().prefilled(b'.').with(|s| s.drain_polls = None);
        let mut tx = sim.tx().with_drain_timeout(Timeout::Polls(2));

        assert_eq!(tx.transmit(format_args!("A")), Err(SerialError::DrainTimeout));
        assert!(sim.writes_to(Reg::Fifo).is_empty());
        assert!(!sim.state.borrow().overrun);

        let (_, delay) = tx.release();
        assert_eq!(delay.elapsed_ms(), 20);
    }

    #[test]
    fn test_fifo_refills_mid_message() {
        let sim = SimUart::new().with(|s| s.capacity = 16);
        let mut tx = sim.tx();
        let text = "abcdefghij".repeat(4);

        let sent = tx.transmit(format_args!("{}", text)).unwrap();
        assert_eq!(sent.written, 40);
        assert_eq!(sim.transmitted(), text.as_bytes());
        assert!(!sim.state.borrow().overrun);
    }

    #[test]
    fn test_default_drain_timeout() {
        assert_eq!(crate::serial::default_drain_timeout(), Timeout::Polls(10));
        let sim = SimUart::new();
        assert_eq!(sim.tx().drain_timeout(), Timeout::Infinite);
    }

    #[test]
    fn test_serial_print_macro() {
        let sim = SimUart::new();
        let mut tx = sim.tx();

        let sent = crate::serial_print!(tx, "{}+{}={:x}", 7, 9, 16).unwrap();
        assert_eq!(sent.written, 6);
        assert_eq!(sim.transmitted(), b"7+9=10");
    }

    #[test]
    fn test_embedded_io_write() {
        let sim = SimUart::new();
        let mut tx = sim.tx();

        assert_eq!(embedded_io::Write::write(&mut tx, b"abc"), Ok(3));
        embedded_io::Write::write_all(&mut tx, b"def").unwrap();
        assert_eq!(sim.transmitted(), b"abcdef");
    }

    #[test]
    fn test_uart_tx_and_console_output() {
        let sim = SimUart::new();
        let mut tx = sim.tx();

        UartTx::write_blocking(&mut tx, b"ok ").unwrap();
        UartTx::flush(&mut tx).unwrap();
        tx.print_str("LOAD\n").unwrap();
        assert_eq!(sim.transmitted(), b"ok LOAD\n");
    }

    #[test]
    fn test_serial_error_kind() {
        use embedded_io::Error;
        assert_eq!(SerialError::DrainTimeout.kind(), embedded_io::ErrorKind::TimedOut);
        assert_eq!(
            hexcalc_core::DriverError::from(SerialError::ResetTimeout),
            hexcalc_core::DriverError::HardwareTimeout
        );
    }
}
