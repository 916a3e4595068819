//! Operator console
//!
//! Drives the calculator from the board inputs:
//!
//! 1. The opcode is set on the slide switches and latched with the confirm
//!    button.
//! 2. Operands are typed on the keypad (up to four hex digits, echoed as they
//!    are accepted) and ended with the confirm button.
//! 3. The result is printed in hex.
//!
//! All waits are busy polls. Nothing here times out; the console is the
//! firmware's main loop and runs until power-off.

use embedded_hal::delay::DelayNs;

use crate::calculator::{Arity, Calculator, Opcode, OperandEntry};
use crate::config::ConsoleConfig;
use crate::traits::{ButtonSource, ConsoleOutput, KeySource, SwitchSource};

/// Welcome text printed once at start-up
pub const BANNER: [&str; 4] = [
    "\n\nWelcome to the 32-bit Calculator\n\n",
    "1. Set switches to opcode and press enter.\n",
    "2. Input first operand and press enter.\n",
    "3. Input second operand and press enter.\n\n",
];

/// Line printed above the result of an arithmetic operation
const RULE: &str = "\n----------\n";

/// One completed console command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Command {
    pub opcode: Opcode,
    pub lhs: u32,
    pub rhs: u32,
    /// `None` for STORE
    pub result: Option<u32>,
}

/// Calculator console bound to its input and output devices
pub struct Console<K, B, S, O, D> {
    keys: K,
    buttons: B,
    switches: S,
    out: O,
    delay: D,
    config: ConsoleConfig,
    calculator: Calculator,
}

impl<K, B, S, O, D> Console<K, B, S, O, D>
where
    K: KeySource,
    B: ButtonSource,
    S: SwitchSource,
    O: ConsoleOutput,
    D: DelayNs,
{
    pub fn new(keys: K, buttons: B, switches: S, out: O, delay: D, config: ConsoleConfig) -> Self {
        Self {
            keys,
            buttons,
            switches,
            out,
            delay,
            config,
            calculator: Calculator::new(),
        }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn output(&self) -> &O {
        &self.out
    }

    pub fn print_banner(&mut self) -> Result<(), O::Error> {
        for line in BANNER {
            self.out.print_str(line)?;
        }
        Ok(())
    }

    /// Wait for the confirm button and latch the opcode from the switches
    pub fn read_opcode(&mut self) -> Opcode {
        while !self.buttons.is_pressed(self.config.confirm) {}

        let opcode = Opcode::from_bits(self.switches.switches());
        self.delay.delay_ms(self.config.key_delay_ms);
        opcode
    }

    /// Collect hex digits from the keypad until the confirm button
    ///
    /// Each accepted digit is echoed. An operand confirmed with no digits
    /// reads as all ones.
    pub fn read_operand(&mut self) -> Result<u32, O::Error> {
        let mut status = Ok(());
        let value = self.collect_operand(&mut status);
        status.map(|()| value)
    }

    /// Operand entry that keeps going when an echo fails
    ///
    /// The first output error is left in `status`.
    fn collect_operand(&mut self, status: &mut Result<(), O::Error>) -> u32 {
        let mut entry = OperandEntry::new(self.config.operand_digits());

        loop {
            let key = self.keys.scan();
            if let Some(digit) = entry.push(key) {
                keep_first(status, self.out.print(format_args!("{:x}", digit)));
                self.delay.delay_ms(self.config.key_delay_ms);
            }

            if self.buttons.is_pressed(self.config.confirm) {
                self.delay.delay_ms(self.config.key_delay_ms);
                return entry.finish();
            }
        }
    }

    /// Run one full opcode / operands / result exchange
    ///
    /// A failed print does not cancel the command: operands are still read
    /// and the opcode still executes, so STORE updates the storage register
    /// even when its echo is lost. The first output error is returned.
    pub fn run_command(&mut self) -> Result<Command, O::Error> {
        self.out.print_str("Enter opcode and press enter...\n")?;

        let opcode = self.read_opcode();
        #[cfg(feature = "defmt")]
        defmt::debug!("opcode {}", opcode);

        let mut status = self.out.print_str(opcode.label());
        keep_first(
            &mut status,
            self.out
                .print_str(" opcode set.  Enter operands and press enter.\n"),
        );

        let mut lhs = 0;
        let mut rhs = 0;

        match opcode.arity() {
            Arity::Nullary => {
                let echo = self.out.print(format_args!("{}\n", opcode.label()));
                keep_first(&mut status, echo);
            }
            arity => {
                lhs = self.collect_operand(&mut status);
                let echo = self.out.print(format_args!("\t{}\n", opcode.label()));
                keep_first(&mut status, echo);

                if arity == Arity::Binary {
                    rhs = self.collect_operand(&mut status);
                }

                let tail = if opcode.prints_result() { RULE } else { "\n" };
                keep_first(&mut status, self.out.print_str(tail));
            }
        }

        let result = self.calculator.execute(opcode, lhs, rhs);
        if let Some(value) = result {
            let printed = self.out.print(format_args!("{:x}\n\n", value));
            keep_first(&mut status, printed);
        }

        status.map(|()| Command {
            opcode,
            lhs,
            rhs,
            result,
        })
    }

    /// Print the banner, then serve commands forever
    ///
    /// Output errors lose transcript text only; every command still runs.
    pub fn run(&mut self) -> ! {
        if self.print_banner().is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("banner output failed");
        }

        loop {
            match self.run_command() {
                Ok(_command) => {
                    #[cfg(feature = "defmt")]
                    defmt::trace!("command done: {}", _command);
                }
                Err(_) => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("console output failed");
                }
            }
        }
    }
}

fn keep_first<E>(status: &mut Result<(), E>, result: Result<(), E>) {
    if status.is_ok() {
        *status = result;
    }
}
