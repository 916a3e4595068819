//! 4x4 hex keypad matrix scanner
//!
//! The keypad plugs into a PMOD header. Pins 1-4 are driven scan lines,
//! pins 5-8 are sense lines with pull-ups. Pressing a key shorts one scan
//! line to one sense line, so a sense line reads low only while its scan
//! line is driven low.
//!
//! # Wiring
//!
//! ```text
//! scan pin  4 3 2 1  ->  column 1 2 3 4
//! sense pin 8 7 6 5  ->  row    1 2 3 4
//! ```
//!
//! # Scanning
//!
//! A scan drives each scan line low in turn (pin 4 first), samples the sense
//! lines (pin 8 first) and drives the line high again. Every active
//! crossing overwrites the previous one, so when several keys are down (or
//! ghosting makes extra crossings appear) the last one in scan order wins.
//!
//! A scan is one instantaneous sample with no debounce. Callers that need a
//! single event per press pace their polling instead.

use hexcalc_core::traits::KeySource;
use hexcalc_core::{DriverError, KeyCode, KeyPosition, Timeout};
use hexcalc_hal::{PinBank, PmodPin};

/// Scan lines in the order they are driven
pub const SCAN_ORDER: [PmodPin; 4] = [PmodPin::P4, PmodPin::P3, PmodPin::P2, PmodPin::P1];

/// Sense lines in the order they are sampled
pub const SENSE_ORDER: [PmodPin; 4] = [PmodPin::P8, PmodPin::P7, PmodPin::P6, PmodPin::P5];

/// Pins 1-4 outputs, 5-8 inputs
const DIRECTIONS: u8 = 0b0000_1111;

/// All scan lines released
const IDLE_LEVELS: u8 = 0b0000_1111;

/// Hex keypad on an 8-pin port
///
/// Constructing the driver configures the port, so every `HexKeypad` is
/// ready to scan.
pub struct HexKeypad<P> {
    port: P,
}

impl<P: PinBank> HexKeypad<P> {
    /// Take the port and configure it for scanning
    ///
    /// Directions are set once here and never changed by a scan.
    pub fn new(mut port: P) -> Self {
        port.set_directions(DIRECTIONS);
        port.write_pins(IDLE_LEVELS);
        Self { port }
    }

    /// Matrix position of the pressed key, if any
    pub fn scan_position(&mut self) -> Option<KeyPosition> {
        let mut active = None;

        for scan in SCAN_ORDER {
            self.port.write_pin(scan, false);

            for sense in SENSE_ORDER {
                if self.port.is_low(sense) {
                    active = KeyPosition::new(9 - sense.number(), 5 - scan.number());
                }
            }

            self.port.write_pin(scan, true);
        }

        active
    }

    /// Take one sample and decode it
    ///
    /// Returns [`KeyCode::NONE`] when no key is down.
    pub fn scan_once(&mut self) -> KeyCode {
        self.scan_position()
            .map(|position| position.code())
            .unwrap_or(KeyCode::NONE)
    }

    /// Spin until a key is pressed
    ///
    /// There is no timeout and no way to cancel; use
    /// [`wait_for_key_with`](Self::wait_for_key_with) for a bounded wait.
    pub fn wait_for_key(&mut self) -> KeyCode {
        loop {
            let key = self.scan_once();
            if key.is_key() {
                return key;
            }
        }
    }

    /// Spin until a key is pressed or the scan budget runs out
    pub fn wait_for_key_with(&mut self, timeout: Timeout) -> Result<KeyCode, DriverError> {
        let mut budget = timeout.budget();

        loop {
            let key = self.scan_once();
            if key.is_key() {
                return Ok(key);
            }

            if let Err(expired) = budget.consume() {
                #[cfg(feature = "defmt")]
                defmt::debug!("keypad wait timed out");
                return Err(expired.into());
            }
        }
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    /// Give the port back
    pub fn release(self) -> P {
        self.port
    }
}

impl<P: PinBank> KeySource for HexKeypad<P> {
    fn scan(&mut self) -> KeyCode {
        self.scan_once()
    }
}
