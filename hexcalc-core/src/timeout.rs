//! Bounded polling
//!
//! Every wait in the firmware is a polling loop. A [`Timeout`] says how many
//! times such a loop may re-check its condition; [`Timeout::Infinite`] keeps
//! the loop spinning until the hardware answers, which is what the firmware
//! does on the board. Tests and callers that prefer to fail use
//! [`Timeout::Polls`].

/// Limit on a polling loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Timeout {
    /// Poll until the condition holds, however long that takes
    #[default]
    Infinite,
    /// Give up after this many failed re-checks
    Polls(u32),
}

impl Timeout {
    /// Convert a wall-clock budget into a poll count
    ///
    /// `interval_ms` is the sleep between polls. A zero interval has no
    /// meaningful conversion and yields a single poll.
    pub fn from_millis(timeout_ms: u32, interval_ms: u32) -> Self {
        if interval_ms == 0 {
            return Timeout::Polls(1);
        }
        Timeout::Polls(timeout_ms.div_ceil(interval_ms))
    }

    /// Start a fresh budget for one wait
    pub fn budget(self) -> PollBudget {
        PollBudget::new(self)
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self, Timeout::Infinite)
    }
}

/// Marker returned when a poll budget runs out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Expired;

/// Remaining polls for a single wait
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollBudget {
    remaining: Option<u32>,
}

impl PollBudget {
    pub fn new(timeout: Timeout) -> Self {
        let remaining = match timeout {
            Timeout::Infinite => None,
            Timeout::Polls(n) => Some(n),
        };
        Self { remaining }
    }

    /// Spend one poll
    ///
    /// Call after a failed check and before retrying.
    pub fn consume(&mut self) -> Result<(), Expired> {
        match self.remaining.as_mut() {
            None => Ok(()),
            Some(0) => Err(Expired),
            Some(n) => {
                *n -= 1;
                Ok(())
            }
        }
    }

    /// Polls left, `None` if unbounded
    pub fn remaining(&self) -> Option<u32> {
        self.remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infinite_never_expires() {
        let mut budget = Timeout::Infinite.budget();
        for _ in 0..10_000 {
            assert!(budget.consume().is_ok());
        }
        assert_eq!(budget.remaining(), None);
    }

    #[test]
    fn test_polls_expire() {
        let mut budget = Timeout::Polls(3).budget();
        assert!(budget.consume().is_ok());
        assert!(budget.consume().is_ok());
        assert!(budget.consume().is_ok());
        assert_eq!(budget.consume(), Err(Expired));
        // Stays expired
        assert_eq!(budget.consume(), Err(Expired));
    }

    #[test]
    fn test_zero_polls_fail_immediately() {
        let mut budget = Timeout::Polls(0).budget();
        assert_eq!(budget.consume(), Err(Expired));
    }

    #[test]
    fn test_from_millis() {
        assert_eq!(Timeout::from_millis(100, 10), Timeout::Polls(10));
        assert_eq!(Timeout::from_millis(105, 10), Timeout::Polls(11));
        assert_eq!(Timeout::from_millis(0, 10), Timeout::Polls(0));
        assert_eq!(Timeout::from_millis(100, 0), Timeout::Polls(1));
    }

    #[test]
    fn test_default_is_infinite() {
        assert!(Timeout::default().is_infinite());
    }
}
