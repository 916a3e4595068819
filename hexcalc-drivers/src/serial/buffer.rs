//! Bounded message rendering

use core::fmt;

use heapless::Vec;

/// Fixed-capacity text buffer that truncates instead of failing
///
/// One slot of the capacity is reserved for a terminator, so at most
/// `N - 1` bytes are kept. Text past that limit is dropped and the buffer
/// is marked truncated. Truncation works on bytes, so a multi-byte
/// character at the limit may be cut.
#[derive(Debug, Clone, Default)]
pub struct MessageBuffer<const N: usize> {
    bytes: Vec<u8, N>,
    truncated: bool,
}

impl<const N: usize> MessageBuffer<N> {
    /// Bytes kept per message
    pub const LIMIT: usize = N.saturating_sub(1);

    pub const fn new() -> Self {
        Self {
            bytes: Vec::new(),
            truncated: false,
        }
    }

    /// Render formatted text into a fresh buffer
    pub fn render(args: fmt::Arguments<'_>) -> Self {
        let mut buffer = Self::new();
        // write_str never fails; an error here comes from a Display impl and
        // leaves whatever was rendered before it
        let _ = fmt::write(&mut buffer, args);
        buffer
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Whether any text was dropped
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn clear(&mut self) {
        self.bytes.clear();
        self.truncated = false;
    }
}

impl<const N: usize> fmt::Write for MessageBuffer<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = Self::LIMIT.saturating_sub(self.bytes.len());
        let take = s.len().min(room);

        // take never exceeds the free capacity
        let _ = self.bytes.extend_from_slice(&s.as_bytes()[..take]);
        if take < s.len() {
            self.truncated = true;
        }

        Ok(())
    }
}
