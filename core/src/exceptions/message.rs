//! exceptions/message.rs
//! Stream-style message builder for exceptions.

use std::fmt;

/// Accumulates formatted text that becomes an exception message.
///
/// Build it with `write!`, then hand it to `Exception::from_buf`,
/// `Exception::assign_buf` or `Exception::append_buf`. Those calls take the
/// accumulated text and leave the buffer empty and ready for reuse.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MessageBuf {
    text: String,
}

impl MessageBuf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Return the accumulated text, leaving the buffer empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }
}

impl fmt::Write for MessageBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.text.push_str(s);
        Ok(())
    }
}

impl fmt::Display for MessageBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for MessageBuf {
    fn from(s: &str) -> Self {
        Self { text: s.to_owned() }
    }
}

impl From<String> for MessageBuf {
    fn from(text: String) -> Self {
        Self { text }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt::Write;

    #[test]
    fn take_empties_and_buffer_is_reusable() {
        let mut buf = MessageBuf::new();
        write!(buf, "channel {} missing", "R").unwrap();
        assert_eq!(buf.take(), "channel R missing");
        assert!(buf.is_empty());

        write!(buf, "second").unwrap();
        assert_eq!(buf.as_str(), "second");
        assert_eq!(buf.len(), 6);
    }
}
