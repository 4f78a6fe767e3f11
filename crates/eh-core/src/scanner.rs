//! Forward-only cursor over filter text
//!
//! Works on raw bytes. Every character the element hiding grammar cares
//! about is ASCII, so multi-byte sequences simply pass through as opaque
//! code units.

/// Single-pass scanner. Never backtracks and never allocates.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Create a scanner positioned at the start of `text`.
    #[inline]
    pub fn new(text: &'a str) -> Self {
        Self {
            bytes: text.as_bytes(),
            pos: 0,
        }
    }

    /// True once every code unit has been consumed.
    #[inline]
    pub fn done(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    /// Return the current code unit and advance past it.
    ///
    /// Returns `0` when the scanner is already done, so callers that did not
    /// check [`Scanner::done`] see a value no grammar rule accepts.
    #[inline]
    pub fn next(&mut self) -> u8 {
        let result = self.peek().unwrap_or(0);
        self.pos += 1;
        result
    }

    /// Current code unit without advancing.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    /// Offset of the next unread code unit.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Advance past exactly one `ch` if it is next.
    #[inline]
    pub fn skip_one(&mut self, ch: u8) -> bool {
        if self.peek() == Some(ch) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Advance past a run of `ch`. Returns true if at least one was skipped.
    #[inline]
    pub fn skip(&mut self, ch: u8) -> bool {
        let start = self.pos;
        while self.skip_one(ch) {}
        self.pos > start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_and_position() {
        let mut scanner = Scanner::new("ab");
        assert_eq!(scanner.position(), 0);
        assert_eq!(scanner.next(), b'a');
        assert_eq!(scanner.position(), 1);
        assert_eq!(scanner.next(), b'b');
        assert!(scanner.done());
    }

    #[test]
    fn test_next_past_end() {
        let mut scanner = Scanner::new("");
        assert!(scanner.done());
        assert_eq!(scanner.next(), 0);
        assert!(scanner.done());
    }

    #[test]
    fn test_skip_run() {
        let mut scanner = Scanner::new("   #x");
        assert!(scanner.skip(b' '));
        assert_eq!(scanner.position(), 3);
        assert!(!scanner.skip(b' '));
        assert_eq!(scanner.position(), 3);
    }

    #[test]
    fn test_skip_one() {
        let mut scanner = Scanner::new("@@");
        assert!(scanner.skip_one(b'@'));
        assert_eq!(scanner.position(), 1);
        assert!(!scanner.skip_one(b'#'));
        assert!(scanner.skip_one(b'@'));
        assert!(!scanner.skip_one(b'@'));
        assert!(scanner.done());
    }

    #[test]
    fn test_multibyte_passes_through() {
        let mut scanner = Scanner::new("é#");
        scanner.next();
        scanner.next();
        assert_eq!(scanner.next(), b'#');
        assert!(scanner.done());
    }
}
