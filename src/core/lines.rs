//! Line sets split from a byte buffer.

use std::io::{self, BufRead};

/// Line terminator byte.
pub const LINE_TERMINATOR: u8 = b'\n';

/// Ordered lines of a byte buffer, without their terminators.
///
/// A trailing terminator does not produce an extra empty line, so
/// `b"a\nb\n"` and `b"a\nb"` both split into `["a", "b"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineSet {
    lines: Vec<Vec<u8>>,
}

impl LineSet {
    /// Splits everything readable from `reader` on [`LINE_TERMINATOR`].
    ///
    /// # Errors
    ///
    /// Returns the first error reported by the reader.
    pub fn scan<R: BufRead>(reader: R) -> io::Result<Self> {
        let lines = reader
            .split(LINE_TERMINATOR)
            .collect::<io::Result<Vec<_>>>()?;
        Ok(Self { lines })
    }

    /// Number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if there are no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Removes the first line, if any.
    pub fn drop_first(&mut self) {
        if !self.lines.is_empty() {
            self.lines.remove(0);
        }
    }

    /// Removes the last line, if any.
    pub fn drop_last(&mut self) {
        self.lines.pop();
    }

    /// Joins the lines with a single terminator between each pair.
    ///
    /// No terminator is appended after the last line.
    #[must_use]
    pub fn join(&self) -> Vec<u8> {
        self.lines.join(&LINE_TERMINATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_scan_basic() {
        let lines = LineSet::scan(Cursor::new(b"a\nbc\n")).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines.join(), b"a\nbc");
    }

    #[test]
    fn test_scan_without_trailing_terminator() {
        let lines = LineSet::scan(Cursor::new(b"a\nbc")).unwrap();
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_scan_empty() {
        let lines = LineSet::scan(Cursor::new(b"")).unwrap();
        assert!(lines.is_empty());
        assert!(lines.join().is_empty());
    }

    #[test]
    fn test_scan_blank_lines() {
        let lines = LineSet::scan(Cursor::new(b"\n\nx\n")).unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines.join(), b"\n\nx");
    }

    #[test]
    fn test_carriage_return_is_content() {
        let lines = LineSet::scan(Cursor::new(b"a\r\nb\r\n")).unwrap();
        assert_eq!(lines.join(), b"a\r\nb\r");
    }

    #[test]
    fn test_drop_first_and_last() {
        let mut lines = LineSet::scan(Cursor::new(b"one\ntwo\nthree")).unwrap();
        lines.drop_first();
        assert_eq!(lines.join(), b"two\nthree");
        lines.drop_last();
        assert_eq!(lines.join(), b"two");
        lines.drop_last();
        assert!(lines.is_empty());

        // Dropping from an empty set is a no-op
        lines.drop_first();
        lines.drop_last();
        assert!(lines.is_empty());
    }
}
