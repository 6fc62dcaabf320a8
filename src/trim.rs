//! Removal of lines truncated by the slice boundaries.
//!
//! A slice that does not begin at offset zero almost always starts part
//! way through a line, and a slice that does not end on a terminator cuts
//! its final line short. [`trim_truncated_lines`] drops both so that only
//! complete lines remain.

use crate::core::{LINE_TERMINATOR, LineSet};
use std::io::{BufRead, Cursor};

/// Drops the partial first and last lines of `data`.
///
/// `start` is the file offset `data` was read from. The first line is
/// dropped only when `start > 0`; the last line is dropped only when
/// `data` does not end with a terminator. Remaining lines are joined with
/// a single terminator and no trailing one.
///
/// # Examples
///
/// ```
/// use slice_rs::trim::trim_truncated_lines;
///
/// assert_eq!(trim_truncated_lines(b"ne 1\nLine 2\nLi", 3), b"Line 2");
/// assert_eq!(trim_truncated_lines(b"Line 1\nLine 2\n", 0), b"Line 1\nLine 2");
/// ```
#[must_use]
pub fn trim_truncated_lines(data: &[u8], start: u64) -> Vec<u8> {
    trim_from_reader(Cursor::new(data), data, start)
}

/// Trims using `reader` as the line source for `data`.
///
/// If scanning fails the untrimmed `data` is returned.
fn trim_from_reader<R: BufRead>(reader: R, data: &[u8], start: u64) -> Vec<u8> {
    if data.is_empty() {
        return Vec::new();
    }

    let mut lines = match LineSet::scan(reader) {
        Ok(lines) => lines,
        Err(e) => {
            tracing::warn!("error scanning lines, emitting untrimmed slice: {e}");
            return data.to_vec();
        }
    };

    if start > 0 && !lines.is_empty() {
        lines.drop_first();
    }

    if data.last() != Some(&LINE_TERMINATOR) && !lines.is_empty() {
        lines.drop_last();
    }

    lines.join()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Read};
    use test_case::test_case;

    #[test_case(b"Line 1\nLine 2\nLine 3\n", 0, b"Line 1\nLine 2\nLine 3"; "start of file keeps first line")]
    #[test_case(b"ine 1\nLine 2\nLine 3\n", 1, b"Line 2\nLine 3"; "offset drops first line")]
    #[test_case(b"Line 1\nLine 2\nLi", 0, b"Line 1\nLine 2"; "missing terminator drops last line")]
    #[test_case(b"ne 1\nLine 2\nLi", 5, b"Line 2"; "both boundaries truncated")]
    #[test_case(b"Line 2\n", 7, b""; "single line after offset is dropped")]
    #[test_case(b"12345", 0, b""; "single unterminated line is dropped")]
    #[test_case(b"\n", 3, b""; "lone terminator")]
    #[test_case(b"a\n\nb\n", 0, b"a\n\nb"; "blank lines preserved")]
    fn test_trim(data: &[u8], start: u64, expected: &[u8]) {
        assert_eq!(trim_truncated_lines(data, start), expected);
    }

    #[test]
    fn test_empty_buffer() {
        assert!(trim_truncated_lines(b"", 0).is_empty());
        assert!(trim_truncated_lines(b"", 10).is_empty());
    }

    #[test]
    fn test_terminated_last_line_kept() {
        let out = trim_truncated_lines(b"xx\nkeep\n", 4);
        assert_eq!(out, b"keep");
    }

    #[test]
    fn test_input_not_modified() {
        let data = b"ab\ncd\nef".to_vec();
        let out = trim_truncated_lines(&data, 1);
        assert_eq!(out, b"cd");
        assert_eq!(data, b"ab\ncd\nef");
    }

    /// Reader that fails on every read.
    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("buffer fault"))
        }
    }

    #[test]
    fn test_scan_failure_returns_untrimmed() {
        let data = b"partial\nline\ntail";
        let reader = io::BufReader::new(FailingReader);
        let out = trim_from_reader(reader, data, 3);
        assert_eq!(out, data);
    }
}
