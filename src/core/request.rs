//! Slice request model.
//!
//! A `SliceRequest` describes the byte window `[start, start + size)` of a
//! file that should be extracted. It is built once from validated input and
//! handed to the range reader by reference.

use crate::error::{Result, ValidationError};
use std::path::{Path, PathBuf};

/// A validated request for a byte range of a file.
///
/// # Examples
///
/// ```
/// use slice_rs::core::SliceRequest;
///
/// let request = SliceRequest::new(7, 7, "notes.txt").unwrap();
/// assert_eq!(request.start(), 7);
/// assert_eq!(request.clamped_len(10), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceRequest {
    start: u64,
    size: u64,
    file: PathBuf,
    full_lines_only: bool,
}

impl SliceRequest {
    /// Creates a request for `size` bytes starting at `start`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `size` is zero or `start + size`
    /// overflows a 64-bit offset.
    pub fn new<P: Into<PathBuf>>(start: u64, size: u64, file: P) -> Result<Self> {
        if size == 0 {
            return Err(ValidationError::InvalidArgument {
                name: "--size".to_string(),
                reason: "must be > 0".to_string(),
            }
            .into());
        }

        if start.checked_add(size).is_none() {
            return Err(ValidationError::RangeOverflow { start, size }.into());
        }

        Ok(Self {
            start,
            size,
            file: file.into(),
            full_lines_only: false,
        })
    }

    /// Enables or disables trimming of truncated boundary lines.
    #[must_use]
    pub fn with_full_lines_only(mut self, full_lines_only: bool) -> Self {
        self.full_lines_only = full_lines_only;
        self
    }

    /// Byte offset where the slice starts.
    #[must_use]
    pub const fn start(&self) -> u64 {
        self.start
    }

    /// Maximum number of bytes to read.
    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Path of the source file.
    #[must_use]
    pub fn file(&self) -> &Path {
        &self.file
    }

    /// Whether truncated boundary lines should be dropped.
    #[must_use]
    pub const fn full_lines_only(&self) -> bool {
        self.full_lines_only
    }

    /// Number of bytes a read will yield against a file of `file_len` bytes.
    #[must_use]
    pub const fn clamped_len(&self, file_len: u64) -> u64 {
        let available = file_len.saturating_sub(self.start);
        if available < self.size {
            available
        } else {
            self.size
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_request_new() {
        let request = SliceRequest::new(7, 7, "test.txt").unwrap();
        assert_eq!(request.start(), 7);
        assert_eq!(request.size(), 7);
        assert_eq!(request.file(), Path::new("test.txt"));
        assert!(!request.full_lines_only());
    }

    #[test]
    fn test_request_zero_size_rejected() {
        let result = SliceRequest::new(0, 0, "test.txt");
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::InvalidArgument { .. }))
        ));
    }

    #[test]
    fn test_request_overflow_rejected() {
        let result = SliceRequest::new(u64::MAX, 1, "test.txt");
        assert!(matches!(
            result,
            Err(Error::Validation(ValidationError::RangeOverflow { .. }))
        ));

        // Exactly at the limit is fine
        assert!(SliceRequest::new(u64::MAX - 1, 1, "test.txt").is_ok());
    }

    #[test]
    fn test_request_full_lines_only() {
        let request = SliceRequest::new(0, 5, "test.txt")
            .unwrap()
            .with_full_lines_only(true);
        assert!(request.full_lines_only());
    }

    #[test]
    fn test_clamped_len() {
        let request = SliceRequest::new(8, 4, "test.txt").unwrap();
        assert_eq!(request.clamped_len(10), 2);
        assert_eq!(request.clamped_len(100), 4);
        assert_eq!(request.clamped_len(8), 0);
        assert_eq!(request.clamped_len(0), 0);

        let request = SliceRequest::new(0, 100, "test.txt").unwrap();
        assert_eq!(request.clamped_len(10), 10);
    }
}
