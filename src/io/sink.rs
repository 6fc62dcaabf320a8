//! Output of the extracted bytes.

use crate::error::{IoError, Result};
use std::io::Write;

/// Writes `data` to `out` byte-for-byte and flushes it.
///
/// Nothing is added before or after the data. Failures are not retried.
///
/// # Errors
///
/// Returns [`IoError::WriteFailed`] if writing or flushing fails.
pub fn write_output<W: Write>(out: &mut W, data: &[u8]) -> Result<()> {
    out.write_all(data)
        .and_then(|()| out.flush())
        .map_err(|e| IoError::WriteFailed {
            reason: e.to_string(),
        })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_write_verbatim() {
        let mut out = Vec::new();
        write_output(&mut out, b"Line 2\n").unwrap();
        assert_eq!(out, b"Line 2\n");
    }

    #[test]
    fn test_write_empty() {
        let mut out = Vec::new();
        write_output(&mut out, b"").unwrap();
        assert!(out.is_empty());
    }

    /// Writer that behaves like a closed pipe.
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure() {
        let result = write_output(&mut ClosedPipe, b"data");
        assert!(matches!(
            result,
            Err(crate::error::Error::Io(IoError::WriteFailed { .. }))
        ));
    }
}
