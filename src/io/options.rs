//! Read buffer sizing.
//!
//! The range reader reads in steps whose size grows with the size of the
//! source file. The size can be pinned with the
//! `SLICE_CHUNK_SIZE` environment variable.

use crate::error::{Error, Result};

/// Environment variable that overrides the computed chunk size.
pub const CHUNK_SIZE_ENV: &str = "SLICE_CHUNK_SIZE";

/// Starting chunk size (8 KiB).
pub const BASE_CHUNK_SIZE: usize = 8 * 1024;

/// Largest chunk size accepted or computed (100 MiB).
pub const MAX_CHUNK_SIZE: usize = 100 * 1024 * 1024;

/// File size at which the chunk size first doubles (100 KiB).
const GROWTH_THRESHOLD: u64 = 100 * 1024;

/// Options for reading a byte range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOptions {
    chunk_size: usize,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            chunk_size: BASE_CHUNK_SIZE,
        }
    }
}

impl ReadOptions {
    /// Creates options with an explicit chunk size.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `chunk_size` is zero or larger
    /// than [`MAX_CHUNK_SIZE`].
    pub fn new(chunk_size: usize) -> Result<Self> {
        if chunk_size == 0 || chunk_size > MAX_CHUNK_SIZE {
            return Err(Error::Config {
                message: format!(
                    "chunk size must be between 1 and {MAX_CHUNK_SIZE} bytes, got {chunk_size}"
                ),
            });
        }
        Ok(Self { chunk_size })
    }

    /// Picks a chunk size for a file of `file_size` bytes.
    ///
    /// A valid `override_value` (the raw `SLICE_CHUNK_SIZE` value) wins;
    /// an invalid one is logged and ignored.
    #[must_use]
    pub fn for_file(file_size: u64, full_lines_only: bool, override_value: Option<&str>) -> Self {
        if let Some(raw) = override_value {
            match raw.trim().parse::<usize>() {
                Ok(size) => match Self::new(size) {
                    Ok(options) => {
                        tracing::debug!("using {CHUNK_SIZE_ENV}: {size} bytes");
                        return options;
                    }
                    Err(e) => tracing::debug!("ignoring {CHUNK_SIZE_ENV}={raw}: {e}"),
                },
                Err(e) => tracing::debug!("ignoring {CHUNK_SIZE_ENV}={raw}: {e}"),
            }
        }

        let chunk_size = calculate_chunk_size(file_size, full_lines_only);
        tracing::debug!("calculated chunk size: {chunk_size} bytes");
        Self { chunk_size }
    }

    /// Largest number of bytes requested per read call.
    #[must_use]
    pub const fn chunk_size(&self) -> usize {
        self.chunk_size
    }
}

/// Computes the chunk size for a file of `file_size` bytes.
///
/// Starts at [`BASE_CHUNK_SIZE`] and doubles for every power of ten the
/// file size exceeds past 100 KiB. Line trimming doubles it once more.
/// The result never exceeds [`MAX_CHUNK_SIZE`].
#[must_use]
pub fn calculate_chunk_size(file_size: u64, full_lines_only: bool) -> usize {
    let mut chunk_size = BASE_CHUNK_SIZE;
    let mut threshold = GROWTH_THRESHOLD;

    while threshold < file_size && chunk_size < MAX_CHUNK_SIZE {
        chunk_size *= 2;
        threshold = threshold.saturating_mul(10);
    }

    if full_lines_only {
        chunk_size *= 2;
    }

    chunk_size.min(MAX_CHUNK_SIZE)
}
