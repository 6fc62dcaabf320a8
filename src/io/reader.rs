//! Bounded reading of a byte range from a file.
//!
//! The reader opens the file, seeks to the start of the requested window,
//! and reads at most `size` bytes. Running into end-of-file early is not an
//! error: the returned buffer is simply shorter.

use crate::core::SliceRequest;
use crate::error::{IoError, Result};
use crate::io::options::ReadOptions;
use std::fs::File;
use std::io::{ErrorKind, Read, Seek, SeekFrom};
use std::path::Path;

/// Maximum number of bytes read into memory for one slice (1 GiB).
pub const MAX_READ_SIZE: u64 = 1024 * 1024 * 1024;

/// Reader for a byte range of a single file.
///
/// The file handle is owned by the reader and closed when it is dropped,
/// on success and error paths alike.
///
/// # Examples
///
/// ```no_run
/// use slice_rs::io::RangeReader;
///
/// let mut reader = RangeReader::open("input.txt").unwrap();
/// let bytes = reader.read_range(2048, 1024).unwrap();
/// assert!(bytes.len() <= 1024);
/// ```
#[derive(Debug)]
pub struct RangeReader {
    /// File handle.
    file: File,
    /// File size in bytes at open time.
    len: u64,
    /// File path for error messages.
    path: String,
    /// Read options.
    options: ReadOptions,
}

impl RangeReader {
    /// Opens a file for range reads with default options.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or its metadata
    /// cannot be read.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let path_str = path_ref.to_string_lossy().to_string();

        let file = File::open(path_ref).map_err(|e| IoError::OpenFailed {
            path: path_str.clone(),
            reason: e.to_string(),
        })?;

        let metadata = file.metadata().map_err(|e| IoError::OpenFailed {
            path: path_str.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            file,
            len: metadata.len(),
            path: path_str,
            options: ReadOptions::default(),
        })
    }

    /// Replaces the read options.
    #[must_use]
    pub fn with_options(mut self, options: ReadOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the file size in bytes.
    #[must_use]
    pub const fn len(&self) -> u64 {
        self.len
    }

    /// Returns true if the file was empty when opened.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Reads up to `size` bytes starting at `start`.
    ///
    /// Returns fewer than `size` bytes when the file ends first, and an
    /// empty buffer when `start` is at or past the end of the file.
    ///
    /// # Errors
    ///
    /// Returns an error if seeking fails, if the read fails for any reason
    /// other than end-of-file, or if more than [`MAX_READ_SIZE`] bytes would
    /// be read.
    #[allow(clippy::cast_possible_truncation)]
    pub fn read_range(&mut self, start: u64, size: u64) -> Result<Vec<u8>> {
        let expected = size.min(self.len.saturating_sub(start));
        if expected > MAX_READ_SIZE {
            return Err(IoError::ReadTooLarge {
                size: expected,
                max: MAX_READ_SIZE,
            }
            .into());
        }

        if start >= self.len {
            tracing::debug!("start position {start} is beyond file size {}", self.len);
        }

        self.file
            .seek(SeekFrom::Start(start))
            .map_err(|e| IoError::SeekFailed {
                path: self.path.clone(),
                offset: start,
                reason: e.to_string(),
            })?;

        let buffer = read_bounded(
            &mut self.file,
            size,
            self.options.chunk_size(),
            expected as usize,
        )
        .map_err(|e| IoError::ReadFailed {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;

        tracing::debug!("read {} of {size} requested bytes at offset {start}", buffer.len());
        Ok(buffer)
    }
}

/// Reads at most `size` bytes from `reader` in steps of `chunk_size`.
///
/// Stops early at end-of-file. `Interrupted` reads are retried.
#[allow(clippy::cast_possible_truncation)]
fn read_bounded<R: Read>(
    reader: &mut R,
    size: u64,
    chunk_size: usize,
    capacity: usize,
) -> std::io::Result<Vec<u8>> {
    let mut buffer = Vec::with_capacity(capacity);
    let chunk_size = chunk_size as u64;
    loop {
        let filled = buffer.len();
        let remaining = size - filled as u64;
        if remaining == 0 {
            break;
        }

        let step = remaining.min(chunk_size) as usize;
        buffer.resize(filled + step, 0);
        match reader.read(&mut buffer[filled..]) {
            Ok(0) => {
                buffer.truncate(filled);
                break;
            }
            Ok(n) => buffer.truncate(filled + n),
            Err(e) if e.kind() == ErrorKind::Interrupted => buffer.truncate(filled),
            Err(e) => return Err(e),
        }
    }
    Ok(buffer)
}

/// Reads the byte range described by `request`.
///
/// The read buffer is sized from the file length unless `chunk_override`
/// (the raw `SLICE_CHUNK_SIZE` value) holds a valid size. The file is
/// opened, read, and closed before returning.
///
/// # Errors
///
/// Returns an error if the file cannot be opened, seeked, or read.
pub fn read_slice(request: &SliceRequest, chunk_override: Option<&str>) -> Result<Vec<u8>> {
    let reader = RangeReader::open(request.file())?;
    tracing::debug!(
        "file size: {} bytes, bytes to read: {}",
        reader.len(),
        request.clamped_len(reader.len())
    );

    let options = ReadOptions::for_file(reader.len(), request.full_lines_only(), chunk_override);
    reader
        .with_options(options)
        .read_range(request.start(), request.size())
}
