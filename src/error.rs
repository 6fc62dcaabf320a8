//! Error types for slice operations.
//!
//! This module provides the error hierarchy using `thiserror` for argument
//! validation, range reading, and output writing.

use thiserror::Error;

/// Result type alias for slice operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Bad or missing arguments, or an unusable input file.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// I/O failures while extracting or emitting the slice.
    #[error("{0}")]
    Io(#[from] IoError),

    /// Configuration errors.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },
}

impl Error {
    /// Returns true if the error stems from user input, in which case
    /// the caller should show usage alongside the diagnostic.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Argument validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Required argument was not supplied.
    #[error("missing required argument: {0}")]
    MissingArgument(String),

    /// Argument value is out of range or malformed.
    #[error("invalid value for {name}: {reason}")]
    InvalidArgument {
        /// Argument name, e.g. `--size`.
        name: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// Input file does not exist.
    #[error("file does not exist: {path}")]
    FileNotFound {
        /// Path that was checked.
        path: String,
    },

    /// Input path exists but is not a regular file.
    #[error("not a regular file: {path}")]
    NotRegularFile {
        /// Path that was checked.
        path: String,
    },

    /// `start + size` does not fit in a 64-bit offset.
    #[error("start + size causes overflow ({start} + {size})")]
    RangeOverflow {
        /// Requested start offset.
        start: u64,
        /// Requested size.
        size: u64,
    },
}

/// I/O errors raised during extraction and output.
#[derive(Error, Debug)]
pub enum IoError {
    /// File could not be opened.
    #[error("cannot open file '{path}': {reason}")]
    OpenFailed {
        /// Path to the file.
        path: String,
        /// Underlying I/O message.
        reason: String,
    },

    /// Seeking to the start offset failed.
    #[error("cannot seek to offset {offset} in '{path}': {reason}")]
    SeekFailed {
        /// Path to the file.
        path: String,
        /// Offset that was requested.
        offset: u64,
        /// Underlying I/O message.
        reason: String,
    },

    /// Reading the range failed for a reason other than end-of-file.
    #[error("error reading file '{path}': {reason}")]
    ReadFailed {
        /// Path to the file.
        path: String,
        /// Underlying I/O message.
        reason: String,
    },

    /// The clamped range exceeds the read limit.
    #[error("requested read size ({size} bytes) exceeds limit ({max} bytes)")]
    ReadTooLarge {
        /// Bytes that would be read.
        size: u64,
        /// Maximum allowed.
        max: u64,
    },

    /// Writing the output failed.
    #[error("error writing output: {reason}")]
    WriteFailed {
        /// Underlying I/O message.
        reason: String,
    },
}
