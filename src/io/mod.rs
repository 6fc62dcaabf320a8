//! I/O for slice.
//!
//! Provides bounded range reads from a file, read buffer sizing, and the
//! output sink for the extracted bytes.

pub mod options;
pub mod reader;
pub mod sink;

pub use options::{CHUNK_SIZE_ENV, ReadOptions, calculate_chunk_size};
pub use reader::{MAX_READ_SIZE, RangeReader, read_slice};
pub use sink::write_output;
