//! # slice-rs
//!
//! Extract a byte range from a file.
//!
//! `slice` reads `size` bytes starting at byte offset `start` and writes them
//! to standard output unchanged. Ranges that run past the end of the file
//! are clipped rather than rejected. With `--full-lines-only`, lines cut by
//! either end of the range are dropped so only complete lines remain.
//!
//! ## Features
//!
//! - **Bounded reads**: never reads more than the requested window
//! - **Line trimming**: removes partial boundary lines
//! - **Raw bytes**: no encoding assumptions, binary input is fine

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]

pub mod cli;
pub mod core;
pub mod error;
pub mod io;
pub mod trim;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

pub use crate::core::{LineSet, SliceRequest};

pub use io::{RangeReader, ReadOptions, read_slice, write_output};

pub use trim::trim_truncated_lines;

pub use cli::{Cli, execute};
