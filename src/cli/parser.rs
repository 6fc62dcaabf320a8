//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use clap::Parser;
use std::path::PathBuf;

/// Extract a slice of bytes from a file.
///
/// Reads `--size` bytes starting at byte offset `--start` and writes them
/// to standard output unchanged. Reads past the end of the file are
/// clipped.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "slice")]
#[command(version, about, long_about = None)]
#[command(after_help = "Examples:\n  slice --start 2048 --size 1024 --file input.txt\n  \
                        slice --start 4096 --size 2048 --file input.txt --full-lines-only")]
pub struct Cli {
    /// Byte offset to start reading (0-based).
    #[arg(long, value_name = "OFFSET", allow_negative_numbers = true)]
    pub start: Option<u64>,

    /// Number of bytes to read.
    #[arg(long, value_name = "BYTES", allow_negative_numbers = true)]
    pub size: Option<u64>,

    /// File to read from.
    #[arg(long, value_name = "FILENAME")]
    pub file: Option<PathBuf>,

    /// Remove truncated lines at the start and end of the slice.
    #[arg(long)]
    pub full_lines_only: bool,

    /// Print internal debug info to stderr.
    #[arg(long)]
    pub debug: bool,

    /// Read chunk size in bytes (computed from the file size if unset).
    ///
    /// Invalid values are ignored.
    #[arg(long, value_name = "BYTES", env = "SLICE_CHUNK_SIZE")]
    pub chunk_size: Option<String>,
}
