//! CLI layer for slice.
//!
//! Provides the command-line interface using clap and the command that
//! ties argument validation, range reading, trimming, and output together.

pub mod commands;
pub mod parser;

pub use commands::{build_request, execute};
pub use parser::Cli;
