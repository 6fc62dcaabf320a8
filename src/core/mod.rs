//! Core domain models for slice.
//!
//! This module contains the request describing which byte window to
//! extract and the line set used while trimming. These are pure domain
//! models with no file system dependencies.

pub mod lines;
pub mod request;

pub use lines::{LINE_TERMINATOR, LineSet};
pub use request::SliceRequest;
