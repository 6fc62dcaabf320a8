//! CLI command implementation.
//!
//! Validates the parsed arguments and runs the extraction pipeline:
//! read the range, optionally trim truncated lines, write the result.

use crate::cli::parser::Cli;
use crate::core::SliceRequest;
use crate::error::{Result, ValidationError};
use crate::io::{read_slice, write_output};
use crate::trim::trim_truncated_lines;
use std::io::{ErrorKind, Write};
use std::path::Path;

/// Executes the slice command, writing the extracted bytes to `out`.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
/// * `out` - Destination for the extracted bytes.
///
/// # Errors
///
/// Returns a validation error for missing or invalid arguments, or an I/O
/// error if reading the file or writing the output fails.
pub fn execute<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let request = build_request(cli)?;
    tracing::debug!(
        "requested start: {}, size: {}, file: {}",
        request.start(),
        request.size(),
        request.file().display()
    );

    let data = read_slice(&request, cli.chunk_size.as_deref())?;

    let data = if request.full_lines_only() {
        let read = data.len();
        let trimmed = trim_truncated_lines(&data, request.start());
        tracing::debug!("after trimming: output length = {}", trimmed.len());
        if trimmed.is_empty() && read > 0 {
            tracing::debug!("all content was trimmed due to --full-lines-only");
        }
        trimmed
    } else {
        data
    };

    write_output(out, &data)
}

/// Builds a validated request from the parsed arguments.
///
/// # Errors
///
/// Returns a validation error if `--start`, `--size` or `--file` is
/// missing, `--size` is zero, the range overflows, or the file is absent
/// or not a regular file.
pub fn build_request(cli: &Cli) -> Result<SliceRequest> {
    let start = cli
        .start
        .ok_or_else(|| ValidationError::MissingArgument("--start".to_string()))?;
    let size = cli
        .size
        .ok_or_else(|| ValidationError::MissingArgument("--size".to_string()))?;
    let file = cli
        .file
        .as_deref()
        .ok_or_else(|| ValidationError::MissingArgument("--file".to_string()))?;

    let request = SliceRequest::new(start, size, file)?.with_full_lines_only(cli.full_lines_only);
    check_file(request.file())?;
    Ok(request)
}

/// Ensures `path` names an existing regular file.
///
/// Metadata errors other than not-found are left for the open to report.
fn check_file(path: &Path) -> Result<()> {
    match std::fs::metadata(path) {
        Ok(metadata) if !metadata.is_file() => Err(ValidationError::NotRegularFile {
            path: path.to_string_lossy().to_string(),
        }
        .into()),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(ValidationError::FileNotFound {
            path: path.to_string_lossy().to_string(),
        }
        .into()),
        _ => Ok(()),
    }
}
