//! Binary entry point for slice.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use clap::{CommandFactory, Parser};
use slice_rs::cli::{Cli, execute};
use std::io;
use std::process::ExitCode;
use tracing::Level;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Nothing more to report if stderr itself is gone
            let _ = e.print();
            // --help and --version are not failures
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    init_logging(cli.debug);

    let mut stdout = io::stdout().lock();
    match execute(&cli, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            if e.is_validation() {
                eprintln!("{}", Cli::command().render_usage());
            }
            ExitCode::FAILURE
        }
    }
}

/// Sends diagnostics to stderr; `--debug` lowers the level to DEBUG.
fn init_logging(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .init();
}
