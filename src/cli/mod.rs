//! Command line interface for poetry_publish.
//!
//! Thin glue around the release sequencer: argument parsing, colored output
//! and translation of outcomes into exit codes.

mod args;
pub mod commands;
mod output;

pub use args::Args;
pub use commands::execute_command;
pub use output::OutputManager;

/// Main CLI entry point, returns the process exit code
pub fn run() -> i32 {
    let args = Args::parse_args();
    execute_command(args)
}
