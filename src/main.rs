//! poetry_publish - guarded release of a Poetry package.
//!
//! Runs the pre-checks, builds, validates, publishes, then tags and pushes.

use poetry_publish::cli;
use std::process;

fn main() {
    env_logger::init();
    process::exit(cli::run());
}
