//! External command execution.
//!
//! The sequencer talks to git, poetry and twine exclusively through the
//! [`CommandRunner`] trait. [`SystemRunner`] is the real implementation;
//! tests substitute a scripted runner.

mod system;

pub use system::SystemRunner;

use crate::error::Result;
use std::io::Write;

/// Output of a successful captured invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Human-readable label, `Call: '<args>'`
    pub invocation_label: String,
    /// Stdout and stderr merged in arrival order
    pub combined_output: String,
}

/// Runs external programs on behalf of the release sequencer
///
/// `args[0]` is the program name; it is resolved against the search path
/// before anything runs. Neither operation retries.
pub trait CommandRunner {
    /// Run and capture merged stdout/stderr.
    ///
    /// On a non-zero exit the captured output is written to `log` (when given)
    /// before `CommandError::Failed` is returned.
    fn run_capturing(&self, args: &[&str], log: Option<&mut dyn Write>) -> Result<CommandResult>;

    /// Run with inherited stdio so the operator sees output live.
    fn run_for_effect(&self, args: &[&str]) -> Result<()>;
}

/// Build the invocation label shown to the operator and written to the log
pub fn invocation_label(args: &[&str]) -> String {
    format!("Call: '{}'", args.join(" "))
}
