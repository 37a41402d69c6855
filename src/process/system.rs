//! PATH-resolving runner backed by `std::process`.

use super::{CommandResult, CommandRunner, invocation_label};
use crate::cli::OutputManager;
use crate::error::{CommandError, Result};
use std::io::{Read, Write};
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

/// Runs commands for real, from a fixed working directory
#[derive(Debug, Clone)]
pub struct SystemRunner {
    working_dir: PathBuf,
    output: OutputManager,
}

impl SystemRunner {
    /// Create a runner executing every command inside `working_dir`
    pub fn new(working_dir: impl Into<PathBuf>, output: OutputManager) -> Self {
        Self {
            working_dir: working_dir.into(),
            output,
        }
    }

    /// Resolve `program` to an absolute path using `PATH`.
    ///
    /// Never falls back to a shell lookup.
    pub fn resolve(&self, program: &str) -> Result<PathBuf> {
        let resolved = which::which_in(program, std::env::var_os("PATH"), &self.working_dir)
            .map_err(|e| {
                log::debug!("Lookup of '{}' failed: {}", program, e);
                CommandError::ExecutableNotFound {
                    program: program.to_string(),
                }
            })?;
        log::debug!("Resolved '{}' to {}", program, resolved.display());
        Ok(resolved)
    }

    fn command(&self, args: &[&str]) -> Result<Command> {
        let (program, rest) = args.split_first().ok_or(CommandError::EmptyCommand)?;
        let path = self.resolve(program)?;
        let mut cmd = Command::new(path);
        cmd.args(rest).current_dir(&self.working_dir);
        Ok(cmd)
    }
}

fn spawn_error(args: &[&str], source: std::io::Error) -> CommandError {
    CommandError::Spawn {
        program: args.first().copied().unwrap_or_default().to_string(),
        source,
    }
}

fn failure(label: String, status: ExitStatus, output: String) -> CommandError {
    CommandError::Failed {
        label,
        code: status.code(),
        output,
    }
}

impl CommandRunner for SystemRunner {
    fn run_capturing(&self, args: &[&str], log: Option<&mut dyn Write>) -> Result<CommandResult> {
        let label = invocation_label(args);
        let mut cmd = self.command(args)?;
        log::debug!("{} (captured)", label);

        // One pipe for both streams keeps stdout/stderr interleaving intact.
        let (mut reader, writer) = std::io::pipe()?;
        cmd.stdout(writer.try_clone()?).stderr(writer);
        let mut child = cmd.spawn().map_err(|e| spawn_error(args, e))?;
        // The Command still owns the write ends; EOF only arrives once they are gone.
        drop(cmd);

        let mut raw = Vec::new();
        reader.read_to_end(&mut raw)?;
        let status = child.wait()?;
        let combined_output = String::from_utf8_lossy(&raw).into_owned();

        if !status.success() {
            self.output.error(&format!("{} failed:", label));
            self.output.raw(&combined_output);
            if let Some(log) = log {
                log.write_all(combined_output.as_bytes())?;
            }
            return Err(failure(label, status, combined_output).into());
        }

        Ok(CommandResult {
            invocation_label: label,
            combined_output,
        })
    }

    fn run_for_effect(&self, args: &[&str]) -> Result<()> {
        let label = invocation_label(args);
        let mut cmd = self.command(args)?;
        self.output.indent(&label);
        log::debug!("{} (inherited stdio)", label);

        let status = cmd.status().map_err(|e| spawn_error(args, e))?;
        if !status.success() {
            return Err(failure(label, status, String::new()).into());
        }
        Ok(())
    }
}
