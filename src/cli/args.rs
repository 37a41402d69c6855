//! Command line argument parsing and validation.
//!
//! Point it at a Poetry project, it releases. Everything after `--` is handed
//! to `poetry publish` untouched.

use crate::error::CliError;
use clap::Parser;
use std::path::PathBuf;

/// Guarded release of a Poetry package
#[derive(Parser, Debug)]
#[command(
    name = "poetry_publish",
    version,
    about = "Build, check and publish a Poetry package, then tag and push",
    long_about = "Build and upload to PyPI with pre-checks, then git tag and push.

The release only proceeds if the version is final (or confirmed), the branch is
main/master (or confirmed), the working tree is clean, the remote is not ahead,
twine check passes (or is confirmed) and the tag does not exist yet.

Usage:
  poetry_publish
  poetry_publish --release-version 1.2.3
  poetry_publish -- --repository=testpypi"
)]
pub struct Args {
    /// Root of the Poetry project (directory containing pyproject.toml)
    #[arg(long, short = 'C', value_name = "DIR", default_value = ".")]
    pub package_root: PathBuf,

    /// Version to release; read from pyproject.toml when omitted
    #[arg(long, short = 'r', value_name = "VERSION")]
    pub release_version: Option<String>,

    /// Build log file, appended to on every run
    #[arg(
        long,
        value_name = "FILE",
        env = "POETRY_PUBLISH_LOG",
        default_value = "publish.log"
    )]
    pub log_file: PathBuf,

    /// Regenerate documentation before releasing
    #[arg(long)]
    pub regenerate_docs: bool,

    /// Only print prompts, errors and tool output
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Extra arguments forwarded to `poetry publish`
    #[arg(last = true, value_name = "PUBLISH_ARGS")]
    pub publish_args: Vec<String>,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), CliError> {
        if !self.package_root.is_dir() {
            return Err(CliError::InvalidArguments {
                reason: format!(
                    "Package root '{}' is not a directory",
                    self.package_root.display()
                ),
            });
        }
        if let Some(version) = &self.release_version
            && version.trim().is_empty()
        {
            return Err(CliError::InvalidArguments {
                reason: "--release-version must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
