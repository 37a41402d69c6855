//! Error types for poetry_publish operations.
//!
//! Gate decisions (dirty tree, diverged remote, existing tag, declined prompt)
//! are not errors; they are reported through [`crate::release::ReleaseOutcome`].
//! Everything in here is a failure of the machinery itself.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for poetry_publish operations
pub type Result<T> = std::result::Result<T, ReleaseError>;

/// Main error type for all poetry_publish operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    /// External command errors
    #[error("Command error: {0}")]
    Command(#[from] CommandError),

    /// Settings and package metadata errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while running an external program
#[derive(Error, Debug)]
pub enum CommandError {
    /// No program was given
    #[error("Empty command line")]
    EmptyCommand,

    /// Program is not on the search path
    #[error("Executable \"{program}\" not found in PATH!")]
    ExecutableNotFound {
        /// Program name as requested
        program: String,
    },

    /// Program was found but could not be started
    #[error("Failed to start \"{program}\": {source}")]
    Spawn {
        /// Program name as requested
        program: String,
        /// Underlying OS error
        #[source]
        source: std::io::Error,
    },

    /// Program ran and exited unsuccessfully
    #[error("{label} exited with {}", exit_status_text(.code))]
    Failed {
        /// Invocation label, e.g. `Call: 'poetry build'`
        label: String,
        /// Exit code, `None` if terminated by a signal
        code: Option<i32>,
        /// Combined stdout/stderr, empty if the streams were inherited
        output: String,
    },
}

fn exit_status_text(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

/// Settings and package metadata errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// pyproject.toml exists but could not be read
    #[error("Failed to read {path}: {source}")]
    Read {
        /// File path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// pyproject.toml is not valid TOML or has unexpected types
    #[error("Failed to parse {path}: {source}")]
    Parse {
        /// File path
        path: PathBuf,
        /// TOML error
        #[source]
        source: toml::de::Error,
    },

    /// No version given and none found in pyproject.toml
    #[error("No version given and none found in {path}")]
    MissingVersion {
        /// File that was searched
        path: PathBuf,
    },

    /// Version token is unusable
    #[error("Invalid version '{version}': {reason}")]
    InvalidVersion {
        /// Version string
        version: String,
        /// Reason for the error
        reason: String,
    },
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}

impl ReleaseError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            ReleaseError::Command(CommandError::ExecutableNotFound { program }) => vec![
                format!("Install '{}' or add it to PATH", program),
                "Run from an environment where poetry and git are available".to_string(),
            ],
            ReleaseError::Command(CommandError::Failed { label, .. }) => vec![
                format!("Re-run the failed command by hand: {}", label),
                "Check the build log file for the full output".to_string(),
            ],
            ReleaseError::Config(ConfigError::MissingVersion { .. }) => vec![
                "Pass the version explicitly: --release-version <VERSION>".to_string(),
                "Set [tool.poetry] version in pyproject.toml".to_string(),
            ],
            ReleaseError::Config(ConfigError::Parse { path, .. }) => vec![format!(
                "Fix the TOML syntax in {} ([tool.poetry-publish] table)",
                path.display()
            )],
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}
