//! # poetry_publish
//!
//! Guarded release workflow for Poetry packages.
//!
//! A release is a fixed, linear sequence: check the version, check the git
//! branch, set the version, require a clean tree, run `poetry check`, make
//! sure the remote is not ahead and push, build, `twine check`, make sure the
//! tag is free, publish (falling back to `twine upload` once), then tag and
//! push the tag.
//!
//! ## Usage
//!
//! ```bash
//! poetry_publish                              # version from pyproject.toml
//! poetry_publish --release-version 1.2.3
//! poetry_publish -- --repository=testpypi     # extra `poetry publish` args
//! ```
//!
//! Exit codes: `0` released, `1` dirty tree or error, `2` remote ahead,
//! `3` tag exists, `4` branch undeterminable, `255` declined prompt.

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod cli;
pub mod config;
pub mod error;
pub mod metadata;
pub mod parse;
pub mod process;
pub mod release;

pub use config::PublishSettings;
pub use error::{CliError, CommandError, ConfigError, ReleaseError, Result};
pub use process::{CommandResult, CommandRunner, SystemRunner};
pub use release::{
    Abort, AbortReason, Confirm, PublishRoute, ReleaseOutcome, ReleaseReport, ReleaseRequest,
    ReleaseStep, Sequencer,
};
