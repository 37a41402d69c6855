//! Parsers for the text reports of git and twine.
//!
//! Everything here is pure: raw command output in, structured facts out.

mod ansi;
mod git;
mod twine;

pub use ansi::strip_ansi;
pub use git::{BranchState, is_clean, parse_branches, tag_exists};
pub use twine::{ArtifactCheck, ArtifactCheckReport, parse_artifact_checks};
