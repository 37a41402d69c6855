//! How a release attempt ends.

use super::state::ReleaseStep;
use crate::error::ReleaseError;
use std::fmt;

/// Exit code for an operator-declined confirmation (255 at the OS level)
pub const DECLINED_EXIT_CODE: i32 = -1;

/// Why a gate stopped the release
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbortReason {
    /// No line of the branch listing was marked as current
    UnresolvedBranch,
    /// None of the accepted main-line branches exists locally
    NoMainBranch,
    /// `git status` reported changes
    DirtyWorkingTree,
    /// The remote main-line branch has commits HEAD lacks
    RemoteAhead,
    /// The release tag is already taken
    TagExists {
        /// Tag that collided
        tag: String,
    },
    /// The operator answered "no" to a prompt
    Declined {
        /// Prompt that was declined
        prompt: String,
    },
}

impl AbortReason {
    /// Process exit code for this abort
    pub fn exit_code(&self) -> i32 {
        match self {
            AbortReason::UnresolvedBranch | AbortReason::NoMainBranch => 4,
            AbortReason::DirtyWorkingTree => 1,
            AbortReason::RemoteAhead => 2,
            AbortReason::TagExists { .. } => 3,
            AbortReason::Declined { .. } => DECLINED_EXIT_CODE,
        }
    }
}

impl fmt::Display for AbortReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbortReason::UnresolvedBranch => write!(f, "could not determine the current git branch"),
            AbortReason::NoMainBranch => write!(f, "no main-line git branch found"),
            AbortReason::DirtyWorkingTree => write!(f, "git working tree is not clean"),
            AbortReason::RemoteAhead => write!(f, "git repository is not up-to-date with the remote"),
            AbortReason::TagExists { tag } => write!(f, "git tag '{}' already exists", tag),
            AbortReason::Declined { .. } => write!(f, "declined by operator"),
        }
    }
}

/// A gate decision to stop, with the tool output that triggered it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Abort {
    /// Step whose gate fired
    pub step: ReleaseStep,
    /// Why it fired
    pub reason: AbortReason,
    /// Raw tool output the decision was based on
    pub details: String,
}

impl Abort {
    /// Create an abort record
    pub fn new(step: ReleaseStep, reason: AbortReason, details: impl Into<String>) -> Self {
        Self {
            step,
            reason,
            details: details.into(),
        }
    }

    /// Process exit code for this abort
    pub fn exit_code(&self) -> i32 {
        self.reason.exit_code()
    }
}

impl fmt::Display for Abort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.step, self.reason)
    }
}

/// Which upload path published the artifacts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishRoute {
    /// `poetry publish`
    Primary,
    /// `twine upload` after `poetry publish` failed
    Fallback,
}

/// Summary of a completed release
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseReport {
    /// Released version
    pub version: String,
    /// Created and pushed tag
    pub tag: String,
    /// Branch pushed before building
    pub pushed_branch: String,
    /// Upload path that succeeded
    pub publish_route: PublishRoute,
}

/// Terminal state of one release attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// All steps ran
    Completed(ReleaseReport),
    /// A gate stopped the sequence
    Aborted(Abort),
}

impl ReleaseOutcome {
    /// Process exit code: 0 on completion, the gate's code on abort
    pub fn exit_code(&self) -> i32 {
        match self {
            ReleaseOutcome::Completed(_) => 0,
            ReleaseOutcome::Aborted(abort) => abort.exit_code(),
        }
    }
}

/// Early exit from a step: a gate decision or a machinery failure
#[derive(Debug)]
pub(crate) enum Halt {
    Abort(Abort),
    Error(ReleaseError),
}

impl From<ReleaseError> for Halt {
    fn from(error: ReleaseError) -> Self {
        Halt::Error(error)
    }
}

impl From<std::io::Error> for Halt {
    fn from(error: std::io::Error) -> Self {
        Halt::Error(ReleaseError::Io(error))
    }
}

pub(crate) type StepResult<T> = std::result::Result<T, Halt>;
