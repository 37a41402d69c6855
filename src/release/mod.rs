//! Release sequencer.
//!
//! A release is one linear pass over [`ReleaseStep`]s. Gates inspect tool
//! output and either proceed, ask the operator, or abort; actions perform the
//! side effects (version bump, build, publish, tag). Nothing is retried except
//! the single publish fallback.
//!
//! The sequencer never terminates the process. Gate decisions come back as
//! [`ReleaseOutcome::Aborted`] and the caller maps them to exit codes.

mod actions;
mod confirm;
mod gates;
mod outcome;
mod request;
mod state;

pub use confirm::{Confirm, StdinConfirm, is_affirmative};
pub use outcome::{
    Abort, AbortReason, DECLINED_EXIT_CODE, PublishRoute, ReleaseOutcome, ReleaseReport,
};
pub use request::ReleaseRequest;
pub use state::{ReleaseStep, SequencerState};

use crate::cli::OutputManager;
use crate::config::PublishSettings;
use crate::error::Result;
use crate::process::{CommandResult, CommandRunner, invocation_label};
use outcome::{Halt, StepResult};

/// Drives one release attempt through its collaborators
pub struct Sequencer<'a, R, C> {
    runner: &'a R,
    confirm: &'a C,
    settings: &'a PublishSettings,
    output: &'a OutputManager,
}

impl<'a, R: CommandRunner, C: Confirm> Sequencer<'a, R, C> {
    /// Create a sequencer
    pub fn new(
        runner: &'a R,
        confirm: &'a C,
        settings: &'a PublishSettings,
        output: &'a OutputManager,
    ) -> Self {
        Self {
            runner,
            confirm,
            settings,
            output,
        }
    }

    /// Run every step for `request`.
    ///
    /// `Ok` covers both completion and gate aborts; `Err` means a command or
    /// file operation failed outright.
    pub fn run(&self, request: &ReleaseRequest) -> Result<ReleaseOutcome> {
        match self.execute(request) {
            Ok(report) => Ok(ReleaseOutcome::Completed(report)),
            Err(Halt::Abort(abort)) => {
                log::info!("Release of {} aborted: {}", request.version(), abort);
                Ok(ReleaseOutcome::Aborted(abort))
            }
            Err(Halt::Error(error)) => Err(error),
        }
    }

    fn execute(&self, request: &ReleaseRequest) -> StepResult<ReleaseReport> {
        self.check_version(request)?;
        if request.regenerate_docs() {
            self.regenerate_docs()?;
        }

        let state = self.check_branch(SequencerState::default())?;
        self.bump_version(request)?;
        let state = self.check_clean(state)?;
        self.check_package()?;
        let state = self.sync_remote(state)?;

        self.clean_build_artifacts(request)?;
        self.build(request)?;
        self.validate_artifacts()?;

        let state = self.check_tag(request, state)?;
        let publish_route = self.publish(request)?;
        let (tag, pushed_branch) = self.tag_and_push(request, state)?;

        self.output.success(&format!("Released {} as {}", request.version(), tag));
        Ok(ReleaseReport {
            version: request.version().to_string(),
            tag,
            pushed_branch,
            publish_route,
        })
    }

    fn enter(&self, step: ReleaseStep) {
        log::info!("Step: {}", step);
        self.output.section(step.title());
    }

    /// Captured run, the invocation label echoed before it starts.
    fn capture(&self, args: &[&str]) -> Result<CommandResult> {
        self.output.indent(&invocation_label(args));
        self.runner.run_capturing(args, None)
    }

    /// Ask the operator; a "no" aborts at `step`.
    fn gate(&self, step: ReleaseStep, prompt: &str) -> StepResult<()> {
        if self.confirm.confirm(prompt)? {
            log::warn!("Operator confirmed at '{}': {}", step, prompt.trim());
            Ok(())
        } else {
            Err(Halt::Abort(Abort::new(
                step,
                AbortReason::Declined {
                    prompt: prompt.to_string(),
                },
                String::new(),
            )))
        }
    }
}
