//! Actions: steps that change the package, the repository or the index.

use super::outcome::{PublishRoute, StepResult};
use super::state::{ReleaseStep, SequencerState};
use super::{Confirm, ReleaseRequest, Sequencer};
use crate::error::{CommandError, ReleaseError};
use crate::process::{CommandRunner, invocation_label};
use std::fs::OpenOptions;
use std::io::Write;

/// Width of the separator line between build log entries
const LOG_SEPARATOR_WIDTH: usize = 100;

const VERBOSE_FLAG: &str = "-vvv";

impl<R: CommandRunner, C: Confirm> Sequencer<'_, R, C> {
    pub(super) fn regenerate_docs(&self) -> StepResult<()> {
        self.enter(ReleaseStep::RegenerateDocs);
        let args: Vec<&str> = self.settings.docs_command.iter().map(String::as_str).collect();
        self.runner.run_for_effect(&args)?;
        Ok(())
    }

    pub(super) fn bump_version(&self, request: &ReleaseRequest) -> StepResult<()> {
        self.enter(ReleaseStep::VersionBump);
        self.output
            .info(&format!("Set version in pyproject.toml to: v{}", request.version()));
        self.runner
            .run_for_effect(&["poetry", "version", request.version()])?;
        Ok(())
    }

    pub(super) fn clean_build_artifacts(&self, request: &ReleaseRequest) -> StepResult<()> {
        self.enter(ReleaseStep::CleanBuildArtifacts);
        for dir in &self.settings.build_dirs {
            let path = request.package_root().join(dir);
            if path.is_dir() {
                self.output.indent(&format!("remove tree: {}", path.display()));
                std::fs::remove_dir_all(&path)?;
            }
        }
        Ok(())
    }

    /// Build and append the output to the log file, also when the build fails.
    pub(super) fn build(&self, request: &ReleaseRequest) -> StepResult<()> {
        self.enter(ReleaseStep::Build);

        let log_path = request.resolved_log_path();
        let mut log = OpenOptions::new().create(true).append(true).open(&log_path)?;
        writeln!(log)?;
        writeln!(log, "{}", "-".repeat(LOG_SEPARATOR_WIDTH))?;

        let args = ["poetry", "build"];
        self.output.indent(&invocation_label(&args));
        let result = self
            .runner
            .run_capturing(&args, Some(&mut log as &mut dyn Write))?;
        writeln!(log, "{}", result.invocation_label)?;
        log.write_all(result.combined_output.as_bytes())?;

        self.output
            .info(&format!("Build log file is here: {}", log_path.display()));
        Ok(())
    }

    pub(super) fn publish(&self, request: &ReleaseRequest) -> StepResult<PublishRoute> {
        self.enter(ReleaseStep::Publish);

        let extra = request.extra_publish_args();
        let mut args = vec!["poetry", "publish"];
        args.extend(extra.iter().map(String::as_str));
        if !extra.iter().any(|arg| arg == VERBOSE_FLAG) {
            args.push(VERBOSE_FLAG);
        }

        match self.runner.run_for_effect(&args) {
            Ok(()) => Ok(PublishRoute::Primary),
            Err(ReleaseError::Command(CommandError::Failed { label, code, .. })) => {
                log::warn!("{} failed ({:?}), falling back to twine upload", label, code);
                self.output.warn("Poetry publish error -> fallback and use twine");
                self.runner.run_for_effect(&[
                    "poetry",
                    "run",
                    "twine",
                    "upload",
                    &self.settings.artifact_glob,
                ])?;
                Ok(PublishRoute::Fallback)
            }
            Err(error) => Err(error.into()),
        }
    }

    /// Returns the pushed tag and the branch pushed during remote sync.
    pub(super) fn tag_and_push(
        &self,
        request: &ReleaseRequest,
        state: SequencerState,
    ) -> StepResult<(String, String)> {
        self.enter(ReleaseStep::TagAndPush);

        let version = request.version();
        let tag = state
            .tag
            .unwrap_or_else(|| self.settings.tag_for(version));
        let message = self.settings.tag_message(version);

        self.runner
            .run_for_effect(&["git", "tag", "-a", &tag, "-m", &message])?;
        self.runner
            .run_for_effect(&["git", "push", &self.settings.remote, "--tags"])?;

        Ok((tag, state.push_branch.unwrap_or_default()))
    }
}
