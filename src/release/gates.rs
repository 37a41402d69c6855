//! Gates: steps that decide whether the release may continue.

use super::outcome::{Abort, AbortReason, Halt, StepResult};
use super::state::{ReleaseStep, SequencerState};
use super::{Confirm, ReleaseRequest, Sequencer};
use crate::parse::{ArtifactCheckReport, is_clean, parse_branches, tag_exists};
use crate::process::CommandRunner;

fn abort(step: ReleaseStep, reason: AbortReason, details: &str) -> Halt {
    Halt::Abort(Abort::new(step, reason, details))
}

impl<R: CommandRunner, C: Confirm> Sequencer<'_, R, C> {
    pub(super) fn check_version(&self, request: &ReleaseRequest) -> StepResult<()> {
        let step = ReleaseStep::VersionWarning;
        self.enter(step);

        let version = request.version();
        match self.settings.prerelease_marker(version) {
            Some(marker) => {
                let prompt = format!("WARNING: Version contains '{}': v{}", marker, version);
                self.gate(step, &prompt)
            }
            None => {
                self.output.success(&format!("v{}", version));
                Ok(())
            }
        }
    }

    pub(super) fn check_branch(&self, state: SequencerState) -> StepResult<SequencerState> {
        let step = ReleaseStep::BranchCheck;
        self.enter(step);

        let listing = self.capture(&["git", "branch", "--no-color"])?.combined_output;
        let branches = parse_branches(&listing);

        let Some(current) = branches.current_branch.as_deref() else {
            self.output.error(&format!("ERROR get git branch from: {:?}", listing));
            return Err(abort(step, AbortReason::UnresolvedBranch, &listing));
        };

        if self.settings.main_branches.iter().any(|name| name == current) {
            self.output.success(&format!("On branch {}", current));
        } else {
            let prompt = format!(
                "NOTE: It seems you are not on {}:\n{}",
                self.settings.main_branches_display(),
                listing
            );
            self.gate(step, &prompt)?;
        }

        Ok(state.with_branches(branches))
    }

    pub(super) fn check_clean(&self, state: SequencerState) -> StepResult<SequencerState> {
        let step = ReleaseStep::CleanlinessCheck;
        self.enter(step);

        let status = self.capture(&["git", "status", "--porcelain"])?.combined_output;
        if !is_clean(&status) {
            self.output.error("ERROR: git repository not clean:");
            self.output.raw(&status);
            return Err(abort(step, AbortReason::DirtyWorkingTree, &status));
        }

        self.output.success("OK");
        Ok(state.with_clean_tree())
    }

    pub(super) fn check_package(&self) -> StepResult<()> {
        let step = ReleaseStep::PackageCheck;
        self.enter(step);

        let report = self.capture(&["poetry", "check"])?.combined_output;
        if report.contains(&self.settings.check_success_marker) {
            self.output.success("OK");
            return Ok(());
        }

        self.output.raw(&report);
        self.gate(step, "Poetry check failed!")
    }

    pub(super) fn sync_remote(&self, state: SequencerState) -> StepResult<SequencerState> {
        let step = ReleaseStep::RemoteSync;
        self.enter(step);

        self.runner.run_for_effect(&["git", "fetch", "--all"])?;

        let Some(main_branch) = state.branches.first_known(&self.settings.main_branches) else {
            let known = state
                .branches
                .known_branches
                .iter()
                .cloned()
                .collect::<Vec<_>>()
                .join(", ");
            self.output.error(&format!(
                "ERROR: Did not find the main git branch ({}) in: {}",
                self.settings.main_branches_display(),
                known
            ));
            return Err(abort(step, AbortReason::NoMainBranch, &known));
        };
        let main_branch = main_branch.to_string();

        let range = format!("HEAD..{}/{}", self.settings.remote, main_branch);
        let ahead = self.capture(&["git", "log", &range, "--oneline"])?.combined_output;
        if !ahead.trim().is_empty() {
            self.output.error("ERROR: git repository is not up-to-date:");
            self.output.raw(&ahead);
            return Err(abort(step, AbortReason::RemoteAhead, &ahead));
        }
        self.output.success("OK");

        // Gate 2 guarantees a current branch.
        let current = state
            .current_branch()
            .map(str::to_string)
            .unwrap_or_else(|| main_branch.clone());
        self.runner
            .run_for_effect(&["git", "push", &self.settings.remote, &current])?;

        Ok(state.with_remote_sync(main_branch, current))
    }

    pub(super) fn validate_artifacts(&self) -> StepResult<()> {
        let step = ReleaseStep::ArtifactValidation;
        self.enter(step);

        let raw = self
            .capture(&["poetry", "run", "twine", "check", &self.settings.artifact_glob])?
            .combined_output;
        let report = ArtifactCheckReport::parse(&raw);
        for check in &report.checks {
            if check.passed {
                self.output.indent(&check.line);
            } else {
                self.output.println(&format!("ERROR: {}", check.line));
            }
        }

        if report.all_passed() {
            self.output.success("OK");
            Ok(())
        } else {
            self.gate(step, "Twine check failed!")
        }
    }

    pub(super) fn check_tag(
        &self,
        request: &ReleaseRequest,
        state: SequencerState,
    ) -> StepResult<SequencerState> {
        let step = ReleaseStep::TagCollision;
        self.enter(step);

        let tag = self.settings.tag_for(request.version());
        let listing = self.capture(&["git", "tag"])?.combined_output;
        if tag_exists(&listing, &tag) {
            self.output.error(&format!("ERROR: git tag '{}' already exists!", tag));
            self.output.raw(&listing);
            return Err(abort(step, AbortReason::TagExists { tag }, &listing));
        }

        self.output.success("OK");
        Ok(state.with_tag(tag))
    }
}
