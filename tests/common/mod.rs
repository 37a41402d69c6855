//! Scripted collaborators for driving the release sequencer without git or poetry.

#![allow(dead_code)]

use poetry_publish::cli::OutputManager;
use poetry_publish::{
    Abort, CommandError, CommandResult, CommandRunner, Confirm, PublishSettings, ReleaseOutcome,
    ReleaseRequest, Result, Sequencer,
};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

/// Runner answering captured commands from a script and recording every call
#[derive(Default)]
pub struct ScriptedRunner {
    outputs: RefCell<HashMap<String, String>>,
    failing_captures: RefCell<HashMap<String, String>>,
    failing_effects: HashSet<String>,
    calls: RefCell<Vec<String>>,
    effects: RefCell<Vec<String>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Output for one captured command line; consumed on use
    pub fn output(self, command: &str, output: &str) -> Self {
        self.outputs
            .borrow_mut()
            .insert(command.to_string(), output.to_string());
        self
    }

    /// Captured command that exits non-zero with `output`
    pub fn failing_capture(self, command: &str, output: &str) -> Self {
        self.failing_captures
            .borrow_mut()
            .insert(command.to_string(), output.to_string());
        self
    }

    /// Effect command that exits non-zero
    pub fn failing_effect(mut self, command: &str) -> Self {
        self.failing_effects.insert(command.to_string());
        self
    }

    /// Every call, captured and effect, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Effect calls only, in order
    pub fn effects(&self) -> Vec<String> {
        self.effects.borrow().clone()
    }

    /// Scripted outputs nobody asked for
    pub fn unused_outputs(&self) -> Vec<String> {
        let mut unused: Vec<String> = self.outputs.borrow().keys().cloned().collect();
        unused.sort();
        unused
    }

    fn failed(label: String, output: String) -> poetry_publish::ReleaseError {
        CommandError::Failed {
            label,
            code: Some(1),
            output,
        }
        .into()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run_capturing(&self, args: &[&str], log: Option<&mut dyn Write>) -> Result<CommandResult> {
        let command = args.join(" ");
        self.calls.borrow_mut().push(command.clone());
        let label = format!("Call: '{}'", command);

        if let Some(output) = self.failing_captures.borrow_mut().remove(&command) {
            if let Some(log) = log {
                log.write_all(output.as_bytes())?;
            }
            return Err(Self::failed(label, output));
        }

        let output = self
            .outputs
            .borrow_mut()
            .remove(&command)
            .unwrap_or_else(|| panic!("unexpected captured command: {}", command));
        Ok(CommandResult {
            invocation_label: label,
            combined_output: output,
        })
    }

    fn run_for_effect(&self, args: &[&str]) -> Result<()> {
        let command = args.join(" ");
        self.calls.borrow_mut().push(command.clone());
        self.effects.borrow_mut().push(command.clone());

        if self.failing_effects.contains(&command) {
            return Err(Self::failed(format!("Call: '{}'", command), String::new()));
        }
        Ok(())
    }
}

/// Confirmation answering from a script and recording every prompt
#[derive(Default)]
pub struct ScriptedConfirm {
    answers: RefCell<VecDeque<bool>>,
    prompts: RefCell<Vec<String>>,
}

impl ScriptedConfirm {
    /// Prompts are answered in order; an unexpected prompt panics
    pub fn answering(answers: &[bool]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().copied().collect()),
            prompts: RefCell::new(Vec::new()),
        }
    }

    /// No prompt is expected
    pub fn silent() -> Self {
        Self::answering(&[])
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&self, message: &str) -> Result<bool> {
        self.prompts.borrow_mut().push(message.to_string());
        let answer = self
            .answers
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected prompt: {}", message));
        Ok(answer)
    }
}

/// Temporary package root for one release attempt
pub struct TestPackage {
    _root: TempDir,
    pub path: PathBuf,
}

impl TestPackage {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        let path = root.path().to_path_buf();
        Self { _root: root, path }
    }

    pub fn request(&self, version: &str) -> ReleaseRequest {
        ReleaseRequest::new(&self.path, version).expect("valid request")
    }

    pub fn log_contents(&self) -> String {
        std::fs::read_to_string(self.path.join(ReleaseRequest::DEFAULT_LOG_FILE))
            .unwrap_or_default()
    }
}

/// Script for a release that passes every gate on `master`
pub fn clean_release_on_master(version: &str) -> ScriptedRunner {
    ScriptedRunner::new()
        .output("git branch --no-color", "  develop\n* master")
        .output("git status --porcelain", "")
        .output("poetry check", "All set!")
        .output("git log HEAD..origin/master --oneline", "")
        .output("poetry build", &format!("Building foobar ({})\n", version))
        .output("poetry run twine check dist/*.*", "Checking dist/foobar.whl: PASSED")
        .output("git tag", "v0.0.1\nv0.0.2")
}

/// Effect calls of a release of `version` that completes from `branch`
pub fn completed_effects(version: &str, branch: &str) -> Vec<String> {
    vec![
        format!("poetry version {}", version),
        "git fetch --all".to_string(),
        format!("git push origin {}", branch),
        "poetry publish -vvv".to_string(),
        format!("git tag -a v{} -m publishing version {}", version, version),
        "git push origin --tags".to_string(),
    ]
}

/// Run the sequencer quietly with default settings
pub fn run_release(
    runner: &ScriptedRunner,
    confirm: &ScriptedConfirm,
    request: &ReleaseRequest,
) -> Result<ReleaseOutcome> {
    run_release_with(runner, confirm, request, &PublishSettings::default())
}

pub fn run_release_with(
    runner: &ScriptedRunner,
    confirm: &ScriptedConfirm,
    request: &ReleaseRequest,
    settings: &PublishSettings,
) -> Result<ReleaseOutcome> {
    let output = OutputManager::new(true);
    Sequencer::new(runner, confirm, settings, &output).run(request)
}

pub fn expect_aborted(outcome: ReleaseOutcome) -> Abort {
    match outcome {
        ReleaseOutcome::Aborted(abort) => abort,
        ReleaseOutcome::Completed(report) => panic!("expected abort, release completed: {:?}", report),
    }
}
