//! Release steps and the facts gathered while walking them.

use crate::parse::BranchState;
use std::fmt;

/// Steps of a release, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReleaseStep {
    /// Prompt for pre-release versions
    VersionWarning,
    /// Optional documentation regeneration
    RegenerateDocs,
    /// Current branch must be a main-line branch, or confirmed
    BranchCheck,
    /// `poetry version <v>`
    VersionBump,
    /// Working tree must be clean
    CleanlinessCheck,
    /// `poetry check` must report success, or be confirmed
    PackageCheck,
    /// Remote must not be ahead; push current branch
    RemoteSync,
    /// Remove stale build output
    CleanBuildArtifacts,
    /// `poetry build`, logged
    Build,
    /// `twine check` must pass, or be confirmed
    ArtifactValidation,
    /// Release tag must not exist yet
    TagCollision,
    /// Upload, with one fallback
    Publish,
    /// Create and push the release tag
    TagAndPush,
}

impl ReleaseStep {
    /// Heading shown to the operator
    pub fn title(self) -> &'static str {
        match self {
            ReleaseStep::VersionWarning => "Check version",
            ReleaseStep::RegenerateDocs => "Regenerate documentation",
            ReleaseStep::BranchCheck => "Check git branch",
            ReleaseStep::VersionBump => "Set version",
            ReleaseStep::CleanlinessCheck => "Check git working tree",
            ReleaseStep::PackageCheck => "Run poetry check",
            ReleaseStep::RemoteSync => "Sync with remote",
            ReleaseStep::CleanBuildArtifacts => "Clean old builds",
            ReleaseStep::Build => "Build",
            ReleaseStep::ArtifactValidation => "Run twine check",
            ReleaseStep::TagCollision => "Check git tag",
            ReleaseStep::Publish => "Publish",
            ReleaseStep::TagAndPush => "Tag and push",
        }
    }
}

impl fmt::Display for ReleaseStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Facts established by earlier gates, threaded by value through later ones
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequencerState {
    /// Parsed branch listing
    pub branches: BranchState,
    /// `git status` was empty
    pub working_tree_clean: bool,
    /// Main-line branch divergence was checked against
    pub main_branch: Option<String>,
    /// Branch pushed to the remote
    pub push_branch: Option<String>,
    /// Release tag, known not to exist yet
    pub tag: Option<String>,
}

impl SequencerState {
    /// Record the branch listing
    pub fn with_branches(self, branches: BranchState) -> Self {
        Self { branches, ..self }
    }

    /// Record a clean working tree
    pub fn with_clean_tree(self) -> Self {
        Self {
            working_tree_clean: true,
            ..self
        }
    }

    /// Record the resolved main-line branch and the pushed branch
    pub fn with_remote_sync(self, main_branch: String, push_branch: String) -> Self {
        Self {
            main_branch: Some(main_branch),
            push_branch: Some(push_branch),
            ..self
        }
    }

    /// Record a free release tag
    pub fn with_tag(self, tag: String) -> Self {
        Self {
            tag: Some(tag),
            ..self
        }
    }

    /// Checked-out branch, if the listing named one
    pub fn current_branch(&self) -> Option<&str> {
        self.branches.current_branch.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_branches;

    #[test]
    fn test_steps_are_ordered() {
        assert!(ReleaseStep::VersionWarning < ReleaseStep::BranchCheck);
        assert!(ReleaseStep::Build < ReleaseStep::TagCollision);
        assert!(ReleaseStep::Publish < ReleaseStep::TagAndPush);
    }

    #[test]
    fn test_state_threading_keeps_earlier_facts() {
        let state = SequencerState::default()
            .with_branches(parse_branches("* main\n  develop"))
            .with_clean_tree()
            .with_remote_sync("main".to_string(), "main".to_string())
            .with_tag("v1.0.0".to_string());

        assert_eq!(state.current_branch(), Some("main"));
        assert!(state.working_tree_clean);
        assert_eq!(state.main_branch.as_deref(), Some("main"));
        assert_eq!(state.push_branch.as_deref(), Some("main"));
        assert_eq!(state.tag.as_deref(), Some("v1.0.0"));
    }
}
