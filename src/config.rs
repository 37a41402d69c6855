//! Publish settings.
//!
//! Every knob has a default matching a stock Poetry + git setup, so most
//! projects never write a `[tool.poetry-publish]` table at all.

use serde::Deserialize;

/// Settings for one release run, read from `[tool.poetry-publish]`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct PublishSettings {
    /// Remote to check against and push to
    pub remote: String,
    /// Prepended to the version to form the release tag
    pub tag_prefix: String,
    /// Accepted main-line branch names, most preferred first
    pub main_branches: Vec<String>,
    /// Version substrings that mark a pre-release
    pub prerelease_markers: Vec<String>,
    /// Text `poetry check` prints when the project is valid
    pub check_success_marker: String,
    /// Directories removed before building, relative to the package root
    pub build_dirs: Vec<String>,
    /// Artifact pattern handed to twine (twine expands it, not a shell)
    pub artifact_glob: String,
    /// Command regenerating documentation when requested
    pub docs_command: Vec<String>,
}

impl Default for PublishSettings {
    fn default() -> Self {
        Self {
            remote: "origin".to_string(),
            tag_prefix: "v".to_string(),
            main_branches: vec!["main".to_string(), "master".to_string()],
            prerelease_markers: vec!["dev".to_string(), "rc".to_string()],
            check_success_marker: "All set!".to_string(),
            build_dirs: vec!["dist".to_string(), "build".to_string()],
            artifact_glob: "dist/*.*".to_string(),
            docs_command: vec![
                "poetry".to_string(),
                "run".to_string(),
                "update_rst_readme".to_string(),
            ],
        }
    }
}

impl PublishSettings {
    /// Release tag for `version`
    pub fn tag_for(&self, version: &str) -> String {
        format!("{}{}", self.tag_prefix, version)
    }

    /// Annotated tag message for `version`
    pub fn tag_message(&self, version: &str) -> String {
        format!("publishing version {}", version)
    }

    /// First pre-release marker contained in `version`
    pub fn prerelease_marker<'a>(&'a self, version: &str) -> Option<&'a str> {
        self.prerelease_markers
            .iter()
            .map(String::as_str)
            .find(|marker| version.contains(marker))
    }

    /// `"main" or "master"` style list used in prompts
    pub fn main_branches_display(&self) -> String {
        self.main_branches
            .iter()
            .map(|name| format!("\"{}\"", name))
            .collect::<Vec<_>>()
            .join(" or ")
    }
}
