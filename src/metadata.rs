//! Package metadata from `pyproject.toml`.

use crate::config::PublishSettings;
use crate::error::{ConfigError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File name of the Poetry project manifest
pub const PYPROJECT_FILE: &str = "pyproject.toml";

/// The parts of `pyproject.toml` a release needs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageMetadata {
    /// Manifest path (may not exist)
    pub path: PathBuf,
    /// `[tool.poetry].version`, else `[project].version`
    pub version: Option<String>,
    /// `[tool.poetry-publish]`, defaults when absent
    pub settings: PublishSettings,
}

impl PackageMetadata {
    /// Version from the manifest, or `MissingVersion`
    pub fn require_version(&self) -> Result<&str> {
        self.version.as_deref().ok_or_else(|| {
            ConfigError::MissingVersion {
                path: self.path.clone(),
            }
            .into()
        })
    }
}

#[derive(Debug, Default, Deserialize)]
struct PyProject {
    #[serde(default)]
    project: Option<VersionTable>,
    #[serde(default)]
    tool: Option<ToolTable>,
}

#[derive(Debug, Default, Deserialize)]
struct ToolTable {
    #[serde(default)]
    poetry: Option<VersionTable>,
    #[serde(default, rename = "poetry-publish")]
    poetry_publish: Option<PublishSettings>,
}

#[derive(Debug, Default, Deserialize)]
struct VersionTable {
    #[serde(default)]
    version: Option<String>,
}

/// Load metadata from `<package_root>/pyproject.toml`.
///
/// A missing manifest is not an error; it yields no version and default settings.
pub fn load_metadata(package_root: &Path) -> Result<PackageMetadata> {
    let path = package_root.join(PYPROJECT_FILE);
    if !path.is_file() {
        log::debug!("No {} at {}, using defaults", PYPROJECT_FILE, path.display());
        return Ok(PackageMetadata {
            path,
            ..PackageMetadata::default()
        });
    }

    let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    parse_metadata(&content, path)
}

fn parse_metadata(content: &str, path: PathBuf) -> Result<PackageMetadata> {
    let pyproject: PyProject = toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.clone(),
        source,
    })?;

    let tool = pyproject.tool.unwrap_or_default();
    let version = tool
        .poetry
        .and_then(|poetry| poetry.version)
        .or_else(|| pyproject.project.and_then(|project| project.version));

    Ok(PackageMetadata {
        path,
        version,
        settings: tool.poetry_publish.unwrap_or_default(),
    })
}
