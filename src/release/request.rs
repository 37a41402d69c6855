use crate::error::{ConfigError, Result};
use std::path::{Path, PathBuf};

/// Immutable input of one release run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseRequest {
    package_root: PathBuf,
    version: String,
    log_path: PathBuf,
    regenerate_docs: bool,
    extra_publish_args: Vec<String>,
}

impl ReleaseRequest {
    /// Build log file name used when none is given
    pub const DEFAULT_LOG_FILE: &'static str = "publish.log";

    /// Create a request; `version` must be a single non-empty token.
    pub fn new(package_root: impl Into<PathBuf>, version: impl Into<String>) -> Result<Self> {
        let version = version.into();
        if version.is_empty() {
            return Err(ConfigError::InvalidVersion {
                version,
                reason: "version is empty".to_string(),
            }
            .into());
        }
        if version.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidVersion {
                version,
                reason: "version contains whitespace".to_string(),
            }
            .into());
        }

        Ok(Self {
            package_root: package_root.into(),
            version,
            log_path: PathBuf::from(Self::DEFAULT_LOG_FILE),
            regenerate_docs: false,
            extra_publish_args: Vec::new(),
        })
    }

    /// Use a different build log file
    pub fn with_log_path(mut self, log_path: impl Into<PathBuf>) -> Self {
        self.log_path = log_path.into();
        self
    }

    /// Regenerate documentation before the branch check
    pub fn with_regenerate_docs(mut self, regenerate_docs: bool) -> Self {
        self.regenerate_docs = regenerate_docs;
        self
    }

    /// Arguments forwarded verbatim to `poetry publish`
    pub fn with_extra_publish_args(mut self, args: Vec<String>) -> Self {
        self.extra_publish_args = args;
        self
    }

    /// Directory all commands run in
    pub fn package_root(&self) -> &Path {
        &self.package_root
    }

    /// Version being released
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Log path as given
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Log path, relative paths resolved against the package root
    pub fn resolved_log_path(&self) -> PathBuf {
        if self.log_path.is_absolute() {
            self.log_path.clone()
        } else {
            self.package_root.join(&self.log_path)
        }
    }

    /// Whether documentation is regenerated first
    pub fn regenerate_docs(&self) -> bool {
        self.regenerate_docs
    }

    /// Extra `poetry publish` arguments
    pub fn extra_publish_args(&self) -> &[String] {
        &self.extra_publish_args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let request = ReleaseRequest::new("/tmp/pkg", "1.2.3").expect("valid request");
        assert_eq!(request.version(), "1.2.3");
        assert_eq!(request.log_path(), Path::new("publish.log"));
        assert_eq!(request.resolved_log_path(), PathBuf::from("/tmp/pkg/publish.log"));
        assert!(!request.regenerate_docs());
        assert!(request.extra_publish_args().is_empty());
    }

    #[test]
    fn test_absolute_log_path_is_kept() {
        let request = ReleaseRequest::new("/tmp/pkg", "1.0")
            .expect("valid request")
            .with_log_path("/var/log/release.log");
        assert_eq!(request.resolved_log_path(), PathBuf::from("/var/log/release.log"));
    }

    #[test]
    fn test_prerelease_versions_are_accepted() {
        assert!(ReleaseRequest::new(".", "1.2.3.dev0").is_ok());
        assert!(ReleaseRequest::new(".", "2.0.0rc1").is_ok());
    }

    #[test]
    fn test_empty_version_is_rejected() {
        assert!(matches!(
            ReleaseRequest::new(".", ""),
            Err(crate::ReleaseError::Config(ConfigError::InvalidVersion { .. }))
        ));
    }

    #[test]
    fn test_whitespace_in_version_is_rejected() {
        assert!(ReleaseRequest::new(".", "1.0 beta").is_err());
        assert!(ReleaseRequest::new(".", " 1.0").is_err());
    }
}
