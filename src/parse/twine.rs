use super::strip_ansi;

const PASSED: &str = "PASSED";

/// One line of a `twine check` report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactCheck {
    /// Line with styling removed and whitespace trimmed
    pub line: String,
    /// Line ends with `PASSED`
    pub passed: bool,
}

/// Parsed `twine check` report, in report order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactCheckReport {
    /// One entry per non-empty report line
    pub checks: Vec<ArtifactCheck>,
}

impl ArtifactCheckReport {
    /// Parse raw (possibly styled) checker output
    pub fn parse(raw_report: &str) -> Self {
        let checks = strip_ansi(raw_report)
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| ArtifactCheck {
                line: line.to_string(),
                passed: line.ends_with(PASSED),
            })
            .collect();
        Self { checks }
    }

    /// Pass/fail per line
    pub fn results(&self) -> Vec<bool> {
        self.checks.iter().map(|check| check.passed).collect()
    }

    /// An empty report is no evidence of success.
    pub fn all_passed(&self) -> bool {
        !self.checks.is_empty() && self.checks.iter().all(|check| check.passed)
    }
}

/// Pass/fail per non-empty line of an artifact-check report.
pub fn parse_artifact_checks(raw_report: &str) -> Vec<bool> {
    ArtifactCheckReport::parse(raw_report).results()
}
