use std::collections::BTreeSet;

/// Marker `git branch` puts in front of the checked-out branch
const CURRENT_MARKER: &str = "* ";

/// Branches as reported by `git branch --no-color`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchState {
    /// Checked-out branch, `None` if no line carried the marker
    pub current_branch: Option<String>,
    /// Every listed branch, current one included, marker stripped
    pub known_branches: BTreeSet<String>,
}

impl BranchState {
    /// First of `candidates` that exists locally, in preference order
    pub fn first_known<'a>(&self, candidates: &'a [String]) -> Option<&'a str> {
        candidates
            .iter()
            .find(|name| self.known_branches.contains(name.as_str()))
            .map(String::as_str)
    }
}

/// Parse a branch listing into the current branch and the set of known branches.
pub fn parse_branches(raw_listing: &str) -> BranchState {
    let mut state = BranchState::default();

    for line in raw_listing.lines() {
        let mut branch = line.trim();
        if branch.is_empty() {
            continue;
        }
        if let Some(name) = branch.strip_prefix(CURRENT_MARKER) {
            branch = name.trim();
            state.current_branch = Some(branch.to_string());
        }
        state.known_branches.insert(branch.to_string());
    }

    state
}

/// A working tree is clean when `git status --porcelain` reports nothing.
pub fn is_clean(raw_status: &str) -> bool {
    raw_status.trim().is_empty()
}

/// Exact, whole-line match of `candidate_tag` in a `git tag` listing.
pub fn tag_exists(raw_tag_listing: &str, candidate_tag: &str) -> bool {
    raw_tag_listing
        .lines()
        .any(|line| line.trim() == candidate_tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_current_branch_is_marked() {
        let state = parse_branches("  develop\n* master");
        assert_eq!(state.current_branch.as_deref(), Some("master"));
        assert_eq!(state.known_branches, set(&["develop", "master"]));
    }

    #[test]
    fn test_no_marker_means_no_current_branch() {
        let state = parse_branches("  develop\n  master\n");
        assert_eq!(state.current_branch, None);
        assert_eq!(state.known_branches, set(&["develop", "master"]));
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let state = parse_branches("\n* main\n\n   \n  feature/x\n");
        assert_eq!(state.current_branch.as_deref(), Some("main"));
        assert_eq!(state.known_branches, set(&["feature/x", "main"]));
    }

    #[test]
    fn test_empty_listing() {
        assert_eq!(parse_branches(""), BranchState::default());
    }

    #[test]
    fn test_first_known_respects_preference_order() {
        let state = parse_branches("* develop\n  master\n  main");
        let candidates = vec!["main".to_string(), "master".to_string()];
        assert_eq!(state.first_known(&candidates), Some("main"));

        let state = parse_branches("* develop\n  master");
        assert_eq!(state.first_known(&candidates), Some("master"));

        let state = parse_branches("* develop");
        assert_eq!(state.first_known(&candidates), None);
    }

    #[test]
    fn test_is_clean() {
        assert!(is_clean(""));
        assert!(is_clean("\n  \n"));
        assert!(!is_clean(" M file.py"));
        assert!(!is_clean("?? new.txt\n"));
    }

    #[test]
    fn test_tag_exists_exact_line() {
        let listing = "v0.0.1\nv1.2.3\nv1.2.30\n";
        assert!(tag_exists(listing, "v1.2.3"));
        assert!(tag_exists(listing, "v1.2.30"));
        assert!(!tag_exists(listing, "v1.2"));
    }

    #[test]
    fn test_tag_exists_ignores_prefix_matches() {
        assert!(!tag_exists("v1.2.30\nv1.2.31", "v1.2.3"));
    }

    #[test]
    fn test_tag_exists_trims_lines() {
        assert!(tag_exists("  v1.0.0  \r\nv2.0.0", "v1.0.0"));
        assert!(!tag_exists("", "v1.0.0"));
    }
}
