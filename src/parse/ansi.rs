use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Remove ANSI "set graphics mode" sequences (`ESC [ ... m`).
pub fn strip_ansi(text: &str) -> Cow<'_, str> {
    static ANSI_STYLE_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\x1b\[[^m]*m").expect("ANSI style regex is valid"));

    ANSI_STYLE_RE.replace_all(text, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_untouched() {
        assert_eq!(strip_ansi("Checking dist/x.whl: PASSED"), "Checking dist/x.whl: PASSED");
    }

    #[test]
    fn test_colors_are_removed() {
        let styled = "Checking dist/x.whl: \x1b[32mPASSED\x1b[0m";
        assert_eq!(strip_ansi(styled), "Checking dist/x.whl: PASSED");
    }

    #[test]
    fn test_compound_sequences_are_removed() {
        let styled = "\x1b[1;31;40mERROR\x1b[0m done";
        assert_eq!(strip_ansi(styled), "ERROR done");
    }

    #[test]
    fn test_stripping_twice_is_stable() {
        let styled = "\x1b[33mwarn\x1b[0m\n\x1b[32mPASSED\x1b[0m";
        let once = strip_ansi(styled).into_owned();
        assert_eq!(strip_ansi(&once), once);
    }
}
