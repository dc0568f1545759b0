//! Whole-string regex predicate.

use regex_automata::meta::Regex;
use regex_automata::{Anchored, Input};

/// True when `text` as a whole matches `pattern`.
///
/// The pattern is anchored at both ends; the meta engine explores
/// alternations without backtracking, so `a|ab` still fullmatches `"ab"`.
/// An invalid pattern matches nothing.
pub fn fullmatch(pattern: &str, text: &str) -> bool {
    let Ok(regex) = Regex::new(&format!(r"(?:{pattern})\z")) else {
        return false;
    };
    regex
        .find(Input::new(text).anchored(Anchored::Yes))
        .is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_both_ends() {
        assert!(fullmatch("a+b", "aaab"));
        assert!(!fullmatch("a+b", "aaabc"));
        assert!(!fullmatch("a+b", "xaab"));
    }

    #[test]
    fn alternation_prefers_full_length() {
        assert!(fullmatch("a|ab", "ab"));
        assert!(fullmatch("rege(x(es)?|xps?)", "regexps"));
        assert!(fullmatch("rege(x(es)?|xps?)", "regex"));
        assert!(!fullmatch("rege(x(es)?|xps?)", "rege"));
    }

    #[test]
    fn invalid_pattern_matches_nothing() {
        assert!(!fullmatch("(", "("));
        assert!(!fullmatch("[", "["));
    }

    #[test]
    fn empty_pattern_matches_empty_string() {
        assert!(fullmatch("", ""));
        assert!(!fullmatch("", "x"));
    }
}
