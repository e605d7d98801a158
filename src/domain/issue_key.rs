//! Issue-key extraction from change titles.

use std::sync::OnceLock;

use regex::Regex;

static ISSUE_KEY_RE: OnceLock<Regex> = OnceLock::new();

/// Tracker issue keys: an uppercase project key (two or more characters,
/// starting with a letter) joined to a numeric sequence, e.g. `PROJ-123`.
fn issue_key_re() -> &'static Regex {
    ISSUE_KEY_RE.get_or_init(|| {
        Regex::new(r"\b[A-Z][A-Z0-9]+-\d+\b").unwrap()
    })
}

/// Find the first tracker issue key mentioned in a change title.
///
/// Returns `None` when the title references no issue, which is an
/// expected, non-error outcome.
pub fn extract_issue_key(title: &str) -> Option<String> {
    issue_key_re().find(title).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_at_start() {
        assert_eq!(
            extract_issue_key("PROJ-123: fix login timeout").as_deref(),
            Some("PROJ-123")
        );
    }

    #[test]
    fn test_key_in_brackets() {
        assert_eq!(
            extract_issue_key("[ABC-7] tighten retry budget").as_deref(),
            Some("ABC-7")
        );
    }

    #[test]
    fn test_first_of_several_wins() {
        assert_eq!(
            extract_issue_key("PROJ-1 duplicates PROJ-2").as_deref(),
            Some("PROJ-1")
        );
    }

    #[test]
    fn test_digits_allowed_after_first_letter() {
        assert_eq!(
            extract_issue_key("A1B2-99 migrate schema").as_deref(),
            Some("A1B2-99")
        );
    }

    #[test]
    fn test_no_key_present() {
        assert!(extract_issue_key("chore: bump dependencies").is_none());
    }

    #[test]
    fn test_lowercase_is_not_a_key() {
        assert!(extract_issue_key("proj-123 is not a tracker key").is_none());
    }

    #[test]
    fn test_single_letter_prefix_is_not_a_key() {
        assert!(extract_issue_key("A-1 sized change").is_none());
    }

    #[test]
    fn test_key_inside_word_is_not_matched() {
        assert!(extract_issue_key("xPROJ-123y embedded").is_none());
    }
}
