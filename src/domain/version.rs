//! Version extraction from tag names.

use regex::Regex;
use tracing::{debug, warn};

/// Extract the version component of `tag` using an optional regex pattern.
///
/// The pattern is matched anchored at the start of the tag and must expose
/// the version as its first capture group. Every degenerate input falls
/// back to returning the whole tag unchanged: no pattern, an unparseable
/// pattern, a tag the pattern does not match, or a match whose first group
/// is missing or empty. A merely unhelpful pattern never fails the run.
///
/// Pure apart from warning on an invalid pattern.
pub fn extract_version(tag: &str, pattern: Option<&str>) -> String {
    let Some(pattern) = pattern.filter(|p| !p.is_empty()) else {
        return tag.to_string();
    };

    // Wrap before anchoring so a top-level alternation cannot escape `^`.
    let anchored = format!("^(?:{pattern})");
    let re = match Regex::new(&anchored) {
        Ok(re) => re,
        Err(err) => {
            warn!(pattern, %err, "invalid version pattern, using tag verbatim");
            return tag.to_string();
        }
    };

    match re
        .captures(tag)
        .and_then(|caps| caps.get(1))
        .filter(|m| !m.as_str().is_empty())
    {
        Some(m) => m.as_str().to_string(),
        None => {
            debug!(tag, pattern, "version pattern captured nothing, using tag verbatim");
            tag.to_string()
        }
    }
}
