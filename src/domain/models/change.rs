//! Changelog entries gathered for a tagged release.

use serde::{Deserialize, Serialize};

use crate::domain::issue_key::extract_issue_key;

/// One entry from the changelog of the release being synchronized.
///
/// The title is the contract: it is the only field the synchronizer
/// inspects. Author and URL are carried along for reporting when the
/// changelog source provides them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEntry {
    /// Human title of the change, scanned for a tracker issue key.
    pub title: String,
    /// Author handle, when the changelog records one.
    pub author: Option<String>,
    /// Link to the underlying change, when present.
    pub url: Option<String>,
}

impl ChangeEntry {
    /// Create an entry carrying only a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: None,
            url: None,
        }
    }

    /// First tracker issue key referenced by the title, if any.
    /// Absence is a normal outcome; not every change references an issue.
    pub fn issue_key(&self) -> Option<String> {
        extract_issue_key(&self.title)
    }
}
