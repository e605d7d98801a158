//! Changelog discovery from the source host's generated release notes.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::errors::SyncResult;
use crate::domain::models::ChangeEntry;
use crate::domain::ports::ChangelogSource;

use super::client::GitHubClient;

/// Reads the release object published for the tag and parses its notes
/// body into change entries.
pub struct GitHubChangelogSource {
    client: GitHubClient,
}

impl GitHubChangelogSource {
    pub fn new(client: GitHubClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ChangelogSource for GitHubChangelogSource {
    async fn extract_changes(&self, tag: &str) -> SyncResult<Vec<ChangeEntry>> {
        let release = self.client.get_release_by_tag(tag).await?;
        let notes = release.body.unwrap_or_default();
        let changes = parse_release_notes(&notes);
        debug!(tag, count = changes.len(), "parsed changelog entries");
        Ok(changes)
    }
}

/// Parse generated release notes into change entries, one per bullet.
///
/// Generated notes append ` by @author in <pr-url>` to each bullet;
/// both suffix parts are split off when present (the attribution is a
/// suffix, so the split happens at the last ` by @`). Headings, blank
/// lines, the `**Full Changelog**` footer, and contributor mentions
/// are not changes. An empty body yields an empty set.
pub fn parse_release_notes(notes: &str) -> Vec<ChangeEntry> {
    let mut changes = Vec::new();
    for line in notes.lines() {
        let line = line.trim();
        let Some(rest) = line.strip_prefix("* ").or_else(|| line.strip_prefix("- ")) else {
            continue;
        };
        let rest = rest.trim();
        // "New Contributors" bullets open with the handle itself.
        if rest.is_empty() || rest.starts_with('@') {
            continue;
        }

        let (title, attribution) = match rest.rsplit_once(" by @") {
            Some((title, attribution)) => (title.trim_end(), Some(attribution)),
            None => (rest, None),
        };
        if title.is_empty() {
            continue;
        }

        let mut entry = ChangeEntry::new(title);
        if let Some(attribution) = attribution {
            match attribution.split_once(" in ") {
                Some((author, url)) => {
                    entry.author = Some(author.trim().to_string());
                    entry.url = Some(url.trim().to_string());
                }
                None => entry.author = Some(attribution.trim().to_string()),
            }
        }
        changes.push(entry);
    }
    changes
}

// ─── tests ───────────────────────────────────────────────────────────────
