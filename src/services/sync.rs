//! The release synchronizer: ties tag, tracker, and changelog together.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::domain::errors::{SyncError, SyncResult};
use crate::domain::models::{AssociationOutcome, ReleaseConfig, ReleaseRecord, SyncReport};
use crate::domain::naming::resolve_release_name;
use crate::domain::ports::ChangelogSource;
use crate::infrastructure::jira::JiraClient;

/// Orchestrates one synchronization run.
///
/// Everything happens sequentially: change sets are small, tracker APIs
/// rate-limit, and log ordering matters for pipeline readability.
pub struct ReleaseSynchronizer {
    jira: JiraClient,
    changelog: Arc<dyn ChangelogSource>,
}

impl ReleaseSynchronizer {
    /// Create a synchronizer over a tracker client and a changelog source.
    pub fn new(jira: JiraClient, changelog: Arc<dyn ChangelogSource>) -> Self {
        Self { jira, changelog }
    }

    /// Look up the release by exact name, creating it when absent.
    ///
    /// The tracker's search may be fuzzy, so the exact-name filter
    /// happens here, client-side; trusting raw search results risks
    /// silently reusing the wrong release. Two exact matches mean the
    /// tracker holds duplicates: a hard stop, never a pick-first.
    ///
    /// Returns the record and whether this run created it.
    #[instrument(skip(self), err)]
    pub async fn get_or_create_release(&self, name: &str) -> SyncResult<(ReleaseRecord, bool)> {
        let candidates = self.jira.find_versions(name).await?;
        let mut exact: Vec<ReleaseRecord> = candidates
            .into_iter()
            .filter(|c| c.name == name)
            .collect();

        match exact.len() {
            0 => {
                let project_id = self.jira.fetch_project_id().await?;
                let created = self.jira.create_version(name, &project_id).await?;
                info!(release = name, id = %created.id, "created release record");
                Ok((created, true))
            }
            1 => {
                let found = exact.remove(0);
                info!(release = name, id = %found.id, "found existing release record");
                Ok((found, false))
            }
            count => Err(SyncError::AmbiguousRelease {
                name: name.to_string(),
                count,
            }),
        }
    }

    /// Run the full synchronization for the configured tag.
    ///
    /// Steps:
    /// 1. Derive the release name (extraction + template).
    /// 2. Look up or create the tracker's release record.
    /// 3. Collect the changelog for the tag.
    /// 4. Associate each referenced issue with the release.
    ///
    /// Failures in steps 1-3 abort the run; a failure on one association
    /// in step 4 is recorded and the loop continues, so one broken issue
    /// does not block the rest of the batch. [`SyncReport::failed_count`]
    /// tells the caller whether anything went wrong.
    #[instrument(skip_all, fields(tag = %release_config.tag), err)]
    pub async fn run(&self, release_config: &ReleaseConfig) -> SyncResult<SyncReport> {
        let name = resolve_release_name(
            &release_config.tag,
            release_config.version_pattern.as_deref(),
            &release_config.name_format,
        );
        info!(release = %name, "synchronizing release");

        let (release, created) = self.get_or_create_release(&name).await?;
        let mut report = SyncReport::new(release_config.tag.clone(), release, created);

        let changes = self.changelog.extract_changes(&release_config.tag).await?;
        info!(count = changes.len(), "collected changelog entries");

        for change in &changes {
            let Some(issue_key) = change.issue_key() else {
                info!(title = %change.title, "no issue referenced, skipping");
                report.skipped += 1;
                continue;
            };

            match self
                .jira
                .add_fix_version(&issue_key, &report.release.name)
                .await
            {
                Ok(()) => {
                    info!(issue = %issue_key, "fix version added");
                    report.outcomes.push(AssociationOutcome::added(issue_key));
                }
                Err(err) => {
                    warn!(issue = %issue_key, error = %err, "association failed, continuing");
                    report
                        .outcomes
                        .push(AssociationOutcome::failed(issue_key, err.to_string()));
                }
            }
        }

        Ok(report)
    }
}
