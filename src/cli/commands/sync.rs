//! Implementation of the `fixversion sync` command.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{Config, SyncReport};
use crate::domain::ports::ChangelogSource;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::github::{GitHubChangelogSource, GitHubClient};
use crate::infrastructure::jira::JiraClient;
use crate::services::ReleaseSynchronizer;

#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Tag to synchronize (defaults to the CI-provided ref name)
    #[arg(long, env = "GITHUB_REF_NAME")]
    pub tag: Option<String>,

    /// Regex whose first capture group extracts the version from the tag
    #[arg(long)]
    pub version_pattern: Option<String>,

    /// Release-name template; {version} is replaced by the extracted version
    #[arg(long)]
    pub name_format: Option<String>,
}

#[derive(Debug, serde::Serialize)]
pub struct SyncOutput {
    pub success: bool,
    #[serde(flatten)]
    pub report: SyncReport,
}

impl CommandOutput for SyncOutput {
    fn to_human(&self) -> String {
        let release = &self.report.release;
        let origin = if self.report.created {
            "created"
        } else {
            "existing"
        };
        let mut lines = vec![format!(
            "Release '{}' (id {}, {origin}) for tag '{}'",
            release.name, release.id, self.report.tag
        )];

        for outcome in &self.report.outcomes {
            if outcome.success {
                lines.push(format!("  added    {}", outcome.issue_key));
            } else {
                let detail = outcome.error.as_deref().unwrap_or("unknown error");
                lines.push(format!("  FAILED   {}: {detail}", outcome.issue_key));
            }
        }

        if self.report.skipped > 0 {
            lines.push(format!(
                "Skipped {} change(s) without an issue reference.",
                self.report.skipped
            ));
        }

        if self.report.outcomes.is_empty() {
            lines.push("No issues to associate.".to_string());
        } else {
            lines.push(format!(
                "{} association(s): {} added, {} failed.",
                self.report.outcomes.len(),
                self.report.succeeded_count(),
                self.report.failed_count()
            ));
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(args: SyncArgs, json_mode: bool) -> Result<()> {
    let mut config = ConfigLoader::load().context("Failed to load configuration")?;
    apply_overrides(&mut config, args);
    ConfigLoader::validate_sync(&config).context("Configuration is incomplete")?;

    let jira = JiraClient::new(&config.jira).context("Failed to build the tracker client")?;
    let changelog = build_changelog_source(&config)?;
    let synchronizer = ReleaseSynchronizer::new(jira, changelog);

    let report = synchronizer.run(&config.release).await?;
    let failed = report.failed_count();
    let output_data = SyncOutput {
        success: failed == 0,
        report,
    };
    output(&output_data, json_mode);

    // All attempts ran to completion; the exit code still has to report
    // the ones that failed.
    if failed > 0 {
        anyhow::bail!("{failed} issue association(s) failed");
    }
    Ok(())
}

fn apply_overrides(config: &mut Config, args: SyncArgs) {
    if let Some(tag) = args.tag {
        config.release.tag = tag;
    }
    if let Some(pattern) = args.version_pattern {
        config.release.version_pattern = Some(pattern);
    }
    if let Some(format) = args.name_format {
        config.release.name_format = format;
    }
}

fn build_changelog_source(config: &Config) -> Result<Arc<dyn ChangelogSource>> {
    let slug = config.github.repository.as_deref().context(
        "github.repository is not set (FIXVERSION_GITHUB__REPOSITORY or GITHUB_REPOSITORY)",
    )?;
    let (owner, repo) = ConfigLoader::split_repository(slug)?;
    let client = GitHubClient::new(&config.github, owner, repo)
        .context("Failed to build the source-host client")?;
    Ok(Arc::new(GitHubChangelogSource::new(client)))
}
