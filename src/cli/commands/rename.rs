//! Implementation of the `fixversion rename-release` command.
//!
//! Renames the source host's release object for a tag, typically to the
//! same name the tracker release got. Missing credentials or repository
//! information degrade to a warning, matching the command's best-effort
//! role in a pipeline; actual API failures are hard errors.

use anyhow::{Context, Result};
use clap::Args;
use tracing::{info, warn};

use crate::cli::output::{output, CommandOutput};
use crate::domain::naming::resolve_release_name;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::github::GitHubClient;

#[derive(Args, Debug)]
pub struct RenameArgs {
    /// Tag identifying the release object (defaults to the CI ref name)
    #[arg(long, env = "GITHUB_REF_NAME")]
    pub tag: Option<String>,

    /// New display name; derived from the tag when omitted
    #[arg(long)]
    pub name: Option<String>,
}

#[derive(Debug, serde::Serialize)]
pub struct RenameOutput {
    pub success: bool,
    pub updated: bool,
    pub tag: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_name: Option<String>,
    pub message: String,
}

impl CommandOutput for RenameOutput {
    fn to_human(&self) -> String {
        self.message.clone()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(args: RenameArgs, json_mode: bool) -> Result<()> {
    let config = ConfigLoader::load().context("Failed to load configuration")?;

    let tag = match args.tag {
        Some(tag) => tag,
        None if !config.release.tag.is_empty() => config.release.tag.clone(),
        None => anyhow::bail!("No tag provided (use --tag or GITHUB_REF_NAME)"),
    };
    let name = args.name.unwrap_or_else(|| {
        resolve_release_name(
            &tag,
            config.release.version_pattern.as_deref(),
            &config.release.name_format,
        )
    });

    if config.github.token.is_none() {
        warn!("no source-host token found, cannot rename the release");
        let out = RenameOutput {
            success: false,
            updated: false,
            tag,
            name,
            previous_name: None,
            message: "WARNING: No GitHub token found. Set GITHUB_TOKEN or GH_TOKEN to enable \
                      renaming."
                .to_string(),
        };
        output(&out, json_mode);
        return Ok(());
    }

    let Some(slug) = config.github.repository.as_deref() else {
        warn!("no repository configured, cannot rename the release");
        let out = RenameOutput {
            success: false,
            updated: false,
            tag,
            name,
            previous_name: None,
            message: "WARNING: Could not determine the repository. Set GITHUB_REPOSITORY or \
                      FIXVERSION_GITHUB__REPOSITORY."
                .to_string(),
        };
        output(&out, json_mode);
        return Ok(());
    };
    let (owner, repo) = match ConfigLoader::split_repository(slug) {
        Ok(parts) => parts,
        Err(err) => {
            warn!(slug, "repository slug is not owner/repo, cannot rename the release");
            let out = RenameOutput {
                success: false,
                updated: false,
                tag,
                name,
                previous_name: None,
                message: format!("WARNING: {err}"),
            };
            output(&out, json_mode);
            return Ok(());
        }
    };

    let client = GitHubClient::new(&config.github, owner, repo)
        .context("Failed to build the source-host client")?;
    let release = client
        .get_release_by_tag(&tag)
        .await
        .context("Failed to fetch the release for the tag")?;

    let current = release.name.clone().unwrap_or_default();
    if current == name {
        info!(name = %name, "release already has the requested name");
        let out = RenameOutput {
            success: true,
            updated: false,
            tag,
            message: format!("Release is already named '{name}'. No update needed."),
            previous_name: Some(current),
            name,
        };
        output(&out, json_mode);
        return Ok(());
    }

    let updated = client
        .update_release_name(release.id, &name)
        .await
        .context("Failed to update the release name")?;
    info!(from = %current, to = %name, "release renamed");

    let out = RenameOutput {
        success: true,
        updated: true,
        tag,
        message: format!("Updated release name from '{current}' to '{name}'."),
        previous_name: Some(current),
        name: updated.name.unwrap_or(name),
    };
    output(&out, json_mode);
    Ok(())
}
