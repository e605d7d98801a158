use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Serialized};
use thiserror::Error;

use crate::domain::models::config::Config;

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required configuration: {0}")]
    MissingRequired(String),

    #[error("Invalid repository slug '{0}'. Expected owner/repo")]
    InvalidRepository(String),

    #[error("Invalid timeout: {0}. Must be at least 1 second")]
    InvalidTimeout(u64),
}

/// Configuration loader with environment merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration.
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. Environment variables (FIXVERSION_* prefix, `__` nesting)
    /// 3. Well-known CI variables, filling fields still unset
    ///    (GITHUB_REF_NAME, GITHUB_TOKEN / GH_TOKEN, GITHUB_REPOSITORY)
    ///
    /// Loading never fails on missing values; required fields are checked
    /// per command via [`Self::validate_sync`] so that the secondary
    /// commands do not demand tracker credentials they never use.
    pub fn load() -> Result<Config> {
        let mut config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Env::prefixed("FIXVERSION_").split("__"))
            .extract()
            .context("Failed to extract configuration from environment")?;

        Self::apply_ci_fallbacks(&mut config);
        Ok(config)
    }

    /// Fill fields the explicit configuration left empty from the
    /// variables a CI runner injects.
    fn apply_ci_fallbacks(config: &mut Config) {
        if config.release.tag.is_empty() {
            if let Ok(tag) = std::env::var("GITHUB_REF_NAME") {
                config.release.tag = tag;
            }
        }

        // Whitespace-only tokens are treated as absent.
        if config
            .github
            .token
            .as_deref()
            .is_none_or(|t| t.trim().is_empty())
        {
            config.github.token =
                non_blank_env("GITHUB_TOKEN").or_else(|| non_blank_env("GH_TOKEN"));
        }

        if config
            .github
            .repository
            .as_deref()
            .is_none_or(|r| r.trim().is_empty())
        {
            config.github.repository = non_blank_env("GITHUB_REPOSITORY");
        }
    }

    /// Check everything the `sync` command needs before any HTTP call.
    pub fn validate_sync(config: &Config) -> Result<(), ConfigError> {
        let mut missing = Vec::new();
        if config.jira.base_url.trim().is_empty() {
            missing.push("jira.base_url (FIXVERSION_JIRA__BASE_URL)");
        }
        if config.jira.project_key.trim().is_empty() {
            missing.push("jira.project_key (FIXVERSION_JIRA__PROJECT_KEY)");
        }
        if config.jira.user.trim().is_empty() {
            missing.push("jira.user (FIXVERSION_JIRA__USER)");
        }
        if config.jira.token.trim().is_empty() {
            missing.push("jira.token (FIXVERSION_JIRA__TOKEN)");
        }
        if config.release.tag.trim().is_empty() {
            missing.push("release.tag (FIXVERSION_RELEASE__TAG or GITHUB_REF_NAME)");
        }
        if !missing.is_empty() {
            return Err(ConfigError::MissingRequired(missing.join(", ")));
        }

        if config.jira.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(config.jira.timeout_secs));
        }

        Ok(())
    }

    /// Split an `owner/repo` slug into its two parts.
    pub fn split_repository(slug: &str) -> Result<(&str, &str), ConfigError> {
        match slug.split_once('/') {
            Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
                Ok((owner, repo))
            }
            _ => Err(ConfigError::InvalidRepository(slug.to_string())),
        }
    }
}

fn non_blank_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
