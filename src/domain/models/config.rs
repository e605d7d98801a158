//! Configuration model for the fixversion tool.
//!
//! Assembled once at startup by `infrastructure::config::ConfigLoader`
//! and passed by reference into clients and services; no module-level
//! globals.

use serde::{Deserialize, Serialize};

use crate::domain::naming::VERSION_PLACEHOLDER;

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Issue-tracker connection settings.
    #[serde(default)]
    pub jira: JiraConfig,

    /// Tag-to-release-name derivation settings.
    #[serde(default)]
    pub release: ReleaseConfig,

    /// Source-host settings (changelog fetch, release rename).
    #[serde(default)]
    pub github: GithubConfig,
}

/// Connection settings for the issue tracker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JiraConfig {
    /// Base URL of the tracker site, e.g. `https://example.atlassian.net`.
    #[serde(default)]
    pub base_url: String,

    /// Key of the project whose releases are managed, e.g. `PROJ`.
    #[serde(default)]
    pub project_key: String,

    /// Account (email) used for basic auth.
    #[serde(default)]
    pub user: String,

    /// API token paired with the account.
    #[serde(default)]
    pub token: String,

    /// Per-request timeout in seconds. There is no retry loop, so every
    /// call must be bounded.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for JiraConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            project_key: String::new(),
            user: String::new(),
            token: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// How the triggering tag becomes a release name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseConfig {
    /// The tag being synchronized, usually injected by CI.
    #[serde(default)]
    pub tag: String,

    /// Regex whose first capture group extracts the version from the tag.
    /// Absent means the tag is used verbatim.
    #[serde(default)]
    pub version_pattern: Option<String>,

    /// Release-name template; every `{version}` token is replaced by the
    /// extracted version.
    #[serde(default = "default_name_format")]
    pub name_format: String,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            tag: String::new(),
            version_pattern: None,
            name_format: default_name_format(),
        }
    }
}

/// Settings for the source host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    /// API token. Absent or blank disables authenticated operations.
    #[serde(default)]
    pub token: Option<String>,

    /// `owner/repo` slug of the repository the tag lives in.
    #[serde(default)]
    pub repository: Option<String>,

    /// API root, overridable for GitHub Enterprise.
    #[serde(default = "default_github_api_url")]
    pub api_url: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            token: None,
            repository: None,
            api_url: default_github_api_url(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_name_format() -> String {
    VERSION_PLACEHOLDER.to_string()
}

fn default_github_api_url() -> String {
    "https://api.github.com".to_string()
}
