//! Source-host (GitHub) REST client for release objects.

use std::time::Duration;

use reqwest::{Client, Method};

use crate::domain::errors::{SyncError, SyncResult};
use crate::domain::models::GithubConfig;

use super::models::{GitHubRelease, UpdateReleaseRequest};

/// Per-request timeout. There is no retry loop to recover from an
/// indefinite hang, so every call is bounded.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the source host's releases endpoints.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    /// The underlying HTTP client.
    http: Client,
    /// API root, e.g. `https://api.github.com`. No trailing slash.
    api_url: String,
    /// Bearer token; `None` sends unauthenticated requests.
    token: Option<String>,
    /// Repository owner.
    owner: String,
    /// Repository name.
    repo: String,
}

impl GitHubClient {
    /// Build a client for one repository.
    pub fn new(config: &GithubConfig, owner: &str, repo: &str) -> SyncResult<Self> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }

    /// Build a request with the header set the host expects. The host
    /// rejects requests without a User-Agent.
    fn request(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        let mut req = self
            .http
            .request(method, url)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .header("User-Agent", "fixversion");
        if let Some(token) = &self.token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }
        req
    }

    /// The tag is fully percent-encoded: release tags routinely contain
    /// slashes, which must not read as path separators.
    fn release_by_tag_url(&self, tag: &str) -> String {
        format!(
            "{}/repos/{}/{}/releases/tags/{}",
            self.api_url,
            self.owner,
            self.repo,
            urlencoding::encode(tag)
        )
    }

    /// Fetch the release object published for a tag.
    pub async fn get_release_by_tag(&self, tag: &str) -> SyncResult<GitHubRelease> {
        let url = self.release_by_tag_url(tag);
        let resp = self.request(Method::GET, &url).send().await?;

        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(SyncError::upstream(status, body));
        }
        serde_json::from_str(&body).map_err(|_| SyncError::malformed("release", body))
    }

    /// Change a release's display name.
    pub async fn update_release_name(
        &self,
        release_id: u64,
        name: &str,
    ) -> SyncResult<GitHubRelease> {
        let url = format!(
            "{}/repos/{}/{}/releases/{}",
            self.api_url, self.owner, self.repo, release_id
        );
        let request = UpdateReleaseRequest {
            name: name.to_string(),
        };
        let resp = self
            .request(Method::PATCH, &url)
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(SyncError::upstream(status, body));
        }
        serde_json::from_str(&body).map_err(|_| SyncError::malformed("release update", body))
    }
}
