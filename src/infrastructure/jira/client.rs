//! Jira REST v3 client for release ("version") management.
//!
//! Stateless request/response mapping over the tracker's project,
//! version, and issue endpoints. The client holds only credentials and
//! the base URL for the life of the process; every call is a single
//! round trip with a bounded timeout and no automatic retry.

use std::time::Duration;

use reqwest::{Client, Method, StatusCode};
use tracing::{debug, warn};

use crate::domain::errors::{SyncError, SyncResult};
use crate::domain::models::{JiraConfig, ReleaseRecord};

use super::models::{
    CreateVersionRequest, JiraErrorBody, JiraProject, JiraVersion, JiraVersionPage,
};

/// HTTP client for the tracker's release and issue endpoints.
#[derive(Debug, Clone)]
pub struct JiraClient {
    /// The underlying HTTP client, built with the configured timeout.
    http: Client,
    /// Site root, e.g. `https://example.atlassian.net`. No trailing slash.
    base_url: String,
    /// Project whose releases this client manages.
    project_key: String,
    /// Basic-auth account.
    user: String,
    /// Basic-auth API token.
    token: String,
}

impl JiraClient {
    /// Build a client from configuration.
    ///
    /// The per-request timeout is mandatory: with no retry loop, an
    /// unbounded hang would stall the whole pipeline job.
    pub fn new(config: &JiraConfig) -> SyncResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            project_key: config.project_key.clone(),
            user: config.user.clone(),
            token: config.token.clone(),
        })
    }

    /// Build an authenticated request. Basic auth (user + API token) on
    /// every call.
    fn request(&self, method: Method, url: &str) -> reqwest::RequestBuilder {
        self.http
            .request(method, url)
            .basic_auth(&self.user, Some(&self.token))
            .header("Accept", "application/json")
    }

    /// Resolve the configured project key to its tracker id.
    pub async fn fetch_project_id(&self) -> SyncResult<String> {
        let url = format!("{}/rest/api/3/project/{}", self.base_url, self.project_key);
        let resp = self.request(Method::GET, &url).send().await?;

        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(SyncError::upstream(status, body));
        }

        let project: JiraProject = serde_json::from_str(&body)
            .map_err(|_| SyncError::malformed("project", body.clone()))?;
        project
            .id
            .map(super::models::JiraId::into_string)
            .ok_or_else(|| SyncError::malformed("project", body))
    }

    /// Search the project's versions by name.
    ///
    /// Depending on the deployment the endpoint's matching may be fuzzy,
    /// so callers must filter for exact names themselves; this method
    /// only maps the page shape. Rows missing an id or name are dropped
    /// with a warning rather than failing the search.
    pub async fn find_versions(&self, name: &str) -> SyncResult<Vec<ReleaseRecord>> {
        let url = format!(
            "{}/rest/api/3/project/{}/version",
            self.base_url, self.project_key
        );
        let resp = self
            .request(Method::GET, &url)
            .query(&[("query", name)])
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(SyncError::upstream(status, body));
        }

        let page: JiraVersionPage = serde_json::from_str(&body)
            .map_err(|_| SyncError::malformed("version search", body.clone()))?;
        debug!(
            query = name,
            total = page.total,
            returned = page.values.len(),
            "version search answered"
        );

        let mut releases = Vec::with_capacity(page.values.len());
        for version in page.values {
            match version.into_release() {
                Some(release) => releases.push(release),
                None => warn!(query = name, "dropping version row without id or name"),
            }
        }
        Ok(releases)
    }

    /// Create a release record in the configured project.
    ///
    /// The tracker sometimes embeds `errorMessages`/`errors` in an
    /// otherwise-2xx response; those are upstream failures, not
    /// successes, and are detected explicitly.
    pub async fn create_version(&self, name: &str, project_id: &str) -> SyncResult<ReleaseRecord> {
        let url = format!("{}/rest/api/3/version", self.base_url);
        let request = CreateVersionRequest {
            name: name.to_string(),
            project_id: project_id.to_string(),
        };
        let resp = self
            .request(Method::POST, &url)
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(SyncError::upstream(status, body));
        }

        let indicator: JiraErrorBody = serde_json::from_str(&body).unwrap_or_default();
        if indicator.is_error() {
            return Err(SyncError::upstream(status, body));
        }

        let version: JiraVersion = serde_json::from_str(&body)
            .map_err(|_| SyncError::malformed("create version", body.clone()))?;
        version
            .into_release()
            .ok_or_else(|| SyncError::malformed("create version", body))
    }

    /// Append the release to an issue's fix-version field.
    ///
    /// The tracker answers exactly 204 No Content on success; any other
    /// status, 2xx included, is a failure.
    pub async fn add_fix_version(&self, issue_key: &str, release_name: &str) -> SyncResult<()> {
        let url = format!("{}/rest/api/3/issue/{}", self.base_url, issue_key);
        let payload = serde_json::json!({
            "update": {
                "fixVersions": [
                    { "add": { "name": release_name } }
                ]
            }
        });
        let resp = self
            .request(Method::PUT, &url)
            .json(&payload)
            .send()
            .await?;

        let status = resp.status();
        if status != StatusCode::NO_CONTENT {
            let body = resp.text().await.unwrap_or_default();
            return Err(SyncError::upstream(status, body));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> JiraConfig {
        JiraConfig {
            base_url: "https://example.atlassian.net/".to_string(),
            project_key: "PROJ".to_string(),
            user: "bot@example.com".to_string(),
            token: "secret".to_string(),
            timeout_secs: 30,
        }
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let client = JiraClient::new(&config()).unwrap();
        assert_eq!(client.base_url, "https://example.atlassian.net");
        assert_eq!(client.project_key, "PROJ");
    }
}
