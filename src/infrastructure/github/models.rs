//! Wire models for the source host's releases API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A release object as the source host returns it.
///
/// Everything except the id is optional; the id is the one field no
/// operation can proceed without, so its absence fails deserialization
/// and is mapped to a malformed-response error by the client.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubRelease {
    pub id: u64,
    pub tag_name: Option<String>,
    pub name: Option<String>,
    pub body: Option<String>,
    pub html_url: Option<String>,
    pub draft: Option<bool>,
    pub prerelease: Option<bool>,
    pub published_at: Option<DateTime<Utc>>,
}

/// Body of `PATCH /repos/{owner}/{repo}/releases/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateReleaseRequest {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_deserializes_from_api_shape() {
        let json = r###"{
            "id": 987654,
            "tag_name": "release/prod/2.3.0-RC.4",
            "name": "release/prod/2.3.0-RC.4",
            "body": "## What's Changed\n* PROJ-1 Fix by @alice in https://example.com/pull/1\n",
            "html_url": "https://github.com/acme/widget/releases/tag/release%2Fprod%2F2.3.0-RC.4",
            "draft": false,
            "prerelease": true,
            "published_at": "2024-06-01T12:00:00Z"
        }"###;
        let release: GitHubRelease = serde_json::from_str(json).unwrap();
        assert_eq!(release.id, 987654);
        assert_eq!(release.tag_name.as_deref(), Some("release/prod/2.3.0-RC.4"));
        assert_eq!(release.prerelease, Some(true));
        assert!(release.body.unwrap().contains("PROJ-1"));
    }

    #[test]
    fn test_release_requires_id() {
        let json = r#"{"tag_name": "v1.0.0"}"#;
        assert!(serde_json::from_str::<GitHubRelease>(json).is_err());
    }

    #[test]
    fn test_release_tolerates_null_body() {
        let json = r#"{"id": 1, "body": null}"#;
        let release: GitHubRelease = serde_json::from_str(json).unwrap();
        assert!(release.body.is_none());
    }
}
