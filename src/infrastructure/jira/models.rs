//! Wire models for the tracker's REST v3 surface.
//!
//! Every response is deserialized into a typed value with optional
//! fields; required fields are checked before use so a missing field
//! surfaces as a malformed-response error instead of an unrelated crash.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::models::ReleaseRecord;

/// Jira serves ids inconsistently across endpoints: project ids arrive
/// as JSON strings, version `projectId`s as numbers. Accept either and
/// normalize to `String`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum JiraId {
    Num(u64),
    Str(String),
}

impl JiraId {
    pub fn into_string(self) -> String {
        match self {
            JiraId::Num(n) => n.to_string(),
            JiraId::Str(s) => s,
        }
    }
}

/// Response of `GET /rest/api/3/project/{key}`. Only the id is consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct JiraProject {
    pub id: Option<JiraId>,
    pub key: Option<String>,
    pub name: Option<String>,
}

/// One version record as the tracker returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct JiraVersion {
    pub id: Option<JiraId>,
    pub name: Option<String>,
    #[serde(rename = "projectId")]
    pub project_id: Option<JiraId>,
    pub released: Option<bool>,
    pub archived: Option<bool>,
}

impl JiraVersion {
    /// Promote to a domain record; `None` when id or name is missing.
    pub fn into_release(self) -> Option<ReleaseRecord> {
        Some(ReleaseRecord {
            id: self.id?.into_string(),
            name: self.name?,
            project_id: self.project_id.map(JiraId::into_string),
        })
    }
}

/// Page shape of `GET /rest/api/3/project/{key}/version`.
#[derive(Debug, Clone, Deserialize)]
pub struct JiraVersionPage {
    pub total: Option<u64>,
    #[serde(rename = "isLast")]
    pub is_last: Option<bool>,
    #[serde(default)]
    pub values: Vec<JiraVersion>,
}

/// Body of `POST /rest/api/3/version`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateVersionRequest {
    pub name: String,
    #[serde(rename = "projectId")]
    pub project_id: String,
}

/// Error payload the tracker embeds in otherwise-successful responses.
///
/// Jira can answer HTTP 200 with `errorMessages`/`errors` in the body
/// instead of a non-2xx status; callers must check explicitly.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JiraErrorBody {
    #[serde(rename = "errorMessages", default)]
    pub error_messages: Vec<String>,
    #[serde(default)]
    pub errors: serde_json::Map<String, Value>,
}

impl JiraErrorBody {
    pub fn is_error(&self) -> bool {
        !self.error_messages.is_empty() || !self.errors.is_empty()
    }
}

// ─── tests ───────────────────────────────────────────────────────────────
