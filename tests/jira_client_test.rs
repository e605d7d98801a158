/// Integration tests for the tracker (Jira) client
///
/// These tests run the client against a mock HTTP server and verify the
/// request/response mapping of every operation:
/// - Project id lookup (status and malformed-body handling)
/// - Version search (query forwarding, page-shape mapping)
/// - Version creation (including error payloads embedded in HTTP 200)
/// - Fix-version association (exact 204 contract)
use fixversion::domain::models::JiraConfig;
use fixversion::domain::SyncError;
use fixversion::infrastructure::jira::JiraClient;
use mockito::{Matcher, Server, ServerGuard};

/// Base64 of `bot@example.com:secret`, the test basic-auth pair.
const BASIC_AUTH: &str = "Basic Ym90QGV4YW1wbGUuY29tOnNlY3JldA==";

fn client_for(server: &ServerGuard) -> JiraClient {
    let config = JiraConfig {
        base_url: server.url(),
        project_key: "PROJ".to_string(),
        user: "bot@example.com".to_string(),
        token: "secret".to_string(),
        timeout_secs: 5,
    };
    JiraClient::new(&config).expect("Failed to build client")
}

// ─── project id ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_fetch_project_id_success() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/rest/api/3/project/PROJ")
        .match_header("authorization", BASIC_AUTH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": "10000", "key": "PROJ", "name": "Widget"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let id = client.fetch_project_id().await.expect("Lookup failed");

    assert_eq!(id, "10000");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_project_id_upstream_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/rest/api/3/project/PROJ")
        .with_status(404)
        .with_body(r#"{"errorMessages": ["No project could be found with key 'PROJ'."]}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.fetch_project_id().await.unwrap_err();

    match err {
        SyncError::Upstream { status, body } => {
            assert_eq!(status, 404);
            assert!(body.contains("No project could be found"));
        }
        other => panic!("Expected Upstream, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_project_id_missing_field_is_malformed() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/rest/api/3/project/PROJ")
        .with_status(200)
        .with_body(r#"{"key": "PROJ"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.fetch_project_id().await.unwrap_err();

    assert!(matches!(err, SyncError::MalformedResponse { .. }));
}

// ─── version search ──────────────────────────────────────────────────────

#[tokio::test]
async fn test_find_versions_forwards_query_and_maps_page() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/rest/api/3/project/PROJ/version")
        .match_query(Matcher::UrlEncoded("query".into(), "v2.3.0".into()))
        .match_header("authorization", BASIC_AUTH)
        .with_status(200)
        .with_body(
            r#"{
                "total": 2,
                "isLast": true,
                "values": [
                    {"id": "10042", "name": "v2.3.0", "projectId": 10000},
                    {"id": "10043", "name": "v2.3.0-hotfix", "projectId": 10000}
                ]
            }"#,
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let versions = client.find_versions("v2.3.0").await.expect("Search failed");

    // Fuzzy results come back as-is; exact filtering is the caller's job.
    assert_eq!(versions.len(), 2);
    assert_eq!(versions[0].id, "10042");
    assert_eq!(versions[0].name, "v2.3.0");
    assert_eq!(versions[0].project_id.as_deref(), Some("10000"));
    assert_eq!(versions[1].name, "v2.3.0-hotfix");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_find_versions_empty_page() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/rest/api/3/project/PROJ/version")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"total": 0, "isLast": true, "values": []}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let versions = client.find_versions("v9.9.9").await.expect("Search failed");

    assert!(versions.is_empty());
}

#[tokio::test]
async fn test_find_versions_upstream_error() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/rest/api/3/project/PROJ/version")
        .match_query(Matcher::Any)
        .with_status(500)
        .with_body("upstream exploded")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.find_versions("v1.0.0").await.unwrap_err();

    assert!(matches!(err, SyncError::Upstream { status: 500, .. }));
}

#[tokio::test]
async fn test_find_versions_drops_rows_without_required_fields() {
    let mut server = Server::new_async().await;
    server
        .mock("GET", "/rest/api/3/project/PROJ/version")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            r#"{
                "total": 2,
                "values": [
                    {"name": "orphan-without-id"},
                    {"id": "10044", "name": "v3.0.0"}
                ]
            }"#,
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let versions = client.find_versions("v3.0.0").await.expect("Search failed");

    assert_eq!(versions.len(), 1);
    assert_eq!(versions[0].name, "v3.0.0");
}

// ─── version creation ────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_version_success() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/rest/api/3/version")
        .match_header("authorization", BASIC_AUTH)
        .match_body(Matcher::Json(serde_json::json!({
            "name": "v2.3.0",
            "projectId": "10000"
        })))
        .with_status(201)
        .with_body(r#"{"id": "10042", "name": "v2.3.0", "projectId": 10000}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let release = client
        .create_version("v2.3.0", "10000")
        .await
        .expect("Create failed");

    assert_eq!(release.id, "10042");
    assert_eq!(release.name, "v2.3.0");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_version_detects_error_embedded_in_200() {
    // Jira can answer HTTP 200 with an error payload instead of a non-2xx
    // status; the client must not treat that as success.
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/rest/api/3/version")
        .with_status(200)
        .with_body(r#"{"errorMessages": ["A version with this name already exists in this project."], "errors": {}}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.create_version("v2.3.0", "10000").await.unwrap_err();

    match err {
        SyncError::Upstream { status, body } => {
            assert_eq!(status, 200);
            assert!(body.contains("already exists"));
        }
        other => panic!("Expected Upstream, got {other:?}"),
    }
}

#[tokio::test]
async fn test_create_version_body_without_id_is_malformed() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/rest/api/3/version")
        .with_status(201)
        .with_body(r#"{"name": "v2.3.0"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.create_version("v2.3.0", "10000").await.unwrap_err();

    assert!(matches!(err, SyncError::MalformedResponse { .. }));
}

// ─── issue association ───────────────────────────────────────────────────

#[tokio::test]
async fn test_add_fix_version_sends_update_payload() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/rest/api/3/issue/PROJ-123")
        .match_header("authorization", BASIC_AUTH)
        .match_body(Matcher::Json(serde_json::json!({
            "update": {
                "fixVersions": [
                    { "add": { "name": "v2.3.0" } }
                ]
            }
        })))
        .with_status(204)
        .create_async()
        .await;

    let client = client_for(&server);
    client
        .add_fix_version("PROJ-123", "v2.3.0")
        .await
        .expect("Association failed");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_add_fix_version_rejects_non_204_success() {
    // Success is exactly 204; a 200 means the update did not take the
    // expected shape.
    let mut server = Server::new_async().await;
    server
        .mock("PUT", "/rest/api/3/issue/PROJ-123")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.add_fix_version("PROJ-123", "v2.3.0").await.unwrap_err();

    assert!(matches!(err, SyncError::Upstream { status: 200, .. }));
}

#[tokio::test]
async fn test_add_fix_version_upstream_error() {
    let mut server = Server::new_async().await;
    server
        .mock("PUT", "/rest/api/3/issue/PROJ-404")
        .with_status(404)
        .with_body(r#"{"errorMessages": ["Issue does not exist or you do not have permission to see it."]}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.add_fix_version("PROJ-404", "v2.3.0").await.unwrap_err();

    match err {
        SyncError::Upstream { status, body } => {
            assert_eq!(status, 404);
            assert!(body.contains("does not exist"));
        }
        other => panic!("Expected Upstream, got {other:?}"),
    }
}
