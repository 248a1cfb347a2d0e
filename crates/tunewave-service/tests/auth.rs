//! Registration, login, and password change integration tests.

mod common;

use axum::http::StatusCode;
use common::TestHarness;
use serde_json::json;

// ============================================================================
// Registration
// ============================================================================

#[tokio::test]
async fn register_returns_token_and_profile() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .post("/api/auth/register")
        .json(&json!({
            "name": "Luna",
            "email": "luna@example.com",
            "password": "hunter22",
        }))
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert!(body["token"].as_str().is_some());
    assert_eq!(body["user"]["email"], "luna@example.com");
    assert_eq!(body["user"]["role"], "user");
    assert_eq!(body["user"]["account_type"], "normal_artist");
    // The password hash must never appear in an API view.
    assert!(body["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn register_rejects_duplicate_email() {
    let harness = TestHarness::new();
    harness.register("Luna", "luna@example.com", "hunter22").await;

    let response = harness
        .server
        .post("/api/auth/register")
        .json(&json!({
            "name": "Other Luna",
            "email": "LUNA@example.com",
            "password": "hunter22",
        }))
        .await;

    // Email matching is case-insensitive.
    response.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn register_rejects_short_password() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .post("/api/auth/register")
        .json(&json!({
            "name": "Luna",
            "email": "luna@example.com",
            "password": "short",
        }))
        .await;

    response.assert_status_bad_request();
}

// ============================================================================
// Login
// ============================================================================

#[tokio::test]
async fn login_with_correct_password() {
    let harness = TestHarness::new();
    harness.register("Luna", "luna@example.com", "hunter22").await;

    let token = harness.login("luna@example.com", "hunter22").await;

    let response = harness
        .server
        .get("/api/auth/me")
        .add_header("authorization", TestHarness::bearer(&token))
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["name"], "Luna");
}

#[tokio::test]
async fn login_with_wrong_password_fails() {
    let harness = TestHarness::new();
    harness.register("Luna", "luna@example.com", "hunter22").await;

    let response = harness
        .server
        .post("/api/auth/login")
        .json(&json!({ "email": "luna@example.com", "password": "wrong-pass" }))
        .await;

    response.assert_status_unauthorized();
}

#[tokio::test]
async fn login_with_unknown_email_fails() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .post("/api/auth/login")
        .json(&json!({ "email": "nobody@example.com", "password": "whatever1" }))
        .await;

    response.assert_status_unauthorized();
}

// ============================================================================
// Token handling
// ============================================================================

#[tokio::test]
async fn me_without_token_fails() {
    let harness = TestHarness::new();

    let response = harness.server.get("/api/auth/me").await;

    response.assert_status_unauthorized();
}

#[tokio::test]
async fn me_with_garbage_token_fails() {
    let harness = TestHarness::new();

    let response = harness
        .server
        .get("/api/auth/me")
        .add_header("authorization", "Bearer not-a-real-token")
        .await;

    response.assert_status_unauthorized();
}

// ============================================================================
// Password change
// ============================================================================

#[tokio::test]
async fn change_password_requires_current_password() {
    let harness = TestHarness::new();
    let token = harness.register("Luna", "luna@example.com", "hunter22").await;

    let response = harness
        .server
        .post("/api/auth/change-password")
        .add_header("authorization", TestHarness::bearer(&token))
        .json(&json!({
            "current_password": "wrong-pass",
            "new_password": "newpassword",
        }))
        .await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn change_password_invalidates_old_password() {
    let harness = TestHarness::new();
    let token = harness.register("Luna", "luna@example.com", "hunter22").await;

    harness
        .server
        .post("/api/auth/change-password")
        .add_header("authorization", TestHarness::bearer(&token))
        .json(&json!({
            "current_password": "hunter22",
            "new_password": "newpassword",
        }))
        .await
        .assert_status_ok();

    // Old password no longer works; new one does.
    harness
        .server
        .post("/api/auth/login")
        .json(&json!({ "email": "luna@example.com", "password": "hunter22" }))
        .await
        .assert_status_unauthorized();
    harness.login("luna@example.com", "newpassword").await;
}

// ============================================================================
// Bootstrap admin
// ============================================================================

#[tokio::test]
async fn seeded_admin_can_log_in() {
    let harness = TestHarness::new();

    let token = harness.admin_token().await;

    let response = harness
        .server
        .get("/api/auth/me")
        .add_header("authorization", TestHarness::bearer(&token))
        .await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["role"], "super_admin");
}
