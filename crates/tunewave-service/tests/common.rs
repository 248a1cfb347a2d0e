//! Common test utilities for tunewave integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;
use serde_json::json;
use tempfile::TempDir;

use tunewave_core::Role;
use tunewave_service::{create_router, seed, AppState, ServiceConfig};
use tunewave_store::{RocksStore, Store};

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// Direct store handle, for setup the API does not expose.
    pub store: Arc<RocksStore>,
    /// Temporary directory for the database (kept alive for test duration).
    pub _temp_dir: TempDir,
    /// The test configuration.
    pub config: ServiceConfig,
}

impl TestHarness {
    /// Create a new test harness with a fresh, seeded database.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let store = Arc::new(RocksStore::open(temp_dir.path()).expect("Failed to open store"));

        let config = ServiceConfig {
            listen_addr: "127.0.0.1:0".into(),
            data_dir: temp_dir.path().to_string_lossy().to_string(),
            jwt_secret: "test-secret".into(),
            token_ttl_hours: 1,
            cors_origins: vec!["*".into()],
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 30,
            admin_email: "admin@test.example".into(),
            admin_password: "admin-password".into(),
            admin_name: "Test Admin".into(),
        };

        seed::seed(store.as_ref(), &config).expect("Failed to seed store");

        let state = AppState::new(Arc::clone(&store), config.clone());
        let router: Router = create_router(state);

        let server = TestServer::new(router).expect("Failed to create test server");

        Self {
            server,
            store,
            _temp_dir: temp_dir,
            config,
        }
    }

    /// Register a user and return their bearer token.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> String {
        let response = self
            .server
            .post("/api/auth/register")
            .json(&json!({
                "name": name,
                "email": email,
                "password": password,
            }))
            .await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        body["token"].as_str().expect("token in response").to_string()
    }

    /// Log in and return the bearer token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .server
            .post("/api/auth/login")
            .json(&json!({ "email": email, "password": password }))
            .await;
        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        body["token"].as_str().expect("token in response").to_string()
    }

    /// Log in as the seeded bootstrap super admin.
    pub async fn admin_token(&self) -> String {
        self.login(&self.config.admin_email, &self.config.admin_password)
            .await
    }

    /// Elevate a registered user to the given role, bypassing the API.
    pub fn set_role(&self, email: &str, role: Role) {
        let mut user = self
            .store
            .get_user_by_email(email)
            .expect("store read")
            .expect("user exists");
        user.role = role;
        self.store.put_user(&user).expect("store write");
    }

    /// Bearer header value for a token.
    pub fn bearer(token: &str) -> String {
        format!("Bearer {token}")
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// Assert two monetary values match to within floating-point noise.
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

/// A valid song submission body for tests.
pub fn song_body(title: &str) -> serde_json::Value {
    json!({
        "title": title,
        "author": "Test Author",
        "singer": "Test Singer",
        "description": "A test track",
        "tags": ["test"],
        "banner_url": "https://example.com/banner.png",
        "audio_url": "https://example.com/audio.mp3",
    })
}
