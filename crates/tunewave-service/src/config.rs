//! Service configuration.

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Address to listen on (default: "0.0.0.0:8080").
    pub listen_addr: String,

    /// Path to the `RocksDB` data directory (default: "/data/tunewave").
    pub data_dir: String,

    /// Secret used to sign and verify JWT bearer tokens.
    pub jwt_secret: String,

    /// Issued token lifetime in hours (default: 24).
    pub token_ttl_hours: i64,

    /// CORS allowed origins.
    pub cors_origins: Vec<String>,

    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,

    /// Request timeout in seconds.
    pub request_timeout_seconds: u64,

    /// Email of the bootstrap admin account seeded on first start.
    pub admin_email: String,

    /// Password of the bootstrap admin account.
    pub admin_password: String,

    /// Display name of the bootstrap admin account.
    pub admin_name: String,
}

impl ServiceConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            listen_addr: std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".into()),
            data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| "/data/tunewave".into()),
            jwt_secret: std::env::var("JWT_SECRET")
                .unwrap_or_else(|_| "insecure-dev-secret".into()),
            token_ttl_hours: std::env::var("TOKEN_TTL_HOURS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(24),
            cors_origins: std::env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "*".into())
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
            max_body_bytes: std::env::var("MAX_BODY_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8 * 1024 * 1024), // 8MB; song submissions carry data URLs
            request_timeout_seconds: std::env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
            admin_email: std::env::var("ADMIN_EMAIL")
                .unwrap_or_else(|_| "admin@example.com".into()),
            admin_password: std::env::var("ADMIN_PASSWORD")
                .unwrap_or_else(|_| "change-me".into()),
            admin_name: std::env::var("ADMIN_NAME").unwrap_or_else(|_| "Admin User".into()),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".into(),
            data_dir: "/data/tunewave".into(),
            jwt_secret: "insecure-dev-secret".into(),
            token_ttl_hours: 24,
            cors_origins: vec!["*".into()],
            max_body_bytes: 8 * 1024 * 1024,
            request_timeout_seconds: 30,
            admin_email: "admin@example.com".into(),
            admin_password: "change-me".into(),
            admin_name: "Admin User".into(),
        }
    }
}
