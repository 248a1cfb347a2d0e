//! Router configuration.
//!
//! This module sets up the Axum router with all routes and middleware.

use std::sync::Arc;
use std::time::Duration;

use axum::routing::{delete, get, post, put};
use axum::Router;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{admin, auth, health, songs, tickets, wallet};
use crate::state::AppState;

/// Maximum concurrent requests for the API surface.
const API_MAX_CONCURRENT_REQUESTS: usize = 100;

/// Create the service router with all routes and middleware.
///
/// # Routes
///
/// ## Public
/// - `GET /health` - Health check
/// - `POST /api/auth/register` - Register an artist account
/// - `POST /api/auth/login` - Log in
///
/// ## Authenticated (JWT bearer)
/// - `GET /api/auth/me` - Current user profile
/// - `POST /api/auth/change-password` - Change password
/// - `POST /api/songs` - Submit a song (active subscription required)
/// - `POST /api/songs/paid-submission` - Subscribe and submit in one step
/// - `GET /api/songs/mine` - The caller's submissions
/// - `GET /api/songs/subscription-price` - Price for the caller's tier
/// - `GET /api/wallet` - Wallet summary and transaction feed
/// - `POST /api/wallet/withdrawals` - Request a withdrawal
/// - `POST /api/tickets` - Open a support ticket
/// - `GET /api/tickets/mine` - The caller's tickets
/// - `POST /api/tickets/:id/replies` - Reply to a ticket
///
/// ## Admin (JWT bearer, admin role)
/// - Song review, earnings, user management, withdrawal processing,
///   credits, financials, tickets, and settings under `/api/admin`
pub fn create_router(state: AppState) -> Router {
    let cors_origins = state.config.cors_origins.clone();
    let max_body_bytes = state.config.max_body_bytes;
    let request_timeout_seconds = state.config.request_timeout_seconds;

    let cors = build_cors_layer(&cors_origins);

    let state = Arc::new(state);

    let admin_routes = Router::new()
        // Song review
        .route("/songs/pending", get(admin::list_pending_songs))
        .route("/songs/approved", get(admin::list_approved_songs))
        .route("/songs/:id/approve", post(admin::approve_song))
        .route("/songs/:id/decline", post(admin::decline_song))
        .route("/songs/:id/earnings", put(admin::update_song_earnings))
        // User management
        .route("/users", get(admin::list_users))
        .route("/users/:id/role", put(admin::update_user_role))
        .route(
            "/users/:id/account-type",
            put(admin::update_user_account_type),
        )
        .route("/users/:id/payout-rate", put(admin::update_user_payout_rate))
        .route("/users/:id/subscription", post(admin::grant_subscription))
        .route("/users/:id/subscription", delete(admin::revoke_subscription))
        // Withdrawal processing
        .route("/withdrawals", get(admin::list_withdrawals))
        .route(
            "/withdrawals/:id/status",
            put(admin::update_withdrawal_status),
        )
        // Credits and financials
        .route("/credits", post(admin::add_credit))
        .route("/financials", get(admin::get_financials))
        // Tickets
        .route("/tickets", get(admin::list_all_tickets))
        .route("/tickets/:id/close", post(admin::close_ticket))
        // Settings
        .route("/settings/prices", put(admin::update_prices));

    let api_routes = Router::new()
        // Auth
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/me", get(auth::me))
        .route("/auth/change-password", post(auth::change_password))
        // Songs
        .route("/songs", post(songs::submit_song))
        .route("/songs/paid-submission", post(songs::paid_submission))
        .route("/songs/mine", get(songs::list_my_songs))
        .route("/songs/subscription-price", get(songs::subscription_price))
        // Wallet
        .route("/wallet", get(wallet::get_wallet))
        .route("/wallet/withdrawals", post(wallet::request_withdrawal))
        // Tickets
        .route("/tickets", post(tickets::create_ticket))
        .route("/tickets/mine", get(tickets::list_my_tickets))
        .route("/tickets/:id/replies", post(tickets::reply_to_ticket))
        // Admin surface
        .nest("/admin", admin_routes)
        .layer(ConcurrencyLimitLayer::new(API_MAX_CONCURRENT_REQUESTS));

    Router::new()
        // Health (public, no concurrency limit)
        .route("/health", get(health::health))
        .nest("/api", api_routes)
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            request_timeout_seconds,
        )))
        .with_state(state)
}

/// Build the CORS layer from configured origins.
fn build_cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
