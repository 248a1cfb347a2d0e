//! Registration, login, and password management handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use tunewave_core::{AccountType, Role, User, UserId, DEFAULT_PAYOUT_RATE};
use tunewave_store::Store;

use crate::auth::{issue_token, AuthUser};
use crate::error::ApiError;
use crate::handlers::{Ack, UserView};
use crate::state::AppState;

const MIN_PASSWORD_LEN: usize = 6;

/// Registration request.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Display name.
    pub name: String,
    /// Email address (unique).
    pub email: String,
    /// Plain-text password, hashed before storage.
    pub password: String,
}

/// Login request.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Email address.
    pub email: String,
    /// Plain-text password.
    pub password: String,
}

/// Issued-token response for register and login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    /// Bearer token for subsequent requests.
    pub token: String,
    /// The authenticated user.
    pub user: UserView,
}

/// Register a new artist account.
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let name = body.name.trim();
    let email = body.email.trim().to_lowercase();

    if name.is_empty() {
        return Err(ApiError::Validation("name is required".into()));
    }
    if !email.contains('@') {
        return Err(ApiError::Validation("a valid email is required".into()));
    }
    if body.password.len() < MIN_PASSWORD_LEN {
        return Err(ApiError::Validation(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }

    if state.store.get_user_by_email(&email)?.is_some() {
        return Err(ApiError::Conflict("email is already registered".into()));
    }

    let password_hash = bcrypt::hash(&body.password, bcrypt::DEFAULT_COST)
        .map_err(|e| ApiError::Internal(format!("password hashing failed: {e}")))?;

    let user = User {
        id: UserId::generate(),
        name: name.to_string(),
        avatar: format!("https://i.pravatar.cc/150?u={email}"),
        email,
        password_hash,
        role: Role::User,
        account_type: AccountType::NormalArtist,
        subscription_expiry: None,
        payout_rate: DEFAULT_PAYOUT_RATE,
        created_at: Utc::now(),
    };

    state.store.put_user(&user)?;

    tracing::info!(user_id = %user.id, "User registered");

    let token = issue_token(user.id, &state.config.jwt_secret, state.config.token_ttl_hours)?;
    Ok(Json(AuthResponse {
        token,
        user: UserView::from(&user),
    }))
}

/// Log in with email and password.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    // A missing account and a wrong password are indistinguishable to the
    // caller.
    let user = state
        .store
        .get_user_by_email(body.email.trim())?
        .ok_or(ApiError::Unauthorized)?;

    let valid = bcrypt::verify(&body.password, &user.password_hash)
        .map_err(|e| ApiError::Internal(format!("password verification failed: {e}")))?;
    if !valid {
        return Err(ApiError::Unauthorized);
    }

    tracing::info!(user_id = %user.id, "User logged in");

    let token = issue_token(user.id, &state.config.jwt_secret, state.config.token_ttl_hours)?;
    Ok(Json(AuthResponse {
        token,
        user: UserView::from(&user),
    }))
}

/// Password change request.
#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    /// The current password, verified before the change.
    pub current_password: String,
    /// The new password.
    pub new_password: String,
}

/// Change the authenticated user's password.
pub async fn change_password(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    Json(body): Json<ChangePasswordRequest>,
) -> Result<Json<Ack>, ApiError> {
    let mut user = auth.user;

    let valid = bcrypt::verify(&body.current_password, &user.password_hash)
        .map_err(|e| ApiError::Internal(format!("password verification failed: {e}")))?;
    if !valid {
        return Err(ApiError::Validation("incorrect current password".into()));
    }

    if body.new_password.len() < MIN_PASSWORD_LEN {
        return Err(ApiError::Validation(format!(
            "new password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }

    user.password_hash = bcrypt::hash(&body.new_password, bcrypt::DEFAULT_COST)
        .map_err(|e| ApiError::Internal(format!("password hashing failed: {e}")))?;
    state.store.put_user(&user)?;

    tracing::info!(user_id = %user.id, "Password changed");

    Ok(Json(Ack::ok("Password updated successfully!")))
}

/// Get the authenticated user's own profile.
pub async fn me(auth: AuthUser) -> Json<UserView> {
    Json(UserView::from(&auth.user))
}
