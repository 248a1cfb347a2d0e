//! Authentication: JWT issue/verify and request extractors.
//!
//! This module provides extractors for:
//! - `AuthUser` - any authenticated user, loaded from the store
//! - `AuthAdmin` - an authenticated user with admin privileges

use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use tunewave_core::{User, UserId};
use tunewave_store::Store;

use crate::error::ApiError;
use crate::state::AppState;

/// JWT claims carried by issued tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Subject (user ID).
    pub sub: String,
    /// Expiration time (unix seconds).
    pub exp: i64,
    /// Issued at (unix seconds).
    pub iat: i64,
}

/// Issue a signed bearer token for a user.
///
/// # Errors
///
/// Returns an error if token encoding fails.
pub fn issue_token(user_id: UserId, secret: &str, ttl_hours: i64) -> Result<String, ApiError> {
    let now = Utc::now();
    let claims = JwtClaims {
        sub: user_id.to_string(),
        exp: (now + Duration::hours(ttl_hours)).timestamp(),
        iat: now.timestamp(),
    };

    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| ApiError::Internal(format!("token encoding failed: {e}")))
}

/// Verify a bearer token and return the subject user ID.
fn verify_token(token: &str, secret: &str) -> Result<UserId, ApiError> {
    let data = jsonwebtoken::decode::<JwtClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| ApiError::Unauthorized)?;

    data.claims.sub.parse().map_err(|_| ApiError::Unauthorized)
}

/// An authenticated user.
///
/// The user record is loaded fresh from the store on every request so role
/// and payout-rate changes take effect immediately.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The authenticated user record.
    pub user: User,
}

impl FromRequestParts<Arc<AppState>> for AuthUser {
    type Rejection = ApiError;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut Parts,
        state: &'life1 Arc<AppState>,
    ) -> ::core::pin::Pin<
        Box<
            dyn ::core::future::Future<Output = Result<Self, Self::Rejection>>
                + ::core::marker::Send
                + 'async_trait,
        >,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let auth_header = parts
                .headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .ok_or(ApiError::Unauthorized)?;

            let token = auth_header
                .strip_prefix("Bearer ")
                .ok_or(ApiError::Unauthorized)?;

            let user_id = verify_token(token, &state.config.jwt_secret)?;

            let user = state
                .store
                .get_user(&user_id)?
                .ok_or(ApiError::Unauthorized)?;

            Ok(AuthUser { user })
        })
    }
}

/// An authenticated user with admin privileges.
#[derive(Debug, Clone)]
pub struct AuthAdmin {
    /// The authenticated admin record.
    pub user: User,
}

impl FromRequestParts<Arc<AppState>> for AuthAdmin {
    type Rejection = ApiError;

    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut Parts,
        state: &'life1 Arc<AppState>,
    ) -> ::core::pin::Pin<
        Box<
            dyn ::core::future::Future<Output = Result<Self, Self::Rejection>>
                + ::core::marker::Send
                + 'async_trait,
        >,
    >
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            let AuthUser { user } = AuthUser::from_request_parts(parts, state).await?;

            if !user.role.is_admin() {
                return Err(ApiError::Forbidden("admin access required".into()));
            }

            Ok(AuthAdmin { user })
        })
    }
}
