//! HTTP request handlers.

pub mod admin;
pub mod auth;
pub mod health;
pub mod songs;
pub mod tickets;
pub mod wallet;

use chrono::{DateTime, Utc};
use serde::Serialize;

use tunewave_core::{AccountType, Role, User, UserId};

/// Acknowledgement body returned by mutating endpoints.
#[derive(Debug, Serialize)]
pub struct Ack {
    /// Always `true`; failures are reported through the error body.
    pub success: bool,
    /// Human-readable outcome message.
    pub message: String,
}

impl Ack {
    /// Build a success acknowledgement.
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// A user record as exposed by the API. Never carries the password hash.
#[derive(Debug, Serialize)]
pub struct UserView {
    /// The user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Avatar URL.
    pub avatar: String,
    /// Role.
    pub role: Role,
    /// Account tier.
    pub account_type: AccountType,
    /// Subscription expiry, if subscribed.
    pub subscription_expiry: Option<DateTime<Utc>>,
    /// Payout rate fraction.
    pub payout_rate: f64,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            avatar: user.avatar.clone(),
            role: user.role,
            account_type: user.account_type,
            subscription_expiry: user.subscription_expiry,
            payout_rate: user.payout_rate,
            created_at: user.created_at,
        }
    }
}
