//! User account types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::financials::DEFAULT_PAYOUT_RATE;
use crate::UserId;

/// A registered user (artist or administrator).
///
/// The payout rate is the fraction of a song's gross earnings credited to
/// the artist; the remainder is the platform's cut. It is fixed per user and
/// only changed by an admin action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// The user ID.
    pub id: UserId,

    /// Display name.
    pub name: String,

    /// Email address (unique, used for login).
    pub email: String,

    /// Avatar image URL.
    pub avatar: String,

    /// Bcrypt hash of the user's password. Never serialized into API views.
    pub password_hash: String,

    /// The user's role.
    pub role: Role,

    /// Artist account tier; determines the subscription price.
    pub account_type: AccountType,

    /// When the current submission subscription expires, if any.
    pub subscription_expiry: Option<DateTime<Utc>>,

    /// Fraction of gross song earnings paid to this user. Invariant: 0..=1.
    #[serde(default = "default_payout_rate")]
    pub payout_rate: f64,

    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

fn default_payout_rate() -> f64 {
    DEFAULT_PAYOUT_RATE
}

impl User {
    /// Whether the user holds an unexpired submission subscription at `now`.
    #[must_use]
    pub fn has_active_subscription(&self, now: DateTime<Utc>) -> bool {
        self.subscription_expiry.is_some_and(|expiry| expiry > now)
    }
}

/// User roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Regular artist account.
    User,

    /// Administrator: reviews songs, processes withdrawals, grants credits.
    Admin,

    /// Super administrator: everything an admin can do, plus role changes.
    SuperAdmin,
}

impl Role {
    /// Whether this role carries administrative privileges.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin | Self::SuperAdmin)
    }
}

/// Artist account tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    /// Individual artist.
    NormalArtist,

    /// Label account (higher subscription price).
    Label,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn test_user() -> User {
        User {
            id: UserId::generate(),
            name: "Melody Maker".into(),
            email: "melody@example.com".into(),
            avatar: String::new(),
            password_hash: String::new(),
            role: Role::User,
            account_type: AccountType::NormalArtist,
            subscription_expiry: None,
            payout_rate: 0.8,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn subscription_active_only_before_expiry() {
        let now = Utc::now();
        let mut user = test_user();
        assert!(!user.has_active_subscription(now));

        user.subscription_expiry = Some(now + Duration::days(30));
        assert!(user.has_active_subscription(now));

        user.subscription_expiry = Some(now - Duration::days(1));
        assert!(!user.has_active_subscription(now));
    }

    #[test]
    fn role_admin_privileges() {
        assert!(!Role::User.is_admin());
        assert!(Role::Admin.is_admin());
        assert!(Role::SuperAdmin.is_admin());
    }

    #[test]
    fn payout_rate_defaults_when_missing() {
        // Older records may predate the payout_rate field.
        let json = serde_json::json!({
            "id": UserId::generate().to_string(),
            "name": "Old Record",
            "email": "old@example.com",
            "avatar": "",
            "password_hash": "",
            "role": "user",
            "account_type": "normal_artist",
            "subscription_expiry": null,
            "created_at": Utc::now().to_rfc3339(),
        });
        let user: User = serde_json::from_value(json).unwrap();
        assert!((user.payout_rate - DEFAULT_PAYOUT_RATE).abs() < f64::EPSILON);
    }
}
