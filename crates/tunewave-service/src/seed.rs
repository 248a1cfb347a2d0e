//! First-start seeding: default settings and the bootstrap admin account.

use chrono::Utc;

use tunewave_core::{AccountType, AppSettings, Role, User, UserId, DEFAULT_PAYOUT_RATE};
use tunewave_store::Store;

use crate::config::ServiceConfig;
use crate::error::ApiError;

/// Seed the store on startup.
///
/// Writes default settings when none exist and creates the bootstrap super
/// admin account from the configured credentials. Both writes are skipped
/// when the record is already present, so seeding is safe to run on every
/// start.
pub fn seed<S: Store>(store: &S, config: &ServiceConfig) -> Result<(), ApiError> {
    if store.get_settings()?.is_none() {
        store.put_settings(&AppSettings::default())?;
        tracing::info!("Default settings written");
    }

    let email = config.admin_email.trim().to_lowercase();
    if store.get_user_by_email(&email)?.is_none() {
        let password_hash = bcrypt::hash(&config.admin_password, bcrypt::DEFAULT_COST)
            .map_err(|e| ApiError::Internal(format!("password hashing failed: {e}")))?;

        let admin = User {
            id: UserId::generate(),
            name: config.admin_name.clone(),
            avatar: format!("https://i.pravatar.cc/150?u={email}"),
            email,
            password_hash,
            role: Role::SuperAdmin,
            account_type: AccountType::NormalArtist,
            subscription_expiry: None,
            payout_rate: DEFAULT_PAYOUT_RATE,
            created_at: Utc::now(),
        };
        store.put_user(&admin)?;
        tracing::info!(user_id = %admin.id, "Bootstrap admin account created");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tunewave_store::RocksStore;

    #[test]
    fn seed_is_idempotent() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = RocksStore::open(dir.path()).unwrap();
        let config = ServiceConfig::default();

        seed(&store, &config).unwrap();
        let first = store
            .get_user_by_email(&config.admin_email)
            .unwrap()
            .unwrap();
        assert_eq!(first.role, Role::SuperAdmin);

        // A second run must not replace the admin or the settings.
        seed(&store, &config).unwrap();
        let second = store
            .get_user_by_email(&config.admin_email)
            .unwrap()
            .unwrap();
        assert_eq!(first.id, second.id);
        assert_eq!(store.list_users().unwrap().len(), 1);
    }
}
