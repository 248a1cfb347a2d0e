//! The wallet ledger engine.
//!
//! Derives a user's financial summary from the full song, withdrawal, and
//! credit collections. The summary is never cached or stored; every caller
//! recomputes it from source records so the balance cannot drift.

use crate::error::LedgerError;
use crate::wallet::{Credit, UnifiedTransaction, WalletSummary, Withdrawal, WithdrawalStatus};
use crate::{Song, SongStatus, User, UserId};

/// Compute the authoritative financial summary for `user_id`.
///
/// Only approved songs contribute earnings, at the user's payout rate.
/// Completed withdrawals reduce the balance permanently; pending withdrawals
/// hold their amount against it. The unified feed merges withdrawals and
/// credits, newest first, with ties kept in encounter order (withdrawals
/// before credits) by the stable sort.
///
/// # Errors
///
/// Returns [`LedgerError::UserNotFound`] if `user_id` matches no user.
pub fn wallet_summary(
    user_id: UserId,
    users: &[User],
    songs: &[Song],
    withdrawals: &[Withdrawal],
    credits: &[Credit],
) -> Result<WalletSummary, LedgerError> {
    let user = users
        .iter()
        .find(|u| u.id == user_id)
        .ok_or_else(|| LedgerError::UserNotFound {
            user_id: user_id.to_string(),
        })?;

    let song_earnings: f64 = songs
        .iter()
        .filter(|s| s.user_id == user_id && s.status == SongStatus::Approved)
        .map(|s| s.total_earnings * user.payout_rate)
        .sum();

    let user_withdrawals: Vec<&Withdrawal> =
        withdrawals.iter().filter(|w| w.user_id == user_id).collect();
    let user_credits: Vec<&Credit> = credits.iter().filter(|c| c.user_id == user_id).collect();

    let total_credits: f64 = user_credits.iter().map(|c| c.amount).sum();
    let total_earnings = song_earnings + total_credits;

    let total_withdrawn: f64 = user_withdrawals
        .iter()
        .filter(|w| w.status == WithdrawalStatus::Completed)
        .map(|w| w.amount)
        .sum();

    let pending_withdrawals: f64 = user_withdrawals
        .iter()
        .filter(|w| w.status == WithdrawalStatus::Pending)
        .map(|w| w.amount)
        .sum();

    let available_balance = total_earnings - total_withdrawn - pending_withdrawals;

    let admin_name = |admin_id: &UserId| {
        users
            .iter()
            .find(|u| u.id == *admin_id)
            .map_or_else(|| "An Admin".to_string(), |u| u.name.clone())
    };

    let mut transactions: Vec<UnifiedTransaction> = user_withdrawals
        .iter()
        .map(|w| UnifiedTransaction::Withdrawal {
            withdrawal: (*w).clone(),
            admin_name: w.processed_by.as_ref().map(&admin_name),
        })
        .chain(user_credits.iter().map(|c| UnifiedTransaction::Credit {
            credit: (*c).clone(),
            admin_name: Some(admin_name(&c.admin_id)),
        }))
        .collect();

    // Stable sort keeps encounter order for identical timestamps.
    transactions.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));

    Ok(WalletSummary {
        total_earnings,
        total_withdrawn,
        pending_withdrawals,
        available_balance,
        transactions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AccountType, CreditId, Role, WithdrawalId};
    use chrono::{Duration, Utc};

    fn user(payout_rate: f64) -> User {
        User {
            id: UserId::generate(),
            name: "Melody Maker".into(),
            email: "melody@example.com".into(),
            avatar: String::new(),
            password_hash: String::new(),
            role: Role::User,
            account_type: AccountType::NormalArtist,
            subscription_expiry: None,
            payout_rate,
            created_at: Utc::now(),
        }
    }

    fn song(user_id: UserId, status: SongStatus, total_earnings: f64) -> Song {
        Song {
            id: crate::SongId::generate(),
            user_id,
            title: "Echoes of Tomorrow".into(),
            author: "Alex Ray".into(),
            singer: "Luna".into(),
            description: String::new(),
            tags: vec![],
            status,
            submitted_at: Utc::now(),
            cover_art: String::new(),
            audio_url: String::new(),
            banner_url: String::new(),
            actioned_by: None,
            actioned_at: None,
            total_earnings,
        }
    }

    fn withdrawal(user_id: UserId, amount: f64, status: WithdrawalStatus) -> Withdrawal {
        Withdrawal {
            id: WithdrawalId::generate(),
            user_id,
            amount,
            upi_id: "melody@upi".into(),
            upi_name: "Melody Maker".into(),
            status,
            requested_at: Utc::now(),
            processed_at: None,
            processed_by: None,
        }
    }

    fn credit(user_id: UserId, admin_id: UserId, amount: f64) -> Credit {
        Credit {
            id: CreditId::generate(),
            user_id,
            admin_id,
            amount,
            note: "promo".into(),
            created_at: Utc::now(),
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn unknown_user_is_an_error() {
        let result = wallet_summary(UserId::generate(), &[], &[], &[], &[]);
        assert!(matches!(result, Err(LedgerError::UserNotFound { .. })));
    }

    #[test]
    fn empty_wallet_is_all_zero() {
        let u = user(0.8);
        let summary = wallet_summary(u.id, &[u.clone()], &[], &[], &[]).unwrap();
        assert_close(summary.total_earnings, 0.0);
        assert_close(summary.total_withdrawn, 0.0);
        assert_close(summary.pending_withdrawals, 0.0);
        assert_close(summary.available_balance, 0.0);
        assert!(summary.transactions.is_empty());
    }

    #[test]
    fn approved_song_earnings_apply_payout_rate() {
        // One approved song, gross 1250 at 80% payout => 1000 available.
        let u = user(0.8);
        let songs = vec![song(u.id, SongStatus::Approved, 1250.0)];
        let summary = wallet_summary(u.id, &[u.clone()], &songs, &[], &[]).unwrap();
        assert_close(summary.total_earnings, 1000.0);
        assert_close(summary.available_balance, 1000.0);
    }

    #[test]
    fn non_approved_songs_do_not_count() {
        let u = user(0.8);
        let songs = vec![
            song(u.id, SongStatus::Declined, 500.0),
            song(u.id, SongStatus::WaitingForAction, 700.0),
        ];
        let summary = wallet_summary(u.id, &[u.clone()], &songs, &[], &[]).unwrap();
        assert_close(summary.total_earnings, 0.0);
    }

    #[test]
    fn other_users_records_are_excluded() {
        let u = user(0.8);
        let other = user(0.5);
        let songs = vec![song(other.id, SongStatus::Approved, 9999.0)];
        let credits = vec![credit(other.id, u.id, 300.0)];
        let summary =
            wallet_summary(u.id, &[u.clone(), other], &songs, &[], &credits).unwrap();
        assert_close(summary.total_earnings, 0.0);
    }

    #[test]
    fn balance_identity_holds() {
        let u = user(0.8);
        let admin = user(0.8);
        let songs = vec![song(u.id, SongStatus::Approved, 1250.0)];
        let withdrawals = vec![
            withdrawal(u.id, 300.0, WithdrawalStatus::Completed),
            withdrawal(u.id, 200.0, WithdrawalStatus::Pending),
            withdrawal(u.id, 150.0, WithdrawalStatus::Failed),
        ];
        let credits = vec![credit(u.id, admin.id, 200.0)];
        let summary =
            wallet_summary(u.id, &[u.clone(), admin], &songs, &withdrawals, &credits).unwrap();

        assert_close(summary.total_earnings, 1200.0);
        assert_close(summary.total_withdrawn, 300.0);
        assert_close(summary.pending_withdrawals, 200.0);
        assert_close(
            summary.available_balance,
            summary.total_earnings - summary.total_withdrawn - summary.pending_withdrawals,
        );
        // Failed withdrawals return to the balance.
        assert_close(summary.available_balance, 700.0);
    }

    #[test]
    fn summary_is_idempotent() {
        let u = user(0.8);
        let songs = vec![song(u.id, SongStatus::Approved, 1250.0)];
        let withdrawals = vec![withdrawal(u.id, 500.0, WithdrawalStatus::Pending)];

        let first = wallet_summary(u.id, &[u.clone()], &songs, &withdrawals, &[]).unwrap();
        let second = wallet_summary(u.id, &[u.clone()], &songs, &withdrawals, &[]).unwrap();
        assert_close(first.available_balance, second.available_balance);
        assert_close(first.total_earnings, second.total_earnings);
        assert_eq!(first.transactions.len(), second.transactions.len());
    }

    #[test]
    fn feed_is_sorted_newest_first_with_admin_names() {
        let u = user(0.8);
        let mut admin = user(0.8);
        admin.name = "Site Admin".into();

        let now = Utc::now();
        let mut w_old = withdrawal(u.id, 600.0, WithdrawalStatus::Completed);
        w_old.requested_at = now - Duration::days(2);
        w_old.processed_by = Some(admin.id);
        let mut c_new = credit(u.id, admin.id, 100.0);
        c_new.created_at = now;

        let summary = wallet_summary(
            u.id,
            &[u.clone(), admin],
            &[],
            &[w_old],
            &[c_new],
        )
        .unwrap();

        assert_eq!(summary.transactions.len(), 2);
        assert!(matches!(
            &summary.transactions[0],
            UnifiedTransaction::Credit { admin_name: Some(name), .. } if name == "Site Admin"
        ));
        assert!(matches!(
            &summary.transactions[1],
            UnifiedTransaction::Withdrawal { admin_name: Some(name), .. } if name == "Site Admin"
        ));
    }

    #[test]
    fn feed_tie_break_keeps_withdrawals_before_credits() {
        let u = user(0.8);
        let admin = user(0.8);
        let at = Utc::now();

        let mut w = withdrawal(u.id, 600.0, WithdrawalStatus::Pending);
        w.requested_at = at;
        let mut c = credit(u.id, admin.id, 100.0);
        c.created_at = at;

        let summary =
            wallet_summary(u.id, &[u.clone(), admin], &[], &[w], &[c]).unwrap();
        assert!(matches!(
            summary.transactions[0],
            UnifiedTransaction::Withdrawal { .. }
        ));
        assert!(matches!(
            summary.transactions[1],
            UnifiedTransaction::Credit { .. }
        ));
    }

    #[test]
    fn unresolvable_admin_gets_fallback_name() {
        let u = user(0.8);
        let ghost_admin = UserId::generate();
        let credits = vec![credit(u.id, ghost_admin, 50.0)];
        let summary = wallet_summary(u.id, &[u.clone()], &[], &[], &credits).unwrap();
        assert!(matches!(
            &summary.transactions[0],
            UnifiedTransaction::Credit { admin_name: Some(name), .. } if name == "An Admin"
        ));
    }
}
