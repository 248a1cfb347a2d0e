//! Platform-wide financial rollups for admin oversight.

use std::collections::HashMap;

use serde::Serialize;

use crate::wallet::{Credit, Withdrawal, WithdrawalStatus};
use crate::{Song, User, UserId};

/// Payout rate used when a song's owning user cannot be resolved.
pub const DEFAULT_PAYOUT_RATE: f64 = 0.8;

/// Platform-wide financial rollup figures.
#[derive(Debug, Clone, Serialize)]
pub struct PlatformFinancials {
    /// Gross earnings across all songs, regardless of review status.
    pub total_song_gross_earnings: f64,

    /// Sum of all completed withdrawals.
    pub total_paid_out: f64,

    /// The platform's share of gross song earnings.
    pub platform_cut: f64,

    /// Outstanding liability to users, including pending withdrawals:
    /// user-side song earnings plus all credits, minus completed payouts.
    pub total_remaining_to_pay: f64,
}

/// Compute platform-wide rollups across all users.
///
/// Unlike the per-user ledger, the gross and cut figures count every song
/// regardless of status. That asymmetry is an existing business rule, not a
/// defect; callers must not filter to approved songs here.
#[must_use]
pub fn platform_financials(
    users: &[User],
    songs: &[Song],
    withdrawals: &[Withdrawal],
    credits: &[Credit],
) -> PlatformFinancials {
    let payout_rates: HashMap<UserId, f64> =
        users.iter().map(|u| (u.id, u.payout_rate)).collect();
    let rate_for = |user_id: &UserId| {
        payout_rates
            .get(user_id)
            .copied()
            .unwrap_or(DEFAULT_PAYOUT_RATE)
    };

    let total_song_gross_earnings: f64 = songs.iter().map(|s| s.total_earnings).sum();

    let total_paid_out: f64 = withdrawals
        .iter()
        .filter(|w| w.status == WithdrawalStatus::Completed)
        .map(|w| w.amount)
        .sum();

    let platform_cut: f64 = songs
        .iter()
        .map(|s| s.total_earnings * (1.0 - rate_for(&s.user_id)))
        .sum();

    let total_user_side_earnings: f64 = songs
        .iter()
        .map(|s| s.total_earnings * rate_for(&s.user_id))
        .sum();

    let total_credits: f64 = credits.iter().map(|c| c.amount).sum();

    let total_remaining_to_pay = (total_user_side_earnings + total_credits) - total_paid_out;

    PlatformFinancials {
        total_song_gross_earnings,
        total_paid_out,
        platform_cut,
        total_remaining_to_pay,
    }
}
