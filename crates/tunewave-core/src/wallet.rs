//! Wallet record types: withdrawals, credits, and the unified feed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{CreditId, UserId, WithdrawalId};

/// A withdrawal payout request.
///
/// Created in `Pending` state with the amount fixed at creation; an admin
/// decision moves it to `Completed` or `Failed` exactly once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Withdrawal {
    /// The withdrawal ID.
    pub id: WithdrawalId,

    /// The requesting user.
    pub user_id: UserId,

    /// Requested amount (> 0, fixed at creation).
    pub amount: f64,

    /// UPI payout identifier.
    pub upi_id: String,

    /// Payee display name on the UPI account.
    pub upi_name: String,

    /// Processing status.
    pub status: WithdrawalStatus,

    /// When the request was made.
    pub requested_at: DateTime<Utc>,

    /// When an admin completed or failed the request.
    pub processed_at: Option<DateTime<Utc>>,

    /// The admin who processed the request.
    pub processed_by: Option<UserId>,
}

/// Processing status of a withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WithdrawalStatus {
    /// Awaiting admin decision; the amount is held against the balance.
    Pending,

    /// Paid out; counts toward the user's withdrawn total.
    Completed,

    /// Rejected or payment failed; the amount returns to the balance.
    Failed,
}

/// A manual, admin-granted addition to a user's earnings.
///
/// Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credit {
    /// The credit ID.
    pub id: CreditId,

    /// The receiving user.
    pub user_id: UserId,

    /// The granting admin.
    pub admin_id: UserId,

    /// Credited amount (> 0).
    pub amount: f64,

    /// Admin note explaining the grant.
    pub note: String,

    /// When the credit was granted.
    pub created_at: DateTime<Utc>,
}

/// A read-only projection of withdrawals and credits for the wallet feed.
///
/// Carries the display name of the acting admin where one is known. Used
/// only for presentation; never persisted.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UnifiedTransaction {
    /// A withdrawal entry, timestamped by its request time.
    Withdrawal {
        /// The underlying withdrawal record.
        #[serde(flatten)]
        withdrawal: Withdrawal,
        /// Display name of the processing admin, if processed.
        #[serde(skip_serializing_if = "Option::is_none")]
        admin_name: Option<String>,
    },

    /// A credit entry, timestamped by its creation time.
    Credit {
        /// The underlying credit record.
        #[serde(flatten)]
        credit: Credit,
        /// Display name of the granting admin.
        admin_name: Option<String>,
    },
}

impl UnifiedTransaction {
    /// The timestamp the feed sorts on: request time for withdrawals,
    /// creation time for credits.
    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::Withdrawal { withdrawal, .. } => withdrawal.requested_at,
            Self::Credit { credit, .. } => credit.created_at,
        }
    }
}

/// The authoritative per-user financial summary.
///
/// Always derived from source records; see [`crate::ledger::wallet_summary`].
#[derive(Debug, Clone, Serialize)]
pub struct WalletSummary {
    /// Song earnings (payout share of approved songs) plus manual credits.
    pub total_earnings: f64,

    /// Sum of completed withdrawals.
    pub total_withdrawn: f64,

    /// Sum of pending withdrawals, held against the balance.
    pub pending_withdrawals: f64,

    /// `total_earnings - total_withdrawn - pending_withdrawals`.
    pub available_balance: f64,

    /// Unified withdrawal/credit feed, newest first.
    pub transactions: Vec<UnifiedTransaction>,
}
