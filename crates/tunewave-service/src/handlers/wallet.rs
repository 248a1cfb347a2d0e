//! Wallet handlers: ledger summary and withdrawal requests.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use tunewave_core::{
    admission, ledger, UserId, WalletSummary, Withdrawal, WithdrawalId, WithdrawalRequest,
    WithdrawalStatus,
};
use tunewave_store::Store;

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::state::AppState;

/// Recompute a user's wallet summary from source records.
///
/// The summary is derived on every call and never cached, so the balance
/// reflects the store exactly at the time of the read.
pub fn compute_summary(state: &AppState, user_id: UserId) -> Result<WalletSummary, ApiError> {
    let users = state.store.list_users()?;
    let songs = state.store.list_songs()?;
    let withdrawals = state.store.list_withdrawals()?;
    let credits = state.store.list_credits()?;

    Ok(ledger::wallet_summary(
        user_id,
        &users,
        &songs,
        &withdrawals,
        &credits,
    )?)
}

/// Get the authenticated user's wallet summary and transaction feed.
pub async fn get_wallet(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
) -> Result<Json<WalletSummary>, ApiError> {
    let summary = compute_summary(&state, auth.user.id)?;
    Ok(Json(summary))
}

/// Withdrawal request body. The requesting user comes from the bearer
/// token, never from the body.
#[derive(Debug, Deserialize)]
pub struct RequestWithdrawalBody {
    /// Requested amount.
    pub amount: f64,
    /// UPI payout identifier.
    pub upi_id: String,
    /// Payee display name.
    pub upi_name: String,
}

/// Response for a successful withdrawal request.
#[derive(Debug, Serialize)]
pub struct RequestWithdrawalResponse {
    /// Always `true`.
    pub success: bool,
    /// Outcome message.
    pub message: String,
    /// The created withdrawal, in `Pending` state.
    pub withdrawal: Withdrawal,
}

/// Request a withdrawal payout.
///
/// The balance is recomputed from source records at validation time and the
/// write is not guarded by a lock; the platform assumes low-contention use.
pub async fn request_withdrawal(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    Json(body): Json<RequestWithdrawalBody>,
) -> Result<Json<RequestWithdrawalResponse>, ApiError> {
    let request = WithdrawalRequest {
        user_id: auth.user.id,
        amount: body.amount,
        upi_id: body.upi_id,
        upi_name: body.upi_name,
    };

    let summary = compute_summary(&state, request.user_id)?;
    admission::admit(&request, summary.available_balance)?;

    let withdrawal = Withdrawal {
        id: WithdrawalId::generate(),
        user_id: request.user_id,
        amount: request.amount,
        upi_id: request.upi_id,
        upi_name: request.upi_name,
        status: WithdrawalStatus::Pending,
        requested_at: Utc::now(),
        processed_at: None,
        processed_by: None,
    };

    state.store.put_withdrawal(&withdrawal)?;

    tracing::info!(
        user_id = %withdrawal.user_id,
        withdrawal_id = %withdrawal.id,
        amount = %withdrawal.amount,
        "Withdrawal requested"
    );

    Ok(Json(RequestWithdrawalResponse {
        success: true,
        message: "Withdrawal request submitted successfully!".into(),
        withdrawal,
    }))
}
