//! Admin handlers: song review, user management, withdrawal processing,
//! credit grants, platform financials, tickets, and settings.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use chrono::{Months, Utc};
use serde::{Deserialize, Serialize};

use tunewave_core::{
    financials, AccountType, AppSettings, Credit, CreditId, PlatformFinancials, PriceSettings,
    Role, Song, SongId, SongStatus, Ticket, TicketId, TicketStatus, UserId, Withdrawal,
    WithdrawalId, WithdrawalStatus,
};
use tunewave_store::Store;

use crate::auth::AuthAdmin;
use crate::error::ApiError;
use crate::handlers::{Ack, UserView};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Song review

/// List songs awaiting review, oldest first.
pub async fn list_pending_songs(
    State(state): State<Arc<AppState>>,
    _admin: AuthAdmin,
) -> Result<Json<Vec<Song>>, ApiError> {
    let songs = state
        .store
        .list_songs()?
        .into_iter()
        .filter(|s| s.status == SongStatus::WaitingForAction)
        .collect();
    Ok(Json(songs))
}

/// List approved songs.
pub async fn list_approved_songs(
    State(state): State<Arc<AppState>>,
    _admin: AuthAdmin,
) -> Result<Json<Vec<Song>>, ApiError> {
    let songs = state
        .store
        .list_songs()?
        .into_iter()
        .filter(|s| s.status == SongStatus::Approved)
        .collect();
    Ok(Json(songs))
}

fn action_song(
    state: &AppState,
    admin_id: UserId,
    song_id: &SongId,
    status: SongStatus,
) -> Result<Song, ApiError> {
    let mut song = state
        .store
        .get_song(song_id)?
        .ok_or_else(|| ApiError::NotFound(format!("song not found: {song_id}")))?;

    song.status = status;
    song.actioned_by = Some(admin_id);
    song.actioned_at = Some(Utc::now());
    state.store.put_song(&song)?;

    tracing::info!(song_id = %song.id, admin_id = %admin_id, status = ?status, "Song actioned");

    Ok(song)
}

/// Approve a song. From this point its earnings count toward the owner's
/// wallet.
pub async fn approve_song(
    State(state): State<Arc<AppState>>,
    admin: AuthAdmin,
    Path(song_id): Path<SongId>,
) -> Result<Json<Song>, ApiError> {
    let song = action_song(&state, admin.user.id, &song_id, SongStatus::Approved)?;
    Ok(Json(song))
}

/// Decline a song.
pub async fn decline_song(
    State(state): State<Arc<AppState>>,
    admin: AuthAdmin,
    Path(song_id): Path<SongId>,
) -> Result<Json<Song>, ApiError> {
    let song = action_song(&state, admin.user.id, &song_id, SongStatus::Declined)?;
    Ok(Json(song))
}

/// Earnings update body.
#[derive(Debug, Deserialize)]
pub struct UpdateEarningsRequest {
    /// New gross earnings figure for the song. Replaces the old value.
    pub total_earnings: f64,
}

/// Set a song's gross earnings.
pub async fn update_song_earnings(
    State(state): State<Arc<AppState>>,
    admin: AuthAdmin,
    Path(song_id): Path<SongId>,
    Json(body): Json<UpdateEarningsRequest>,
) -> Result<Json<Song>, ApiError> {
    if !body.total_earnings.is_finite() || body.total_earnings < 0.0 {
        return Err(ApiError::Validation(
            "total_earnings must be a non-negative number".into(),
        ));
    }

    let mut song = state
        .store
        .get_song(&song_id)?
        .ok_or_else(|| ApiError::NotFound(format!("song not found: {song_id}")))?;

    song.total_earnings = body.total_earnings;
    state.store.put_song(&song)?;

    tracing::info!(
        song_id = %song.id,
        admin_id = %admin.user.id,
        total_earnings = %song.total_earnings,
        "Song earnings updated"
    );

    Ok(Json(song))
}

// ---------------------------------------------------------------------------
// User management

/// List all users.
pub async fn list_users(
    State(state): State<Arc<AppState>>,
    _admin: AuthAdmin,
) -> Result<Json<Vec<UserView>>, ApiError> {
    let users = state
        .store
        .list_users()?
        .iter()
        .map(UserView::from)
        .collect();
    Ok(Json(users))
}

/// Role update body.
#[derive(Debug, Deserialize)]
pub struct UpdateRoleRequest {
    /// The new role.
    pub role: Role,
}

/// Change a user's role. Restricted to super admins.
pub async fn update_user_role(
    State(state): State<Arc<AppState>>,
    admin: AuthAdmin,
    Path(user_id): Path<UserId>,
    Json(body): Json<UpdateRoleRequest>,
) -> Result<Json<UserView>, ApiError> {
    if admin.user.role != Role::SuperAdmin {
        return Err(ApiError::Forbidden("super admin access required".into()));
    }

    let mut user = state
        .store
        .get_user(&user_id)?
        .ok_or_else(|| ApiError::NotFound(format!("user not found: {user_id}")))?;

    user.role = body.role;
    state.store.put_user(&user)?;

    tracing::info!(user_id = %user.id, admin_id = %admin.user.id, role = ?user.role, "Role updated");

    Ok(Json(UserView::from(&user)))
}

/// Account type update body.
#[derive(Debug, Deserialize)]
pub struct UpdateAccountTypeRequest {
    /// The new account tier.
    pub account_type: AccountType,
}

/// Change a user's account tier.
pub async fn update_user_account_type(
    State(state): State<Arc<AppState>>,
    admin: AuthAdmin,
    Path(user_id): Path<UserId>,
    Json(body): Json<UpdateAccountTypeRequest>,
) -> Result<Json<UserView>, ApiError> {
    let mut user = state
        .store
        .get_user(&user_id)?
        .ok_or_else(|| ApiError::NotFound(format!("user not found: {user_id}")))?;

    user.account_type = body.account_type;
    state.store.put_user(&user)?;

    tracing::info!(
        user_id = %user.id,
        admin_id = %admin.user.id,
        account_type = ?user.account_type,
        "Account type updated"
    );

    Ok(Json(UserView::from(&user)))
}

/// Payout rate update body. The rate is expressed as a percentage.
#[derive(Debug, Deserialize)]
pub struct UpdatePayoutRateRequest {
    /// New payout percentage, 0 to 100.
    pub payout_percent: f64,
}

/// Change a user's payout rate.
///
/// Takes effect on the next wallet read; the ledger always recomputes with
/// the current rate.
pub async fn update_user_payout_rate(
    State(state): State<Arc<AppState>>,
    admin: AuthAdmin,
    Path(user_id): Path<UserId>,
    Json(body): Json<UpdatePayoutRateRequest>,
) -> Result<Json<UserView>, ApiError> {
    if !body.payout_percent.is_finite() || !(0.0..=100.0).contains(&body.payout_percent) {
        return Err(ApiError::Validation(
            "payout_percent must be between 0 and 100".into(),
        ));
    }

    let mut user = state
        .store
        .get_user(&user_id)?
        .ok_or_else(|| ApiError::NotFound(format!("user not found: {user_id}")))?;

    user.payout_rate = body.payout_percent / 100.0;
    state.store.put_user(&user)?;

    tracing::info!(
        user_id = %user.id,
        admin_id = %admin.user.id,
        payout_rate = %user.payout_rate,
        "Payout rate updated"
    );

    Ok(Json(UserView::from(&user)))
}

/// Subscription grant body.
#[derive(Debug, Deserialize)]
pub struct GrantSubscriptionRequest {
    /// Number of months to grant.
    pub months: u32,
}

/// Grant subscription months to a user.
///
/// Months extend an unexpired subscription from its current expiry, or start
/// from now when the subscription is missing or already expired.
pub async fn grant_subscription(
    State(state): State<Arc<AppState>>,
    admin: AuthAdmin,
    Path(user_id): Path<UserId>,
    Json(body): Json<GrantSubscriptionRequest>,
) -> Result<Json<UserView>, ApiError> {
    if body.months == 0 {
        return Err(ApiError::Validation("months must be at least 1".into()));
    }

    let mut user = state
        .store
        .get_user(&user_id)?
        .ok_or_else(|| ApiError::NotFound(format!("user not found: {user_id}")))?;

    let now = Utc::now();
    let base = match user.subscription_expiry {
        Some(expiry) if expiry > now => expiry,
        _ => now,
    };
    user.subscription_expiry = base
        .checked_add_months(Months::new(body.months))
        .or(user.subscription_expiry);
    state.store.put_user(&user)?;

    tracing::info!(
        user_id = %user.id,
        admin_id = %admin.user.id,
        months = body.months,
        "Subscription granted"
    );

    Ok(Json(UserView::from(&user)))
}

/// Revoke a user's subscription immediately.
pub async fn revoke_subscription(
    State(state): State<Arc<AppState>>,
    admin: AuthAdmin,
    Path(user_id): Path<UserId>,
) -> Result<Json<UserView>, ApiError> {
    let mut user = state
        .store
        .get_user(&user_id)?
        .ok_or_else(|| ApiError::NotFound(format!("user not found: {user_id}")))?;

    user.subscription_expiry = None;
    state.store.put_user(&user)?;

    tracing::info!(user_id = %user.id, admin_id = %admin.user.id, "Subscription revoked");

    Ok(Json(UserView::from(&user)))
}

// ---------------------------------------------------------------------------
// Withdrawal processing

/// List all withdrawal requests, newest first.
pub async fn list_withdrawals(
    State(state): State<Arc<AppState>>,
    _admin: AuthAdmin,
) -> Result<Json<Vec<Withdrawal>>, ApiError> {
    // The store iterates ULID keys in ascending (oldest-first) order.
    let mut withdrawals = state.store.list_withdrawals()?;
    withdrawals.reverse();
    Ok(Json(withdrawals))
}

/// Withdrawal decision body.
#[derive(Debug, Deserialize)]
pub struct UpdateWithdrawalStatusRequest {
    /// The decision: `completed` or `failed`.
    pub status: WithdrawalStatus,
}

/// Complete or fail a pending withdrawal.
///
/// A withdrawal is processed exactly once; re-processing is a conflict, as is
/// setting the status back to `pending`.
pub async fn update_withdrawal_status(
    State(state): State<Arc<AppState>>,
    admin: AuthAdmin,
    Path(withdrawal_id): Path<WithdrawalId>,
    Json(body): Json<UpdateWithdrawalStatusRequest>,
) -> Result<Json<Withdrawal>, ApiError> {
    if body.status == WithdrawalStatus::Pending {
        return Err(ApiError::Validation(
            "status must be completed or failed".into(),
        ));
    }

    let mut withdrawal = state
        .store
        .get_withdrawal(&withdrawal_id)?
        .ok_or_else(|| ApiError::NotFound(format!("withdrawal not found: {withdrawal_id}")))?;

    if withdrawal.status != WithdrawalStatus::Pending {
        return Err(ApiError::Conflict(
            "withdrawal has already been processed".into(),
        ));
    }

    withdrawal.status = body.status;
    withdrawal.processed_at = Some(Utc::now());
    withdrawal.processed_by = Some(admin.user.id);
    state.store.put_withdrawal(&withdrawal)?;

    tracing::info!(
        withdrawal_id = %withdrawal.id,
        admin_id = %admin.user.id,
        status = ?withdrawal.status,
        "Withdrawal processed"
    );

    Ok(Json(withdrawal))
}

// ---------------------------------------------------------------------------
// Credits

/// Credit grant body.
#[derive(Debug, Deserialize)]
pub struct AddCreditRequest {
    /// The receiving user.
    pub user_id: UserId,
    /// The credited amount (> 0).
    pub amount: f64,
    /// Note explaining the grant.
    #[serde(default)]
    pub note: String,
}

/// Response for a granted credit.
#[derive(Debug, Serialize)]
pub struct AddCreditResponse {
    /// Always `true`.
    pub success: bool,
    /// The created credit.
    pub credit: Credit,
}

/// Grant a manual credit to a user's wallet.
pub async fn add_credit(
    State(state): State<Arc<AppState>>,
    admin: AuthAdmin,
    Json(body): Json<AddCreditRequest>,
) -> Result<Json<AddCreditResponse>, ApiError> {
    if !body.amount.is_finite() || body.amount <= 0.0 {
        return Err(ApiError::Validation("amount must be positive".into()));
    }
    if state.store.get_user(&body.user_id)?.is_none() {
        return Err(ApiError::NotFound(format!(
            "user not found: {}",
            body.user_id
        )));
    }

    let credit = Credit {
        id: CreditId::generate(),
        user_id: body.user_id,
        admin_id: admin.user.id,
        amount: body.amount,
        note: body.note,
        created_at: Utc::now(),
    };
    state.store.put_credit(&credit)?;

    tracing::info!(
        credit_id = %credit.id,
        user_id = %credit.user_id,
        admin_id = %admin.user.id,
        amount = %credit.amount,
        "Credit granted"
    );

    Ok(Json(AddCreditResponse {
        success: true,
        credit,
    }))
}

// ---------------------------------------------------------------------------
// Platform financials

/// Platform-wide financial rollups.
pub async fn get_financials(
    State(state): State<Arc<AppState>>,
    _admin: AuthAdmin,
) -> Result<Json<PlatformFinancials>, ApiError> {
    let users = state.store.list_users()?;
    let songs = state.store.list_songs()?;
    let withdrawals = state.store.list_withdrawals()?;
    let credits = state.store.list_credits()?;

    Ok(Json(financials::platform_financials(
        &users,
        &songs,
        &withdrawals,
        &credits,
    )))
}

// ---------------------------------------------------------------------------
// Tickets

/// List all support tickets.
pub async fn list_all_tickets(
    State(state): State<Arc<AppState>>,
    _admin: AuthAdmin,
) -> Result<Json<Vec<Ticket>>, ApiError> {
    let tickets = state.store.list_tickets()?;
    Ok(Json(tickets))
}

/// Close a ticket. Closed tickets no longer accept replies.
pub async fn close_ticket(
    State(state): State<Arc<AppState>>,
    admin: AuthAdmin,
    Path(ticket_id): Path<TicketId>,
) -> Result<Json<Ticket>, ApiError> {
    let mut ticket = state
        .store
        .get_ticket(&ticket_id)?
        .ok_or_else(|| ApiError::NotFound(format!("ticket not found: {ticket_id}")))?;

    ticket.status = TicketStatus::Closed;
    state.store.put_ticket(&ticket)?;

    tracing::info!(ticket_id = %ticket.id, admin_id = %admin.user.id, "Ticket closed");

    Ok(Json(ticket))
}

// ---------------------------------------------------------------------------
// Settings

/// Price update body.
#[derive(Debug, Deserialize)]
pub struct UpdatePricesRequest {
    /// Yearly price for individual artists.
    pub normal_artist: f64,
    /// Yearly price for labels.
    pub label: f64,
}

/// Update subscription prices.
pub async fn update_prices(
    State(state): State<Arc<AppState>>,
    admin: AuthAdmin,
    Json(body): Json<UpdatePricesRequest>,
) -> Result<Json<AppSettings>, ApiError> {
    for (field, value) in [("normal_artist", body.normal_artist), ("label", body.label)] {
        if !value.is_finite() || value < 0.0 {
            return Err(ApiError::Validation(format!(
                "{field} must be a non-negative number"
            )));
        }
    }

    let mut settings = state.store.get_settings()?.unwrap_or_default();
    settings.prices = PriceSettings {
        normal_artist: body.normal_artist,
        label: body.label,
    };
    state.store.put_settings(&settings)?;

    tracing::info!(admin_id = %admin.user.id, "Subscription prices updated");

    Ok(Json(settings))
}
