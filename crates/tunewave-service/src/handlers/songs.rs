//! Song submission and artist dashboard handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use chrono::{Months, Utc};
use serde::{Deserialize, Serialize};

use tunewave_core::{AccountType, AppSettings, Song, SongId, SongStatus};
use tunewave_store::Store;

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::state::AppState;

/// Song submission body.
#[derive(Debug, Deserialize)]
pub struct SubmitSongRequest {
    /// Song title.
    pub title: String,
    /// Composer / author credit.
    pub author: String,
    /// Performing artist credit.
    pub singer: String,
    /// Free-form description.
    pub description: String,
    /// Genre/style tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Banner image, as a URL or data URL.
    pub banner_url: String,
    /// Audio file, as a URL or data URL.
    pub audio_url: String,
}

/// Paid submission body: a regular submission plus the subscription tier
/// being purchased.
#[derive(Debug, Deserialize)]
pub struct PaidSubmissionRequest {
    /// The song being submitted.
    #[serde(flatten)]
    pub song: SubmitSongRequest,
    /// The account tier the user is subscribing as.
    pub account_type: AccountType,
}

/// Response for a successful submission.
#[derive(Debug, Serialize)]
pub struct SubmitSongResponse {
    /// Always `true`.
    pub success: bool,
    /// Outcome message.
    pub message: String,
    /// The created song, awaiting review.
    pub song: Song,
}

fn validate_submission(body: &SubmitSongRequest) -> Result<(), ApiError> {
    let checks = [
        ("title", &body.title),
        ("author", &body.author),
        ("singer", &body.singer),
        ("description", &body.description),
        ("banner_url", &body.banner_url),
        ("audio_url", &body.audio_url),
    ];
    for (field, value) in checks {
        if value.trim().is_empty() {
            return Err(ApiError::Validation(format!("{field} is required")));
        }
    }
    Ok(())
}

fn build_song(user_id: tunewave_core::UserId, body: SubmitSongRequest) -> Song {
    Song {
        id: SongId::generate(),
        user_id,
        title: body.title,
        author: body.author,
        singer: body.singer,
        description: body.description,
        tags: body.tags,
        status: SongStatus::WaitingForAction,
        submitted_at: Utc::now(),
        cover_art: body.banner_url.clone(),
        audio_url: body.audio_url,
        banner_url: body.banner_url,
        actioned_by: None,
        actioned_at: None,
        total_earnings: 0.0,
    }
}

/// Submit a song for review. Requires an active subscription.
pub async fn submit_song(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    Json(body): Json<SubmitSongRequest>,
) -> Result<Json<SubmitSongResponse>, ApiError> {
    if !auth.user.has_active_subscription(Utc::now()) {
        return Err(ApiError::Forbidden("an active subscription is required".into()));
    }

    validate_submission(&body)?;

    let song = build_song(auth.user.id, body);
    state.store.put_song(&song)?;

    tracing::info!(user_id = %auth.user.id, song_id = %song.id, "Song submitted");

    Ok(Json(SubmitSongResponse {
        success: true,
        message: "Song submitted for approval!".into(),
        song,
    }))
}

/// Submit a song together with a subscription purchase.
///
/// Grants a one-year subscription at the chosen tier and submits the song
/// in one step.
pub async fn paid_submission(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    Json(body): Json<PaidSubmissionRequest>,
) -> Result<Json<SubmitSongResponse>, ApiError> {
    validate_submission(&body.song)?;

    let now = Utc::now();
    let mut user = auth.user;
    user.account_type = body.account_type;
    user.subscription_expiry = now
        .checked_add_months(Months::new(12))
        .or(user.subscription_expiry);
    state.store.put_user(&user)?;

    let song = build_song(user.id, body.song);
    state.store.put_song(&song)?;

    tracing::info!(
        user_id = %user.id,
        song_id = %song.id,
        account_type = ?user.account_type,
        "Paid submission processed"
    );

    Ok(Json(SubmitSongResponse {
        success: true,
        message: "Payment successful and song submitted!".into(),
        song,
    }))
}

/// List the authenticated user's songs in submission order.
pub async fn list_my_songs(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
) -> Result<Json<Vec<Song>>, ApiError> {
    let songs = state.store.list_songs_by_user(&auth.user.id)?;
    Ok(Json(songs))
}

/// Subscription price response.
#[derive(Debug, Serialize)]
pub struct SubscriptionPriceResponse {
    /// The caller's account tier.
    pub account_type: AccountType,
    /// The yearly price for that tier.
    pub price: f64,
}

/// Get the subscription price for the authenticated user's account type.
pub async fn subscription_price(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
) -> Result<Json<SubscriptionPriceResponse>, ApiError> {
    let settings = state.store.get_settings()?.unwrap_or_else(AppSettings::default);
    Ok(Json(SubscriptionPriceResponse {
        account_type: auth.user.account_type,
        price: settings.prices.for_account_type(auth.user.account_type),
    }))
}
