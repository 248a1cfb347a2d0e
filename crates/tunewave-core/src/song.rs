//! Song submission types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{SongId, UserId};

/// A submitted song.
///
/// Gross earnings are admin-set and only contribute to the owner's wallet
/// once the song is approved. The platform aggregator, by contrast, counts
/// earnings on all songs regardless of status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Song {
    /// The song ID.
    pub id: SongId,

    /// The submitting user.
    pub user_id: UserId,

    /// Song title.
    pub title: String,

    /// Composer / author credit.
    pub author: String,

    /// Performing artist credit.
    pub singer: String,

    /// Free-form description.
    pub description: String,

    /// Genre/style tags.
    pub tags: Vec<String>,

    /// Review status.
    pub status: SongStatus,

    /// When the song was submitted.
    pub submitted_at: DateTime<Utc>,

    /// Cover art URL.
    pub cover_art: String,

    /// Audio file URL.
    pub audio_url: String,

    /// Banner image URL.
    pub banner_url: String,

    /// The admin who approved or declined the song, if actioned.
    pub actioned_by: Option<UserId>,

    /// When the song was actioned.
    pub actioned_at: Option<DateTime<Utc>>,

    /// Gross earnings attributed to the song (admin-set, >= 0).
    #[serde(default)]
    pub total_earnings: f64,
}

/// Review status of a submitted song.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SongStatus {
    /// Accepted by an admin; earnings count toward the owner's wallet.
    Approved,

    /// Rejected by an admin.
    Declined,

    /// Awaiting admin review.
    WaitingForAction,
}
