//! Support ticket types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{TicketId, UserId};

/// A support ticket thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    /// The ticket ID.
    pub id: TicketId,

    /// The user who opened the ticket.
    pub user_id: UserId,

    /// Short subject line.
    pub subject: String,

    /// Initial message body.
    pub message: String,

    /// Optional attached photo URL.
    pub photo_url: Option<String>,

    /// Thread status.
    pub status: TicketStatus,

    /// When the ticket was opened.
    pub submitted_at: DateTime<Utc>,

    /// Replies in chronological order.
    #[serde(default)]
    pub replies: Vec<TicketReply>,
}

/// A single reply within a ticket thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketReply {
    /// The replying user (artist or admin).
    pub user_id: UserId,

    /// Reply body.
    pub message: String,

    /// When the reply was posted.
    pub created_at: DateTime<Utc>,
}

/// Status of a ticket thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    /// Awaiting resolution.
    Open,

    /// Closed by an admin.
    Closed,
}
