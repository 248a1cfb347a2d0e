//! Support ticket handlers.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use tunewave_core::{Ticket, TicketId, TicketReply, TicketStatus};
use tunewave_store::Store;

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::state::AppState;

/// Ticket creation body.
#[derive(Debug, Deserialize)]
pub struct NewTicketRequest {
    /// Short subject line.
    pub subject: String,
    /// Initial message body.
    pub message: String,
    /// Optional attached photo URL.
    pub photo_url: Option<String>,
}

/// Response for a created ticket.
#[derive(Debug, Serialize)]
pub struct NewTicketResponse {
    /// Always `true`.
    pub success: bool,
    /// The created ticket.
    pub ticket: Ticket,
}

/// Open a new support ticket.
pub async fn create_ticket(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    Json(body): Json<NewTicketRequest>,
) -> Result<Json<NewTicketResponse>, ApiError> {
    if body.subject.trim().is_empty() {
        return Err(ApiError::Validation("subject is required".into()));
    }
    if body.message.trim().is_empty() {
        return Err(ApiError::Validation("message is required".into()));
    }

    let ticket = Ticket {
        id: TicketId::generate(),
        user_id: auth.user.id,
        subject: body.subject,
        message: body.message,
        photo_url: body.photo_url,
        status: TicketStatus::Open,
        submitted_at: Utc::now(),
        replies: vec![],
    };
    state.store.put_ticket(&ticket)?;

    tracing::info!(user_id = %auth.user.id, ticket_id = %ticket.id, "Ticket opened");

    Ok(Json(NewTicketResponse {
        success: true,
        ticket,
    }))
}

/// List the authenticated user's tickets in submission order.
pub async fn list_my_tickets(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
) -> Result<Json<Vec<Ticket>>, ApiError> {
    let tickets = state
        .store
        .list_tickets()?
        .into_iter()
        .filter(|t| t.user_id == auth.user.id)
        .collect();
    Ok(Json(tickets))
}

/// Reply body.
#[derive(Debug, Deserialize)]
pub struct ReplyRequest {
    /// Reply message.
    pub message: String,
}

/// Reply to a ticket thread. Allowed for the ticket owner and admins.
pub async fn reply_to_ticket(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    Path(ticket_id): Path<TicketId>,
    Json(body): Json<ReplyRequest>,
) -> Result<Json<Ticket>, ApiError> {
    if body.message.trim().is_empty() {
        return Err(ApiError::Validation("message is required".into()));
    }

    let mut ticket = state
        .store
        .get_ticket(&ticket_id)?
        .ok_or_else(|| ApiError::NotFound(format!("ticket not found: {ticket_id}")))?;

    if ticket.user_id != auth.user.id && !auth.user.role.is_admin() {
        return Err(ApiError::Forbidden("not your ticket".into()));
    }
    if ticket.status == TicketStatus::Closed {
        return Err(ApiError::Conflict("ticket is closed".into()));
    }

    ticket.replies.push(TicketReply {
        user_id: auth.user.id,
        message: body.message,
        created_at: Utc::now(),
    });
    state.store.put_ticket(&ticket)?;

    Ok(Json(ticket))
}
