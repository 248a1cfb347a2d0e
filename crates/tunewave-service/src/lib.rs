//! Tunewave HTTP API service.
//!
//! This crate provides the HTTP API for the tunewave music marketplace:
//!
//! - Registration, login, and password changes (JWT bearer auth)
//! - Song submission and artist dashboard listings
//! - The wallet: ledger summary, unified transaction feed, and withdrawal
//!   requests
//! - Support tickets
//! - Admin surface: song review, earnings assignment, user management,
//!   withdrawal processing, manual credits, platform financials
//!
//! Caller identity is always explicit: every authenticated operation derives
//! the acting user from the request's bearer token, never from ambient state.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Allow some pedantic lints that are noisy for Axum handler functions
#![allow(clippy::missing_errors_doc)] // Axum handlers all return Result
#![allow(clippy::unused_async)] // Some handlers are async only for routing consistency

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod seed;
pub mod state;

pub use config::ServiceConfig;
pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
