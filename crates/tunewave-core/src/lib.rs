//! Core types and ledger logic for tunewave.
//!
//! Tunewave is a music-submission marketplace: artists upload songs,
//! administrators review them and assign earnings, and a wallet subsystem
//! tracks earnings, manual credits, and withdrawal payouts.
//!
//! This crate provides the foundational types used throughout the platform:
//!
//! - **Identifiers**: `UserId`, `SongId`, `WithdrawalId`, `CreditId`, `TicketId`
//! - **Records**: `User`, `Song`, `Withdrawal`, `Credit`, `Ticket`, `AppSettings`
//! - **Ledger engine**: [`ledger::wallet_summary`] — the authoritative
//!   per-user financial summary, always recomputed from source records
//! - **Withdrawal admission**: [`admission::admit`]
//! - **Platform financials**: [`financials::platform_financials`]
//!
//! # Monetary unit
//!
//! All amounts are plain `f64` values in a single implicit currency unit.
//! A user's share of a song's gross earnings is `total_earnings * payout_rate`
//! where `payout_rate` is a fraction in `0..=1`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod admission;
pub mod error;
pub mod financials;
pub mod ids;
pub mod ledger;
pub mod settings;
pub mod song;
pub mod ticket;
pub mod user;
pub mod wallet;

pub use admission::{admit, WithdrawalRequest, MIN_WITHDRAWAL_AMOUNT};
pub use error::{AdmissionError, LedgerError};
pub use financials::{platform_financials, PlatformFinancials, DEFAULT_PAYOUT_RATE};
pub use ids::{CreditId, IdError, SongId, TicketId, UserId, WithdrawalId};
pub use ledger::wallet_summary;
pub use settings::{AppSettings, PriceSettings};
pub use song::{Song, SongStatus};
pub use ticket::{Ticket, TicketReply, TicketStatus};
pub use user::{AccountType, Role, User};
pub use wallet::{Credit, UnifiedTransaction, WalletSummary, Withdrawal, WithdrawalStatus};
