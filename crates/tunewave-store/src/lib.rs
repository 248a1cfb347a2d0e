//! `RocksDB` storage layer for tunewave.
//!
//! This crate persists users, songs, withdrawals, credits, tickets, and
//! settings using `RocksDB` with column families. Records are CBOR-encoded.
//!
//! # Architecture
//!
//! Primary records are keyed by their identifier bytes. Two secondary
//! indexes exist: `users_by_email` for login, and `songs_by_user` for the
//! artist dashboard. Wallet computations read whole collections and derive
//! everything in memory, so withdrawals and credits carry no per-user index;
//! their ULID keys keep full scans chronologically ordered.
//!
//! # Example
//!
//! ```no_run
//! use tunewave_store::{RocksStore, Store};
//!
//! let store = RocksStore::open("/tmp/tunewave-db").unwrap();
//! let users = store.list_users().unwrap();
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod keys;
pub mod rocks;
pub mod schema;

pub use error::{Result, StoreError};
pub use rocks::RocksStore;

use tunewave_core::{
    AppSettings, Credit, Song, SongId, Ticket, TicketId, User, UserId, Withdrawal, WithdrawalId,
};

/// The storage trait defining all database operations.
///
/// Abstracts the storage layer so handlers and tests do not depend on the
/// `RocksDB` implementation directly.
pub trait Store: Send + Sync {
    // =========================================================================
    // User Operations
    // =========================================================================

    /// Insert or update a user record, maintaining the email index.
    ///
    /// Emails are treated as immutable once registered.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn put_user(&self, user: &User) -> Result<()>;

    /// Get a user by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn get_user(&self, user_id: &UserId) -> Result<Option<User>>;

    /// Look up a user by email (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;

    /// List all users.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn list_users(&self) -> Result<Vec<User>>;

    // =========================================================================
    // Song Operations
    // =========================================================================

    /// Insert or update a song record, maintaining the owner index.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn put_song(&self, song: &Song) -> Result<()>;

    /// Get a song by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn get_song(&self, song_id: &SongId) -> Result<Option<Song>>;

    /// List all songs in submission order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn list_songs(&self) -> Result<Vec<Song>>;

    /// List a user's songs in submission order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn list_songs_by_user(&self, user_id: &UserId) -> Result<Vec<Song>>;

    // =========================================================================
    // Withdrawal Operations
    // =========================================================================

    /// Insert or update a withdrawal record.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn put_withdrawal(&self, withdrawal: &Withdrawal) -> Result<()>;

    /// Get a withdrawal by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn get_withdrawal(&self, withdrawal_id: &WithdrawalId) -> Result<Option<Withdrawal>>;

    /// List all withdrawals in request order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn list_withdrawals(&self) -> Result<Vec<Withdrawal>>;

    // =========================================================================
    // Credit Operations
    // =========================================================================

    /// Insert a credit record. Credits are immutable once created.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn put_credit(&self, credit: &Credit) -> Result<()>;

    /// List all credits in grant order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn list_credits(&self) -> Result<Vec<Credit>>;

    // =========================================================================
    // Ticket Operations
    // =========================================================================

    /// Insert or update a ticket record.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn put_ticket(&self, ticket: &Ticket) -> Result<()>;

    /// Get a ticket by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn get_ticket(&self, ticket_id: &TicketId) -> Result<Option<Ticket>>;

    /// List all tickets in submission order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn list_tickets(&self) -> Result<Vec<Ticket>>;

    // =========================================================================
    // Settings Operations
    // =========================================================================

    /// Get the platform settings record, if one has been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn get_settings(&self) -> Result<Option<AppSettings>>;

    /// Write the platform settings record.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    fn put_settings(&self, settings: &AppSettings) -> Result<()>;
}
