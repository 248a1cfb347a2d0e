//! Database schema definitions and column families.

/// Column family names for the `RocksDB` database.
pub mod cf {
    /// User records, keyed by `user_id` (UUID bytes).
    pub const USERS: &str = "users";

    /// Index: `user_id` by lowercased email. Value is the UUID bytes.
    pub const USERS_BY_EMAIL: &str = "users_by_email";

    /// Song records, keyed by `song_id` (ULID bytes).
    pub const SONGS: &str = "songs";

    /// Index: songs by owner, keyed by `user_id || song_id`. Value is empty.
    pub const SONGS_BY_USER: &str = "songs_by_user";

    /// Withdrawal records, keyed by `withdrawal_id` (ULID bytes).
    pub const WITHDRAWALS: &str = "withdrawals";

    /// Credit records, keyed by `credit_id` (ULID bytes).
    pub const CREDITS: &str = "credits";

    /// Support tickets, keyed by `ticket_id` (ULID bytes).
    pub const TICKETS: &str = "tickets";

    /// Platform settings, a single record under a fixed key.
    pub const SETTINGS: &str = "settings";
}

/// Returns all column family names for database initialization.
#[must_use]
pub fn all_column_families() -> Vec<&'static str> {
    vec![
        cf::USERS,
        cf::USERS_BY_EMAIL,
        cf::SONGS,
        cf::SONGS_BY_USER,
        cf::WITHDRAWALS,
        cf::CREDITS,
        cf::TICKETS,
        cf::SETTINGS,
    ]
}
