//! Key encoding utilities for `RocksDB`.

use tunewave_core::{SongId, UserId};

/// Fixed key for the single settings record.
pub const SETTINGS_KEY: &[u8] = b"settings";

/// Create a user key from a user ID.
#[must_use]
pub fn user_key(user_id: &UserId) -> Vec<u8> {
    user_id.as_bytes().to_vec()
}

/// Create an email index key. Emails are compared case-insensitively.
#[must_use]
pub fn email_key(email: &str) -> Vec<u8> {
    email.trim().to_lowercase().into_bytes()
}

/// Create a user-song index key.
///
/// Format: `user_id (16 bytes) || song_id (16 bytes)`
///
/// Since song IDs are ULIDs, a user's songs iterate in submission order.
#[must_use]
pub fn user_song_key(user_id: &UserId, song_id: &SongId) -> Vec<u8> {
    let mut key = Vec::with_capacity(32);
    key.extend_from_slice(user_id.as_bytes());
    key.extend_from_slice(&song_id.to_bytes());
    key
}

/// Create a prefix for iterating all songs owned by a user.
#[must_use]
pub fn user_songs_prefix(user_id: &UserId) -> Vec<u8> {
    user_id.as_bytes().to_vec()
}

/// Extract the song ID from a user-song index key.
///
/// # Panics
///
/// Panics if the key is not at least 32 bytes.
#[must_use]
pub fn extract_song_id_from_user_key(key: &[u8]) -> SongId {
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&key[16..32]);
    SongId::from_bytes(bytes).expect("valid ULID bytes")
}
