//! `RocksDB` storage implementation.

use std::path::Path;
use std::sync::Arc;

use rocksdb::{
    BoundColumnFamily, ColumnFamilyDescriptor, DBWithThreadMode, IteratorMode, MultiThreaded,
    Options, WriteBatch,
};

use tunewave_core::{
    AppSettings, Credit, Song, SongId, Ticket, TicketId, User, UserId, Withdrawal, WithdrawalId,
};

use crate::error::{Result, StoreError};
use crate::keys;
use crate::schema::{all_column_families, cf};
use crate::Store;

/// `RocksDB`-backed storage implementation.
pub struct RocksStore {
    db: Arc<DBWithThreadMode<MultiThreaded>>,
}

impl RocksStore {
    /// Open or create a `RocksDB` database at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_descriptors: Vec<_> = all_column_families()
            .into_iter()
            .map(|name| ColumnFamilyDescriptor::new(name, Options::default()))
            .collect();

        let db = DBWithThreadMode::open_cf_descriptors(&opts, path, cf_descriptors)
            .map_err(|e| StoreError::Database(e.to_string()))?;

        tracing::debug!(
            column_families = all_column_families().len(),
            "RocksDB store opened"
        );

        Ok(Self { db: Arc::new(db) })
    }

    /// Get a column family handle.
    fn cf(&self, name: &str) -> Result<Arc<BoundColumnFamily<'_>>> {
        self.db
            .cf_handle(name)
            .ok_or_else(|| StoreError::Database(format!("column family not found: {name}")))
    }

    /// Serialize a value using CBOR.
    fn serialize<T: serde::Serialize>(value: &T) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        ciborium::into_writer(value, &mut buf)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        Ok(buf)
    }

    /// Deserialize a value from CBOR.
    fn deserialize<T: serde::de::DeserializeOwned>(data: &[u8]) -> Result<T> {
        ciborium::from_reader(data).map_err(|e| StoreError::Serialization(e.to_string()))
    }

    /// Get and deserialize a single record.
    fn get_record<T: serde::de::DeserializeOwned>(
        &self,
        cf_name: &str,
        key: &[u8],
    ) -> Result<Option<T>> {
        let cf = self.cf(cf_name)?;
        self.db
            .get_cf(&cf, key)
            .map_err(|e| StoreError::Database(e.to_string()))?
            .map(|data| Self::deserialize(&data))
            .transpose()
    }

    /// Scan a whole column family in key order.
    fn scan_all<T: serde::de::DeserializeOwned>(&self, cf_name: &str) -> Result<Vec<T>> {
        let cf = self.cf(cf_name)?;
        let mut records = Vec::new();
        for item in self.db.iterator_cf(&cf, IteratorMode::Start) {
            let (_, value) = item.map_err(|e| StoreError::Database(e.to_string()))?;
            records.push(Self::deserialize(&value)?);
        }
        Ok(records)
    }
}

impl Store for RocksStore {
    // =========================================================================
    // User Operations
    // =========================================================================

    fn put_user(&self, user: &User) -> Result<()> {
        let cf_users = self.cf(cf::USERS)?;
        let cf_by_email = self.cf(cf::USERS_BY_EMAIL)?;

        let key = keys::user_key(&user.id);
        let value = Self::serialize(user)?;

        let mut batch = WriteBatch::default();
        batch.put_cf(&cf_users, &key, &value);
        batch.put_cf(&cf_by_email, keys::email_key(&user.email), &key);

        self.db
            .write(batch)
            .map_err(|e| StoreError::Database(e.to_string()))
    }

    fn get_user(&self, user_id: &UserId) -> Result<Option<User>> {
        self.get_record(cf::USERS, &keys::user_key(user_id))
    }

    fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let cf = self.cf(cf::USERS_BY_EMAIL)?;
        let Some(user_key) = self
            .db
            .get_cf(&cf, keys::email_key(email))
            .map_err(|e| StoreError::Database(e.to_string()))?
        else {
            return Ok(None);
        };
        self.get_record(cf::USERS, &user_key)
    }

    fn list_users(&self) -> Result<Vec<User>> {
        self.scan_all(cf::USERS)
    }

    // =========================================================================
    // Song Operations
    // =========================================================================

    fn put_song(&self, song: &Song) -> Result<()> {
        let cf_songs = self.cf(cf::SONGS)?;
        let cf_by_user = self.cf(cf::SONGS_BY_USER)?;

        let value = Self::serialize(song)?;

        let mut batch = WriteBatch::default();
        batch.put_cf(&cf_songs, song.id.to_bytes(), &value);
        batch.put_cf(&cf_by_user, keys::user_song_key(&song.user_id, &song.id), []);

        self.db
            .write(batch)
            .map_err(|e| StoreError::Database(e.to_string()))
    }

    fn get_song(&self, song_id: &SongId) -> Result<Option<Song>> {
        self.get_record(cf::SONGS, &song_id.to_bytes())
    }

    fn list_songs(&self) -> Result<Vec<Song>> {
        self.scan_all(cf::SONGS)
    }

    fn list_songs_by_user(&self, user_id: &UserId) -> Result<Vec<Song>> {
        let cf_by_user = self.cf(cf::SONGS_BY_USER)?;
        let prefix = keys::user_songs_prefix(user_id);

        let iter = self.db.iterator_cf(
            &cf_by_user,
            IteratorMode::From(&prefix, rocksdb::Direction::Forward),
        );

        let mut songs = Vec::new();
        for item in iter {
            let (key, _) = item.map_err(|e| StoreError::Database(e.to_string()))?;
            if !key.starts_with(&prefix) {
                break;
            }
            let song_id = keys::extract_song_id_from_user_key(&key);
            if let Some(song) = self.get_song(&song_id)? {
                songs.push(song);
            }
        }
        Ok(songs)
    }

    // =========================================================================
    // Withdrawal Operations
    // =========================================================================

    fn put_withdrawal(&self, withdrawal: &Withdrawal) -> Result<()> {
        let cf = self.cf(cf::WITHDRAWALS)?;
        let value = Self::serialize(withdrawal)?;
        self.db
            .put_cf(&cf, withdrawal.id.to_bytes(), value)
            .map_err(|e| StoreError::Database(e.to_string()))
    }

    fn get_withdrawal(&self, withdrawal_id: &WithdrawalId) -> Result<Option<Withdrawal>> {
        self.get_record(cf::WITHDRAWALS, &withdrawal_id.to_bytes())
    }

    fn list_withdrawals(&self) -> Result<Vec<Withdrawal>> {
        self.scan_all(cf::WITHDRAWALS)
    }

    // =========================================================================
    // Credit Operations
    // =========================================================================

    fn put_credit(&self, credit: &Credit) -> Result<()> {
        let cf = self.cf(cf::CREDITS)?;
        let value = Self::serialize(credit)?;
        self.db
            .put_cf(&cf, credit.id.to_bytes(), value)
            .map_err(|e| StoreError::Database(e.to_string()))
    }

    fn list_credits(&self) -> Result<Vec<Credit>> {
        self.scan_all(cf::CREDITS)
    }

    // =========================================================================
    // Ticket Operations
    // =========================================================================

    fn put_ticket(&self, ticket: &Ticket) -> Result<()> {
        let cf = self.cf(cf::TICKETS)?;
        let value = Self::serialize(ticket)?;
        self.db
            .put_cf(&cf, ticket.id.to_bytes(), value)
            .map_err(|e| StoreError::Database(e.to_string()))
    }

    fn get_ticket(&self, ticket_id: &TicketId) -> Result<Option<Ticket>> {
        self.get_record(cf::TICKETS, &ticket_id.to_bytes())
    }

    fn list_tickets(&self) -> Result<Vec<Ticket>> {
        self.scan_all(cf::TICKETS)
    }

    // =========================================================================
    // Settings Operations
    // =========================================================================

    fn get_settings(&self) -> Result<Option<AppSettings>> {
        self.get_record(cf::SETTINGS, keys::SETTINGS_KEY)
    }

    fn put_settings(&self, settings: &AppSettings) -> Result<()> {
        let cf = self.cf(cf::SETTINGS)?;
        let value = Self::serialize(settings)?;
        self.db
            .put_cf(&cf, keys::SETTINGS_KEY, value)
            .map_err(|e| StoreError::Database(e.to_string()))
    }
}
