//! Persistence adapter for record collections.
//!
//! # Responsibility
//! - Read and write whole collections as JSON arrays under fixed keys.
//! - Generate opaque identifiers for new records.
//!
//! # Invariants
//! - A collection is the unit of persistence: every save overwrites the
//!   full list stored under its key.
//! - Loading never fails: missing, unreadable or malformed values are
//!   treated as an empty collection.
//! - Log lines carry keys and counts only, never record contents.

use crate::db::DbError;
use crate::model::RecordId;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

mod kv;

pub use kv::{KeyValueStore, SqliteKeyValueStore};

pub type StoreResult<T> = Result<T, StoreError>;

/// Error raised by store writes (and by raw key-value reads).
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize collection: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Logical name of a persisted collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKey {
    Birthdays,
    Tasks,
    RecurringEvents,
}

impl CollectionKey {
    pub const ALL: [CollectionKey; 3] = [
        CollectionKey::Birthdays,
        CollectionKey::Tasks,
        CollectionKey::RecurringEvents,
    ];

    /// Storage key, identical to the one used by the web build.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Birthdays => "birthdays",
            Self::Tasks => "tasks",
            Self::RecurringEvents => "recurringEvents",
        }
    }
}

impl Display for CollectionKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Collection-level access over a string key-value store.
pub struct CollectionStore<S: KeyValueStore> {
    kv: S,
}

impl<S: KeyValueStore> CollectionStore<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    /// Returns the stored list for `key`, or an empty list when nothing
    /// usable is stored.
    pub fn load<T: DeserializeOwned>(&self, key: CollectionKey) -> Vec<T> {
        let raw = match self.kv.get_item(key.as_str()) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("event=collection_load module=store status=ok key={key} count=0 stored=false");
                return Vec::new();
            }
            Err(err) => {
                warn!(
                    "event=collection_load module=store status=error key={key} error_code=read_failed error={err}"
                );
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<T>>(&raw) {
            Ok(records) => {
                debug!(
                    "event=collection_load module=store status=ok key={key} count={}",
                    records.len()
                );
                records
            }
            Err(err) => {
                // Data errors may quote stored text; log the category only.
                warn!(
                    "event=collection_load module=store status=error key={key} error_code=parse_failed category={:?} line={} column={}",
                    err.classify(),
                    err.line(),
                    err.column()
                );
                Vec::new()
            }
        }
    }

    /// Serializes `records` and replaces whatever is stored under `key`.
    pub fn save<T: Serialize>(&self, key: CollectionKey, records: &[T]) -> StoreResult<()> {
        let raw = serde_json::to_string(records)?;
        self.kv.set_item(key.as_str(), &raw)?;
        debug!(
            "event=collection_save module=store status=ok key={key} count={} bytes={}",
            records.len(),
            raw.len()
        );
        Ok(())
    }
}

/// Generates an identifier for a new record.
///
/// Uniqueness is probabilistic; existing records are not consulted.
pub fn new_id() -> RecordId {
    Uuid::new_v4().simple().to_string()
}
