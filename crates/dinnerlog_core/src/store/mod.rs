//! Record store abstraction and implementations.
//!
//! # Responsibility
//! - Define the load/save capability injected into services.
//! - Provide in-memory and SQLite-backed stores plus legacy JSON import.
//!
//! # Invariants
//! - `load_all` returns records in creation order.
//! - `save_all` replaces the persisted sequence as a whole.
//! - Record ids survive every save/load cycle unchanged.

use crate::db::DbError;
use crate::model::dinner::DinnerRecord;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod legacy;
pub mod memory;
pub mod sqlite;

pub type StoreResult<T> = Result<T, StoreError>;

/// Error for record store persistence and decoding.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    /// Connection schema is not at the version this store expects.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Persisted or imported data cannot be converted into records.
    InvalidData(String),
    Serialization(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} is not the expected version {expected_version}"
            ),
            Self::InvalidData(message) => write!(f, "invalid dinner data: {message}"),
            Self::Serialization(err) => write!(f, "dinner serialization failed: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialization(err) => Some(err),
            Self::UninitializedConnection { .. } | Self::InvalidData(_) => None,
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
        Self::Serialization(value)
    }
}

/// Whole-sequence persistence capability for dinner records.
pub trait DinnerStore {
    /// Loads every record in creation order.
    fn load_all(&self) -> StoreResult<Vec<DinnerRecord>>;
    /// Persists `records` as the complete sequence.
    fn save_all(&mut self, records: &[DinnerRecord]) -> StoreResult<()>;
}
