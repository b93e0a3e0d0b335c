//! Durable key/value preferences.
//!
//! # Responsibility
//! - Define the `PreferencesStore` contract consumed by the registry and shell.
//! - Provide the SQLite-backed store and the text codec for stored values.
//! - Load and save numeric layout settings.
//!
//! # Invariants
//! - Values are stored as text; decoding never panics.
//! - Malformed stored values read as absent so callers fall back to defaults.
//! - Concurrent writers resolve last-write-wins per key.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod codec;
pub mod keys;
pub mod settings;
pub mod store;

pub type PrefsResult<T> = Result<T, PrefsError>;

/// Preferences read/write failures.
#[derive(Debug)]
pub enum PrefsError {
    Db(DbError),
    /// A value could not be encoded for storage under `key`.
    Encode {
        key: String,
        source: serde_json::Error,
    },
}

impl Display for PrefsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode { key, source } => {
                write!(f, "failed to encode preference `{key}`: {source}")
            }
        }
    }
}

impl Error for PrefsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode { source, .. } => Some(source),
        }
    }
}

impl From<DbError> for PrefsError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for PrefsError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}
