//! Storage backend contract for signing log entries.
//!
//! The store only ever talks to a [`SigningLogBackend`]; it makes no
//! assumption about whether entries live in SQLite, in memory, or anywhere
//! else. Implementations:
//!
//! - [`Database`](crate::database::Database): persistent SQLite storage
//! - [`MemoryBackend`](crate::signinglog::memory::MemoryBackend): in-process map
//! - [`FailingBackend`](crate::signinglog::memory::FailingBackend): every call faults
//!
//! # Pagination
//!
//! `list_from(Some(k), limit)` selects entries with `id < k`, keeps the
//! `limit` newest of them and returns that page in ascending `id` order.
//! `list_from(None, limit)` does the same with no bound. Callers page towards
//! older entries by passing the smallest `id` of the previous page.

use async_trait::async_trait;
use thiserror::Error;

use crate::signinglog::entry::{NewSigningLogEntry, SigningLogEntry};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// No entry with this ID exists
    #[error("Signing log {0} does not exist")]
    NotFound(u64),

    /// Connectivity, corruption or any other storage fault
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<sqlx::Error> for BackendError {
    fn from(err: sqlx::Error) -> Self {
        Self::Storage(format!("Database error: {}", err))
    }
}

pub type BackendResult<T> = Result<T, BackendError>;

#[async_trait]
pub trait SigningLogBackend: Send + Sync {
    /// Returns up to `limit` entries older than `cursor`, ascending by `id`
    async fn list_from(&self, cursor: Option<u64>, limit: usize) -> BackendResult<Vec<SigningLogEntry>>;

    /// Removes one entry; [`BackendError::NotFound`] when it does not exist
    async fn delete_by_id(&self, id: u64) -> BackendResult<()>;

    /// Stores a new entry and returns it with its assigned ID
    async fn append(&self, entry: NewSigningLogEntry) -> BackendResult<SigningLogEntry>;
}
