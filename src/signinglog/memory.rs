//! In-memory backends
//!
//! [`MemoryBackend`] keeps entries in a `BTreeMap` keyed by ID and is used as
//! the deterministic fixture in tests and for local development.
//! [`FailingBackend`] rejects every call with a storage error.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::signinglog::backend::{BackendError, BackendResult, SigningLogBackend};
use crate::signinglog::entry::{NewSigningLogEntry, SigningLogEntry};

#[derive(Default)]
struct MemoryState {
    entries: BTreeMap<u64, SigningLogEntry>,
    last_id: u64,
}

/// In-memory signing log. Clones share the same entries.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    state: Arc<RwLock<MemoryState>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-populated with `count` entries, IDs `1..=count`
    pub async fn with_entries(count: u64) -> BackendResult<Self> {
        let backend = Self::new();
        for i in 1..=count {
            let entry = NewSigningLogEntry::new(
                "canonical",
                &format!("model-{}", i),
                &format!("SN{:05}", i),
                &format!("fingerprint-{}", i % 3),
            );
            backend.append(entry).await?;
        }
        Ok(backend)
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.entries.is_empty()
    }

    pub async fn contains(&self, id: u64) -> bool {
        self.state.read().await.entries.contains_key(&id)
    }
}

#[async_trait]
impl SigningLogBackend for MemoryBackend {
    async fn list_from(&self, cursor: Option<u64>, limit: usize) -> BackendResult<Vec<SigningLogEntry>> {
        let state = self.state.read().await;
        let upper = cursor.unwrap_or(u64::MAX);

        let mut page: Vec<SigningLogEntry> = state
            .entries
            .range(..upper)
            .rev()
            .take(limit)
            .map(|(_, entry)| entry.clone())
            .collect();
        page.reverse();

        Ok(page)
    }

    async fn delete_by_id(&self, id: u64) -> BackendResult<()> {
        let mut state = self.state.write().await;
        match state.entries.remove(&id) {
            Some(entry) => {
                debug!("Removed signing log entry: {}", entry.summary());
                Ok(())
            }
            None => Err(BackendError::NotFound(id)),
        }
    }

    async fn append(&self, entry: NewSigningLogEntry) -> BackendResult<SigningLogEntry> {
        let mut state = self.state.write().await;
        let id = state
            .last_id
            .checked_add(1)
            .ok_or_else(|| BackendError::Storage("Signing log ID space exhausted".to_string()))?;
        state.last_id = id;

        let entry = entry.with_id(id);
        state.entries.insert(id, entry.clone());
        Ok(entry)
    }
}

/// Backend whose storage is permanently unreachable
#[derive(Clone, Debug)]
pub struct FailingBackend {
    reason: String,
}

impl FailingBackend {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }

    fn fault<T>(&self) -> BackendResult<T> {
        Err(BackendError::Storage(self.reason.clone()))
    }
}

impl Default for FailingBackend {
    fn default() -> Self {
        Self::new("MOCK error")
    }
}

#[async_trait]
impl SigningLogBackend for FailingBackend {
    async fn list_from(&self, _cursor: Option<u64>, _limit: usize) -> BackendResult<Vec<SigningLogEntry>> {
        self.fault()
    }

    async fn delete_by_id(&self, _id: u64) -> BackendResult<()> {
        self.fault()
    }

    async fn append(&self, _entry: NewSigningLogEntry) -> BackendResult<SigningLogEntry> {
        self.fault()
    }
}
