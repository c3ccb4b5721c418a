//! Signing Log Store
//!
//! Validates admin input, applies the page size and classifies backend
//! outcomes. Holds no state of its own besides the backend handle.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::SigningLogError;
use crate::signinglog::backend::SigningLogBackend;
use crate::signinglog::entry::SigningLogEntry;

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Clone)]
pub struct SigningLogStore {
    backend: Arc<dyn SigningLogBackend>,
    page_size: usize,
}

impl SigningLogStore {
    pub fn new(backend: Arc<dyn SigningLogBackend>) -> Self {
        Self::with_page_size(backend, DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(backend: Arc<dyn SigningLogBackend>, page_size: usize) -> Self {
        Self { backend, page_size }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// List one page of entries older than `from_id`.
    ///
    /// A cursor that is not a non-negative integer is ignored and the
    /// newest page is returned instead.
    pub async fn list(&self, from_id: Option<&str>) -> Result<Vec<SigningLogEntry>, SigningLogError> {
        let cursor = parse_cursor(from_id);
        debug!("Listing signing logs (cursor: {:?}, limit: {})", cursor, self.page_size);

        let entries = self.backend.list_from(cursor, self.page_size).await?;
        Ok(entries)
    }

    /// Delete the entry whose ID is given as a raw string
    pub async fn delete(&self, id: &str) -> Result<(), SigningLogError> {
        let id = parse_id(id)?;
        self.backend.delete_by_id(id).await?;
        debug!("Deleted signing log {}", id);
        Ok(())
    }
}

fn parse_cursor(raw: Option<&str>) -> Option<u64> {
    let raw = raw?;
    match raw.parse::<u64>() {
        Ok(cursor) => Some(cursor),
        Err(_) => {
            warn!("Ignoring malformed signing log cursor: {:?}", raw);
            None
        }
    }
}

/// Parse an untrusted identifier. Overlong digit strings fail instead of wrapping.
pub fn parse_id(raw: &str) -> Result<u64, SigningLogError> {
    raw.parse::<u64>().map_err(|_| SigningLogError::invalid_id(raw))
}
