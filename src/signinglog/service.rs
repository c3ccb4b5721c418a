//! Admin Query Service
//!
//! Turns store outcomes into the `{success, signingLog}` envelope returned
//! to admin callers. Failures carry an error descriptor and never entries.

use serde::Serialize;
use tracing::{error, info, warn};

use crate::error::{ErrorKind, SigningLogError};
use crate::signinglog::entry::SigningLogEntry;
use crate::signinglog::store::SigningLogStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryError {
    pub kind: ErrorKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryResult {
    success: bool,
    #[serde(rename = "signingLog", skip_serializing_if = "Option::is_none")]
    signing_log: Option<Vec<SigningLogEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<QueryError>,
}

impl QueryResult {
    pub fn entries(entries: Vec<SigningLogEntry>) -> Self {
        Self {
            success: true,
            signing_log: Some(entries),
            error: None,
        }
    }

    /// Success without payload, as returned by delete
    pub fn done() -> Self {
        Self {
            success: true,
            signing_log: None,
            error: None,
        }
    }

    pub fn failed(err: &SigningLogError) -> Self {
        Self {
            success: false,
            signing_log: None,
            error: Some(QueryError {
                kind: err.kind(),
                message: err.public_message(),
            }),
        }
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn signing_log(&self) -> &[SigningLogEntry] {
        self.signing_log.as_deref().unwrap_or(&[])
    }

    pub fn error(&self) -> Option<&QueryError> {
        self.error.as_ref()
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.error.as_ref().map(|e| e.kind)
    }
}

#[derive(Clone)]
pub struct AdminQueryService {
    store: SigningLogStore,
}

impl AdminQueryService {
    pub fn new(store: SigningLogStore) -> Self {
        Self { store }
    }

    pub async fn list(&self, from_id: Option<&str>) -> QueryResult {
        match self.store.list(from_id).await {
            Ok(entries) => QueryResult::entries(entries),
            Err(e) => {
                error!("Failed to list signing logs: {}", e);
                QueryResult::failed(&e)
            }
        }
    }

    pub async fn delete(&self, id: &str) -> QueryResult {
        match self.store.delete(id).await {
            Ok(()) => {
                info!("Signing log {} deleted", id);
                QueryResult::done()
            }
            Err(e @ SigningLogError::Backend(_)) => {
                error!("Failed to delete signing log {}: {}", id, e);
                QueryResult::failed(&e)
            }
            Err(e) => {
                warn!("Rejected signing log deletion: {}", e);
                QueryResult::failed(&e)
            }
        }
    }
}
