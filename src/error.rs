use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::signinglog::backend::BackendError;

impl From<BackendError> for SigningLogError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::NotFound(id) => Self::NotFound(id),
            BackendError::Storage(msg) => Self::Backend(msg),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SigningLogError {
    #[error("Invalid signing log ID: {0}")]
    Validation(String),

    #[error("Signing log {0} not found")]
    NotFound(u64),

    #[error("Storage failure: {0}")]
    Backend(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Classification exposed to admin callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    NotFound,
    Backend,
}

impl SigningLogError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::NotFound(_) => ErrorKind::NotFound,
            // Config errors only occur at startup
            Self::Backend(_) | Self::Config(_) => ErrorKind::Backend,
        }
    }

    /// Message safe to hand back to an admin caller. Storage details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            Self::Backend(_) | Self::Config(_) => "Signing log storage failure".to_string(),
            other => other.to_string(),
        }
    }

    pub fn invalid_id(raw: &str) -> Self {
        Self::Validation(format!("{:?} is not a valid signing log identifier", raw))
    }
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::NotFound => "not_found",
            ErrorKind::Backend => "backend",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
