//! Signing Log Entry
//!
//! One record per signing operation performed by the signing service.
//! Entries are created once and never modified; the admin API can only
//! read or delete them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Signing log entry as stored by a backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigningLogEntry {
    /// Backend-assigned, strictly increasing in creation order
    pub id: u64,
    pub make: String,
    pub model: String,
    #[serde(rename = "serialnumber")]
    pub serial_number: String,
    /// Fingerprint of the key that produced the signature
    pub fingerprint: String,
    pub created: DateTime<Utc>,
}

/// Payload of a signing event before the backend assigns its ID
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSigningLogEntry {
    pub make: String,
    pub model: String,
    pub serial_number: String,
    pub fingerprint: String,
    pub created: DateTime<Utc>,
}

impl NewSigningLogEntry {
    pub fn new(make: &str, model: &str, serial_number: &str, fingerprint: &str) -> Self {
        Self {
            make: make.to_string(),
            model: model.to_string(),
            serial_number: serial_number.to_string(),
            fingerprint: fingerprint.to_string(),
            created: Utc::now(),
        }
    }

    /// Attach the backend-assigned ID
    pub fn with_id(self, id: u64) -> SigningLogEntry {
        SigningLogEntry {
            id,
            make: self.make,
            model: self.model,
            serial_number: self.serial_number,
            fingerprint: self.fingerprint,
            created: self.created,
        }
    }
}

impl SigningLogEntry {
    /// Get a human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "#{} {}/{}/{} signed by {}",
            self.id, self.make, self.model, self.serial_number, self.fingerprint
        )
    }
}
