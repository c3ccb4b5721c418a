//! Signing Log
//!
//! Admin-facing view of the signing audit log: a storage contract, the store
//! that validates and paginates over it, and the service that shapes results
//! for callers.

pub mod backend;
pub mod entry;
pub mod memory;
pub mod service;
pub mod store;

pub use backend::{BackendError, SigningLogBackend};
pub use entry::{NewSigningLogEntry, SigningLogEntry};
pub use memory::{FailingBackend, MemoryBackend};
pub use service::{AdminQueryService, QueryResult};
pub use store::{SigningLogStore, DEFAULT_PAGE_SIZE};
