//! External key-value store contract.
//!
//! # Responsibility
//! - Define the async seam to the shared store this crate consumes.
//! - Keep transport failures typed so the repository boundary can translate
//!   them.
//!
//! # Invariants
//! - A missing key is `Ok(None)`, never an error.
//! - This layer takes no locks and runs no transactions over the store;
//!   last write wins per key.

use async_trait::async_trait;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Transport-level store failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store could not be reached at all.
    Unavailable(String),
    /// The store answered with a backend failure.
    Backend(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(message) => write!(f, "store unreachable: {message}"),
            Self::Backend(message) => write!(f, "store backend failure: {message}"),
        }
    }
}

impl Error for StoreError {}

/// Async contract for the external shared key-value store.
///
/// The production store is externally owned; this crate ships only the
/// in-memory reference used by tests and smoke probes. Every method is a
/// suspension point.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Enumerates every key starting with `prefix`, in stable order.
    async fn list(&self, prefix: &str) -> StoreResult<Vec<String>>;

    /// Fetches the raw blob under `key`.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Persists `value` under `key`, replacing any previous blob.
    async fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}
