//! Quote repository client.
//!
//! # Responsibility
//! - Bulk-enumerate, fetch and decode records under the `quote:` namespace.
//! - Persist newly accepted records under their id key.
//!
//! # Invariants
//! - Per-key fetch/decode failures are logged and skipped, never raised.
//! - Only namespace enumeration failure surfaces as [`RepoError::Load`].
//! - `load_all` is read-only and reflects store state at call time.
//! - A failed `submit` leaves both the store and caller state untouched.

use crate::model::quote::{decode_quote, encode_quote, QuoteRecord, QUOTE_KEY_PREFIX};
use crate::store::{KeyValueStore, StoreError};
use futures::future::join_all;
use log::{debug, warn};
use std::cmp::Ordering;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result type for repository operations.
pub type RepoResult<T> = Result<T, RepoError>;

/// Repository failure taxonomy surfaced to callers.
#[derive(Debug)]
pub enum RepoError {
    /// Namespace enumeration failed; no collection could be produced.
    Load(StoreError),
    /// A write failed; the record was not persisted.
    Storage(StoreError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Load(err) => write!(f, "failed to enumerate quote keys: {err}"),
            Self::Storage(err) => write!(f, "failed to persist quote: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Load(err) => Some(err),
            Self::Storage(err) => Some(err),
        }
    }
}

/// Client for the shared `quote:` namespace.
pub struct QuoteRepository<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> QuoteRepository<S> {
    /// Creates a repository over the given store handle.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrows the underlying store handle.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Loads every decodable record in the namespace, newest first.
    ///
    /// # Contract
    /// - Per-key fetches run concurrently; ordering is re-established by the
    ///   final sort (descending `created_at_millis`, ascending `id` on ties).
    /// - A fetch or decode failure for one key is logged and skipped.
    /// - An empty namespace yields `Ok(vec![])`.
    ///
    /// # Errors
    /// - [`RepoError::Load`] when enumeration itself fails.
    pub async fn load_all(&self) -> RepoResult<Vec<QuoteRecord>> {
        let keys = self
            .store
            .list(QUOTE_KEY_PREFIX)
            .await
            .map_err(RepoError::Load)?;

        let total = keys.len();
        let outcomes = join_all(keys.iter().map(|key| self.fetch_one(key))).await;
        let mut quotes: Vec<QuoteRecord> = outcomes.into_iter().flatten().collect();

        let skipped = total - quotes.len();
        if skipped > 0 {
            warn!("event=quotes_loaded module=repo status=partial total={total} skipped={skipped}");
        } else {
            debug!("event=quotes_loaded module=repo status=ok total={total}");
        }

        quotes.sort_by(compare_newest_first);
        Ok(quotes)
    }

    /// Persists one encoded record under its id key.
    ///
    /// # Errors
    /// - [`RepoError::Storage`] on write failure; nothing is retried.
    pub async fn submit(&self, record: &QuoteRecord) -> RepoResult<()> {
        let blob = encode_quote(record);
        self.store
            .set(&record.id, &blob)
            .await
            .map_err(RepoError::Storage)?;

        debug!("event=quote_submitted module=repo status=ok key={}", record.id);
        Ok(())
    }

    /// Fetches and decodes one key, flattening every failure mode to `None`.
    async fn fetch_one(&self, key: &str) -> Option<QuoteRecord> {
        let blob = match self.store.get(key).await {
            Ok(Some(blob)) => blob,
            Ok(None) => {
                warn!("event=quote_skipped module=repo status=missing key={key}");
                return None;
            }
            Err(err) => {
                warn!("event=quote_skipped module=repo status=fetch_error key={key} reason={err}");
                return None;
            }
        };

        match decode_quote(key, &blob) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!("event=quote_skipped module=repo status=decode_error key={key} reason={err}");
                None
            }
        }
    }
}

/// Orders records newest-first, ascending id on equal timestamps.
fn compare_newest_first(a: &QuoteRecord, b: &QuoteRecord) -> Ordering {
    b.created_at_millis
        .cmp(&a.created_at_millis)
        .then_with(|| a.id.cmp(&b.id))
}
