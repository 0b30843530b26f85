//! Quote wall session state machine.
//!
//! # Responsibility
//! - Drive load/submit/search flows for one user session.
//! - Hold the form draft, cached collection, loading flag and last error.
//!
//! # Invariants
//! - A submission attempt advances `Editing -> Validating -> Moderating ->
//!   Persisting`; every failure path restores `Editing` with the draft
//!   preserved and a user-facing reason recorded.
//! - A failed or abandoned operation never leaves a half-merged collection:
//!   the cache is replaced whole on reload and prepended to only after a
//!   successful write.
//! - Nothing is retried automatically.

use crate::model::quote::{QuoteDraft, QuoteRecord};
use crate::search::filter::filter_quotes;
use crate::service::quote_service::{QuoteService, SubmitError};
use crate::store::KeyValueStore;
use log::warn;

/// Progress marker for the current submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    /// Accepting form input.
    Editing,
    /// Running codec shape validation.
    Validating,
    /// Running the content moderation gate.
    Moderating,
    /// Writing the accepted record to the store.
    Persisting,
}

/// View-controller owning one user session over the shared quote wall.
///
/// Sessions hold no cross-session state; the external store is the only
/// shared resource.
pub struct QuoteWallSession<S: KeyValueStore> {
    service: QuoteService<S>,
    quotes: Vec<QuoteRecord>,
    draft: QuoteDraft,
    search_term: String,
    phase: SubmitPhase,
    loading: bool,
    last_error: Option<String>,
}

impl<S: KeyValueStore> QuoteWallSession<S> {
    /// Creates an empty session over the given service.
    pub fn new(service: QuoteService<S>) -> Self {
        Self {
            service,
            quotes: Vec::new(),
            draft: QuoteDraft::default(),
            search_term: String::new(),
            phase: SubmitPhase::Editing,
            loading: false,
            last_error: None,
        }
    }

    /// Rebuilds the cached collection from the store.
    ///
    /// Enumeration failure degrades to an empty collection with an
    /// empty-state message; it is never fatal and never merges partially.
    pub async fn reload(&mut self) {
        self.loading = true;
        match self.service.load_quotes().await {
            Ok(quotes) => {
                self.quotes = quotes;
                self.last_error = None;
            }
            Err(err) => {
                warn!("event=session_reload module=session status=error reason={err}");
                self.quotes = Vec::new();
                self.last_error = Some("could not load quotes, please try again later".to_string());
            }
        }
        self.loading = false;
    }

    /// Runs one submission attempt for the current draft.
    ///
    /// On commit the new record is prepended (it is always the newest), the
    /// form is cleared and `true` is returned. On failure the draft and
    /// search term are preserved, [`Self::last_error`] carries the reason,
    /// and the phase returns to [`SubmitPhase::Editing`].
    pub async fn submit(&mut self) -> bool {
        self.last_error = None;

        self.phase = SubmitPhase::Validating;
        let record = match self.service.validate(&self.draft) {
            Ok(record) => record,
            Err(err) => return self.fail_submit(&err),
        };

        self.phase = SubmitPhase::Moderating;
        if let Err(err) = self.service.screen(&self.draft) {
            return self.fail_submit(&err);
        }

        self.phase = SubmitPhase::Persisting;
        if let Err(err) = self.service.persist(&record).await {
            return self.fail_submit(&err);
        }

        self.quotes.insert(0, record);
        self.draft = QuoteDraft::default();
        self.phase = SubmitPhase::Editing;
        true
    }

    /// Replaces the active search term.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Returns the currently displayed subset, derived on demand.
    pub fn visible_quotes(&self) -> Vec<&QuoteRecord> {
        filter_quotes(&self.quotes, &self.search_term)
    }

    /// Borrows the full cached collection, newest first.
    pub fn quotes(&self) -> &[QuoteRecord] {
        &self.quotes
    }

    /// Borrows the current draft.
    pub fn draft(&self) -> &QuoteDraft {
        &self.draft
    }

    /// Mutably borrows the current draft for form edits.
    pub fn draft_mut(&mut self) -> &mut QuoteDraft {
        &mut self.draft
    }

    /// Returns the active search term.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Returns the current submission phase.
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Returns whether a reload is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the user-facing reason for the last failure, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn fail_submit(&mut self, err: &SubmitError) -> bool {
        self.last_error = Some(err.to_string());
        self.phase = SubmitPhase::Editing;
        false
    }
}
