//! Quote submission use-case service.
//!
//! # Responsibility
//! - Gate submissions: normalize, then screen, then persist.
//! - Map layer failures into short user-facing messages.
//!
//! # Invariants
//! - Validation and moderation run before any store call.
//! - Raw store errors never cross this boundary.

use crate::model::quote::{normalize_now, QuoteDraft, QuoteRecord, QuoteValidationError};
use crate::moderation::rules::{Moderator, RuleCategory, Screening};
use crate::repo::quote_repo::{QuoteRepository, RepoError, RepoResult};
use crate::store::KeyValueStore;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Submission failure surfaced to the submitter.
///
/// `Display` renders the short actionable message shown verbatim in the UI.
#[derive(Debug)]
pub enum SubmitError {
    /// Draft failed shape validation; nothing was screened or persisted.
    Validation(QuoteValidationError),
    /// Draft failed content screening; nothing was persisted.
    Rejected {
        /// Category of the first matching rule.
        category: RuleCategory,
    },
    /// Persisting the accepted record failed; the draft is still valid.
    Storage(RepoError),
}

impl Display for SubmitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Rejected { .. } => write!(
                f,
                "your submission contains inappropriate content, please revise and try again"
            ),
            Self::Storage(_) => write!(f, "failed to save quote, please try again"),
        }
    }
}

impl Error for SubmitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Rejected { .. } => None,
            Self::Storage(err) => Some(err),
        }
    }
}

/// Use-case facade over the repository and the moderation gate.
pub struct QuoteService<S: KeyValueStore> {
    repo: QuoteRepository<S>,
    moderator: Moderator,
}

impl<S: KeyValueStore> QuoteService<S> {
    /// Creates a service with the built-in moderation rule table.
    pub fn new(repo: QuoteRepository<S>) -> Self {
        Self::with_moderator(repo, Moderator::default())
    }

    /// Creates a service with a deployment-specific moderation table.
    pub fn with_moderator(repo: QuoteRepository<S>, moderator: Moderator) -> Self {
        Self { repo, moderator }
    }

    /// Loads the full collection, newest first.
    pub async fn load_quotes(&self) -> RepoResult<Vec<QuoteRecord>> {
        self.repo.load_all().await
    }

    /// Normalizes the draft into a persistable record.
    ///
    /// # Errors
    /// - [`SubmitError::Validation`] for empty quote text or a malformed
    ///   origin URL.
    pub fn validate(&self, draft: &QuoteDraft) -> Result<QuoteRecord, SubmitError> {
        normalize_now(draft).map_err(SubmitError::Validation)
    }

    /// Runs the moderation gate over every submitter-controlled field.
    ///
    /// # Errors
    /// - [`SubmitError::Rejected`] when any rule matches.
    pub fn screen(&self, draft: &QuoteDraft) -> Result<(), SubmitError> {
        match self.moderator.screen_draft(draft) {
            Screening::Accepted => Ok(()),
            Screening::Rejected { category } => {
                info!(
                    "event=quote_rejected module=service status=blocked category={}",
                    category.label()
                );
                Err(SubmitError::Rejected { category })
            }
        }
    }

    /// Persists an accepted record. No retry on failure.
    ///
    /// # Errors
    /// - [`SubmitError::Storage`] when the keyed write fails.
    pub async fn persist(&self, record: &QuoteRecord) -> Result<(), SubmitError> {
        self.repo.submit(record).await.map_err(SubmitError::Storage)
    }

    /// Runs one full submission attempt: normalize, screen, persist.
    ///
    /// # Contract
    /// - Local validation and moderation failures return before any store
    ///   call.
    /// - On success the caller owns merging the returned record into its
    ///   view (prepend: it is always the newest).
    pub async fn submit_draft(&self, draft: &QuoteDraft) -> Result<QuoteRecord, SubmitError> {
        let record = self.validate(draft)?;
        self.screen(draft)?;
        self.persist(&record).await?;
        Ok(record)
    }
}
