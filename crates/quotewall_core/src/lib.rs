//! Core domain logic for QuoteWall.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod moderation;
pub mod repo;
pub mod search;
pub mod service;
pub mod session;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::quote::{
    decode_quote, encode_quote, new_quote_id, normalize, normalize_now, DecodeError, QuoteDraft,
    QuoteRecord, QuoteValidationError, QUOTE_KEY_PREFIX,
};
pub use moderation::rules::{default_rules, ModerationRule, Moderator, RuleCategory, Screening};
pub use repo::quote_repo::{QuoteRepository, RepoError, RepoResult};
pub use search::filter::filter_quotes;
pub use service::quote_service::{QuoteService, SubmitError};
pub use session::wall::{QuoteWallSession, SubmitPhase};
pub use store::memory::MemoryKeyValueStore;
pub use store::{KeyValueStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
