//! Content moderation gate for quote submissions.
//!
//! # Responsibility
//! - Classify free text as acceptable or rejected before anything reaches
//!   the store.
//! - Keep the pattern table injectable data, not control flow.
//!
//! # Invariants
//! - Screening is pure: no I/O, no mutation, no redaction.
//! - Any single rule match refuses the whole submission.

pub mod rules;
