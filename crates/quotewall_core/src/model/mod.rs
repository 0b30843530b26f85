//! Quote domain model and wire codec.
//!
//! # Responsibility
//! - Define the canonical record persisted to the shared store.
//! - Normalize raw form input into validated, persistable records.
//!
//! # Invariants
//! - Every record is identified by a stable `quote:`-prefixed id that
//!   doubles as its storage key.
//! - Records are immutable once created; there is no update or delete path.

pub mod quote;
