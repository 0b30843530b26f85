//! Repository layer over the external key-value store.
//!
//! # Responsibility
//! - Turn flat keyed blobs into an ordered, decoded quote collection.
//! - Translate transport failures into the crate error taxonomy.
//!
//! # Invariants
//! - One corrupt or missing record never aborts a full load.
//! - Load results are sorted newest-first with deterministic tie-breaks.

pub mod quote_repo;
