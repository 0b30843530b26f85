//! Per-session view-controller state.
//!
//! # Responsibility
//! - Own the presentation-local mutable state with an explicit lifecycle.
//!
//! # Invariants
//! - Failures keep the session editable; nothing here is fatal.
//! - The cached collection is only ever replaced whole or prepended to.

pub mod wall;
