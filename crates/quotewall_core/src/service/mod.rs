//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate codec, moderation and repository into submission flows.
//! - Keep presentation layers decoupled from storage details.

pub mod quote_service;
