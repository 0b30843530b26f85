//! CLI smoke entry point.
//!
//! # Responsibility
//! - Drive one submit/reload/search cycle against the in-memory store to
//!   verify `quotewall_core` wiring outside any host UI.
//! - Keep output deterministic for quick local sanity checks.

use quotewall_core::{
    MemoryKeyValueStore, QuoteDraft, QuoteRepository, QuoteService, QuoteWallSession,
};

#[tokio::main]
async fn main() {
    println!("quotewall_core version={}", quotewall_core::core_version());

    let service = QuoteService::new(QuoteRepository::new(MemoryKeyValueStore::new()));
    let mut session = QuoteWallSession::new(service);

    *session.draft_mut() = QuoteDraft {
        quote: "  Be bold.  ".to_string(),
        context: "smoke probe".to_string(),
        origin: String::new(),
        extra_info: String::new(),
    };

    let committed = session.submit().await;
    session.reload().await;

    println!("submit committed={committed}");
    for quote in session.visible_quotes() {
        println!("{} | {}", quote.id, quote.quote_text);
    }
}
