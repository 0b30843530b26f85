//! Case-insensitive substring filter.
//!
//! # Responsibility
//! - Derive the displayed subset for the current search term.
//!
//! # Invariants
//! - A blank term yields the whole collection in source order.
//! - Matches consider quote text and context only.

use crate::model::quote::QuoteRecord;

/// Filters quotes by case-insensitive substring on text or context.
///
/// Returns borrowed records in source order; cheap enough to recompute on
/// every keystroke.
pub fn filter_quotes<'a>(quotes: &'a [QuoteRecord], term: &str) -> Vec<&'a QuoteRecord> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return quotes.iter().collect();
    }

    quotes
        .iter()
        .filter(|quote| {
            quote.quote_text.to_lowercase().contains(&needle)
                || quote.context.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::filter_quotes;
    use crate::model::quote::QuoteRecord;

    fn record(id: &str, text: &str, context: &str, extra: &str) -> QuoteRecord {
        QuoteRecord {
            id: id.to_string(),
            quote_text: text.to_string(),
            context: context.to_string(),
            origin_url: String::new(),
            extra_info: extra.to_string(),
            created_at_millis: 0,
        }
    }

    #[test]
    fn blank_term_is_identity() {
        let quotes = vec![record("a", "one", "", ""), record("b", "two", "", "")];
        let visible = filter_quotes(&quotes, "");
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].id, "a");
        assert_eq!(visible[1].id, "b");
    }

    #[test]
    fn match_is_case_insensitive_over_text_and_context() {
        let quotes = vec![
            record("a", "Stay hungry", "Steve Jobs", ""),
            record("b", "Be kind", "anonymous", ""),
        ];
        assert_eq!(filter_quotes(&quotes, "JOBS").len(), 1);
        assert_eq!(filter_quotes(&quotes, "hungry").len(), 1);
        assert_eq!(filter_quotes(&quotes, "kind").len(), 1);
    }

    #[test]
    fn extra_info_is_not_searched() {
        let quotes = vec![record("a", "plain", "plain", "needle")];
        assert!(filter_quotes(&quotes, "needle").is_empty());
    }
}
