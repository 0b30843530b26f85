use quotewall_core::{
    decode_quote, encode_quote, normalize, QuoteDraft, QuoteValidationError, QUOTE_KEY_PREFIX,
};

fn draft(quote: &str, context: &str, origin: &str, extra_info: &str) -> QuoteDraft {
    QuoteDraft {
        quote: quote.to_string(),
        context: context.to_string(),
        origin: origin.to_string(),
        extra_info: extra_info.to_string(),
    }
}

#[test]
fn normalize_trims_all_fields_and_synthesizes_identity() {
    let record = normalize(
        &draft("  Be bold.  ", "  a keynote  ", "  https://example.com/x  ", "  notes  "),
        1_700_000_000_000,
    )
    .unwrap();

    assert_eq!(record.quote_text, "Be bold.");
    assert_eq!(record.context, "a keynote");
    assert_eq!(record.origin_url, "https://example.com/x");
    assert_eq!(record.extra_info, "notes");
    assert_eq!(record.created_at_millis, 1_700_000_000_000);
    assert!(record.id.starts_with("quote:1700000000000-"));
    assert!(record.id.starts_with(QUOTE_KEY_PREFIX));
}

#[test]
fn normalize_rejects_blank_quote_text() {
    let error = normalize(&draft("   ", "context", "", ""), 1).unwrap_err();
    assert_eq!(error, QuoteValidationError::EmptyQuote);

    let error = normalize(&draft("", "", "", ""), 1).unwrap_err();
    assert_eq!(error, QuoteValidationError::EmptyQuote);
}

#[test]
fn normalize_rejects_origin_without_scheme() {
    let error = normalize(&draft("ok", "", "example.com", ""), 1).unwrap_err();
    assert_eq!(
        error,
        QuoteValidationError::InvalidUrl("example.com".to_string())
    );
}

#[test]
fn normalize_accepts_absolute_origin_and_empty_origin() {
    assert!(normalize(&draft("ok", "", "https://example.com/x", ""), 1).is_ok());
    assert!(normalize(&draft("ok", "", "", ""), 1).is_ok());
    assert!(normalize(&draft("ok", "", "   ", ""), 1).is_ok());
}

#[test]
fn normalize_rejects_origin_without_authority() {
    let error = normalize(&draft("ok", "", "mailto:someone@example.com", ""), 1).unwrap_err();
    assert!(matches!(error, QuoteValidationError::InvalidUrl(_)));
}

#[test]
fn ids_differ_for_identical_timestamps() {
    let first = normalize(&draft("same clock", "", "", ""), 99).unwrap();
    let second = normalize(&draft("same clock", "", "", ""), 99).unwrap();
    assert_ne!(first.id, second.id);
}

#[test]
fn codec_is_its_own_inverse() {
    let record = normalize(&draft("round trip", "ctx", "https://example.com", "x"), 7).unwrap();
    let decoded = decode_quote(&record.id, &encode_quote(&record)).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn decode_accepts_the_shared_wire_shape() {
    let blob = r#"{"id":"quote:5-abc","quote":"hi","context":"c","origin":"","extraInfo":"notes","timestamp":5}"#;
    let record = decode_quote("quote:5-abc", blob).unwrap();
    assert_eq!(record.id, "quote:5-abc");
    assert_eq!(record.quote_text, "hi");
    assert_eq!(record.context, "c");
    assert_eq!(record.extra_info, "notes");
    assert_eq!(record.created_at_millis, 5);
}

#[test]
fn decode_reports_corrupt_blobs_as_recoverable_errors() {
    let error = decode_quote("quote:1-bad", "{not json").unwrap_err();
    assert_eq!(error.key, "quote:1-bad");
    assert!(error.to_string().contains("quote:1-bad"));
}
