//! Quote record, draft input, validation and blob codec.
//!
//! # Responsibility
//! - Define the JSON wire shape stored under each `quote:` key.
//! - Normalize and validate raw form input into a persistable record.
//! - Encode/decode the single-record blob for the store.
//!
//! # Invariants
//! - `id` embeds creation time plus a random suffix and doubles as the
//!   storage key; it is never reused.
//! - `quote_text` is non-empty after trimming.
//! - A non-empty `origin_url` is an absolute URL with scheme and authority.
//! - `decode_quote` is the exact inverse of `encode_quote` for every valid
//!   record.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};
use url::Url;

/// Namespace prefix for every key written or read by this crate.
pub const QUOTE_KEY_PREFIX: &str = "quote:";

const ID_SUFFIX_LEN: usize = 9;
const BASE36_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Canonical persisted quote record.
///
/// The serde renames pin the JSON wire shape shared with every other store
/// consumer; the Rust field names are internal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    /// Storage key: `quote:<epoch_millis>-<random base-36 suffix>`.
    pub id: String,
    /// The quoted text. Required, stored trimmed.
    #[serde(rename = "quote")]
    pub quote_text: String,
    /// Who said it, when, where. May be empty.
    pub context: String,
    /// Source URL. Empty, or an absolute URL with scheme and authority.
    #[serde(rename = "origin")]
    pub origin_url: String,
    /// Free-form notes. May be empty.
    #[serde(rename = "extraInfo")]
    pub extra_info: String,
    /// Creation time in epoch milliseconds; the sole sort key.
    #[serde(rename = "timestamp")]
    pub created_at_millis: i64,
}

/// Unvalidated submission form input, owned by a session until committed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteDraft {
    /// Raw quote text.
    pub quote: String,
    /// Raw context line.
    pub context: String,
    /// Raw origin URL.
    pub origin: String,
    /// Raw free-form notes.
    pub extra_info: String,
}

/// Shape-validation failure for draft normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteValidationError {
    /// Trimmed quote text is empty.
    EmptyQuote,
    /// Origin is non-empty but not an absolute URL.
    InvalidUrl(String),
}

impl Display for QuoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyQuote => write!(f, "quote text is required"),
            Self::InvalidUrl(_) => write!(f, "please provide a valid URL for the origin"),
        }
    }
}

impl Error for QuoteValidationError {}

/// Decode failure for one stored blob.
#[derive(Debug)]
pub struct DecodeError {
    /// Key the blob was fetched from.
    pub key: String,
    source: serde_json::Error,
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid quote blob under `{}`: {}", self.key, self.source)
    }
}

impl Error for DecodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

/// Normalizes raw form input into a persistable record.
///
/// # Contract
/// - All four fields are trimmed.
/// - `now_millis` becomes `created_at_millis` and is embedded in the id.
///
/// # Errors
/// - [`QuoteValidationError::EmptyQuote`] when the trimmed quote text is
///   empty.
/// - [`QuoteValidationError::InvalidUrl`] when a non-empty trimmed origin
///   does not parse as an absolute URL with an authority.
pub fn normalize(
    draft: &QuoteDraft,
    now_millis: i64,
) -> Result<QuoteRecord, QuoteValidationError> {
    let quote_text = draft.quote.trim();
    if quote_text.is_empty() {
        return Err(QuoteValidationError::EmptyQuote);
    }

    let origin_url = draft.origin.trim();
    if !origin_url.is_empty() && !is_absolute_url(origin_url) {
        return Err(QuoteValidationError::InvalidUrl(origin_url.to_string()));
    }

    Ok(QuoteRecord {
        id: new_quote_id(now_millis),
        quote_text: quote_text.to_string(),
        context: draft.context.trim().to_string(),
        origin_url: origin_url.to_string(),
        extra_info: draft.extra_info.trim().to_string(),
        created_at_millis: now_millis,
    })
}

/// Normalizes a draft using the current system clock.
pub fn normalize_now(draft: &QuoteDraft) -> Result<QuoteRecord, QuoteValidationError> {
    normalize(draft, epoch_millis_now())
}

/// Builds a fresh record id: namespace prefix, creation time, random suffix.
///
/// The 9-character base-36 suffix carries ~46 bits of entropy on top of the
/// millisecond timestamp; uniqueness is not enforced by the store.
pub fn new_quote_id(now_millis: i64) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| BASE36_ALPHABET[rng.gen_range(0..BASE36_ALPHABET.len())] as char)
        .collect();
    format!("{QUOTE_KEY_PREFIX}{now_millis}-{suffix}")
}

/// Encodes one record as the JSON blob stored under its id key.
pub fn encode_quote(record: &QuoteRecord) -> String {
    serde_json::to_string(record).expect("plain quote record serializes to JSON")
}

/// Decodes one stored blob back into a record.
///
/// # Errors
/// - [`DecodeError`] for corrupt blobs; recoverable, callers skip the key
///   instead of aborting.
pub fn decode_quote(key: &str, blob: &str) -> Result<QuoteRecord, DecodeError> {
    serde_json::from_str(blob).map_err(|source| DecodeError {
        key: key.to_string(),
        source,
    })
}

fn is_absolute_url(value: &str) -> bool {
    Url::parse(value).is_ok_and(|url| url.has_authority())
}

fn epoch_millis_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock is after the unix epoch")
        .as_millis() as i64
}

#[cfg(test)]
mod tests {
    use super::{is_absolute_url, new_quote_id, QUOTE_KEY_PREFIX};

    #[test]
    fn quote_id_embeds_prefix_and_timestamp() {
        let id = new_quote_id(1_700_000_000_000);
        assert!(id.starts_with("quote:1700000000000-"));
        assert_eq!(id.len(), QUOTE_KEY_PREFIX.len() + "1700000000000-".len() + 9);
    }

    #[test]
    fn quote_id_suffix_is_lowercase_base36() {
        let id = new_quote_id(42);
        let suffix = id.rsplit('-').next().unwrap();
        assert!(suffix
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn absolute_url_requires_scheme_and_authority() {
        assert!(is_absolute_url("https://example.com/x"));
        assert!(is_absolute_url("http://example.com"));
        assert!(!is_absolute_url("example.com"));
        assert!(!is_absolute_url("/relative/path"));
        assert!(!is_absolute_url("mailto:someone@example.com"));
    }
}
