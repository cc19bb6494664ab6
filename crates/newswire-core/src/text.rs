use std::sync::LazyLock;

use regex::Regex;
use sha1::{Digest, Sha1};

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());
static URL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://\S+").unwrap());
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Clean raw feed text: strip markup tags and bare URLs, collapse whitespace
/// runs to a single space, trim.
///
/// Total and idempotent; empty input yields empty output. Must be applied the
/// same way on the collector and store sides so that hash equality reflects
/// content equality rather than formatting differences.
pub fn normalize(raw: &str) -> String {
    let stripped = TAG_RE.replace_all(raw, " ");
    let stripped = URL_RE.replace_all(&stripped, " ");
    let collapsed = WHITESPACE_RE.replace_all(&stripped, " ");
    collapsed.trim().to_string()
}

/// Content-addressed dedup key: SHA-1 over the normalized title and summary,
/// concatenated without a separator, as lowercase hex.
///
/// The missing separator means `("ab", "c")` and `("a", "bc")` hash alike.
/// Known limitation, kept for hash compatibility with existing rows.
pub fn content_hash(normalized_title: &str, normalized_summary: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(normalized_title.as_bytes());
    hasher.update(normalized_summary.as_bytes());
    hex::encode(hasher.finalize())
}
