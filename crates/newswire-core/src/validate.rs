use std::fmt;

use serde::{Deserialize, Serialize};

use crate::text::normalize;

/// Why an item was skipped rather than stored. Expected and non-exceptional;
/// rendered verbatim into API responses and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Title or summary absent or empty after normalization
    Missing,
    /// Summary below the minimum length threshold
    TooShort,
    /// Summary is an echo of the headline
    TitleCopy,
    /// Summary contains known generator boilerplate
    Generic,
    /// A row with the same content hash already exists
    Duplicate,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::Missing => "missing",
            SkipReason::TooShort => "too_short",
            SkipReason::TitleCopy => "title_copy",
            SkipReason::Generic => "generic",
            SkipReason::Duplicate => "duplicate",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Placeholder sentences the upstream generator falls back to when it has
// nothing substantive to say. Matched as plain substrings, never by
// re-invoking generation.
const BOILERPLATE_PHRASES: &[&str] = &[
    "ఆంధ్రప్రదేశ్‌లో వెలుగులోకి",
    "సంబంధిత అధికారులు",
    "Details are awaited",
    "Authorities are looking into the matter",
];

/// Shared acceptance policy for generated summaries, used by the collector
/// before sending and by the store before inserting. Historically the two
/// sides carried diverging copies of these checks; they must stay one.
#[derive(Debug, Clone)]
pub struct SummaryPolicy {
    /// Minimum summary length in characters
    pub min_len: usize,
    /// Additional boilerplate substrings beyond the built-in set
    pub extra_boilerplate: Vec<String>,
}

impl Default for SummaryPolicy {
    fn default() -> Self {
        Self {
            min_len: 80,
            extra_boilerplate: Vec::new(),
        }
    }
}

impl SummaryPolicy {
    pub fn new(min_len: usize, extra_boilerplate: Vec<String>) -> Self {
        Self {
            min_len,
            extra_boilerplate,
        }
    }

    /// Check a summary against its title. Rules run in order and
    /// short-circuit on the first failure.
    pub fn check(&self, title: &str, summary: &str) -> Result<(), SkipReason> {
        let title = normalize(title);
        let summary = normalize(summary);

        if summary.chars().count() < self.min_len {
            return Err(SkipReason::TooShort);
        }

        if summary == title {
            return Err(SkipReason::TitleCopy);
        }

        let is_boilerplate = BOILERPLATE_PHRASES
            .iter()
            .any(|phrase| summary.contains(phrase))
            || self
                .extra_boilerplate
                .iter()
                .any(|phrase| summary.contains(phrase.as_str()));

        if is_boilerplate {
            return Err(SkipReason::Generic);
        }

        Ok(())
    }
}
