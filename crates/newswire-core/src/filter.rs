use std::fmt;

use serde::{Deserialize, Serialize};

/// Editorial category assigned to a headline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Political,
    Cricket,
    State,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Political => "Political",
            Category::Cricket => "Cricket",
            Category::State => "State",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Topic exclusion groups, matched case-insensitively against the raw title.
const FINANCE_LIFESTYLE: &[&str] = &["vastu", "share", "stock", "profit", "investment"];
const ENTERTAINMENT: &[&str] = &["movie", "cinema", "actor", "actress", "heroine", "gossip"];
const FOREIGN_SPORT: &[&str] = &["football", "messi", "fifa"];
const EXCLUDED_POLITICS: &[&str] = &["bihar", "nitish", "trump", "russia", "ukraine"];

const POLITICAL_KEYWORDS: &[&str] = &["chandrababu", "jagan", "ysrcp", "tdp", "minister", "cm"];
const CRICKET_KEYWORDS: &[&str] = &["cricket", "ipl", "odi", "t20", "test", "bcci", "icc", "vs"];

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Whether a headline passes the topic exclusion lists.
pub fn is_allowed(title: &str) -> bool {
    let lowered = title.to_lowercase();

    !(contains_any(&lowered, FINANCE_LIFESTYLE)
        || contains_any(&lowered, ENTERTAINMENT)
        || contains_any(&lowered, FOREIGN_SPORT)
        || contains_any(&lowered, EXCLUDED_POLITICS))
}

/// Categorize a headline by keyword rules, checked in fixed priority order:
/// political before cricket, `State` as the fallback.
pub fn detect_category(title: &str) -> Category {
    let lowered = title.to_lowercase();

    if contains_any(&lowered, POLITICAL_KEYWORDS) {
        Category::Political
    } else if contains_any(&lowered, CRICKET_KEYWORDS) {
        Category::Cricket
    } else {
        Category::State
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_finance_and_lifestyle() {
        assert!(!is_allowed("Share market vastu tips"));
        assert!(!is_allowed("Top stocks to watch for profit"));
    }

    #[test]
    fn test_rejects_entertainment_and_foreign_sport() {
        assert!(!is_allowed("Actress spotted at movie launch"));
        assert!(!is_allowed("Messi leads team into FIFA final"));
    }

    #[test]
    fn test_rejects_excluded_politics() {
        assert!(!is_allowed("Trump comments on Russia Ukraine talks"));
    }

    #[test]
    fn test_allows_regular_headline() {
        assert!(is_allowed("Chandrababu announces new scheme"));
        assert!(is_allowed("Heavy rain forecast for coastal districts"));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert!(!is_allowed("VASTU tips for the week"));
        assert_eq!(detect_category("IPL auction tomorrow"), Category::Cricket);
    }

    #[test]
    fn test_category_priority_political_first() {
        // Contains both a political and a cricket keyword
        assert_eq!(
            detect_category("CM to attend cricket stadium opening"),
            Category::Political
        );
    }

    #[test]
    fn test_category_default_is_state() {
        assert_eq!(
            detect_category("Heavy rain forecast for coastal districts"),
            Category::State
        );
    }
}
