use serde::{Deserialize, Serialize};

use crate::filter::Category;

/// A headline pulled from an RSS source. Discarded once filtered or posted.
#[derive(Debug, Clone)]
pub struct Headline {
    pub title: String,
}

/// An accepted (title, summary, category) triple, sent to the store as the
/// body of `POST /api/news/raw`. Ownership transfers to the store on a
/// successful post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub title: String,
    pub summary: String,
    pub category: Category,
}
