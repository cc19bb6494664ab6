use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted post row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredPost {
    pub id: i64,
    pub title: String,
    pub summary: String,
    pub category: String,
    pub hash: String,
    pub created_at: DateTime<Utc>,
}

/// Data required to insert a post. Fields are already normalized and
/// validated; the hash is derived from them.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub summary: String,
    pub category: String,
    pub hash: String,
}
