use chrono::{DateTime, Duration, Utc};
use sqlx::FromRow;

use super::models::{NewPost, StoredPost};
use super::Database;
use crate::Result;

/// Repository for post rows
pub struct PostRepository<'a> {
    db: &'a Database,
}

#[derive(FromRow)]
struct PostRow {
    id: i64,
    title: String,
    summary: String,
    category: String,
    hash: String,
    created_at: DateTime<Utc>,
}

impl From<PostRow> for StoredPost {
    fn from(row: PostRow) -> Self {
        StoredPost {
            id: row.id,
            title: row.title,
            summary: row.summary,
            category: row.category,
            hash: row.hash,
            created_at: row.created_at,
        }
    }
}

impl<'a> PostRepository<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Insert a post unless a row with the same hash already exists.
    ///
    /// The unique index on `hash` and the atomicity of INSERT OR IGNORE are
    /// the only deduplication mechanism; there is deliberately no separate
    /// existence check that could race with a concurrent insert. Returns the
    /// new row, or `None` when the hash was already present.
    pub async fn insert_ignore(&self, new_post: &NewPost) -> Result<Option<StoredPost>> {
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT OR IGNORE INTO posts (title, summary, category, hash, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&new_post.title)
        .bind(&new_post.summary)
        .bind(&new_post.category)
        .bind(&new_post.hash)
        .bind(now)
        .execute(self.db.pool())
        .await?;

        if result.rows_affected() > 0 {
            self.find_by_id(result.last_insert_rowid()).await
        } else {
            Ok(None)
        }
    }

    /// Find a post by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<StoredPost>> {
        let row: Option<PostRow> = sqlx::query_as(
            r#"
            SELECT id, title, summary, category, hash, created_at
            FROM posts
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;

        Ok(row.map(StoredPost::from))
    }

    /// Most recent posts, newest first by insertion order, optionally
    /// restricted to the last `max_age_hours`. The window is read-time only;
    /// nothing is ever deleted for age.
    pub async fn list_recent(
        &self,
        limit: u32,
        max_age_hours: Option<i64>,
    ) -> Result<Vec<StoredPost>> {
        let rows: Vec<PostRow> = match max_age_hours {
            Some(hours) => {
                let cutoff = Utc::now() - Duration::hours(hours);
                sqlx::query_as(
                    r#"
                    SELECT id, title, summary, category, hash, created_at
                    FROM posts
                    WHERE created_at >= ?
                    ORDER BY id DESC
                    LIMIT ?
                    "#,
                )
                .bind(cutoff)
                .bind(limit)
                .fetch_all(self.db.pool())
                .await?
            }
            None => {
                sqlx::query_as(
                    r#"
                    SELECT id, title, summary, category, hash, created_at
                    FROM posts
                    ORDER BY id DESC
                    LIMIT ?
                    "#,
                )
                .bind(limit)
                .fetch_all(self.db.pool())
                .await?
            }
        };

        Ok(rows.into_iter().map(StoredPost::from).collect())
    }

    /// Overwrite title, summary and category by primary key. Admin path:
    /// no validation is re-applied, the hash and created_at stay untouched.
    pub async fn update(
        &self,
        id: i64,
        title: &str,
        summary: &str,
        category: &str,
    ) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE posts
            SET title = ?, summary = ?, category = ?
            WHERE id = ?
            "#,
        )
        .bind(title)
        .bind(summary)
        .bind(category)
        .bind(id)
        .execute(self.db.pool())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a post by primary key
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id)
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str, hash: &str) -> NewPost {
        NewPost {
            title: title.to_string(),
            summary: format!("summary for {}", title),
            category: "State".to_string(),
            hash: hash.to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_ignore_dedupes_on_hash() {
        let db = Database::new_in_memory().await.unwrap();
        let repo = PostRepository::new(&db);

        let first = repo.insert_ignore(&post("A", "h1")).await.unwrap();
        assert!(first.is_some());

        let second = repo.insert_ignore(&post("A again", "h1")).await.unwrap();
        assert!(second.is_none());

        let rows = repo.list_recent(10, None).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "A");
    }

    #[tokio::test]
    async fn test_list_recent_is_newest_first() {
        let db = Database::new_in_memory().await.unwrap();
        let repo = PostRepository::new(&db);

        for (title, hash) in [("A", "h1"), ("B", "h2"), ("C", "h3")] {
            repo.insert_ignore(&post(title, hash)).await.unwrap();
        }

        let rows = repo.list_recent(2, None).await.unwrap();
        let titles: Vec<_> = rows.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["C", "B"]);
    }

    #[tokio::test]
    async fn test_age_window_excludes_old_rows() {
        let db = Database::new_in_memory().await.unwrap();
        let repo = PostRepository::new(&db);

        repo.insert_ignore(&post("fresh", "h1")).await.unwrap();

        // Backdate a row past the window
        let old = Utc::now() - Duration::hours(48);
        sqlx::query(
            "INSERT INTO posts (title, summary, category, hash, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind("stale")
        .bind("an old summary")
        .bind("State")
        .bind("h2")
        .bind(old)
        .execute(db.pool())
        .await
        .unwrap();

        let windowed = repo.list_recent(10, Some(30)).await.unwrap();
        assert_eq!(windowed.len(), 1);
        assert_eq!(windowed[0].title, "fresh");

        // The stale row is filtered at read time, not deleted
        let unbounded = repo.list_recent(10, None).await.unwrap();
        assert_eq!(unbounded.len(), 2);
    }

    #[tokio::test]
    async fn test_update_and_delete_by_id() {
        let db = Database::new_in_memory().await.unwrap();
        let repo = PostRepository::new(&db);

        let saved = repo.insert_ignore(&post("A", "h1")).await.unwrap().unwrap();

        assert!(repo
            .update(saved.id, "edited", "edited summary", "Political")
            .await
            .unwrap());
        let edited = repo.find_by_id(saved.id).await.unwrap().unwrap();
        assert_eq!(edited.title, "edited");
        assert_eq!(edited.category, "Political");
        assert_eq!(edited.hash, saved.hash);
        assert_eq!(edited.created_at, saved.created_at);

        assert!(repo.delete(saved.id).await.unwrap());
        assert!(!repo.delete(saved.id).await.unwrap());
        assert!(repo.find_by_id(saved.id).await.unwrap().is_none());
    }
}
