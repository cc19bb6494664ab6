use axum::extract::{Path, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use newswire_core::storage::{PostRepository, StoredPost};
use newswire_core::IngestOutcome;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Body of `POST /api/news/raw`
#[derive(Debug, Deserialize)]
pub struct IngestRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub category: Option<String>,
}

/// Reply to an ingest request: either saved or skipped with a reason
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum IngestReply {
    Saved { saved: bool },
    Skipped { skipped: String },
}

/// One row of the public feed
#[derive(Debug, Serialize)]
pub struct FeedEntry {
    pub title: String,
    pub summary: String,
    pub category: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl From<StoredPost> for FeedEntry {
    fn from(post: StoredPost) -> Self {
        FeedEntry {
            title: post.title,
            summary: post.summary,
            category: post.category,
            created_at: post.created_at,
        }
    }
}

/// Body of `PUT /api/admin/edit/{id}`
#[derive(Debug, Deserialize)]
pub struct EditRequest {
    pub title: String,
    pub summary: String,
    pub category: String,
}

/// Ingest one raw candidate from a collector
pub async fn ingest_news(
    State(state): State<AppState>,
    Json(payload): Json<IngestRequest>,
) -> AppResult<Json<IngestReply>> {
    let outcome = state
        .ingestor
        .ingest(&payload.title, &payload.summary, payload.category.as_deref())
        .await?;

    let reply = match outcome {
        IngestOutcome::Saved(_) => IngestReply::Saved { saved: true },
        IngestOutcome::Skipped(reason) => IngestReply::Skipped {
            skipped: reason.to_string(),
        },
    };

    Ok(Json(reply))
}

/// Most recent posts, newest first
pub async fn get_feed(State(state): State<AppState>) -> AppResult<Json<Vec<FeedEntry>>> {
    let repo = PostRepository::new(&state.db);
    let posts = repo
        .list_recent(state.config.store.feed_limit, state.config.store.max_age_hours)
        .await?;

    Ok(Json(posts.into_iter().map(FeedEntry::from).collect()))
}

/// Delete a post by id
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<serde_json::Value>> {
    let repo = PostRepository::new(&state.db);

    if !repo.delete(id).await? {
        return Err(AppError::NotFound(id));
    }

    Ok(Json(serde_json::json!({ "deleted": true })))
}

/// Overwrite a post by id. Admin path: no validation is re-applied.
pub async fn edit_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<EditRequest>,
) -> AppResult<Json<serde_json::Value>> {
    let repo = PostRepository::new(&state.db);

    if !repo
        .update(id, &payload.title, &payload.summary, &payload.category)
        .await?
    {
        return Err(AppError::NotFound(id));
    }

    Ok(Json(serde_json::json!({ "updated": true })))
}
