use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use newswire_core::storage::Database;
use newswire_core::AppConfig;
use newswire_server::{create_router, AppState};

const SUMMARY: &str = "A very specific factual sentence describing who was involved, where it \
    took place, when it happened, what exactly occurred, and the final outcome.";

async fn test_app() -> Router {
    let db = Database::new_in_memory().await.unwrap();
    let config = Arc::new(AppConfig::default());
    create_router(AppState::new(db, config))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn post_news(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/news/raw")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_feed() -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri("/api/feed")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_ingest_then_duplicate_then_feed() {
    let app = test_app().await;

    let body = json!({ "title": "X", "summary": SUMMARY });

    let (status, reply) = send(&app, post_news(body.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reply, json!({ "saved": true }));

    let (status, reply) = send(&app, post_news(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reply, json!({ "skipped": "duplicate" }));

    let (status, feed) = send(&app, get_feed()).await;
    assert_eq!(status, StatusCode::OK);
    let entries = feed.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["title"], "X");
    assert_eq!(entries[0]["category"], "State");
    assert!(entries[0]["createdAt"].is_string());
}

#[tokio::test]
async fn test_feed_is_newest_first() {
    let app = test_app().await;

    for title in ["A", "B", "C"] {
        let body = json!({
            "title": title,
            "summary": format!("{} Headline {} got its own distinct summary.", SUMMARY, title),
            "category": "State",
        });
        let (status, reply) = send(&app, post_news(body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(reply, json!({ "saved": true }));
    }

    let (_, feed) = send(&app, get_feed()).await;
    let titles: Vec<&str> = feed
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["C", "B", "A"]);
}

#[tokio::test]
async fn test_validation_skips_are_reported() {
    let app = test_app().await;

    let (status, reply) = send(&app, post_news(json!({ "title": "X", "summary": "" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reply, json!({ "skipped": "missing" }));

    let (status, reply) = send(
        &app,
        post_news(json!({ "title": "X", "summary": "too short to be a real summary" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reply, json!({ "skipped": "too_short" }));

    let (status, reply) = send(
        &app,
        post_news(json!({ "title": SUMMARY, "summary": SUMMARY })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reply, json!({ "skipped": "title_copy" }));

    // Nothing was stored
    let (_, feed) = send(&app, get_feed()).await;
    assert!(feed.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_admin_edit_and_delete() {
    let app = test_app().await;

    let (_, reply) = send(
        &app,
        post_news(json!({ "title": "X", "summary": SUMMARY, "category": "Cricket" })),
    )
    .await;
    assert_eq!(reply, json!({ "saved": true }));

    // The first auto-increment id is 1
    let edit = Request::builder()
        .method("PUT")
        .uri("/api/admin/edit/1")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "title": "Edited", "summary": "short and unvalidated", "category": "Political" })
                .to_string(),
        ))
        .unwrap();
    let (status, reply) = send(&app, edit).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reply, json!({ "updated": true }));

    let (_, feed) = send(&app, get_feed()).await;
    assert_eq!(feed[0]["title"], "Edited");
    assert_eq!(feed[0]["category"], "Political");

    let delete = Request::builder()
        .method("DELETE")
        .uri("/api/admin/delete/1")
        .body(Body::empty())
        .unwrap();
    let (status, reply) = send(&app, delete).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reply, json!({ "deleted": true }));

    let delete_again = Request::builder()
        .method("DELETE")
        .uri("/api/admin/delete/1")
        .body(Body::empty())
        .unwrap();
    let (status, reply) = send(&app, delete_again).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(reply["error"].is_string());
}
