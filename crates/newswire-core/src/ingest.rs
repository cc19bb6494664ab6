use crate::filter::Category;
use crate::storage::{Database, NewPost, PostRepository, StoredPost};
use crate::text::{content_hash, normalize};
use crate::validate::{SkipReason, SummaryPolicy};
use crate::Result;

/// What happened to one submitted item. Skips are expected outcomes;
/// storage failures surface as `Err` from [`Ingestor::ingest`] instead.
#[derive(Debug)]
pub enum IngestOutcome {
    Saved(StoredPost),
    Skipped(SkipReason),
}

/// Store-side ingest pipeline: normalize, validate, hash, insert-or-ignore.
#[derive(Clone)]
pub struct Ingestor {
    db: Database,
    policy: SummaryPolicy,
}

impl Ingestor {
    pub fn new(db: Database, policy: SummaryPolicy) -> Self {
        Self { db, policy }
    }

    /// Ingest one (title, summary, category) triple.
    ///
    /// Exactly one row is appended on `Saved`; nothing else is mutated.
    /// A missing category defaults to `State`, matching the categorizer's
    /// fallback rule.
    pub async fn ingest(
        &self,
        title: &str,
        summary: &str,
        category: Option<&str>,
    ) -> Result<IngestOutcome> {
        let title_norm = normalize(title);
        let summary_norm = normalize(summary);

        if title_norm.is_empty() || summary_norm.is_empty() {
            return Ok(IngestOutcome::Skipped(SkipReason::Missing));
        }

        if let Err(reason) = self.policy.check(&title_norm, &summary_norm) {
            return Ok(IngestOutcome::Skipped(reason));
        }

        let hash = content_hash(&title_norm, &summary_norm);

        let category = category
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(Category::State.as_str());

        let new_post = NewPost {
            title: title_norm,
            summary: summary_norm,
            category: category.to_string(),
            hash,
        };

        let repo = PostRepository::new(&self.db);
        match repo.insert_ignore(&new_post).await? {
            Some(post) => {
                tracing::debug!("Saved post {}: {}", post.id, post.title);
                Ok(IngestOutcome::Saved(post))
            }
            None => Ok(IngestOutcome::Skipped(SkipReason::Duplicate)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TITLE: &str = "Kakinada floods disrupt rail traffic";
    const SUMMARY: &str = "Heavy overnight rainfall flooded low-lying areas of Kakinada on \
        Tuesday, displacing forty families and halting train services on the coastal line \
        until late evening.";

    async fn ingestor() -> Ingestor {
        let db = Database::new_in_memory().await.unwrap();
        Ingestor::new(db, SummaryPolicy::default())
    }

    #[tokio::test]
    async fn test_ingest_then_duplicate() {
        let ingestor = ingestor().await;

        let first = ingestor.ingest(TITLE, SUMMARY, Some("State")).await.unwrap();
        assert!(matches!(first, IngestOutcome::Saved(_)));

        let second = ingestor.ingest(TITLE, SUMMARY, Some("State")).await.unwrap();
        assert!(matches!(
            second,
            IngestOutcome::Skipped(SkipReason::Duplicate)
        ));

        let repo = PostRepository::new(&ingestor.db);
        assert_eq!(repo.list_recent(10, None).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_formatting_differences_still_dedupe() {
        let ingestor = ingestor().await;

        ingestor.ingest(TITLE, SUMMARY, None).await.unwrap();

        let decorated_title = format!("<b>{}</b>", TITLE);
        let spaced_summary = SUMMARY.replace(' ', "  ");
        let outcome = ingestor
            .ingest(&decorated_title, &spaced_summary, None)
            .await
            .unwrap();

        assert!(matches!(
            outcome,
            IngestOutcome::Skipped(SkipReason::Duplicate)
        ));
    }

    #[tokio::test]
    async fn test_missing_fields_are_skipped() {
        let ingestor = ingestor().await;

        let outcome = ingestor.ingest("", SUMMARY, None).await.unwrap();
        assert!(matches!(outcome, IngestOutcome::Skipped(SkipReason::Missing)));

        let outcome = ingestor.ingest(TITLE, "   ", None).await.unwrap();
        assert!(matches!(outcome, IngestOutcome::Skipped(SkipReason::Missing)));
    }

    #[tokio::test]
    async fn test_validation_rejects_before_any_write() {
        let ingestor = ingestor().await;

        let outcome = ingestor.ingest(TITLE, "too short", None).await.unwrap();
        assert!(matches!(
            outcome,
            IngestOutcome::Skipped(SkipReason::TooShort)
        ));

        let outcome = ingestor.ingest(SUMMARY, SUMMARY, None).await.unwrap();
        assert!(matches!(
            outcome,
            IngestOutcome::Skipped(SkipReason::TitleCopy)
        ));

        let repo = PostRepository::new(&ingestor.db);
        assert!(repo.list_recent(10, None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_category_defaults_to_state() {
        let ingestor = ingestor().await;

        let outcome = ingestor.ingest(TITLE, SUMMARY, None).await.unwrap();
        match outcome {
            IngestOutcome::Saved(post) => assert_eq!(post.category, "State"),
            other => panic!("expected Saved, got {:?}", other),
        }
    }
}
