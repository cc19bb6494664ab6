mod openai;

pub use openai::OpenAiProvider;

use crate::Result;

/// Trait for headline summarization providers
#[async_trait::async_trait]
pub trait SummaryProvider: Send + Sync {
    /// Generate a short multi-line summary for a headline
    async fn summarize_headline(&self, title: &str) -> Result<String>;
}
