use std::sync::Arc;

use super::providers::{OpenAiProvider, SummaryProvider};
use crate::config::AppConfig;
use crate::Result;

/// Summarizer that wraps the configured provider
pub struct Summarizer {
    provider: Arc<dyn SummaryProvider>,
}

impl Summarizer {
    /// Create a new summarizer based on configuration
    pub fn new(config: &AppConfig) -> Result<Self> {
        let api_key = config
            .ai
            .api_key
            .as_ref()
            .ok_or_else(|| crate::Error::Config("Summarizer API key not configured".to_string()))?;

        let provider: Arc<dyn SummaryProvider> = Arc::new(OpenAiProvider::new(
            api_key,
            &config.ai.api_base_url,
            &config.ai.model,
            config.ai.temperature,
            &config.ai.summary_language,
        ));

        Ok(Self { provider })
    }

    /// Build a summarizer around an explicit provider, used by tests
    pub fn with_provider(provider: Arc<dyn SummaryProvider>) -> Self {
        Self { provider }
    }

    /// Generate a summary for a headline
    pub async fn summarize(&self, title: &str) -> Result<String> {
        self.provider.summarize_headline(title).await
    }
}
