use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::ai::Summarizer;
use crate::config::AppConfig;
use crate::feed::{Candidate, FeedFetcher};
use crate::filter::{detect_category, is_allowed};
use crate::text::normalize;
use crate::validate::SummaryPolicy;
use crate::{Error, Result};

/// The store's answer to one submitted candidate.
#[derive(Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Saved,
    Skipped(String),
}

#[derive(Debug, Deserialize)]
struct IngestResponse {
    #[serde(default)]
    saved: bool,
    #[serde(default)]
    skipped: Option<String>,
}

/// HTTP client for the store's ingest endpoint.
pub struct StoreClient {
    client: Client,
    base_url: String,
}

impl StoreClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.sources.request_timeout_secs))
            .build()
            .map_err(Error::Http)?;

        Ok(Self {
            client,
            base_url: config.collector.store_url.trim_end_matches('/').to_string(),
        })
    }

    /// POST one candidate to `/api/news/raw`.
    pub async fn submit(&self, candidate: &Candidate) -> Result<SubmitOutcome> {
        let url = format!("{}/api/news/raw", self.base_url);

        let response = self.client.post(&url).json(candidate).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Other(format!(
                "Store returned HTTP {} for {}: {}",
                status, url, body
            )));
        }

        let body: IngestResponse = response.json().await?;
        if body.saved {
            Ok(SubmitOutcome::Saved)
        } else {
            Ok(SubmitOutcome::Skipped(
                body.skipped.unwrap_or_else(|| "unknown".to_string()),
            ))
        }
    }
}

/// Counters for one collector pass, for logging only.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassReport {
    pub sources_ok: usize,
    pub sources_failed: usize,
    pub fetched: usize,
    pub posted: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// One sequential collection pass over the configured RSS sources.
///
/// Sources are processed one at a time and items one at a time, keeping the
/// outbound rate to the summarizer and the RSS origins bounded. Any single
/// item or source failure is logged and skipped; a pass never aborts.
pub struct Collector {
    fetcher: FeedFetcher,
    summarizer: Option<Summarizer>,
    store: StoreClient,
    policy: SummaryPolicy,
    sources: Vec<String>,
    per_source_items: usize,
}

impl Collector {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let summarizer = if config.ai.enabled {
            Some(Summarizer::new(config)?)
        } else {
            None
        };

        Ok(Self {
            fetcher: FeedFetcher::new(config)?,
            summarizer,
            store: StoreClient::new(config)?,
            policy: config.summary_policy(),
            sources: config.sources.urls.clone(),
            per_source_items: config.sources.per_source_items,
        })
    }

    pub async fn run_pass(&self) -> PassReport {
        let mut report = PassReport::default();

        for source in &self.sources {
            let headlines = match self.fetcher.fetch_headlines(source).await {
                Ok(headlines) => {
                    report.sources_ok += 1;
                    headlines
                }
                Err(e) => {
                    tracing::warn!("Skipping source '{}': {}", source, e);
                    report.sources_failed += 1;
                    continue;
                }
            };

            for headline in headlines.iter().take(self.per_source_items) {
                report.fetched += 1;
                self.process_headline(&headline.title, &mut report).await;
            }
        }

        tracing::info!(
            "Pass complete: {} fetched, {} posted, {} skipped, {} failed ({} sources ok, {} failed)",
            report.fetched,
            report.posted,
            report.skipped,
            report.failed,
            report.sources_ok,
            report.sources_failed,
        );

        report
    }

    async fn process_headline(&self, title: &str, report: &mut PassReport) {
        if !is_allowed(title) {
            tracing::debug!("Filtered headline: {}", title);
            report.skipped += 1;
            return;
        }

        let Some(summarizer) = &self.summarizer else {
            tracing::debug!("Summarization disabled, skipping '{}'", title);
            report.skipped += 1;
            return;
        };

        let summary = match summarizer.summarize(title).await {
            Ok(summary) => normalize(&summary),
            Err(e) => {
                tracing::warn!("Summarizer failed for '{}': {}", title, e);
                report.failed += 1;
                return;
            }
        };

        // Pre-send check with the same policy the store applies, so we do
        // not waste a POST on a summary the store will reject anyway.
        if let Err(reason) = self.policy.check(title, &summary) {
            tracing::debug!("Rejected summary for '{}': {}", title, reason);
            report.skipped += 1;
            return;
        }

        let candidate = Candidate {
            title: normalize(title),
            summary,
            category: detect_category(title),
        };

        match self.store.submit(&candidate).await {
            Ok(SubmitOutcome::Saved) => {
                tracing::info!("Posted: {}", candidate.title);
                report.posted += 1;
            }
            Ok(SubmitOutcome::Skipped(reason)) => {
                tracing::debug!("Store skipped '{}': {}", candidate.title, reason);
                report.skipped += 1;
            }
            Err(e) => {
                tracing::warn!("Failed to post '{}': {}", candidate.title, e);
                report.failed += 1;
            }
        }
    }
}
