use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::validate::SummaryPolicy;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub collector: CollectorConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// RSS source URLs polled by the collector
    #[serde(default = "default_source_urls")]
    pub urls: Vec<String>,
    /// How many items to take from the head of each source per pass
    #[serde(default = "default_per_source_items")]
    pub per_source_items: usize,
    /// Outbound request timeout in seconds
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            urls: default_source_urls(),
            per_source_items: default_per_source_items(),
            request_timeout_secs: default_timeout(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// Enable summarization (a pass without it posts nothing)
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Base URL of an OpenAI-compatible chat completion API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// API key for the summarization endpoint
    #[serde(default)]
    pub api_key: Option<String>,
    /// Model name
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Output language for summaries
    #[serde(default = "default_summary_language")]
    pub summary_language: String,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            api_base_url: default_api_base_url(),
            api_key: None,
            model: default_model(),
            temperature: default_temperature(),
            summary_language: default_summary_language(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Maximum rows returned by the feed endpoint
    #[serde(default = "default_feed_limit")]
    pub feed_limit: u32,
    /// Read-time retention window in hours; unset means unbounded
    #[serde(default)]
    pub max_age_hours: Option<i64>,
    /// Minimum accepted summary length in characters
    #[serde(default = "default_min_summary_chars")]
    pub min_summary_chars: usize,
    /// Extra boilerplate substrings rejected on top of the built-in set
    #[serde(default)]
    pub extra_boilerplate: Vec<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            feed_limit: default_feed_limit(),
            max_age_hours: None,
            min_summary_chars: default_min_summary_chars(),
            extra_boilerplate: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectorConfig {
    /// Base URL of the store the collector posts to
    #[serde(default = "default_store_url")]
    pub store_url: String,
    /// Seconds between scheduled collector passes; 0 disables the scheduler
    #[serde(default = "default_pass_interval")]
    pub pass_interval_secs: u64,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            store_url: default_store_url(),
            pass_interval_secs: default_pass_interval(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the store HTTP server binds to
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("newswire")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_source_urls() -> Vec<String> {
    [
        "https://www.tv9telugu.com/feed",
        "https://ntvtelugu.com/feed",
        "https://www.sakshi.com/rss",
        "https://www.eenadu.net/rss",
        "https://www.andhrajyothy.com/rss",
        "https://news.google.com/rss/search?q=Andhra+Pradesh&hl=te&gl=IN&ceid=IN:te",
        "https://news.google.com/rss/search?q=India+cricket&hl=en&gl=IN&ceid=IN:en",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_per_source_items() -> usize {
    5
}

fn default_timeout() -> u64 {
    30
}

fn default_true() -> bool {
    true
}

fn default_api_base_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_model() -> String {
    "mixtral-8x7b-32768".to_string()
}

fn default_temperature() -> f32 {
    0.2
}

fn default_summary_language() -> String {
    "Telugu".to_string()
}

fn default_feed_limit() -> u32 {
    100
}

fn default_min_summary_chars() -> usize {
    80
}

fn default_store_url() -> String {
    "http://127.0.0.1:8900".to_string()
}

fn default_pass_interval() -> u64 {
    1800
}

fn default_bind_addr() -> String {
    "127.0.0.1:8900".to_string()
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Configuration file path: ~/.config/newswire/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("newswire")
            .join("config.toml")
    }

    /// Database file path
    pub fn database_path(&self) -> PathBuf {
        self.data_dir().join("newswire.db")
    }

    /// Data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// The summary acceptance policy both the collector and the store use
    pub fn summary_policy(&self) -> SummaryPolicy {
        SummaryPolicy::new(
            self.store.min_summary_chars,
            self.store.extra_boilerplate.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_parse_from_empty_toml() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.store.feed_limit, 100);
        assert_eq!(config.store.max_age_hours, None);
        assert_eq!(config.sources.per_source_items, 5);
        assert!(config.ai.enabled);
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [store]
            max_age_hours = 30
            min_summary_chars = 60
            "#,
        )
        .unwrap();

        assert_eq!(config.store.max_age_hours, Some(30));
        assert_eq!(config.store.min_summary_chars, 60);
        assert_eq!(config.store.feed_limit, 100);
        assert_eq!(config.server.bind_addr, "127.0.0.1:8900");
    }
}
