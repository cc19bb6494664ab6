use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};

use super::SummaryProvider;
use crate::{Error, Result};

/// Provider for any OpenAI-compatible chat completion endpoint (OpenAI,
/// Groq, and the like), selected via the configured base URL.
pub struct OpenAiProvider {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: f32,
    language: String,
}

impl OpenAiProvider {
    pub fn new(api_key: &str, api_base: &str, model: &str, temperature: f32, language: &str) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(api_base);
        let client = Client::with_config(config);

        Self {
            client,
            model: model.to_string(),
            temperature,
            language: language.to_string(),
        }
    }

    async fn chat(&self, prompt: &str) -> Result<String> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .temperature(self.temperature)
            .messages(vec![ChatCompletionRequestMessage::User(
                ChatCompletionRequestUserMessageArgs::default()
                    .content(prompt)
                    .build()
                    .map_err(|e| Error::Summarizer(e.to_string()))?,
            )])
            .build()
            .map_err(|e| Error::Summarizer(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| Error::Summarizer(e.to_string()))?;

        let content = response
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .unwrap_or_default();

        Ok(content)
    }
}

#[async_trait::async_trait]
impl SummaryProvider for OpenAiProvider {
    async fn summarize_headline(&self, title: &str) -> Result<String> {
        let prompt = format!(
            "Write a news summary in {language}.\n\
             Exactly 5 short lines (no numbering).\n\
             Each line must fit mobile width.\n\
             Must include: Where, When, Who, What happened, Conclusion.\n\
             No repetition.\n\
             Do NOT copy the title.\n\
             No generic sentences.\n\n\
             Title: \"{title}\"",
            language = self.language,
            title = title,
        );

        self.chat(&prompt).await
    }
}
