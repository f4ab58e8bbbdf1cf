//! OpenAI provider implementation
//!
//! Supports the OpenAI API and OpenAI-compatible APIs (Moonshot, DashScope,
//! OpenRouter) selected through the provider kind.

use crate::error::{ListingForgeError, Result};
use crate::llm::{CompletionProvider, SYSTEM_PROMPT};
use crate::types::{Completion, LlmConfig, ProviderKind};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::api_error;

/// OpenAI provider implementation
pub struct OpenAiProvider {
    client: Client,
    kind: ProviderKind,
    api_key: String,
    model: String,
    base_url: String,
    temperature: f32,
}

/// Vendor endpoint used when the config has no base URL override.
fn default_base_url(kind: ProviderKind) -> &'static str {
    match kind {
        ProviderKind::Moonshot => "https://api.moonshot.ai/v1",
        ProviderKind::DashScope => "https://dashscope-intl.aliyuncs.com/compatible-mode/v1",
        ProviderKind::OpenRouter => "https://openrouter.ai/api/v1",
        _ => "https://api.openai.com/v1",
    }
}

impl OpenAiProvider {
    pub fn new(config: &LlmConfig, kind: ProviderKind) -> Result<Self> {
        if config.api_key.is_empty() {
            return Err(ListingForgeError::config(format!(
                "{} API key is required",
                kind
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ListingForgeError::network(e.to_string(), None, None))?;

        Ok(Self {
            client,
            kind,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| default_base_url(kind).to_string()),
            temperature: config.temperature,
        })
    }

    /// Intelligently constructs the full API URL
    fn build_url(&self, endpoint: &str) -> String {
        let base_url = self.base_url.trim_end_matches('/');
        if base_url.ends_with("/v1") {
            format!("{}{}", base_url, endpoint)
        } else {
            format!("{}/v1{}", base_url, endpoint)
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    async fn complete(&self, prompt: &str) -> Result<Completion> {
        let request = OpenAiRequest {
            model: self.model.clone(),
            messages: vec![
                OpenAiMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                OpenAiMessage {
                    role: "user".to_string(),
                    content: prompt.to_string(),
                },
            ],
            temperature: self.temperature,
            max_tokens: 2000,
        };

        let url = self.build_url("/chat/completions");
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                ListingForgeError::network(
                    format!("Failed to connect to API: {}", e),
                    None,
                    Some(url.clone()),
                )
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(api_error(self.kind, status, error_text, url));
        }

        let openai_response: OpenAiResponse = response
            .json()
            .await
            .map_err(|e| ListingForgeError::parse(e.to_string(), None))?;

        let content = openai_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| {
                ListingForgeError::provider(self.kind, "Empty response from API", None)
            })?
            .message
            .content;

        Ok(Completion::new(content, self.name(), &self.model))
    }

    fn name(&self) -> &'static str {
        self.kind.as_str()
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn is_ready(&self) -> bool {
        !self.api_key.is_empty()
    }
}

// OpenAI API structures
#[derive(Serialize)]
struct OpenAiRequest {
    model: String,
    messages: Vec<OpenAiMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize, Deserialize)]
struct OpenAiMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
}

#[derive(Deserialize)]
struct OpenAiChoice {
    message: OpenAiMessage,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(provider: &str) -> LlmConfig {
        LlmConfig {
            provider: provider.to_string(),
            api_key: "test-key".to_string(),
            ..LlmConfig::default()
        }
    }

    #[test]
    fn compatible_vendors_get_their_own_base_url() {
        let moonshot = OpenAiProvider::new(&config("moonshot"), ProviderKind::Moonshot).unwrap();
        assert_eq!(moonshot.name(), "moonshot");
        assert_eq!(moonshot.build_url("/chat/completions"), "https://api.moonshot.ai/v1/chat/completions");

        let openrouter = OpenAiProvider::new(&config("openrouter"), ProviderKind::OpenRouter).unwrap();
        assert_eq!(openrouter.build_url("/chat/completions"), "https://openrouter.ai/api/v1/chat/completions");
    }

    #[test]
    fn base_url_override_appends_version_segment_once() {
        let mut cfg = config("openai");
        cfg.base_url = Some("https://oneapi.example.com".to_string());
        let provider = OpenAiProvider::new(&cfg, ProviderKind::OpenAi).unwrap();
        assert_eq!(provider.build_url("/chat/completions"), "https://oneapi.example.com/v1/chat/completions");

        cfg.base_url = Some("https://oneapi.example.com/v1/".to_string());
        let provider = OpenAiProvider::new(&cfg, ProviderKind::OpenAi).unwrap();
        assert_eq!(provider.build_url("/chat/completions"), "https://oneapi.example.com/v1/chat/completions");
    }

    #[test]
    fn missing_api_key_is_a_config_error() {
        let mut cfg = config("openai");
        cfg.api_key = String::new();
        assert!(OpenAiProvider::new(&cfg, ProviderKind::OpenAi).is_err());
    }
}
