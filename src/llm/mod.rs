//! LLM (Large Language Model) integration module
//!
//! Simple and elegant interface for running listing prompts against hosted
//! model providers.

pub mod agent;
pub mod providers;

// Re-export main functionality
pub use agent::ListingAgent;

use crate::error::Result;
use crate::types::{Completion, LlmConfig, ProviderKind};
use async_trait::async_trait;

/// System instructions sent alongside every listing prompt.
pub const SYSTEM_PROMPT: &str = "You are an expert in creating compelling marketplace listings. \
Help users create engaging product titles, descriptions, and optimize listings for better visibility. \
Provide actionable suggestions for keywords, pricing strategies, and listing improvements. \
Consider SEO best practices and marketplace algorithms. \
Be professional, concise, and results-oriented in your responses.";

/// Core trait for all LLM providers
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Run a prompt and return the raw completion text
    async fn complete(&self, prompt: &str) -> Result<Completion>;

    /// Get provider name
    fn name(&self) -> &'static str;

    /// Get model name being used
    fn model(&self) -> &str;

    /// Check if provider is configured and ready
    fn is_ready(&self) -> bool;
}

/// Get available LLM provider names
pub fn available_providers() -> Vec<&'static str> {
    ProviderKind::all().iter().map(|kind| kind.as_str()).collect()
}

/// Create an LLM provider from configuration
pub fn create_provider(config: &LlmConfig) -> Result<Box<dyn CompletionProvider>> {
    let kind: ProviderKind = config.provider.parse()?;
    match kind {
        ProviderKind::OpenAi
        | ProviderKind::Moonshot
        | ProviderKind::DashScope
        | ProviderKind::OpenRouter => Ok(Box::new(providers::OpenAiProvider::new(config, kind)?)),
        ProviderKind::Anthropic => Ok(Box::new(providers::AnthropicProvider::new(config)?)),
        ProviderKind::Gemini => Ok(Box::new(providers::GeminiProvider::new(config)?)),
        ProviderKind::Groq => Ok(Box::new(providers::GroqProvider::new(config)?)),
    }
}
