//! Core types and structures for listing-forge

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

/// LLM provider kind
///
/// Moonshot, DashScope and OpenRouter speak the OpenAI wire format and are
/// served by the OpenAI adapter with a vendor-specific base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    OpenAi,
    Anthropic,
    Gemini,
    Groq,
    Moonshot,
    DashScope,
    OpenRouter,
}

impl ProviderKind {
    /// All supported provider names, in default-selection order.
    pub fn all() -> &'static [ProviderKind] {
        &[
            ProviderKind::OpenAi,
            ProviderKind::Anthropic,
            ProviderKind::Gemini,
            ProviderKind::Groq,
            ProviderKind::Moonshot,
            ProviderKind::DashScope,
            ProviderKind::OpenRouter,
        ]
    }

    /// Registry key and wire name for this provider.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Anthropic => "anthropic",
            ProviderKind::Gemini => "gemini",
            ProviderKind::Groq => "groq",
            ProviderKind::Moonshot => "moonshot",
            ProviderKind::DashScope => "dashscope",
            ProviderKind::OpenRouter => "openrouter",
        }
    }

    /// Default model when no `{NAME}_MODEL` override is given.
    pub fn default_model(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "gpt-4o-mini",
            ProviderKind::Anthropic => "claude-3-haiku-20240307",
            ProviderKind::Gemini => "gemini-2.0-flash-exp",
            ProviderKind::Groq => "llama-3.3-70b-versatile",
            ProviderKind::Moonshot => "kimi-k2-0905-preview",
            ProviderKind::DashScope => "qwen-plus",
            ProviderKind::OpenRouter => "qwen/qwen3-coder:free",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = crate::error::ListingForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProviderKind::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                crate::error::ListingForgeError::config(format!(
                    "Unsupported LLM provider: {}. Supported providers: {}",
                    s,
                    ProviderKind::all()
                        .iter()
                        .map(|k| k.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
            })
    }
}

/// LLM configuration
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub provider: String,
    pub model: String,
    pub api_key: String,
    pub base_url: Option<String>,
    pub temperature: f32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "openai".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key: String::new(),
            base_url: None,
            temperature: 0.7,
        }
    }
}

/// Structured product input for listing generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductInfo {
    pub name: String,
    pub category: String,
    pub description: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub target_audience: String,
    #[serde(default)]
    pub price_range: String,
}

/// Raw model completion, tagged with the provider that served it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Completion {
    pub text: String,
    pub provider: String,
    pub model: String,
    pub created_at: DateTime<Utc>,
}

impl Completion {
    pub fn new(text: impl Into<String>, provider: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            provider: provider.into(),
            model: model.into(),
            created_at: Utc::now(),
        }
    }
}

/// Structured result of a title optimization response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleOptimization {
    pub optimized_title: String,
    pub explanation: String,
    pub alternatives: Vec<String>,
}

/// Thread-safe usage counters for the listing agent
#[derive(Debug, Default)]
pub struct AgentMetrics {
    api_calls: AtomicU64,
    completions: AtomicU64,
    errors: AtomicU64,
}

impl AgentMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_api_call(&self) {
        self.api_calls.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_completion(&self) {
        self.completions.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_error(&self) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            api_calls: self.api_calls.load(Ordering::Relaxed),
            completions: self.completions.load(Ordering::Relaxed),
            errors: self.errors.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of the agent counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub api_calls: u64,
    pub completions: u64,
    pub errors: u64,
}
