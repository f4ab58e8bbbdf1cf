//! Listing agent built on the LLM provider registry

use crate::error::Result;
use crate::listing::{build_keyword_prompt, build_listing_prompt, build_title_prompt};
use crate::llm::{create_provider, CompletionProvider};
use crate::types::{AgentMetrics, Completion, LlmConfig, MetricsSnapshot, ProductInfo, ProviderKind};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::env;
use std::sync::Arc;
use std::time::Instant;

/// Environment variable with the API key for each provider.
const PROVIDER_KEY_ENV: &[(ProviderKind, &str)] = &[
    (ProviderKind::OpenAi, "OPENAI_API_KEY"),
    (ProviderKind::Anthropic, "ANTHROPIC_API_KEY"),
    (ProviderKind::Gemini, "GEMINI_API_KEY"),
    (ProviderKind::Groq, "GROQ_API_KEY"),
    (ProviderKind::Moonshot, "MOONSHOT_API_KEY"),
    (ProviderKind::DashScope, "DASHSCOPE_API_KEY"),
    (ProviderKind::OpenRouter, "OPENROUTER_API_KEY"),
];

/// Agent for creating and optimizing marketplace listings
///
/// Holds a thread-safe registry of completion providers keyed by name, a
/// default provider, and usage metrics. The high-level operations build the
/// prompt for one listing task and return the raw completion; structured
/// extraction is left to the caller.
#[derive(Clone)]
pub struct ListingAgent {
    providers: Arc<RwLock<HashMap<String, Arc<dyn CompletionProvider>>>>,
    default_provider: Arc<RwLock<String>>,
    metrics: Arc<AgentMetrics>,
}

impl ListingAgent {
    /// Create a new agent with an empty provider registry
    pub fn new() -> Self {
        Self {
            providers: Arc::new(RwLock::new(HashMap::new())),
            default_provider: Arc::new(RwLock::new("openai".to_string())),
            metrics: Arc::new(AgentMetrics::new()),
        }
    }

    /// Create an agent from environment variables.
    ///
    /// Every provider with its API key set is registered; the first one in
    /// registry order becomes the default. `{NAME}_MODEL` and
    /// `{NAME}_BASE_URL` override the vendor defaults.
    pub fn from_env() -> Result<Self> {
        let agent = Self::new();

        for (kind, key_var) in PROVIDER_KEY_ENV {
            let Ok(api_key) = env::var(key_var) else {
                continue;
            };
            let upper = kind.as_str().to_uppercase();
            let model = env::var(format!("{upper}_MODEL"))
                .unwrap_or_else(|_| kind.default_model().to_string());
            let base_url = env::var(format!("{upper}_BASE_URL")).ok();

            let config = LlmConfig {
                provider: kind.as_str().to_string(),
                model,
                api_key,
                base_url,
                temperature: 0.7,
            };
            agent.add_provider(&config)?;
            tracing::info!(provider = %kind, "provider configured");
        }

        if !agent.is_ready() {
            return Err(crate::error::ListingForgeError::config(
                "No LLM providers configured. Set OPENAI_API_KEY, ANTHROPIC_API_KEY, \
                 GEMINI_API_KEY, GROQ_API_KEY, MOONSHOT_API_KEY, DASHSCOPE_API_KEY, \
                 or OPENROUTER_API_KEY.",
            ));
        }

        // First registered provider in table order wins
        for (kind, _) in PROVIDER_KEY_ENV {
            if agent.has_provider(kind.as_str()) {
                agent.set_default_provider(kind.as_str());
                break;
            }
        }

        Ok(agent)
    }

    /// Add an LLM provider (thread-safe)
    pub fn add_provider(&self, config: &LlmConfig) -> Result<()> {
        let provider = create_provider(config)?;
        let mut providers = self.providers.write();
        providers.insert(config.provider.clone(), Arc::from(provider));
        Ok(())
    }

    /// Register an already-built provider under its own name (thread-safe)
    pub fn register_provider(&self, provider: Arc<dyn CompletionProvider>) {
        let mut providers = self.providers.write();
        providers.insert(provider.name().to_string(), provider);
    }

    /// Set default provider (thread-safe)
    pub fn set_default_provider(&self, provider: &str) {
        let providers = self.providers.read();
        if providers.contains_key(provider) {
            let mut default = self.default_provider.write();
            *default = provider.to_string();
        }
    }

    /// Name of the current default provider
    pub fn default_provider(&self) -> String {
        self.default_provider.read().clone()
    }

    /// Create a complete marketplace listing from product information.
    ///
    /// The listing text is returned verbatim; no structure is imposed on it.
    pub async fn create_listing(&self, product: &ProductInfo) -> Result<Completion> {
        self.complete(&build_listing_prompt(product)).await
    }

    /// Optimize an existing product title for better visibility.
    ///
    /// Returns the raw reply; parse it with
    /// [`crate::listing::extract_title_optimization`].
    pub async fn optimize_title(&self, current_title: &str, category: &str) -> Result<Completion> {
        self.complete(&build_title_prompt(current_title, category)).await
    }

    /// Generate relevant keywords for a product listing.
    ///
    /// Returns the raw comma-separated reply; split it with
    /// [`crate::listing::extract_keywords`].
    pub async fn generate_keywords(&self, description: &str, category: &str) -> Result<Completion> {
        self.complete(&build_keyword_prompt(description, category)).await
    }

    /// Run a prompt against the default provider, falling back to the other
    /// configured providers if it fails.
    pub async fn complete(&self, prompt: &str) -> Result<Completion> {
        let mut last_error = None;
        let overall_start = Instant::now();

        let default_provider = self.default_provider.read().clone();
        if self.has_provider(&default_provider) {
            match self.complete_with_provider(prompt, &default_provider).await {
                Ok(completion) => return Ok(completion),
                Err(e) => {
                    tracing::warn!(provider = %default_provider, error = %e, "Default provider failed");
                    last_error = Some(e);
                }
            }
        }

        let fallback_providers: Vec<String> = {
            let providers = self.providers.read();
            providers
                .keys()
                .filter(|&name| name != &default_provider)
                .cloned()
                .collect()
        };

        for provider_name in fallback_providers {
            match self.complete_with_provider(prompt, &provider_name).await {
                Ok(completion) => {
                    tracing::info!(
                        provider = %provider_name,
                        fallback_used = true,
                        duration_ms = %overall_start.elapsed().as_millis(),
                        "Completion served by fallback provider"
                    );
                    return Ok(completion);
                }
                Err(e) => {
                    tracing::warn!(provider = %provider_name, error = %e, "Fallback provider failed");
                    last_error = Some(e);
                }
            }
        }

        self.metrics.record_error();
        Err(last_error.unwrap_or_else(|| {
            crate::error::ListingForgeError::config("No providers configured".to_string())
        }))
    }

    /// Run a prompt against a specific provider
    pub async fn complete_with_provider(
        &self,
        prompt: &str,
        provider_name: &str,
    ) -> Result<Completion> {
        let start_time = Instant::now();

        self.metrics.record_api_call();

        // Clone the Arc so no lock is held across the await
        let provider = {
            let providers = self.providers.read();
            providers
                .get(provider_name)
                .ok_or_else(|| {
                    crate::error::ListingForgeError::config(format!(
                        "Provider not configured: {}",
                        provider_name
                    ))
                })?
                .clone()
        };

        let result = provider.complete(prompt).await;

        match &result {
            Ok(completion) => {
                self.metrics.record_completion();
                tracing::info!(
                    provider = %provider_name,
                    response_chars = %completion.text.len(),
                    duration_ms = %start_time.elapsed().as_millis(),
                    "Completion finished"
                );
            }
            Err(e) => {
                self.metrics.record_error();
                tracing::warn!(
                    provider = %provider_name,
                    error = %e,
                    duration_ms = %start_time.elapsed().as_millis(),
                    "Completion failed"
                );
            }
        }

        result
    }

    /// Get registered provider names (thread-safe)
    pub fn available_providers(&self) -> Vec<String> {
        let providers = self.providers.read();
        providers.keys().cloned().collect()
    }

    /// Check if provider is registered (thread-safe)
    pub fn has_provider(&self, provider: &str) -> bool {
        let providers = self.providers.read();
        providers.contains_key(provider)
    }

    /// Check if any providers are configured (thread-safe)
    pub fn is_ready(&self) -> bool {
        let providers = self.providers.read();
        !providers.is_empty()
    }

    /// Get current metrics snapshot
    pub fn metrics_snapshot(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}

impl Default for ListingAgent {
    fn default() -> Self {
        Self::new()
    }
}
