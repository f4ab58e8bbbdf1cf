//! LLM provider implementations
//!
//! Each wire format is implemented in its own module for better organization
//! and maintainability.

pub mod anthropic;
pub mod gemini;
pub mod groq;
pub mod openai;

// Re-export providers for easy access
pub use anthropic::AnthropicProvider;
pub use gemini::GeminiProvider;
pub use groq::GroqProvider;
pub use openai::OpenAiProvider;

use crate::error::ListingForgeError;
use crate::types::ProviderKind;

/// Map a non-success API status to the matching error variant.
pub(crate) fn api_error(
    provider: ProviderKind,
    status: u16,
    body: String,
    url: String,
) -> ListingForgeError {
    match status {
        401 | 403 => ListingForgeError::authentication(format!(
            "{} rejected the API key ({}): {}",
            provider, status, body
        )),
        429 => ListingForgeError::rate_limit(
            format!("{} rate limit exceeded (429): {}", provider, body),
            None,
        ),
        500..=599 => ListingForgeError::network(
            format!("{} server error ({}). The API service is experiencing issues", provider, status),
            Some(status),
            Some(url),
        ),
        _ => ListingForgeError::provider(
            provider,
            format!("API request failed ({}): {}", status, body),
            Some(status.to_string()),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_statuses_map_to_authentication() {
        let err = api_error(ProviderKind::OpenAi, 401, "bad key".into(), "u".into());
        assert!(matches!(err, ListingForgeError::Authentication { .. }));

        let err = api_error(ProviderKind::OpenAi, 403, "no access".into(), "u".into());
        assert!(matches!(err, ListingForgeError::Authentication { .. }));
    }

    #[test]
    fn quota_status_maps_to_rate_limit() {
        let err = api_error(ProviderKind::Groq, 429, "slow down".into(), "u".into());
        assert!(matches!(err, ListingForgeError::RateLimit { .. }));
    }

    #[test]
    fn server_errors_map_to_network() {
        let err = api_error(ProviderKind::Gemini, 503, "down".into(), "u".into());
        assert!(matches!(err, ListingForgeError::Network { status_code: Some(503), .. }));
    }

    #[test]
    fn other_statuses_map_to_provider_error() {
        let err = api_error(ProviderKind::Anthropic, 400, "bad request".into(), "u".into());
        assert!(matches!(
            err,
            ListingForgeError::Provider { provider: ProviderKind::Anthropic, .. }
        ));
    }
}
