//! Integration tests for listing-forge

use listing_forge::{
    listing::{extract_keywords, extract_title_optimization, FALLBACK_EXPLANATION},
    llm::{available_providers, create_provider, ListingAgent},
    types::{LlmConfig, ProductInfo, ProviderKind},
};

#[test]
fn test_agent_creation() {
    let agent = ListingAgent::new();
    assert!(!agent.is_ready());
    assert_eq!(agent.default_provider(), "openai");
}

#[test]
fn test_agent_provider_registry() {
    let agent = ListingAgent::new();
    let config = LlmConfig {
        provider: "anthropic".to_string(),
        model: "claude-3-haiku-20240307".to_string(),
        api_key: "test-key".to_string(),
        base_url: None,
        temperature: 0.7,
    };

    agent.add_provider(&config).expect("provider should register");

    assert!(agent.is_ready());
    assert!(agent.has_provider("anthropic"));
    assert!(!agent.has_provider("openai"));
    assert_eq!(agent.available_providers(), vec!["anthropic".to_string()]);
}

#[test]
fn test_default_provider_only_switches_to_registered() {
    let agent = ListingAgent::new();
    let config = LlmConfig {
        provider: "groq".to_string(),
        api_key: "test-key".to_string(),
        ..LlmConfig::default()
    };
    agent.add_provider(&config).unwrap();

    agent.set_default_provider("gemini");
    assert_eq!(agent.default_provider(), "openai");

    agent.set_default_provider("groq");
    assert_eq!(agent.default_provider(), "groq");
}

#[test]
fn test_unknown_provider_is_rejected() {
    let config = LlmConfig {
        provider: "skynet".to_string(),
        api_key: "test-key".to_string(),
        ..LlmConfig::default()
    };

    let err = create_provider(&config).err().unwrap();
    assert!(err.to_string().contains("Unsupported LLM provider"));
}

#[test]
fn test_all_listed_providers_construct() {
    for name in available_providers() {
        let config = LlmConfig {
            provider: name.to_string(),
            api_key: "test-key".to_string(),
            ..LlmConfig::default()
        };
        let provider = create_provider(&config).expect("listed provider should construct");
        assert_eq!(provider.name(), name);
        assert!(provider.is_ready());
    }
}

#[test]
fn test_provider_kind_round_trip() {
    assert_eq!(ProviderKind::OpenAi.to_string(), "openai");
    assert_eq!(ProviderKind::DashScope.to_string(), "dashscope");
    assert_eq!("groq".parse::<ProviderKind>().unwrap(), ProviderKind::Groq);
    assert!("".parse::<ProviderKind>().is_err());
}

#[test]
fn test_llm_config_defaults() {
    let config = LlmConfig::default();

    assert_eq!(config.provider, "openai");
    assert_eq!(config.model, "gpt-4o-mini");
    assert_eq!(config.temperature, 0.7);
    assert!(config.base_url.is_none());
}

#[test]
fn test_product_info_optional_fields_default_to_empty() {
    let product: ProductInfo = serde_json::from_str(
        r#"{
            "name": "Vintage Leather Handbag",
            "category": "Fashion Accessories",
            "description": "Beautiful vintage leather handbag.",
            "features": ["Genuine leather"]
        }"#,
    )
    .expect("partial product should deserialize");

    assert_eq!(product.target_audience, "");
    assert_eq!(product.price_range, "");
}

#[test]
fn test_title_extraction_through_public_api() {
    let raw = "Optimized Title: Amazing Vintage Bag\n\
               Improvement: Added specific materials\n\
               Alternative 1: Vintage Leather Purse\n\
               Alternative 2: Classic Leather Bag";

    let result = extract_title_optimization(raw, "Old Bag");

    assert_eq!(result.optimized_title, "Amazing Vintage Bag");
    assert_eq!(result.explanation, "Added specific materials");
    assert_eq!(
        result.alternatives,
        vec!["Vintage Leather Purse", "Classic Leather Bag"]
    );
}

#[test]
fn test_extraction_fallbacks_on_unstructured_reply() {
    let result = extract_title_optimization("I could not help with that.", "Old Leather Bag");

    assert_eq!(result.optimized_title, "Old Leather Bag");
    assert_eq!(result.explanation, FALLBACK_EXPLANATION);
    assert!(result.alternatives.is_empty());
}

#[test]
fn test_keyword_extraction_through_public_api() {
    let keywords = extract_keywords("leather, handbag, vintage");
    assert_eq!(keywords, vec!["leather", "handbag", "vintage"]);
}

#[test]
fn test_error_handling() {
    use listing_forge::error::ListingForgeError;

    let error = ListingForgeError::config("config error".to_string());
    assert!(error.to_string().contains("config error"));

    let error = ListingForgeError::provider(ProviderKind::OpenAi, "quota exhausted", None);
    assert!(error.to_string().contains("openai"));
    assert!(error.to_string().contains("quota exhausted"));

    let error = ListingForgeError::internal("internal error");
    assert!(error.to_string().contains("internal error"));
}

#[test]
fn test_library_initialization() {
    let result = listing_forge::init();
    assert!(result.is_ok());
}
