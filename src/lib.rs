//! Listing Forge - AI-powered marketplace listing generation and optimization
//!
//! A small service that turns structured product information into marketplace
//! listings, optimized titles and keyword lists by delegating to hosted LLM
//! providers and heuristically parsing their free-text replies.

pub mod error;
pub mod listing;
pub mod llm;
pub mod server;
pub mod types;

// Re-export commonly used types
pub use error::{ListingForgeError, Result};
pub use types::{
    Completion, LlmConfig, MetricsSnapshot, ProductInfo, ProviderKind, TitleOptimization,
};

// Re-export main functionality
pub use llm::ListingAgent;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
