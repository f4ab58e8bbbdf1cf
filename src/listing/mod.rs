//! Marketplace listing domain logic
//!
//! Prompt construction for the three listing operations and the best-effort
//! extraction that turns free-text model replies into structured results.

pub mod extract;
pub mod prompt;

pub use extract::{extract_keywords, extract_title_optimization, FALLBACK_EXPLANATION, MAX_ALTERNATIVES};
pub use prompt::{build_keyword_prompt, build_listing_prompt, build_title_prompt};
