//! Route handlers and their request/response schemas

use super::errors::AppError;
use super::AppState;
use crate::listing::{extract_keywords, extract_title_optimization};
use crate::types::{MetricsSnapshot, ProductInfo};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

/// Keywords returned per request, whatever the model sent back.
pub const MAX_KEYWORDS: usize = 20;

/// The root handler.
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Marketplace Listing Helper API",
        "version": crate::VERSION,
    }))
}

/// The health check handler.
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "provider": state.agent.default_provider(),
    }))
}

/// Agent usage counters.
pub async fn metrics(State(state): State<AppState>) -> Json<MetricsSnapshot> {
    Json(state.agent.metrics_snapshot())
}

/// The response body for the `/create-listing` endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListingResponse {
    pub listing: String,
    pub model_used: String,
}

/// The handler for the `/create-listing` endpoint.
///
/// The generated listing text is passed through verbatim.
pub async fn create_listing(
    State(state): State<AppState>,
    Json(product): Json<ProductInfo>,
) -> Result<Json<ListingResponse>, AppError> {
    info!(product = %product.name, "Received create-listing request");

    let completion = state.agent.create_listing(&product).await?;

    Ok(Json(ListingResponse {
        listing: completion.text,
        model_used: completion.provider,
    }))
}

/// The request body for the `/optimize-title` endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct TitleOptimizationRequest {
    pub current_title: String,
    pub product_category: String,
}

/// The response body for the `/optimize-title` endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct TitleOptimizationResponse {
    pub optimized_title: String,
    pub explanation: String,
    pub alternatives: Vec<String>,
    pub model_used: String,
}

/// The handler for the `/optimize-title` endpoint.
///
/// The raw reply is parsed into a title, explanation and alternatives; an
/// unparseable reply degrades to the documented fallbacks instead of failing.
pub async fn optimize_title(
    State(state): State<AppState>,
    Json(request): Json<TitleOptimizationRequest>,
) -> Result<Json<TitleOptimizationResponse>, AppError> {
    info!(title = %request.current_title, "Received optimize-title request");

    let completion = state
        .agent
        .optimize_title(&request.current_title, &request.product_category)
        .await?;
    let parsed = extract_title_optimization(&completion.text, &request.current_title);

    Ok(Json(TitleOptimizationResponse {
        optimized_title: parsed.optimized_title,
        explanation: parsed.explanation,
        alternatives: parsed.alternatives,
        model_used: completion.provider,
    }))
}

/// The request body for the `/generate-keywords` endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct KeywordsRequest {
    pub product_description: String,
    pub category: String,
}

/// The response body for the `/generate-keywords` endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct KeywordsResponse {
    pub keywords: Vec<String>,
    pub model_used: String,
}

/// The handler for the `/generate-keywords` endpoint.
pub async fn generate_keywords(
    State(state): State<AppState>,
    Json(request): Json<KeywordsRequest>,
) -> Result<Json<KeywordsResponse>, AppError> {
    info!(category = %request.category, "Received generate-keywords request");

    let completion = state
        .agent
        .generate_keywords(&request.product_description, &request.category)
        .await?;
    let mut keywords = extract_keywords(&completion.text);
    keywords.truncate(MAX_KEYWORDS);

    Ok(Json(KeywordsResponse {
        keywords,
        model_used: completion.provider,
    }))
}
