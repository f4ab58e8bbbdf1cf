//! HTTP transport for the listing agent
//!
//! Thin axum layer: structured requests in, structured responses out. All
//! model access goes through the shared [`ListingAgent`].

mod errors;
pub mod handlers;

pub use handlers::MAX_KEYWORDS;

use crate::error::Result;
use crate::llm::ListingAgent;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// The shared application state.
#[derive(Clone)]
pub struct AppState {
    pub agent: ListingAgent,
}

/// Builds the shared application state from the environment.
pub fn build_app_state() -> Result<AppState> {
    let agent = ListingAgent::from_env()?;
    Ok(AppState { agent })
}

/// Creates the Axum router with all the application routes.
pub fn create_router(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics))
        .route("/create-listing", post(handlers::create_listing))
        .route("/optimize-title", post(handlers::optimize_title))
        .route("/generate-keywords", post(handlers::generate_keywords))
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Serve the application on an already-bound listener.
pub async fn run(listener: tokio::net::TcpListener, app_state: AppState) -> anyhow::Result<()> {
    let app = create_router(app_state);

    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
