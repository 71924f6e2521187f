use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{AppState, graphiql, graphql_handler};

/// Creates the API router for the book catalog
///
/// - GET  /health  - Health check
/// - POST /graphql - Execute a query or mutation
/// - GET  /graphql - GraphiQL IDE
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        .route("/graphql", get(graphiql).post(graphql_handler))
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
