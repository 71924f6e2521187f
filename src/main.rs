use book_catalog::{
    adapters::memory::BookCatalog as InMemoryBookCatalog,
    api::{build_schema, handlers::AppState, router::create_router},
    application::catalog::ServiceDependencies,
    config::{DEFAULT_LOG_FILTER, ServerConfig},
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env().expect("Invalid server configuration");

    // Initialize adapters (seeded with the two initial books)
    let book_catalog = Arc::new(InMemoryBookCatalog::new());

    // Create service dependencies
    let service_deps = ServiceDependencies { book_catalog };

    // Create application state
    let app_state = Arc::new(AppState {
        schema: build_schema(service_deps),
    });

    // Create router
    let app = create_router(app_state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("GraphQL endpoint ready at http://{}/graphql", addr);

    // Start server
    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
