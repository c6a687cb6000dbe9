use axum::{Router, http::header, routing::get};
use skillpath::api::handlers::api_routes;
use skillpath::api::openapi::ApiDoc;
use skillpath::config::CONFIG;
use skillpath::recommender::{Recommender, load_dataset};
use skillpath::{InMemoryCache, InMemoryLogging, InMemoryStorage, SkillPathService};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter(CONFIG.log_level.as_str()).init();

    // The dataset must be in place before the server accepts traffic;
    // a missing or malformed file aborts startup
    let rows = load_dataset(&CONFIG.dataset_path)?;
    let recommender = Recommender::new(rows);
    info!("dataset ready with {} records", recommender.len());

    // Initialize storage, logging and cache
    let storage = InMemoryStorage::new();
    let logging = InMemoryLogging::new();
    let cache = InMemoryCache::new();
    let service = Arc::new(SkillPathService::new(
        storage,
        logging,
        cache,
        recommender,
        CONFIG.jwt_secret.clone(),
        CONFIG.admin_email.clone(),
    ));

    // Define API routes
    let app = Router::new()
        // add / route with a simple health check
        .route("/", get(|| async { "API is running..." }))
        .nest("/api", api_routes(service))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CompressionLayer::new()) // Gzip compression
        .layer(TimeoutLayer::new(Duration::from_secs(30))) // 30-second timeout
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([
                    http::Method::GET,
                    http::Method::POST,
                    http::Method::PUT,
                    http::Method::DELETE,
                ])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(TraceLayer::new_for_http()); // Request tracing

    // Start server
    let addr = SocketAddr::from(([127, 0, 0, 1], CONFIG.port));
    info!("Server running at http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
