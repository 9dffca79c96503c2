use std::sync::Arc;

use anyhow::Context;
use axum::http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trailmap_api::config::ApiConfig;
use trailmap_api::router::create_router;
use trailmap_api::state::AppState;
use trailmap_store::{FsLogStorage, LogStorage, MemoryLogStorage};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trailmap_api=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env();

    tracing::info!(port = config.port, "Starting Trailmap API server");

    let storage: Arc<dyn LogStorage> = match &config.data_root {
        Some(root) => {
            tracing::info!(root = %root, "Using filesystem storage");
            Arc::new(FsLogStorage::new(root))
        }
        None => {
            tracing::info!("Using in-memory storage (set TRAILMAP_DATA_ROOT for a dataset)");
            Arc::new(MemoryLogStorage::new())
        }
    };

    let state = Arc::new(AppState::new(storage));

    let cors = CorsLayer::new()
        .allow_origin(
            config
                .cors_origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin: {}", config.cors_origin))?,
        )
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let app = create_router(state).layer(cors).layer(TraceLayer::new_for_http());

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("CORS enabled for {}", config.cors_origin);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
