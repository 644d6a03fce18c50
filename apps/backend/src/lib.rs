pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use study_core::ParseOptions;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::services::catalog::Catalog;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub parse_options: ParseOptions,
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let catalog = match &config.content_dir {
        Some(dir) => {
            tracing::info!("Loading content from {}", dir.display());
            Catalog::load_dir(dir).await?
        }
        None => {
            tracing::info!("Using bundled sample content");
            Catalog::sample()?
        }
    };
    tracing::info!("Loaded {} subjects", catalog.subjects().len());

    let state = AppState {
        catalog: Arc::new(catalog),
        parse_options: config.parse_options,
    };

    let app = router(state);
    let addr = config.addr();

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Subject routes
        .route("/api/subjects", get(routes::subjects::list))
        .route("/api/subjects/:subject_id", get(routes::subjects::get))
        .route(
            "/api/subjects/:subject_id/topics/:topic_id",
            get(routes::subjects::topic),
        )
        // Search routes
        .route("/api/search", get(routes::search::search))
        // Flashcard routes
        .route("/api/flashcards", get(routes::flashcards::list))
        // Content routes
        .route("/api/content/parse", post(routes::content::parse))
        // Grading routes
        .route("/api/grade", post(routes::grade::grade))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
