mod config;
mod db;
mod emotion;
mod errors;
mod models;
mod moods;
mod recommend;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::{create_pool, ensure_schema};
use crate::emotion::classifier::{EmotionClassifier, HybridClassifier, LexiconClassifier};
use crate::emotion::external::InferenceClient;
use crate::recommend::books::BooksClient;
use crate::recommend::spotify::SpotifyClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            // Module paths use underscores regardless of the package name.
            EnvFilter::new(format!("moodmatch_api={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting MoodMatch API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;
    ensure_schema(&db).await?;

    // Classifier handle, chosen once for the process lifetime
    let classifier: Arc<dyn EmotionClassifier> = match &config.huggingface_api_token {
        Some(token) => {
            info!("External classifier enabled (model: {})", emotion::external::MODEL);
            Arc::new(HybridClassifier::new(InferenceClient::new(token.clone())))
        }
        None => {
            warn!("HUGGINGFACE_API_TOKEN not set, using the keyword classifier only");
            Arc::new(LexiconClassifier)
        }
    };

    // Recommendation clients
    let spotify = config.spotify.clone().map(SpotifyClient::new);
    match &spotify {
        Some(_) => info!("Spotify client initialized"),
        None => warn!(
            "Spotify credentials not set, music recommendations will report a configuration error"
        ),
    }
    let books = BooksClient::new();
    info!("Google Books client initialized");

    // Build app state
    let state = AppState {
        db,
        classifier,
        spotify,
        books,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
