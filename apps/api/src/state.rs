use std::sync::Arc;

use sqlx::PgPool;

use crate::emotion::classifier::EmotionClassifier;
use crate::recommend::books::BooksClient;
use crate::recommend::spotify::SpotifyClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Pluggable classifier, chosen once at startup: hybrid when an
    /// inference token is configured, keyword-only otherwise.
    pub classifier: Arc<dyn EmotionClassifier>,
    /// Present only when Spotify credentials are configured. Requests that
    /// need music report a configuration error when this is `None`.
    pub spotify: Option<SpotifyClient>,
    pub books: BooksClient,
}
