//! Song recommendation via the Spotify Web API.
//!
//! Client-credentials auth with a process-wide cached bearer token, then a
//! track search seeded from the emotion's genre and mood-term tables. The
//! public surface never fails: any error is logged and the caller gets the
//! Spanish placeholder instead.

use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::emotion::Emotion;
use crate::recommend::terms::{music_genres, music_terms, pick};

const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const SEARCH_URL: &str = "https://api.spotify.com/v1/search";
const REQUEST_TIMEOUT_SECS: u64 = 10;
const SEARCH_LIMIT: u32 = 10;

/// Refresh the cached token this long before Spotify's stated expiry.
const TOKEN_EXPIRY_MARGIN_SECS: u64 = 60;

#[derive(Debug, Error)]
pub enum SpotifyError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Spotify API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("no tracks found for '{0}'")]
    NoResults(String),
}

/// Spotify application credentials for the client-credentials grant.
#[derive(Debug, Clone)]
pub struct SpotifyCredentials {
    pub client_id: String,
    pub client_secret: String,
}

/// One recommended track.
#[derive(Debug, Clone, Serialize)]
pub struct Song {
    pub name: String,
    pub artist: String,
    pub url: String,
    pub preview_url: Option<String>,
    /// True only on the placeholder returned when the service failed.
    pub unavailable: bool,
}

impl Song {
    /// Well-formed but clearly marked stand-in for degraded responses.
    pub fn placeholder() -> Self {
        Self {
            name: "Recomendación no disponible".to_string(),
            artist: "Inténtalo de nuevo más tarde".to_string(),
            url: "#".to_string(),
            preview_url: None,
            unavailable: true,
        }
    }
}

// ────────────────────────── Wire types ──────────────────────────

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: u64,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    tracks: TrackPage,
}

#[derive(Debug, Deserialize)]
struct TrackPage {
    items: Vec<Track>,
}

#[derive(Debug, Clone, Deserialize)]
struct Track {
    name: String,
    artists: Vec<TrackArtist>,
    external_urls: ExternalUrls,
    preview_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct TrackArtist {
    name: String,
}

#[derive(Debug, Clone, Deserialize)]
struct ExternalUrls {
    spotify: String,
}

struct CachedToken {
    value: String,
    expires_at: Instant,
}

/// Spotify Web API client. Cheap to clone; clones share the token cache.
#[derive(Clone)]
pub struct SpotifyClient {
    http: reqwest::Client,
    credentials: SpotifyCredentials,
    token: Arc<Mutex<Option<CachedToken>>>,
}

impl SpotifyClient {
    pub fn new(credentials: SpotifyCredentials) -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            credentials,
            token: Arc::new(Mutex::new(None)),
        }
    }

    /// Recommends one track for the emotion. Never fails: any error yields
    /// the placeholder and a `warn!` with the cause.
    pub async fn recommend_song(&self, emotion: Emotion) -> Song {
        match self.search_song(emotion).await {
            Ok(song) => song,
            Err(e) => {
                warn!("Song recommendation unavailable: {e}");
                Song::placeholder()
            }
        }
    }

    async fn search_song(&self, emotion: Emotion) -> Result<Song, SpotifyError> {
        let term = pick(music_terms(emotion));
        let genre = pick(music_genres(emotion));

        // Genre-qualified search first, bare mood term as a second chance.
        let query = format!("genre:{genre} {term}");
        let mut tracks = self.search_tracks(&query).await?;
        if tracks.is_empty() {
            debug!("No tracks for '{query}', retrying without genre");
            tracks = self.search_tracks(term).await?;
        }

        let track = pick_preferring_preview(&tracks)
            .ok_or_else(|| SpotifyError::NoResults(term.to_string()))?;

        Ok(Song {
            name: track.name.clone(),
            artist: track
                .artists
                .first()
                .map(|a| a.name.clone())
                .unwrap_or_else(|| "Artista desconocido".to_string()),
            url: track.external_urls.spotify.clone(),
            preview_url: track.preview_url.clone(),
            unavailable: false,
        })
    }

    async fn search_tracks(&self, query: &str) -> Result<Vec<Track>, SpotifyError> {
        let token = self.access_token().await?;
        let limit = SEARCH_LIMIT.to_string();

        let response = self
            .http
            .get(SEARCH_URL)
            .bearer_auth(&token)
            .query(&[("q", query), ("type", "track"), ("limit", limit.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SpotifyError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let page: SearchResponse = response.json().await?;
        Ok(page.tracks.items)
    }

    /// Returns a usable bearer token, requesting a fresh one when the
    /// cache is empty or near expiry. The mutex is held across the refresh
    /// so concurrent requests do not stampede the token endpoint.
    async fn access_token(&self) -> Result<String, SpotifyError> {
        let mut cached = self.token.lock().await;

        if let Some(token) = cached.as_ref() {
            if Instant::now() < token.expires_at {
                return Ok(token.value.clone());
            }
        }

        let response = self
            .http
            .post(TOKEN_URL)
            .basic_auth(&self.credentials.client_id, Some(&self.credentials.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SpotifyError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let token: TokenResponse = response.json().await?;
        let lifetime = token.expires_in.saturating_sub(TOKEN_EXPIRY_MARGIN_SECS);
        *cached = Some(CachedToken {
            value: token.access_token.clone(),
            expires_at: Instant::now() + Duration::from_secs(lifetime),
        });

        debug!("Refreshed Spotify access token (valid for {lifetime}s)");
        Ok(token.access_token)
    }
}

/// Uniform random choice among the tracks, restricted to those with a
/// playable preview when any exist.
fn pick_preferring_preview(tracks: &[Track]) -> Option<&Track> {
    let mut rng = rand::thread_rng();
    let with_preview: Vec<&Track> = tracks.iter().filter(|t| t.preview_url.is_some()).collect();
    if with_preview.is_empty() {
        tracks.choose(&mut rng)
    } else {
        with_preview.choose(&mut rng).copied()
    }
}
