use anyhow::{Context, Result};

use crate::recommend::spotify::SpotifyCredentials;

/// Application configuration loaded from environment variables.
/// Startup fails only on the required variables; the optional service
/// credentials degrade per request instead.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Both Spotify variables set (and non-empty), or nothing.
    pub spotify: Option<SpotifyCredentials>,
    /// Absent means the external classifier stays disabled for the whole
    /// process and the keyword lexicon handles every request.
    pub huggingface_api_token: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let client_id = optional_env("SPOTIFY_CLIENT_ID");
        let client_secret = optional_env("SPOTIFY_CLIENT_SECRET");
        let spotify = match (client_id, client_secret) {
            (Some(client_id), Some(client_secret)) => Some(SpotifyCredentials {
                client_id,
                client_secret,
            }),
            _ => None,
        };

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            spotify,
            huggingface_api_token: optional_env("HUGGINGFACE_API_TOKEN"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Reads an optional variable, treating empty/blank values as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}
