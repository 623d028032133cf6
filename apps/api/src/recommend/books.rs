//! Book recommendation via the Google Books volumes API.
//!
//! No credentials needed. Same degradation policy as the music side: the
//! public method never fails, it logs and hands back the placeholder.

use std::time::Duration;

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::emotion::Emotion;
use crate::recommend::terms::{book_terms, pick};

const VOLUMES_URL: &str = "https://www.googleapis.com/books/v1/volumes";
const REQUEST_TIMEOUT_SECS: u64 = 10;
const MAX_RESULTS: u32 = 5;

/// Description excerpt length, in characters.
const DESCRIPTION_LIMIT: usize = 200;

#[derive(Debug, Error)]
pub enum BooksError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Books API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("no volumes found for '{0}'")]
    NoResults(String),
}

/// One recommended book.
#[derive(Debug, Clone, Serialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub url: String,
    pub description: String,
    /// True only on the placeholder returned when the service failed.
    pub unavailable: bool,
}

impl Book {
    pub fn placeholder() -> Self {
        Self {
            title: "Recomendación no disponible".to_string(),
            author: "Inténtalo de nuevo más tarde".to_string(),
            url: "#".to_string(),
            description: String::new(),
            unavailable: true,
        }
    }
}

// ────────────────────────── Wire types ──────────────────────────

#[derive(Debug, Deserialize)]
struct VolumesResponse {
    /// Absent entirely when the search matched nothing.
    #[serde(default)]
    items: Vec<Volume>,
}

#[derive(Debug, Clone, Deserialize)]
struct Volume {
    #[serde(rename = "volumeInfo")]
    volume_info: VolumeInfo,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct VolumeInfo {
    title: Option<String>,
    authors: Option<Vec<String>>,
    description: Option<String>,
    #[serde(rename = "infoLink")]
    info_link: Option<String>,
}

/// Google Books client. Cheap to clone.
#[derive(Clone)]
pub struct BooksClient {
    http: reqwest::Client,
}

impl BooksClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
        }
    }

    /// Recommends one book from the emotion pair. Never fails.
    pub async fn recommend_book(&self, primary: Emotion, secondary: Emotion) -> Book {
        match self.search_book(primary, secondary).await {
            Ok(book) => book,
            Err(e) => {
                warn!("Book recommendation unavailable: {e}");
                Book::placeholder()
            }
        }
    }

    async fn search_book(&self, primary: Emotion, secondary: Emotion) -> Result<Book, BooksError> {
        // One sampled subject term per emotion, joined into one query.
        let query = format!("{} {}", pick(book_terms(primary)), pick(book_terms(secondary)));
        let max_results = MAX_RESULTS.to_string();

        let response = self
            .http
            .get(VOLUMES_URL)
            .query(&[
                ("q", query.as_str()),
                ("maxResults", max_results.as_str()),
                ("langRestrict", "es"),
                ("orderBy", "relevance"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(BooksError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let volumes: VolumesResponse = response.json().await?;
        let volume = volumes
            .items
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or_else(|| BooksError::NoResults(query))?;

        Ok(book_from_volume(volume.volume_info))
    }
}

impl Default for BooksClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps volume metadata onto the response shape with the catalog defaults.
/// Descriptions are cut to an excerpt and always ellipsized.
fn book_from_volume(info: VolumeInfo) -> Book {
    let description = match info.description {
        Some(text) => {
            let excerpt: String = text.chars().take(DESCRIPTION_LIMIT).collect();
            format!("{excerpt}...")
        }
        None => String::new(),
    };

    Book {
        title: info.title.unwrap_or_else(|| "Sin título".to_string()),
        author: info
            .authors
            .map(|authors| authors.join(", "))
            .unwrap_or_else(|| "Autor desconocido".to_string()),
        url: info.info_link.unwrap_or_else(|| "#".to_string()),
        description,
        unavailable: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_is_marked() {
        let book = Book::placeholder();
        assert!(book.unavailable);
        assert_eq!(book.title, "Recomendación no disponible");
        assert_eq!(book.url, "#");
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let book = book_from_volume(VolumeInfo::default());
        assert_eq!(book.title, "Sin título");
        assert_eq!(book.author, "Autor desconocido");
        assert_eq!(book.url, "#");
        assert_eq!(book.description, "");
        assert!(!book.unavailable);
    }

    #[test]
    fn test_authors_are_joined() {
        let info = VolumeInfo {
            authors: Some(vec!["Gabriel García Márquez".to_string(), "Otro".to_string()]),
            ..VolumeInfo::default()
        };
        assert_eq!(book_from_volume(info).author, "Gabriel García Márquez, Otro");
    }

    #[test]
    fn test_description_is_truncated_to_characters() {
        let info = VolumeInfo {
            description: Some("é".repeat(DESCRIPTION_LIMIT + 50)),
            ..VolumeInfo::default()
        };
        let book = book_from_volume(info);
        assert_eq!(book.description.chars().count(), DESCRIPTION_LIMIT + 3);
        assert!(book.description.ends_with("..."));
    }

    #[test]
    fn test_short_description_still_ellipsized() {
        let info = VolumeInfo {
            description: Some("Breve.".to_string()),
            ..VolumeInfo::default()
        };
        assert_eq!(book_from_volume(info).description, "Breve....");
    }

    #[test]
    fn test_parse_volumes_response() {
        let payload = r#"{
            "kind": "books#volumes",
            "totalItems": 1,
            "items": [{
                "volumeInfo": {
                    "title": "Cien años de soledad",
                    "authors": ["Gabriel García Márquez"],
                    "description": "La novela...",
                    "infoLink": "https://books.google.com/books?id=abc"
                }
            }]
        }"#;
        let parsed: VolumesResponse = serde_json::from_str(payload).unwrap();
        assert_eq!(parsed.items.len(), 1);
        let book = book_from_volume(parsed.items[0].volume_info.clone());
        assert_eq!(book.title, "Cien años de soledad");
        assert_eq!(book.author, "Gabriel García Márquez");
    }

    #[test]
    fn test_parse_empty_results_has_no_items() {
        let payload = r#"{"kind": "books#volumes", "totalItems": 0}"#;
        let parsed: VolumesResponse = serde_json::from_str(payload).unwrap();
        assert!(parsed.items.is_empty());
    }
}
