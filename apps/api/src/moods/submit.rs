//! The submission pipeline shared by the HTML form and the JSON endpoint.
//!
//! validate → classify → persist → trend → advice → recommend → assemble.
//! Classification and recommendation never fail the request; validation,
//! storage and missing music credentials do.

use serde::Serialize;
use tracing::info;

use crate::emotion::Emotion;
use crate::errors::AppError;
use crate::moods::advice::{advice_for, Advice};
use crate::moods::store;
use crate::moods::trend::{compute_trend, trend_message, valence_of_label, TREND_WINDOW};
use crate::moods::validation::validate_text;
use crate::recommend::books::Book;
use crate::recommend::spotify::Song;
use crate::state::AppState;

/// Everything the result page and the JSON response need for one
/// submission.
#[derive(Debug, Clone, Serialize)]
pub struct MoodMatchOutcome {
    pub primary: Emotion,
    pub secondary: Emotion,
    /// True when the keyword fallback produced the labels.
    pub is_fallback: bool,
    pub advice: Advice,
    pub trend_message: Option<&'static str>,
    pub song: Song,
    pub book: Book,
}

pub async fn process_submission(
    state: &AppState,
    raw_text: &str,
) -> Result<MoodMatchOutcome, AppError> {
    // 1. Validate before anything touches the store.
    let text = validate_text(raw_text)?;

    // 2. Classify. Total: the classifier degrades internally, never errors.
    let classification = state.classifier.classify(&text).await;
    info!(
        "Classified submission as {} / {} (fallback: {})",
        classification.primary, classification.secondary, classification.fallback
    );

    // 3. Persist. Storage failure is fatal for the request.
    store::insert_entry(&state.db, &text, classification.primary, classification.secondary)
        .await?;

    // 4. Trend over the most recent valid entries (includes this one).
    let recent = store::recent_valid_entries(&state.db, TREND_WINDOW).await?;
    let valences: Vec<f64> = recent
        .iter()
        .map(|entry| valence_of_label(&entry.primary_emotion))
        .collect();
    let trend = compute_trend(&valences);
    let trend_msg = trend.map(|t| trend_message(t, classification.primary));

    // 5. Advice is a static lookup.
    let advice = advice_for(classification.primary);

    // 6. Recommenders. Music needs configured credentials; both calls are
    //    independent and degrade to placeholders on their own.
    let spotify = state.spotify.as_ref().ok_or_else(|| {
        AppError::Configuration("Credenciales de Spotify no configuradas".to_string())
    })?;
    let (song, book) = tokio::join!(
        spotify.recommend_song(classification.primary),
        state
            .books
            .recommend_book(classification.primary, classification.secondary),
    );

    Ok(MoodMatchOutcome {
        primary: classification.primary,
        secondary: classification.secondary,
        is_fallback: classification.fallback,
        advice,
        trend_message: trend_msg,
        song,
        book,
    })
}
