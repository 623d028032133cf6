//! HTTP handlers for the mood JSON API.

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::entry::EmotionalEntryRow;
use crate::moods::store::{self, DailyEmotionCount, EmotionCount, DEFAULT_STATS_DAYS};
use crate::moods::submit::{process_submission, MoodMatchOutcome};
use crate::state::AppState;

// ────────────────────────── Request/Response types ──────────────────────────

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct RecentQuery {
    pub limit: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    pub is_valid: bool,
    pub review_notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    pub days: Option<i64>,
}

/// Chart-ready time series: one zero-filled count row per emotion, aligned
/// to the `dates` axis, plus overall totals for the same window.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub days: i64,
    pub dates: Vec<NaiveDate>,
    pub emotions: Vec<String>,
    pub series: Vec<StatsSeries>,
    pub totals: Vec<EmotionCount>,
}

#[derive(Debug, Serialize)]
pub struct StatsSeries {
    pub emotion: String,
    pub counts: Vec<i64>,
}

// ────────────────────────── Handlers ──────────────────────────

/// POST /api/v1/moods
/// Runs the full submission pipeline and returns the outcome bundle.
pub async fn handle_submit(
    State(state): State<AppState>,
    Json(request): Json<SubmitRequest>,
) -> Result<Json<MoodMatchOutcome>, AppError> {
    let outcome = process_submission(&state, &request.text).await?;
    Ok(Json(outcome))
}

/// GET /api/v1/moods/recent?limit=N
/// Review listing: most recent entries first, invalid ones included.
pub async fn handle_recent(
    State(state): State<AppState>,
    Query(params): Query<RecentQuery>,
) -> Result<Json<Vec<EmotionalEntryRow>>, AppError> {
    let limit = params.limit.unwrap_or(20).clamp(1, 100);
    let entries = store::recent_entries(&state.db, limit).await?;
    Ok(Json(entries))
}

/// PATCH /api/v1/moods/:id/review
/// Manual review: flips the validity flag and records reviewer notes.
pub async fn handle_review(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ReviewRequest>,
) -> Result<Json<EmotionalEntryRow>, AppError> {
    let updated = store::set_review(&state.db, id, request.is_valid, request.review_notes.as_deref())
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No existe la entrada {id}")))?;
    Ok(Json(updated))
}

/// GET /api/v1/stats?days=N
/// Per-day × per-emotion counts of valid entries over the trailing window.
pub async fn handle_stats(
    State(state): State<AppState>,
    Query(params): Query<StatsQuery>,
) -> Result<Json<StatsResponse>, AppError> {
    let days = params.days.unwrap_or(DEFAULT_STATS_DAYS).clamp(1, 365);
    let since = Utc::now() - chrono::Duration::days(days);

    let (rows, totals) = tokio::join!(
        store::daily_emotion_counts(&state.db, days),
        store::count_by_emotion(&state.db, Some(since)),
    );

    Ok(Json(assemble_stats(days, rows?, totals?)))
}

/// Derives the date and emotion axes from the grouped rows and zero-fills
/// the gaps so every series is the same length as the date axis.
fn assemble_stats(days: i64, rows: Vec<DailyEmotionCount>, totals: Vec<EmotionCount>) -> StatsResponse {
    let mut dates: Vec<NaiveDate> = rows.iter().map(|r| r.day).collect();
    dates.sort_unstable();
    dates.dedup();

    let mut emotions: Vec<String> = rows.iter().map(|r| r.emotion.clone()).collect();
    emotions.sort();
    emotions.dedup();

    let series = emotions
        .iter()
        .map(|emotion| {
            let counts = dates
                .iter()
                .map(|date| {
                    rows.iter()
                        .find(|r| &r.day == date && &r.emotion == emotion)
                        .map(|r| r.total)
                        .unwrap_or(0)
                })
                .collect();
            StatsSeries {
                emotion: emotion.clone(),
                counts,
            }
        })
        .collect();

    StatsResponse {
        days,
        dates,
        emotions,
        series,
        totals,
    }
}
