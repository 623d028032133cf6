//! Persistence for emotional entries.
//!
//! Entries are append-only. Inserts let the database clock assign
//! `created_at`, so creation order is whatever the storage layer says it
//! is; the only mutation ever issued is the manual-review update.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgPool};
use tracing::info;
use uuid::Uuid;

use crate::emotion::Emotion;
use crate::models::entry::EmotionalEntryRow;

/// Default trailing window for the stats queries, in days.
pub const DEFAULT_STATS_DAYS: i64 = 30;

/// Valid-entry count for one emotion label.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct EmotionCount {
    pub emotion: String,
    pub total: i64,
}

/// One day × emotion bucket of the stats time series.
#[derive(Debug, Clone, FromRow)]
pub struct DailyEmotionCount {
    pub day: NaiveDate,
    pub emotion: String,
    pub total: i64,
}

/// Inserts a classified submission and returns the stored row.
pub async fn insert_entry(
    pool: &PgPool,
    text: &str,
    primary: Emotion,
    secondary: Emotion,
) -> Result<EmotionalEntryRow, sqlx::Error> {
    let row = sqlx::query_as::<_, EmotionalEntryRow>(
        r#"
        INSERT INTO emotional_entries (id, text, primary_emotion, secondary_emotion)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(text)
    .bind(primary.as_str())
    .bind(secondary.as_str())
    .fetch_one(pool)
    .await?;

    info!(
        "Recorded entry {} ({} / {})",
        row.id, row.primary_emotion, row.secondary_emotion
    );
    Ok(row)
}

/// The `n` most recent valid entries, newest first. Feeds the trend.
pub async fn recent_valid_entries(
    pool: &PgPool,
    n: i64,
) -> Result<Vec<EmotionalEntryRow>, sqlx::Error> {
    sqlx::query_as::<_, EmotionalEntryRow>(
        r#"
        SELECT * FROM emotional_entries
        WHERE is_valid = TRUE
        ORDER BY created_at DESC
        LIMIT $1
        "#,
    )
    .bind(n)
    .fetch_all(pool)
    .await
}

/// Recent entries regardless of validity, newest first. Backs the review
/// listing.
pub async fn recent_entries(pool: &PgPool, n: i64) -> Result<Vec<EmotionalEntryRow>, sqlx::Error> {
    sqlx::query_as::<_, EmotionalEntryRow>(
        r#"
        SELECT * FROM emotional_entries
        ORDER BY created_at DESC
        LIMIT $1
        "#,
    )
    .bind(n)
    .fetch_all(pool)
    .await
}

/// Applies a manual review: the validity flag and optional notes. Returns
/// `None` when the id does not exist.
pub async fn set_review(
    pool: &PgPool,
    id: Uuid,
    is_valid: bool,
    review_notes: Option<&str>,
) -> Result<Option<EmotionalEntryRow>, sqlx::Error> {
    sqlx::query_as::<_, EmotionalEntryRow>(
        r#"
        UPDATE emotional_entries
        SET is_valid = $2, review_notes = $3
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(is_valid)
    .bind(review_notes)
    .fetch_optional(pool)
    .await
}

/// Valid-entry counts grouped by primary emotion, most frequent first,
/// optionally restricted to entries at or after `since`.
pub async fn count_by_emotion(
    pool: &PgPool,
    since: Option<DateTime<Utc>>,
) -> Result<Vec<EmotionCount>, sqlx::Error> {
    sqlx::query_as::<_, EmotionCount>(
        r#"
        SELECT primary_emotion AS emotion, COUNT(*) AS total
        FROM emotional_entries
        WHERE is_valid = TRUE
          AND ($1::timestamptz IS NULL OR created_at >= $1)
        GROUP BY primary_emotion
        ORDER BY total DESC, primary_emotion
        "#,
    )
    .bind(since)
    .fetch_all(pool)
    .await
}

/// Per-day × per-emotion counts of valid entries over the trailing
/// `days`-day window, ordered by day then emotion.
pub async fn daily_emotion_counts(
    pool: &PgPool,
    days: i64,
) -> Result<Vec<DailyEmotionCount>, sqlx::Error> {
    let since = Utc::now() - chrono::Duration::days(days);

    sqlx::query_as::<_, DailyEmotionCount>(
        r#"
        SELECT date_trunc('day', created_at)::date AS day,
               primary_emotion AS emotion,
               COUNT(*) AS total
        FROM emotional_entries
        WHERE is_valid = TRUE AND created_at >= $1
        GROUP BY day, emotion
        ORDER BY day, emotion
        "#,
    )
    .bind(since)
    .fetch_all(pool)
    .await
}
