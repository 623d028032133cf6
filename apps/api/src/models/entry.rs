use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One classified submission, as stored in `emotional_entries`.
///
/// Entries are append-only: after insert, only `is_valid` and
/// `review_notes` may change (manual review). `created_at` is assigned by
/// the database clock and never updated.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EmotionalEntryRow {
    pub id: Uuid,
    pub text: String,
    pub primary_emotion: String,
    pub secondary_emotion: String,
    pub created_at: DateTime<Utc>,
    pub is_valid: bool,
    pub review_notes: Option<String>,
}
